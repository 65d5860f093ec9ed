use dmi_open_data::{DmiClient, DmiError};

#[tokio::main]
async fn main() -> Result<(), DmiError> {
    let client = DmiClient::from_env()?;
    let stations = client.get_stations().limit(25).call().await?;

    println!("Fetched {} stations", stations.len());
    for station in stations.iter().filter(|s| s.is_active()) {
        println!(
            "{:>6}  {:<32} ({:.4}, {:.4})  {} parameters",
            station.station_id(),
            station.name().unwrap_or("<unnamed>"),
            station.latitude(),
            station.longitude(),
            station.properties.parameter_id.len()
        );
    }

    Ok(())
}
