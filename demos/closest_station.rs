use dmi_open_data::{DmiClient, DmiError, Parameter};

#[tokio::main]
async fn main() -> Result<(), DmiError> {
    let client = DmiClient::from_env()?;

    let station = client
        .get_closest_station()
        .latitude(55.707722)
        .longitude(12.562119)
        .parameters(vec![Parameter::TempDry, Parameter::WindSpeed])
        .call()
        .await?;

    println!(
        "Closest station with temperature and wind: {} {:?} at ({}, {})",
        station.station_id(),
        station.name(),
        station.latitude(),
        station.longitude()
    );

    let parameters: Vec<String> = station.parameters().map(|p| p.to_string()).collect();
    println!("Reports: {}", parameters.join(", "));

    Ok(())
}
