use chrono::NaiveDate;
use dmi_open_data::{DmiClient, DmiError, IntoUtcDateTime, Parameter};

#[tokio::main]
async fn main() -> Result<(), DmiError> {
    let client = DmiClient::from_env()?;
    let from_time = NaiveDate::from_ymd_opt(2020, 12, 20)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.into_utc());
    let to_time = NaiveDate::from_ymd_opt(2020, 12, 24)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.into_utc());

    let observations = client
        .get_observations()
        .parameter(Parameter::TempDry)
        .station_id("06180")
        .maybe_from_time(from_time)
        .maybe_to_time(to_time)
        .limit(50)
        .call()
        .await?;

    for observation in &observations {
        println!(
            "{}  {}  {:>6.1}",
            observation.observed(),
            observation.parameter_id(),
            observation.value()
        );
    }

    Ok(())
}
