use crate::time::microseconds_to_date;
use crate::types::feature::Point;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// A single measurement from the metObs `observation` collection.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Observation {
    pub id: String,
    /// Location of the reporting station, when included by the service.
    pub geometry: Option<Point>,
    pub properties: ObservationProperties,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ObservationProperties {
    /// Id of the measured quantity, e.g. "temp_dry". Kept as a string so ids
    /// newer than [`crate::Parameter`] still decode.
    pub parameter_id: String,
    pub station_id: String,
    /// When the value was measured.
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub observed: DateTime<Utc>,
    /// When the record was stored by DMI.
    #[serde(default, deserialize_with = "deserialize_optional_timestamp")]
    pub created: Option<DateTime<Utc>>,
    pub value: f64,
}

impl Observation {
    pub fn parameter_id(&self) -> &str {
        &self.properties.parameter_id
    }

    pub fn station_id(&self) -> &str {
        &self.properties.station_id
    }

    pub fn observed(&self) -> DateTime<Utc> {
        self.properties.observed
    }

    pub fn value(&self) -> f64 {
        self.properties.value
    }
}

// Older API versions encoded timestamps as microseconds since the epoch.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawTimestamp {
    Text(DateTime<Utc>),
    Microseconds(i64),
}

impl From<RawTimestamp> for DateTime<Utc> {
    fn from(raw: RawTimestamp) -> Self {
        match raw {
            RawTimestamp::Text(dt) => dt,
            RawTimestamp::Microseconds(us) => microseconds_to_date(us),
        }
    }
}

fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    RawTimestamp::deserialize(deserializer).map(DateTime::from)
}

fn deserialize_optional_timestamp<'de, D>(
    deserializer: D,
) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<RawTimestamp>::deserialize(deserializer)?.map(DateTime::from))
}
