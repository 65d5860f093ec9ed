//! Defines the data structures representing DMI weather stations and their metadata,
//! as served by the metObs `station` collection.

use crate::geo::LatLon;
use crate::stations::locate_station::HasLocation;
use crate::types::feature::Point;
use crate::types::parameter::Parameter;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// --- Data Structures ---

/// Represents a single DMI weather station (one GeoJSON feature).
///
/// A physical station can appear several times in the collection, once per
/// validity period (`valid_from`/`valid_to`), each with its own feature `id`.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Station {
    /// The feature id (a UUID), unique per station record.
    pub id: String,
    /// Location of the station.
    pub geometry: Point,
    /// Station metadata.
    pub properties: StationProperties,
}

/// Metadata of a [`Station`].
///
/// Apart from `station_id`, every field may be absent or `null` in the API response.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct StationProperties {
    /// The DMI station identifier (e.g., "06180" for Copenhagen Airport).
    pub station_id: String,
    pub name: Option<String>,
    /// ISO 3166 alpha-3 country code (e.g., "DNK", "GRL").
    pub country: Option<String>,
    /// Operational status, usually "Active" or "Inactive".
    pub status: Option<String>,
    /// Kind of station, such as "Synop", "Pluvio" or "GIWS".
    #[serde(rename = "type")]
    pub station_type: Option<String>,
    pub owner: Option<String>,
    /// Ids of the parameters the station reports. See [`Parameter`].
    #[serde(default)]
    pub parameter_id: Vec<String>,
    pub region_id: Option<String>,
    pub wmo_station_id: Option<String>,
    pub wmo_country_code: Option<String>,
    /// Height above sea level in meters.
    pub station_height: Option<f64>,
    pub barometer_height: Option<f64>,
    pub anemometer_height: Option<f64>,
    /// Start of the validity period of this record.
    pub valid_from: Option<DateTime<Utc>>,
    /// End of the validity period of this record; `None` while current.
    pub valid_to: Option<DateTime<Utc>>,
    pub operation_from: Option<DateTime<Utc>>,
    pub operation_to: Option<DateTime<Utc>>,
    pub created: Option<DateTime<Utc>>,
    pub updated: Option<DateTime<Utc>>,
}

impl Station {
    pub fn station_id(&self) -> &str {
        &self.properties.station_id
    }

    pub fn name(&self) -> Option<&str> {
        self.properties.name.as_deref()
    }

    pub fn latitude(&self) -> f64 {
        self.geometry.latitude()
    }

    pub fn longitude(&self) -> f64 {
        self.geometry.longitude()
    }

    pub fn is_active(&self) -> bool {
        self.properties.status.as_deref() == Some("Active")
    }

    /// The reported parameters this crate knows about. Unknown ids are skipped.
    pub fn parameters(&self) -> impl Iterator<Item = Parameter> + '_ {
        self.properties
            .parameter_id
            .iter()
            .filter_map(|id| id.parse().ok())
    }

    /// Whether the station reports every parameter in `required`.
    ///
    /// An empty `required` slice is satisfied by every station.
    pub fn has_parameters(&self, required: &[Parameter]) -> bool {
        required.iter().all(|parameter| {
            self.properties
                .parameter_id
                .iter()
                .any(|id| id == parameter.as_str())
        })
    }
}

impl HasLocation for Station {
    fn lat_lon(&self) -> LatLon {
        self.geometry.lat_lon()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HORNBAEK: &str = r#"{
        "type": "Feature",
        "geometry": {"coordinates": [12.4667, 56.0833], "type": "Point"},
        "properties": {
            "anemometerHeight": null,
            "barometerHeight": null,
            "country": "DNK",
            "created": "2021-07-08T13:31:13.620475Z",
            "name": "Hornbæk",
            "operationFrom": "1872-01-01T00:00:00Z",
            "operationTo": null,
            "owner": "DMI",
            "parameterId": ["precip_past1h", "precip_past24h", "temp_dry", "not_a_parameter"],
            "regionId": null,
            "stationHeight": 12.5,
            "stationId": "05135",
            "status": "Active",
            "type": "Pluvio",
            "updated": null,
            "validFrom": "2017-11-14T00:00:00Z",
            "validTo": null,
            "wmoCountryCode": "6080",
            "wmoStationId": null
        },
        "id": "0d2c9b4e-6ae5-2d47-e5d8-8cbcb2bd4d4e"
    }"#;

    #[test]
    fn test_deserialize_station() {
        let station: Station = serde_json::from_str(HORNBAEK).unwrap();
        assert_eq!(station.station_id(), "05135");
        assert_eq!(station.name(), Some("Hornbæk"));
        assert_eq!(station.latitude(), 56.0833);
        assert_eq!(station.longitude(), 12.4667);
        assert_eq!(station.properties.station_type.as_deref(), Some("Pluvio"));
        assert_eq!(station.properties.station_height, Some(12.5));
        assert!(station.properties.valid_to.is_none());
        assert!(station.is_active());
    }

    #[test]
    fn test_parameters_skip_unknown_ids() {
        let station: Station = serde_json::from_str(HORNBAEK).unwrap();
        let parameters: Vec<_> = station.parameters().collect();
        assert_eq!(
            parameters,
            [
                Parameter::PrecipPast1h,
                Parameter::PrecipPast24h,
                Parameter::TempDry
            ]
        );
    }

    #[test]
    fn test_has_parameters() {
        let station: Station = serde_json::from_str(HORNBAEK).unwrap();
        assert!(station.has_parameters(&[]));
        assert!(station.has_parameters(&[Parameter::TempDry, Parameter::PrecipPast1h]));
        assert!(!station.has_parameters(&[Parameter::TempDry, Parameter::WindSpeed]));
    }

    #[test]
    fn test_minimal_station() {
        let station: Station = serde_json::from_str(
            r#"{"id":"x","geometry":{"coordinates":[-51.7,64.2]},"properties":{"stationId":"04250"}}"#,
        )
        .unwrap();
        assert!(station.properties.parameter_id.is_empty());
        assert!(!station.is_active());
        assert_eq!(station.lat_lon(), LatLon(64.2, -51.7));
    }
}
