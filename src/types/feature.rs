//! GeoJSON envelopes shared by the station and observation collections.

use crate::geo::LatLon;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A GeoJSON point. Coordinates are `[longitude, latitude]`, in that order.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Point {
    pub coordinates: [f64; 2],
}

impl Point {
    pub fn latitude(&self) -> f64 {
        self.coordinates[1]
    }

    pub fn longitude(&self) -> f64 {
        self.coordinates[0]
    }

    pub fn lat_lon(&self) -> LatLon {
        LatLon(self.latitude(), self.longitude())
    }
}

impl From<LatLon> for Point {
    fn from(value: LatLon) -> Self {
        Point {
            coordinates: [value.longitude(), value.latitude()],
        }
    }
}

/// The body of every `/collections/{name}/items` response.
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub(crate) struct FeatureCollection<T> {
    #[serde(default = "Vec::new")]
    pub features: Vec<T>,
    pub number_returned: Option<usize>,
    pub time_stamp: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Bare {
        id: String,
    }

    #[test]
    fn test_point_axis_order() {
        let point: Point =
            serde_json::from_str(r#"{"type":"Point","coordinates":[12.5683,55.6761]}"#).unwrap();
        assert_eq!(point.lat_lon(), LatLon(55.6761, 12.5683));
        assert_eq!(Point::from(LatLon(55.6761, 12.5683)), point);
    }

    #[test]
    fn test_collection_envelope() {
        let body = r#"{
            "type": "FeatureCollection",
            "features": [{"id": "a"}, {"id": "b"}],
            "timeStamp": "2024-01-05T10:00:00Z",
            "numberReturned": 2,
            "links": [{"href": "https://example.invalid", "rel": "self"}]
        }"#;
        let collection: FeatureCollection<Bare> = serde_json::from_str(body).unwrap();
        assert_eq!(collection.number_returned, Some(2));
        assert!(collection.time_stamp.is_some());
        let ids: Vec<_> = collection.features.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, ["a", "b"]);
    }

    #[test]
    fn test_collection_without_features() {
        let collection: FeatureCollection<Bare> =
            serde_json::from_str(r#"{"type":"FeatureCollection","numberReturned":0}"#).unwrap();
        assert!(collection.features.is_empty());
    }
}
