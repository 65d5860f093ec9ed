//! Query-string construction for the metObs collections.

use crate::types::parameter::Parameter;
use crate::types::time_interval::TimeInterval;

pub(crate) const STATION_COLLECTION: &str = "station";
pub(crate) const OBSERVATION_COLLECTION: &str = "observation";

pub(crate) const DEFAULT_LIMIT: usize = 10_000;
pub(crate) const DEFAULT_OFFSET: usize = 0;

pub(crate) type QueryPairs = Vec<(&'static str, String)>;

pub(crate) fn stations_query(limit: usize, offset: usize) -> QueryPairs {
    vec![("limit", limit.to_string()), ("offset", offset.to_string())]
}

#[derive(Debug, Default)]
pub(crate) struct ObservationQuery<'a> {
    pub parameter: Option<Parameter>,
    pub station_id: Option<&'a str>,
    pub interval: TimeInterval,
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

impl ObservationQuery<'_> {
    pub fn into_pairs(self) -> QueryPairs {
        let mut pairs = stations_query(
            self.limit.unwrap_or(DEFAULT_LIMIT),
            self.offset.unwrap_or(DEFAULT_OFFSET),
        );
        if let Some(parameter) = self.parameter {
            pairs.push(("parameterId", parameter.to_string()));
        }
        if let Some(station_id) = self.station_id {
            pairs.push(("stationId", station_id.to_string()));
        }
        if let Some(datetime) = self.interval.to_query_value() {
            pairs.push(("datetime", datetime));
        }
        pairs
    }
}
