mod api;
mod config;
mod dmi;
mod error;
mod geo;
mod stations;
mod time;
mod types;

pub use dmi::*;
pub use error::DmiError;

pub use config::{ClientConfig, ConfigError, API_KEY_VAR, BASE_URL_VAR, DEFAULT_BASE_URL};
pub use geo::{distance, LatLon, EARTH_DIAMETER_KM, EARTH_RADIUS_KM};
pub use time::{date_to_microseconds, microseconds_to_date};

pub use stations::locate_station::{closest_station, closest_station_with_parameters, HasLocation};

pub use types::feature::Point;
pub use types::into_utc_trait::IntoUtcDateTime;
pub use types::observation::{Observation, ObservationProperties};
pub use types::parameter::{Parameter, ParameterInfo, UnknownParameter};
pub use types::station::{Station, StationProperties};
pub use types::time_interval::TimeInterval;

pub use api::error::ApiError;
pub use stations::error::LocateStationError;
