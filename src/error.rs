use crate::api::error::ApiError;
use crate::config::ConfigError;
use crate::stations::error::LocateStationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DmiError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    LocateStation(#[from] LocateStationError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
