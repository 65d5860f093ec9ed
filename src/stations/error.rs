use crate::types::parameter::Parameter;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum LocateStationError {
    #[error("Cannot select the closest station from an empty list of stations")]
    EmptyInput,

    #[error("No station reports all of the required parameters {required:?}")]
    NoMatchingStation { required: Vec<Parameter> },
}
