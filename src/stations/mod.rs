pub(crate) mod error;
pub(crate) mod locate_station;
