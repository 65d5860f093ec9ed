pub(crate) mod feature;
pub(crate) mod into_utc_trait;
pub(crate) mod observation;
pub(crate) mod parameter;
pub(crate) mod station;
pub(crate) mod time_interval;
