pub(crate) mod error;
pub(crate) mod loader;
pub(crate) mod query;
