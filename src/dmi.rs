//! This module provides the main entry point for interacting with the DMI open-data
//! metObs service. It fetches weather stations and observations and finds the
//! station closest to a geographical location.

use crate::api::loader::ApiLoader;
use crate::api::query::{
    stations_query, ObservationQuery, DEFAULT_LIMIT, DEFAULT_OFFSET, OBSERVATION_COLLECTION,
    STATION_COLLECTION,
};
use crate::config::ClientConfig;
use crate::error::DmiError;
use crate::geo::LatLon;
use crate::stations::locate_station::closest_station_with_parameters;
use crate::types::observation::Observation;
use crate::types::parameter::{Parameter, ParameterInfo};
use crate::types::station::Station;
use crate::types::time_interval::TimeInterval;
use bon::bon;
use chrono::{DateTime, Utc};
use log::info;

/// The main client struct for accessing DMI meteorological observation data.
///
/// Each call performs exactly one HTTP request; nothing is cached or retried.
///
/// Create an instance using [`DmiClient::new()`] for the public defaults,
/// [`DmiClient::from_env()`] to pick up `DMI_API_KEY`/`DMI_BASE_URL`, or
/// [`DmiClient::with_config()`] for full control.
///
/// # Examples
///
/// ```rust
/// # use dmi_open_data::{DmiClient, DmiError};
/// # fn run() -> Result<(), DmiError> {
/// let client = DmiClient::new()?;
/// # Ok(())
/// # }
/// ```
pub struct DmiClient {
    loader: ApiLoader,
}

#[bon]
impl DmiClient {
    /// Creates a client for the public metObs endpoint without an API key.
    ///
    /// # Errors
    ///
    /// Returns [`DmiError::Api`] if the underlying HTTP client cannot be built.
    pub fn new() -> Result<Self, DmiError> {
        Self::with_config(ClientConfig::default())
    }

    /// Creates a client configured from the `DMI_API_KEY` and `DMI_BASE_URL`
    /// environment variables. See [`ClientConfig::from_env`].
    ///
    /// # Errors
    ///
    /// Returns [`DmiError::Config`] if a variable is not unicode or the base URL is invalid.
    pub fn from_env() -> Result<Self, DmiError> {
        Self::with_config(ClientConfig::from_env()?)
    }

    /// Creates a client from an explicit [`ClientConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`DmiError::Config`] if `config.base_url` is not an http(s) URL and
    /// [`DmiError::Api`] if the HTTP client cannot be built.
    pub fn with_config(config: ClientConfig) -> Result<Self, DmiError> {
        config.validate()?;
        Ok(Self {
            loader: ApiLoader::new(config)?,
        })
    }

    /// Fetches weather station metadata.
    ///
    /// This method uses a builder pattern.
    ///
    /// # Arguments
    ///
    /// * `.limit(usize)`: Optional. Maximum number of stations to return. Defaults to `10000`.
    /// * `.offset(usize)`: Optional. Number of stations to skip. Defaults to `0`.
    ///
    /// # Errors
    ///
    /// Returns [`DmiError::Api`] on network failures, non-success HTTP statuses and
    /// undecodable responses.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use dmi_open_data::{DmiClient, DmiError};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), DmiError> {
    /// let client = DmiClient::new()?;
    /// let stations = client.get_stations().limit(10).call().await?;
    /// assert!(stations.len() <= 10);
    /// # Ok(())
    /// # }
    /// ```
    #[builder]
    pub async fn get_stations(
        &self,
        limit: Option<usize>,
        offset: Option<usize>,
    ) -> Result<Vec<Station>, DmiError> {
        let query = stations_query(
            limit.unwrap_or(DEFAULT_LIMIT),
            offset.unwrap_or(DEFAULT_OFFSET),
        );
        Ok(self
            .loader
            .get_features(STATION_COLLECTION, query)
            .await?)
    }

    /// Fetches raw observations, newest first as served by DMI.
    ///
    /// This method uses a builder pattern. Every filter is optional.
    ///
    /// # Arguments
    ///
    /// * `.parameter(Parameter)`: Only observations of this quantity.
    /// * `.station_id(&str)`: Only observations from this station (e.g. `"06180"`).
    /// * `.from_time(DateTime<Utc>)`: Only observations at or after this instant.
    /// * `.to_time(DateTime<Utc>)`: Only observations at or before this instant.
    /// * `.limit(usize)`: Maximum number of observations. Defaults to `10000`.
    /// * `.offset(usize)`: Number of observations to skip. Defaults to `0`.
    ///
    /// Use [`crate::IntoUtcDateTime::into_utc`] to pass naive or offset timestamps.
    ///
    /// # Errors
    ///
    /// Returns [`DmiError::Api`] on network failures, non-success HTTP statuses and
    /// undecodable responses.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use dmi_open_data::{DmiClient, DmiError, IntoUtcDateTime, Parameter};
    /// # use chrono::NaiveDate;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), DmiError> {
    /// let client = DmiClient::new()?;
    /// let observations = client
    ///     .get_observations()
    ///     .parameter(Parameter::TempDry)
    ///     .station_id("06180")
    ///     .from_time(NaiveDate::from_ymd_opt(2020, 12, 20).unwrap().into_utc())
    ///     .to_time(NaiveDate::from_ymd_opt(2020, 12, 24).unwrap().into_utc())
    ///     .limit(100)
    ///     .call()
    ///     .await?;
    /// for observation in &observations {
    ///     println!("{} {}", observation.observed(), observation.value());
    /// }
    /// # Ok(())
    /// # }
    /// ```
    #[builder]
    pub async fn get_observations(
        &self,
        parameter: Option<Parameter>,
        station_id: Option<&str>,
        from_time: Option<DateTime<Utc>>,
        to_time: Option<DateTime<Utc>>,
        limit: Option<usize>,
        offset: Option<usize>,
    ) -> Result<Vec<Observation>, DmiError> {
        let query = ObservationQuery {
            parameter,
            station_id,
            interval: TimeInterval {
                from: from_time,
                to: to_time,
            },
            limit,
            offset,
        };
        Ok(self
            .loader
            .get_features(OBSERVATION_COLLECTION, query.into_pairs())
            .await?)
    }

    /// Lists every observation parameter this client knows about.
    ///
    /// No request is made; the list is compiled into the crate.
    pub fn list_observation_parameters(&self) -> Vec<ParameterInfo> {
        Parameter::ALL.into_iter().map(ParameterInfo::from).collect()
    }

    /// Finds the station closest to a geographical location.
    ///
    /// Downloads the full station list (one request) and scans it linearly.
    ///
    /// # Arguments
    ///
    /// * `.latitude(f64)`: **Required.** Latitude in decimal degrees.
    /// * `.longitude(f64)`: **Required.** Longitude in decimal degrees.
    /// * `.parameters(Vec<Parameter>)`: Optional. Only stations reporting all of these are candidates.
    ///
    /// # Errors
    ///
    /// Returns [`DmiError::Api`] if the station list cannot be fetched and
    /// [`DmiError::LocateStation`] if it is empty or no station reports the
    /// required parameters.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use dmi_open_data::{DmiClient, DmiError, Parameter};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), DmiError> {
    /// let client = DmiClient::new()?;
    /// let station = client
    ///     .get_closest_station()
    ///     .latitude(55.707722)
    ///     .longitude(12.562119)
    ///     .parameters(vec![Parameter::TempDry])
    ///     .call()
    ///     .await?;
    /// println!("Closest station: {:?}", station.name());
    /// # Ok(())
    /// # }
    /// ```
    #[builder]
    pub async fn get_closest_station(
        &self,
        latitude: f64,
        longitude: f64,
        parameters: Option<Vec<Parameter>>,
    ) -> Result<Station, DmiError> {
        let stations = self.get_stations().call().await?;
        let required = parameters.unwrap_or_default();
        let station =
            closest_station_with_parameters(LatLon(latitude, longitude), &stations, &required)?;
        info!(
            "Closest station to ({}, {}) out of {}: {} ({:?})",
            latitude,
            longitude,
            stations.len(),
            station.station_id(),
            station.name()
        );
        Ok(station.clone())
    }
}
