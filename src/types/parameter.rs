//! Defines the `Parameter` enum, mapping DMI metObs parameter ids to variants.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A measured quantity reported by DMI weather stations.
///
/// Each variant corresponds to a `parameterId` of the metObs API. See the
/// [DMI documentation](https://opendatadocs.dmi.govcloud.dk/Data/Meteorological_Observation_Data)
/// for units and aggregation periods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Parameter {
    /// Present air temperature (°C).
    TempDry,
    /// Present dew point temperature (°C).
    TempDew,
    /// Mean air temperature over the past hour (°C).
    TempMeanPast1h,
    /// Maximum air temperature over the past hour (°C).
    TempMaxPast1h,
    /// Minimum air temperature over the past hour (°C).
    TempMinPast1h,
    /// Maximum air temperature over the past 12 hours (°C).
    TempMaxPast12h,
    /// Minimum air temperature over the past 12 hours (°C).
    TempMinPast12h,
    /// Present grass temperature (°C).
    TempGrass,
    /// Maximum grass temperature over the past hour (°C).
    TempGrassMaxPast1h,
    /// Mean grass temperature over the past hour (°C).
    TempGrassMeanPast1h,
    /// Minimum grass temperature over the past hour (°C).
    TempGrassMinPast1h,
    /// Present soil temperature at 30 cm (°C).
    TempSoil,
    /// Maximum soil temperature over the past hour (°C).
    TempSoilMaxPast1h,
    /// Mean soil temperature over the past hour (°C).
    TempSoilMeanPast1h,
    /// Minimum soil temperature over the past hour (°C).
    TempSoilMinPast1h,
    /// Present relative humidity (%).
    Humidity,
    /// Mean relative humidity over the past hour (%).
    HumidityPast1h,
    /// Atmospheric pressure at station level (hPa).
    Pressure,
    /// Atmospheric pressure reduced to mean sea level (hPa).
    PressureAtSea,
    /// Present wind direction (degrees).
    WindDir,
    /// Mean wind direction over the past hour (degrees).
    WindDirPast1h,
    /// Present wind speed (m/s).
    WindSpeed,
    /// Mean wind speed over the past hour (m/s).
    WindSpeedPast1h,
    /// Highest three-second gust over the past hour (m/s).
    WindGustAlwaysPast1h,
    /// Highest ten-minute mean wind speed over the past ten minutes (m/s).
    WindMax,
    /// Lowest ten-minute mean wind speed over the past hour (m/s).
    WindMinPast1h,
    /// Lowest ten-minute mean wind speed over the past ten minutes (m/s).
    WindMin,
    /// Highest ten-minute mean wind speed over the past hour (m/s).
    WindMaxPer10minPast1h,
    /// Accumulated precipitation over the past minute (kg/m²).
    PrecipPast1min,
    /// Accumulated precipitation over the past ten minutes (kg/m²).
    PrecipPast10min,
    /// Accumulated precipitation over the past hour (kg/m²).
    PrecipPast1h,
    /// Accumulated precipitation over the past 24 hours (kg/m²).
    PrecipPast24h,
    /// Minutes with precipitation over the past ten minutes.
    PrecipDurPast10min,
    /// Minutes with precipitation over the past hour.
    PrecipDurPast1h,
    /// Manually measured snow depth (cm).
    SnowDepthMan,
    /// Manually observed snow cover (fraction of ground).
    SnowCoverMan,
    /// Present visibility (m).
    Visibility,
    /// Mean visibility over the past ten minutes (m).
    VisibMeanLast10min,
    /// Total cloud cover (%).
    CloudCover,
    /// Height of the lowest cloud base (m).
    CloudHeight,
    /// Present weather code.
    Weather,
    /// Mean global radiation over the past ten minutes (W/m²).
    RadiaGlob,
    /// Mean global radiation over the past hour (W/m²).
    RadiaGlobPast1h,
    /// Minutes of sunshine over the past ten minutes.
    SunLast10minGlob,
    /// Minutes of sunshine over the past hour.
    SunLast1hGlob,
    /// Minutes with leaf moisture over the past ten minutes.
    LeavHumDurPast10min,
    /// Minutes with leaf moisture over the past hour.
    LeavHumDurPast1h,
}

impl Parameter {
    /// Every parameter known to this crate, in declaration order.
    pub const ALL: [Parameter; 47] = [
        Parameter::TempDry,
        Parameter::TempDew,
        Parameter::TempMeanPast1h,
        Parameter::TempMaxPast1h,
        Parameter::TempMinPast1h,
        Parameter::TempMaxPast12h,
        Parameter::TempMinPast12h,
        Parameter::TempGrass,
        Parameter::TempGrassMaxPast1h,
        Parameter::TempGrassMeanPast1h,
        Parameter::TempGrassMinPast1h,
        Parameter::TempSoil,
        Parameter::TempSoilMaxPast1h,
        Parameter::TempSoilMeanPast1h,
        Parameter::TempSoilMinPast1h,
        Parameter::Humidity,
        Parameter::HumidityPast1h,
        Parameter::Pressure,
        Parameter::PressureAtSea,
        Parameter::WindDir,
        Parameter::WindDirPast1h,
        Parameter::WindSpeed,
        Parameter::WindSpeedPast1h,
        Parameter::WindGustAlwaysPast1h,
        Parameter::WindMax,
        Parameter::WindMinPast1h,
        Parameter::WindMin,
        Parameter::WindMaxPer10minPast1h,
        Parameter::PrecipPast1min,
        Parameter::PrecipPast10min,
        Parameter::PrecipPast1h,
        Parameter::PrecipPast24h,
        Parameter::PrecipDurPast10min,
        Parameter::PrecipDurPast1h,
        Parameter::SnowDepthMan,
        Parameter::SnowCoverMan,
        Parameter::Visibility,
        Parameter::VisibMeanLast10min,
        Parameter::CloudCover,
        Parameter::CloudHeight,
        Parameter::Weather,
        Parameter::RadiaGlob,
        Parameter::RadiaGlobPast1h,
        Parameter::SunLast10minGlob,
        Parameter::SunLast1hGlob,
        Parameter::LeavHumDurPast10min,
        Parameter::LeavHumDurPast1h,
    ];

    /// The `parameterId` string used by the API.
    ///
    /// # Examples
    ///
    /// ```
    /// use dmi_open_data::Parameter;
    ///
    /// assert_eq!(Parameter::TempDry.as_str(), "temp_dry");
    /// assert_eq!(Parameter::PrecipPast1h.to_string(), "precip_past1h");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            Parameter::TempDry => "temp_dry",
            Parameter::TempDew => "temp_dew",
            Parameter::TempMeanPast1h => "temp_mean_past1h",
            Parameter::TempMaxPast1h => "temp_max_past1h",
            Parameter::TempMinPast1h => "temp_min_past1h",
            Parameter::TempMaxPast12h => "temp_max_past12h",
            Parameter::TempMinPast12h => "temp_min_past12h",
            Parameter::TempGrass => "temp_grass",
            Parameter::TempGrassMaxPast1h => "temp_grass_max_past1h",
            Parameter::TempGrassMeanPast1h => "temp_grass_mean_past1h",
            Parameter::TempGrassMinPast1h => "temp_grass_min_past1h",
            Parameter::TempSoil => "temp_soil",
            Parameter::TempSoilMaxPast1h => "temp_soil_max_past1h",
            Parameter::TempSoilMeanPast1h => "temp_soil_mean_past1h",
            Parameter::TempSoilMinPast1h => "temp_soil_min_past1h",
            Parameter::Humidity => "humidity",
            Parameter::HumidityPast1h => "humidity_past1h",
            Parameter::Pressure => "pressure",
            Parameter::PressureAtSea => "pressure_at_sea",
            Parameter::WindDir => "wind_dir",
            Parameter::WindDirPast1h => "wind_dir_past1h",
            Parameter::WindSpeed => "wind_speed",
            Parameter::WindSpeedPast1h => "wind_speed_past1h",
            Parameter::WindGustAlwaysPast1h => "wind_gust_always_past1h",
            Parameter::WindMax => "wind_max",
            Parameter::WindMinPast1h => "wind_min_past1h",
            Parameter::WindMin => "wind_min",
            Parameter::WindMaxPer10minPast1h => "wind_max_per10min_past1h",
            Parameter::PrecipPast1min => "precip_past1min",
            Parameter::PrecipPast10min => "precip_past10min",
            Parameter::PrecipPast1h => "precip_past1h",
            Parameter::PrecipPast24h => "precip_past24h",
            Parameter::PrecipDurPast10min => "precip_dur_past10min",
            Parameter::PrecipDurPast1h => "precip_dur_past1h",
            Parameter::SnowDepthMan => "snow_depth_man",
            Parameter::SnowCoverMan => "snow_cover_man",
            Parameter::Visibility => "visibility",
            Parameter::VisibMeanLast10min => "visib_mean_last10min",
            Parameter::CloudCover => "cloud_cover",
            Parameter::CloudHeight => "cloud_height",
            Parameter::Weather => "weather",
            Parameter::RadiaGlob => "radia_glob",
            Parameter::RadiaGlobPast1h => "radia_glob_past1h",
            Parameter::SunLast10minGlob => "sun_last10min_glob",
            Parameter::SunLast1hGlob => "sun_last1h_glob",
            Parameter::LeavHumDurPast10min => "leav_hum_dur_past10min",
            Parameter::LeavHumDurPast1h => "leav_hum_dur_past1h",
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Returned when a string is not a known `parameterId`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown observation parameter '{0}'")]
pub struct UnknownParameter(pub String);

impl FromStr for Parameter {
    type Err = UnknownParameter;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Parameter::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| UnknownParameter(s.to_string()))
    }
}

/// One entry of [`crate::DmiClient::list_observation_parameters`]: the Rust
/// variant name next to the API id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParameterInfo {
    pub name: String,
    pub value: Parameter,
}

impl From<Parameter> for ParameterInfo {
    fn from(value: Parameter) -> Self {
        ParameterInfo {
            name: format!("{:?}", value),
            value,
        }
    }
}
