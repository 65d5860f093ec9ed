use crate::geo::LatLon;
use crate::stations::error::LocateStationError;
use crate::types::parameter::Parameter;
use crate::types::station::Station;
use log::debug;
use ordered_float::OrderedFloat;

/// Anything with a fixed position that [`closest_station`] can rank.
pub trait HasLocation {
    fn lat_lon(&self) -> LatLon;
}

impl HasLocation for LatLon {
    fn lat_lon(&self) -> LatLon {
        *self
    }
}

/// Returns the station closest to `target`, by haversine distance.
///
/// Every station is visited once. When several stations are equally close the
/// first one in iteration order wins.
///
/// # Errors
///
/// Returns [`LocateStationError::EmptyInput`] when `stations` yields nothing.
///
/// # Examples
///
/// ```
/// use dmi_open_data::{closest_station, LatLon};
///
/// let candidates = [LatLon(56.0, 10.0), LatLon(55.7, 12.6), LatLon(57.0, 9.9)];
/// let closest = closest_station(LatLon(55.707722, 12.562119), &candidates).unwrap();
/// assert_eq!(*closest, LatLon(55.7, 12.6));
/// ```
pub fn closest_station<'a, S, I>(target: LatLon, stations: I) -> Result<&'a S, LocateStationError>
where
    S: HasLocation + 'a,
    I: IntoIterator<Item = &'a S>,
{
    // min_by_key keeps the first of equal minima.
    let (distance_km, station) = stations
        .into_iter()
        .map(|station| {
            (
                OrderedFloat(target.distance_to(&station.lat_lon())),
                station,
            )
        })
        .min_by_key(|(distance_km, _)| *distance_km)
        .ok_or(LocateStationError::EmptyInput)?;

    debug!(
        "Closest station to {:?} is at {:?}, {:.3} km away",
        target,
        station.lat_lon(),
        distance_km.into_inner()
    );
    Ok(station)
}

/// Like [`closest_station`], but only stations reporting every parameter in
/// `required` are candidates.
///
/// # Errors
///
/// Returns [`LocateStationError::EmptyInput`] when `stations` is empty and
/// [`LocateStationError::NoMatchingStation`] when none of them qualifies.
pub fn closest_station_with_parameters<'a>(
    target: LatLon,
    stations: &'a [Station],
    required: &[Parameter],
) -> Result<&'a Station, LocateStationError> {
    if stations.is_empty() {
        return Err(LocateStationError::EmptyInput);
    }
    closest_station(
        target,
        stations
            .iter()
            .filter(|station| station.has_parameters(required)),
    )
    .map_err(|_| LocateStationError::NoMatchingStation {
        required: required.to_vec(),
    })
}
