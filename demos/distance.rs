use dmi_open_data::{closest_station, distance, LatLon, LocateStationError};

fn main() -> Result<(), LocateStationError> {
    let copenhagen = LatLon(55.6761, 12.5683);
    let cities = [
        ("Aarhus", LatLon(56.1629, 10.2039)),
        ("Odense", LatLon(55.4038, 10.4024)),
        ("Aalborg", LatLon(57.0488, 9.9217)),
        ("Nuuk", LatLon(64.1814, -51.6941)),
    ];

    for (name, city) in &cities {
        println!(
            "Copenhagen -> {}: {:.1} km",
            name,
            distance(copenhagen.0, copenhagen.1, city.0, city.1)
        );
    }

    let locations: Vec<LatLon> = cities.iter().map(|(_, location)| *location).collect();
    let closest = closest_station(LatLon(55.0, 10.0), &locations)?;
    println!("Closest to (55.0, 10.0): {:?}", closest);

    Ok(())
}
