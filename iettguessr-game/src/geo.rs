//! Great-circle math backing the distance scoring.

use crate::constants::EARTH_RADIUS_KM;

/// Haversine distance between two coordinates in decimal degrees, in
/// kilometres.
///
/// Pure and stateless; safe to call concurrently from any number of
/// callers. Identical coordinates yield exactly `0.0`.
#[must_use]
pub fn haversine_km(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lng = (lng2 - lng1).to_radians();
    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_coordinates_are_zero_distance() {
        assert_eq!(haversine_km(41.0428, 29.0056, 41.0428, 29.0056), 0.0);
    }

    #[test]
    fn distance_is_symmetric() {
        let ab = haversine_km(40.9928, 29.0261, 41.0428, 29.0056);
        let ba = haversine_km(41.0428, 29.0056, 40.9928, 29.0261);
        assert!((ab - ba).abs() < 1e-9);
    }

    #[test]
    fn one_degree_of_latitude_is_about_111_km() {
        let d = haversine_km(40.0, 29.0, 41.0, 29.0);
        assert!((d - 111.2).abs() < 1.0, "got {d}");
    }
}
