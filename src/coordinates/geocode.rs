use crate::constants::PI;
use nalgebra as na;
use std::fmt;

/// Spherical latitude/longitude on the planet surface, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub latitude_deg: f64,
    pub longitude_deg: f64,
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let ns = if self.latitude_deg >= 0.0 { 'N' } else { 'S' };
        let ew = if self.longitude_deg >= 0.0 { 'E' } else { 'W' };
        write!(
            f,
            "{:.4}°{} {:.4}°{}",
            self.latitude_deg.abs(),
            ns,
            self.longitude_deg.abs(),
            ew
        )
    }
}

/// Rotates an inertial position into the planet-fixed frame, assuming both
/// frames coincide at t=0 and the planet spins about +z.
pub fn inertial_to_planet_fixed(
    position: &na::Vector3<f64>,
    elapsed: f64,
    rotation_rate: f64,
) -> na::Vector3<f64> {
    let theta = (rotation_rate * elapsed) % (2.0 * PI);
    let rotation = na::Rotation3::from_axis_angle(&na::Vector3::z_axis(), -theta);
    rotation * position
}

/// Spherical coordinates of a planet-fixed position. `None` at the origin.
pub fn planet_fixed_to_geographic(position: &na::Vector3<f64>) -> Option<GeoPoint> {
    let r = position.magnitude();
    if r == 0.0 || !r.is_finite() {
        return None;
    }
    let latitude = (position.z / r).clamp(-1.0, 1.0).asin();
    let mut longitude = position.y.atan2(position.x);
    if longitude <= -PI {
        longitude += 2.0 * PI;
    }

    Some(GeoPoint {
        latitude_deg: latitude.to_degrees(),
        longitude_deg: longitude.to_degrees(),
    })
}

/// Where on the rotating planet an impact at `position`, `elapsed` seconds
/// after the start of the run, lands.
pub fn impact_site(
    position: &na::Vector3<f64>,
    elapsed: f64,
    rotation_rate: f64,
) -> Option<GeoPoint> {
    planet_fixed_to_geographic(&inertial_to_planet_fixed(position, elapsed, rotation_rate))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{EARTH_ANGULAR_VELOCITY, R_EARTH};
    use approx::assert_abs_diff_eq;
    use test_case::test_case;

    #[test_case(na::Vector3::new(R_EARTH, 0.0, 0.0), 0.0, 0.0; "prime meridian on equator")]
    #[test_case(na::Vector3::new(0.0, R_EARTH, 0.0), 0.0, 90.0; "ninety east")]
    #[test_case(na::Vector3::new(0.0, -R_EARTH, 0.0), 0.0, -90.0; "ninety west")]
    #[test_case(na::Vector3::new(-R_EARTH, 0.0, 0.0), 0.0, 180.0; "antimeridian")]
    #[test_case(na::Vector3::new(0.0, 0.0, R_EARTH), 90.0, 0.0; "north pole")]
    #[test_case(na::Vector3::new(1.0, 0.0, -1.0), -45.0, 0.0; "southern mid latitude")]
    fn test_geographic(position: na::Vector3<f64>, latitude: f64, longitude: f64) {
        let point = planet_fixed_to_geographic(&position).unwrap();
        assert_abs_diff_eq!(point.latitude_deg, latitude, epsilon = 1e-9);
        assert_abs_diff_eq!(point.longitude_deg, longitude, epsilon = 1e-9);
    }

    #[test]
    fn test_origin_has_no_coordinates() {
        assert!(planet_fixed_to_geographic(&na::Vector3::zeros()).is_none());
    }

    #[test]
    fn test_planet_rotates_under_fixed_point() {
        // After a quarter turn, an inertial point on +x sits at 90°W on the planet.
        let quarter_turn = (PI / 2.0) / EARTH_ANGULAR_VELOCITY;
        let site = impact_site(
            &na::Vector3::new(R_EARTH, 0.0, 0.0),
            quarter_turn,
            EARTH_ANGULAR_VELOCITY,
        )
        .unwrap();
        assert_abs_diff_eq!(site.latitude_deg, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(site.longitude_deg, -90.0, epsilon = 1e-6);
    }

    #[test]
    fn test_no_rotation_at_start() {
        let position = na::Vector3::new(3.0e6, 4.0e6, 2.0e6);
        let site = impact_site(&position, 0.0, EARTH_ANGULAR_VELOCITY).unwrap();
        let direct = planet_fixed_to_geographic(&position).unwrap();
        assert_abs_diff_eq!(site.latitude_deg, direct.latitude_deg, epsilon = 1e-12);
        assert_abs_diff_eq!(site.longitude_deg, direct.longitude_deg, epsilon = 1e-12);
    }

    #[test]
    fn test_display() {
        let point = GeoPoint {
            latitude_deg: -12.5,
            longitude_deg: 45.25,
        };
        assert_eq!(point.to_string(), "12.5000°S 45.2500°E");
    }
}
