use crate::models::spacecraft::SpacecraftProperties;
use nalgebra as na;

/// Aerodynamic drag force, `-0.5 * Cd * A * rho * |v| * v`.
///
/// Written with `|v| * v` rather than `|v|² * v̂` so a spacecraft at rest gets
/// a zero force instead of a NaN direction.
pub fn drag_force<T: SpacecraftProperties>(
    spacecraft: &T,
    density: f64,
    velocity: &na::Vector3<f64>,
) -> na::Vector3<f64> {
    let v_po: f64 = velocity.magnitude();
    let coefficient: f64 =
        -0.5 * spacecraft.drag_coefficient() * spacecraft.reference_area() * density * v_po;
    velocity * coefficient
}

pub fn drag_acceleration<T: SpacecraftProperties>(
    spacecraft: &T,
    density: f64,
    velocity: &na::Vector3<f64>,
) -> na::Vector3<f64> {
    drag_force(spacecraft, density, velocity) / spacecraft.mass()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Spacecraft;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use test_case::test_case;

    #[test_case(na::Vector3::new(7_500.0, 0.0, 0.0); "prograde along x")]
    #[test_case(na::Vector3::new(-100.0, 250.0, -30.0); "arbitrary direction")]
    #[test_case(na::Vector3::new(0.0, 0.0, 1e-3); "very slow")]
    fn test_drag_opposes_velocity(velocity: na::Vector3<f64>) {
        let craft = Spacecraft::new(1_000.0, 2.2, 10.0);
        let acc = drag_acceleration(&craft, 1.0e-3, &velocity);

        assert_relative_eq!(acc.normalize(), -velocity.normalize(), max_relative = 1e-12);
        assert!(acc.dot(&velocity) < 0.0);
    }

    #[test]
    fn test_drag_magnitude() {
        // 0.5 * 2.0 * 3.0 * 0.5 * 100^2 / 10 = 1500 m/s^2
        let craft = Spacecraft::new(10.0, 2.0, 3.0);
        let acc = drag_acceleration(&craft, 0.5, &na::Vector3::new(0.0, 100.0, 0.0));
        assert_abs_diff_eq!(acc, na::Vector3::new(0.0, -1500.0, 0.0), epsilon = 1e-9);
    }

    #[test]
    fn test_drag_zero_at_rest() {
        let craft = Spacecraft::new(1_000.0, 2.2, 10.0);
        let acc = drag_acceleration(&craft, 1.225, &na::Vector3::zeros());
        assert_eq!(acc, na::Vector3::zeros());
    }

    #[test]
    fn test_drag_zero_in_vacuum() {
        let craft = Spacecraft::new(1_000.0, 2.2, 10.0);
        let acc = drag_acceleration(&craft, 0.0, &na::Vector3::new(7_000.0, 0.0, 0.0));
        assert_abs_diff_eq!(acc.magnitude(), 0.0);
    }
}
