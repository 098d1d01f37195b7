use super::gravity::G;
use crate::models::spacecraft::SpacecraftProperties;
use crate::models::state::SpacecraftState;
use nalgebra as na;

/// Total mechanical energy (J) of the spacecraft about a point-mass planet.
pub fn calculate_energy(state: &SpacecraftState, planet_mass: f64) -> f64 {
    let r = state.position.magnitude();
    let v = state.velocity.magnitude();
    let mass = state.mass();

    let kinetic = 0.5 * mass * v * v;
    let potential = -G * planet_mass * mass / r;

    kinetic + potential
}

pub fn calculate_angular_momentum(state: &SpacecraftState) -> na::Vector3<f64> {
    state.position.cross(&(state.velocity * state.mass()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{M_EARTH, R_EARTH};
    use crate::models::Spacecraft;
    use approx::assert_abs_diff_eq;
    use test_case::test_case;

    fn state(position: na::Vector3<f64>, velocity: na::Vector3<f64>, mass: f64) -> SpacecraftState {
        SpacecraftState::new(Spacecraft::new(mass, 2.2, 1.0), position, velocity)
    }

    #[test_case(
        state(na::Vector3::new(R_EARTH, 0.0, 0.0), na::Vector3::zeros(), 100.0),
        -6256305069.84;
        "energy at Earth's surface"
    )]
    #[test_case(
        state(na::Vector3::new(0.0, R_EARTH, 0.0), na::Vector3::new(0.0, 0.0, 1_000.0), 100.0),
        -6256305069.84 + 0.5 * 100.0 * 1.0e6;
        "moving at Earth's surface"
    )]
    fn test_energy(state: SpacecraftState, expected_energy: f64) {
        assert_abs_diff_eq!(calculate_energy(&state, M_EARTH), expected_energy, epsilon = 1e-2);
    }

    #[test_case(
        state(na::Vector3::new(R_EARTH, 0.0, 0.0), na::Vector3::zeros(), 1.0),
        na::Vector3::new(0.0, 0.0, 0.0);
        "zero angular momentum"
    )]
    #[test_case(
        state(na::Vector3::new(R_EARTH + 100e3, 0.0, 0.0), na::Vector3::new(0.0, 7.848e3, 0.0), 100.0),
        na::Vector3::new(0.0, 0.0, 5.0784408e12);
        "100 km orbit angular momentum"
    )]
    fn test_angular_momentum(state: SpacecraftState, expected_momentum: na::Vector3<f64>) {
        let result = calculate_angular_momentum(&state);
        assert_abs_diff_eq!(result, expected_momentum, epsilon = 1e6);
    }
}
