use super::gravity::G;
use crate::constants::PI;
use nalgebra as na;

pub struct OrbitalMechanics;

impl OrbitalMechanics {
    pub fn gravitational_parameter(planet_mass: f64) -> f64 {
        G * planet_mass
    }

    /// Speed of a circular orbit of the given radius [m/s]
    pub fn circular_speed(radius: f64, planet_mass: f64) -> f64 {
        (Self::gravitational_parameter(planet_mass) / radius).sqrt()
    }

    /// Keplerian period for a semi-major axis [s]
    pub fn compute_orbital_period(semi_major_axis: f64, planet_mass: f64) -> f64 {
        2.0 * PI * (semi_major_axis.powi(3) / Self::gravitational_parameter(planet_mass)).sqrt()
    }

    /// Semi-major axis from the vis-viva equation. Non-positive or infinite
    /// for escape trajectories.
    pub fn semi_major_axis(
        position: &na::Vector3<f64>,
        velocity: &na::Vector3<f64>,
        planet_mass: f64,
    ) -> f64 {
        let mu = Self::gravitational_parameter(planet_mass);
        let specific_energy = velocity.magnitude_squared() / 2.0 - mu / position.magnitude();
        -mu / (2.0 * specific_energy)
    }

    /// Closest approach of the osculating two-body orbit [m].
    pub fn periapsis_radius(
        position: &na::Vector3<f64>,
        velocity: &na::Vector3<f64>,
        planet_mass: f64,
    ) -> f64 {
        let mu = Self::gravitational_parameter(planet_mass);
        let r = position.magnitude();
        let e_vec = (position * (velocity.magnitude_squared() - mu / r)
            - velocity * position.dot(velocity))
            / mu;
        let h = position.cross(velocity).magnitude();
        let p = h * h / mu;
        p / (1.0 + e_vec.magnitude())
    }

    /// Whether the unperturbed orbit dips into a sphere of `planet_radius`.
    pub fn intersects_surface(
        position: &na::Vector3<f64>,
        velocity: &na::Vector3<f64>,
        planet_mass: f64,
        planet_radius: f64,
    ) -> bool {
        Self::periapsis_radius(position, velocity, planet_mass) <= planet_radius
    }
}
