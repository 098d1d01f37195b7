use crate::errors::DomainError;
use nalgebra as na;

pub const G: f64 = 6.67430e-11; // Gravitational constant (m³/kg/s²)

/// Point-mass gravity of a planet sitting at the origin.
///
/// Returns `-G * M * r / |r|³`. A position at the origin (or with a non-finite
/// component) means the state is corrupted, so it is reported instead of
/// being patched up.
pub fn gravity_acceleration(
    position: &na::Vector3<f64>,
    planet_mass: f64,
) -> Result<na::Vector3<f64>, DomainError> {
    if !position.iter().all(|c| c.is_finite()) {
        return Err(DomainError::NonFinitePosition);
    }
    let r: f64 = position.magnitude();
    if r == 0.0 {
        return Err(DomainError::ZeroPosition);
    }
    Ok(position * (-G * planet_mass / (r * r * r)))
}
