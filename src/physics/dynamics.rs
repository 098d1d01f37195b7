use super::forces::ForceModel;
use crate::errors::DomainError;
use crate::models::State;

pub trait EquationsOfMotion {
    type State;

    fn compute_derivative(&self, state: &Self::State) -> Result<Self::State, DomainError>;
}

/// Translational point-mass dynamics: `dr/dt = v`, `dv/dt = a(r, v)`.
pub struct SpacecraftDynamics<'a> {
    forces: &'a ForceModel,
}

impl<'a> SpacecraftDynamics<'a> {
    pub fn new(forces: &'a ForceModel) -> Self {
        Self { forces }
    }
}

impl EquationsOfMotion for SpacecraftDynamics<'_> {
    type State = State;

    fn compute_derivative(&self, state: &State) -> Result<State, DomainError> {
        let mut derivative = State::zero();

        // Position derivative is velocity
        derivative.position = state.velocity;

        // Velocity derivative is the summed acceleration at the stage's own r and v
        derivative.velocity = self.forces.acceleration(&state.position, &state.velocity)?;

        Ok(derivative)
    }
}
