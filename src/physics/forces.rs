//! Force registry for the point-mass dynamics.
//!
//! Every acceleration term is a named [`ForceContribution`] carrying an
//! `enabled` flag and a plain function pointer. [`ForceModel`] sums the enabled
//! entries in registration order, so a new term is added by registering one
//! more entry rather than by touching the summation.

use super::drag::drag_acceleration;
use super::environment::Environment;
use super::gravity::gravity_acceleration;
use crate::errors::DomainError;
use crate::models::{Planet, Spacecraft, State};
use nalgebra as na;

/// Which optional physics terms a run includes. Gravity is always on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PhysicsOptions {
    pub include_drag: bool,
    /// Reserved, no effect yet.
    pub include_lift: bool,
    /// Reserved, no effect yet.
    pub include_heating: bool,
    /// Reserved, no effect yet.
    pub include_coriolis: bool,
}

impl PhysicsOptions {
    pub fn gravity_only() -> Self {
        Self::default()
    }

    pub fn with_drag() -> Self {
        Self {
            include_drag: true,
            ..Self::default()
        }
    }
}

/// Everything a force term may read besides the kinematic state.
#[derive(Debug, Clone)]
pub struct ForceContext {
    pub planet: Planet,
    pub spacecraft: Spacecraft,
}

pub type AccelerationFn = fn(&ForceContext, &State) -> Result<na::Vector3<f64>, DomainError>;

#[derive(Clone)]
pub struct ForceContribution {
    pub name: &'static str,
    pub enabled: bool,
    compute: AccelerationFn,
}

impl ForceContribution {
    pub fn new(name: &'static str, enabled: bool, compute: AccelerationFn) -> Self {
        Self {
            name,
            enabled,
            compute,
        }
    }

    pub fn evaluate(
        &self,
        context: &ForceContext,
        state: &State,
    ) -> Result<na::Vector3<f64>, DomainError> {
        (self.compute)(context, state)
    }
}

impl std::fmt::Debug for ForceContribution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ForceContribution")
            .field("name", &self.name)
            .field("enabled", &self.enabled)
            .finish()
    }
}

pub const GRAVITY: &str = "gravity";
pub const DRAG: &str = "drag";
pub const LIFT: &str = "lift";
pub const HEATING: &str = "heating";
pub const CORIOLIS: &str = "coriolis";

fn gravity_term(context: &ForceContext, state: &State) -> Result<na::Vector3<f64>, DomainError> {
    gravity_acceleration(&state.position, context.planet.mass)
}

fn drag_term(context: &ForceContext, state: &State) -> Result<na::Vector3<f64>, DomainError> {
    let environment = Environment::new(&state.position, &context.planet);
    Ok(drag_acceleration(
        &context.spacecraft,
        environment.density,
        &state.velocity,
    ))
}

// Placeholder for lift, heating and coriolis.
fn reserved_term(_: &ForceContext, _: &State) -> Result<na::Vector3<f64>, DomainError> {
    Ok(na::Vector3::zeros())
}

/// Total acceleration acting on the spacecraft.
#[derive(Debug, Clone)]
pub struct ForceModel {
    context: ForceContext,
    contributions: Vec<ForceContribution>,
}

impl ForceModel {
    pub fn new(planet: Planet, spacecraft: Spacecraft, options: &PhysicsOptions) -> Self {
        if options.include_drag && !planet.atmosphere.has_atmosphere() {
            log::warn!("Drag is enabled but the planet has no atmosphere; drag will be zero");
        }
        for (name, flag) in [
            (LIFT, options.include_lift),
            (HEATING, options.include_heating),
            (CORIOLIS, options.include_coriolis),
        ] {
            if flag {
                log::warn!("Physics term `{}` is not implemented and has no effect", name);
            }
        }

        let mut model = Self {
            context: ForceContext { planet, spacecraft },
            contributions: Vec::new(),
        };
        model.register(ForceContribution::new(GRAVITY, true, gravity_term));
        model.register(ForceContribution::new(DRAG, options.include_drag, drag_term));
        model.register(ForceContribution::new(LIFT, options.include_lift, reserved_term));
        model.register(ForceContribution::new(HEATING, options.include_heating, reserved_term));
        model.register(ForceContribution::new(CORIOLIS, options.include_coriolis, reserved_term));
        model
    }

    pub fn register(&mut self, contribution: ForceContribution) {
        log::debug!(
            "Registering force term `{}` (enabled: {})",
            contribution.name,
            contribution.enabled
        );
        self.contributions.push(contribution);
    }

    pub fn planet(&self) -> &Planet {
        &self.context.planet
    }

    pub fn spacecraft(&self) -> &Spacecraft {
        &self.context.spacecraft
    }

    pub fn enabled_terms(&self) -> Vec<&'static str> {
        self.contributions
            .iter()
            .filter(|c| c.enabled)
            .map(|c| c.name)
            .collect()
    }

    pub fn acceleration(
        &self,
        position: &na::Vector3<f64>,
        velocity: &na::Vector3<f64>,
    ) -> Result<na::Vector3<f64>, DomainError> {
        let state = State::new(*position, *velocity);
        self.contributions
            .iter()
            .filter(|c| c.enabled)
            .try_fold(
                na::Vector3::zeros(),
                |total, c| -> Result<na::Vector3<f64>, DomainError> {
                    Ok(total + c.evaluate(&self.context, &state)?)
                },
            )
    }

    /// Per-term accelerations of the enabled contributions, in registration order.
    pub fn breakdown(
        &self,
        position: &na::Vector3<f64>,
        velocity: &na::Vector3<f64>,
    ) -> Result<Vec<(&'static str, na::Vector3<f64>)>, DomainError> {
        let state = State::new(*position, *velocity);
        self.contributions
            .iter()
            .filter(|c| c.enabled)
            .map(|c| c.evaluate(&self.context, &state).map(|acc| (c.name, acc)))
            .collect()
    }
}
