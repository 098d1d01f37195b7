use crate::errors::ConfigError;
use crate::models::{Spacecraft, SpacecraftState};
use nalgebra as na;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SpacecraftConfig {
    pub initial_state: InitialStateConfig,
    pub design_parameters: DesignParametersConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct InitialStateConfig {
    pub position: Vec<f64>, // m
    pub velocity: Vec<f64>, // m/s
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct DesignParametersConfig {
    pub mass: f64,                 // kg
    pub drag_coefficient: f64,     // dimensionless
    pub cross_sectional_area: f64, // m^2
}

fn vector3(name: &'static str, values: &[f64]) -> Result<na::Vector3<f64>, ConfigError> {
    match values {
        [x, y, z] => Ok(na::Vector3::new(*x, *y, *z)),
        _ => Err(ConfigError::invalid(
            name,
            format!("must have exactly 3 components, got {}", values.len()),
        )),
    }
}

impl SpacecraftConfig {
    /// Builds the initial spacecraft state. Domain checks (positive mass, non-origin
    /// position, ...) are done by `Scenario::validate`.
    pub fn initial_state(&self) -> Result<SpacecraftState, ConfigError> {
        let position = vector3("spacecraft.initial_state.position", &self.initial_state.position)?;
        let velocity = vector3("spacecraft.initial_state.velocity", &self.initial_state.velocity)?;
        let design = &self.design_parameters;

        Ok(SpacecraftState::new(
            Spacecraft::new(design.mass, design.drag_coefficient, design.cross_sectional_area),
            position,
            velocity,
        ))
    }
}
