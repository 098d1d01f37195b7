use crate::models::spacecraft::{Spacecraft, SpacecraftProperties};
use nalgebra as na;

/// Kinematic state integrated by RK4. The same shape carries its own time
/// derivative (velocity, acceleration).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct State {
    pub position: na::Vector3<f64>,
    pub velocity: na::Vector3<f64>,
}

impl State {
    pub fn new(position: na::Vector3<f64>, velocity: na::Vector3<f64>) -> Self {
        State { position, velocity }
    }

    pub fn zero() -> Self {
        State {
            position: na::Vector3::zeros(),
            velocity: na::Vector3::zeros(),
        }
    }
}

impl std::ops::Add for State {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        State {
            position: self.position + other.position,
            velocity: self.velocity + other.velocity,
        }
    }
}

impl std::ops::Mul<f64> for State {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        State {
            position: self.position * scalar,
            velocity: self.velocity * scalar,
        }
    }
}

/// The spacecraft being propagated: physical properties plus the
/// position/velocity that the simulation loop replaces after every step.
#[derive(Debug, Clone, PartialEq)]
pub struct SpacecraftState {
    pub spacecraft: Spacecraft,

    // Orbital state, planet-centered inertial frame
    pub position: na::Vector3<f64>,
    pub velocity: na::Vector3<f64>,
}

impl SpacecraftState {
    pub fn new(
        spacecraft: Spacecraft,
        position: na::Vector3<f64>,
        velocity: na::Vector3<f64>,
    ) -> Self {
        SpacecraftState {
            spacecraft,
            position,
            velocity,
        }
    }

    pub fn kinematics(&self) -> State {
        State::new(self.position, self.velocity)
    }

    pub fn apply(&mut self, state: State) {
        self.position = state.position;
        self.velocity = state.velocity;
    }

    pub fn radius(&self) -> f64 {
        self.position.magnitude()
    }

    pub fn speed(&self) -> f64 {
        self.velocity.magnitude()
    }
}

impl SpacecraftProperties for SpacecraftState {
    fn mass(&self) -> f64 {
        self.spacecraft.mass()
    }

    fn drag_coefficient(&self) -> f64 {
        self.spacecraft.drag_coefficient()
    }

    fn reference_area(&self) -> f64 {
        self.spacecraft.reference_area()
    }
}
