//! Fixed-step propagation loop.
//!
//! A [`Simulation`] is built from a validated [`Scenario`], owns its
//! spacecraft state for the whole run, and is consumed by [`Simulation::run`].
//! The trajectory and outcome are only reachable through the returned
//! [`SimulationResult`], i.e. once the run has reached a terminal state.

pub mod history;
pub mod outcome;

pub use history::{TrajectoryHistory, TrajectorySample};
pub use outcome::{RunOutcome, TerminationReason};

use crate::errors::{ConfigError, DomainError};
use crate::fsm::{SimulationFSM, SimulationStatus};
use crate::integrators::rk4::RK4;
use crate::models::{Planet, SpacecraftState, State};
use crate::physics::dynamics::SpacecraftDynamics;
use crate::physics::energy::calculate_energy;
use crate::physics::environment::AtmosphereModel;
use crate::physics::forces::{ForceModel, PhysicsOptions};
use crate::physics::orbital::OrbitalMechanics;
use hifitime::Epoch;
use nalgebra as na;

// Relative slack, in units of the step size, for snapping the clock onto end_time
const END_TIME_SNAP: f64 = 1e-9;
// Upper bound on the trajectory buffer reserved up front
const MAX_PREALLOCATED_SAMPLES: usize = 1 << 20;
// Speed gain over a single step beyond which the step is flagged as unresolved
const MAX_STEP_SPEED_GAIN: f64 = 10.0;

/// Why a completed step cannot be trusted, if it can't.
///
/// Both endpoints are above the surface here; a chord between them that dips
/// below it means the step jumped over the planet.
fn coarse_step(
    previous: &State,
    position: &na::Vector3<f64>,
    velocity: &na::Vector3<f64>,
    planet_radius: f64,
) -> Option<&'static str> {
    let chord = position - previous.position;
    let length_squared = chord.magnitude_squared();
    if length_squared > 0.0 {
        let t = (-previous.position.dot(&chord) / length_squared).clamp(0.0, 1.0);
        if (previous.position + chord * t).magnitude() <= planet_radius {
            return Some("step chord passes through the planet");
        }
    }

    let previous_speed = previous.velocity.magnitude();
    if previous_speed > 0.0 && velocity.magnitude() > MAX_STEP_SPEED_GAIN * previous_speed {
        return Some("speed grew more than tenfold in one step");
    }
    None
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationParameters {
    pub start_time: f64,     // s
    pub end_time: f64,       // s
    pub time_step_size: f64, // s
    /// UTC instant corresponding to `start_time`, used to timestamp exports.
    pub start_epoch: Epoch,
}

impl SimulationParameters {
    pub fn new(start_time: f64, end_time: f64, time_step_size: f64) -> Self {
        Self {
            start_time,
            end_time,
            time_step_size,
            start_epoch: default_epoch(),
        }
    }

    pub fn duration(&self) -> f64 {
        self.end_time - self.start_time
    }

    /// Number of steps a run takes when nothing stops it early.
    pub fn planned_steps(&self) -> usize {
        let exact = self.duration() / self.time_step_size;
        let rounded = exact.round();
        if (exact - rounded).abs() <= END_TIME_SNAP * rounded.max(1.0) {
            rounded as usize
        } else {
            exact.ceil() as usize
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.start_time.is_finite() || self.start_time < 0.0 {
            return Err(ConfigError::invalid(
                "simulation.start_time",
                format!("must be a non-negative number, got {}", self.start_time),
            ));
        }
        if !self.end_time.is_finite() || self.end_time < self.start_time {
            return Err(ConfigError::invalid(
                "simulation.end_time",
                format!(
                    "must be greater than or equal to start_time ({}), got {}",
                    self.start_time, self.end_time
                ),
            ));
        }
        if self.time_step_size == 0.0 || !self.time_step_size.is_finite() {
            return Err(ConfigError::invalid(
                "simulation.time_step_size",
                format!("must be a nonzero number, got {}", self.time_step_size),
            ));
        }
        if self.time_step_size < 0.0 {
            return Err(ConfigError::invalid(
                "simulation.time_step_size",
                format!(
                    "must be positive for forward propagation, got {}",
                    self.time_step_size
                ),
            ));
        }
        Ok(())
    }
}

/// J2000 reference instant, the default for `start_epoch`.
pub fn default_epoch() -> Epoch {
    Epoch::from_gregorian_utc_hms(2000, 1, 1, 12, 0, 0)
}

/// Validated parameter bundle a run is built from. Cloning it is how a second,
/// independent run of the same configuration is made.
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    pub spacecraft: SpacecraftState,
    pub planet: Planet,
    pub physics: PhysicsOptions,
    pub simulation: SimulationParameters,
}

fn require_positive(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::invalid(
            name,
            format!("must be greater than zero, got {}", value),
        ))
    }
}

fn require_finite(name: &'static str, vector: &na::Vector3<f64>) -> Result<(), ConfigError> {
    if vector.iter().all(|c| c.is_finite()) {
        Ok(())
    } else {
        Err(ConfigError::invalid(name, "components must be finite"))
    }
}

impl Scenario {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let craft = &self.spacecraft.spacecraft;
        require_positive("spacecraft.design_parameters.mass", craft.mass)?;
        require_positive(
            "spacecraft.design_parameters.drag_coefficient",
            craft.drag_coefficient,
        )?;
        require_positive(
            "spacecraft.design_parameters.cross_sectional_area",
            craft.cross_sectional_area,
        )?;

        require_finite("spacecraft.initial_state.position", &self.spacecraft.position)?;
        require_finite("spacecraft.initial_state.velocity", &self.spacecraft.velocity)?;
        if self.spacecraft.position == na::Vector3::zeros() {
            return Err(ConfigError::invalid(
                "spacecraft.initial_state.position",
                "cannot be the origin",
            ));
        }

        require_positive("planet.mass", self.planet.mass)?;
        require_positive("planet.radius", self.planet.radius)?;
        if !self.planet.rotation_rate.is_finite() {
            return Err(ConfigError::invalid(
                "planet.rotation_rate",
                format!("must be finite, got {}", self.planet.rotation_rate),
            ));
        }
        if let AtmosphereModel::ExponentialDecay {
            sea_level_density,
            scale_height,
        } = self.planet.atmosphere
        {
            require_positive("planet.atmosphere.sea_level_density", sea_level_density)?;
            require_positive("planet.atmosphere.scale_height", scale_height)?;
        }

        self.simulation.validate()
    }

    /// Whether the drag-free two-body orbit through the initial state reaches
    /// the surface.
    pub fn unperturbed_orbit_hits_surface(&self) -> bool {
        OrbitalMechanics::intersects_surface(
            &self.spacecraft.position,
            &self.spacecraft.velocity,
            self.planet.mass,
            self.planet.radius,
        )
    }
}

pub struct Simulation {
    params: SimulationParameters,
    forces: ForceModel,
    spacecraft: SpacecraftState,
    fsm: SimulationFSM,
    history: TrajectoryHistory,
}

impl Simulation {
    /// Builds a fresh run. Fails if the scenario breaks any domain rule, before
    /// any state is touched.
    pub fn new(scenario: Scenario) -> Result<Self, ConfigError> {
        scenario.validate()?;
        let Scenario {
            spacecraft,
            planet,
            physics,
            simulation,
        } = scenario;

        let forces = ForceModel::new(planet, spacecraft.spacecraft, &physics);
        let capacity = simulation.planned_steps().min(MAX_PREALLOCATED_SAMPLES);

        Ok(Self {
            params: simulation,
            forces,
            spacecraft,
            fsm: SimulationFSM::new(),
            history: TrajectoryHistory::with_capacity(capacity),
        })
    }

    pub fn status(&self) -> SimulationStatus {
        self.fsm.get_current_state()
    }

    pub fn forces(&self) -> &ForceModel {
        &self.forces
    }

    pub fn parameters(&self) -> &SimulationParameters {
        &self.params
    }

    /// Propagates from `start_time` until `end_time`, a surface impact, or a
    /// domain error, whichever comes first.
    pub fn run(mut self) -> SimulationResult {
        let start = self.params.start_time;
        let end = self.params.end_time;
        let dt = self.params.time_step_size;
        let planned = self.params.planned_steps();
        let planet_radius = self.forces.planet().radius;
        let progress_interval = (planned / 10).max(1);

        log::info!(
            "Starting simulation: t={}s to t={}s, dt={}s, {} steps, terms {:?}, atmosphere `{}`",
            start,
            end,
            dt,
            planned,
            self.forces.enabled_terms(),
            self.forces.planet().atmosphere.name()
        );
        if self.spacecraft.radius() <= planet_radius {
            log::warn!(
                "Initial position is {:.1} m below the surface",
                planet_radius - self.spacecraft.radius()
            );
        }

        let mut current_time = start;
        let mut steps: usize = 0;
        let mut error: Option<DomainError> = None;
        let mut coarse_steps: usize = 0;

        if current_time < end {
            self.fsm.transition_to(SimulationStatus::Running, current_time);
        }

        let integrator = RK4::new(SpacecraftDynamics::new(&self.forces));
        while current_time < end {
            let previous = self.spacecraft.kinematics();
            match integrator.integrate(&previous, dt) {
                Ok(next) => self.spacecraft.apply(next),
                Err(e) => {
                    log::error!("Integration failed at t={}s: {}", current_time, e);
                    self.fsm
                        .transition_to(SimulationStatus::HaltedOnError, current_time);
                    error = Some(e);
                    break;
                }
            }

            steps += 1;
            current_time = start + steps as f64 * dt;
            if (end - current_time).abs() <= END_TIME_SNAP * dt {
                current_time = end;
            }
            self.history.record(
                current_time,
                self.spacecraft.position,
                self.spacecraft.velocity,
            );

            if self.spacecraft.radius() <= planet_radius {
                log::info!(
                    "Surface impact at t={:.3}s, speed {:.1} m/s",
                    current_time,
                    self.spacecraft.speed()
                );
                self.fsm
                    .transition_to(SimulationStatus::HaltedOnImpact, current_time);
                break;
            }

            if let Some(reason) = coarse_step(
                &previous,
                &self.spacecraft.position,
                &self.spacecraft.velocity,
                planet_radius,
            ) {
                if coarse_steps == 0 {
                    log::warn!(
                        "Step ending at t={:.3}s is not resolved ({}); reduce time_step_size",
                        current_time,
                        reason
                    );
                }
                coarse_steps += 1;
            }

            if steps % progress_interval == 0 {
                log::debug!(
                    "t={:.1}s altitude={:.1} m speed={:.1} m/s",
                    current_time,
                    self.spacecraft.radius() - planet_radius,
                    self.spacecraft.speed()
                );
            }
        }

        if !self.fsm.is_terminal() {
            self.fsm
                .transition_to(SimulationStatus::Completed, current_time);
        }

        let status = self.fsm.get_current_state();
        let termination_reason = match status {
            SimulationStatus::HaltedOnImpact => TerminationReason::SurfaceImpact,
            SimulationStatus::HaltedOnError => TerminationReason::IntegrationError,
            _ => TerminationReason::CompletedToEndTime,
        };
        let outcome = RunOutcome {
            time_elapsed: current_time,
            termination_reason,
            steps,
            error,
            coarse_steps,
        };
        if coarse_steps > 1 {
            log::warn!("{} steps were not resolved by dt={}s", coarse_steps, dt);
        }
        log::info!("Simulation finished: {}", outcome);

        SimulationResult {
            status,
            history: self.history,
            outcome,
            final_state: self.spacecraft,
            planet: self.forces.planet().clone(),
            params: self.params,
        }
    }
}

/// Everything a finished run hands to reporting and plotting.
#[derive(Debug, Clone)]
pub struct SimulationResult {
    status: SimulationStatus,
    history: TrajectoryHistory,
    outcome: RunOutcome,
    final_state: SpacecraftState,
    planet: Planet,
    params: SimulationParameters,
}

impl SimulationResult {
    pub fn status(&self) -> SimulationStatus {
        self.status
    }

    pub fn trajectory(&self) -> &TrajectoryHistory {
        &self.history
    }

    pub fn positions(&self) -> Vec<na::Vector3<f64>> {
        self.history.positions()
    }

    pub fn velocities(&self) -> Vec<na::Vector3<f64>> {
        self.history.velocities()
    }

    pub fn times(&self) -> Vec<f64> {
        self.history.times()
    }

    pub fn outcome(&self) -> &RunOutcome {
        &self.outcome
    }

    pub fn final_state(&self) -> &SpacecraftState {
        &self.final_state
    }

    pub fn planet(&self) -> &Planet {
        &self.planet
    }

    pub fn parameters(&self) -> &SimulationParameters {
        &self.params
    }

    /// Relative change in mechanical energy between `initial` and the final
    /// state. Only meaningful as a conservation check for gravity-only runs.
    pub fn energy_drift(&self, initial: &SpacecraftState) -> f64 {
        let e0 = calculate_energy(initial, self.planet.mass);
        let e1 = calculate_energy(&self.final_state, self.planet.mass);
        (e1 - e0).abs() / e0.abs()
    }
}
