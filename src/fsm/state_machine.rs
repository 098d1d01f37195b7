use super::simulation_states::SimulationStatus;

/// Lifecycle of a single simulation run.
///
/// `NotStarted -> Running -> {Completed, HaltedOnImpact, HaltedOnError}`.
/// A run with no steps to take may also complete straight from `NotStarted`.
/// Terminal states never change again.
pub struct SimulationFSM {
    current_state: SimulationStatus,
    last_state_change: f64,
}

impl Default for SimulationFSM {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulationFSM {
    pub fn new() -> Self {
        Self {
            current_state: SimulationStatus::NotStarted,
            last_state_change: 0.0,
        }
    }

    pub fn get_current_state(&self) -> SimulationStatus {
        self.current_state
    }

    pub fn get_last_state_change(&self) -> f64 {
        self.last_state_change
    }

    pub fn can_transition_to(&self, new_state: SimulationStatus) -> bool {
        use SimulationStatus::*;
        matches!(
            (self.current_state, new_state),
            (NotStarted, Running)
                | (NotStarted, Completed)
                | (Running, Completed)
                | (Running, HaltedOnImpact)
                | (Running, HaltedOnError)
        )
    }

    /// Moves to `new_state` at simulation time `time`. Returns `false` and
    /// leaves the machine untouched when the transition is not allowed.
    pub fn transition_to(&mut self, new_state: SimulationStatus, time: f64) -> bool {
        if !self.can_transition_to(new_state) {
            log::error!(
                "Rejected state transition at t={:.2}s: {} -> {}",
                time,
                self.current_state,
                new_state
            );
            return false;
        }
        log::info!(
            "State transition at t={:.2}s: {} -> {}",
            time,
            self.current_state,
            new_state
        );
        self.current_state = new_state;
        self.last_state_change = time;
        true
    }

    pub fn is_terminal(&self) -> bool {
        self.current_state.is_terminal()
    }
}
