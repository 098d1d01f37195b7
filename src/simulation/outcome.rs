use crate::errors::DomainError;
use std::fmt;

/// Why a run stopped advancing time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReason {
    CompletedToEndTime,
    /// The spacecraft reached the planet's surface. An expected event, not a fault.
    SurfaceImpact,
    IntegrationError,
}

impl fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TerminationReason::CompletedToEndTime => write!(f, "Completed to end time"),
            TerminationReason::SurfaceImpact => write!(f, "Surface impact"),
            TerminationReason::IntegrationError => write!(f, "Integration error"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RunOutcome {
    /// Simulation time at which the run stopped [s]
    pub time_elapsed: f64,
    pub termination_reason: TerminationReason,
    /// Number of completed integration steps
    pub steps: usize,
    /// Set only when `termination_reason` is `IntegrationError`
    pub error: Option<DomainError>,
    /// Steps that cut through the planet or blew up the speed. Nonzero means
    /// the step size is too coarse for this trajectory.
    pub coarse_steps: usize,
}

impl RunOutcome {
    pub fn is_surface_impact(&self) -> bool {
        self.termination_reason == TerminationReason::SurfaceImpact
    }

    pub fn is_error(&self) -> bool {
        self.termination_reason == TerminationReason::IntegrationError
    }
}

impl fmt::Display for RunOutcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} at t={:.3}s after {} steps",
            self.termination_reason, self.time_elapsed, self.steps
        )?;
        if let Some(error) = &self.error {
            write!(f, " ({})", error)?;
        }
        if self.coarse_steps > 0 {
            write!(f, ", {} coarse steps", self.coarse_steps)?;
        }
        Ok(())
    }
}
