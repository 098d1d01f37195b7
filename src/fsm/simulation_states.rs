use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulationStatus {
    NotStarted,
    Running,
    Completed,
    HaltedOnImpact,
    HaltedOnError,
}

impl SimulationStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            SimulationStatus::Completed
                | SimulationStatus::HaltedOnImpact
                | SimulationStatus::HaltedOnError
        )
    }
}

impl fmt::Display for SimulationStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SimulationStatus::NotStarted => write!(f, "Not Started"),
            SimulationStatus::Running => write!(f, "Running"),
            SimulationStatus::Completed => write!(f, "Completed"),
            SimulationStatus::HaltedOnImpact => write!(f, "Halted On Impact"),
            SimulationStatus::HaltedOnError => write!(f, "Halted On Error"),
        }
    }
}
