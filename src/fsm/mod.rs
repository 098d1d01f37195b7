pub mod simulation_states;
pub mod state_machine;

pub use simulation_states::SimulationStatus;
pub use state_machine::SimulationFSM;
