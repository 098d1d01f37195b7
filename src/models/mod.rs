pub mod planet;
pub mod spacecraft;
pub mod state;

pub use planet::Planet;
pub use spacecraft::{Spacecraft, SpacecraftProperties};
pub use state::{SpacecraftState, State};
