pub mod drag;
pub mod dynamics;
pub mod energy;
pub mod environment;
pub mod forces;
pub mod gravity;
pub mod orbital;
