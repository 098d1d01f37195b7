use crate::physics::forces::PhysicsOptions;
use serde::Deserialize;

/// All four flags must be present in the file.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct PhysicsConfig {
    pub include_drag: bool,
    pub include_lift: bool,
    pub include_heating: bool,
    pub include_coriolis: bool,
}

impl From<&PhysicsConfig> for PhysicsOptions {
    fn from(config: &PhysicsConfig) -> Self {
        PhysicsOptions {
            include_drag: config.include_drag,
            include_lift: config.include_lift,
            include_heating: config.include_heating,
            include_coriolis: config.include_coriolis,
        }
    }
}
