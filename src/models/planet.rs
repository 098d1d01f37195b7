use crate::constants::{
    EARTH_ANGULAR_VELOCITY, EARTH_SCALE_HEIGHT, EARTH_SEA_LEVEL_DENSITY, M_EARTH, R_EARTH,
};
use crate::physics::environment::AtmosphereModel;

/// A spherical planet fixed at the origin of the frame.
///
/// The dynamics treat it as non-rotating. `rotation_rate` only matters when
/// an impact point is turned into latitude/longitude.
#[derive(Debug, Clone, PartialEq)]
pub struct Planet {
    pub mass: f64,          // kg
    pub radius: f64,        // m
    pub rotation_rate: f64, // rad/s about +z
    pub atmosphere: AtmosphereModel,
}

impl Planet {
    /// Rotation rate defaults to Earth's; see [`Planet::with_rotation_rate`].
    pub fn new(mass: f64, radius: f64, atmosphere: AtmosphereModel) -> Self {
        Self {
            mass,
            radius,
            rotation_rate: EARTH_ANGULAR_VELOCITY,
            atmosphere,
        }
    }

    pub fn with_rotation_rate(mut self, rotation_rate: f64) -> Self {
        self.rotation_rate = rotation_rate;
        self
    }

    /// Earth with an exponential atmosphere.
    pub fn earth() -> Self {
        Self::new(
            M_EARTH,
            R_EARTH,
            AtmosphereModel::ExponentialDecay {
                sea_level_density: EARTH_SEA_LEVEL_DENSITY,
                scale_height: EARTH_SCALE_HEIGHT,
            },
        )
    }

    pub fn altitude(&self, distance_from_center: f64) -> f64 {
        distance_from_center - self.radius
    }
}
