use crate::errors::ConfigError;
use crate::models::Planet;
use crate::physics::environment::AtmosphereModel;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct PlanetConfig {
    pub mass: f64,   // kg
    pub radius: f64, // m
    /// rad/s, Earth's rate when omitted. Only used to geocode the impact site.
    #[serde(default)]
    pub rotation_rate: Option<f64>,
    /// Omitted means no atmosphere.
    #[serde(default)]
    pub atmosphere: Option<AtmosphereConfig>,
}

/// Atmosphere selector plus the parameters of the selected model.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AtmosphereConfig {
    pub atmospheric_density_model: String,
    #[serde(default)]
    pub sea_level_density: Option<f64>, // kg/m^3
    #[serde(default)]
    pub scale_height: Option<f64>, // m
}

impl PlanetConfig {
    pub fn planet(&self) -> Result<Planet, ConfigError> {
        let atmosphere = match &self.atmosphere {
            None => AtmosphereModel::None,
            Some(config) => AtmosphereModel::from_selector(
                config.atmospheric_density_model.trim(),
                config.sea_level_density,
                config.scale_height,
            )?,
        };
        let planet = Planet::new(self.mass, self.radius, atmosphere);
        Ok(match self.rotation_rate {
            Some(rate) => planet.with_rotation_rate(rate),
            None => planet,
        })
    }
}
