use crate::errors::ConfigError;
use crate::models::Planet;
use nalgebra as na;

/// Air density model of a planet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AtmosphereModel {
    /// Vacuum everywhere.
    None,
    /// `rho = sea_level_density * exp(-altitude / scale_height)`
    ExponentialDecay {
        sea_level_density: f64, // kg/m^3
        scale_height: f64,      // m
    },
}

impl AtmosphereModel {
    pub const NONE: &'static str = "none";
    pub const EXPONENTIAL_DECAY: &'static str = "exponential_decay";

    /// Resolves a configuration selector into a model.
    ///
    /// Unknown selectors are rejected here so the failure happens while the
    /// configuration is being built, never on the first density query.
    pub fn from_selector(
        name: &str,
        sea_level_density: Option<f64>,
        scale_height: Option<f64>,
    ) -> Result<Self, ConfigError> {
        match name {
            Self::NONE => Ok(AtmosphereModel::None),
            Self::EXPONENTIAL_DECAY => {
                let sea_level_density = sea_level_density
                    .ok_or(ConfigError::MissingParameter("planet.atmosphere.sea_level_density"))?;
                let scale_height = scale_height
                    .ok_or(ConfigError::MissingParameter("planet.atmosphere.scale_height"))?;
                if !(sea_level_density > 0.0 && sea_level_density.is_finite()) {
                    return Err(ConfigError::invalid(
                        "planet.atmosphere.sea_level_density",
                        format!("must be positive, got {}", sea_level_density),
                    ));
                }
                if !(scale_height > 0.0 && scale_height.is_finite()) {
                    return Err(ConfigError::invalid(
                        "planet.atmosphere.scale_height",
                        format!("must be positive, got {}", scale_height),
                    ));
                }
                Ok(AtmosphereModel::ExponentialDecay {
                    sea_level_density,
                    scale_height,
                })
            }
            other => Err(ConfigError::UnsupportedModel(other.to_string())),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            AtmosphereModel::None => Self::NONE,
            AtmosphereModel::ExponentialDecay { .. } => Self::EXPONENTIAL_DECAY,
        }
    }

    pub fn has_atmosphere(&self) -> bool {
        !matches!(self, AtmosphereModel::None)
    }

    /// Density at a given altitude above the nominal surface. Negative
    /// altitudes are allowed and simply extrapolate the model.
    pub fn density_at_altitude(&self, altitude: f64) -> f64 {
        match *self {
            AtmosphereModel::None => 0.0,
            AtmosphereModel::ExponentialDecay {
                sea_level_density,
                scale_height,
            } => sea_level_density * (-altitude / scale_height).exp(),
        }
    }

    pub fn density(&self, position: &na::Vector3<f64>, planet_radius: f64) -> f64 {
        self.density_at_altitude(position.magnitude() - planet_radius)
    }
}

/// Local conditions seen by the spacecraft at a position.
pub struct Environment {
    pub altitude: f64,
    pub density: f64,
}

impl Environment {
    pub fn new(position: &na::Vector3<f64>, planet: &Planet) -> Self {
        let altitude = planet.altitude(position.magnitude());
        let density = planet.atmosphere.density(position, planet.radius);

        Environment { altitude, density }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{EARTH_SCALE_HEIGHT, EARTH_SEA_LEVEL_DENSITY, R_EARTH};
    use approx::assert_relative_eq;
    use test_case::test_case;

    fn earth_atmosphere() -> AtmosphereModel {
        AtmosphereModel::ExponentialDecay {
            sea_level_density: EARTH_SEA_LEVEL_DENSITY,
            scale_height: EARTH_SCALE_HEIGHT,
        }
    }

    #[test]
    fn test_density_at_sea_level() {
        let model = earth_atmosphere();
        assert_eq!(model.density_at_altitude(0.0), EARTH_SEA_LEVEL_DENSITY);

        let surface = na::Vector3::new(0.0, R_EARTH, 0.0);
        assert_relative_eq!(model.density(&surface, R_EARTH), EARTH_SEA_LEVEL_DENSITY);
    }

    #[test]
    fn test_density_one_scale_height_up() {
        let model = earth_atmosphere();
        assert_relative_eq!(
            model.density_at_altitude(EARTH_SCALE_HEIGHT),
            EARTH_SEA_LEVEL_DENSITY / std::f64::consts::E,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_density_strictly_decreasing() {
        let model = earth_atmosphere();
        let altitudes = [-1_000.0, 0.0, 1.0, 10_000.0, 50_000.0, 120_000.0, 400_000.0];
        for pair in altitudes.windows(2) {
            assert!(
                model.density_at_altitude(pair[0]) > model.density_at_altitude(pair[1]),
                "density did not decrease between {} m and {} m",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn test_no_atmosphere_is_vacuum() {
        let model = AtmosphereModel::None;
        assert_eq!(model.density_at_altitude(-500.0), 0.0);
        assert_eq!(model.density_at_altitude(0.0), 0.0);
        assert!(!model.has_atmosphere());
    }

    #[test]
    fn test_environment_altitude() {
        let planet = Planet::earth();
        let env = Environment::new(&na::Vector3::new(R_EARTH + 100_000.0, 0.0, 0.0), &planet);
        assert_relative_eq!(env.altitude, 100_000.0, epsilon = 1e-6);
        assert!(env.density > 0.0 && env.density < EARTH_SEA_LEVEL_DENSITY);
    }

    #[test_case("exponential_decay", Some(1.225), Some(8500.0) => matches Ok(AtmosphereModel::ExponentialDecay { .. }); "exponential")]
    #[test_case("none", None, None => matches Ok(AtmosphereModel::None); "none")]
    #[test_case("harris_priester", Some(1.225), Some(8500.0) => matches Err(ConfigError::UnsupportedModel(_)); "unknown model")]
    #[test_case("exponential_decay", None, Some(8500.0) => matches Err(ConfigError::MissingParameter(_)); "missing density")]
    #[test_case("exponential_decay", Some(1.225), Some(0.0) => matches Err(ConfigError::InvalidParameter { .. }); "zero scale height")]
    fn test_from_selector(
        name: &str,
        density: Option<f64>,
        scale_height: Option<f64>,
    ) -> Result<AtmosphereModel, ConfigError> {
        AtmosphereModel::from_selector(name, density, scale_height)
    }
}
