//! YAML run configuration.
//!
//! ```yaml
//! spacecraft:
//!   initial_state:
//!     position: [7000000.0, 0.0, 0.0]
//!     velocity: [0.0, 7546.0, 0.0]
//!   design_parameters:
//!     mass: 1000.0
//!     drag_coefficient: 2.2
//!     cross_sectional_area: 10.0
//! planet:
//!   mass: 5.972e24
//!   radius: 6371000.0
//!   rotation_rate: 7.2921150e-5
//!   atmosphere:
//!     atmospheric_density_model: exponential_decay
//!     sea_level_density: 1.225
//!     scale_height: 8500.0
//! physics:
//!   include_drag: true
//!   include_lift: false
//!   include_heating: false
//!   include_coriolis: false
//! simulation:
//!   start_time: 0.0
//!   end_time: 6000.0
//!   time_step_size: 1.0
//!   start_epoch: "2024-03-15T00:00:00 UTC"
//! output:
//!   csv_path: output/trajectory.csv
//!   plot_dir: plots
//! ```

pub mod physics;
pub mod planet;
pub mod simulation;
pub mod spacecraft;

pub use physics::PhysicsConfig;
pub use planet::{AtmosphereConfig, PlanetConfig};
pub use simulation::SimulationConfig;
pub use spacecraft::{DesignParametersConfig, InitialStateConfig, SpacecraftConfig};

use crate::errors::ConfigError;
use crate::simulation::Scenario;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    pub spacecraft: SpacecraftConfig,
    pub planet: PlanetConfig,
    pub physics: PhysicsConfig,
    pub simulation: SimulationConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Where the CLI writes its artifacts. Both are optional.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct OutputConfig {
    #[serde(default)]
    pub csv_path: Option<PathBuf>,
    #[serde(default)]
    pub plot_dir: Option<PathBuf>,
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("Loaded configuration from {:?}", path);
        Self::from_yaml_str(&contents)
    }

    pub fn from_yaml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(contents)?)
    }

    /// Builds and validates the run bundle. Nothing has been simulated when
    /// this returns an error.
    pub fn scenario(&self) -> Result<Scenario, ConfigError> {
        let scenario = Scenario {
            spacecraft: self.spacecraft.initial_state()?,
            planet: self.planet.planet()?,
            physics: (&self.physics).into(),
            simulation: self.simulation.parameters()?,
        };
        scenario.validate()?;
        Ok(scenario)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.scenario().map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::EARTH_ANGULAR_VELOCITY;
    use crate::physics::environment::AtmosphereModel;
    use approx::assert_relative_eq;
    use test_case::test_case;

    const VALID: &str = r#"
spacecraft:
  initial_state:
    position: [7000000.0, 0.0, 0.0]
    velocity: [0.0, 7546.0, 0.0]
  design_parameters:
    mass: 1000.0
    drag_coefficient: 2.2
    cross_sectional_area: 10.0
planet:
  mass: 5.972e24
  radius: 6371000.0
  atmosphere:
    atmospheric_density_model: exponential_decay
    sea_level_density: 1.225
    scale_height: 8500.0
physics:
  include_drag: true
  include_lift: false
  include_heating: false
  include_coriolis: false
simulation:
  start_time: 0.0
  end_time: 6000.0
  time_step_size: 1.0
"#;

    #[test]
    fn test_valid_config_builds_scenario() {
        let config = Config::from_yaml_str(VALID).unwrap();
        let scenario = config.scenario().unwrap();

        assert_relative_eq!(scenario.spacecraft.position.x, 7.0e6);
        assert_relative_eq!(scenario.spacecraft.velocity.y, 7546.0);
        assert_eq!(scenario.spacecraft.spacecraft.mass, 1000.0);
        assert_eq!(
            scenario.planet.atmosphere,
            AtmosphereModel::ExponentialDecay {
                sea_level_density: 1.225,
                scale_height: 8500.0
            }
        );
        assert!(scenario.physics.include_drag);
        assert!(!scenario.physics.include_lift);
        assert_eq!(scenario.simulation.end_time, 6000.0);
        assert_eq!(config.output, OutputConfig::default());
        assert_eq!(scenario.planet.rotation_rate, EARTH_ANGULAR_VELOCITY);
    }

    #[test]
    fn test_rotation_rate_override() {
        let text = VALID.replace(
            "  radius: 6371000.0\n",
            "  radius: 6371000.0\n  rotation_rate: 7.088e-5\n",
        );
        let scenario = Config::from_yaml_str(&text).unwrap().scenario().unwrap();
        assert_eq!(scenario.planet.rotation_rate, 7.088e-5);
    }

    #[test]
    fn test_missing_atmosphere_means_none() {
        let text = VALID.replace(
            "  atmosphere:\n    atmospheric_density_model: exponential_decay\n    sea_level_density: 1.225\n    scale_height: 8500.0\n",
            "",
        );
        let scenario = Config::from_yaml_str(&text).unwrap().scenario().unwrap();
        assert_eq!(scenario.planet.atmosphere, AtmosphereModel::None);
    }

    #[test]
    fn test_start_epoch_is_parsed() {
        let text = VALID.replace(
            "  time_step_size: 1.0\n",
            "  time_step_size: 1.0\n  start_epoch: \"2024-03-15T00:00:00 UTC\"\n",
        );
        let scenario = Config::from_yaml_str(&text).unwrap().scenario().unwrap();
        let expected = hifitime::Epoch::from_gregorian_utc_at_midnight(2024, 3, 15);
        assert_relative_eq!(
            scenario.simulation.start_epoch.to_tai_seconds(),
            expected.to_tai_seconds(),
            epsilon = 1e-3
        );
    }

    #[test]
    fn test_bad_start_epoch() {
        let text = VALID.replace(
            "  time_step_size: 1.0\n",
            "  time_step_size: 1.0\n  start_epoch: \"yesterday\"\n",
        );
        let result = Config::from_yaml_str(&text).unwrap().scenario();
        assert!(matches!(result, Err(ConfigError::InvalidEpoch(_))));
    }

    #[test]
    fn test_missing_physics_flag_is_parse_error() {
        let text = VALID.replace("  include_coriolis: false\n", "");
        assert!(matches!(
            Config::from_yaml_str(&text),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_unsupported_model_fails_at_setup() {
        let text = VALID.replace("exponential_decay", "jacchia_71");
        let result = Config::from_yaml_str(&text).unwrap().scenario();
        assert!(matches!(result, Err(ConfigError::UnsupportedModel(name)) if name == "jacchia_71"));
    }

    #[test_case("    position: [7000000.0, 0.0, 0.0]", "    position: [7000000.0, 0.0]"; "two component position")]
    #[test_case("    velocity: [0.0, 7546.0, 0.0]", "    velocity: [0.0, 7546.0, 0.0, 1.0]"; "four component velocity")]
    #[test_case("    position: [7000000.0, 0.0, 0.0]", "    position: [0.0, 0.0, 0.0]"; "position at origin")]
    #[test_case("    mass: 1000.0", "    mass: 0.0"; "zero spacecraft mass")]
    #[test_case("    drag_coefficient: 2.2", "    drag_coefficient: -2.2"; "negative drag coefficient")]
    #[test_case("    cross_sectional_area: 10.0", "    cross_sectional_area: 0.0"; "zero area")]
    #[test_case("  mass: 5.972e24", "  mass: -5.972e24"; "negative planet mass")]
    #[test_case("  radius: 6371000.0", "  radius: 0.0"; "zero radius")]
    #[test_case("    scale_height: 8500.0", "    scale_height: -1.0"; "negative scale height")]
    #[test_case("  radius: 6371000.0", "  radius: 6371000.0\n  rotation_rate: .nan"; "non-finite rotation rate")]
    #[test_case("  time_step_size: 1.0", "  time_step_size: 0.0"; "zero time step")]
    #[test_case("  end_time: 6000.0", "  end_time: -5.0"; "end before start")]
    fn test_invalid_values_rejected(from: &str, to: &str) {
        let text = VALID.replace(from, to);
        assert_ne!(text, VALID);
        let result = Config::from_yaml_str(&text).unwrap().validate();
        assert!(
            matches!(result, Err(ConfigError::InvalidParameter { .. })),
            "expected InvalidParameter, got {:?}",
            result
        );
    }

    #[test]
    fn test_missing_model_parameter() {
        let text = VALID.replace("    scale_height: 8500.0\n", "");
        let result = Config::from_yaml_str(&text).unwrap().scenario();
        assert!(matches!(
            result,
            Err(ConfigError::MissingParameter("planet.atmosphere.scale_height"))
        ));
    }

    #[test]
    fn test_missing_file() {
        let result = Config::from_file("does/not/exist.yaml");
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}
