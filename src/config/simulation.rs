use crate::errors::ConfigError;
use crate::simulation::{default_epoch, SimulationParameters};
use hifitime::Epoch;
use serde::Deserialize;
use std::str::FromStr;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SimulationConfig {
    pub start_time: f64,     // s
    pub end_time: f64,       // s
    pub time_step_size: f64, // s
    /// UTC instant of `start_time`, e.g. "2024-03-15T00:00:00 UTC".
    #[serde(default)]
    pub start_epoch: Option<String>,
}

impl SimulationConfig {
    pub fn parameters(&self) -> Result<SimulationParameters, ConfigError> {
        let start_epoch = match &self.start_epoch {
            Some(text) => Epoch::from_str(text.trim())
                .map_err(|e| ConfigError::InvalidEpoch(format!("`{}`: {}", text, e)))?,
            None => default_epoch(),
        };

        Ok(SimulationParameters {
            start_time: self.start_time,
            end_time: self.end_time,
            time_step_size: self.time_step_size,
            start_epoch,
        })
    }
}
