use crate::errors::OutputError;
use crate::physics::environment::Environment;
use crate::simulation::SimulationResult;
use csv::Writer;
use hifitime::Duration;
use std::fs::{self, File};
use std::io;
use std::path::Path;

pub const HEADER: [&str; 11] = [
    "UTC Time",
    "Time (s)",
    "Position X (km)",
    "Position Y (km)",
    "Position Z (km)",
    "Velocity X (km/s)",
    "Velocity Y (km/s)",
    "Velocity Z (km/s)",
    "Speed (km/s)",
    "Altitude (km)",
    "Density (kg/m^3)",
];

/// Writes one row per recorded sample. Returns the number of data rows.
pub fn write_trajectory<W: io::Write>(
    writer: W,
    result: &SimulationResult,
) -> Result<usize, OutputError> {
    let mut writer = Writer::from_writer(writer);
    writer.write_record(HEADER)?;

    let params = result.parameters();
    let planet = result.planet();
    let samples = result.trajectory().samples();
    for sample in samples {
        let epoch = params.start_epoch + Duration::from_seconds(sample.time - params.start_time);
        let environment = Environment::new(&sample.position, planet);

        writer.write_record(&[
            epoch.to_string(),
            sample.time.to_string(),
            (sample.position.x / 1000.0).to_string(),
            (sample.position.y / 1000.0).to_string(),
            (sample.position.z / 1000.0).to_string(),
            (sample.velocity.x / 1000.0).to_string(),
            (sample.velocity.y / 1000.0).to_string(),
            (sample.velocity.z / 1000.0).to_string(),
            (sample.velocity.magnitude() / 1000.0).to_string(),
            (environment.altitude / 1000.0).to_string(), // Convert to km
            environment.density.to_string(),
        ])?;
    }

    writer.flush()?;
    Ok(samples.len())
}

pub fn write_trajectory_csv<P: AsRef<Path>>(
    path: P,
    result: &SimulationResult,
) -> Result<usize, OutputError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let rows = write_trajectory(File::create(path)?, result)?;
    log::info!("Wrote {} trajectory rows to {:?}", rows, path);
    Ok(rows)
}
