use clap::Parser;
use reentry_sim::config::Config;
use reentry_sim::coordinates::impact_site;
use reentry_sim::output::{plot_speed, plot_trajectory, write_trajectory_csv};
use reentry_sim::physics::energy::calculate_angular_momentum;
use reentry_sim::physics::orbital::OrbitalMechanics;
use reentry_sim::simulation::Simulation;
use std::error::Error;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Propagate a point-mass spacecraft around a planet until end time or surface impact"
)]
struct Cli {
    /// YAML run configuration
    #[arg(long, default_value = "config/config.yaml")]
    config: PathBuf,
    /// Trajectory CSV destination, overrides `output.csv_path`
    #[arg(long)]
    csv: Option<PathBuf>,
    /// Directory for PNG plots, overrides `output.plot_dir`
    #[arg(long)]
    plot_dir: Option<PathBuf>,
    #[arg(long)]
    no_plots: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let config = Config::from_file(&cli.config)?;
    let scenario = config.scenario()?;
    let initial_state = scenario.spacecraft.clone();
    let initial_angular_momentum = calculate_angular_momentum(&initial_state);

    let (r0, v0) = (&initial_state.position, &initial_state.velocity);
    let semi_major_axis = OrbitalMechanics::semi_major_axis(r0, v0, scenario.planet.mass);
    let periapsis = OrbitalMechanics::periapsis_radius(r0, v0, scenario.planet.mass);
    log::info!(
        "Initial osculating orbit: a={:.1} km, periapsis altitude {:.1} km",
        semi_major_axis / 1000.0,
        (periapsis - scenario.planet.radius) / 1000.0
    );
    log::info!(
        "Unperturbed orbit intersects surface: {}",
        scenario.unperturbed_orbit_hits_surface()
    );

    let simulation = Simulation::new(scenario)?;
    let result = simulation.run();
    let outcome = result.outcome();

    log::info!("Outcome: {}", outcome);
    log::info!(
        "Relative energy drift: {:.3e}",
        result.energy_drift(&initial_state)
    );
    // Radial trajectories have no angular momentum to compare against
    if initial_angular_momentum.magnitude() > 0.0 {
        let final_angular_momentum = calculate_angular_momentum(result.final_state());
        log::info!(
            "Relative angular momentum drift: {:.3e}",
            (final_angular_momentum - initial_angular_momentum).magnitude()
                / initial_angular_momentum.magnitude()
        );
    }

    if outcome.is_surface_impact() {
        match impact_site(
            &result.final_state().position,
            outcome.time_elapsed - result.parameters().start_time,
            result.planet().rotation_rate,
        ) {
            Some(site) => log::info!("Impact site: {}", site),
            None => log::warn!("Impact site is undefined at the planet center"),
        }
    }

    let csv_path = cli
        .csv
        .or(config.output.csv_path.clone())
        .unwrap_or_else(|| PathBuf::from("output/trajectory.csv"));
    write_trajectory_csv(&csv_path, &result)?;

    if cli.no_plots {
        return Ok(());
    }
    if result.trajectory().is_empty() {
        log::warn!("No samples recorded, skipping plots");
        return Ok(());
    }

    let plot_dir = cli
        .plot_dir
        .or(config.output.plot_dir.clone())
        .unwrap_or_else(|| PathBuf::from("plots"));
    plot_trajectory(
        plot_dir.join("trajectory_xy.png"),
        &result.positions(),
        result.planet().radius,
    )?;
    plot_speed(
        plot_dir.join("speed_vs_time.png"),
        &result.times(),
        &result.velocities(),
    )?;

    Ok(())
}
