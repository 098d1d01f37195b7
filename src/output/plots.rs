//! PNG plots of a finished run.
//!
//! Captions and axis labels go through plotters' `ttf` backend and a system
//! font. When no usable font is found the chart is redrawn without text so a
//! run still leaves its plots behind.

use crate::errors::OutputError;
use nalgebra as na;
use plotters::prelude::*;
use std::fs;
use std::path::Path;

const KM: f64 = 1e-3;
const SIZE: (u32, u32) = (900, 800);

fn plot_error<E: std::fmt::Display>(e: E) -> OutputError {
    OutputError::Plot(e.to_string())
}

fn ensure_parent(path: &Path) -> Result<(), OutputError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}

fn select_font_family() -> FontFamily<'static> {
    if cfg!(target_os = "macos") {
        FontFamily::Name("Helvetica")
    } else if cfg!(target_os = "windows") {
        FontFamily::Name("Arial")
    } else {
        FontFamily::Name("DejaVu Sans")
    }
}

fn caption_font() -> FontDesc<'static> {
    FontDesc::new(select_font_family(), 24.0, FontStyle::Bold)
}

fn label_font() -> FontDesc<'static> {
    FontDesc::new(select_font_family(), 16.0, FontStyle::Normal)
}

fn draw_with_fallback<F>(path: &Path, draw: F) -> Result<(), OutputError>
where
    F: Fn(&Path, bool) -> Result<(), OutputError>,
{
    draw(path, true).or_else(|e| {
        log::warn!("Could not label plot {:?} ({}), drawing it without text", path, e);
        draw(path, false)
    })
}

/// Trajectory projected on the x-y plane with the planet outline, in km.
pub fn plot_trajectory<P: AsRef<Path>>(
    path: P,
    positions: &[na::Vector3<f64>],
    planet_radius: f64,
) -> Result<(), OutputError> {
    if positions.is_empty() {
        return Err(OutputError::EmptyTrajectory);
    }
    let path = path.as_ref();
    ensure_parent(path)?;

    draw_with_fallback(path, |path, labeled| {
        draw_trajectory(path, positions, planet_radius, labeled)
    })?;
    log::info!("Wrote trajectory plot to {:?}", path);
    Ok(())
}

fn draw_trajectory(
    path: &Path,
    positions: &[na::Vector3<f64>],
    planet_radius: f64,
    labeled: bool,
) -> Result<(), OutputError> {
    let extent = positions
        .iter()
        .map(|p| p.x.abs().max(p.y.abs()))
        .fold(planet_radius, f64::max)
        * KM
        * 1.1;
    let radius_km = planet_radius * KM;

    let root = BitMapBackend::new(path, SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(plot_error)?;

    let mut builder = ChartBuilder::on(&root);
    builder.margin(20);
    if labeled {
        builder
            .caption("Trajectory (x-y plane)", caption_font())
            .x_label_area_size(50)
            .y_label_area_size(90);
    }
    let mut chart = builder
        .build_cartesian_2d(-extent..extent, -extent..extent)
        .map_err(plot_error)?;

    if labeled {
        chart
            .configure_mesh()
            .x_desc("x (km)")
            .y_desc("y (km)")
            .label_style(label_font())
            .axis_desc_style(label_font())
            .draw()
            .map_err(plot_error)?;
    }

    // Axes through the planet center
    let axis = ShapeStyle::from(&BLACK.mix(0.3)).stroke_width(1);
    chart
        .draw_series([
            PathElement::new(vec![(-extent, 0.0), (extent, 0.0)], axis),
            PathElement::new(vec![(0.0, -extent), (0.0, extent)], axis),
        ])
        .map_err(plot_error)?;

    let outline: Vec<(f64, f64)> = (0..=360)
        .map(|deg| {
            let angle = (deg as f64).to_radians();
            (radius_km * angle.cos(), radius_km * angle.sin())
        })
        .collect();
    chart
        .draw_series(std::iter::once(PathElement::new(outline, BLUE.stroke_width(2))))
        .map_err(plot_error)?;

    chart
        .draw_series(LineSeries::new(
            positions.iter().map(|p| (p.x * KM, p.y * KM)),
            &RED,
        ))
        .map_err(plot_error)?;

    root.present().map_err(plot_error)?;
    Ok(())
}

/// Speed magnitude (km/s) against time (s).
pub fn plot_speed<P: AsRef<Path>>(
    path: P,
    times: &[f64],
    velocities: &[na::Vector3<f64>],
) -> Result<(), OutputError> {
    if times.is_empty() || velocities.is_empty() {
        return Err(OutputError::EmptyTrajectory);
    }
    let path = path.as_ref();
    ensure_parent(path)?;

    let speeds: Vec<(f64, f64)> = times
        .iter()
        .zip(velocities)
        .map(|(t, v)| (*t, v.magnitude() * KM))
        .collect();

    draw_with_fallback(path, |path, labeled| draw_speed(path, &speeds, labeled))?;
    log::info!("Wrote speed plot to {:?}", path);
    Ok(())
}

fn draw_speed(path: &Path, speeds: &[(f64, f64)], labeled: bool) -> Result<(), OutputError> {
    let t_min = speeds.iter().map(|(t, _)| *t).fold(f64::INFINITY, f64::min);
    let mut t_max = speeds.iter().map(|(t, _)| *t).fold(f64::NEG_INFINITY, f64::max);
    if t_max <= t_min {
        t_max = t_min + 1.0;
    }
    let v_max = speeds.iter().map(|(_, v)| *v).fold(0.0, f64::max).max(1e-3) * 1.1;

    let root = BitMapBackend::new(path, SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(plot_error)?;

    let mut builder = ChartBuilder::on(&root);
    builder.margin(20);
    if labeled {
        builder
            .caption("Speed vs time", caption_font())
            .x_label_area_size(50)
            .y_label_area_size(70);
    }
    let mut chart = builder
        .build_cartesian_2d(t_min..t_max, 0.0..v_max)
        .map_err(plot_error)?;

    if labeled {
        chart
            .configure_mesh()
            .x_desc("Time (s)")
            .y_desc("Speed (km/s)")
            .label_style(label_font())
            .axis_desc_style(label_font())
            .draw()
            .map_err(plot_error)?;
    }

    chart
        .draw_series(LineSeries::new(speeds.iter().copied(), &BLUE))
        .map_err(plot_error)?;

    root.present().map_err(plot_error)?;
    Ok(())
}
