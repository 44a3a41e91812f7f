//! Titration curve plotting
//!
//! Renders the pH-vs-volume curve a session accumulated. The pH axis is
//! fixed to the full 0..14 scale so curves from different regimes are
//! visually comparable, and the characteristic equivalence jump reads at
//! a glance.
//!
//! # Available functions
//!
//! - [`plot_titration_curve`]             - single session: pH vs titrant volume
//! - [`plot_titration_curves_comparison`] - overlay several sessions on the same axes
//!
//! # Usage
//!
//! ```rust,ignore
//! use titrate_rs::output::visualization::{plot_titration_curve, PlotConfig};
//!
//! let driver = TickDriver::default();
//! driver.run_to_completion(&mut session)?;
//! plot_titration_curve(&session, "curve.png", None)?;
//! ```

use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::types::RangedCoordf64;
use plotters::prelude::*;
use std::error::Error;

use crate::session::TitrationSession;
use super::config::{band_color, PlotConfig, NO_TITLE};

/// Full pH scale drawn on the Y axis
const PH_AXIS_MAX: f64 = 14.0;

/// Vertical extent of one dash of the equivalence marker, in pH units
const DASH_STEP_PH: f64 = 0.25;

// =================================================================================================
// Public API
// =================================================================================================

/// Plot one session's titration curve (pH vs volume of base added)
///
/// Draws the accumulated samples as a line, an optional dashed vertical
/// marker at the equivalence volume, and an optional filled circle on
/// the most recent sample tinted by its pH color band.
///
/// The equivalence marker is drawn only when the crossing volume lies
/// inside the plotted volume range.
///
/// # Arguments
///
/// * `session`     - Session whose samples to plot
/// * `output_path` - Output file path (`.png` for bitmap, `.svg` for vector)
/// * `config`      - Optional plot configuration; `None` uses defaults
///
/// # Errors
///
/// Returns `Err` if the session holds no samples or the backend cannot
/// write to `output_path`.
pub fn plot_titration_curve(
    session: &TitrationSession,
    output_path: &str,
    config: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    if session.samples().is_empty() {
        return Err("Session holds no curve samples".into());
    }

    let default_config = PlotConfig::titration_curve(NO_TITLE);
    let config = config.unwrap_or(&default_config);

    let max_volume = session.config().max_volume_ml;

    match extension_of(output_path) {
        "svg" => {
            let backend = SVGBackend::new(output_path, (config.width, config.height));
            plot_curve_impl(backend, session, config, max_volume)
        }
        _ => {
            let backend = BitMapBackend::new(output_path, (config.width, config.height));
            plot_curve_impl(backend, session, config, max_volume)
        }
    }
}

/// Plot several sessions' curves overlaid for comparison
///
/// Useful for comparing regimes, concentrations or dosing strategies on
/// the same axes. Each curve is drawn with a distinct palette color;
/// equivalence markers (when enabled) use the matching color.
///
/// # Arguments
///
/// * `datasets`    - Vec of `(label, session)` pairs
/// * `output_path` - Output file path (`.png` or `.svg`)
/// * `config`      - Optional plot configuration
///
/// # Errors
///
/// Returns `Err` if `datasets` is empty or the backend fails.
pub fn plot_titration_curves_comparison(
    datasets: Vec<(&str, &TitrationSession)>,
    output_path: &str,
    config: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    if datasets.is_empty() {
        return Err("No datasets provided".into());
    }

    let default_config = PlotConfig::comparison(NO_TITLE);
    let config = config.unwrap_or(&default_config);

    let max_volume = datasets
        .iter()
        .map(|(_, session)| session.config().max_volume_ml)
        .fold(0.0_f64, f64::max);

    match extension_of(output_path) {
        "svg" => {
            let backend = SVGBackend::new(output_path, (config.width, config.height));
            plot_comparison_impl(backend, &datasets, config, max_volume)
        }
        _ => {
            let backend = BitMapBackend::new(output_path, (config.width, config.height));
            plot_comparison_impl(backend, &datasets, config, max_volume)
        }
    }
}

/// File extension used to pick the drawing backend
fn extension_of(path: &str) -> &str {
    std::path::Path::new(path)
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("png")
}

// =================================================================================================
// Private Plot Implementations
// =================================================================================================

/// Render a single titration curve with the given drawing backend
fn plot_curve_impl<DB: DrawingBackend>(
    backend: DB,
    session: &TitrationSession,
    config: &PlotConfig,
    max_volume: f64,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let root = backend.into_drawing_area();
    root.fill(&config.background)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&config.title, ("sans-serif", 40).into_font())
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..max_volume, 0.0..PH_AXIS_MAX)?;

    if config.show_grid {
        chart
            .configure_mesh()
            .x_desc(&config.xlabel)
            .y_desc(&config.ylabel)
            .x_label_formatter(&|x| format!("{:.0}", x))
            .y_label_formatter(&|y| format!("{:.0}", y))
            .draw()?;
    }

    let line_color = config.line_color;
    chart
        .draw_series(LineSeries::new(
            session
                .samples()
                .iter()
                .map(|sample| (sample.base_volume_ml, sample.ph)),
            ShapeStyle::from(&line_color).stroke_width(config.line_width),
        ))?
        .label(session.config().regime.pairing())
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &line_color));

    if config.show_equivalence {
        draw_equivalence_marker(
            &mut chart,
            session.equivalence_threshold_ml(),
            max_volume,
            config.equivalence_color,
        )?;
    }

    if config.mark_current_point {
        if let Some(last) = session.samples().last() {
            let marker_color = band_color(last.color_band());
            chart.draw_series(std::iter::once(Circle::new(
                (last.base_volume_ml, last.ph),
                4,
                marker_color.filled(),
            )))?;
        }
    }

    chart
        .configure_series_labels()
        .background_style(&config.background.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

/// Render overlaid titration curves for comparison
fn plot_comparison_impl<DB: DrawingBackend>(
    backend: DB,
    datasets: &[(&str, &TitrationSession)],
    config: &PlotConfig,
    max_volume: f64,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let root = backend.into_drawing_area();
    root.fill(&config.background)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&config.title, ("sans-serif", 40).into_font())
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..max_volume, 0.0..PH_AXIS_MAX)?;

    if config.show_grid {
        chart
            .configure_mesh()
            .x_desc(&config.xlabel)
            .y_desc(&config.ylabel)
            .x_label_formatter(&|x| format!("{:.0}", x))
            .y_label_formatter(&|y| format!("{:.0}", y))
            .draw()?;
    }

    for (index, (label, session)) in datasets.iter().enumerate() {
        let color = config.get_curve_color(index);

        chart
            .draw_series(LineSeries::new(
                session
                    .samples()
                    .iter()
                    .map(|sample| (sample.base_volume_ml, sample.ph)),
                ShapeStyle::from(&color).stroke_width(config.line_width),
            ))?
            .label(*label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &color));

        if config.show_equivalence {
            draw_equivalence_marker(
                &mut chart,
                session.equivalence_threshold_ml(),
                max_volume,
                color,
            )?;
        }
    }

    chart
        .configure_series_labels()
        .background_style(&config.background.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

/// Draw the dashed vertical line marking the equivalence volume
///
/// Skipped silently when the crossing volume lies outside the plotted
/// range (a very dilute titrant can place it past the burette cap).
fn draw_equivalence_marker<DB: DrawingBackend>(
    chart: &mut ChartContext<'_, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>,
    equivalence_ml: f64,
    max_volume: f64,
    color: RGBColor,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    if !(0.0..=max_volume).contains(&equivalence_ml) {
        return Ok(());
    }

    // Dash by drawing every other short segment along the pH axis
    let dash_count = (PH_AXIS_MAX / DASH_STEP_PH) as usize;
    chart.draw_series((0..dash_count).step_by(2).map(|i| {
        let y0 = i as f64 * DASH_STEP_PH;
        let y1 = (y0 + DASH_STEP_PH).min(PH_AXIS_MAX);
        PathElement::new(
            vec![(equivalence_ml, y0), (equivalence_ml, y1)],
            ShapeStyle::from(&color).stroke_width(1),
        )
    }))?;

    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================
