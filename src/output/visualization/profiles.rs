//! Spatial profile plotting
//!
//! Renders u(x, t) against x for selected time layers of a completed
//! solution — the plotted counterpart of the text table. PNG or SVG is
//! chosen from the output file extension.
//!
//! # Usage
//!
//! ```rust,ignore
//! use heat_rs::output::visualization::{plot_profiles, plot_profile_evolution};
//!
//! let solution = scheme.solve(&problem, &disc)?;
//!
//! // Specific layers
//! plot_profiles(&solution, &[0, 2, 5], "profiles.png", None)?;
//!
//! // Or six evenly spaced snapshots
//! plot_profile_evolution(&solution, 6, "evolution.png", None)?;
//! ```

use plotters::prelude::*;
use std::error::Error;

use super::config::PlotConfig;
use crate::solver::HeatSolution;

/// Plot u(x, t) for the given time layers
///
/// Each layer is drawn as one curve labelled "t = …" from the temporal
/// axis. The solution is read-only; nothing is mutated.
///
/// # Arguments
///
/// * `solution` - Completed solve
/// * `layers` - Time layer indices to draw
/// * `output_path` - Output file (.png or .svg)
/// * `config` - Optional plot configuration
///
/// # Errors
///
/// Returns an error when no layers are given, a layer index is out of
/// range, or the backend fails to write the file.
pub fn plot_profiles(
    solution: &HeatSolution,
    layers: &[usize],
    output_path: &str,
    config: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    if layers.is_empty() {
        return Err("no time layers selected".into());
    }
    for &j in layers {
        if j >= solution.len() {
            return Err(format!(
                "time layer {} out of range (solution has {} layers)",
                j,
                solution.len()
            )
            .into());
        }
    }

    let default_config = PlotConfig::default();
    let config = config.unwrap_or(&default_config);

    let x_values = solution.x.points();
    let curves: Vec<(String, Vec<f64>)> = layers
        .iter()
        .map(|&j| {
            let label = format!("t = {:.2}", solution.t.points()[j]);
            let values = solution.grid.layer(j).iter().cloned().collect();
            (label, values)
        })
        .collect();

    let curve_refs: Vec<(&str, &[f64], &[f64])> = curves
        .iter()
        .map(|(label, values)| (label.as_str(), x_values, values.as_slice()))
        .collect();

    plot_profile_comparison(curve_refs, output_path, Some(config))
}

/// Plot labelled spatial profiles on shared axes
///
/// The low-level entry point: accepts raw (label, x, u) triples so
/// profiles from different solutions (or schemes) can be overlaid.
///
/// # Example
///
/// ```rust,ignore
/// let profiles = vec![
///     ("Explicit", x.as_slice(), u_explicit.as_slice()),
///     ("Implicit", x.as_slice(), u_implicit.as_slice()),
/// ];
/// plot_profile_comparison(profiles, "comparison.png", None)?;
/// ```
pub fn plot_profile_comparison(
    profiles: Vec<(&str, &[f64], &[f64])>,
    output_path: &str,
    config: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    if profiles.is_empty() {
        return Err("no profiles provided".into());
    }
    for (label, x, u) in &profiles {
        if x.len() != u.len() {
            return Err(format!(
                "profile '{}': x and u lengths differ ({} vs {})",
                label,
                x.len(),
                u.len()
            )
            .into());
        }
    }

    let default_config = PlotConfig::default();
    let config = config.unwrap_or(&default_config);

    // Shared axis ranges with a 10% vertical margin
    let max_x = profiles
        .iter()
        .map(|(_, x, _)| x.last().copied().unwrap_or(0.0))
        .fold(0.0, f64::max);

    let mut min_u = f64::INFINITY;
    let mut max_u = f64::NEG_INFINITY;
    for (_, _, u) in &profiles {
        for &v in *u {
            min_u = min_u.min(v);
            max_u = max_u.max(v);
        }
    }
    let span = (max_u - min_u).max(1e-10);
    let y_min = min_u - 0.1 * span;
    let y_max = max_u + 0.1 * span;

    let ext = std::path::Path::new(output_path)
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("png");

    match ext {
        "svg" => {
            let backend = SVGBackend::new(output_path, (config.width, config.height));
            draw_profiles(backend, &profiles, config, max_x, y_min, y_max)
        }
        _ => {
            let backend = BitMapBackend::new(output_path, (config.width, config.height));
            draw_profiles(backend, &profiles, config, max_x, y_min, y_max)
        }
    }
}

/// Implementation with a concrete backend
fn draw_profiles<DB: DrawingBackend>(
    backend: DB,
    profiles: &[(&str, &[f64], &[f64])],
    config: &PlotConfig,
    max_x: f64,
    y_min: f64,
    y_max: f64,
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
        .build_cartesian_2d(0.0..max_x, y_min..y_max)?;

    if config.show_grid {
        chart
            .configure_mesh()
            .x_desc(&config.xlabel)
            .y_desc(&config.ylabel)
            .x_label_formatter(&|x| format!("{:.2}", x))
            .y_label_formatter(&|y| format!("{:.2}", y))
            .draw()?;
    }

    for (idx, (label, x_values, u_values)) in profiles.iter().enumerate() {
        let color = config.layer_color(idx);

        chart
            .draw_series(LineSeries::new(
                x_values.iter().zip(u_values.iter()).map(|(x, u)| (*x, *u)),
                color.stroke_width(config.line_width),
            ))?
            .label(*label)
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
            });
    }

    chart
        .configure_series_labels()
        .background_style(config.background.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

/// Plot evenly spaced time snapshots of the solution
///
/// Selects `n_snapshots` layers spread over the run (always including
/// the first and last) and draws them with [`plot_profiles`].
pub fn plot_profile_evolution(
    solution: &HeatSolution,
    n_snapshots: usize,
    output_path: &str,
    config: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    if n_snapshots == 0 {
        return Err("no time layers selected".into());
    }

    let n_layers = solution.len();
    let n_snapshots = n_snapshots.min(n_layers);

    let layers: Vec<usize> = if n_snapshots == 1 {
        vec![n_layers - 1]
    } else {
        (0..n_snapshots)
            .map(|k| k * (n_layers - 1) / (n_snapshots - 1))
            .collect()
    };

    plot_profiles(solution, &layers, output_path, config)
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::HeatProblem;
    use crate::solver::{Discretization, ExplicitScheme, Scheme};

    fn rod_solution() -> HeatSolution {
        ExplicitScheme::new()
            .solve(
                &HeatProblem::heated_rod(),
                &Discretization::with_steps(0.25, 0.25, 5),
            )
            .unwrap()
    }

    #[test]
    fn test_plot_profiles_png() {
        let temp = tempfile::NamedTempFile::new().unwrap();
        let path = temp.path().with_extension("png");

        let solution = rod_solution();
        plot_profiles(&solution, &[0, 2, 5], path.to_str().unwrap(), None).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_plot_profiles_svg() {
        let temp = tempfile::NamedTempFile::new().unwrap();
        let path = temp.path().with_extension("svg");

        let solution = rod_solution();
        plot_profiles(&solution, &[0, 5], path.to_str().unwrap(), None).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_plot_profiles_rejects_empty_selection() {
        let solution = rod_solution();
        assert!(plot_profiles(&solution, &[], "unused.png", None).is_err());
    }

    #[test]
    fn test_plot_profiles_rejects_out_of_range_layer() {
        let solution = rod_solution();
        let err = plot_profiles(&solution, &[99], "unused.png", None).unwrap_err();
        assert!(err.to_string().contains("out of range"));
    }

    #[test]
    fn test_plot_comparison_rejects_length_mismatch() {
        let x = vec![0.0, 1.0, 2.0];
        let u = vec![0.0, 1.0];
        let err =
            plot_profile_comparison(vec![("bad", x.as_slice(), u.as_slice())], "unused.png", None)
                .unwrap_err();
        assert!(err.to_string().contains("lengths differ"));
    }

    #[test]
    fn test_plot_evolution() {
        let temp = tempfile::NamedTempFile::new().unwrap();
        let path = temp.path().with_extension("png");

        let solution = rod_solution();
        plot_profile_evolution(&solution, 4, path.to_str().unwrap(), None).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_plot_evolution_more_snapshots_than_layers() {
        let temp = tempfile::NamedTempFile::new().unwrap();
        let path = temp.path().with_extension("png");

        let solution = rod_solution();
        // 50 requested, only 6 available: clamps instead of failing
        plot_profile_evolution(&solution, 50, path.to_str().unwrap(), None).unwrap();
        assert!(path.exists());
    }
}
