//! Heated rod: explicit vs implicit
//!
//! 16·∂u/∂t = ∂²u/∂x², 0 ≤ x ≤ 4, t > 0
//! with u(0, t) = 0, u(4, t) = 8 and u(x, 0) = 0.5·x·(8 − x).
//!
//! Runs the explicit and implicit schemes on the same discretization,
//! prints the solution tables and writes profile plots.

use heat_rs::output::export::{format_solution_table, TableConfig};
use heat_rs::output::visualization::{plot_profile_evolution, PlotConfig};
use heat_rs::problem::HeatProblem;
use heat_rs::solver::{Discretization, ExplicitScheme, ImplicitScheme, Scheme};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    println!("=== Heated Rod: Explicit vs Implicit ===\n");

    let problem = HeatProblem::heated_rod();
    let disc = Discretization::with_steps(0.25, 0.25, 5);

    let r = disc.diffusion_ratio(problem.diffusivity);

    println!("Problem:");
    println!("  Domain length L: {}", problem.length);
    println!("  Diffusivity α: {}", problem.diffusivity);
    println!("  Boundary values: u(0,t) = {}, u(L,t) = {}", problem.left_value, problem.right_value);
    println!("\nDiscretization:");
    println!("  dx = {}, dt = {}", disc.dx, disc.dt);
    println!("  Diffusion ratio r = {}", r);
    if r > 0.5 {
        println!("  Warning: the explicit scheme may be unstable (r > 0.5)");
    }
    println!();

    // Explicit scheme
    let explicit = ExplicitScheme::new().solve(&problem, &disc)?;
    println!("--- {} ---", explicit.metadata["scheme"]);
    if let Some(report) = &explicit.stability {
        println!("Warning: {}", report);
    }
    println!("{}", format_solution_table(&explicit, None));

    // Implicit scheme
    let implicit = ImplicitScheme::new().solve(&problem, &disc)?;
    println!("--- {} ---", implicit.metadata["scheme"]);
    println!(
        "{}",
        format_solution_table(&implicit, Some(&TableConfig::default().precision(4)))
    );

    // Plots: every layer of the short run
    let tmp_dir = std::env::temp_dir();

    let explicit_path = tmp_dir.join("heated_rod_explicit.png");
    plot_profile_evolution(
        &explicit,
        explicit.len(),
        explicit_path.to_str().unwrap(),
        Some(&PlotConfig::profiles("Heat Distribution Over Time")),
    )?;
    println!("Wrote {}", explicit_path.display());

    let implicit_path = tmp_dir.join("heated_rod_implicit.png");
    plot_profile_evolution(
        &implicit,
        implicit.len(),
        implicit_path.to_str().unwrap(),
        Some(&PlotConfig::profiles("Heat Distribution Over Time (Implicit Method)")),
    )?;
    println!("Wrote {}", implicit_path.display());

    Ok(())
}
