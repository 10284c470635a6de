//! Heated rod with the Crank-Nicolson scheme
//!
//! Same problem as `heated_rod`, run until t = 5 with dt = 0.22.
//! The half-step ratio r = α·dt / (2·dx²) keeps the scheme stable and
//! second-order accurate regardless of the step size.

use heat_rs::output::export::{export_solution_csv, CsvConfig};
use heat_rs::output::visualization::{plot_profile_evolution, PlotConfig};
use heat_rs::problem::HeatProblem;
use heat_rs::solver::{CrankNicolsonScheme, Discretization, Scheme};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    println!("=== Heated Rod: Crank-Nicolson ===\n");

    let problem = HeatProblem::heated_rod();
    let disc = Discretization::with_total_time(0.25, 0.22, 5.0);

    let r = disc.diffusion_ratio(problem.diffusivity) / 2.0;
    println!("r = {}", r);

    let solution = CrankNicolsonScheme::new().solve(&problem, &disc)?;

    println!("Number of discretization points on x: {}", solution.x.len());
    println!("Number of time layers: {}", solution.len());
    println!("Final time: {:.2}", solution.t.total_time());

    // Midpoint history as a quick sanity check
    let mid = solution.x.len() / 2;
    println!("\nMidpoint u(x=2, t):");
    for j in (0..solution.len()).step_by(5) {
        println!(
            "  t = {:>5.2}: {:.4}",
            solution.t.points()[j],
            solution.grid.value(j, mid)
        );
    }

    let tmp_dir = std::env::temp_dir();

    let plot_path = tmp_dir.join("crank_nicolson_rod.png");
    plot_profile_evolution(
        &solution,
        6,
        plot_path.to_str().unwrap(),
        Some(&PlotConfig::profiles(
            "Heat Distribution Over Time Using Crank-Nicolson Method",
        )),
    )?;
    println!("\nWrote {}", plot_path.display());

    let csv_path = tmp_dir.join("crank_nicolson_rod.csv");
    export_solution_csv(
        &solution,
        csv_path.to_str().unwrap(),
        Some(&CsvConfig::default().with_metadata()),
    )?;
    println!("Wrote {}", csv_path.display());

    Ok(())
}
