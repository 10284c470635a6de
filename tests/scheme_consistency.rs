//! Cross-scheme consistency tests
//!
//! The three schemes discretize the same equation, so as dt shrinks
//! their results must converge to each other. These tests pin that
//! agreement and its first-order shrink rate.

use heat_rs::problem::HeatProblem;
use heat_rs::solver::{
    CrankNicolsonScheme, Discretization, ExplicitScheme, ImplicitScheme, Scheme,
};

mod common;
use common::relative_error;

/// Largest relative gap between two solutions' final interior layers
fn max_interior_gap(a: &heat_rs::solver::HeatSolution, b: &heat_rs::solver::HeatSolution) -> f64 {
    assert_eq!(a.len(), b.len());
    let last = a.len() - 1;

    let mut worst: f64 = 0.0;
    for i in 1..a.x.len() - 1 {
        worst = worst.max(relative_error(
            a.grid.value(last, i),
            b.grid.value(last, i),
        ));
    }
    worst
}

#[test]
fn test_explicit_and_implicit_agree_for_small_dt() {
    // At T = 1 with dt = 0.01 the two first-order schemes differ by
    // O(dt); 1e-3 relative gives a comfortable margin over the
    // observed ~1.5e-4
    let problem = HeatProblem::heated_rod();
    let disc = Discretization::with_total_time(0.25, 0.01, 1.0);

    let explicit = ExplicitScheme::new().solve(&problem, &disc).unwrap();
    let implicit = ImplicitScheme::new().solve(&problem, &disc).unwrap();

    let gap = max_interior_gap(&explicit, &implicit);
    assert!(gap < 1e-3, "cross-scheme gap {} too large", gap);
}

#[test]
fn test_cross_scheme_gap_shrinks_with_dt() {
    // The explicit/implicit gap is O(dt): halving dt five-fold should
    // shrink it roughly five-fold
    let problem = HeatProblem::heated_rod();

    let gap_coarse = {
        let disc = Discretization::with_total_time(0.25, 0.01, 1.0);
        max_interior_gap(
            &ExplicitScheme::new().solve(&problem, &disc).unwrap(),
            &ImplicitScheme::new().solve(&problem, &disc).unwrap(),
        )
    };

    let gap_fine = {
        let disc = Discretization::with_total_time(0.25, 0.002, 1.0);
        max_interior_gap(
            &ExplicitScheme::new().solve(&problem, &disc).unwrap(),
            &ImplicitScheme::new().solve(&problem, &disc).unwrap(),
        )
    };

    let ratio = gap_coarse / gap_fine;
    assert!(
        ratio > 3.5 && ratio < 7.0,
        "gap ratio {} not consistent with first-order shrinkage",
        ratio
    );
}

#[test]
fn test_crank_nicolson_sits_with_the_others() {
    let problem = HeatProblem::heated_rod();
    let disc = Discretization::with_total_time(0.25, 0.01, 1.0);

    let cn = CrankNicolsonScheme::new().solve(&problem, &disc).unwrap();
    let implicit = ImplicitScheme::new().solve(&problem, &disc).unwrap();

    let gap = max_interior_gap(&cn, &implicit);
    assert!(gap < 1e-3, "CN/implicit gap {} too large", gap);
}

#[test]
fn test_all_schemes_relax_toward_the_linear_profile() {
    // The steady state of the rod is the straight line between the
    // boundary values, u∞(x) = 2x. After a long run every scheme must
    // be close to it.
    let problem = HeatProblem::heated_rod();
    let disc = Discretization::with_total_time(0.25, 0.25, 300.0);

    let schemes: Vec<Box<dyn Scheme>> = vec![
        Box::new(ExplicitScheme::new()),
        Box::new(ImplicitScheme::new()),
        Box::new(CrankNicolsonScheme::new()),
    ];

    for scheme in &schemes {
        let solution = scheme.solve(&problem, &disc).unwrap();
        let last = solution.len() - 1;

        for (i, &x) in solution.x.points().iter().enumerate() {
            let steady = 2.0 * x;
            assert!(
                (solution.grid.value(last, i) - steady).abs() < 1e-3,
                "{} did not relax at x = {}: {} vs {}",
                scheme.name(),
                x,
                solution.grid.value(last, i),
                steady
            );
        }
    }
}
