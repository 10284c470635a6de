//! Grid invariants, maximum principle and regression fixtures
//!
//! Every scheme must keep the initial layer and the boundary columns
//! exactly as configured, stay within the data bounds when stable, and
//! reproduce the reference heated-rod values.

use heat_rs::problem::{HeatProblem, InitialProfile};
use heat_rs::solver::{
    CrankNicolsonScheme, DenseLu, Discretization, ExplicitScheme, ImplicitScheme, LinearSolver,
    Scheme, SolveError,
};
use nalgebra::{DMatrix, DVector};

mod common;
use common::{heated_rod_disc, layer_bounds, relative_error};

fn all_schemes() -> Vec<Box<dyn Scheme>> {
    vec![
        Box::new(ExplicitScheme::new()),
        Box::new(ImplicitScheme::new()),
        Box::new(CrankNicolsonScheme::new()),
    ]
}

// =================================================================================================
// Invariants shared by every scheme
// =================================================================================================

#[test]
fn test_initial_layer_equals_the_profile_for_every_scheme() {
    let problem = HeatProblem::heated_rod();

    for scheme in all_schemes() {
        let solution = scheme.solve(&problem, &heated_rod_disc(5)).unwrap();

        for (i, &x) in solution.x.points().iter().enumerate() {
            // Corners are overruled by the boundary assignment; the
            // quadratic profile matches them anyway on this problem
            let expected = 0.5 * x * (8.0 - x);
            assert!(
                (solution.grid.value(0, i) - expected).abs() < 1e-12,
                "{}: initial layer wrong at x = {}",
                scheme.name(),
                x
            );
        }
    }
}

#[test]
fn test_boundaries_exact_at_every_layer_for_every_scheme() {
    let problem = HeatProblem::heated_rod();

    for scheme in all_schemes() {
        let solution = scheme.solve(&problem, &heated_rod_disc(20)).unwrap();

        for j in 0..solution.len() {
            assert_eq!(
                solution.grid.value(j, 0),
                0.0,
                "{}: left boundary drifted at layer {}",
                scheme.name(),
                j
            );
            assert_eq!(
                solution.grid.value(j, 16),
                8.0,
                "{}: right boundary drifted at layer {}",
                scheme.name(),
                j
            );
        }
    }
}

#[test]
fn test_maximum_principle_for_stable_explicit_runs() {
    // With r ≤ 0.5 the explicit update is a convex combination of
    // neighbouring values, so every layer stays within the bounds of
    // the initial and boundary data
    let problem = HeatProblem::heated_rod();
    let solution = ExplicitScheme::new()
        .solve(&problem, &heated_rod_disc(50))
        .unwrap();

    let (initial_min, initial_max) = layer_bounds(&solution, 0);
    let data_min = initial_min.min(0.0).min(8.0);
    let data_max = initial_max.max(0.0).max(8.0);

    for j in 0..solution.len() {
        let (min, max) = layer_bounds(&solution, j);
        assert!(
            min >= data_min - 1e-12 && max <= data_max + 1e-12,
            "layer {} escaped [{}, {}]: [{}, {}]",
            j,
            data_min,
            data_max,
            min,
            max
        );
    }
}

// =================================================================================================
// Regression fixtures
// =================================================================================================

/// Explicit heated-rod layer 5 (dx = dt = 0.25, r = 0.25), from the
/// reference formulation
const EXPLICIT_LAYER_5: [f64; 17] = [
    0.0,
    0.9154052734375,
    1.8026123046875,
    2.6414794921875,
    3.42193603515625,
    4.140625,
    4.796875,
    5.390625,
    5.921875,
    6.390625,
    6.796875,
    7.140625,
    7.42193603515625,
    7.6414794921875,
    7.8026123046875,
    7.9154052734375,
    8.0,
];

/// Implicit heated-rod layer 5 on the same discretization
const IMPLICIT_LAYER_5: [f64; 17] = [
    0.0,
    0.91862488801742348,
    1.8059167975428176,
    2.6433176290682687,
    3.4226272954886627,
    4.140824727475489,
    4.7969259961609847,
    5.3906381965079095,
    5.921880971099835,
    6.3906381965079095,
    6.7969259961609856,
    7.1408247274754917,
    7.4226272954886641,
    7.6433176290682709,
    7.8059167975428192,
    7.9186248880174244,
    8.0,
];

#[test]
fn test_explicit_regression_fixture() {
    let solution = ExplicitScheme::new()
        .solve(&HeatProblem::heated_rod(), &heated_rod_disc(5))
        .unwrap();

    for (i, &expected) in EXPLICIT_LAYER_5.iter().enumerate() {
        assert!(
            relative_error(solution.grid.value(5, i), expected) < 1e-9,
            "point {}: {} vs fixture {}",
            i,
            solution.grid.value(5, i),
            expected
        );
    }
}

#[test]
fn test_implicit_regression_fixture() {
    let solution = ImplicitScheme::new()
        .solve(&HeatProblem::heated_rod(), &heated_rod_disc(5))
        .unwrap();

    for (i, &expected) in IMPLICIT_LAYER_5.iter().enumerate() {
        assert!(
            relative_error(solution.grid.value(5, i), expected) < 1e-9,
            "point {}: {} vs fixture {}",
            i,
            solution.grid.value(5, i),
            expected
        );
    }
}

// =================================================================================================
// Failure paths
// =================================================================================================

#[test]
fn test_singular_injection_raises_singular_system() {
    // Malform the boundary rows of a Crank-Nicolson-style matrix so
    // the first and last unknowns are unconstrained: the solve must
    // fail loudly, not hand back NaN
    let mut a = heat_rs::solver::assembly::tridiagonal(9, 1.22, -0.11);
    for col in 0..9 {
        a[(0, col)] = 0.0;
        a[(8, col)] = 0.0;
    }
    let b = DVector::from_fn(9, |i, _| i as f64);

    let err = DenseLu::new().solve(&a, &b).unwrap_err();
    assert!(matches!(err, SolveError::SingularSystem(_)));
}

#[test]
fn test_zero_matrix_is_singular_for_both_solvers() {
    let a = DMatrix::<f64>::zeros(4, 4);
    let b = DVector::from_vec(vec![1.0, 2.0, 3.0, 4.0]);

    assert!(matches!(
        DenseLu::new().solve(&a, &b),
        Err(SolveError::SingularSystem(_))
    ));
    assert!(matches!(
        heat_rs::solver::Thomas::new().solve(&a, &b),
        Err(SolveError::SingularSystem(_))
    ));
}

#[test]
fn test_validation_failures_come_before_computation() {
    let problem = HeatProblem::heated_rod();

    for scheme in all_schemes() {
        for disc in [
            Discretization::with_steps(0.0, 0.25, 5),
            Discretization::with_steps(0.25, 0.0, 5),
            Discretization::with_steps(0.25, 0.25, 0),
            Discretization::with_total_time(0.25, 0.25, 0.1),
        ] {
            let result = scheme.solve(&problem, &disc);
            assert!(
                matches!(result, Err(SolveError::InvalidInput(_))),
                "{} accepted invalid discretization {:?}",
                scheme.name(),
                disc
            );
        }
    }
}

#[test]
fn test_truncation_warning_travels_to_the_solution() {
    let problem = HeatProblem::new(
        4.1,
        1.0 / 16.0,
        (0.0, 8.0),
        InitialProfile::quadratic(0.5, 8.0),
    );

    for scheme in all_schemes() {
        let solution = scheme.solve(&problem, &heated_rod_disc(3)).unwrap();
        assert_eq!(solution.warnings.len(), 1, "{}", scheme.name());
        assert!(solution.warnings[0].contains("not an exact multiple"));
    }
}
