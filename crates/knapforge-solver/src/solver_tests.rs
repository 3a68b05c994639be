//! Tests for the solver entry points.

use super::*;
use knapforge_config::ExplorationType;
use knapforge_core::{Resource, WeightSubject};
use knapforge_test::{
    assert_feasible, brute_force_best_value, random_decimal_catalog, random_dyadic_catalog,
    random_integer_catalog, reference_catalog, REFERENCE_CAPACITY,
};

fn branch_and_bound() -> KnapsackSolver {
    KnapsackSolver::new(SolverConfig::new().with_algorithm(AlgorithmType::BranchAndBound))
}

fn all_solvers() -> Vec<KnapsackSolver> {
    vec![
        KnapsackSolver::default(),
        KnapsackSolver::new(SolverConfig::new().with_parallel_row_threshold(Some(1))),
        branch_and_bound(),
        KnapsackSolver::new(
            SolverConfig::new()
                .with_algorithm(AlgorithmType::BranchAndBound)
                .with_exploration_type(ExplorationType::BestBoundFirst),
        ),
    ]
}

#[test]
fn test_reference_scenario() {
    let catalog = reference_catalog();
    for solver in all_solvers() {
        let solution = solver.solve(&catalog, REFERENCE_CAPACITY).unwrap();
        assert_eq!(solution.selected_items(), &[1, 3]);
        assert_eq!(solution.total_value(), 90.0);
        assert_eq!(solution.total_weight(), 7.0);
    }
}

#[test]
fn test_free_function_uses_dynamic_programming() {
    let catalog = reference_catalog();
    assert_eq!(
        solve(&catalog, 10).unwrap(),
        KnapsackSolver::default().solve(&catalog, 10.0).unwrap()
    );
    let err = solve(&catalog, 10.5).unwrap_err();
    assert!(matches!(
        err,
        KnapsackError::UnsupportedWeightDomain {
            subject: WeightSubject::Capacity,
            ..
        }
    ));
}

#[test]
fn test_empty_catalog_any_capacity() {
    let catalog = Catalog::empty();
    for solver in all_solvers() {
        for capacity in [0.0, 1.0, 2.5, 1e300] {
            assert_eq!(solver.solve(&catalog, capacity).unwrap(), Solution::empty());
        }
    }
}

#[test]
fn test_zero_capacity_selects_nothing() {
    let catalog = Catalog::new([(1, 5), (2, 3), (7, 100)]).unwrap();
    for solver in all_solvers() {
        let solution = solver.solve(&catalog, 0).unwrap();
        assert!(solution.is_empty());
        assert_eq!(solution.total_value(), 0.0);
        assert_eq!(solution.total_weight(), 0.0);
    }
}

#[test]
fn test_exact_fit_is_selected() {
    let catalog = Catalog::new([(7, 3)]).unwrap();
    for solver in all_solvers() {
        let solution = solver.solve(&catalog, 7).unwrap();
        assert_eq!(solution.selected_items(), &[0]);
        assert_eq!(solution.total_weight(), 7.0);
    }
}

#[test]
fn test_invalid_capacity() {
    let catalog = reference_catalog();
    for solver in all_solvers() {
        assert_eq!(
            solver.solve(&catalog, -1).unwrap_err(),
            KnapsackError::InvalidCapacity { capacity: -1.0 }
        );
        assert!(matches!(
            solver.solve(&catalog, f64::INFINITY),
            Err(KnapsackError::InvalidCapacity { .. })
        ));
        assert!(matches!(
            solver.solve(&Catalog::empty(), f64::NAN),
            Err(KnapsackError::InvalidCapacity { .. })
        ));
    }
}

#[test]
fn test_invalid_item_never_reaches_solver() {
    let err = Catalog::new([(3, 1), (-1, 4)]).unwrap_err();
    assert_eq!(
        err,
        KnapsackError::InvalidItem {
            index: 1,
            field: knapforge_core::ItemField::Weight,
            value: -1.0,
        }
    );
}

#[test]
fn test_fractional_weight_under_dynamic_programming() {
    let catalog = Catalog::new([(1.0, 2.0), (0.5, 1.0)]).unwrap();
    let err = KnapsackSolver::default().solve(&catalog, 2).unwrap_err();
    assert_eq!(
        err,
        KnapsackError::UnsupportedWeightDomain {
            subject: WeightSubject::Item(1),
            value: 0.5,
        }
    );

    let solution = branch_and_bound().solve(&catalog, 2).unwrap();
    assert_eq!(solution.selected_items(), &[0, 1]);
}

#[test]
fn test_fractional_weight_rejected_even_when_too_heavy() {
    let catalog = Catalog::new([(1.0, 1.0), (7.5, 1.0)]).unwrap();
    let err = KnapsackSolver::default().solve(&catalog, 3).unwrap_err();
    assert_eq!(
        err,
        KnapsackError::UnsupportedWeightDomain {
            subject: WeightSubject::Item(1),
            value: 7.5,
        }
    );
}

#[test]
fn test_table_ceiling_reported_before_allocation() {
    let catalog = Catalog::new([(1_000_000, 1), (1_000_000, 2)]).unwrap();
    let solver = KnapsackSolver::new(SolverConfig::new().with_max_table_cells(1_000));
    let err = solver.solve(&catalog, 2_000_000).unwrap_err();
    assert_eq!(
        err,
        KnapsackError::ResourceExhausted {
            resource: Resource::TableCells,
            requested: 3 * 2_000_001,
            limit: 1_000,
        }
    );

    // Branch-and-bound has no table and handles the same instance.
    let solution = branch_and_bound().solve(&catalog, 2_000_000).unwrap();
    assert_eq!(solution.selected_items(), &[0, 1]);
}

#[test]
fn test_huge_capacity_is_clamped() {
    let catalog = reference_catalog();
    let solution = KnapsackSolver::default().solve(&catalog, 1e18).unwrap();
    assert_eq!(solution.selected_items(), &[0, 1, 2, 3]);
    assert_eq!(solution.total_weight(), 18.0);
}

#[test]
fn test_tie_break_is_deterministic() {
    let catalog = Catalog::new([(1, 5), (1, 5), (2, 5), (1, 5)]).unwrap();
    for solver in all_solvers() {
        let first = solver.solve(&catalog, 2).unwrap();
        for _ in 0..5 {
            assert_eq!(solver.solve(&catalog, 2).unwrap(), first);
        }
        assert_eq!(first.total_value(), 10.0);
    }

    let solution = KnapsackSolver::default().solve(&catalog, 1).unwrap();
    assert_eq!(solution.selected_items(), &[0]);
}

#[test]
fn test_integer_catalogs_match_brute_force() {
    for seed in 0..60 {
        let n = (seed % 14 + 1) as usize;
        let catalog = random_integer_catalog(seed, n, 25, 60);
        let capacity = (seed * 7 % 80) as f64;
        let expected = brute_force_best_value(&catalog, capacity);

        for solver in all_solvers() {
            let solution = solver.solve(&catalog, capacity).unwrap();
            assert_feasible(&catalog, capacity, &solution);
            assert_eq!(
                solution.total_value(),
                expected,
                "seed {} with {:?}",
                seed,
                solver.config().algorithm
            );
        }
    }
}

#[test]
fn test_dyadic_catalogs_match_brute_force() {
    let solver = branch_and_bound();
    for seed in 0..40 {
        let catalog = random_dyadic_catalog(seed, 16, 24);
        let capacity = catalog.total_weight() / 3.0;
        let expected = brute_force_best_value(&catalog, capacity);

        let solution = solver.solve(&catalog, capacity).unwrap();
        assert_feasible(&catalog, capacity, &solution);
        assert_eq!(solution.total_value(), expected, "seed {}", seed);
    }
}

#[test]
fn test_decimal_catalogs_match_brute_force() {
    let solvers = [
        branch_and_bound(),
        KnapsackSolver::new(
            SolverConfig::new()
                .with_algorithm(AlgorithmType::BranchAndBound)
                .with_exploration_type(ExplorationType::BestBoundFirst),
        ),
    ];
    for seed in 0..40 {
        let catalog = random_decimal_catalog(seed, 14, 30);
        let capacity = (catalog.total_weight() * 3.0).round() / 10.0;
        let expected = brute_force_best_value(&catalog, capacity);

        for solver in &solvers {
            let solution = solver.solve(&catalog, capacity).unwrap();
            assert_feasible(&catalog, capacity, &solution);
            assert!(
                (solution.total_value() - expected).abs() <= 1e-9,
                "seed {}: {} vs {}",
                seed,
                solution.total_value(),
                expected
            );
        }
    }
}

#[test]
fn test_catalog_reused_across_capacities() {
    let catalog = reference_catalog();
    let solver = KnapsackSolver::default();
    let values: Vec<f64> = (0..=18)
        .map(|c| solver.solve(&catalog, c).unwrap().total_value())
        .collect();
    assert!(values.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(values[10], 90.0);
    assert_eq!(values[18], 130.0);
}

#[test]
fn test_concurrent_solves_share_catalog() {
    let catalog = random_integer_catalog(99, 12, 30, 40);
    let solver = KnapsackSolver::default();
    let expected = solver.solve(&catalog, 50).unwrap();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| solver.solve(&catalog, 50).unwrap()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

#[test]
fn test_stats_reflect_algorithm() {
    let catalog = reference_catalog();

    let result = KnapsackSolver::default()
        .solve_with_stats(&catalog, 10)
        .unwrap();
    assert_eq!(result.stats.algorithm, AlgorithmType::DynamicProgramming);
    assert_eq!(result.stats.table_cells, 5 * 11);
    assert_eq!(result.stats.nodes_explored, 0);

    let result = branch_and_bound().solve_with_stats(&catalog, 10).unwrap();
    assert_eq!(result.stats.algorithm, AlgorithmType::BranchAndBound);
    assert_eq!(result.stats.table_cells, 0);
    assert!(result.stats.nodes_explored > 0);
    assert_eq!(result.solution.total_value(), 90.0);
}
