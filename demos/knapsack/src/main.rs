//! Knapsack Example
//!
//! Four items compete for a knapsack of capacity 10. The optimal choice
//! takes the items weighing 4 and 3, worth 90 together.
//!
//! Drop a `knapsack.toml` next to the working directory to switch algorithm,
//! e.g. `algorithm = "branch_and_bound"`.

use std::process::ExitCode;

use knapforge::prelude::*;

const CAPACITY: u32 = 10;

fn main() -> ExitCode {
    let catalog = match Catalog::new([(5, 10), (4, 40), (6, 30), (3, 50)]) {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match knapforge::solve(&catalog, CAPACITY) {
        Ok(solution) => {
            print_solution(&catalog, &solution);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn print_solution(catalog: &Catalog, solution: &Solution) {
    println!("Selected items:");
    for (index, item) in solution
        .selected_items()
        .iter()
        .zip(solution.items(catalog))
    {
        println!("  [{}] {}", index, item);
    }
    println!("Total value: {}", solution.total_value());
    println!("Total weight: {}", solution.total_weight());
}
