// Pattern 2: Strategy Pattern
// Demonstrates swapping the algorithm a client runs by handing it a function
// value at construction time.

use colored::Colorize;
use pattern_catalog::strategy::{execute_replacement1, execute_replacement2, Job, StrategyExample};

// ============================================================================
// Example: Default strategy and two replacements
// ============================================================================

fn replacement_example() {
    let strat0 = StrategyExample::new("Strategy Example 0");
    let strat1 = StrategyExample::with_execute("Strategy Example 1", execute_replacement1);
    let strat2 = StrategyExample::with_execute("Strategy Example 2", execute_replacement2);

    for job in [Job::new(strat0), Job::new(strat1), Job::new(strat2)] {
        println!("{}", job.run());
    }
}

// ============================================================================
// Example: Closure strategy swapped at runtime
// ============================================================================

fn closure_example() {
    let mut job = Job::with_data(StrategyExample::new("Counter"), " (3 items)");
    println!("{}", job.run());

    let prefix = String::from(">>");
    job.set_strategy(StrategyExample::with_execute("Counter", move |name, data| {
        format!("{prefix} {name} from closure{data}")
    }));
    println!("{}", job.run());
}

fn main() {
    println!("Pattern 2: Strategy Pattern");
    println!("===========================\n");

    println!("{}", "=== Replacement Functions ===".bold());
    replacement_example();
    println!();

    println!("{}", "=== Closure Strategy ===".bold());
    closure_example();
}
