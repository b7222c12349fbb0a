//! Tour of the fluent check API: chains, negation, pivots, and recovered failures.

use std::time::Duration;
use veracity::prelude::*;

fn main() {
    // Example 1: Chained checks on one value
    println!("=== Chained Checks Example ===");
    check_that(42u32)
        .is_not_zero()
        .and()
        .is_strictly_positive()
        .and()
        .is_less_than(100);
    println!("42 is not zero, strictly positive, and at most 100");

    // Example 2: Negation applies to exactly one check
    println!("\n=== Negation Example ===");
    check_that("veracity").not().is_empty().and().contains("city");
    println!("\"veracity\" is not empty and contains \"city\"");

    // Example 3: Pivoting into an optional
    println!("\n=== Optional Pivot Example ===");
    let version = Some("1.4.2");
    check_that(version)
        .has_a_value()
        .which()
        .matches(r"^\d+\.\d+\.\d+$");
    println!("the optional holds a semantic version");

    // Example 4: Durations quoted in discovered units
    println!("\n=== Duration Example ===");
    check_that(Duration::from_millis(1500)).is_less_than(Duration::from_secs(2));
    println!("1500 milliseconds fit under the two second limit");

    // Example 5: Recovering a failure instead of panicking
    println!("\n=== Recovered Failure Example ===");
    let outcome = check_that_code(|| {
        check_that(5).is_less_than(3);
    })
    .fails()
    .and();
    println!(
        "the failing check reported:{}",
        outcome.value().panic_message().unwrap_or("(no message)")
    );
}
