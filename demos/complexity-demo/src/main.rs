//! Complexity walkthrough demo
//!
//! Times the loop and closed-form sums, then compares every reference
//! function by counting simple operations instead of seconds.
//!
//! Set `RUST_LOG=debug` to see individual samples.

use bigo_core::{BigOResult, Catalog, Input, TracingSink};
use bigo_time::{
    classify, input_of_size, operation_series, timing_series, SweepConfig, TimingConfig,
    TimingHarness,
};
use tracing_subscriber::EnvFilter;

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if let Err(e) = run() {
        tracing::error!("demo failed: {}", e);
        std::process::exit(1);
    }
}

fn run() -> BigOResult<()> {
    let catalog = Catalog::standard();

    println!("=== Big-O Walkthrough ===\n");

    // 1. Timing a single call
    println!("1. Timing sum_range vs sum_range_closed_form (n = 1e9)");
    let harness = TimingHarness::new();
    for name in ["sum_range", "sum_range_closed_form"] {
        let entry = catalog.get(name)?;
        let (output, result) =
            harness.measure_function(entry, &Input::Size(1_000_000_000), &mut TracingSink)?;
        println!("   {:<24} {:?}  {}", name, output, result);
    }

    // 2. Timing across sizes
    println!("\n2. Timing across sizes");
    println!("   Different machines, even different runs, give different numbers.");
    let quiet = TimingHarness::with_config(TimingConfig::quiet());
    for name in ["sum_range", "sum_range_closed_form"] {
        let entry = catalog.get(name)?;
        let sizes = SweepConfig::for_kind(entry.input_kind()).sizes;
        let samples =
            timing_series(&quiet, entry, &sizes, |n| input_of_size(entry.input_kind(), n))?;
        for s in &samples {
            println!("   {:<24} n = {:>13}  {:.9}s", name, s.n, s.cost);
        }
        match classify(&samples) {
            Ok(class) => println!("   {:<24} looks like {}", name, class),
            Err(e) => println!("   {:<24} could not classify: {}", name, e),
        }
    }

    // 3. Counting operations
    println!("\n3. Counting simple operations instead");
    println!("   The count never depends on the machine.\n");
    println!(
        "   {:<24} {:>16} {:>16} {:>16}  {}",
        "function", "declared time", "counted growth", "declared space", "what it does"
    );
    let ladder = SweepConfig::quick().sizes;
    for entry in catalog.iter() {
        let counted = classify(&operation_series(entry, &ladder))?;
        println!(
            "   {:<24} {:>16} {:>16} {:>16}  {}",
            entry.name(),
            entry.time().notation(),
            counted.notation(),
            entry.space().notation(),
            entry.summary()
        );
    }

    // 4. Stream output
    println!("\n4. Stream output of count_up_and_down(3)");
    catalog
        .get("count_up_and_down")?
        .call(&Input::Size(3), &mut TracingSink)?;

    Ok(())
}
