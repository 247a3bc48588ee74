//! Run every scenario from a CSV batch file
//!
//! Evaluates scenarios in parallel and writes a flattened summary CSV for
//! spreadsheet comparison. Usage:
//!
//!   run_batch [scenarios.csv] [batch_output.csv]

use std::env;
use std::fs::File;
use std::io::Write;
use std::time::Instant;

use anyhow::{Context, Result};
use rayon::prelude::*;

use fincalc_engine::scenario::loader::load_scenarios;
use fincalc_engine::{Outcome, Scenario};

fn main() -> Result<()> {
    env_logger::init();

    let input_path = env::args().nth(1).unwrap_or_else(|| "data/scenarios.csv".to_string());
    let output_path = env::args().nth(2).unwrap_or_else(|| "batch_output.csv".to_string());

    let start = Instant::now();
    println!("Loading scenarios from {input_path}...");

    let scenarios = load_scenarios(&input_path)
        .with_context(|| format!("failed to load scenarios from {input_path}"))?;
    println!("Loaded {} scenarios in {:?}", scenarios.len(), start.elapsed());

    let run_start = Instant::now();
    let outcomes: Vec<Outcome> = scenarios.par_iter().map(Scenario::run).collect();
    println!("Evaluated in {:?}", run_start.elapsed());

    let mut file = File::create(&output_path)
        .with_context(|| format!("failed to create {output_path}"))?;

    writeln!(file, "Calculator,MoneyIn,MoneyOut,Gain")?;
    for outcome in &outcomes {
        writeln!(
            file,
            "{},{:.2},{:.2},{:.2}",
            outcome.calculator, outcome.money_in, outcome.money_out, outcome.gain
        )?;
    }

    println!("Output written to {output_path}");

    // Summary
    let total_in: f64 = outcomes.iter().map(|o| o.money_in).sum();
    let total_out: f64 = outcomes.iter().map(|o| o.money_out).sum();
    println!("\nBatch Summary ({}):", chrono::Local::now().format("%Y-%m-%d %H:%M:%S"));
    println!("  Scenarios:       {}", outcomes.len());
    println!("  Total Money In:  {total_in:.2}");
    println!("  Total Money Out: {total_out:.2}");
    println!("  Total time: {:?}", start.elapsed());

    Ok(())
}
