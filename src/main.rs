// src/main.rs

use env_logger::Env;
use factorize::algorithms::Factorizer;
use factorize::config::FactorizeConfig;
use factorize::core::batch::{self, BatchLocations};
use factorize::integer_math::prime_table::PrimeTable;
use log::{error, info};
use std::process;
use std::time::Instant;

fn main() {
    let config = match FactorizeConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("configuration error: {}", e);
            process::exit(1);
        }
    };

    // Initialize the logger
    let env = Env::default()
        .filter_or("FACTORIZE_LOG_LEVEL", config.log_level.as_str())
        .write_style_or("FACTORIZE_LOG_STYLE", "always");

    env_logger::Builder::from_env(env).init();

    if let Err(e) = run(&config) {
        error!("{}", e);
        process::exit(1);
    }
}

fn run(config: &FactorizeConfig) -> Result<(), String> {
    let mut args = std::env::args().skip(1);
    let (input_dir, output_dir) = match (args.next(), args.next()) {
        (Some(input), Some(output)) => (input, output),
        _ => return Err("usage: factorize <input_dir> <output_dir>".to_string()),
    };

    let strategy = config.strategy()?;

    // Build the table once; every factorization call borrows it read-only.
    let start = Instant::now();
    let table = PrimeTable::build(config.sieve_bound).map_err(|e| e.to_string())?;
    info!(
        "prime table: {} primes up to {} in {:.3?}",
        table.len(),
        table.bound(),
        start.elapsed()
    );

    let factorizer = Factorizer::new(&table, strategy);
    info!("strategy: {}", factorizer.strategy());

    let locations = BatchLocations::new(input_dir, output_dir);
    batch::process_directory(&locations, &factorizer).map_err(|e| e.to_string())
}
