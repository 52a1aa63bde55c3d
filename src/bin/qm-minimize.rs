//! Quine-McCluskey minimizer - Command Line Interface
//!
//! Reads a single-output PLA truth table and writes a minimum
//! sum-of-products cover in PLA format.

use clap::Parser;
use logic_cad::cli::{init_logging, parse_args};
use logic_cad::{qm, PLAReader, PLAWriter, QmConfig, TruthTable};
use std::path::PathBuf;
use std::process;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "qm-minimize")]
#[command(about = "Exact two-level minimization of single-output PLA files", long_about = None)]
#[command(version)]
struct Args {
    /// Input PLA file
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output PLA file
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    /// Largest number of inputs to accept
    #[arg(long = "max-inputs", value_name = "N", default_value_t = QmConfig::default().max_inputs)]
    max_inputs: usize,

    /// Provide execution summary
    #[arg(short = 's', long = "summary")]
    summary: bool,

    /// Increase logging detail (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args: Args = parse_args();
    init_logging(args.summary, args.verbose);

    let table = match TruthTable::from_pla_file(&args.input) {
        Ok(table) => table,
        Err(e) => {
            eprintln!("Error reading PLA file '{}': {}", args.input.display(), e);
            process::exit(1);
        }
    };

    info!(
        "input: {} inputs, {} rows",
        table.num_inputs(),
        table.num_rows()
    );

    let config = QmConfig {
        max_inputs: args.max_inputs,
    };
    let result = match qm::minimize_with_config(&table, &config) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("Error minimizing truth table: {}", e);
            process::exit(1);
        }
    };

    info!(
        "{} prime implicants, {} essential, {} selected",
        result.primes().len(),
        result.essentials().len(),
        result.selected().len()
    );
    info!("f = {}", result.sum_of_products());

    if let Err(e) = result.to_pla_file(&args.output) {
        eprintln!("Error writing output file '{}': {}", args.output.display(), e);
        process::exit(1);
    }

    info!("wrote {}", args.output.display());
}
