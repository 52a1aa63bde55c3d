//! ROBDD builder - Command Line Interface
//!
//! Reads a single-output PLA truth table and writes its reduced ordered
//! binary decision diagram as a DOT graph.

use clap::Parser;
use logic_cad::cli::{init_logging, parse_args};
use logic_cad::{BddConfig, PLAReader, Robdd, ToDot, TruthTable};
use std::path::PathBuf;
use std::process;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "robdd")]
#[command(about = "Build the ROBDD of a single-output PLA file", long_about = None)]
#[command(version)]
struct Args {
    /// Input PLA file
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output DOT file
    #[arg(value_name = "DOT_OUT")]
    output: PathBuf,

    /// Largest number of inputs to accept
    #[arg(long = "max-inputs", value_name = "N", default_value_t = BddConfig::default().max_inputs)]
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

    let config = BddConfig {
        max_inputs: args.max_inputs,
    };
    let bdd = match Robdd::from_table_with_config(&table, &config) {
        Ok(bdd) => bdd,
        Err(e) => {
            eprintln!("Error building ROBDD: {}", e);
            process::exit(1);
        }
    };

    info!(
        "{} variables, {} decision nodes, root {}",
        bdd.num_vars(),
        bdd.node_count(),
        bdd.root()
    );

    if let Err(e) = bdd.to_dot_file(&args.output) {
        eprintln!("Error writing DOT file '{}': {}", args.output.display(), e);
        process::exit(1);
    }

    info!("wrote {}", args.output.display());
}
