//! FSM state minimizer - Command Line Interface
//!
//! Reads a KISS state table, merges equivalent states and writes the reduced
//! table (KISS) and its state transition graph (DOT).

use clap::Parser;
use logic_cad::cli::{init_logging, parse_args};
use logic_cad::{FsmConfig, StateTable, ToDot};
use std::path::PathBuf;
use std::process;
use std::sync::Arc;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "fsm-minimize")]
#[command(about = "Implication table state minimization of KISS state tables", long_about = None)]
#[command(version)]
struct Args {
    /// Input KISS state table
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output file for the reduced KISS table
    #[arg(value_name = "KISS_OUT")]
    kiss_output: PathBuf,

    /// Output file for the state transition graph
    #[arg(value_name = "DOT_OUT")]
    dot_output: PathBuf,

    /// Reset state, overriding any .r directive
    #[arg(short = 'r', long = "reset", value_name = "STATE")]
    reset: Option<String>,

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

    let table = match StateTable::from_kiss_file(&args.input) {
        Ok(table) => table,
        Err(e) => {
            eprintln!("Error reading KISS file '{}': {}", args.input.display(), e);
            process::exit(1);
        }
    };

    info!(
        "input: {} states, {} inputs, reset state {}",
        table.num_states(),
        table.num_inputs(),
        table.name(table.reset_state())
    );

    let config = FsmConfig {
        reset_state: args.reset.as_deref().map(Arc::from),
    };
    let reduction = match table.minimize_with_config(&config) {
        Ok(reduction) => reduction,
        Err(e) => {
            eprintln!("Error minimizing state table: {}", e);
            process::exit(1);
        }
    };

    for (removed, kept) in &reduction.merged {
        info!("merged {} into {}", removed, kept);
    }
    info!(
        "reduced {} states to {} in {} passes",
        table.num_states(),
        reduction.table.num_states(),
        reduction.passes
    );

    if let Err(e) = reduction.table.to_kiss_file(&args.kiss_output) {
        eprintln!(
            "Error writing KISS file '{}': {}",
            args.kiss_output.display(),
            e
        );
        process::exit(1);
    }

    if let Err(e) = reduction.table.to_dot_file(&args.dot_output) {
        eprintln!(
            "Error writing DOT file '{}': {}",
            args.dot_output.display(),
            e
        );
        process::exit(1);
    }

    info!(
        "wrote {} and {}",
        args.kiss_output.display(),
        args.dot_output.display()
    );
}
