//! idiom-graph CLI binary.

use std::io::Write;
use std::process;

use clap::Parser;
use env_logger::Builder;

use idiom_graph::cli::args::*;
use idiom_graph::cli::commands::*;

fn main() {
    // Parse command line arguments using clap
    let args = IdiomGraphArgs::parse();

    Builder::new()
        .filter_level(args.log_level())
        .filter_module("idiom_graph", args.crate_log_level())
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    // Execute the command
    if let Err(e) = execute_command(args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
