pub mod cli;
pub mod commands;
pub mod config;
pub mod dismissal;
pub mod error;
pub mod notice;
pub mod project_identity;
pub mod storage;
pub mod ui;
pub mod utils;

use clap::Parser;
use std::process::exit;

/// Run aegis-notice CLI entrypoint.
pub fn run_cli() {
    // 0. Initialize color settings (must be first)
    ui::init_colors();

    // 1. Signal handling; the check is not cancellable, so just report and exit
    if let Err(e) = ctrlc::set_handler(move || {
        eprintln!();
        ui::warning("Operation cancelled by user.");
        exit(130);
    }) {
        ui::warning(&format!("Could not install Ctrl-C handler: {}", e));
    }

    // 2. Parse & Run
    let args = cli::args::Cli::parse();
    ui::set_quiet(args.global.quiet);
    ui::set_verbose(args.global.verbose);

    if let Err(e) = cli::dispatcher::dispatch(&args) {
        ui::error(&format!("{}", e));
        exit(1);
    }
}
