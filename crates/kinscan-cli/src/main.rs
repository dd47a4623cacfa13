//! kinscan CLI: surname-variant anomaly detection for GEDCOM family trees.
//!
//! This binary provides the `kinscan` command with subcommands for finding the
//! home individual, listing ancestor lines, searching, and analysis. See
//! `kinscan --help` for usage.

use clap::Parser;

mod cli_args;
mod commands;
mod logging;

use cli_args::{Cli, Commands};
use commands::session::Source;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let formatter: Box<dyn kinscan_output::OutputFormatter> = if cli.json {
        Box::new(kinscan_output::json::JsonFormatter)
    } else {
        Box::new(kinscan_output::human::HumanFormatter)
    };

    let source = Source {
        gedcom: cli.gedcom,
        config: cli.config,
    };

    let exit_code = match cli.command {
        Commands::Home => commands::home::run(&*formatter, &source),
        Commands::Analyze {
            person,
            all,
            threshold,
        } => commands::analyze::run(&*formatter, &source, person, all, threshold),
        Commands::Ancestors { person, line } => {
            commands::ancestors::run(&*formatter, &source, person, line)
        }
        Commands::Find { criteria } => commands::find::run(&*formatter, &source, criteria),
        Commands::Completion { shell } => commands::completion::run(&shell),
    };

    std::process::exit(exit_code);
}
