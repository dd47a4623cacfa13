use std::path::PathBuf;

use clap::{Parser, Subcommand};

use kinscan_detect::ancestors::Lineage;

#[derive(Parser, Debug)]
#[command(
    name = "kinscan",
    version,
    about = "Surname-variant anomaly detection for GEDCOM family trees"
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as structured JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Log traversal and detector passes to stderr
    #[arg(long, global = true)]
    pub verbose: bool,

    /// GEDCOM file to read
    #[arg(short = 'g', long, global = true, env = "KINSCAN_GEDCOM")]
    pub gedcom: Option<PathBuf>,

    /// Configuration file (default: .kinscan/kinscan.json)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Print the home individual of the tree
    Home,

    /// Run anomaly detectors (exit 1 when anomalies are found)
    Analyze {
        /// Analyze this individual instead of the home individual
        #[arg(long)]
        person: Option<String>,
        /// Analyze every individual in the file
        #[arg(long, conflicts_with = "person")]
        all: bool,
        /// Minimum surname similarity score, 0-100
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
        threshold: Option<u8>,
    },

    /// List the paternal or maternal ancestors of an individual
    Ancestors {
        /// Start from this individual instead of the home individual
        #[arg(long)]
        person: Option<String>,
        /// Which line to follow: paternal or maternal
        #[arg(long, default_value = "paternal")]
        line: Lineage,
    },

    /// Find the first individual matching a criteria expression
    Find {
        /// e.g. `surname=Miller:birthrange=1850-1860`
        criteria: String,
    },

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completions for (bash, zsh, fish, elvish, powershell)
        shell: String,
    },
}

#[cfg(test)]
#[path = "cli_args_tests.rs"]
mod tests;
