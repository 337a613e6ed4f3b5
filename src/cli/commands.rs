// src/cli/commands.rs
use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Generate one or more random passwords
    Generate {
        /// Password length
        #[arg(long, short)]
        length: Option<usize>,

        /// Exclude uppercase letters
        #[arg(long)]
        no_upper: bool,

        /// Exclude lowercase letters
        #[arg(long)]
        no_lower: bool,

        /// Exclude digits
        #[arg(long)]
        no_digits: bool,

        /// Exclude symbols
        #[arg(long)]
        no_symbols: bool,

        /// How many passwords to generate
        #[arg(long, short = 'n', default_value_t = 1)]
        count: usize,
    },

    /// Estimate the strength of a password
    Strength {
        /// Password to evaluate (prompted for when omitted)
        password: Option<String>,
    },

    /// Check a password against the breach corpus
    Check {
        /// Password to check (prompted for when omitted)
        password: Option<String>,
    },
}
