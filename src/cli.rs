// std imports
use std::path::PathBuf;

// third-party imports
use clap::{Args, Parser};

// local imports
use crate::{config, settings::Settings};

// ---

/// Options parsed before the configuration is loaded, all unrelated arguments are ignored.
#[derive(Parser, Debug)]
#[command(ignore_errors = true, disable_help_flag = true, disable_version_flag = true)]
pub struct BootstrapOpt {
    #[command(flatten)]
    pub args: BootstrapArgs,
}

#[derive(Args, Debug, Clone, Default)]
pub struct BootstrapArgs {
    /// Configuration file path.
    #[arg(long, value_name = "FILE", env = "BMATCH_CONFIG", overrides_with = "config")]
    pub config: Option<PathBuf>,
}

// ---

/// Print lines matching a boolean expression of substrings and regular expressions.
#[derive(Parser, Debug)]
#[command(version)]
pub struct Opt {
    #[command(flatten)]
    pub bootstrap: BootstrapArgs,

    /// Print the parsed expression and exit.
    #[arg(long)]
    pub explain: bool,

    /// Match against lowercased lines.
    #[arg(short, long, env = "BMATCH_LOWER", overrides_with_all = ["lower", "no_lower"])]
    pub lower: bool,

    /// Match against lines as they are, overrides --lower option and the configuration.
    #[arg(long, overrides_with_all = ["lower", "no_lower"])]
    pub no_lower: bool,

    /// Maximum nesting level of the expression.
    #[arg(
        long,
        env = "BMATCH_MAX_DEPTH",
        default_value_t = config::get().max_depth,
        overrides_with = "max_depth",
    )]
    pub max_depth: usize,

    /// Expression, e.g. 'foo AND NOT (bar OR /ba[zr]/)'.
    #[arg(name = "EXPR")]
    pub expr: String,

    /// Files to process, '-' stands for stdin.
    #[arg(name = "FILE")]
    pub files: Vec<PathBuf>,
}

impl Opt {
    /// Tells whether lines are lowercased, command line flags take precedence over the settings.
    pub fn lower_enabled(&self, settings: &Settings) -> bool {
        !self.no_lower && (self.lower || settings.lower)
    }
}

// ---
