use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::{ModelConfig, Variant};
use crate::error::Result;

/// diet_model — builds cost-minimizing diet programs for external LP/MIP solvers.
#[derive(Parser, Debug)]
#[command(name = "diet_model")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Logging level to use: one of "error", "warn", "info", "debug", "trace"
    #[arg(short, long, global = true, default_value = "warn")]
    pub log_level: tracing::Level,
}

/// Inputs shared by every diet subcommand.
#[derive(Args, Debug, Clone)]
pub struct ModelArgs {
    /// Path to the diet JSON file (foods, nutrients, days, requirements).
    #[arg(short, long, default_value = "diet.json")]
    pub data: PathBuf,

    /// CSV food table replacing the foods of the diet file.
    #[arg(long)]
    pub foods: Option<PathBuf>,

    /// JSON model config; command-line flags take precedence.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Model formulation.
    #[arg(long, value_enum)]
    pub variant: Option<Variant>,

    /// Allow fractional servings (LP relaxation).
    #[arg(long)]
    pub relax: bool,

    /// Name written into the program.
    #[arg(long)]
    pub name: Option<String>,
}

impl ModelArgs {
    /// Resolve the effective config: defaults, then config file, then flags.
    pub fn model_config(&self) -> Result<ModelConfig> {
        let mut config = match &self.config {
            Some(path) => ModelConfig::load(path)?,
            None => ModelConfig::default(),
        };
        if let Some(variant) = self.variant {
            config.variant = variant;
        }
        if self.relax {
            config.integer_servings = false;
        }
        if let Some(name) = &self.name {
            config.name = name.clone();
        }
        Ok(config)
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write the diet program in CPLEX LP format.
    Export {
        #[command(flatten)]
        model: ModelArgs,

        /// Output LP file.
        #[arg(short, long, default_value = "diet.lp")]
        output: PathBuf,

        /// Overwrite the output file without asking.
        #[arg(long)]
        force: bool,
    },

    /// Print the sets, objective, and constraint bounds of the diet program.
    Summary {
        #[command(flatten)]
        model: ModelArgs,
    },

    /// Evaluate a serving plan against the diet program.
    Check {
        #[command(flatten)]
        model: ModelArgs,

        /// Plan JSON: a list of {"Food", "Day", "Servings"} entries.
        #[arg(short, long)]
        plan: PathBuf,

        /// Ask about unknown food names instead of failing.
        #[arg(short, long)]
        interactive: bool,
    },

    /// Emit the two-variable example program, or an abstract `A x >= b` program.
    Example {
        /// JSON file with `a`, `b`, `c` for the abstract program.
        #[arg(long = "abstract")]
        abstract_data: Option<PathBuf>,

        /// Output LP file; printed to stdout when omitted.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
