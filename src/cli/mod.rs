//! CLI module for triage
//!
//! Command-line interface definitions and handlers for the triage router.
//!
//! # Commands
//!
//! - `route` - Decide the tier and model for a request
//! - `signals` - Show the content signals extracted from a request
//! - `config` - Configuration utilities (init)
//! - `completions` - Generate shell completions
//!
//! # Example
//!
//! ```bash
//! # Route a message against the starter plan budget
//! triage route "write code for a REST API"
//!
//! # Route the last user message of a transcript, machine-readable
//! triage route --messages transcript.json --json
//!
//! # Inspect why a message classifies the way it does
//! triage signals "first analyze the data, then deploy"
//! ```

pub mod completions;
pub mod config;
pub mod output;
pub mod route;
pub mod signals;

pub use completions::handle_completions;
pub use config::handle_config_init;
pub use route::handle_route;
pub use signals::handle_signals;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Triage - deterministic model-tier router
#[derive(Parser, Debug)]
#[command(
    name = "triage",
    version,
    about = "Deterministic model-tier router for agent requests"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Decide the tier and model for a request
    Route(RouteArgs),
    /// Show the content signals extracted from a request
    Signals(SignalsArgs),
    /// Configuration utilities
    #[command(subcommand)]
    Config(ConfigCommands),
    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args, Debug)]
pub struct RouteArgs {
    /// Request text to route (omit when using --messages)
    #[arg(required_unless_present = "messages")]
    pub content: Option<String>,

    /// Route the last user message of a JSON messages array instead
    #[arg(long, value_name = "FILE", conflicts_with = "content")]
    pub messages: Option<PathBuf>,

    /// Path to configuration file
    #[arg(short, long, default_value = "triage.toml")]
    pub config: PathBuf,

    /// Plan whose limits seed the budget counters
    #[arg(long, env = "TRIAGE_PLAN")]
    pub plan: Option<String>,

    /// Mid-tier calls already used this period
    #[arg(long, default_value_t = 0)]
    pub mid_used: u32,

    /// Premium-tier calls already used this period
    #[arg(long, default_value_t = 0)]
    pub premium_used: u32,

    /// Set the remaining mid-tier budget directly
    #[arg(long, conflicts_with = "mid_used")]
    pub mid_remaining: Option<u32>,

    /// Set the remaining premium-tier budget directly
    #[arg(long, conflicts_with = "premium_used")]
    pub premium_remaining: Option<u32>,

    /// Treat the request as a heartbeat invocation
    #[arg(long)]
    pub heartbeat: bool,

    /// Treat the request as a recurring task
    #[arg(long)]
    pub recurring: bool,

    /// Treat the request as one-shot task execution
    #[arg(long)]
    pub task: bool,

    /// Enable the deep analysis toggle
    #[arg(long)]
    pub deep_analysis: bool,

    /// Enable the web search toggle
    #[arg(long)]
    pub web_search: bool,

    /// Caller-level model override
    #[arg(long, value_name = "MODEL")]
    pub model_override: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct SignalsArgs {
    /// Request text to classify
    pub content: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Write an example configuration file
    Init(ConfigInitArgs),
}

#[derive(Args, Debug)]
pub struct ConfigInitArgs {
    /// Output path for the configuration file
    #[arg(short, long, default_value = "triage.toml")]
    pub output: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: Shell,
}
