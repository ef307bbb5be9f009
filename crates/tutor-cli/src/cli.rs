//! CLI argument definitions for the blueprint tutor.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use tutor_model::BlockKind;
use tutor_store::{GardenAction, PageId};

#[derive(Parser)]
#[command(
    name = "tutor",
    version,
    about = "Blueprint tutor - learn UI state management by building a house",
    long_about = "Build houses out of typed blocks, replay store transitions, watch a\n\
                  virtual DOM diff itself, and ask the AI tutor to explain concepts."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Include prompt and explanation text in logs.
    #[arg(long = "log-prompts", global = true)]
    pub log_prompts: bool,

    /// Settings file (default: the platform config directory).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// List every block kind with its default label, color, and cost.
    Blocks,

    /// List the concepts the tutor can explain.
    Concepts,

    /// Place materials on a workshop page and show the project totals.
    Build(BuildArgs),

    /// Replay house transitions, e.g. "ADD_BLOCK WALL" "REMOVE_BLOCK @1".
    House(HouseArgs),

    /// Tend the garden plots, e.g. "PLANT 1" "WATER".
    Garden(GardenArgs),

    /// Ask the tutor to explain a concept.
    Explain(ExplainArgs),

    /// Run one virtual DOM diff cycle.
    Diff(DiffArgs),

    /// Show the effective settings.
    Config(ConfigArgs),
}

#[derive(Parser)]
pub struct BuildArgs {
    /// Page to build on.
    #[arg(long = "page", value_name = "PAGE", default_value = "HOUSE")]
    pub page: PageId,

    /// Materials to place, in order.
    #[arg(value_name = "KIND", required = true)]
    pub kinds: Vec<BlockKind>,
}

#[derive(Parser)]
pub struct HouseArgs {
    /// Transitions, one per argument: NAME followed by its arguments.
    #[arg(value_name = "TRANSITION", required = true)]
    pub transitions: Vec<String>,

    /// Print the final state as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct GardenArgs {
    /// Garden actions, applied in order: PLANT <n>, REMOVE <n>, WATER.
    #[arg(value_name = "ACTION")]
    pub actions: Vec<GardenAction>,
}

#[derive(Parser)]
pub struct ExplainArgs {
    /// Concept id (see `tutor concepts`).
    #[arg(value_name = "CONCEPT", required_unless_present = "prompt")]
    pub concept: Option<String>,

    /// Ask a custom question instead of the concept's prompt.
    #[arg(long = "prompt", value_name = "TEXT")]
    pub prompt: Option<String>,

    /// Endpoint override.
    #[arg(long = "endpoint", value_name = "URL")]
    pub endpoint: Option<String>,
}

#[derive(Parser)]
pub struct DiffArgs {
    /// New text prop.
    #[arg(long = "text", value_name = "TEXT")]
    pub text: Option<String>,

    /// New color prop.
    #[arg(long = "color", value_name = "CLASS")]
    pub color: Option<String>,

    /// Skip the phase delays.
    #[arg(long = "instant")]
    pub instant: bool,
}

#[derive(Parser)]
pub struct ConfigArgs {
    /// Write the defaults to the settings file if it does not exist.
    #[arg(long = "init")]
    pub init: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
