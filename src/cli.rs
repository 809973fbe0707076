use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Cropwatch crop growth-stage tracker.
#[derive(Parser)]
#[command(
    name = "cropwatch",
    version,
    about = "Report a crop's current growth stage from its sowing date"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// TOML crop catalog replacing the built-in crop table.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run (defaults to an interactive `status`).
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// List the crop menu.
    Crops,
    /// Show the current growth stage and overall progress of a crop.
    Status(StatusArgs),
    /// Show the calendar window of every stage of a crop.
    Schedule(ScheduleArgs),
}

/// How a crop is picked. When neither flag is given the menu is prompted.
#[derive(clap::Args, Default)]
pub struct CropSelect {
    /// Crop name (case-insensitive).
    #[arg(long, conflicts_with = "choice")]
    pub crop: Option<String>,

    /// 1-based crop menu number, as listed by `cropwatch crops`.
    #[arg(short = 'n', long)]
    pub choice: Option<usize>,
}

/// Output rendering.
#[derive(Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text with a progress bar.
    #[default]
    Text,
    /// JSON document.
    Json,
}

/// Arguments for the `status` subcommand.
#[derive(clap::Args, Default)]
pub struct StatusArgs {
    #[command(flatten)]
    pub select: CropSelect,

    /// Sowing date (YYYY-MM-DD). Prompted for when omitted.
    #[arg(short, long)]
    pub sown: Option<String>,

    /// Reference date (YYYY-MM-DD) instead of the local current date.
    #[arg(long)]
    pub today: Option<String>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

/// Arguments for the `schedule` subcommand.
#[derive(clap::Args)]
pub struct ScheduleArgs {
    #[command(flatten)]
    pub select: CropSelect,

    /// Sowing date (YYYY-MM-DD). Prompted for when omitted.
    #[arg(short, long)]
    pub sown: Option<String>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t)]
    pub format: OutputFormat,
}
