use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "groovectl",
    version,
    about = "Drive the groove interaction core from the command line"
)]
pub struct Cli {
    /// Tuning override file (TOML or JSON). Defaults to $GROOVE_CONFIG_PATH,
    /// $GROOVE_CONFIG_JSON, then ./groove.toml and friends.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve the layout profile and card transforms for a viewport
    Layout {
        #[arg(long)]
        width: f32,
        #[arg(long)]
        height: f32,
        /// Active album index
        #[arg(long, default_value_t = 0)]
        index: usize,
        /// Number of albums
        #[arg(long, default_value_t = 4)]
        count: usize,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Replay a timestamped JSON event script through the reducer
    Replay {
        /// Script file: a JSON array of {"at_ms": .., "kind": .., ...}
        script: PathBuf,
        /// Album catalog JSON; the built-in sample is used otherwise
        #[arg(long, conflicts_with = "count")]
        catalog: Option<PathBuf>,
        /// Bare album count instead of a catalog
        #[arg(long)]
        count: Option<usize>,
        #[arg(long, default_value_t = 1440.0)]
        width: f32,
        #[arg(long, default_value_t = 900.0)]
        height: f32,
        /// Start on the opening screen instead of the collection
        #[arg(long)]
        with_opening: bool,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Simulate the opening turntable spinning up from a scroll position
    Spin {
        #[arg(long, default_value_t = 900.0)]
        viewport_height: f32,
        /// Normalized scroll progress to jump to, in [0, 1]
        #[arg(long, default_value_t = 1.0)]
        progress: f32,
        /// Frame interval (ms)
        #[arg(long, default_value_t = 16)]
        frame_ms: u64,
        #[arg(long, default_value_t = 2_000)]
        max_frames: u32,
        /// Print one row per frame
        #[arg(long)]
        samples: bool,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Configuration helpers
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Validate tuning overrides and list guard-rail warnings
    Check {
        /// File to check; falls back to --config and the usual lookup
        file: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
