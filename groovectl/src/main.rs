//! groovectl: resolve layouts, replay event scripts, spin the turntable and
//! validate tuning files against the groove interaction core.

mod cli;
mod commands;
mod script;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use groove_core::Viewport;

use crate::cli::{Cli, Command, ConfigAction};
use crate::commands::{ReplayArgs, SpinArgs};

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries command output.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,groove_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = cli.config.as_deref();

    match cli.command {
        Command::Layout {
            width,
            height,
            index,
            count,
            format,
        } => {
            let tuning = commands::load_tuning(config)?;
            commands::layout(&tuning, width, height, index, count, format)
        }
        Command::Replay {
            script,
            catalog,
            count,
            width,
            height,
            with_opening,
            format,
        } => {
            let tuning = commands::load_tuning(config)?;
            commands::replay(
                tuning,
                ReplayArgs {
                    script: &script,
                    catalog: catalog.as_deref(),
                    count,
                    viewport: Viewport::new(width, height),
                    with_opening,
                    format,
                },
            )
        }
        Command::Spin {
            viewport_height,
            progress,
            frame_ms,
            max_frames,
            samples,
            format,
        } => {
            let tuning = commands::load_tuning(config)?;
            commands::spin(
                &tuning,
                SpinArgs {
                    viewport_height,
                    progress,
                    frame_ms,
                    max_frames,
                    samples,
                    format,
                },
            )
        }
        Command::Config {
            action: ConfigAction::Check { file },
        } => commands::config_check(file.as_deref().or(config)),
    }
}
