use std::fs;
use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::{Context, Result, bail};
use serde::Serialize;
use serde_json::json;
use tracing::{info, warn};

use groove_config::{ConfigWarnings, LoadedConfig};
use groove_core::layout::{self, LayoutProfile};
use groove_core::stack;
use groove_core::store::OPENING_SEEN_KEY;
use groove_core::{
    CardTransform, MemoryStore, Notification, Session, Tuning,
    TurntableController, Viewport, update,
};
use groove_model::Catalog;

use crate::cli::OutputFormat;
use crate::script;

pub fn load_tuning(config: Option<&Path>) -> Result<Tuning> {
    let loaded = groove_config::load(config).context("failed to load tuning")?;
    log_warnings(&loaded.warnings);
    Ok(loaded.tuning)
}

fn log_warnings(warnings: &ConfigWarnings) {
    for warning in warnings.iter() {
        match &warning.hint {
            Some(hint) => warn!(hint = %hint, "{}", warning.message),
            None => warn!("{}", warning.message),
        }
    }
}

pub fn layout(
    tuning: &Tuning,
    width: f32,
    height: f32,
    index: usize,
    count: usize,
    format: OutputFormat,
) -> Result<()> {
    let profile = layout::resolve_with(&tuning.layout, width, height);
    let index = index.min(count.saturating_sub(1));
    let window =
        stack::render_window(index, count, profile.device_class, &tuning.stack);
    let cards =
        stack::stack_transforms(index, count, &profile, &tuning.stack);

    match format {
        OutputFormat::Json => {
            let body = json!({
                "profile": profile,
                "render_window": [window.start, window.end],
                "cards": cards,
            });
            println!("{}", serde_json::to_string_pretty(&body)?);
        }
        OutputFormat::Text => {
            print_profile(&profile);
            println!("render window: {}..{}", window.start, window.end);
            for card in &cards {
                print_card(card);
            }
        }
    }
    Ok(())
}

fn print_profile(p: &LayoutProfile) {
    println!("device:     {}", p.device_class);
    println!("viewport:   {} x {}", p.viewport_width, p.viewport_height);
    println!("card size:  {:.1}", p.card_size);
    println!("x spacing:  {:.1}", p.x_spacing);
    println!("stage:      {:.1}..{:.1}", p.stage_top, p.stage_bottom);
    if p.landscape_mobile {
        println!("landscape mobile");
    }
}

fn print_card(c: &CardTransform) {
    println!(
        "card {:>2} d={:+} x={:+.1} z={:.0} ry={:+.1} scale={:.2} z-order={}{}",
        c.index,
        c.distance,
        c.offset_x,
        c.depth_z,
        c.rotate_y,
        c.scale,
        c.z_order,
        if c.is_active { " (active)" } else { "" }
    );
}

pub struct ReplayArgs<'a> {
    pub script: &'a Path,
    pub catalog: Option<&'a Path>,
    pub count: Option<usize>,
    pub viewport: Viewport,
    pub with_opening: bool,
    pub format: OutputFormat,
}

#[derive(Debug, Serialize)]
struct ReplayLine<'a> {
    at_ms: u64,
    #[serde(flatten)]
    notification: &'a Notification,
}

pub fn replay(tuning: Tuning, args: ReplayArgs<'_>) -> Result<()> {
    let raw = fs::read_to_string(args.script).with_context(|| {
        format!("failed to read script {}", args.script.display())
    })?;
    let entries = script::parse(&raw).with_context(|| {
        format!("invalid script {}", args.script.display())
    })?;

    let catalog = match (args.catalog, args.count) {
        (Some(path), _) => Some(load_catalog(path)?),
        (None, Some(_)) => None,
        (None, None) => Some(Catalog::sample()),
    };
    let count = catalog
        .as_ref()
        .map(Catalog::len)
        .or(args.count)
        .unwrap_or_default();

    let store =
        MemoryStore::new().with_flag(OPENING_SEEN_KEY, !args.with_opening);
    let mut session = Session::new(count, args.viewport, tuning, store);
    info!(count, events = entries.len(), mode = %session.mode(), "replaying script");

    let base = Instant::now();
    for entry in &entries {
        let events = entry.to_events(base).with_context(|| {
            format!("invalid script {}", args.script.display())
        })?;
        for (at_ms, event) in events {
            for notification in update(&mut session, event) {
                emit(at_ms, &notification, args.format)?;
            }
        }
    }

    let active = catalog
        .as_ref()
        .and_then(|c| c.get(session.index()))
        .map(|album| format!("{} {}", album.kind, album.color))
        .unwrap_or_else(|| "-".to_owned());
    match args.format {
        OutputFormat::Json => {
            let summary = json!({
                "final": {
                    "mode": session.mode(),
                    "index": session.index(),
                    "count": session.count(),
                    "accent": catalog
                        .as_ref()
                        .and_then(|c| c.accent_color(session.index())),
                }
            });
            println!("{}", serde_json::to_string(&summary)?);
        }
        OutputFormat::Text => println!(
            "final: mode={} index={} album={}",
            session.mode(),
            session.index(),
            active
        ),
    }
    Ok(())
}

fn load_catalog(path: &Path) -> Result<Catalog> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("invalid catalog {}", path.display()))
}

fn emit(at_ms: u64, n: &Notification, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let line = ReplayLine {
                at_ms,
                notification: n,
            };
            println!("{}", serde_json::to_string(&line)?);
        }
        OutputFormat::Text => {
            let text = match n {
                Notification::IndexChanged { from, to } => {
                    format!("index_changed {from} -> {to}")
                }
                Notification::DetailRequested { index } => {
                    format!("detail_requested {index}")
                }
                Notification::ModeChanged { from, to } => {
                    format!("mode_changed {from} -> {to}")
                }
                Notification::OpeningCompleted => "opening_completed".to_owned(),
            };
            println!("{at_ms:>6}ms {text}");
        }
    }
    Ok(())
}

pub struct SpinArgs {
    pub viewport_height: f32,
    pub progress: f32,
    pub frame_ms: u64,
    pub max_frames: u32,
    pub samples: bool,
    pub format: OutputFormat,
}

#[derive(Debug, Serialize)]
struct SpinReport {
    frames: u32,
    elapsed_ms: u64,
    completed: bool,
    angle: f32,
    target_angle: f32,
    opacity: f32,
    indicator_angle: f32,
}

pub fn spin(tuning: &Tuning, args: SpinArgs) -> Result<()> {
    if !(0.0..=1.0).contains(&args.progress) {
        bail!("--progress must be within [0, 1], got {}", args.progress);
    }
    if args.frame_ms == 0 {
        bail!("--frame-ms must be at least 1");
    }

    let mut turntable =
        TurntableController::new(tuning.turntable, args.viewport_height);
    turntable.scroll_to(args.progress * turntable.scroll_range());

    let dt = Duration::from_millis(args.frame_ms);
    let mut frames = 0;
    let mut completed = false;
    while frames < args.max_frames && !completed {
        completed = turntable.tick(dt);
        frames += 1;
        if args.samples && args.format == OutputFormat::Text {
            println!(
                "{:>5} {:>7}ms angle={:.2}",
                frames,
                u64::from(frames) * args.frame_ms,
                turntable.angle()
            );
        }
    }

    let report = SpinReport {
        frames,
        elapsed_ms: u64::from(frames) * args.frame_ms,
        completed,
        angle: turntable.angle(),
        target_angle: turntable.target_angle(),
        opacity: turntable.opacity(),
        indicator_angle: turntable.indicator_angle(),
    };
    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string(&report)?),
        OutputFormat::Text if report.completed => println!(
            "completed after {} frames ({} ms) at {:.2} deg",
            report.frames, report.elapsed_ms, report.angle
        ),
        OutputFormat::Text => println!(
            "not completed after {} frames ({} ms); angle {:.2} of target {:.2} deg",
            report.frames, report.elapsed_ms, report.angle, report.target_angle
        ),
    }
    Ok(())
}

pub fn config_check(file: Option<&Path>) -> Result<()> {
    let LoadedConfig {
        source, warnings, ..
    } = groove_config::load(file).context("configuration rejected")?;

    println!("source: {source}");
    if warnings.is_empty() {
        println!("ok: no warnings");
        return Ok(());
    }
    for warning in warnings.iter() {
        println!("warning: {}", warning.message);
        if let Some(hint) = &warning.hint {
            println!("  hint: {hint}");
        }
    }
    Ok(())
}
