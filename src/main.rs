// SPDX-License-Identifier: GPL-3.0-or-later
// src/main.rs
//
// Command line entry point: build a picker for an image and replay a pointer
// script against it.

use std::fs;
use std::io;
use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::{ArgAction, Parser};

use focal::app::script::{self, parse_script};
use focal::config::AppConfig;
use focal::constant::DEFAULT_LOG_FILTER;
use focal::{FocalEvent, FocalGeometry, FocusCoords, Scene};

/// Requested preview size, `WxH`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreviewArg {
    pub width: f64,
    pub height: f64,
}

fn parse_preview(value: &str) -> Result<PreviewArg, String> {
    let (w, h) = value
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WxH, got `{value}`"))?;
    let width = w.trim().parse().map_err(|e| format!("invalid width `{w}`: {e}"))?;
    let height = h.trim().parse().map_err(|e| format!("invalid height `{h}`: {e}"))?;
    Ok(PreviewArg { width, height })
}

#[derive(Debug, Clone, Parser)]
#[command(name = "focal", version, about = "Pick an image focal point and preview crops around it")]
pub struct Args {
    /// Image whose pixel size defines the picker bounds.
    #[cfg(feature = "image")]
    #[arg(long, conflicts_with_all = ["width", "height"])]
    pub image: Option<PathBuf>,

    /// Bounds width in pixels.
    #[arg(long, requires = "height")]
    pub width: Option<f64>,

    /// Bounds height in pixels.
    #[arg(long, requires = "width")]
    pub height: Option<f64>,

    /// Initial horizontal focus in percent.
    #[arg(long)]
    pub focus_x: Option<f64>,

    /// Initial vertical focus in percent.
    #[arg(long)]
    pub focus_y: Option<f64>,

    /// Preview crop size, e.g. `16x9`.
    #[arg(long, value_parser = parse_preview)]
    pub preview: Option<PreviewArg>,

    /// Pointer script to replay; read from stdin when omitted.
    #[arg(long)]
    pub script: Option<PathBuf>,

    /// Config file (defaults to the platform config dir).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => DEFAULT_LOG_FILTER,
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();
}

fn load_config(args: &Args) -> anyhow::Result<AppConfig> {
    match &args.config {
        Some(path) => AppConfig::load(path),
        None => Ok(AppConfig::default_path()
            .map(|path| AppConfig::load(&path))
            .transpose()?
            .unwrap_or_default()),
    }
}

fn resolve_bounds(args: &Args) -> anyhow::Result<(f64, f64)> {
    #[cfg(feature = "image")]
    {
        if let Some(path) = &args.image {
            let (width, height) = image::image_dimensions(path)
                .with_context(|| format!("Failed to read image size of {}", path.display()))?;
            log::info!("Using {}x{} from {}", width, height, path.display());
            return Ok((f64::from(width), f64::from(height)));
        }
    }

    match (args.width, args.height) {
        (Some(width), Some(height)) => Ok((width, height)),
        _ => bail!("image bounds required: pass --width and --height or --image"),
    }
}

fn read_script(args: &Args) -> anyhow::Result<String> {
    match &args.script {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read script {}", path.display())),
        None => io::read_to_string(io::stdin()).context("Failed to read script from stdin"),
    }
}

fn print_event(event: &FocalEvent) {
    match event {
        FocalEvent::DragStart => println!("dragstart"),
        FocalEvent::Drag { point } => println!("drag {} {}", point.x, point.y),
        FocalEvent::DragEnd => println!("dragend"),
        FocalEvent::Change { x, y } => println!("change {x} {y}"),
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = load_config(&args)?;
    let (width, height) = resolve_bounds(&args)?;

    let mut options = config.options();
    options.focus = FocusCoords::new(
        args.focus_x.unwrap_or(options.focus.x),
        args.focus_y.unwrap_or(options.focus.y),
    );

    let mut picker = FocalGeometry::new(Scene::new(width, height), options)
        .context("Failed to create focal picker")?;
    picker.subscribe(print_event);

    let preview = args
        .preview
        .map(|p| (p.width, p.height))
        .or_else(|| config.preview.map(|p| (p.width, p.height)));
    if let Some((w, h)) = preview {
        picker.set_preview(w, h);
    }

    let commands = parse_script(&read_script(&args)?)?;
    log::debug!("Replaying {} commands", commands.len());
    for command in commands {
        script::apply(&mut picker, command);
    }

    if picker.is_dragging() {
        log::warn!("Script ended while dragging; the last drag was not committed");
    }

    let coords = picker.coords();
    println!("{}", picker.surface());
    println!("focus     x={} y={}", coords.x, coords.y);
    Ok(())
}
