//! InkPad replay tool.
//!
//! Plays a recorded pointer script through a drawing session and writes
//! the result as SVG.

mod script;

use anyhow::{Context, Result};
use clap::Parser;
use inkpad_core::OverlayConfig;
use inkpad_render::{RenderContext, Renderer, SvgRenderer};
use script::Script;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "inkpad", version, about = "Replay recorded pointer input into SVG strokes")]
struct Cli {
    /// JSON script with the surface layout and recorded events
    script: PathBuf,

    /// Write the SVG here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Overlay configuration (JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the configured stroke width
    #[arg(long)]
    stroke_width: Option<f64>,

    /// Leave an unfinished stroke out of the output
    #[arg(long)]
    committed_only: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::info!("Starting InkPad replay");

    let mut config = match &cli.config {
        Some(path) => OverlayConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => OverlayConfig::default(),
    };
    if let Some(width) = cli.stroke_width {
        config.stroke_width = width;
    }

    let script = Script::load(&cli.script)?;
    let session = script.replay(&config);
    if session.is_active() {
        log::warn!("Script ends with a stroke still in progress");
    }

    let mut renderer = SvgRenderer::new();
    renderer.render(
        &RenderContext::new(&session)
            .with_stroke_width(config.stroke_width)
            .with_active(!cli.committed_only),
    )?;
    let svg = renderer.take();

    match &cli.output {
        Some(path) => {
            fs::write(path, svg).with_context(|| format!("Failed to write {}", path.display()))?;
            log::info!("Wrote {}", path.display());
        }
        None => print!("{svg}"),
    }
    Ok(())
}
