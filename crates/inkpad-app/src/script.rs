//! Recorded input scripts.

use anyhow::{Context, Result};
use inkpad_core::{DrawingSession, OverlayConfig, PaletteColor, PointerEvent};
use kurbo::{Point, Rect, Vec2};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One recorded input or toolbar action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ScriptEvent {
    Down { position: Point },
    Move { position: Point },
    Up,
    Undo,
    Redo,
    Clear,
    Color { color: PaletteColor },
    Writing { enabled: bool },
    Scroll { offset: Vec2 },
    Layout { bounds: Rect },
}

/// A surface layout plus the events recorded on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Script {
    /// Initial surface bounds (viewport or page space, depending on the mode).
    pub surface: Rect,
    pub events: Vec<ScriptEvent>,
}

impl Script {
    /// Read a script from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read script {}", path.display()))?;
        serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse script {}", path.display()))
    }

    /// Build a session from `config` and play every event through it.
    pub fn replay(&self, config: &OverlayConfig) -> DrawingSession {
        let mut session = DrawingSession::with_config(config);
        session.surface_mut().on_layout(self.surface);

        for event in &self.events {
            apply(&mut session, event);
        }
        log::info!(
            "Replayed {} events into {} strokes",
            self.events.len(),
            session.strokes().len()
        );
        session
    }
}

fn apply(session: &mut DrawingSession, event: &ScriptEvent) {
    match *event {
        ScriptEvent::Down { position } => {
            session.handle_pointer_event(PointerEvent::Down { position })
        }
        ScriptEvent::Move { position } => {
            session.handle_pointer_event(PointerEvent::Move { position })
        }
        ScriptEvent::Up => session.handle_pointer_event(PointerEvent::Up),
        ScriptEvent::Undo => {
            if !session.undo() {
                log::debug!("Nothing to undo");
            }
        }
        ScriptEvent::Redo => {
            if !session.redo() {
                log::debug!("Nothing to redo");
            }
        }
        ScriptEvent::Clear => session.clear(),
        ScriptEvent::Color { color } => session.set_color(color),
        ScriptEvent::Writing { enabled } => session.set_writing_enabled(enabled),
        ScriptEvent::Scroll { offset } => session.surface_mut().on_scroll(offset),
        ScriptEvent::Layout { bounds } => session.surface_mut().on_layout(bounds),
    }
}
