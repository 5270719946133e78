//! Drawing session state machine.
//!
//! A session goes `Idle -> Active` on pointer-down and back to `Idle` when
//! pointer-up commits the stroke. Committed strokes live in a stroke list
//! whose previous versions are kept in a bounded undo/redo history.
//! Every operation is total: calls that make no sense in the current state
//! are no-ops.

use crate::config::OverlayConfig;
use crate::history::History;
use crate::input::PointerEvent;
use crate::palette::PaletteColor;
use crate::path::PathDescription;
use crate::smoothing::curve_command;
use crate::stroke::Stroke;
use crate::surface::{CoordinateMode, Surface};
use kurbo::Point;
use std::sync::Arc;

/// An ordered list of committed strokes. Snapshots share strokes.
pub type StrokeList = Vec<Arc<Stroke>>;

/// State of the in-progress stroke.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SessionState {
    /// No stroke is being drawn.
    #[default]
    Idle,
    /// A stroke is being drawn.
    Active {
        /// Accepted samples in surface-local coordinates.
        samples: Vec<Point>,
        /// Path built from the samples so far.
        path: PathDescription,
    },
}

/// Freehand drawing session for one surface.
#[derive(Debug, Clone)]
pub struct DrawingSession {
    surface: Surface,
    state: SessionState,
    strokes: StrokeList,
    history: History<StrokeList>,
    color: PaletteColor,
    writing_enabled: bool,
}

impl Default for DrawingSession {
    fn default() -> Self {
        Self::new(Surface::default())
    }
}

impl DrawingSession {
    /// Create a session on `surface` with default settings.
    pub fn new(surface: Surface) -> Self {
        Self {
            surface,
            state: SessionState::Idle,
            strokes: Vec::new(),
            history: History::default(),
            color: PaletteColor::default(),
            writing_enabled: true,
        }
    }

    /// Create a session from configuration. The surface still needs a layout.
    pub fn with_config(config: &OverlayConfig) -> Self {
        Self {
            surface: Surface::new(config.coordinate_mode),
            state: SessionState::Idle,
            strokes: Vec::new(),
            history: History::new(config.history_limit),
            color: config.default_color,
            writing_enabled: config.writing_enabled,
        }
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    /// Mutable access for layout and scroll hooks.
    pub fn surface_mut(&mut self) -> &mut Surface {
        &mut self.surface
    }

    pub fn coordinate_mode(&self) -> CoordinateMode {
        self.surface.mode()
    }

    /// Enable or disable starting new strokes.
    ///
    /// A stroke already in progress is allowed to finish.
    pub fn set_writing_enabled(&mut self, enabled: bool) {
        self.writing_enabled = enabled;
    }

    pub fn writing_enabled(&self) -> bool {
        self.writing_enabled
    }

    /// Start a stroke at a viewport position.
    pub fn pointer_down(&mut self, viewport_point: Point) {
        if !self.writing_enabled {
            return;
        }
        let point = self.surface.to_local(viewport_point);

        if self.is_active() {
            log::debug!("Pointer down during an active stroke, discarding it");
        }
        log::debug!("Stroke started at ({}, {})", point.x, point.y);

        self.history.clear_redo();
        self.state = SessionState::Active {
            samples: vec![point],
            path: PathDescription::starting_at(point),
        };
    }

    /// Extend the active stroke with a viewport position.
    pub fn pointer_move(&mut self, viewport_point: Point) {
        let point = self.surface.to_local(viewport_point);
        let inside = self.surface.contains(point);

        let SessionState::Active { samples, path } = &mut self.state else {
            return;
        };
        if !inside {
            log::trace!("Dropped sample outside surface at ({}, {})", point.x, point.y);
            return;
        }

        samples.push(point);
        let index = samples.len() - 1;
        if let Some(command) = curve_command(point, index, &samples[..]) {
            path.push(command);
        }
    }

    /// Commit the active stroke.
    pub fn pointer_up(&mut self) {
        let SessionState::Active { path, .. } = std::mem::take(&mut self.state) else {
            return;
        };
        if path.is_empty() {
            return;
        }

        let stroke = Arc::new(Stroke::new(path, self.color));
        log::debug!(
            "Committed stroke {} with {} curve segments",
            stroke.id(),
            stroke.path().curve_count()
        );

        self.history.record(self.strokes.clone());
        self.strokes.push(stroke);
    }

    /// Dispatch a pointer event to the matching operation.
    pub fn handle_pointer_event(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down { position } => self.pointer_down(position),
            PointerEvent::Move { position } => self.pointer_move(position),
            PointerEvent::Up => self.pointer_up(),
        }
    }

    /// Undo the last change.
    /// Returns true if undo was performed, false if nothing to undo.
    pub fn undo(&mut self) -> bool {
        let current = std::mem::take(&mut self.strokes);
        match self.history.undo(current) {
            Ok(snapshot) => {
                self.strokes = snapshot;
                true
            }
            Err(current) => {
                self.strokes = current;
                false
            }
        }
    }

    /// Redo the last undone change.
    /// Returns true if redo was performed, false if nothing to redo.
    pub fn redo(&mut self) -> bool {
        let current = std::mem::take(&mut self.strokes);
        match self.history.redo(current) {
            Ok(snapshot) => {
                self.strokes = snapshot;
                true
            }
            Err(current) => {
                self.strokes = current;
                false
            }
        }
    }

    /// Remove every committed stroke as one undoable change.
    pub fn clear(&mut self) {
        if self.strokes.is_empty() {
            return;
        }
        let previous = std::mem::take(&mut self.strokes);
        log::debug!("Cleared {} strokes", previous.len());
        self.history.record(previous);
    }

    /// Select the drawing color for strokes committed from now on.
    pub fn set_color(&mut self, color: PaletteColor) {
        self.color = color;
    }

    pub fn color(&self) -> PaletteColor {
        self.color
    }

    /// Committed strokes, back to front.
    pub fn strokes(&self) -> &[Arc<Stroke>] {
        &self.strokes
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Check if a stroke is being drawn.
    pub fn is_active(&self) -> bool {
        matches!(self.state, SessionState::Active { .. })
    }

    /// Path of the stroke being drawn, if any.
    pub fn active_path(&self) -> Option<&PathDescription> {
        match &self.state {
            SessionState::Active { path, .. } => Some(path),
            SessionState::Idle => None,
        }
    }

    /// Samples of the stroke being drawn (empty when idle).
    pub fn samples(&self) -> &[Point] {
        match &self.state {
            SessionState::Active { samples, .. } => samples,
            SessionState::Idle => &[],
        }
    }

    /// Check if undo is available.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Check if redo is available.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn history(&self) -> &History<StrokeList> {
        &self.history
    }
}
