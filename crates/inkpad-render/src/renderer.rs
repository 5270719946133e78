//! Renderer trait abstraction.

use inkpad_core::DrawingSession;
use kurbo::Size;
use peniko::Color;
use thiserror::Error;

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RendererError {
    #[error("Render failed: {0}")]
    RenderFailed(String),
    #[error("Format error: {0}")]
    Format(#[from] std::fmt::Error),
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RendererError>;

/// Context for a single render frame.
pub struct RenderContext<'a> {
    /// The session to render.
    pub session: &'a DrawingSession,
    /// Output size; defaults to the session's surface size.
    pub viewport_size: Size,
    /// Width of every stroke.
    pub stroke_width: f64,
    /// Background color (None = transparent).
    pub background_color: Option<Color>,
    /// Whether to draw the stroke currently in progress.
    pub include_active: bool,
}

impl<'a> RenderContext<'a> {
    /// Create a new render context.
    pub fn new(session: &'a DrawingSession) -> Self {
        Self {
            session,
            viewport_size: session.surface().size(),
            stroke_width: 2.0,
            background_color: None,
            include_active: true,
        }
    }

    /// Set the output size.
    pub fn with_viewport_size(mut self, size: Size) -> Self {
        self.viewport_size = size;
        self
    }

    /// Set the stroke width.
    pub fn with_stroke_width(mut self, width: f64) -> Self {
        self.stroke_width = width;
        self
    }

    /// Set the background color.
    pub fn with_background(mut self, color: Option<Color>) -> Self {
        self.background_color = color;
        self
    }

    /// Choose whether the in-progress stroke is drawn.
    pub fn with_active(mut self, include: bool) -> Self {
        self.include_active = include;
        self
    }
}

/// Trait for rendering backends.
pub trait Renderer {
    /// Render one frame of the context's session.
    fn render(&mut self, ctx: &RenderContext) -> RenderResult<()>;
}
