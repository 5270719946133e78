//! Drawing surface geometry and viewport-to-local coordinate translation.

use kurbo::{Point, Rect, Size, Vec2};
use serde::{Deserialize, Serialize};

/// How pointer positions are mapped into the surface's local space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CoordinateMode {
    /// Subtract the surface's live viewport-space bounding-box origin.
    #[default]
    BoundingBox,
    /// Add the window scroll offset and subtract the surface's page origin.
    Scroll,
}

/// The drawing surface as seen by the input layer.
///
/// Layout is pushed in explicitly through [`Surface::on_layout`] (on mount
/// and on every resize) and [`Surface::on_scroll`].
#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    mode: CoordinateMode,
    /// Surface origin in viewport space (bounding-box mode) or page space (scroll mode).
    origin: Point,
    /// Window scroll offset, only used in scroll mode.
    scroll: Vec2,
    size: Size,
}

impl Default for Surface {
    fn default() -> Self {
        Self::new(CoordinateMode::default())
    }
}

impl Surface {
    /// Create an unmeasured surface using the given translation mode.
    pub fn new(mode: CoordinateMode) -> Self {
        Self {
            mode,
            origin: Point::ZERO,
            scroll: Vec2::ZERO,
            size: Size::ZERO,
        }
    }

    /// Create a surface already laid out at `bounds`.
    pub fn with_bounds(mode: CoordinateMode, bounds: Rect) -> Self {
        let mut surface = Self::new(mode);
        surface.on_layout(bounds);
        surface
    }

    /// Recompute origin and size after the surface was mounted or resized.
    ///
    /// In bounding-box mode `bounds` is the live viewport rectangle; in
    /// scroll mode it is the surface's rectangle in page coordinates.
    pub fn on_layout(&mut self, bounds: Rect) {
        let bounds = bounds.abs();
        self.origin = bounds.origin();
        self.size = bounds.size();
        log::debug!(
            "Surface laid out at ({}, {}) size {}x{}",
            self.origin.x,
            self.origin.y,
            self.size.width,
            self.size.height
        );
    }

    /// Record the current window scroll offset.
    pub fn on_scroll(&mut self, offset: Vec2) {
        self.scroll = offset;
    }

    pub fn mode(&self) -> CoordinateMode {
        self.mode
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// Convert a viewport point to surface-local coordinates.
    pub fn to_local(&self, viewport_point: Point) -> Point {
        match self.mode {
            CoordinateMode::BoundingBox => viewport_point - self.origin.to_vec2(),
            CoordinateMode::Scroll => viewport_point + self.scroll - self.origin.to_vec2(),
        }
    }

    /// Check whether a local point lies in `[0, width] x [0, height]`.
    pub fn contains(&self, local: Point) -> bool {
        (0.0..=self.size.width).contains(&local.x) && (0.0..=self.size.height).contains(&local.y)
    }
}
