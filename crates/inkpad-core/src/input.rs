//! Pointer events delivered by the view layer.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Pointer event for unified mouse/touch handling.
///
/// Positions are in viewport coordinates; the session translates them
/// through its [`Surface`](crate::surface::Surface).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PointerEvent {
    Down { position: Point },
    Move { position: Point },
    Up,
}
