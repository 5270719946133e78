//! InkPad Core Library
//!
//! Platform-agnostic stroke smoothing and drawing session state for the
//! InkPad annotation overlay. Rendering lives in `inkpad-render`.

pub mod config;
pub mod history;
pub mod input;
pub mod palette;
pub mod path;
pub mod session;
pub mod smoothing;
pub mod stroke;
pub mod surface;

pub use config::{ConfigError, ConfigResult, OverlayConfig};
pub use history::{History, MAX_UNDO_HISTORY};
pub use input::PointerEvent;
pub use palette::{PaletteColor, css_color};
pub use path::{PathCommand, PathDescription};
pub use session::{DrawingSession, SessionState, StrokeList};
pub use smoothing::{LineMetrics, SMOOTHING, control_point, curve_command, line_metrics};
pub use stroke::{Stroke, StrokeId};
pub use surface::{CoordinateMode, Surface};
