//! Committed freehand strokes.

use crate::palette::PaletteColor;
use crate::path::PathDescription;
use kurbo::{BezPath, Rect, Shape};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for strokes.
pub type StrokeId = Uuid;

/// One finished freehand drawing action.
///
/// Strokes are only built when a session commits and are never changed
/// afterwards; snapshots share them behind an `Arc`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    id: StrokeId,
    path: PathDescription,
    color: PaletteColor,
}

impl Stroke {
    /// Create a stroke from a finished path.
    pub fn new(path: PathDescription, color: PaletteColor) -> Self {
        Self {
            id: Uuid::new_v4(),
            path,
            color,
        }
    }

    pub fn id(&self) -> StrokeId {
        self.id
    }

    /// The stroke's path description.
    pub fn path(&self) -> &PathDescription {
        &self.path
    }

    pub fn color(&self) -> PaletteColor {
        self.color
    }

    /// Get the path representation for vector rendering.
    pub fn to_path(&self) -> BezPath {
        self.path.to_bez_path()
    }

    /// Bounding box of the curve geometry (excluding stroke width).
    pub fn bounds(&self) -> Rect {
        if self.path.is_empty() {
            return Rect::ZERO;
        }
        self.to_path().bounding_box()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::PathCommand;
    use kurbo::Point;

    #[test]
    fn test_stroke_creation() {
        let path = PathDescription::starting_at(Point::new(10.0, 10.0));
        let stroke = Stroke::new(path.clone(), PaletteColor::Red);

        assert_eq!(stroke.path(), &path);
        assert_eq!(stroke.color(), PaletteColor::Red);
    }

    #[test]
    fn test_ids_are_unique() {
        let a = Stroke::new(PathDescription::new(), PaletteColor::Black);
        let b = Stroke::new(PathDescription::new(), PaletteColor::Black);
        assert_ne!(a.id(), b.id());
        assert_ne!(a, b);
    }

    #[test]
    fn test_bounds() {
        let mut path = PathDescription::starting_at(Point::new(0.0, 0.0));
        path.push(PathCommand::CurveTo {
            start_control: Point::new(0.0, 0.0),
            end_control: Point::new(100.0, 50.0),
            end: Point::new(100.0, 50.0),
        });
        let stroke = Stroke::new(path, PaletteColor::Black);

        let bounds = stroke.bounds();
        assert!(bounds.x0.abs() < 1e-9);
        assert!(bounds.y0.abs() < 1e-9);
        assert!((bounds.x1 - 100.0).abs() < 1e-9);
        assert!((bounds.y1 - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_json_roundtrip_keeps_path_text() {
        let mut path = PathDescription::starting_at(Point::new(10.0, 10.0));
        path.push(PathCommand::CurveTo {
            start_control: Point::new(17.0, 11.75),
            end_control: Point::new(19.0, 9.5),
            end: Point::new(20.0, 9.0),
        });
        let stroke = Stroke::new(path, PaletteColor::Green);

        let json = serde_json::to_string(&stroke).unwrap();
        let back: Stroke = serde_json::from_str(&json).unwrap();
        assert_eq!(back, stroke);
        assert_eq!(back.path().as_str(), stroke.path().as_str());
    }

    #[test]
    fn test_empty_bounds() {
        let stroke = Stroke::new(PathDescription::new(), PaletteColor::Black);
        assert_eq!(stroke.bounds(), Rect::ZERO);
    }
}
