//! Incrementally built path descriptions.

use kurbo::{BezPath, Point};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single drawing command in a path description.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathCommand {
    /// Start a new subpath at the point.
    MoveTo(Point),
    /// Cubic Bézier segment from the current point.
    CurveTo {
        /// Outgoing control point of the previous sample.
        start_control: Point,
        /// Incoming control point of the end sample.
        end_control: Point,
        /// The sample the segment ends on.
        end: Point,
    },
}

/// Wrapper that prints an `f64` the way the path text expects.
///
/// Uses the shortest round-trip representation and folds `-0` into `0`.
struct Num(f64);

impl fmt::Display for Num {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Adding positive zero turns -0.0 into 0.0 and leaves everything else alone.
        write!(f, "{}", self.0 + 0.0)
    }
}

impl fmt::Display for PathCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathCommand::MoveTo(p) => write!(f, "M {} {}", Num(p.x), Num(p.y)),
            PathCommand::CurveTo {
                start_control: cs,
                end_control: ce,
                end: p,
            } => write!(
                f,
                "C {},{} {},{} {},{} ",
                Num(cs.x),
                Num(cs.y),
                Num(ce.x),
                Num(ce.y),
                Num(p.x),
                Num(p.y)
            ),
        }
    }
}

/// A path description accumulated while a stroke is being drawn.
///
/// Keeps the textual form (what a vector view layer puts into a `d`
/// attribute) in step with the structured commands. Only the commands are
/// serialized; the text is rebuilt from them on load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<PathCommand>", into = "Vec<PathCommand>")]
pub struct PathDescription {
    text: String,
    commands: Vec<PathCommand>,
}

impl PathDescription {
    /// Create an empty path description.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a path description starting with a move to `point`.
    pub fn starting_at(point: Point) -> Self {
        let mut path = Self::new();
        path.push(PathCommand::MoveTo(point));
        path
    }

    /// Append a command to the path.
    pub fn push(&mut self, command: PathCommand) {
        use std::fmt::Write as _;
        // Writing into a String cannot fail.
        let _ = write!(self.text, "{command}");
        self.commands.push(command);
    }

    /// The textual path description.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The structured commands, in order.
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Check if the path has no commands.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Number of commands in the path.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Number of cubic segments in the path.
    pub fn curve_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, PathCommand::CurveTo { .. }))
            .count()
    }

    /// Convert to a kurbo path for vector backends.
    pub fn to_bez_path(&self) -> BezPath {
        let mut path = BezPath::new();
        for command in &self.commands {
            match *command {
                PathCommand::MoveTo(p) => path.move_to(p),
                PathCommand::CurveTo {
                    start_control,
                    end_control,
                    end,
                } => path.curve_to(start_control, end_control, end),
            }
        }
        path
    }
}

impl From<Vec<PathCommand>> for PathDescription {
    fn from(commands: Vec<PathCommand>) -> Self {
        let mut path = Self::new();
        for command in commands {
            path.push(command);
        }
        path
    }
}

impl From<PathDescription> for Vec<PathCommand> {
    fn from(path: PathDescription) -> Self {
        path.commands
    }
}

impl fmt::Display for PathDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_command_text() {
        let path = PathDescription::starting_at(Point::new(10.0, 10.0));
        assert_eq!(path.as_str(), "M 10 10");
        assert_eq!(path.len(), 1);
        assert_eq!(path.curve_count(), 0);
    }

    #[test]
    fn test_curve_command_text() {
        let mut path = PathDescription::starting_at(Point::new(0.0, 0.0));
        path.push(PathCommand::CurveTo {
            start_control: Point::new(1.5, 2.0),
            end_control: Point::new(3.0, -4.25),
            end: Point::new(5.0, 6.0),
        });
        assert_eq!(path.as_str(), "M 0 0C 1.5,2 3,-4.25 5,6 ");
        assert_eq!(path.curve_count(), 1);
    }

    #[test]
    fn test_negative_zero_prints_as_zero() {
        let path = PathDescription::starting_at(Point::new(-0.0, 3.0));
        assert_eq!(path.as_str(), "M 0 3");
    }

    #[test]
    fn test_deserialize_rebuilds_text() {
        let mut path = PathDescription::starting_at(Point::new(1.0, 1.0));
        path.push(PathCommand::CurveTo {
            start_control: Point::new(2.0, 2.0),
            end_control: Point::new(3.0, 3.0),
            end: Point::new(4.0, 4.0),
        });

        let json = serde_json::to_string(&path).unwrap();
        assert!(!json.contains("\"text\""));
        let back: PathDescription = serde_json::from_str(&json).unwrap();
        assert_eq!(back, path);
        assert_eq!(back.as_str(), "M 1 1C 2,2 3,3 4,4 ");
    }

    #[test]
    fn test_deserialize_rejects_struct_form() {
        let result = serde_json::from_str::<PathDescription>(r#"{"text":"M 1 1","commands":[]}"#);
        assert!(result.is_err());

        let empty: PathDescription = serde_json::from_str("[]").unwrap();
        assert!(empty.is_empty());
        assert_eq!(empty.as_str(), "");
    }

    #[test]
    fn test_to_bez_path() {
        let mut path = PathDescription::starting_at(Point::new(0.0, 0.0));
        path.push(PathCommand::CurveTo {
            start_control: Point::new(1.0, 1.0),
            end_control: Point::new(2.0, 2.0),
            end: Point::new(3.0, 3.0),
        });

        let bez = path.to_bez_path();
        assert_eq!(bez.elements().len(), 2);
    }
}
