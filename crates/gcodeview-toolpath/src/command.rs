//! Decoded command forms and axis word extraction
//!
//! Each line is decoded once into a tagged variant; the interpreter
//! dispatches on the variant and never rescans raw tokens.

use gcodeview_core::{Axis, Diagnostic, IssueKind, MoveKind, Position};

use crate::line::Line;

/// Explicit axis words present on a motion or set-position line
///
/// `None` means the axis was omitted (or its word was malformed and
/// already reported); the axis keeps its prior register value.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AxisWords {
    /// Explicit X word
    pub x: Option<f64>,
    /// Explicit Y word
    pub y: Option<f64>,
    /// Explicit Z word
    pub z: Option<f64>,
    /// Explicit E word
    pub e: Option<f64>,
}

impl AxisWords {
    /// Absolute application: explicit words overwrite, omitted axes keep
    /// their prior value.
    pub fn apply_absolute(&self, prior: Position) -> Position {
        Position {
            x: self.x.unwrap_or(prior.x),
            y: self.y.unwrap_or(prior.y),
            z: self.z.unwrap_or(prior.z),
            e: self.e.unwrap_or(prior.e),
        }
    }

    /// Relative application: explicit words add to the prior value,
    /// omitted axes keep it.
    pub fn apply_relative(&self, prior: Position) -> Position {
        Position {
            x: prior.x + self.x.unwrap_or(0.0),
            y: prior.y + self.y.unwrap_or(0.0),
            z: prior.z + self.z.unwrap_or(0.0),
            e: prior.e + self.e.unwrap_or(0.0),
        }
    }

    fn set(&mut self, axis: Axis, value: f64) {
        match axis {
            Axis::X => self.x = Some(value),
            Axis::Y => self.y = Some(value),
            Axis::Z => self.z = Some(value),
            Axis::E => self.e = Some(value),
        }
    }
}

/// A single instruction decoded into its interpreter-relevant form
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// G90: motion words replace the register
    SetAbsolute,
    /// G91: motion words add to the register
    SetRelative,
    /// G0/G1: motion to a new position
    Motion {
        /// Rapid or linear motion
        kind: MoveKind,
        /// Explicit axis words on the line
        axes: AxisWords,
    },
    /// G28: spatial axes to origin, feed untouched
    Home,
    /// G92: redefine the register without motion
    SetPosition {
        /// Explicit axis words on the line
        axes: AxisWords,
    },
    /// Anything else, accepted and ignored
    Unsupported,
}

impl Command {
    /// Decode one normalized line.
    ///
    /// Axis words are read only for the commands that consume them, so an
    /// unsupported line never yields word diagnostics no matter what its
    /// parameters look like.
    pub fn decode(line: &Line<'_>) -> (Command, Vec<Diagnostic>) {
        match line.command().to_ascii_uppercase().as_str() {
            "G90" => (Command::SetAbsolute, Vec::new()),
            "G91" => (Command::SetRelative, Vec::new()),
            "G28" => (Command::Home, Vec::new()),
            "G0" => {
                let (axes, diagnostics) = extract_words(line);
                (
                    Command::Motion {
                        kind: MoveKind::Rapid,
                        axes,
                    },
                    diagnostics,
                )
            }
            "G1" => {
                let (axes, diagnostics) = extract_words(line);
                (
                    Command::Motion {
                        kind: MoveKind::Linear,
                        axes,
                    },
                    diagnostics,
                )
            }
            "G92" => {
                let (axes, diagnostics) = extract_words(line);
                (Command::SetPosition { axes }, diagnostics)
            }
            _ => (Command::Unsupported, Vec::new()),
        }
    }
}

fn extract_words(line: &Line<'_>) -> (AxisWords, Vec<Diagnostic>) {
    let mut words = AxisWords::default();
    let mut diagnostics = Vec::new();

    for axis in Axis::all() {
        match line.axis_word(axis) {
            Some(Ok(value)) => words.set(axis, value),
            Some(Err(word)) => diagnostics.push(Diagnostic::new(
                line.number(),
                line.text(),
                IssueKind::MalformedAxisWord {
                    axis,
                    word: word.to_string(),
                },
            )),
            None => {}
        }
    }

    (words, diagnostics)
}
