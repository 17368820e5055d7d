//! Data model for interpreted toolpaths
//!
//! This module provides:
//! - Position tracking over the four machine axes (X, Y, Z, E)
//! - Coordinate (distance) mode selection
//! - Motion records produced by the interpreter
//! - The interpreted toolpath and its extrusion view
//! - Derived bounds and statistics value types

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::diagnostics::Diagnostic;

/// One of the four machine axes understood by the interpreter.
///
/// X, Y, Z are spatial axes; E is the cumulative filament feed axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    /// X spatial axis
    X,
    /// Y spatial axis
    Y,
    /// Z spatial axis
    Z,
    /// Filament feed axis (cumulative)
    E,
}

impl Axis {
    /// The axis letter as it appears in instruction words
    pub fn letter(&self) -> char {
        match self {
            Axis::X => 'X',
            Axis::Y => 'Y',
            Axis::Z => 'Z',
            Axis::E => 'E',
        }
    }

    /// All axes, in word-lookup order
    pub fn all() -> [Axis; 4] {
        [Axis::X, Axis::Y, Axis::Z, Axis::E]
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Coordinate mode for motion commands (G90/G91)
///
/// Affects only how explicit axis words on motion commands combine with
/// the prior register value. Homing and set-position writes are always
/// absolute regardless of mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DistanceMode {
    /// Explicit axis words replace the register value (G90)
    Absolute,
    /// Explicit axis words add to the register value (G91)
    Relative,
}

impl Default for DistanceMode {
    fn default() -> Self {
        DistanceMode::Absolute
    }
}

/// Machine position over the four axes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// X-axis position
    pub x: f64,
    /// Y-axis position
    pub y: f64,
    /// Z-axis position
    pub z: f64,
    /// Cumulative filament feed
    pub e: f64,
}

impl Position {
    /// Create a position with explicit coordinates
    pub fn new(x: f64, y: f64, z: f64, e: f64) -> Self {
        Self { x, y, z, e }
    }

    /// Machine origin with no filament fed
    pub fn origin() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    /// Euclidean distance to another position over the spatial axes.
    ///
    /// The feed axis does not contribute to distance.
    pub fn distance_to(&self, other: &Position) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::origin()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "X:{:.3} Y:{:.3} Z:{:.3} E:{:.3}",
            self.x, self.y, self.z, self.e
        )
    }
}

/// Kind of motion command that produced a move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveKind {
    /// Rapid positioning (G0)
    Rapid,
    /// Linear interpolation (G1)
    Linear,
}

impl fmt::Display for MoveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveKind::Rapid => write!(f, "G0"),
            MoveKind::Linear => write!(f, "G1"),
        }
    }
}

/// A single motion segment emitted by the interpreter
///
/// Immutable once created. `from` is the register state before the line
/// was applied and `to` the state after; consecutive moves chain exactly
/// (the `from` of move N equals the `to` of move N-1).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Move {
    /// Register snapshot before the motion
    pub from: Position,
    /// Register snapshot after the motion
    pub to: Position,
    /// Rapid or linear motion
    pub kind: MoveKind,
    /// Whether this segment deposits material (feed strictly increased)
    pub is_extrusion: bool,
    /// 1-based line number in the source text
    pub line_number: u32,
    /// The instruction text, comment-stripped and trimmed
    pub raw: String,
}

impl Move {
    /// Length of this segment over the spatial axes
    pub fn length(&self) -> f64 {
        self.from.distance_to(&self.to)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] line {}: ({}) -> ({})",
            self.kind, self.line_number, self.from, self.to
        )
    }
}

/// Result of interpreting one instruction document
///
/// Owns the ordered move sequence and the per-line diagnostics collected
/// during the pass. The deposited path is not a separate collection; it is
/// the filtered view returned by [`Toolpath::extrusions`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Toolpath {
    /// Every motion segment, in input line order
    pub moves: Vec<Move>,
    /// Per-line issues found during interpretation, in input line order
    pub diagnostics: Vec<Diagnostic>,
}

impl Toolpath {
    /// The deposited-path view: extrusion moves in original order.
    ///
    /// Playback consumers index into this view by ordinal position.
    pub fn extrusions(&self) -> impl Iterator<Item = &Move> {
        self.moves.iter().filter(|m| m.is_extrusion)
    }

    /// Number of extrusion moves
    pub fn extrusion_count(&self) -> usize {
        self.extrusions().count()
    }

    /// Number of travel (non-depositing) moves
    pub fn travel_count(&self) -> usize {
        self.moves.len() - self.extrusion_count()
    }
}

/// Axis-aligned bounding box over deposited geometry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// Minimum X over the deposited path
    pub min_x: f64,
    /// Maximum X over the deposited path
    pub max_x: f64,
    /// Minimum Y over the deposited path
    pub min_y: f64,
    /// Maximum Y over the deposited path
    pub max_y: f64,
    /// Minimum Z over the deposited path
    pub min_z: f64,
    /// Maximum Z over the deposited path
    pub max_z: f64,
}

impl Bounds {
    /// Accumulator with inverted sentinels.
    ///
    /// Callers must check [`Bounds::is_valid`] before exposing the result;
    /// the sentinels must never reach consumers.
    pub fn accumulator() -> Self {
        Self {
            min_x: f64::MAX,
            max_x: f64::MIN,
            min_y: f64::MAX,
            max_y: f64::MIN,
            min_z: f64::MAX,
            max_z: f64::MIN,
        }
    }

    /// Grow the box to include a point
    pub fn update(&mut self, x: f64, y: f64, z: f64) {
        self.min_x = self.min_x.min(x);
        self.max_x = self.max_x.max(x);
        self.min_y = self.min_y.min(y);
        self.max_y = self.max_y.max(y);
        self.min_z = self.min_z.min(z);
        self.max_z = self.max_z.max(z);
    }

    /// Whether the box holds real geometry (finite, ordered extents)
    pub fn is_valid(&self) -> bool {
        self.min_x.is_finite()
            && self.max_x.is_finite()
            && self.min_y.is_finite()
            && self.max_y.is_finite()
            && self.min_z.is_finite()
            && self.max_z.is_finite()
            && self.min_x <= self.max_x
            && self.min_y <= self.max_y
            // Z may be a single plane (min_z == max_z)
            && self.min_z <= self.max_z
    }

    /// Extents along each axis
    pub fn size(&self) -> (f64, f64, f64) {
        (
            self.max_x - self.min_x,
            self.max_y - self.min_y,
            self.max_z - self.min_z,
        )
    }
}

impl Default for Bounds {
    /// Degenerate box at the origin, the convention for an empty path
    fn default() -> Self {
        Self {
            min_x: 0.0,
            max_x: 0.0,
            min_y: 0.0,
            max_y: 0.0,
            min_z: 0.0,
            max_z: 0.0,
        }
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "X {:.2}..{:.2}  Y {:.2}..{:.2}  Z {:.2}..{:.2}",
            self.min_x, self.max_x, self.min_y, self.max_y, self.min_z, self.max_z
        )
    }
}

/// Summary counts and distances over an interpreted toolpath
///
/// Distances are kept at full precision; rounding to two decimals happens
/// only in the `Display` impl.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    /// Distinct Z values over both endpoints of every extrusion move
    pub layer_count: usize,
    /// Total number of moves
    pub total_moves: usize,
    /// Number of extrusion moves
    pub extrusion_moves: usize,
    /// Number of travel moves
    pub travel_moves: usize,
    /// Total travelled distance (extrusion + travel)
    pub total_distance: f64,
    /// Distance travelled while depositing material
    pub extrusion_distance: f64,
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} layers, {} moves ({} extrusion, {} travel), {:.2} total / {:.2} extruded",
            self.layer_count,
            self.total_moves,
            self.extrusion_moves,
            self.travel_moves,
            self.total_distance,
            self.extrusion_distance
        )
    }
}
