//! # GCodeView Core
//!
//! Core data model for GCodeView.
//! Provides the position, move, toolpath, bounds, and statistics types
//! shared by the interpreter and its consumers, together with the
//! per-line diagnostics channel.

pub mod data;
pub mod diagnostics;

pub use data::{Axis, Bounds, DistanceMode, Move, MoveKind, Position, Statistics, Toolpath};
pub use diagnostics::{Diagnostic, IssueKind};
