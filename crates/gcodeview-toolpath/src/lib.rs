//! # GCodeView Toolpath
//!
//! G-code interpretation and toolpath analysis for GCodeView.
//! Includes the line normalizer, the command decoder, the sequential
//! interpreter, and the pure bounds/statistics aggregations over its
//! output.

pub mod bounds;
pub mod command;
pub mod interpreter;
pub mod line;
pub mod stats;

pub use bounds::compute_bounds;
pub use command::{AxisWords, Command};
pub use interpreter::{interpret, step, MachineState};
pub use line::Line;
pub use stats::compute_statistics;
