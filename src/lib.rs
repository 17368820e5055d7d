//! # GCodeView
//!
//! A Rust-based toolpath interpreter and analyzer for 3D printer G-code.
//! Feeds on the text of an instruction file and reports the interpreted
//! move sequence, the deposited path, its bounding volume, and summary
//! statistics.
//!
//! ## Architecture
//!
//! GCodeView is organized as a workspace with multiple crates:
//!
//! 1. **gcodeview-core** - Data model: positions, moves, toolpaths,
//!    bounds, statistics, diagnostics
//! 2. **gcodeview-toolpath** - Line normalizer, command decoder, the
//!    sequential interpreter, and the bounds/statistics aggregations
//! 3. **gcodeview** - Main binary that wires the crates into a CLI
//!    reporter
//!
//! The interpreter is a single-pass fold: one position register and one
//! coordinate mode threaded across lines, strictly in input order.
//! Rendering, playback, and upload surfaces are consumers of the
//! interpreter's output and live outside this workspace.

pub use gcodeview_core::{
    Axis, Bounds, Diagnostic, DistanceMode, IssueKind, Move, MoveKind, Position, Statistics,
    Toolpath,
};

pub use gcodeview_toolpath::{
    compute_bounds, compute_statistics, interpret, step, AxisWords, Command, Line, MachineState,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output on stderr (reports go to stdout)
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    Ok(())
}
