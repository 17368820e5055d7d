//! Bounding-volume computation over the deposited path

use gcodeview_core::{Bounds, Toolpath};

/// Axis-aligned bounds over both endpoints of every extrusion move.
///
/// Travel moves do not contribute. An empty deposited path yields the
/// degenerate box at the origin; the accumulator's sentinel extents never
/// reach the caller. Pure and read-only, safe to run concurrently with
/// other consumers of the same toolpath.
pub fn compute_bounds(toolpath: &Toolpath) -> Bounds {
    let mut bounds = Bounds::accumulator();
    for m in toolpath.extrusions() {
        bounds.update(m.from.x, m.from.y, m.from.z);
        bounds.update(m.to.x, m.to.y, m.to.z);
    }

    if bounds.is_valid() {
        bounds
    } else {
        Bounds::default()
    }
}
