//! Statistics aggregation over the full move sequence

use std::collections::HashSet;

use gcodeview_core::{Statistics, Toolpath};

/// Distinct-layer key for a Z value.
///
/// Bit identity, with negative zero folded into positive zero so both
/// spellings land in the same layer.
fn layer_key(z: f64) -> u64 {
    if z == 0.0 {
        0.0f64.to_bits()
    } else {
        z.to_bits()
    }
}

/// Aggregate counts and distances over an interpreted toolpath.
///
/// Layer counting marks both endpoints of every extrusion move, so a
/// single segment that changes Z contributes two layers. Distances are
/// summed at full precision; rounding happens only when displayed. Pure
/// and read-only over its input.
pub fn compute_statistics(toolpath: &Toolpath) -> Statistics {
    let mut layers: HashSet<u64> = HashSet::new();
    let mut extrusion_distance = 0.0;
    let mut travel_distance = 0.0;
    let mut extrusion_moves = 0;

    for m in &toolpath.moves {
        if m.is_extrusion {
            extrusion_moves += 1;
            extrusion_distance += m.length();
            layers.insert(layer_key(m.from.z));
            layers.insert(layer_key(m.to.z));
        } else {
            travel_distance += m.length();
        }
    }

    Statistics {
        layer_count: layers.len(),
        total_moves: toolpath.moves.len(),
        extrusion_moves,
        travel_moves: toolpath.moves.len() - extrusion_moves,
        total_distance: extrusion_distance + travel_distance,
        extrusion_distance,
    }
}
