//! The sequential command interpreter
//!
//! A single-pass fold over the document's lines. State is one position
//! register plus the coordinate mode; each line's effect depends only on
//! state accumulated from strictly earlier lines. No lookahead, no
//! reordering.

use tracing::{debug, trace};

use gcodeview_core::{DistanceMode, Move, Position, Toolpath};

use crate::command::Command;
use crate::line::Line;

/// Interpreter state threaded through the per-line fold
///
/// Exists only for the duration of one interpretation pass.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MachineState {
    /// Position register
    pub position: Position,
    /// Active coordinate mode
    pub mode: DistanceMode,
}

/// Apply one decoded command to the state.
///
/// Pure transition: returns the successor state and the move the command
/// emits, if any. Only motion commands emit.
pub fn step(
    state: MachineState,
    command: &Command,
    line: &Line<'_>,
) -> (MachineState, Option<Move>) {
    match command {
        Command::SetAbsolute => (
            MachineState {
                mode: DistanceMode::Absolute,
                ..state
            },
            None,
        ),
        Command::SetRelative => (
            MachineState {
                mode: DistanceMode::Relative,
                ..state
            },
            None,
        ),
        Command::Motion { kind, axes } => {
            let from = state.position;
            let to = match state.mode {
                DistanceMode::Absolute => axes.apply_absolute(from),
                DistanceMode::Relative => axes.apply_relative(from),
            };
            // Strictly greater: a retraction or an unchanged feed never
            // counts as extrusion, even though the register still moves.
            let is_extrusion = axes.e.is_some() && to.e > from.e;
            let emitted = Move {
                from,
                to,
                kind: *kind,
                is_extrusion,
                line_number: line.number(),
                raw: line.text().to_string(),
            };
            (
                MachineState {
                    position: to,
                    ..state
                },
                Some(emitted),
            )
        }
        Command::Home => {
            // Spatial axes to origin; the feed axis is untouched.
            let position = Position {
                x: 0.0,
                y: 0.0,
                z: 0.0,
                e: state.position.e,
            };
            (MachineState { position, ..state }, None)
        }
        Command::SetPosition { axes } => (
            // A direct register write, whatever the coordinate mode.
            MachineState {
                position: axes.apply_absolute(state.position),
                ..state
            },
            None,
        ),
        Command::Unsupported => (state, None),
    }
}

/// Interpret a whole instruction document.
///
/// Lines are numbered 1-based over the raw input (blank and comment-only
/// lines count toward numbering but have no other effect). Moves and
/// diagnostics come back in input order; an individual line's issue never
/// aborts the pass.
pub fn interpret(text: &str) -> Toolpath {
    debug!("starting interpretation, input size: {} bytes", text.len());

    let mut state = MachineState::default();
    let mut toolpath = Toolpath::default();

    for (index, raw) in text.lines().enumerate() {
        let number = index as u32 + 1;
        let Some(line) = Line::normalize(number, raw) else {
            continue;
        };

        let (command, mut diagnostics) = Command::decode(&line);
        if !diagnostics.is_empty() {
            trace!("line {}: {} word issue(s)", number, diagnostics.len());
        }
        toolpath.diagnostics.append(&mut diagnostics);

        let (next, emitted) = step(state, &command, &line);
        state = next;
        if let Some(emitted) = emitted {
            toolpath.moves.push(emitted);
        }
    }

    debug!(
        "interpretation complete: {} moves ({} extrusion), {} diagnostic(s)",
        toolpath.moves.len(),
        toolpath.extrusion_count(),
        toolpath.diagnostics.len()
    );

    toolpath
}

#[cfg(test)]
mod tests {
    use super::*;
    use gcodeview_core::MoveKind;

    #[test]
    fn test_absolute_motion_sets_register_to_literals() {
        let toolpath = interpret("G90\nG1 X10.5 Y-2 Z0.3 E1.25\n");
        assert_eq!(toolpath.moves.len(), 1);
        assert_eq!(toolpath.moves[0].to, Position::new(10.5, -2.0, 0.3, 1.25));
        assert_eq!(toolpath.moves[0].from, Position::origin());
    }

    #[test]
    fn test_relative_motion_accumulates() {
        let toolpath = interpret("G91\nG1 X5 Z1\nG1 X5 Y2\n");
        assert_eq!(toolpath.moves[1].to, Position::new(10.0, 2.0, 1.0, 0.0));
    }

    #[test]
    fn test_omitted_axes_keep_prior_value() {
        let toolpath = interpret("G1 X10 Y20\nG1 Z5\n");
        assert_eq!(toolpath.moves[1].from, Position::new(10.0, 20.0, 0.0, 0.0));
        assert_eq!(toolpath.moves[1].to, Position::new(10.0, 20.0, 5.0, 0.0));
    }

    #[test]
    fn test_extrusion_requires_strict_feed_increase() {
        let toolpath = interpret("G1 X10 E1\nG1 X20 E1\nG1 X30 E0.5\nG1 X40 E2\n");
        let flags: Vec<bool> = toolpath.moves.iter().map(|m| m.is_extrusion).collect();
        // Equal feed and retraction are travel; only strict increases extrude.
        assert_eq!(flags, vec![true, false, false, true]);
    }

    #[test]
    fn test_motion_without_e_word_is_travel() {
        let toolpath = interpret("G1 X10\n");
        assert!(!toolpath.moves[0].is_extrusion);
    }

    #[test]
    fn test_rapid_with_increasing_feed_is_extrusion() {
        // G0 and G1 classify identically; the kind only tags the record.
        let toolpath = interpret("G0 X10 E1\n");
        assert!(toolpath.moves[0].is_extrusion);
        assert_eq!(toolpath.moves[0].kind, MoveKind::Rapid);
    }

    #[test]
    fn test_motion_line_without_axis_words_still_emits() {
        let toolpath = interpret("G1 X10\nG1\n");
        assert_eq!(toolpath.moves.len(), 2);
        assert_eq!(toolpath.moves[1].from, toolpath.moves[1].to);
        assert!(!toolpath.moves[1].is_extrusion);
    }

    #[test]
    fn test_home_zeroes_spatial_axes_only_and_emits_nothing() {
        let toolpath = interpret("G1 X10 Y10 Z10 E5\nG28\nG1 X1\n");
        assert_eq!(toolpath.moves.len(), 2);
        assert_eq!(toolpath.moves[1].from, Position::new(0.0, 0.0, 0.0, 5.0));
    }

    #[test]
    fn test_set_position_writes_directly_in_relative_mode() {
        let toolpath = interpret("G91\nG1 X10\nG92 X100 E50\nG1 X1 E1\n");
        assert_eq!(toolpath.moves.len(), 2);
        // G92 is an absolute write even in relative mode; the following
        // relative move starts from it.
        assert_eq!(toolpath.moves[1].from, Position::new(100.0, 0.0, 0.0, 50.0));
        assert_eq!(toolpath.moves[1].to, Position::new(101.0, 0.0, 0.0, 51.0));
        assert!(toolpath.moves[1].is_extrusion);
    }

    #[test]
    fn test_set_position_feed_reset_enables_reuse() {
        // The common "G92 E0" between layers: next E1 is an increase again.
        let toolpath = interpret("G1 X1 E10\nG92 E0\nG1 X2 E1\n");
        assert!(toolpath.moves[1].is_extrusion);
    }

    #[test]
    fn test_continuity_across_all_moves() {
        let toolpath = interpret("G1 X10\nG91\nG1 Y5 E1\nG90\nG1 Z2\nG0 X0 Y0\nG1 X3 E2\n");
        assert_eq!(toolpath.moves.len(), 5);
        for pair in toolpath.moves.windows(2) {
            assert_eq!(pair[1].from, pair[0].to);
        }
    }

    #[test]
    fn test_register_rewrites_thread_into_next_move() {
        let toolpath = interpret("G1 X10 Y10 Z10 E5\nG28\nG92 Y7\nG1 X1\n");
        // The second move starts from the rewritten register, never a
        // stale snapshot.
        assert_eq!(toolpath.moves[1].from, Position::new(0.0, 7.0, 0.0, 5.0));
    }

    #[test]
    fn test_unknown_commands_change_nothing() {
        let with_noise = interpret("M104 S210\nG1 X10 E1\nG4 P100\nG1 X20 E2\nT0\n");
        let without = interpret("G1 X10 E1\nG1 X20 E2\n");
        assert_eq!(with_noise.moves.len(), without.moves.len());
        for (a, b) in with_noise.moves.iter().zip(&without.moves) {
            assert_eq!(a.from, b.from);
            assert_eq!(a.to, b.to);
            assert_eq!(a.kind, b.kind);
            assert_eq!(a.is_extrusion, b.is_extrusion);
        }
    }

    #[test]
    fn test_line_numbers_count_raw_lines() {
        let toolpath = interpret("; header\n\nG1 X1\n  ; note\nG1 X2\n");
        let numbers: Vec<u32> = toolpath.moves.iter().map(|m| m.line_number).collect();
        assert_eq!(numbers, vec![3, 5]);
    }

    #[test]
    fn test_raw_text_is_comment_stripped_and_trimmed() {
        let toolpath = interpret("  G1 X1 ; out\n");
        assert_eq!(toolpath.moves[0].raw, "G1 X1");
    }

    #[test]
    fn test_commands_are_case_insensitive() {
        let lower = interpret("g90\ng1 x10 y5 e1\n");
        let upper = interpret("G90\nG1 X10 Y5 E1\n");
        assert_eq!(lower.moves[0].to, upper.moves[0].to);
        assert_eq!(lower.moves[0].is_extrusion, upper.moves[0].is_extrusion);
    }

    #[test]
    fn test_empty_document_is_valid() {
        let toolpath = interpret("");
        assert!(toolpath.moves.is_empty());
        assert!(toolpath.diagnostics.is_empty());
    }

    #[test]
    fn test_malformed_word_reported_and_pass_continues() {
        let toolpath = interpret("G1 X10 E1\nG1 Xoops E2\nG1 X20 E3\n");
        assert_eq!(toolpath.diagnostics.len(), 1);
        assert_eq!(toolpath.diagnostics[0].line_number, 2);
        assert_eq!(toolpath.moves.len(), 3);
        // The malformed X is treated as omitted; the line still moves E.
        assert_eq!(toolpath.moves[1].to, Position::new(10.0, 0.0, 0.0, 2.0));
        assert_eq!(toolpath.moves[2].to, Position::new(20.0, 0.0, 0.0, 3.0));
    }

    #[test]
    fn test_malformed_e_word_is_not_extrusion() {
        let toolpath = interpret("G1 X10 Enope\n");
        assert_eq!(toolpath.diagnostics.len(), 1);
        assert!(!toolpath.moves[0].is_extrusion);
        assert_eq!(toolpath.moves[0].to.e, 0.0);
    }
}
