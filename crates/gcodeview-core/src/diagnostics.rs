//! Per-line diagnostics collected during interpretation
//!
//! The interpreter tolerates anomalies instead of failing the document:
//! unknown commands, missing axis words, and blank lines are silently
//! skipped. What it does record is anything that would otherwise leak an
//! invalid numeric value into the position register. One malformed line
//! never aborts the pass; the issue is recorded and interpretation
//! continues with the next line.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::data::Axis;

/// The specific issue found on a line
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum IssueKind {
    /// An axis word was present but its numeric suffix failed to parse.
    ///
    /// The axis is treated as omitted for that line.
    #[error("malformed {axis} word {word:?}")]
    MalformedAxisWord {
        /// The axis whose word was malformed.
        axis: Axis,
        /// The offending word as written.
        word: String,
    },
}

/// A single issue tied to its source line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// 1-based line number in the source text
    pub line_number: u32,
    /// The instruction text, comment-stripped and trimmed
    pub line: String,
    /// What went wrong
    pub issue: IssueKind,
}

impl Diagnostic {
    /// Create a diagnostic for a line
    pub fn new(line_number: u32, line: impl Into<String>, issue: IssueKind) -> Self {
        Self {
            line_number,
            line: line.into(),
            issue,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line_number, self.issue)
    }
}
