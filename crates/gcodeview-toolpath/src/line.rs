//! Line normalization: comment stripping, tokenization, axis word lookup

use regex::Regex;

use gcodeview_core::Axis;

/// A raw instruction line reduced to its significant tokens
///
/// Borrowed from the source text; the interpreter consumes one line at a
/// time and never holds a `Line` past the current iteration.
#[derive(Debug, Clone, PartialEq)]
pub struct Line<'a> {
    number: u32,
    text: &'a str,
    tokens: Vec<&'a str>,
}

/// Strip the trailing `;` comment from a raw line
fn strip_comment(raw: &str) -> &str {
    static COMMENT_REGEX: std::sync::OnceLock<Regex> = std::sync::OnceLock::new();
    let regex = COMMENT_REGEX.get_or_init(|| Regex::new(r";.*").expect("invalid regex pattern"));
    match regex.find(raw) {
        Some(m) => &raw[..m.start()],
        None => raw,
    }
}

impl<'a> Line<'a> {
    /// Normalize one raw line: strip the comment, trim, tokenize.
    ///
    /// Returns `None` when nothing remains. A blank or comment-only line
    /// has no effect at all (no move, no register mutation, no
    /// diagnostic).
    pub fn normalize(number: u32, raw: &'a str) -> Option<Self> {
        let text = strip_comment(raw).trim();
        if text.is_empty() {
            return None;
        }
        Some(Self {
            number,
            text,
            tokens: text.split_whitespace().collect(),
        })
    }

    /// 1-based line number in the source text
    pub fn number(&self) -> u32 {
        self.number
    }

    /// The comment-stripped, trimmed line text
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// The command token (first token on the line)
    pub fn command(&self) -> &'a str {
        self.tokens[0]
    }

    /// Look up the word for an axis.
    ///
    /// The word is the first token whose case-folded form starts with the
    /// axis letter. `None` when absent; `Err` carries the offending word
    /// when its numeric suffix does not parse as a float.
    pub fn axis_word(&self, axis: Axis) -> Option<Result<f64, &'a str>> {
        let letter = axis.letter();
        let word = self
            .tokens
            .iter()
            .copied()
            .find(|t| t.chars().next().is_some_and(|c| c.eq_ignore_ascii_case(&letter)))?;
        Some(word[1..].parse::<f64>().map_err(|_| word))
    }
}
