//! Line classification
//!
//! Every body line starts with a 3-character annotation column. rcov marks
//! lines that never ran with `!!`.

use super::Line;

/// Width of the annotation prefix on each body line
pub const PREFIX_WIDTH: usize = 3;

/// Prefix marking a line that was not executed
pub const NOT_RUN_MARKER: &str = "!!";

impl Line {
    /// Classify one raw annotated line
    pub fn classify(raw: &str) -> Self {
        // Counted in chars, the prefix may precede multibyte source text
        let content = match raw.char_indices().nth(PREFIX_WIDTH) {
            Some((idx, _)) => &raw[idx..],
            None => "",
        };

        Line {
            content: content.to_string(),
            was_run: !raw.starts_with(NOT_RUN_MARKER),
        }
    }

    /// Whether the line carries coverage signal
    pub fn is_significant(&self) -> bool {
        !self.content.trim().is_empty()
    }
}

/// Classify a block's raw lines, keeping only significant ones in order
pub fn classify_lines(raw_lines: &[&str]) -> Vec<Line> {
    raw_lines
        .iter()
        .map(|raw| Line::classify(raw))
        .filter(Line::is_significant)
        .collect()
}
