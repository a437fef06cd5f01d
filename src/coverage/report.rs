//! rcov text report splitter

use crate::error::CoverageError;

/// Width of the `=` line separating file blocks
pub const DELIMITER_WIDTH: usize = 80;

/// One file's header and its raw annotated lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawBlock<'a> {
    pub path: &'a str,
    pub lines: Vec<&'a str>,
}

fn is_delimiter(line: &str) -> bool {
    line.len() == DELIMITER_WIDTH && line.bytes().all(|b| b == b'=')
}

/// Cut the report at every delimiter line.
///
/// The delimiter characters are removed but the newline that ends a
/// delimiter line stays at the start of the next segment. Trailing empty
/// segments are dropped.
fn segments(text: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut start = 0;
    let mut offset = 0;

    for line in text.split_inclusive('\n') {
        let bare = line.strip_suffix('\n').unwrap_or(line);
        if is_delimiter(bare) {
            segments.push(&text[start..offset]);
            start = offset + bare.len();
        }
        offset += line.len();
    }
    segments.push(&text[start..]);

    while segments.last().is_some_and(|s| s.is_empty()) {
        segments.pop();
    }

    segments
}

/// Split a raw report into per-file blocks, in report order.
///
/// The preamble before the first delimiter is discarded. A path that
/// appears twice keeps its first position but takes the later body.
pub fn split_report(text: &str) -> Result<Vec<RawBlock<'_>>, CoverageError> {
    let segments = segments(text);
    let pairs = segments.get(1..).unwrap_or_default();

    if pairs.len() % 2 != 0 {
        return Err(CoverageError::MalformedReport {
            segments: pairs.len(),
        });
    }

    let mut blocks: Vec<RawBlock> = Vec::with_capacity(pairs.len() / 2);
    for pair in pairs.chunks_exact(2) {
        let block = RawBlock {
            path: pair[0].trim(),
            lines: pair[1].split('\n').collect(),
        };

        match blocks.iter_mut().find(|b| b.path == block.path) {
            Some(existing) => *existing = block,
            None => blocks.push(block),
        }
    }

    Ok(blocks)
}
