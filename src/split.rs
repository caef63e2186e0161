//! Memory-efficient splitting.
//!
//! Generic whole-string split implementations materialize every
//! segment up front, which has caused out-of-memory failures on very
//! large inputs (~80 MB). [`low_mem_split`] scans with an explicit
//! cursor instead and returns borrowed slices, so the only allocation
//! is the output vector itself.

use tracing::debug;

/// Splits `s` on literal `separator` occurrences in a single
/// cursor-based pass.
///
/// Runs of adjacent separators are collapsed without emitting empty
/// segments, and a segment is emitted untrimmed only when its
/// whitespace-trimmed form is non-empty. The output therefore never
/// contains an empty or whitespace-only entry.
pub fn low_mem_split<'a>(s: &'a str, separator: &str) -> Vec<&'a str> {
    let mut list = Vec::new();

    if separator.is_empty() {
        // Degenerate separator: the whole input is one trailing remainder.
        if !s.trim().is_empty() {
            list.push(s);
        }
        return list;
    }

    let mut last_pos = 0;
    let mut pos = s.find(separator);
    while let Some(mut found) = pos {
        // Collapse runs of adjacent separators without emitting.
        while found == last_pos {
            last_pos += separator.len();
            match find_from(s, separator, last_pos) {
                Some(next) => found = next,
                None => {
                    debug!(segments = list.len(), "separator run reached end of scan");
                    return list;
                }
            }
        }

        let segment = &s[last_pos..found];
        if !segment.trim().is_empty() {
            list.push(segment);
        }
        last_pos = found + separator.len();
        pos = find_from(s, separator, last_pos);
    }

    if last_pos < s.len() {
        let segment = &s[last_pos..];
        if !segment.trim().is_empty() {
            list.push(segment);
        }
    }

    debug!(segments = list.len(), "low_mem_split complete");
    list
}

fn find_from(s: &str, needle: &str, from: usize) -> Option<usize> {
    s.get(from..)
        .and_then(|rest| rest.find(needle))
        .map(|i| i + from)
}
