//! Marker-based extraction helpers.
//!
//! All scanning is first-occurrence substring search, no regex. The
//! `return_empty_if_not_found` flag selects the miss policy: `true`
//! yields an empty result, `false` yields the input unchanged.

use tracing::trace;

/// Returns the prefix of `s` up to (excluding) the first occurrence of
/// `marker`.
pub fn string_before<'a>(s: &'a str, marker: &str, return_empty_if_not_found: bool) -> &'a str {
    match s.find(marker) {
        Some(pos) => &s[..pos],
        None => {
            if return_empty_if_not_found {
                ""
            } else {
                s
            }
        }
    }
}

/// Returns the suffix of `s` after the first occurrence of `marker`.
pub fn string_after<'a>(s: &'a str, marker: &str, return_empty_if_not_found: bool) -> &'a str {
    match s.find(marker) {
        Some(pos) => &s[pos + marker.len()..],
        None => {
            if return_empty_if_not_found {
                ""
            } else {
                s
            }
        }
    }
}

/// Returns the span between the first occurrence of `start` and the
/// first occurrence of `end` within the remainder after `start`.
///
/// The miss policy applies at each stage independently: when `start`
/// is missing the remainder already reflects the first stage's
/// fallback, and when `end` is missing the fallback is the original
/// `s`, not the remainder.
pub fn string_between<'a>(
    s: &'a str,
    start: &str,
    end: &str,
    return_empty_if_not_found: bool,
) -> &'a str {
    let after = string_after(s, start, return_empty_if_not_found);
    match after.find(end) {
        Some(pos) => &after[..pos],
        None => {
            if return_empty_if_not_found {
                ""
            } else {
                s
            }
        }
    }
}

/// Collects every non-empty span delimited by successive,
/// non-overlapping `start`...`end` pairs, scanning left to right.
///
/// After consuming a pair the scan resumes from the consumed `end`
/// marker, and any CR-LF sequences directly following an advance are
/// skipped before the next `start` search.
pub fn strings_between<'a>(s: &'a str, start: &str, end: &str) -> Vec<&'a str> {
    let mut result = Vec::new();
    if start.is_empty() || end.is_empty() {
        // Empty markers delimit nothing.
        return result;
    }

    let mut tmp = skip_crlf(string_after(s, start, true));
    while let Some(pos) = tmp.find(end) {
        if pos > 0 {
            result.push(&tmp[..pos]);
        }
        tmp = skip_crlf(string_after(&tmp[pos..], start, true));
    }

    trace!(spans = result.len(), "strings_between scan complete");
    result
}

fn skip_crlf(mut s: &str) -> &str {
    while let Some(rest) = s.strip_prefix("\r\n") {
        s = rest;
    }
    s
}

/// Removes the region from the first occurrence of `begin_at` through
/// the end of the first occurrence of `end_after`, both markers
/// inclusive.
///
/// When `begin_at` is missing the kept prefix is empty, so everything
/// before `end_after` is discarded as well. This asymmetry with
/// [`string_before`]'s miss policy is deliberate.
pub fn string_delete(s: &str, begin_at: &str, end_after: &str) -> String {
    let prefix = match s.find(begin_at) {
        Some(pos) => &s[..pos],
        None => "",
    };
    format!("{}{}", prefix, string_after(s, end_after, true))
}

/// Replaces the content strictly between the first occurrence of
/// `start` and the first subsequent occurrence of `end` with
/// `new_str`, preserving both markers. Returns `s` unchanged when
/// either marker is absent.
pub fn replace_between(s: &str, start: &str, end: &str, new_str: &str) -> String {
    let pos = match s.find(start) {
        Some(pos) => pos + start.len(),
        None => return s.to_string(),
    };

    let rest = &s[pos..];
    if !rest.contains(end) {
        return s.to_string();
    }

    format!(
        "{}{}{}{}{}",
        string_before(s, start, true),
        start,
        new_str,
        end,
        string_after(rest, end, true)
    )
}
