//! Coercion and cleanup helpers.

use std::collections::HashMap;

use chrono::NaiveDateTime;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::error::{StringKitError, StringKitResult};

/// Tag-shaped pattern: `<` followed by anything that is not `>`,
/// closed by `>`. A heuristic, not an HTML parser.
static HTML_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("static pattern"));

/// Locale-invariant date/time formats, tried in order.
const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%m/%d/%Y %H:%M:%S",
];

const DATE_ONLY_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y"];

/// Parses `s` as a base-10 integer.
pub fn to_int(s: &str) -> StringKitResult<i64> {
    s.parse::<i64>()
        .map_err(|e| StringKitError::parse(format!("invalid integer literal {:?}: {}", s, e)))
}

/// Parses `s` as a date/time using a fixed list of locale-invariant
/// formats: ISO-8601 (with `T` or space separator), US-style
/// month/day/year, and the date-only forms of both (midnight).
pub fn to_date_time(s: &str) -> StringKitResult<NaiveDateTime> {
    let trimmed = s.trim();

    for format in DATE_TIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(dt);
        }
    }

    for format in DATE_ONLY_FORMATS {
        if let Ok(date) = chrono::NaiveDate::parse_from_str(trimmed, format) {
            return Ok(date.and_hms_opt(0, 0, 0).unwrap_or_default());
        }
    }

    Err(StringKitError::parse(format!(
        "unrecognized date/time literal {:?}",
        s
    )))
}

/// Splits `s` on `split_at` and parses every piece as an integer.
///
/// Empty or all-whitespace input yields an empty list. The first piece
/// that is not a valid integer fails the whole call, no partial
/// results.
pub fn to_int_list(s: &str, split_at: char) -> StringKitResult<Vec<i64>> {
    if s.trim().is_empty() {
        return Ok(Vec::new());
    }

    s.split(split_at).map(to_int).collect()
}

/// Parses a query-string-like `key=value&key=value` form into a map.
///
/// Each pair is split on every `=` and only the first two tokens are
/// kept, so a stray second `=` truncates the value. A pair with no `=`
/// is a format error. Duplicate keys overwrite, so the last occurrence
/// wins.
pub fn to_dictionary(s: &str) -> StringKitResult<HashMap<String, String>> {
    let mut map = HashMap::new();

    for pair in s.split('&') {
        let mut tokens = pair.split('=');
        match (tokens.next(), tokens.next()) {
            (Some(key), Some(value)) => {
                map.insert(key.to_string(), value.to_string());
            }
            _ => {
                return Err(StringKitError::format(format!(
                    "pair {:?} missing '=' separator",
                    pair
                )));
            }
        }
    }

    Ok(map)
}

/// Strips everything shaped like an HTML tag, then replaces the
/// literal `&nbsp;` entity with a plain space.
///
/// This is a heuristic over the generic tag pattern; nesting, comments
/// and CDATA sections are not understood.
pub fn remove_html(s: &str) -> String {
    let stripped = HTML_TAG.replace_all(s, "");
    debug!(
        removed = s.len() - stripped.len(),
        "stripped tag-shaped regions"
    );
    stripped.replace("&nbsp;", " ")
}

/// Replaces every line break with a single space.
///
/// CR-LF pairs are replaced first so they collapse to one space, then
/// any remaining lone LF or CR.
pub fn remove_new_line(s: &str) -> String {
    s.replace("\r\n", " ").replace('\n', " ").replace('\r', " ")
}
