//! Null/empty classification helpers.
//!
//! Absence is modeled as `Option<&str>` so the signatures say which
//! helpers accept a missing string. Helpers taking a plain `&str`
//! require the caller to guarantee presence.

/// Returns `true` if the string is absent or zero-length.
pub fn is_null_or_empty(s: Option<&str>) -> bool {
    match s {
        Some(s) => s.is_empty(),
        None => true,
    }
}

/// Returns `true` if the string is present and non-empty.
pub fn is_not_null_or_empty(s: Option<&str>) -> bool {
    !is_null_or_empty(s)
}

/// Returns `true` if the string is zero-length.
pub fn is_empty(s: &str) -> bool {
    s.is_empty()
}

/// Returns `true` if the string is absent.
pub fn is_null(s: Option<&str>) -> bool {
    s.is_none()
}

/// Returns `true` if the string is present.
pub fn is_not_null(s: Option<&str>) -> bool {
    s.is_some()
}

/// Collapses an empty string into `None`; present non-empty input
/// passes through unchanged.
pub fn as_null_if_empty(s: Option<&str>) -> Option<&str> {
    match s {
        Some("") | None => None,
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_null_or_empty() {
        assert!(is_null_or_empty(None));
        assert!(is_null_or_empty(Some("")));
        assert!(!is_null_or_empty(Some("a")));
    }

    #[test]
    fn test_is_not_null_or_empty() {
        assert!(is_not_null_or_empty(Some("a")));
        assert!(!is_not_null_or_empty(Some("")));
        assert!(!is_not_null_or_empty(None));
    }

    #[test]
    fn test_is_empty() {
        assert!(is_empty(""));
        assert!(!is_empty(" "));
        assert!(!is_empty("a"));
    }

    #[test]
    fn test_null_checks() {
        assert!(is_null(None));
        assert!(!is_null(Some("")));
        assert!(is_not_null(Some("")));
        assert!(!is_not_null(None));
    }

    #[test]
    fn test_as_null_if_empty() {
        assert_eq!(as_null_if_empty(Some("")), None);
        assert_eq!(as_null_if_empty(None), None);
        assert_eq!(as_null_if_empty(Some("x")), Some("x"));
        assert_eq!(as_null_if_empty(Some(" ")), Some(" "));
    }
}
