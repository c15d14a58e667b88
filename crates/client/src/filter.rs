//! Slash-delimited filter paths for list endpoints.

use std::fmt;

/// A filter path such as `limit/10/offset/0/tag/uci`.
///
/// OpenML list endpoints take their filters as path segments. The value is
/// passed through as given, minus leading and trailing slashes; filter names
/// are not checked against the upstream schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterPath(String);

impl FilterPath {
    /// Returns `None` when nothing is left after trimming slashes.
    pub fn new(raw: &str) -> Option<Self> {
        let trimmed = raw.trim_matches('/');
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FilterPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
