//! Page window for list queries
//!
//! Limit/offset are applied server-side in SQL, never by slicing a
//! larger fetch.

/// Maximum rows a single list call may return
const MAX_LIMIT: i64 = 100;

/// Default page size
const DEFAULT_LIMIT: i64 = 10;

/// Validated limit/offset window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    /// Rows to return, clamped to 1..=100
    pub limit: i64,
    /// Rows to skip, floored at 0
    pub offset: i64,
}

impl Page {
    /// Create a page window with clamping.
    pub fn new(limit: i64, offset: i64) -> Self {
        Self {
            limit: limit.clamp(1, MAX_LIMIT),
            offset: offset.max(0),
        }
    }

    /// Page from optional caller-supplied values, falling back to the
    /// defaults (limit 10, offset 0).
    pub fn from_options(limit: Option<i64>, offset: Option<i64>) -> Self {
        Self::new(limit.unwrap_or(DEFAULT_LIMIT), offset.unwrap_or(0))
    }
}

impl Default for Page {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            offset: 0,
        }
    }
}
