//! Page data loaders: query parsing plus the two page entry points.
//!
//! Loaders are the recovery boundary: they catch every API failure,
//! log it, and hand the caller an empty view-model with an `error`
//! string instead of propagating.

pub mod executions;
pub mod results;

pub const DEFAULT_LIMIT: i64 = 50;
pub const DEFAULT_OFFSET: i64 = 0;

/// Raw pagination parameters as they appear in a query string.
#[derive(Debug, Clone, Default)]
pub struct PageQuery {
    pub limit: Option<String>,
    pub offset: Option<String>,
}

impl PageQuery {
    pub fn new(limit: Option<String>, offset: Option<String>) -> Self {
        Self { limit, offset }
    }

    pub fn limit(&self) -> i64 {
        parse_or_default(self.limit.as_deref(), DEFAULT_LIMIT)
    }

    pub fn offset(&self) -> i64 {
        parse_or_default(self.offset.as_deref(), DEFAULT_OFFSET)
    }
}

/// Parse a query-string integer, falling back to `default` when the
/// value is missing, non-numeric, or zero. Zero falls back because the
/// page contract treats it as "not set", so `?limit=0` means 50.
fn parse_or_default(raw: Option<&str>, default: i64) -> i64 {
    raw.and_then(|s| s.trim().parse::<i64>().ok())
        .filter(|v| *v != 0)
        .unwrap_or(default)
}

/// Distinct values in first-seen order, scoped to the given page of
/// items only. Facet lists for the detail page filters come from here.
pub(crate) fn distinct<'a, I>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen: Vec<String> = Vec::new();
    for v in values {
        if !seen.iter().any(|s| s == v) {
            seen.push(v.to_string());
        }
    }
    seen
}
