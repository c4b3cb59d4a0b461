use url::form_urlencoded;

use crate::model::parse_int_prefix;

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_LIMIT: i64 = 10;

/// Raw `?page=&limit=` query. Values stay strings so that junk input falls
/// back to the defaults instead of being rejected by the extractor.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PageQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl PageQuery {
    /// Build from a raw query string. A repeated key keeps its first value.
    pub fn from_query_string(query: Option<&str>) -> Self {
        Self {
            page: first_query_value(query, "page"),
            limit: first_query_value(query, "limit"),
        }
    }
}

/// First value of `key` in a urlencoded query string, decoded.
pub fn first_query_value(query: Option<&str>, key: &str) -> Option<String> {
    form_urlencoded::parse(query?.as_bytes())
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
}

/// 1-indexed page window over a fixed row ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: i64,
    pub limit: i64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl Pagination {
    pub fn new(page: i64, limit: i64) -> Self {
        Self {
            page: positive_or(Some(page), DEFAULT_PAGE),
            limit: positive_or(Some(limit), DEFAULT_LIMIT),
        }
    }

    pub fn from_query(query: &PageQuery) -> Self {
        Self {
            page: parse_or_default(query.page.as_deref(), DEFAULT_PAGE),
            limit: parse_or_default(query.limit.as_deref(), DEFAULT_LIMIT),
        }
    }

    /// Rows skipped before this page starts.
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.limit)
    }

    /// Slice bounds for in-memory stores, clamped to `len`.
    pub fn window(&self, len: usize) -> std::ops::Range<usize> {
        let start = usize::try_from(self.offset()).unwrap_or(usize::MAX).min(len);
        let limit = usize::try_from(self.limit).unwrap_or(usize::MAX);
        start..start.saturating_add(limit).min(len)
    }
}

/// Parse a page-style parameter; missing, non-numeric, zero and negative
/// values all resolve to `default`.
pub fn parse_or_default(raw: Option<&str>, default: i64) -> i64 {
    positive_or(raw.and_then(parse_int_prefix), default)
}

fn positive_or(value: Option<i64>, default: i64) -> i64 {
    match value {
        Some(v) if v >= 1 => v,
        _ => default,
    }
}
