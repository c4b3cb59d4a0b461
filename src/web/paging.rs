use url::form_urlencoded;

use crate::model::first_query_value;

/// Rows requested per page by the browsing views.
pub const VIEW_LIMIT: i64 = 10;

/// Previous/Next state for a paginated view.
///
/// A full page is taken to mean more rows exist, so when the last page holds
/// exactly `VIEW_LIMIT` rows "Next" stays enabled and leads to an empty page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageControls {
    pub base_path: String,
    pub page: i64,
    pub has_more: bool,
}

impl PageControls {
    pub fn new(base_path: impl Into<String>, page: i64, rows_returned: usize) -> Self {
        Self {
            base_path: base_path.into(),
            page,
            has_more: rows_returned as i64 == VIEW_LIMIT,
        }
    }

    pub fn href(&self, page: i64) -> String {
        format!("{}?page={}", self.base_path, page)
    }

    pub fn current_href(&self) -> String {
        self.href(self.page)
    }

    pub fn prev_href(&self) -> Option<String> {
        (self.page > 1).then(|| self.href(self.page - 1))
    }

    pub fn next_href(&self) -> Option<String> {
        self.has_more.then(|| self.href(self.page + 1))
    }
}

/// `?from=` on the product page: where "Back" should lead.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DetailQuery {
    pub from: Option<String>,
}

impl DetailQuery {
    pub fn from_query_string(query: Option<&str>) -> Self {
        Self {
            from: first_query_value(query, "from"),
        }
    }
}

/// Detail link that remembers where the visitor came from.
pub fn detail_href(product_id: i32, from: &str) -> String {
    let encoded: String = form_urlencoded::byte_serialize(from.as_bytes()).collect();
    format!("/products/{}?from={}", product_id, encoded)
}

/// Only same-site paths are followed back; anything else returns home.
pub fn safe_return_path(from: Option<&str>) -> &str {
    match from {
        Some(path) if path.starts_with('/') && !path.starts_with("//") && !path.contains('\\') => {
            path
        }
        _ => "/",
    }
}
