//! Page-by-page iteration over Last.fm list endpoints.
//!
//! Every `library.*` listing wraps its items like this:
//!
//! ```json
//! {"artists": {"artist": [ ... ], "@attr": {"page": "1", "totalPages": "3"}}}
//! ```
//!
//! [`Paginator`] requests one page at a time, only when the previous page
//! has been fully consumed. The total page count is read from the first
//! page and never revised, so iteration always terminates.

use std::collections::VecDeque;

use serde_json::Value;
use tracing::debug;

use super::client::{LastFmClient, DEFAULT_PAGE_LIMIT};
use crate::error::{ApiError, Result};
use crate::models::Record;

/// Describes one paginated endpoint call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    /// API method, e.g. `library.getartists`.
    pub method: String,
    pub user: String,
    /// Key of the container object in the response.
    pub root_key: String,
    /// Key of the item list inside the container.
    pub list_key: String,
    /// Items per page.
    pub limit: u32,
    /// Appended after `user`, `limit` and `page`.
    pub extra_params: Vec<(String, String)>,
}

impl PageRequest {
    pub fn new(method: &str, user: &str, root_key: &str, list_key: &str) -> Self {
        Self {
            method: method.to_string(),
            user: user.to_string(),
            root_key: root_key.to_string(),
            list_key: list_key.to_string(),
            limit: DEFAULT_PAGE_LIMIT,
            extra_params: Vec::new(),
        }
    }

    /// Set the number of items per page.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Add an extra query parameter.
    pub fn param<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.extra_params.push((key.into(), value.into()));
        self
    }

    fn query(&self, page: u32) -> Vec<(&str, String)> {
        let mut query = vec![
            ("user", self.user.clone()),
            ("limit", self.limit.to_string()),
            ("page", page.to_string()),
        ];
        query.extend(self.extra_params.iter().map(|(k, v)| (k.as_str(), v.clone())));
        query
    }
}

/// Lazy, forward-only iterator over every item of a paginated endpoint.
///
/// Yields `Err` at most once; after that it is exhausted.
#[derive(Debug)]
pub struct Paginator<'a> {
    client: &'a LastFmClient,
    request: PageRequest,
    /// Next page to request.
    page: u32,
    /// Known after the first page.
    total_pages: Option<u32>,
    buffer: VecDeque<Record>,
    done: bool,
}

impl<'a> Paginator<'a> {
    pub(crate) fn new(client: &'a LastFmClient, request: PageRequest) -> Self {
        Self {
            client,
            request,
            page: 1,
            total_pages: None,
            buffer: VecDeque::new(),
            done: false,
        }
    }

    /// Number of pages reported by the server, once the first page is in.
    pub fn total_pages(&self) -> Option<u32> {
        self.total_pages
    }

    /// Fetch the current page into the buffer and advance the cursor.
    fn fetch_page(&mut self) -> Result<()> {
        let method = self.request.method.as_str();
        let data = self
            .client
            .request(method, &self.request.query(self.page))?;

        let container = match data.get(&self.request.root_key) {
            Some(Value::Object(container)) => container,
            _ => return Err(ApiError::shape(&self.request.root_key, method)),
        };

        let items = page_items(container, &self.request.list_key, method)?;
        debug!(
            "{} page {} returned {} items",
            method,
            self.page,
            items.len()
        );
        self.buffer.extend(items);

        let total = *self
            .total_pages
            .get_or_insert_with(|| total_pages(container));
        if self.page == 1 {
            debug!("{} reports {} total pages", method, total);
        }

        if self.page >= total {
            self.done = true;
        } else {
            self.page += 1;
        }
        Ok(())
    }
}

impl Iterator for Paginator<'_> {
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(item) = self.buffer.pop_front() {
                return Some(Ok(item));
            }
            if self.done {
                return None;
            }
            if let Err(e) = self.fetch_page() {
                self.done = true;
                self.buffer.clear();
                return Some(Err(e));
            }
        }
    }
}

/// Extract the item list from a page container.
///
/// A single-item page comes back as a bare object instead of a list; a
/// missing list means an empty page.
fn page_items(container: &Record, list_key: &str, method: &str) -> Result<Vec<Record>> {
    match container.get(list_key) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Object(item)) => Ok(vec![item.clone()]),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| match item {
                Value::Object(record) => Ok(record.clone()),
                _ => Err(ApiError::shape(list_key, method)),
            })
            .collect(),
        Some(_) => Err(ApiError::shape(list_key, method)),
    }
}

/// Read the total page count from a container's `@attr`, defaulting to 1.
fn total_pages(container: &Record) -> u32 {
    let Some(attr) = container.get("@attr").and_then(Value::as_object) else {
        return 1;
    };

    let value = ["totalPages", "totalpages"]
        .iter()
        .filter_map(|key| attr.get(*key))
        .find(|v| !is_blank(v));

    let parsed = match value {
        Some(Value::String(s)) => s.trim().parse::<i64>().ok(),
        Some(Value::Number(n)) => n.as_i64(),
        _ => None,
    };

    parsed.map_or(1, |n| n.clamp(1, i64::from(u32::MAX)) as u32)
}

/// Values that count as "not reported" for a page-count field.
fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(false) => true,
        Value::String(s) => s.is_empty(),
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
        Value::Bool(true) => false,
    }
}
