//! JSON filter queries for Spire list endpoints
//!
//! Spire filters list results with a JSON object passed URL-encoded in
//! the `filter` query parameter, e.g.
//! `?filter=%7B%22number%22%3A%220000064405%22%7D&limit=50`.

use serde_json::{Map, Value};

/// An equality filter plus an optional record limit.
#[derive(Debug, Clone, Default)]
pub struct FilterQuery {
    filter: Map<String, Value>,
    limit: Option<u32>,
}

impl FilterQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an exact-match condition on a field.
    pub fn eq(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.filter.insert(field.to_string(), value.into());
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Render as a query string with the filter JSON URL-encoded.
    pub fn to_query_string(&self) -> String {
        let json = Value::Object(self.filter.clone()).to_string();
        let mut out = format!("filter={}", urlencoding::encode(&json));
        if let Some(limit) = self.limit {
            out.push_str(&format!("&limit={limit}"));
        }
        out
    }
}
