use std::fmt;

/// Base of every search request; the encoded query is appended verbatim.
pub const API_ENDPOINT: &str = "https://hn.algolia.com/api/v1/search?query=";

/// Fully-qualified request target for one query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint(String);

impl Endpoint {
    pub fn for_query(api_endpoint: &str, query: &str) -> Self {
        let encoded: String = url::form_urlencoded::byte_serialize(query.as_bytes()).collect();
        Self(format!("{api_endpoint}{encoded}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
