//! Blocking client for the Google Books volume search API.

use url::Url;

use crate::{
    query::{Query, SearchCategory, SearchOptions, SearchQuery, VOLUMES_PATH},
    transport::{HttpTransport, Transport},
    types::SearchResponse,
    DecodeError, Error, TransportError,
};

/// Scheme and host of the production API.
pub const API_BASE_URL: &str = "https://www.googleapis.com";

/// Client for the Google Books volume search API.
///
/// Holds no per-request state: every call builds its own request, performs
/// exactly one GET through the transport, and decodes the body. Nothing is
/// cached or retried.
pub struct Client<T = HttpTransport> {
    /// Base URL for the API. Defaults to `https://www.googleapis.com`.
    base_api_url: String,
    /// Appended as the `key` parameter when set.
    api_key: Option<String>,
    transport: T,
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl Client {
    /// Creates a new client pointing at the production API.
    pub fn new() -> Self {
        Self::with_transport(HttpTransport::new())
    }

    /// Creates a new client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Self {
        Self::new().base_url(base_url)
    }
}

impl<T: Transport> Client<T> {
    /// Creates a client that sends its requests through `transport`.
    pub fn with_transport(transport: T) -> Self {
        Self {
            base_api_url: API_BASE_URL.to_string(),
            api_key: None,
            transport,
        }
    }

    /// Replaces the base URL (scheme, host and optional prefix path).
    pub fn base_url(mut self, base_url: &str) -> Self {
        self.base_api_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Sends `key=<api_key>` with every request. An empty key is ignored.
    pub fn with_api_key(mut self, api_key: &str) -> Self {
        if !api_key.is_empty() {
            self.api_key = Some(api_key.to_string());
        }
        self
    }

    /// Builds the full request URL for a query against this client's base URL.
    pub fn request_url(&self, query: &SearchQuery) -> Result<Url, Error> {
        let url = Url::parse(format!("{}{}", &self.base_api_url, VOLUMES_PATH).as_str())
            .map_err(|e| {
                tracing::error!("Invalid URL constructed: {}", e);
                TransportError::InvalidUrl(e.to_string())
            })?;
        let mut url = query.add_to_url(&url);
        if let Some(api_key) = &self.api_key {
            url.query_pairs_mut().append_pair("key", api_key);
        }
        Ok(url)
    }

    /// Runs a prepared [`SearchQuery`].
    pub fn execute(&self, query: &SearchQuery) -> Result<SearchResponse, Error> {
        let url = self.request_url(query)?;
        tracing::debug!("GET {}", redact_key(&url));

        let resp = self.transport.get(&url)?;

        if !resp.is_success() {
            let snippet = truncate_body(&resp.body);
            tracing::error!("Request failed with status {}: {}", resp.status, snippet);
            return Err(TransportError::HttpStatus {
                status: resp.status,
                body: snippet,
            }
            .into());
        }

        SearchResponse::decode(&resp.body).map_err(|e: DecodeError| {
            tracing::error!(
                "Failed to parse resource: {} | body: {}",
                e,
                truncate_body(&resp.body)
            );
            e.into()
        })
    }

    /// Searches `category` for `term`. `options` may be `None` to use the API defaults.
    pub fn search(
        &self,
        category: SearchCategory,
        term: &str,
        options: Option<&SearchOptions>,
    ) -> Result<SearchResponse, Error> {
        let query = SearchQuery {
            category,
            term: term.to_string(),
            options: options.cloned(),
        };
        self.execute(&query)
    }

    /// Searches volume titles.
    pub fn title_search(
        &self,
        term: &str,
        options: Option<&SearchOptions>,
    ) -> Result<SearchResponse, Error> {
        self.search(SearchCategory::Title, term, options)
    }

    /// Searches author names.
    pub fn author_search(
        &self,
        term: &str,
        options: Option<&SearchOptions>,
    ) -> Result<SearchResponse, Error> {
        self.search(SearchCategory::Author, term, options)
    }

    /// Searches publisher names.
    pub fn publisher_search(
        &self,
        term: &str,
        options: Option<&SearchOptions>,
    ) -> Result<SearchResponse, Error> {
        self.search(SearchCategory::Publisher, term, options)
    }

    /// Searches subject categories.
    pub fn subject_search(
        &self,
        term: &str,
        options: Option<&SearchOptions>,
    ) -> Result<SearchResponse, Error> {
        self.search(SearchCategory::Subject, term, options)
    }

    /// Looks volumes up by ISBN-10 or ISBN-13.
    pub fn isbn_search(
        &self,
        term: &str,
        options: Option<&SearchOptions>,
    ) -> Result<SearchResponse, Error> {
        self.search(SearchCategory::Isbn, term, options)
    }

    /// Looks volumes up by Library of Congress Control Number.
    pub fn lccn_search(
        &self,
        term: &str,
        options: Option<&SearchOptions>,
    ) -> Result<SearchResponse, Error> {
        self.search(SearchCategory::Lccn, term, options)
    }

    /// Looks volumes up by OCLC (WorldCat) number.
    pub fn oclc_search(
        &self,
        term: &str,
        options: Option<&SearchOptions>,
    ) -> Result<SearchResponse, Error> {
        self.search(SearchCategory::Oclc, term, options)
    }
}

/// Searches with a default [`Client`]: production endpoint, no API key, no timeout.
pub fn search(
    category: SearchCategory,
    term: &str,
    options: Option<&SearchOptions>,
) -> Result<SearchResponse, Error> {
    Client::new().search(category, term, options)
}

fn truncate_body(body: &[u8]) -> String {
    const MAX: usize = 2000;
    let body = String::from_utf8_lossy(body);
    if body.len() <= MAX {
        return body.into_owned();
    }
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...[truncated]", &body[..end])
}

fn redact_key(url: &Url) -> String {
    let mut redacted = url.clone();
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let v = if k == "key" { "REDACTED".into() } else { v };
            (k.into_owned(), v.into_owned())
        })
        .collect();
    redacted.query_pairs_mut().clear().extend_pairs(pairs);
    redacted.to_string()
}
