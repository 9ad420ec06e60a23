//! Last.fm REST API client.
//!
//! All network interaction lives here. The client is stateless apart from
//! the API key, the per-request timeout and the API root, so it can be
//! reused freely.

use std::time::Duration;

use reqwest::blocking::Client;
use tracing::{debug, error};

use super::pagination::{PageRequest, Paginator};
use crate::error::{ProtocolError, Result};
use crate::models::{value_text, Record};

/// Base URL for the Last.fm API.
pub const API_ROOT: &str = "http://ws.audioscrobbler.com/2.0/";

/// Network timeout for each HTTP request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Items requested per page unless the caller says otherwise.
pub const DEFAULT_PAGE_LIMIT: u32 = 1000;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Blocking Last.fm API client.
///
/// # Example
///
/// ```rust,no_run
/// use lastfm_export::LastFmClient;
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = LastFmClient::new("your_api_key")?;
///     let artists = client.get_user_artists("rj", 1000)?;
///     println!("{} artists", artists.len());
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct LastFmClient {
    http: Client,
    api_key: String,
    api_root: String,
    timeout: Duration,
}

impl LastFmClient {
    /// Create a new client for the given API key.
    ///
    /// The key is not validated locally; Last.fm rejects bad keys on the
    /// first request.
    pub fn new<S: Into<String>>(api_key: S) -> Result<Self> {
        let http = Client::builder().user_agent(USER_AGENT).build()?;

        Ok(Self {
            http,
            api_key: api_key.into(),
            api_root: API_ROOT.to_string(),
            timeout: DEFAULT_TIMEOUT,
        })
    }

    /// Override the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Point the client at a different API root.
    pub fn with_api_root<S: Into<String>>(mut self, api_root: S) -> Self {
        self.api_root = api_root.into();
        self
    }

    /// The per-request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// The API root requests are sent to.
    pub fn api_root(&self) -> &str {
        &self.api_root
    }

    /// Perform a single GET request against the API root.
    ///
    /// `method`, `api_key` and `format=json` are added automatically; `params`
    /// follow them in order.
    ///
    /// # Errors
    ///
    /// - `Transport` if no response arrived within the timeout.
    /// - `Protocol` for a non-success status, a body that is not a JSON
    ///   object, or a body carrying an `error` field.
    pub fn request(&self, method: &str, params: &[(&str, String)]) -> Result<Record> {
        debug!("GET {} method={} params={:?}", self.api_root, method, params);

        let mut query: Vec<(&str, &str)> = vec![
            ("method", method),
            ("api_key", self.api_key.as_str()),
            ("format", "json"),
        ];
        query.extend(params.iter().map(|(k, v)| (*k, v.as_str())));

        let response = self
            .http
            .get(&self.api_root)
            .query(&query)
            .timeout(self.timeout)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProtocolError::Status {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("").to_string(),
            }
            .into());
        }

        let body = response.text()?;
        let data: Record = serde_json::from_str(&body).map_err(ProtocolError::Decode)?;

        if let Some(code) = data.get("error") {
            let code = value_text(code);
            let message = data
                .get("message")
                .map(value_text)
                .unwrap_or_else(|| "Unknown Last.fm error".to_string());
            error!("Last.fm API error {} on {}: {}", code, method, message);
            return Err(ProtocolError::Remote { code, message }.into());
        }

        Ok(data)
    }

    /// Lazily walk every page of a paginated endpoint.
    pub fn paginate(&self, request: PageRequest) -> Paginator<'_> {
        Paginator::new(self, request)
    }

    /// Fetch ALL artists in a user's library, in server order.
    pub fn get_user_artists(&self, user: &str, limit_per_page: u32) -> Result<Vec<Record>> {
        let request = PageRequest::new("library.getartists", user, "artists", "artist")
            .limit(limit_per_page);
        self.paginate(request).collect()
    }

    /// Fetch ALL albums in a user's library, in server order.
    ///
    /// A non-empty `artist_filter` restricts the listing to one artist.
    pub fn get_user_albums(
        &self,
        user: &str,
        limit_per_page: u32,
        artist_filter: Option<&str>,
    ) -> Result<Vec<Record>> {
        let mut request = PageRequest::new("library.getalbums", user, "albums", "album")
            .limit(limit_per_page);
        if let Some(artist) = artist_filter.filter(|a| !a.is_empty()) {
            request = request.param("artist", artist);
        }
        self.paginate(request).collect()
    }
}
