//! Shared helpers for tests that talk to a mock Last.fm server.

#![allow(dead_code)]

use lastfm_export::LastFmClient;
use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const API_KEY: &str = "test-api-key";

/// API root on the mock server.
pub fn api_root(server: &MockServer) -> String {
    format!("{}/2.0/", server.uri())
}

/// A client pointed at the mock server.
///
/// The blocking client must be built, used and dropped off the async
/// runtime, so only call this inside [`blocking`].
pub fn client(api_root: &str) -> LastFmClient {
    LastFmClient::new(API_KEY).unwrap().with_api_root(api_root)
}

/// Run blocking client code off the async runtime.
pub async fn blocking<T, F>(f: F) -> T
where
    T: Send + 'static,
    F: FnOnce() -> T + Send + 'static,
{
    tokio::task::spawn_blocking(f).await.unwrap()
}

/// A page body for a `library.*` listing.
pub fn page_body(root_key: &str, list_key: &str, items: Value, total_pages: Option<&str>) -> Value {
    let mut container = json!({ list_key: items });
    if let Some(total) = total_pages {
        container["@attr"] = json!({ "totalPages": total });
    }
    json!({ root_key: container })
}

pub fn artist(name: &str) -> Value {
    json!({
        "name": name,
        "mbid": format!("mbid-{}", name.to_lowercase()),
        "playcount": "10",
        "url": format!("https://www.last.fm/music/{}", name),
        "streamable": "0",
        "tagcount": "0",
    })
}

pub fn album(name: &str, artist: Value) -> Value {
    json!({
        "name": name,
        "artist": artist,
        "mbid": "",
        "playcount": "5",
        "url": format!("https://www.last.fm/music/x/{}", name),
    })
}

/// Expect exactly one request for `page` of `api_method` and answer with `body`.
pub async fn mount_page(server: &MockServer, api_method: &str, page: u32, body: Value) {
    Mock::given(method("GET"))
        .and(path("/2.0/"))
        .and(query_param("method", api_method))
        .and(query_param("api_key", API_KEY))
        .and(query_param("format", "json"))
        .and(query_param("page", page.to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(server)
        .await;
}
