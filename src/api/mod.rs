//! Last.fm API access.
//!
//! - [`LastFmClient`]: authenticated single requests and the library listings
//! - [`Paginator`]: lazy iteration over every page of a list endpoint

pub mod client;
pub mod pagination;

pub use client::{LastFmClient, API_ROOT, DEFAULT_PAGE_LIMIT, DEFAULT_TIMEOUT};
pub use pagination::{PageRequest, Paginator};
