//! httpget - minimal HTTP/1.0 GET client
//!
//! Fetches a single URL over plain TCP and streams the response body into a
//! file, leaving a sentinel line there instead when the fetch fails.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
