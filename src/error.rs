//! Error types for each stage of a fetch.
//!
//! Every stage owns its own enum so the driver can map a failure to exactly
//! one [`Outcome`](crate::client::Outcome) without string matching.

use std::io;

/// The input URL could not be turned into a [`Target`](crate::client::Target).
#[derive(Debug, thiserror::Error)]
pub enum TargetError {
    /// Scheme is not `http://`.
    #[error("unsupported protocol in {0:?}, only http:// is accepted")]
    InvalidProtocol(String),

    /// No `/` after the authority, or the first `/` ends the URL.
    #[error("no resource path in {0:?}")]
    MissingPath(String),

    /// Host or port could not be parsed.
    #[error("invalid host or port {authority:?}: {reason}")]
    InvalidAuthority { authority: String, reason: String },
}

/// Failures while establishing the connection or sending the request.
#[derive(Debug, thiserror::Error)]
pub enum ConnectError {
    #[error("failed to resolve {authority}: {source}")]
    Resolve {
        authority: String,
        #[source]
        source: io::Error,
    },

    /// Resolution returned nothing, or every candidate refused.
    #[error("no candidate address for {authority} accepted a connection")]
    NoRoute { authority: String },

    #[error("failed to send request after {written} of {total} bytes")]
    SendFailed {
        written: usize,
        total: usize,
        #[source]
        source: Option<io::Error>,
    },
}

/// Terminal conditions reported by the response read loop.
#[derive(Debug, thiserror::Error)]
pub enum ResponseError {
    #[error("server answered 404 File not found")]
    NotFound,

    #[error("server answered 301 Moved Permanently, redirects are not followed")]
    Redirect,

    #[error("unrecognised response status")]
    UnknownStatus,

    /// Peer closed before the header terminator arrived.
    #[error("connection closed after {received} bytes, before the header block ended")]
    Incomplete { received: usize },

    #[error("read from connection failed: {0}")]
    Io(#[source] io::Error),

    #[error("write to output failed: {0}")]
    Sink(#[source] io::Error),

    #[error("response parser already finished")]
    Finished,
}
