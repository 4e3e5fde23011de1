use std::fmt;
use std::process::ExitCode;

use crate::error::{ConnectError, ResponseError, TargetError};

/// How a run ended. Exactly one per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// 200 OK, body streamed until the peer closed
    Success { bytes: u64 },
    /// 404 File not found
    NotFound,
    /// 301 Moved Permanently; not followed
    Redirect,
    /// Header block matched no known status
    UnknownStatus,
    /// Peer closed before the header block ended
    IncompleteResponse,
    /// Resolution failed or no candidate accepted
    NoConnection,
    /// URL is not `http://`
    InvalidProtocol,
    /// URL has no usable resource path
    InvalidUrl,
    /// Request could not be written in full
    SendFailed,
    /// Non-recoverable I/O error while reading or writing the body
    Fatal,
}

impl Outcome {
    /// Line written to the sink for outcomes that produce no body.
    ///
    /// Redirects, unknown statuses and transport failures after connecting
    /// leave the sink untouched.
    pub fn sentinel(&self) -> Option<&'static str> {
        match self {
            Outcome::NoConnection => Some("NOCONNECTION"),
            Outcome::NotFound | Outcome::InvalidUrl => Some("FILENOTFOUND"),
            Outcome::InvalidProtocol => Some("INVALIDPROTOCOL"),
            _ => None,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success { .. })
    }

    /// 0 for a fully streamed 200, 1 for everything else.
    pub fn exit_status(&self) -> u8 {
        if self.is_success() { 0 } else { 1 }
    }

    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.exit_status())
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Success { bytes } => write!(f, "success ({bytes} body bytes)"),
            Outcome::NotFound => write!(f, "not found"),
            Outcome::Redirect => write!(f, "redirect (unsupported)"),
            Outcome::UnknownStatus => write!(f, "unknown status"),
            Outcome::IncompleteResponse => write!(f, "incomplete response"),
            Outcome::NoConnection => write!(f, "no connection"),
            Outcome::InvalidProtocol => write!(f, "invalid protocol"),
            Outcome::InvalidUrl => write!(f, "invalid url"),
            Outcome::SendFailed => write!(f, "send failed"),
            Outcome::Fatal => write!(f, "fatal i/o error"),
        }
    }
}

impl From<&TargetError> for Outcome {
    fn from(err: &TargetError) -> Self {
        match err {
            TargetError::InvalidProtocol(_) => Outcome::InvalidProtocol,
            TargetError::MissingPath(_) => Outcome::InvalidUrl,
            // An unusable host can never be resolved, so it reads as no connection.
            TargetError::InvalidAuthority { .. } => Outcome::NoConnection,
        }
    }
}

impl From<&ConnectError> for Outcome {
    fn from(err: &ConnectError) -> Self {
        match err {
            ConnectError::Resolve { .. } | ConnectError::NoRoute { .. } => Outcome::NoConnection,
            ConnectError::SendFailed { .. } => Outcome::SendFailed,
        }
    }
}

impl From<&ResponseError> for Outcome {
    fn from(err: &ResponseError) -> Self {
        match err {
            ResponseError::NotFound => Outcome::NotFound,
            ResponseError::Redirect => Outcome::Redirect,
            ResponseError::UnknownStatus => Outcome::UnknownStatus,
            ResponseError::Incomplete { .. } => Outcome::IncompleteResponse,
            ResponseError::Io(_) | ResponseError::Sink(_) | ResponseError::Finished => Outcome::Fatal,
        }
    }
}
