//! Splits an `http://host[:port]/path` URL into the pieces the client needs.

use url::Url;

use crate::error::TargetError;

const SCHEME: &str = "http://";

/// Port used when the URL names none.
pub const DEFAULT_PORT: u16 = 80;

/// Where a single request goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    /// Host name or address literal (IPv6 stays bracketed, e.g. "[::1]")
    pub host: String,
    pub port: u16,
    /// Resource path, always starting with `/`, exactly as written in the URL
    pub path: String,
}

impl Target {
    /// Validates `url` and splits it.
    ///
    /// Host and path are kept exactly as written: no case folding, no
    /// percent-decoding, no rewriting of numeric addresses. [`Url`] only
    /// validates the authority and reads the port.
    pub fn parse(url: &str) -> Result<Self, TargetError> {
        let rest = url
            .strip_prefix(SCHEME)
            .ok_or_else(|| TargetError::InvalidProtocol(url.to_string()))?;

        let slash = rest
            .find('/')
            .ok_or_else(|| TargetError::MissingPath(url.to_string()))?;
        if slash == rest.len() - 1 {
            return Err(TargetError::MissingPath(url.to_string()));
        }

        let (authority, path) = rest.split_at(slash);
        let (host, port) = parse_authority(authority)?;

        Ok(Self {
            host,
            port,
            path: path.to_string(),
        })
    }
}

fn parse_authority(authority: &str) -> Result<(String, u16), TargetError> {
    let invalid = |reason: &str| TargetError::InvalidAuthority {
        authority: authority.to_string(),
        reason: reason.to_string(),
    };

    if authority.is_empty() {
        return Err(invalid("empty host"));
    }

    let parsed = Url::parse(&format!("{SCHEME}{authority}/")).map_err(|e| invalid(&e.to_string()))?;

    if !parsed.username().is_empty()
        || parsed.password().is_some()
        || parsed.query().is_some()
        || parsed.fragment().is_some()
        || parsed.path() != "/"
    {
        return Err(invalid("unexpected characters in host"));
    }

    if parsed.host_str().is_none_or(str::is_empty) {
        return Err(invalid("empty host"));
    }

    let host = raw_host(authority);
    if host.is_empty() {
        return Err(invalid("empty host"));
    }

    Ok((host.to_string(), parsed.port().unwrap_or(DEFAULT_PORT)))
}

/// Host part of an already validated authority, brackets kept for IPv6.
fn raw_host(authority: &str) -> &str {
    if authority.starts_with('[') {
        match authority.find(']') {
            Some(end) => &authority[..=end],
            None => authority,
        }
    } else {
        authority
            .rsplit_once(':')
            .map_or(authority, |(host, _)| host)
    }
}
