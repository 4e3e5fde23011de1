/// Status classes the client distinguishes in a response header block.
///
/// Only three statuses are recognised. Everything else is
/// [`StatusClass::Unknown`] and ends the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusClass {
    /// 200 OK
    Ok,
    /// 404 File not found
    NotFound,
    /// 301 Moved Permanently
    MovedPermanently,
    /// Anything the client does not handle
    Unknown,
}

/// Classes searched for in the header block, in priority order.
const PRIORITY: [StatusClass; 3] = [
    StatusClass::Ok,
    StatusClass::NotFound,
    StatusClass::MovedPermanently,
];

impl StatusClass {
    /// Returns the numeric HTTP status code, if the class has one.
    ///
    /// # Example
    ///
    /// ```
    /// # use httpget::http::response::StatusClass;
    /// assert_eq!(StatusClass::Ok.as_u16(), Some(200));
    /// assert_eq!(StatusClass::Unknown.as_u16(), None);
    /// ```
    pub fn as_u16(&self) -> Option<u16> {
        match self {
            StatusClass::Ok => Some(200),
            StatusClass::NotFound => Some(404),
            StatusClass::MovedPermanently => Some(301),
            StatusClass::Unknown => None,
        }
    }

    /// Returns the literal text that identifies this class in a header block.
    pub fn marker(&self) -> Option<&'static str> {
        match self {
            StatusClass::Ok => Some("200 OK"),
            StatusClass::NotFound => Some("404 File not found"),
            StatusClass::MovedPermanently => Some("301 Moved Permanently"),
            StatusClass::Unknown => None,
        }
    }
}

/// Classifies a raw header block (status line plus headers, terminator excluded).
///
/// The status line is not tokenised. Each marker is matched as a substring
/// anywhere in the block, and the first marker found in priority order wins.
///
/// # Example
///
/// ```
/// # use httpget::http::response::{classify, StatusClass};
/// assert_eq!(classify(b"HTTP/1.0 200 OK\r\nServer: x"), StatusClass::Ok);
/// assert_eq!(classify(b"HTTP/1.1 404 Not Found"), StatusClass::Unknown);
/// ```
pub fn classify(header: &[u8]) -> StatusClass {
    PRIORITY
        .into_iter()
        .find(|class| {
            class
                .marker()
                .is_some_and(|marker| contains(header, marker.as_bytes()))
        })
        .unwrap_or(StatusClass::Unknown)
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|w| w == needle)
}
