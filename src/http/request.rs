/// Protocol version sent on every request line.
pub const HTTP_VERSION: &str = "HTTP/1.0";

/// A GET request ready to be serialised.
///
/// Headers keep insertion order; some conservative servers care.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// The resource path, sent verbatim (e.g. "/index.html")
    pub path: String,
    /// Protocol version, always "HTTP/1.0" for requests built here
    pub version: String,
    /// Header lines in the order they go on the wire
    pub headers: Vec<(String, String)>,
}

/// Builder for [`Request`].
#[derive(Debug)]
pub struct RequestBuilder {
    path: String,
    headers: Vec<(String, String)>,
}

impl RequestBuilder {
    /// Starts a GET request for `path`.
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            headers: Vec::new(),
        }
    }

    /// Appends a header line. Duplicates are kept.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((key.into(), value.into()));
        self
    }

    pub fn build(self) -> Request {
        Request {
            path: self.path,
            version: HTTP_VERSION.to_string(),
            headers: self.headers,
        }
    }
}

impl Request {
    /// Serialises the request line, headers and the empty line that ends them.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::new();

        buf.extend_from_slice(format!("GET {} {}\r\n", self.path, self.version).as_bytes());

        for (k, v) in &self.headers {
            buf.extend_from_slice(k.as_bytes());
            buf.extend_from_slice(b": ");
            buf.extend_from_slice(v.as_bytes());
            buf.extend_from_slice(b"\r\n");
        }

        buf.extend_from_slice(b"\r\n");
        buf
    }
}

/// Builds the exact request this client sends for `path` on `host`.
///
/// # Example
///
/// ```
/// # use httpget::http::request::build_request;
/// let bytes = build_request("example.com", "/index.html", "httpget/0.1.0");
/// assert!(bytes.starts_with(b"GET /index.html HTTP/1.0\r\n"));
/// assert!(bytes.ends_with(b"Connection: Keep-Alive\r\n\r\n"));
/// ```
pub fn build_request(host: &str, path: &str, user_agent: &str) -> Vec<u8> {
    RequestBuilder::get(path)
        .header("User-Agent", user_agent)
        .header("Accept", "*/*")
        .header("Host", host)
        .header("Connection", "Keep-Alive")
        .build()
        .to_bytes()
}
