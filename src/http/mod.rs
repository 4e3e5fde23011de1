//! HTTP/1.0 wire handling for a single GET exchange.
//!
//! # Architecture
//!
//! - **`request`**: builds the request line and fixed header set
//! - **`writer`**: writes a serialised request to the connection in full
//! - **`parser`**: incremental, I/O-free response parser
//! - **`response`**: status classification of a header block
//! - **`connection`**: read loop that feeds the parser and streams the body to a sink
//!
//! # Response State Machine
//!
//! ```text
//!        ┌───────────────┐
//!        │  HeaderPhase  │ ← Accumulate bytes, look for \r\n\r\n
//!        └───────┬───────┘
//!                │ Terminator found, header classified
//!                ├─ 200 OK → BodyPhase
//!                └─ 404 / 301 / other → Done (error)
//!                ▼
//!        ┌───────────────┐
//!        │   BodyPhase   │ ← Every read goes straight to the sink
//!        └───────┬───────┘
//!                │ Peer closed (zero-length read)
//!                ▼
//!        ┌───────────────┐
//!        │     Done      │
//!        └───────────────┘
//! ```
//!
//! A peer close during `HeaderPhase` is an incomplete response, never a success.
//!
//! # Example
//!
//! ```ignore
//! use httpget::http::connection::Connection;
//! use httpget::http::request::build_request;
//!
//! let stream = tokio::net::TcpStream::connect("127.0.0.1:8080").await?;
//! let mut conn = Connection::new(stream);
//! conn.send_request(build_request("127.0.0.1", "/index.html", "httpget")).await?;
//!
//! let mut body = Vec::new();
//! let bytes = conn.read_response(&mut body).await?;
//! ```

pub mod connection;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
