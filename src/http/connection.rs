use std::io::ErrorKind;

use bytes::BytesMut;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::error::{ConnectError, ResponseError};
use crate::http::parser::{ResponseParser, Step};
use crate::http::writer::RequestWriter;

/// Default number of bytes requested per read.
pub const DEFAULT_READ_SIZE: usize = 2048;

/// One client connection carrying a single request and its response.
///
/// Owns the stream; dropping the `Connection` closes it.
pub struct Connection<S> {
    stream: S,
    buffer: BytesMut,
    read_size: usize,
    parser: ResponseParser,
}

impl<S> Connection<S> {
    pub fn new(stream: S) -> Self {
        Self::with_read_size(stream, DEFAULT_READ_SIZE)
    }

    pub fn with_read_size(stream: S, read_size: usize) -> Self {
        let read_size = read_size.max(1);
        Self {
            stream,
            buffer: BytesMut::with_capacity(read_size),
            read_size,
            parser: ResponseParser::new(),
        }
    }
}

impl<S: AsyncWrite + Unpin> Connection<S> {
    /// Sends the full request. A short write is fatal; nothing is retried.
    pub async fn send_request(&mut self, request: Vec<u8>) -> Result<(), ConnectError> {
        let total = request.len();
        let mut writer = RequestWriter::new(request);
        writer.write_to_stream(&mut self.stream).await?;

        tracing::debug!(bytes = total, "Request sent");
        Ok(())
    }
}

impl<S: AsyncRead + Unpin> Connection<S> {
    /// Reads the response until the peer closes, streaming the body into `sink`.
    ///
    /// Returns the number of body bytes written. Nothing reaches `sink` unless
    /// the header block classified as `200 OK`.
    pub async fn read_response<W>(&mut self, sink: &mut W) -> Result<u64, ResponseError>
    where
        W: AsyncWrite + Unpin,
    {
        loop {
            self.buffer.reserve(self.read_size);

            let n = match self.stream.read_buf(&mut self.buffer).await {
                Ok(n) => n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(ResponseError::Io(e)),
            };

            if n == 0 {
                // Peer closed: the only end-of-body signal HTTP/1.0 gives us.
                let streamed = self.parser.finish()?;
                sink.flush().await.map_err(ResponseError::Sink)?;
                return Ok(streamed);
            }

            let chunk = self.buffer.split().freeze();
            match self.parser.feed(chunk)? {
                Step::NeedMore => {}
                Step::Body(body) => {
                    if !body.is_empty() {
                        sink.write_all(&body).await.map_err(ResponseError::Sink)?;
                    }
                }
            }
        }
    }
}
