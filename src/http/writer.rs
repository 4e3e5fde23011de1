use std::io::ErrorKind;

use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::error::ConnectError;

/// Writes a serialised request to the connection, all of it or nothing useful.
pub struct RequestWriter {
    buffer: Vec<u8>,
    written: usize,
}

impl RequestWriter {
    pub fn new(request: Vec<u8>) -> Self {
        Self {
            buffer: request,
            written: 0,
        }
    }

    pub async fn write_to_stream<S>(&mut self, stream: &mut S) -> Result<(), ConnectError>
    where
        S: AsyncWrite + Unpin,
    {
        while self.written < self.buffer.len() {
            let n = match stream.write(&self.buffer[self.written..]).await {
                Ok(n) => n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(self.failed(Some(e))),
            };

            if n == 0 {
                return Err(self.failed(None));
            }

            self.written += n;
        }

        stream.flush().await.map_err(|e| self.failed(Some(e)))
    }

    fn failed(&self, source: Option<std::io::Error>) -> ConnectError {
        ConnectError::SendFailed {
            written: self.written,
            total: self.buffer.len(),
            source,
        }
    }
}
