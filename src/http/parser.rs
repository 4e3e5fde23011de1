use bytes::{Buf, Bytes, BytesMut};

use crate::error::ResponseError;
use crate::http::response::{classify, StatusClass};

const HEADER_TERMINATOR: &[u8] = b"\r\n\r\n";

/// Where the parser is in the response.
#[derive(Debug)]
pub enum ParseState {
    /// Accumulating bytes until the header terminator shows up.
    HeaderPhase { pending: BytesMut },
    /// Header accepted; every byte from here on is body.
    BodyPhase { streamed: u64 },
    /// Response rejected or fully consumed.
    Done,
}

/// What the caller should do with the chunk it just fed.
#[derive(Debug, PartialEq, Eq)]
pub enum Step {
    /// Header block not complete yet, keep reading.
    NeedMore,
    /// Body bytes to forward to the sink as-is. May be empty.
    Body(Bytes),
}

/// Incremental HTTP/1.0 response parser.
///
/// Performs no I/O. The caller feeds it whatever each read returned, writes out
/// any [`Step::Body`] it hands back, and calls [`ResponseParser::finish`] when
/// the peer closes the connection.
#[derive(Debug)]
pub struct ResponseParser {
    state: ParseState,
}

impl Default for ResponseParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ResponseParser {
    pub fn new() -> Self {
        Self {
            state: ParseState::HeaderPhase {
                pending: BytesMut::with_capacity(4096),
            },
        }
    }

    pub fn state(&self) -> &ParseState {
        &self.state
    }

    pub fn in_body(&self) -> bool {
        matches!(self.state, ParseState::BodyPhase { .. })
    }

    /// Consumes one read's worth of bytes.
    ///
    /// Any status other than `200 OK` is returned as an error and moves the
    /// parser to [`ParseState::Done`].
    pub fn feed(&mut self, chunk: Bytes) -> Result<Step, ResponseError> {
        match &mut self.state {
            ParseState::HeaderPhase { pending } => {
                // No cap on header size: a peer that never sends the
                // terminator grows `pending` until it closes.
                // A terminator split across reads starts at most 3 bytes back.
                let resume = pending.len().saturating_sub(HEADER_TERMINATOR.len() - 1);
                pending.extend_from_slice(&chunk);

                let Some(offset) = find_headers_end(&pending[resume..]) else {
                    return Ok(Step::NeedMore);
                };
                let headers_end = resume + offset;

                let mut body_prefix = pending.split_off(headers_end);
                body_prefix.advance(HEADER_TERMINATOR.len());
                let status = classify(&pending[..]);

                tracing::info!(
                    header_bytes = headers_end,
                    status = ?status,
                    code = ?status.as_u16(),
                    "Response status classified"
                );

                match status {
                    StatusClass::Ok => {
                        self.state = ParseState::BodyPhase {
                            streamed: body_prefix.len() as u64,
                        };
                        Ok(Step::Body(body_prefix.freeze()))
                    }
                    StatusClass::NotFound => self.reject(ResponseError::NotFound),
                    StatusClass::MovedPermanently => self.reject(ResponseError::Redirect),
                    StatusClass::Unknown => {
                        tracing::debug!(
                            header = %String::from_utf8_lossy(&pending[..]),
                            "Unrecognised response header"
                        );
                        self.reject(ResponseError::UnknownStatus)
                    }
                }
            }

            ParseState::BodyPhase { streamed } => {
                *streamed += chunk.len() as u64;
                Ok(Step::Body(chunk))
            }

            ParseState::Done => Err(ResponseError::Finished),
        }
    }

    /// Signals that the peer closed the connection.
    ///
    /// Returns the number of body bytes handed out if the body had started,
    /// otherwise the response is incomplete.
    pub fn finish(&mut self) -> Result<u64, ResponseError> {
        match std::mem::replace(&mut self.state, ParseState::Done) {
            ParseState::BodyPhase { streamed } => Ok(streamed),
            ParseState::HeaderPhase { pending } => Err(ResponseError::Incomplete {
                received: pending.len(),
            }),
            ParseState::Done => Err(ResponseError::Finished),
        }
    }

    fn reject(&mut self, error: ResponseError) -> Result<Step, ResponseError> {
        self.state = ParseState::Done;
        Err(error)
    }
}

/// Offset of the first `\r\n\r\n` in `buf`.
pub fn find_headers_end(buf: &[u8]) -> Option<usize> {
    buf.windows(HEADER_TERMINATOR.len())
        .position(|w| w == HEADER_TERMINATOR)
}
