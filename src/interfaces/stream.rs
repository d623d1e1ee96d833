// ============================================================================
// Stream Adapters
// Whitespace-separated BigInt tokens over BufRead / Write
// ============================================================================

use crate::config::CodecConfig;
use crate::numeric::{parse_with, BigInt, NumericError};
use std::fmt;
use std::io::{self, BufRead, Write};

/// Errors from reading BigInt tokens off a stream.
#[derive(Debug)]
pub enum StreamError {
    /// Underlying reader failed
    Io(io::Error),
    /// A token was not a valid decimal integer
    Parse {
        /// The rejected token
        token: String,
        /// Why it was rejected
        source: NumericError,
    },
}

impl fmt::Display for StreamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StreamError::Io(err) => write!(f, "read failed: {}", err),
            StreamError::Parse { token, source } => {
                write!(f, "bad token {:?}: {}", token, source)
            },
        }
    }
}

impl std::error::Error for StreamError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StreamError::Io(err) => Some(err),
            StreamError::Parse { source, .. } => Some(source),
        }
    }
}

impl From<io::Error> for StreamError {
    fn from(err: io::Error) -> Self {
        StreamError::Io(err)
    }
}

/// Reads whitespace-separated integers from a buffered reader.
///
/// Tokens may span any number of lines; each is parsed with the reader's
/// `CodecConfig`. Iteration yields one `Result` per token and stops at EOF.
pub struct BigIntReader<R> {
    inner: R,
    config: CodecConfig,
    line: String,
    cursor: usize,
}

impl<R: BufRead> BigIntReader<R> {
    /// Create a reader with the default codec policy
    pub fn new(inner: R) -> Self {
        Self::with_config(inner, CodecConfig::default())
    }

    /// Create a reader with an explicit codec policy
    pub fn with_config(inner: R, config: CodecConfig) -> Self {
        Self {
            inner,
            config,
            line: String::new(),
            cursor: 0,
        }
    }

    /// Next raw token, or None at EOF.
    fn next_token(&mut self) -> io::Result<Option<String>> {
        loop {
            let rest = &self.line[self.cursor..];
            let trimmed = rest.trim_start();
            if !trimmed.is_empty() {
                let len = trimmed.find(char::is_whitespace).unwrap_or(trimmed.len());
                let token = trimmed[..len].to_string();
                self.cursor += rest.len() - trimmed.len() + len;
                return Ok(Some(token));
            }

            self.line.clear();
            self.cursor = 0;
            if self.inner.read_line(&mut self.line)? == 0 {
                return Ok(None);
            }
        }
    }

    /// Read and parse the next integer, or None at EOF.
    ///
    /// # Errors
    /// `Io` if the reader fails, `Parse` if the token is malformed. A
    /// malformed token is consumed, so reading can continue after it.
    pub fn read_next(&mut self) -> Result<Option<BigInt>, StreamError> {
        let Some(token) = self.next_token()? else {
            return Ok(None);
        };
        match parse_with(&token, &self.config) {
            Ok(value) => Ok(Some(value)),
            Err(source) => {
                tracing::debug!(%token, %source, "rejected stream token");
                Err(StreamError::Parse { token, source })
            },
        }
    }
}

impl<R: BufRead> Iterator for BigIntReader<R> {
    type Item = Result<BigInt, StreamError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_next().transpose()
    }
}

/// Write the canonical decimal form of `value`.
pub fn write_big_int<W: Write>(out: &mut W, value: &BigInt) -> io::Result<()> {
    write!(out, "{}", value)
}

/// Write `value` followed by a newline.
pub fn writeln_big_int<W: Write>(out: &mut W, value: &BigInt) -> io::Result<()> {
    writeln!(out, "{}", value)
}
