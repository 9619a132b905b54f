//! Line-by-line input reader.
//!
//! Yields every line of the input in order with its trailing `\n` or `\r\n`
//! stripped. Lines are never trimmed or skipped, so a blank line comes
//! through as an empty string. Bytes that are not valid UTF-8 are replaced
//! with U+FFFD rather than rejected.

use crate::error::Error;
use std::path::Path;
use tokio::{
    fs::File,
    io::{AsyncBufRead, AsyncBufReadExt, BufReader},
};

/// Single-pass reader over the lines of a buffered source.
#[derive(Debug)]
pub struct LineReader<R> {
    reader: R,
    buf: Vec<u8>,
}

impl LineReader<BufReader<File>> {
    /// Opens `path` for reading.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let file = File::open(path).await.map_err(|source| Error::Open {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: AsyncBufRead + Unpin> LineReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
        }
    }

    /// Returns the next line, or `None` at end of input.
    ///
    /// Only I/O errors fail; the line content itself is never validated.
    pub async fn next_line(&mut self) -> Result<Option<String>, Error> {
        self.buf.clear();
        let read = self
            .reader
            .read_until(b'\n', &mut self.buf)
            .await
            .map_err(Error::Scan)?;
        if read == 0 {
            return Ok(None);
        }

        let mut line = self.buf.as_slice();
        if let Some(rest) = line.strip_suffix(b"\n") {
            line = rest;
        }
        if let Some(rest) = line.strip_suffix(b"\r") {
            line = rest;
        }

        Ok(Some(String::from_utf8_lossy(line).into_owned()))
    }
}
