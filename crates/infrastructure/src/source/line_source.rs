use async_trait::async_trait;
use ferrous_census_application::ports::DomainSource;
use ferrous_census_domain::DomainError;
use std::path::Path;
use tokio::fs::File;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::warn;

/// Yields one line at a time from a newline-delimited domain list. Lines are
/// returned raw; trimming and blank-skipping happen in the pipeline.
///
/// Bytes that are not valid UTF-8 are replaced with U+FFFD so a bad line
/// fails on its own at query time instead of ending intake.
pub struct LineDomainSource<R> {
    reader: R,
    buf: Vec<u8>,
    line_no: u64,
}

impl LineDomainSource<BufReader<File>> {
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, DomainError> {
        let path = path.as_ref();
        let file = File::open(path).await.map_err(|e| {
            DomainError::SourceError(format!("cannot open {}: {}", path.display(), e))
        })?;
        Ok(Self::from_reader(BufReader::new(file)))
    }
}

impl<R: AsyncBufRead + Unpin> LineDomainSource<R> {
    pub fn from_reader(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
            line_no: 0,
        }
    }
}

fn strip_line_ending(buf: &[u8]) -> &[u8] {
    let line = buf.strip_suffix(b"\n").unwrap_or(buf);
    line.strip_suffix(b"\r").unwrap_or(line)
}

#[async_trait]
impl<R: AsyncBufRead + Unpin + Send> DomainSource for LineDomainSource<R> {
    async fn next_domain(&mut self) -> Result<Option<String>, DomainError> {
        self.buf.clear();
        let read = self
            .reader
            .read_until(b'\n', &mut self.buf)
            .await
            .map_err(|e| DomainError::SourceError(e.to_string()))?;
        if read == 0 {
            return Ok(None);
        }
        self.line_no += 1;

        let line = strip_line_ending(&self.buf);
        match std::str::from_utf8(line) {
            Ok(text) => Ok(Some(text.to_owned())),
            Err(_) => {
                warn!(line = self.line_no, "Domain list line is not valid UTF-8");
                Ok(Some(String::from_utf8_lossy(line).into_owned()))
            }
        }
    }
}
