//! Bounded reading of file prefixes.
//!
//! Classification only ever looks at a leading window of a file, so reads
//! stop at a caller-supplied limit regardless of file size.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use tracing::{debug, trace};

use crate::error::Result;

/// A reader that reports EOF once `limit` bytes have been read.
pub struct BoundedReader<R> {
    inner: R,
    bytes_read: u64,
    limit: u64,
}

impl<R: Read> BoundedReader<R> {
    pub fn new(reader: R, limit: u64) -> Self {
        Self {
            inner: reader,
            bytes_read: 0,
            limit,
        }
    }

    pub fn bytes_read(&self) -> u64 {
        self.bytes_read
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }

    /// True once the limit has been reached.
    pub fn is_exhausted(&self) -> bool {
        self.bytes_read >= self.limit
    }
}

impl<R: Read> Read for BoundedReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.is_exhausted() {
            return Ok(0);
        }

        let remaining = self.limit - self.bytes_read;
        let max_to_read = std::cmp::min(buf.len() as u64, remaining) as usize;
        let n = self.inner.read(&mut buf[..max_to_read])?;
        self.bytes_read += n as u64;

        if self.is_exhausted() {
            trace!(limit = self.limit, "bounded reader limit reached");
        }
        Ok(n)
    }
}

/// Read at most `limit` bytes from the start of `path`.
pub fn read_prefix<P: AsRef<Path>>(path: P, limit: usize) -> Result<Vec<u8>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let size_hint = file
        .metadata()
        .map(|m| m.len().min(limit as u64) as usize)
        .unwrap_or(0);

    let mut buf = Vec::with_capacity(size_hint);
    let mut reader = BoundedReader::new(file, limit as u64);
    reader.read_to_end(&mut buf)?;

    debug!(
        path = %path.display(),
        bytes = buf.len(),
        truncated = reader.is_exhausted(),
        "read file prefix"
    );
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MagicError;
    use std::io::{Cursor, Write};
    use tempfile::NamedTempFile;

    #[test]
    fn test_bounded_reader_stops_at_limit() {
        let data = vec![7u8; 1000];
        let mut reader = BoundedReader::new(Cursor::new(data), 100);
        let mut out = Vec::new();
        reader.read_to_end(&mut out).unwrap();
        assert_eq!(out.len(), 100);
        assert_eq!(reader.bytes_read(), 100);
        assert!(reader.is_exhausted());

        let mut extra = [0u8; 8];
        assert_eq!(reader.read(&mut extra).unwrap(), 0);
    }

    #[test]
    fn test_bounded_reader_short_input() {
        let mut reader = BoundedReader::new(Cursor::new(b"GIF89a".to_vec()), 4096);
        let mut out = Vec::new();
        reader.read_to_end(&mut out).unwrap();
        assert_eq!(out, b"GIF89a");
        assert_eq!(reader.limit(), 4096);
        assert!(!reader.is_exhausted());
    }

    #[test]
    fn test_read_prefix() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&[0xAB; 5000]).unwrap();
        file.flush().unwrap();

        assert_eq!(read_prefix(file.path(), 1024).unwrap().len(), 1024);
        assert_eq!(read_prefix(file.path(), 10_000).unwrap().len(), 5000);
    }

    #[test]
    fn test_read_prefix_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_prefix(dir.path().join("absent.bin"), 16).unwrap_err();
        assert!(matches!(err, MagicError::Io(_)));
    }
}
