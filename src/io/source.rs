use std::io::{self, Read};

/* ReadStatus */

/// Outcome of one bulk read: a delivered byte count, or end-of-stream.
/// A count of zero is distinct from `Eof`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadStatus {
    Data(usize),
    Eof,
}

/* StreamSource */

pub trait StreamSource {
    /// Delivers up to `buf.len()` bytes into `buf`.
    fn read(&mut self, buf: &mut [u8]) -> io::Result<ReadStatus>;

    /// Releases underlying resources. Called once by the owning reader.
    fn close(&mut self) -> io::Result<()>;
}

/* IoSource */

/// Adapts any [`Read`] into a [`StreamSource`], lifting `Read`'s
/// `Ok(0)`-means-end convention back into an explicit [`ReadStatus::Eof`].
pub struct IoSource<R> {
    inner: R,
}

impl<R: Read> IoSource<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read> StreamSource for IoSource<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<ReadStatus> {
        match self.inner.read(buf)? {
            0 => Ok(ReadStatus::Eof),
            count => Ok(ReadStatus::Data(count)),
        }
    }

    fn close(&mut self) -> io::Result<()> {
        // Readers release their resources on drop.
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_source_delivers_bytes() {
        let mut source = IoSource::new(&b"abc"[..]);
        let mut buf = [0u8; 16];

        assert_eq!(source.read(&mut buf).unwrap(), ReadStatus::Data(3));
        assert_eq!(&buf[..3], b"abc");
    }

    #[test]
    fn test_io_source_reports_eof() {
        let mut source = IoSource::new(&b""[..]);
        let mut buf = [0u8; 16];

        assert_eq!(source.read(&mut buf).unwrap(), ReadStatus::Eof);
    }

    #[test]
    fn test_io_source_eof_after_data() {
        let mut source = IoSource::new(&b"xy"[..]);
        let mut buf = [0u8; 16];

        assert_eq!(source.read(&mut buf).unwrap(), ReadStatus::Data(2));
        assert_eq!(source.read(&mut buf).unwrap(), ReadStatus::Eof);
    }

    #[test]
    fn test_io_source_close() {
        let mut source = IoSource::new(&b"abc"[..]);
        assert!(source.close().is_ok());
    }
}
