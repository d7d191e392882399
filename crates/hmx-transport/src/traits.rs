use std::io::{ErrorKind, Read, Write};

use crate::error::{Result, TransportError};

/// A reliable byte pipe carrying matrix protocol frames.
///
/// Framing is the caller's job: the protocol uses fixed-length units
/// with no markers, so `read` hands back whatever arrived, up to `n`
/// bytes, and the caller decides whether a short return is acceptable.
pub trait Transport {
    /// Write all of `bytes` to the device.
    fn write(&mut self, bytes: &[u8]) -> Result<()>;

    /// Read up to `n` bytes from the device.
    ///
    /// Returns fewer than `n` bytes when the stream ends or times out
    /// before a full buffer arrives. An `Err` means the underlying I/O
    /// itself failed.
    fn read(&mut self, n: usize) -> Result<Vec<u8>>;
}

/// Adapts any `Read + Write` stream to [`Transport`].
///
/// This is how the serial backend, sockets-in-tests, and in-memory
/// fakes all plug in without the upper layers knowing the difference.
pub struct IoTransport<T> {
    inner: T,
}

impl<T> std::fmt::Debug for IoTransport<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IoTransport").finish_non_exhaustive()
    }
}

impl<T: Read + Write> IoTransport<T> {
    /// Wrap a stream.
    pub fn new(inner: T) -> Self {
        Self { inner }
    }

    /// Borrow the underlying stream.
    pub fn get_ref(&self) -> &T {
        &self.inner
    }

    /// Mutably borrow the underlying stream.
    pub fn get_mut(&mut self) -> &mut T {
        &mut self.inner
    }

    /// Consume the adapter and return the inner stream.
    pub fn into_inner(self) -> T {
        self.inner
    }
}

impl<T: Read + Write> Transport for IoTransport<T> {
    fn write(&mut self, bytes: &[u8]) -> Result<()> {
        let mut offset = 0usize;
        while offset < bytes.len() {
            match self.inner.write(&bytes[offset..]) {
                Ok(0) => return Err(TransportError::Closed),
                Ok(n) => offset += n,
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => return Err(TransportError::Io(err)),
            }
        }

        loop {
            match self.inner.flush() {
                Ok(()) => return Ok(()),
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => return Err(TransportError::Io(err)),
            }
        }
    }

    fn read(&mut self, n: usize) -> Result<Vec<u8>> {
        let mut buf = vec![0u8; n];
        let mut filled = 0usize;
        while filled < n {
            match self.inner.read(&mut buf[filled..]) {
                Ok(0) => break,
                Ok(read) => filled += read,
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                // A timeout with bytes already buffered is a short read,
                // not an I/O failure. With nothing buffered it is one.
                Err(err) if err.kind() == ErrorKind::TimedOut && filled > 0 => break,
                Err(err) => return Err(TransportError::Io(err)),
            }
        }
        buf.truncate(filled);
        Ok(buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn read_full_buffer() {
        let mut t = IoTransport::new(Duplex::with_input(vec![1, 2, 3, 4, 5]));
        let got = t.read(5).unwrap();
        assert_eq!(got, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn read_returns_short_on_eof() {
        let mut t = IoTransport::new(Duplex::with_input(vec![0xA5, 0x5B]));
        let got = t.read(13).unwrap();
        assert_eq!(got, vec![0xA5, 0x5B]);
    }

    #[test]
    fn read_accumulates_partial_reads() {
        let mut t = IoTransport::new(ByteByByte {
            bytes: vec![9, 8, 7],
            pos: 0,
        });
        let got = t.read(3).unwrap();
        assert_eq!(got, vec![9, 8, 7]);
    }

    #[test]
    fn read_retries_interrupted() {
        let mut t = IoTransport::new(FailThenData {
            kind: ErrorKind::Interrupted,
            failed: false,
            bytes: vec![1, 2],
            pos: 0,
        });
        assert_eq!(t.read(2).unwrap(), vec![1, 2]);
    }

    #[test]
    fn read_timeout_with_partial_data_is_short() {
        let mut t = IoTransport::new(DataThenTimeout {
            bytes: vec![1, 2, 3],
            pos: 0,
        });
        assert_eq!(t.read(13).unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn read_timeout_with_no_data_is_io_error() {
        let mut t = IoTransport::new(DataThenTimeout {
            bytes: vec![],
            pos: 0,
        });
        let err = t.read(13).unwrap_err();
        assert!(matches!(err, TransportError::Io(e) if e.kind() == ErrorKind::TimedOut));
    }

    #[test]
    fn write_all_bytes() {
        let mut t = IoTransport::new(Duplex::with_input(Vec::new()));
        t.write(&[0xA5, 0x5B, 0x02]).unwrap();
        assert_eq!(t.get_ref().written, vec![0xA5, 0x5B, 0x02]);
    }

    #[test]
    fn write_zero_progress_is_closed() {
        let mut t = IoTransport::new(ZeroWriter);
        let err = t.write(&[1]).unwrap_err();
        assert!(matches!(err, TransportError::Closed));
    }

    #[test]
    fn write_propagates_io_error() {
        let mut t = IoTransport::new(BrokenWriter);
        let err = t.write(&[1]).unwrap_err();
        assert!(matches!(err, TransportError::Io(_)));
    }

    #[test]
    fn accessors_and_into_inner() {
        let mut t = IoTransport::new(Cursor::new(Vec::<u8>::new()));
        let _ = t.get_ref();
        let _ = t.get_mut();
        let _inner = t.into_inner();
    }

    struct Duplex {
        input: Cursor<Vec<u8>>,
        written: Vec<u8>,
    }

    impl Duplex {
        fn with_input(input: Vec<u8>) -> Self {
            Self {
                input: Cursor::new(input),
                written: Vec::new(),
            }
        }
    }

    impl Read for Duplex {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            self.input.read(buf)
        }
    }

    impl Write for Duplex {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.written.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    struct ByteByByte {
        bytes: Vec<u8>,
        pos: usize,
    }

    impl Read for ByteByByte {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            if self.pos >= self.bytes.len() || buf.is_empty() {
                return Ok(0);
            }
            buf[0] = self.bytes[self.pos];
            self.pos += 1;
            Ok(1)
        }
    }

    impl Write for ByteByByte {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    struct FailThenData {
        kind: ErrorKind,
        failed: bool,
        bytes: Vec<u8>,
        pos: usize,
    }

    impl Read for FailThenData {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            if !self.failed {
                self.failed = true;
                return Err(std::io::Error::from(self.kind));
            }
            let remaining = self.bytes.len() - self.pos;
            let n = remaining.min(buf.len());
            buf[..n].copy_from_slice(&self.bytes[self.pos..self.pos + n]);
            self.pos += n;
            Ok(n)
        }
    }

    impl Write for FailThenData {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    struct DataThenTimeout {
        bytes: Vec<u8>,
        pos: usize,
    }

    impl Read for DataThenTimeout {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            if self.pos >= self.bytes.len() {
                return Err(std::io::Error::from(ErrorKind::TimedOut));
            }
            let remaining = self.bytes.len() - self.pos;
            let n = remaining.min(buf.len());
            buf[..n].copy_from_slice(&self.bytes[self.pos..self.pos + n]);
            self.pos += n;
            Ok(n)
        }
    }

    impl Write for DataThenTimeout {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    struct ZeroWriter;

    impl Read for ZeroWriter {
        fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
            Ok(0)
        }
    }

    impl Write for ZeroWriter {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Ok(0)
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    struct BrokenWriter;

    impl Read for BrokenWriter {
        fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
            Ok(0)
        }
    }

    impl Write for BrokenWriter {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::from(ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }
}
