//! Stdout wrapper for piped output.

use std::io::{self, ErrorKind, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Wrapper around a Write that ignores broken pipe errors (EPIPE).
/// This allows graceful handling when stdout is piped to a command that exits early,
/// e.g. `gpdat file.dat | head`.
///
/// The first broken pipe raises a shared flag; later writes are dropped
/// without touching the inner writer.
pub(crate) struct IgnoreBrokenPipe<W: Write> {
    inner: W,
    closed: Arc<AtomicBool>,
}

impl<W: Write> IgnoreBrokenPipe<W> {
    pub(crate) fn new(inner: W) -> Self {
        Self {
            inner,
            closed: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Flag that turns true once the downstream reader has gone away.
    pub(crate) fn closed_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.closed)
    }

    fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Relaxed)
    }

    fn swallow<T>(&self, e: io::Error, value: T) -> io::Result<T> {
        if e.kind() == ErrorKind::BrokenPipe {
            // Downstream closed the pipe
            self.closed.store(true, Ordering::Relaxed);
            Ok(value)
        } else {
            Err(e)
        }
    }
}

impl<W: Write> Write for IgnoreBrokenPipe<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.is_closed() {
            return Ok(buf.len());
        }
        match self.inner.write(buf) {
            Ok(n) => Ok(n),
            Err(e) => self.swallow(e, buf.len()),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        if self.is_closed() {
            return Ok(());
        }
        match self.inner.flush() {
            Ok(()) => Ok(()),
            Err(e) => self.swallow(e, ()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct ClosedPipe {
        writes: usize,
    }

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            self.writes += 1;
            Err(io::Error::new(ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(ErrorKind::BrokenPipe, "closed"))
        }
    }

    struct FullDisk;

    impl Write for FullDisk {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(ErrorKind::Other, "no space"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_broken_pipe_is_swallowed() {
        let mut w = IgnoreBrokenPipe::new(ClosedPipe::default());
        let closed = w.closed_flag();
        assert!(!closed.load(Ordering::Relaxed));

        assert_eq!(w.write(b"abc").unwrap(), 3);
        assert!(closed.load(Ordering::Relaxed));
        assert!(w.flush().is_ok());
        assert!(writeln!(w, "line").is_ok());
        // Only the first write reached the closed pipe
        assert_eq!(w.inner.writes, 1);
    }

    #[test]
    fn test_other_errors_propagate() {
        let mut w = IgnoreBrokenPipe::new(FullDisk);
        let err = w.write(b"abc").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Other);
        assert!(!w.closed_flag().load(Ordering::Relaxed));
    }
}
