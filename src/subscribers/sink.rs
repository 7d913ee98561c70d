//! # Line sink shared by the built-in subscribers.
//!
//! A [`LineSink`] owns any `Write + Send` destination behind a mutex and writes one
//! flushed line per call. The destination (console, file, socket) is the
//! subscriber's business; the clock never sees it.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Mutex, PoisonError};

/// Mutex-guarded line writer.
pub struct LineSink {
    out: Mutex<Box<dyn Write + Send>>,
}

impl LineSink {
    /// Wraps any writer.
    pub fn new(out: impl Write + Send + 'static) -> Self {
        Self {
            out: Mutex::new(Box::new(out)),
        }
    }

    /// Process stdout.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }

    /// Opens `path` for appending, creating it if missing.
    pub fn append_to(path: impl AsRef<Path>) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self::new(file))
    }

    /// Writes `line` followed by a newline, then flushes.
    ///
    /// A writer that panicked earlier stays usable: the lock is taken even if poisoned.
    pub fn write_line(&self, line: &str) -> io::Result<()> {
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        writeln!(out, "{line}")?;
        out.flush()
    }
}

impl std::fmt::Debug for LineSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LineSink").finish_non_exhaustive()
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::io::{self, Write};
    use std::sync::{Arc, Mutex};

    /// In-memory writer whose contents stay readable after being moved into a sink.
    #[derive(Clone, Default)]
    pub(crate) struct SharedBuf(pub(crate) Arc<Mutex<Vec<u8>>>);

    impl SharedBuf {
        pub(crate) fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().write(buf)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Writer that panics on its first write, then appends to a shared buffer.
    #[derive(Clone, Default)]
    pub(crate) struct PanicOnce {
        pub(crate) buf: SharedBuf,
        pub(crate) tripped: Arc<Mutex<bool>>,
    }

    impl Write for PanicOnce {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            let first = {
                let mut tripped = self.tripped.lock().unwrap();
                !std::mem::replace(&mut *tripped, true)
            };
            if first {
                panic!("writer exploded");
            }
            self.buf.write(buf)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Writer that always fails.
    pub(crate) struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::{BrokenPipe, PanicOnce, SharedBuf};
    use super::*;
    use std::panic::{AssertUnwindSafe, catch_unwind};

    #[test]
    fn test_writes_lines() {
        let buf = SharedBuf::default();
        let sink = LineSink::new(buf.clone());
        sink.write_line("one").unwrap();
        sink.write_line("two").unwrap();
        assert_eq!(buf.contents(), "one\ntwo\n");
    }

    #[test]
    fn test_write_error_surfaces() {
        let sink = LineSink::new(BrokenPipe);
        let err = sink.write_line("x").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }

    #[test]
    fn test_recovers_after_writer_panic() {
        let writer = PanicOnce::default();
        let sink = LineSink::new(writer.clone());

        let first = catch_unwind(AssertUnwindSafe(|| sink.write_line("lost")));
        assert!(first.is_err());

        sink.write_line("kept").unwrap();
        assert_eq!(writer.buf.contents(), "kept\n");
    }

    #[test]
    fn test_append_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sink.log");

        LineSink::append_to(&path).unwrap().write_line("a").unwrap();
        LineSink::append_to(&path).unwrap().write_line("b").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "a\nb\n");
    }
}
