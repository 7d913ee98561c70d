//! The reference subscribers wired to a scripted clock.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tickcast::{
    Clock, ClockConfig, DisplayClock, FailurePolicy, LineSink, LogCurrentTime, ScriptedSource,
};

#[derive(Clone, Default)]
struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl SharedBuf {
    fn contents(&self) -> String {
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

#[tokio::test]
async fn display_and_log_render_each_transition() {
    let out = SharedBuf::default();
    let cfg = ClockConfig {
        interval: Duration::ZERO,
        ..ClockConfig::default()
    };
    let source = ScriptedSource::from_triples([(10, 0, 5), (10, 0, 5), (10, 0, 6), (10, 1, 0)])
        .unwrap();

    let mut clock = Clock::new(cfg, source);
    clock.register(Arc::new(DisplayClock::with_sink(LineSink::new(out.clone()))));
    clock.register(Arc::new(LogCurrentTime::with_sink(LineSink::new(out.clone()))));

    clock.run_for(4).await.unwrap();

    assert_eq!(
        out.contents(),
        "Current time: 10:0:6\n\
         Logging to file: 10:0:6\n\
         Current time: 10:1:0\n\
         Logging to file: 10:1:0\n"
    );
}

/// Panics on the first write, then behaves like `SharedBuf`.
#[derive(Clone, Default)]
struct FlakyOnce {
    buf: SharedBuf,
    tripped: Arc<Mutex<bool>>,
}

impl Write for FlakyOnce {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let first = !std::mem::replace(&mut *self.tripped.lock().unwrap(), true);
        if first {
            panic!("writer exploded");
        }
        self.buf.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[tokio::test]
async fn display_keeps_writing_after_its_writer_panicked_once() {
    let writer = FlakyOnce::default();
    let cfg = ClockConfig {
        interval: Duration::ZERO,
        failure: FailurePolicy::Isolate,
        ..ClockConfig::default()
    };
    let source =
        ScriptedSource::from_triples([(1, 0, 0), (1, 0, 1), (1, 0, 2), (1, 0, 3)]).unwrap();

    let mut clock = Clock::new(cfg, source);
    clock.register(Arc::new(DisplayClock::with_sink(LineSink::new(writer.clone()))));

    let fired = clock.run_for(4).await.unwrap();

    assert_eq!(fired.len(), 3);
    assert_eq!(
        writer.buf.contents(),
        "Current time: 1:0:2\nCurrent time: 1:0:3\n"
    );
}
