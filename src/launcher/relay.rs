//! Background relay of game output to a log sink
//!
//! One thread per launched game reads the merged stdout/stderr pipe line by
//! line until end of stream. The launcher does not wait for it; callers that
//! need the output drained (tests, the CLI) join the returned handle.

use std::io::{self, BufRead, BufReader, Read};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};

use crate::sink::LogSink;

/// Handle to a running output relay
#[derive(Debug)]
pub struct RelayHandle {
    thread: JoinHandle<usize>,
    cancelled: Arc<AtomicBool>,
}

impl RelayHandle {
    /// Wait for end of stream; returns the number of lines forwarded
    pub fn join(self) -> usize {
        self.thread.join().unwrap_or_else(|_| {
            tracing::warn!("game output relay panicked");
            0
        })
    }

    /// Stop forwarding. Takes effect at the next line boundary; the pipe
    /// keeps being drained so the game never blocks on a full pipe.
    #[allow(dead_code)]
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    #[allow(dead_code)]
    pub fn is_finished(&self) -> bool {
        self.thread.is_finished()
    }

    /// Let the relay run on its own
    #[allow(dead_code)]
    pub fn detach(self) {}
}

/// Start relaying `reader` to `sink` on a named background thread
pub fn spawn_relay(reader: impl Read + Send + 'static, sink: LogSink) -> io::Result<RelayHandle> {
    let cancelled = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&cancelled);

    let thread = thread::Builder::new()
        .name("game-output".to_string())
        .spawn(move || relay_lines(reader, &sink, &flag))?;

    Ok(RelayHandle { thread, cancelled })
}

fn relay_lines(reader: impl Read, sink: &LogSink, cancelled: &AtomicBool) -> usize {
    let mut reader = BufReader::new(reader);
    let mut buf = Vec::new();
    let mut forwarded = 0;

    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => {
                if cancelled.load(Ordering::SeqCst) {
                    continue;
                }
                let line = String::from_utf8_lossy(&buf);
                sink.line(line.trim_end_matches(['\n', '\r']));
                forwarded += 1;
            }
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
            Err(e) => {
                tracing::warn!(error = %e, "game output relay stopped");
                sink.line(format!("Error reading output: {e}"));
                break;
            }
        }
    }

    forwarded
}
