//! Where reply lines go.
//!
//! The dispatcher produces lines; a [`MessageSink`] delivers them to a
//! channel. A chat bot implements it over its connection, the console over
//! stdout. [`RecordingSink`] keeps everything in memory.

use std::io::Write;

use parking_lot::Mutex;

/// Delivers reply lines to a channel.
pub trait MessageSink: Send + Sync {
    /// Send one line to `channel`.
    ///
    /// # Errors
    ///
    /// Returns an error if the line could not be delivered.
    fn send(&self, channel: &str, line: &str) -> std::io::Result<()>;
}

/// Writes each line to a [`Write`] target, one per row.
pub struct WriterSink<W: Write + Send> {
    out: Mutex<W>,
}

impl<W: Write + Send> WriterSink<W> {
    /// Wrap a writer.
    #[must_use]
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }
}

impl<W: Write + Send> MessageSink for WriterSink<W> {
    fn send(&self, _channel: &str, line: &str) -> std::io::Result<()> {
        let mut out = self.out.lock();
        writeln!(out, "{line}")?;
        out.flush()
    }
}

/// Keeps every sent line, in order.
#[derive(Debug, Default)]
pub struct RecordingSink {
    sent: Mutex<Vec<(String, String)>>,
}

impl RecordingSink {
    /// An empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines sent to `channel`, oldest first.
    #[must_use]
    pub fn lines_for(&self, channel: &str) -> Vec<String> {
        self.sent
            .lock()
            .iter()
            .filter(|(to, _)| to == channel)
            .map(|(_, line)| line.clone())
            .collect()
    }

    /// Total lines sent to any channel.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sent.lock().len()
    }

    /// Whether nothing was sent.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sent.lock().is_empty()
    }
}

impl MessageSink for RecordingSink {
    fn send(&self, channel: &str, line: &str) -> std::io::Result<()> {
        self.sent.lock().push((channel.to_string(), line.to_string()));
        Ok(())
    }
}
