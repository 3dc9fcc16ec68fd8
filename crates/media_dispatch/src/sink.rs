//! Output sink for demonstration text.
//!
//! Output is directed either to stdout (CLI default) or to a capture
//! buffer (tests). Enum dispatch keeps the per-line path static.

use parking_lot::Mutex;
use std::sync::Arc;

/// Line-oriented output sink.
pub enum OutputSink {
    /// Writes to stdout.
    Stdout,
    /// Captures lines into a buffer.
    Buffer(Mutex<String>),
}

impl OutputSink {
    /// Emit one line.
    pub fn line(&self, msg: &str) {
        match self {
            OutputSink::Stdout => println!("{msg}"),
            OutputSink::Buffer(buf) => {
                let mut buf = buf.lock();
                buf.push_str(msg);
                buf.push('\n');
            }
        }
    }

    /// Captured output so far.
    ///
    /// Empty for sinks that do not capture.
    pub fn captured(&self) -> String {
        match self {
            OutputSink::Stdout => String::new(),
            OutputSink::Buffer(buf) => buf.lock().clone(),
        }
    }

    /// Drop captured output.
    pub fn clear(&self) {
        if let OutputSink::Buffer(buf) = self {
            buf.lock().clear();
        }
    }
}

/// Shared sink handle.
pub type SharedSink = Arc<OutputSink>;

/// Sink that writes to stdout.
pub fn stdout_sink() -> SharedSink {
    Arc::new(OutputSink::Stdout)
}

/// Sink that captures output for assertions.
pub fn buffer_sink() -> SharedSink {
    Arc::new(OutputSink::Buffer(Mutex::new(String::new())))
}
