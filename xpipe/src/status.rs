//! Status stream shared by the producer and consumer.
//!
//! Every status line has the form `<Role>: <text>`. The stream is a
//! single lock-protected writer, so lines from the two tasks never tear
//! into each other. The lock is only held while a status line is written.

use std::fmt;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use crate::error::{Error, ErrorKind, Result};

/// Which task emitted a status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// The task writing values into the channel.
    Producer,
    /// The task reading lines out of the channel.
    Consumer,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Producer => write!(f, "Producer"),
            Role::Consumer => write!(f, "Consumer"),
        }
    }
}

type Sink = Box<dyn Write + Send>;

/// Cloneable handle to a shared line sink.
#[derive(Clone)]
pub struct StatusStream {
    out: Arc<Mutex<Sink>>,
}

impl StatusStream {
    /// Status stream backed by the process's standard output.
    pub fn stdout() -> Self {
        Self::from_writer(io::stdout())
    }

    /// Status stream backed by any writer.
    pub fn from_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            out: Arc::new(Mutex::new(Box::new(writer))),
        }
    }

    /// Writes one `<role>: <text>` line and flushes it.
    pub fn emit(&self, role: Role, text: impl fmt::Display) -> Result<()> {
        let mut out = self
            .out
            .lock()
            .map_err(|_| Error::new(ErrorKind::Poisoned))?;
        writeln!(out, "{}: {}", role, text)
            .and_then(|_| out.flush())
            .map_err(|e| Error::with_source(ErrorKind::Write, e))
    }
}

impl fmt::Debug for StatusStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StatusStream").finish_non_exhaustive()
    }
}

/// In-memory sink that records every status line.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl Transcript {
    /// Creates an empty transcript.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a status stream writing into this transcript.
    pub fn stream(&self) -> StatusStream {
        StatusStream::from_writer(self.clone())
    }

    /// Recorded lines, in emission order.
    pub fn lines(&self) -> Vec<String> {
        let buf = self.buf.lock().unwrap_or_else(|e| e.into_inner());
        String::from_utf8_lossy(&buf)
            .lines()
            .map(str::to_owned)
            .collect()
    }

    /// Texts of the lines emitted by `role`, in emission order.
    pub fn lines_for(&self, role: Role) -> Vec<String> {
        let prefix = format!("{}: ", role);
        self.lines()
            .into_iter()
            .filter_map(|line| line.strip_prefix(&prefix).map(str::to_owned))
            .collect()
    }
}

impl Write for Transcript {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        let mut buf = self.buf.lock().unwrap_or_else(|e| e.into_inner());
        buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
