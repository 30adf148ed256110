//! Error type shared by every part of the pipeline.

use std::fmt;
use std::io;

/// Category of a pipeline failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// pipe(2) failed.
    PipeCreate,
    /// Writing or flushing a line failed.
    Write,
    /// Reading a line failed.
    Read,
    /// The channel end was already closed.
    ChannelClosed,
    /// A value did not fit the line buffer.
    Encode,
    /// The configured range overflows `u32`.
    InvalidConfig,
    /// The status stream lock was poisoned by a panicking writer.
    Poisoned,
    /// A task thread could not be started.
    Spawn,
    /// A task thread panicked.
    TaskPanicked,
}

/// Pipeline error: a kind plus the underlying I/O error, if any.
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    source: Option<io::Error>,
}

impl Error {
    /// Creates an error with no underlying cause.
    pub fn new(kind: ErrorKind) -> Self {
        Error { kind, source: None }
    }

    /// Creates an error caused by `source`.
    pub fn with_source(kind: ErrorKind, source: io::Error) -> Self {
        Error {
            kind,
            source: Some(source),
        }
    }

    /// Returns the error category.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ErrorKind::PipeCreate => write!(f, "Failed to create pipe")?,
            ErrorKind::Write => write!(f, "Failed to write to pipe")?,
            ErrorKind::Read => write!(f, "Failed to read from pipe")?,
            ErrorKind::ChannelClosed => write!(f, "Channel end already closed")?,
            ErrorKind::Encode => write!(f, "Line does not fit the frame buffer")?,
            ErrorKind::InvalidConfig => write!(f, "Invalid pipeline configuration")?,
            ErrorKind::Poisoned => write!(f, "Status stream lock poisoned")?,
            ErrorKind::Spawn => write!(f, "Failed to spawn task")?,
            ErrorKind::TaskPanicked => write!(f, "Task panicked")?,
        }
        if let Some(source) = &self.source {
            write!(f, ": {}", source)?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

impl From<nix::Error> for Error {
    fn from(err: nix::Error) -> Error {
        Error::with_source(ErrorKind::PipeCreate, io::Error::from(err))
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
