//! Write end of the channel.

use std::fs::File;
use std::io::Write;
use std::os::fd::OwnedFd;

use super::ChannelState;
use crate::error::{Error, ErrorKind, Result};

/// Owning handle over the write end of the pipe.
///
/// Writes go straight to the descriptor; there is no userspace buffer,
/// so a completed `write_line` is visible to the reader immediately.
#[derive(Debug)]
pub struct PipeWriter {
    file: Option<File>,

    /// Total bytes written so far.
    bytes_written: usize,
}

impl PipeWriter {
    pub(super) fn from_fd(fd: OwnedFd) -> Self {
        Self {
            file: Some(File::from(fd)),
            bytes_written: 0,
        }
    }

    /// Returns the current state of this end.
    pub fn state(&self) -> ChannelState {
        match self.file {
            Some(_) => ChannelState::Open,
            None => ChannelState::Closed,
        }
    }

    /// Appends `line` to the pipe and flushes it.
    pub fn write_line(&mut self, line: &[u8]) -> Result<()> {
        let file = self
            .file
            .as_mut()
            .ok_or_else(|| Error::new(ErrorKind::ChannelClosed))?;
        file.write_all(line)
            .and_then(|_| file.flush())
            .map_err(|e| Error::with_source(ErrorKind::Write, e))?;
        self.bytes_written += line.len();
        log::trace!("Wrote {} bytes, total={}", line.len(), self.bytes_written);
        Ok(())
    }

    /// Closes the write end. The reader sees EOF once it drains the pipe.
    pub fn close(&mut self) {
        if self.file.take().is_some() {
            log::trace!("Write end closed after {} bytes", self.bytes_written);
        }
    }
}
