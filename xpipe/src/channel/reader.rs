//! Read end of the channel.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::os::fd::OwnedFd;

use super::ChannelState;
use crate::error::{Error, ErrorKind, Result};

/// Owning handle over the read end of the pipe, read line by line.
#[derive(Debug)]
pub struct PipeReader {
    inner: Option<BufReader<File>>,

    /// Total bytes read so far.
    bytes_read: usize,
}

impl PipeReader {
    pub(super) fn from_fd(fd: OwnedFd) -> Self {
        Self {
            inner: Some(BufReader::new(File::from(fd))),
            bytes_read: 0,
        }
    }

    /// Returns the current state of this end.
    pub fn state(&self) -> ChannelState {
        match self.inner {
            Some(_) => ChannelState::Open,
            None => ChannelState::Closed,
        }
    }

    /// Returns true once this end has been closed.
    pub fn is_closed(&self) -> bool {
        self.state() == ChannelState::Closed
    }

    /// Reads one line, terminator included, appending it to `buf`.
    ///
    /// Blocks until a full line, EOF, or an error. Returns `Ok(0)` only
    /// when the write end is closed and the pipe is drained.
    pub fn read_line(&mut self, buf: &mut String) -> Result<usize> {
        let inner = self
            .inner
            .as_mut()
            .ok_or_else(|| Error::new(ErrorKind::ChannelClosed))?;
        let n = inner
            .read_line(buf)
            .map_err(|e| Error::with_source(ErrorKind::Read, e))?;
        self.bytes_read += n;
        Ok(n)
    }

    /// Closes the read end. Any bytes still buffered are discarded.
    pub fn close(&mut self) {
        if self.inner.take().is_some() {
            log::trace!("Read end closed after {} bytes", self.bytes_read);
        }
    }
}
