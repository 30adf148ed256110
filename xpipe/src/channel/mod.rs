//! The byte-stream channel connecting producer and consumer.
//!
//! A channel is a single OS pipe. The write end and the read end are
//! separate owning handles, so each task closes its own end
//! independently of the other.

mod reader;
mod writer;

pub use reader::PipeReader;
pub use writer::PipeWriter;

use crate::error::Result;

/// Channel state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelState {
    /// End is open and usable.
    Open,

    /// End has been closed; every further operation fails.
    Closed,
}

/// Creates a connected pipe and returns its `(writer, reader)` ends.
pub fn pipe() -> Result<(PipeWriter, PipeReader)> {
    let (read_fd, write_fd) = nix::unistd::pipe()?;
    log::trace!("Created pipe");
    Ok((PipeWriter::from_fd(write_fd), PipeReader::from_fd(read_fd)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_pipe_roundtrip_then_eof() {
        let (mut writer, mut reader) = pipe().unwrap();
        writer.write_line(b"1\n").unwrap();
        writer.write_line(b"2\n").unwrap();
        writer.close();

        let mut line = String::new();
        assert_eq!(reader.read_line(&mut line).unwrap(), 2);
        assert_eq!(line, "1\n");
        line.clear();
        assert_eq!(reader.read_line(&mut line).unwrap(), 2);
        assert_eq!(line, "2\n");
        line.clear();
        // Writer closed and pipe drained.
        assert_eq!(reader.read_line(&mut line).unwrap(), 0);
        assert!(line.is_empty());
    }

    #[test]
    fn test_write_after_reader_dropped_fails() {
        let (mut writer, reader) = pipe().unwrap();
        drop(reader);
        let err = writer.write_line(b"1\n").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Write);
    }

    #[test]
    fn test_closed_ends_fail_without_blocking() {
        let (mut writer, mut reader) = pipe().unwrap();
        writer.close();
        reader.close();
        assert_eq!(writer.state(), ChannelState::Closed);
        assert_eq!(reader.state(), ChannelState::Closed);

        let err = writer.write_line(b"1\n").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ChannelClosed);
        let mut line = String::new();
        let err = reader.read_line(&mut line).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ChannelClosed);
    }

    #[test]
    fn test_close_is_idempotent() {
        let (mut writer, mut reader) = pipe().unwrap();
        writer.close();
        writer.close();
        reader.close();
        reader.close();
        assert_eq!(writer.state(), ChannelState::Closed);
        assert_eq!(reader.state(), ChannelState::Closed);
    }
}
