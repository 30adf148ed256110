//! Producer task: writes the configured values into the channel.

use std::thread;

use crate::channel::PipeWriter;
use crate::config::PipelineConfig;
use crate::error::Result;
use crate::frame::encode_line;
use crate::signal::{CompletionFlag, ReportGate};
use crate::status::{Role, StatusStream};

/// Producer side of the pipeline.
///
/// Owns the write end of the channel. Sets the completion flag only
/// after every value is written and the write end is closed.
#[derive(Debug)]
pub struct Producer {
    writer: PipeWriter,
    done: CompletionFlag,
    gate: ReportGate,
    status: StatusStream,
}

impl Producer {
    /// Binds a producer to the write end, the flag, the report gate and
    /// the status stream.
    pub fn new(
        writer: PipeWriter,
        done: CompletionFlag,
        gate: ReportGate,
        status: StatusStream,
    ) -> Self {
        Self {
            writer,
            done,
            gate,
            status,
        }
    }

    /// Writes every value, closes the write end, then sets the flag.
    ///
    /// Returns the number of values written. On error the write end is
    /// closed when `self` drops and the flag stays unset.
    pub fn run(mut self, config: &PipelineConfig) -> Result<u32> {
        log::debug!(
            "Producer starting: values={:?}, interval={:?}",
            config.values(),
            config.interval
        );

        let mut written = 0;
        for value in config.values() {
            let line = encode_line(value)?;
            self.writer.write_line(line.as_bytes())?;
            self.status.emit(Role::Producer, value)?;
            self.gate.advance();
            written += 1;
            log::trace!("Produced value={}", value);
            thread::sleep(config.interval);
        }

        self.writer.close();
        self.done.set();
        log::debug!("Producer finished: {} values written", written);
        Ok(written)
    }
}

impl Drop for Producer {
    fn drop(&mut self) {
        // Covers both normal exit and failure: no more reports will come.
        self.gate.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channel::{self, ChannelState};
    use crate::error::ErrorKind;
    use crate::status::Transcript;
    use std::time::Duration;

    fn quick(count: u32) -> PipelineConfig {
        PipelineConfig::new()
            .with_count(count)
            .with_interval(Duration::from_millis(1))
    }

    #[test]
    fn test_producer_writes_all_then_sets_flag() {
        let (writer, mut reader) = channel::pipe().unwrap();
        let done = CompletionFlag::new();
        let gate = ReportGate::new();
        let transcript = Transcript::new();

        let producer = Producer::new(writer, done.clone(), gate.clone(), transcript.stream());
        assert_eq!(producer.run(&quick(5)).unwrap(), 5);
        assert!(done.is_set());
        assert!(gate.wait_for(5));
        assert!(!gate.wait_for(6));

        let mut data = String::new();
        while reader.read_line(&mut data).unwrap() > 0 {}
        assert_eq!(data, "1\n2\n3\n4\n5\n");
        assert_eq!(
            transcript.lines_for(Role::Producer),
            vec!["1", "2", "3", "4", "5"]
        );
    }

    #[test]
    fn test_producer_empty_range() {
        let (writer, mut reader) = channel::pipe().unwrap();
        let done = CompletionFlag::new();
        let gate = ReportGate::new();
        let transcript = Transcript::new();

        let producer = Producer::new(writer, done.clone(), gate.clone(), transcript.stream());
        assert_eq!(producer.run(&quick(0)).unwrap(), 0);
        assert!(done.is_set());
        assert!(!gate.wait_for(1));

        let mut line = String::new();
        assert_eq!(reader.read_line(&mut line).unwrap(), 0);
        assert_eq!(reader.state(), ChannelState::Open);
        assert!(transcript.lines().is_empty());
    }

    #[test]
    fn test_producer_write_failure_leaves_flag_unset() {
        let (writer, reader) = channel::pipe().unwrap();
        drop(reader);
        let done = CompletionFlag::new();
        let gate = ReportGate::new();
        let transcript = Transcript::new();

        let producer = Producer::new(writer, done.clone(), gate.clone(), transcript.stream());
        let err = producer.run(&quick(3)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Write);
        assert!(!done.is_set());
        // Gate is closed on failure, so a waiting consumer is released.
        assert!(!gate.wait_for(1));
        assert!(transcript.lines().is_empty());
    }
}
