//! Consumer task: reads lines from the channel until it is drained.

use crate::channel::PipeReader;
use crate::error::Result;
use crate::frame::trim_line;
use crate::signal::{CompletionFlag, ReportGate};
use crate::status::{Role, StatusStream};

/// Consumer side of the pipeline.
///
/// Owns the read end of the channel. End of input is decided by a read
/// returning no data; the completion flag is only observed.
#[derive(Debug)]
pub struct Consumer {
    reader: PipeReader,
    done: CompletionFlag,
    gate: ReportGate,
    status: StatusStream,
}

impl Consumer {
    /// Binds a consumer to the read end, the flag, the producer's report
    /// gate and the status stream.
    pub fn new(
        reader: PipeReader,
        done: CompletionFlag,
        gate: ReportGate,
        status: StatusStream,
    ) -> Self {
        Self {
            reader,
            done,
            gate,
            status,
        }
    }

    /// Reads and reports lines until EOF, then closes the read end.
    ///
    /// The k-th line is reported only after the producer has reported
    /// its k-th value. Returns the trimmed lines in the order read.
    pub fn run(mut self) -> Result<Vec<String>> {
        log::debug!("Consumer starting");

        let mut consumed = Vec::new();
        let mut line = String::new();
        while !self.done.is_set() || !self.reader.is_closed() {
            line.clear();
            if self.reader.read_line(&mut line)? == 0 {
                log::debug!(
                    "Consumer reached EOF, completion flag set={}",
                    self.done.is_set()
                );
                break;
            }
            let text = trim_line(&line);
            if !self.gate.wait_for(consumed.len() as u64 + 1) {
                log::trace!("Producer gone before reporting line {}", consumed.len() + 1);
            }
            self.status.emit(Role::Consumer, text)?;
            log::trace!("Consumed line={:?}", text);
            consumed.push(text.to_owned());
        }

        self.reader.close();
        log::debug!("Consumer finished: {} lines read", consumed.len());
        Ok(consumed)
    }
}
