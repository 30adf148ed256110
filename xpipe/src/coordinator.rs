//! Wires the channel, the completion flag and the two tasks together.

use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crate::channel;
use crate::config::PipelineConfig;
use crate::consumer::Consumer;
use crate::error::{Error, ErrorKind, Result};
use crate::producer::Producer;
use crate::signal::{CompletionFlag, ReportGate};
use crate::status::StatusStream;

/// Outcome of one completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Values the producer wrote.
    pub produced: u32,
    /// Trimmed lines the consumer read, in order.
    pub consumed: Vec<String>,
    /// Completion flag state after both tasks joined.
    pub flag_set: bool,
    /// Wall time from channel creation to the last join.
    pub elapsed: Duration,
}

/// Runs one producer and one consumer over a fresh pipe.
///
/// Blocks until both tasks have terminated. There is no timeout or
/// cancellation; each task ends on its own.
pub fn run(config: &PipelineConfig, status: StatusStream) -> Result<RunSummary> {
    config.validate()?;
    let start = Instant::now();

    let (writer, reader) = channel::pipe()?;
    let done = CompletionFlag::new();
    let gate = ReportGate::new();

    let producer = Producer::new(writer, done.clone(), gate.clone(), status.clone());
    let consumer = Consumer::new(reader, done.clone(), gate, status);

    let producer_config = config.clone();
    let producer_handle = spawn("producer", move || producer.run(&producer_config))?;
    let consumer_handle = match spawn("consumer", move || consumer.run()) {
        Ok(handle) => handle,
        Err(e) => {
            // Without a consumer the producer fails on its next write and
            // exits, so joining it here cannot hang.
            let _ = join(producer_handle);
            return Err(e);
        }
    };

    let produced = join(producer_handle);
    let consumed = join(consumer_handle);
    let elapsed = start.elapsed();

    let produced = produced?;
    let consumed = consumed?;
    let flag_set = done.is_set();
    log::debug!(
        "Run complete: produced={}, consumed={}, flag_set={}, elapsed={:?}",
        produced,
        consumed.len(),
        flag_set,
        elapsed
    );

    Ok(RunSummary {
        produced,
        consumed,
        flag_set,
        elapsed,
    })
}

fn spawn<T, F>(name: &str, f: F) -> Result<JoinHandle<Result<T>>>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T> + Send + 'static,
{
    thread::Builder::new()
        .name(name.to_owned())
        .spawn(f)
        .map_err(|e| Error::with_source(ErrorKind::Spawn, e))
}

fn join<T>(handle: JoinHandle<Result<T>>) -> Result<T> {
    let name = handle.thread().name().unwrap_or("task").to_owned();
    match handle.join() {
        Ok(result) => {
            if let Err(e) = &result {
                log::error!("{} task failed: {}", name, e);
            }
            result
        }
        Err(_) => {
            log::error!("{} task panicked", name);
            Err(Error::new(ErrorKind::TaskPanicked))
        }
    }
}
