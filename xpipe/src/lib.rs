//! # XPipe - Producer/Consumer over an OS Pipe
//!
//! XPipe runs one producer thread and one consumer thread connected by a
//! single OS pipe:
//!
//! - **Producer**: writes a bounded sequence of integers, one per line,
//!   then closes its end and sets a completion flag
//! - **Consumer**: reads and reports lines until the pipe is closed and
//!   drained
//! - **Coordinator**: creates the pipe and the flag, starts both tasks and
//!   joins them
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                       Coordinator                         │
//! │   creates pipe + flag, spawns both tasks, joins both      │
//! ├────────────────────────────┬─────────────────────────────┤
//! │        Producer            │          Consumer           │
//! │  encode_line ─► PipeWriter │  PipeReader ─► trim_line    │
//! │        │                   │        ▲                    │
//! │        └──── OS pipe ──────┼────────┘                    │
//! │  close, then set flag ─► CompletionFlag ─► observed      │
//! ├────────────────────────────┴─────────────────────────────┤
//! │             StatusStream ("Producer: n" / "Consumer: n")  │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust,no_run
//! use xpipe::{PipelineConfig, StatusStream};
//!
//! let summary = xpipe::run(&PipelineConfig::default(), StatusStream::stdout())?;
//! assert_eq!(summary.consumed.len(), 5);
//! # Ok::<(), xpipe::Error>(())
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod channel;
pub mod config;
pub mod consumer;
pub mod coordinator;
pub mod error;
pub mod frame;
pub mod producer;
pub mod signal;
pub mod status;

// Re-export commonly used types
pub use channel::{ChannelState, PipeReader, PipeWriter, pipe};
pub use config::PipelineConfig;
pub use consumer::Consumer;
pub use coordinator::{RunSummary, run};
pub use error::{Error, ErrorKind, Result};
pub use producer::Producer;
pub use signal::{CompletionFlag, ReportGate};
pub use status::{Role, StatusStream, Transcript};

/// First value written by default.
pub const DEFAULT_FIRST_VALUE: u32 = 1;

/// Number of values written by default.
pub const DEFAULT_COUNT: u32 = 5;

/// Default pause after each write in milliseconds.
pub const DEFAULT_INTERVAL_MS: u64 = 500;
