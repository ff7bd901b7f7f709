//! Output layer for printed examples.
//!
//! Scenarios never talk to a server; what they produce is text for a reader.
//! This module owns how that text is formatted and where it is written:
//! - `config` - pretty vs compact JSON, whether silent requests are shown
//! - `writer` - async writer over any `AsyncWrite` (stdout in the binary,
//!   an in-memory buffer in tests)

mod config;
mod error;
mod writer;

pub use config::{OutputConfig, OutputFormat};
pub use error::{OutputError, OutputResult};
pub use writer::ExampleWriter;
