//! Jot Test Utilities
//!
//! This crate provides concrete stand-ins for the external writer that the
//! adapter crate is written against, shared by the workspace's test suites:
//!
//! - [`TextWriter`] — a minimal compact-JSON reference writer whose string
//!   path goes through `jot-escape`
//! - [`RecordingWriter`] — logs every driven operation, optionally injecting
//!   a fault at a chosen point

pub mod recording;
pub mod text;

pub use recording::{Op, RecordingWriter, WriterFault};
pub use text::TextWriter;
