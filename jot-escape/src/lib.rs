//! RFC 4627 JSON string escaping over pluggable byte sinks.
//!
//! This crate is the leaf half of the jot extension layer: a single-pass
//! transform that turns arbitrary input bytes into a JSON-string-safe byte
//! sequence, written through the [`Sink`] abstraction. It includes:
//!
//! - The [`Sink`] trait with buffer and stream implementations
//! - [`write_escaped`] for length-bounded input
//! - [`write_escaped_nul`] for NUL-terminated input
//!
//! The transform is total over all byte values; the only failure mode is a
//! fault raised by the sink itself, which propagates untouched.

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod escape;
pub mod sink;

pub use escape::{escape, write_escaped, write_escaped_nul};
pub use sink::{Sink, StreamSink};
