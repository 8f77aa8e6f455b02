//! Append-only byte destinations for the escaping transform

use std::convert::Infallible;
use std::io;

/// An append-only destination for escaped bytes.
///
/// Two primitives are required: appending a run of bytes of known length and
/// appending a single byte. Every implementation must produce byte-identical
/// output for the same sequence of calls.
pub trait Sink {
    /// Error raised by the underlying destination.
    type Error;

    /// Append a run of bytes.
    fn write(&mut self, data: &[u8]) -> Result<(), Self::Error>;

    /// Append a single byte.
    fn put(&mut self, byte: u8) -> Result<(), Self::Error>;
}

/// Growable in-memory buffer sink. Appends directly, never fails.
impl Sink for Vec<u8> {
    type Error = Infallible;

    fn write(&mut self, data: &[u8]) -> Result<(), Infallible> {
        self.extend_from_slice(data);
        Ok(())
    }

    fn put(&mut self, byte: u8) -> Result<(), Infallible> {
        self.push(byte);
        Ok(())
    }
}

/// Growable buffer sink over the `bytes` crate's mutable buffer.
impl Sink for bytes::BytesMut {
    type Error = Infallible;

    fn write(&mut self, data: &[u8]) -> Result<(), Infallible> {
        self.extend_from_slice(data);
        Ok(())
    }

    fn put(&mut self, byte: u8) -> Result<(), Infallible> {
        bytes::BufMut::put_u8(self, byte);
        Ok(())
    }
}

/// Sink adapter over any [`std::io::Write`] stream.
///
/// Wraps the stream at construction; faults surface as [`std::io::Error`]
/// and are propagated to the caller unmodified.
#[derive(Debug)]
pub struct StreamSink<W: io::Write>(W);

impl<W: io::Write> StreamSink<W> {
    /// Wrap an output stream.
    pub fn new(stream: W) -> Self {
        StreamSink(stream)
    }

    /// Unwrap, returning the underlying stream.
    pub fn into_inner(self) -> W {
        self.0
    }
}

impl<W: io::Write> Sink for StreamSink<W> {
    type Error = io::Error;

    fn write(&mut self, data: &[u8]) -> Result<(), io::Error> {
        self.0.write_all(data)
    }

    fn put(&mut self, byte: u8) -> Result<(), io::Error> {
        self.0.write_all(&[byte])
    }
}
