//! Operation-recording writer with optional fault injection

use jot_adapt::{JsonWriter, WriteJson};
use thiserror::Error;

/// One operation driven on a [`RecordingWriter`].
///
/// Scalar operands are rendered to plain text (unquoted) so tests can assert
/// on sequences like `Pair("a", "1")` without caring about wire formatting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    /// An array scope was opened.
    BeginArray,
    /// An array scope was closed.
    EndArray,
    /// An object scope was opened.
    BeginObject,
    /// An object scope was closed.
    EndObject,
    /// One key/value pair was written.
    Pair(String, String),
    /// One single value was written.
    Value(String),
}

/// Fault injected by [`RecordingWriter::failing_at`], carrying the index of
/// the refused operation.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("writer refused operation {0}")]
pub struct WriterFault(pub usize);

/// A writer that logs every operation driven on it.
///
/// Used to assert dispatch order: which scoping primitives fired, with which
/// operands, in which sequence. Optionally refuses the operation at a chosen
/// index with a [`WriterFault`] while still logging everything driven after
/// the fault, so tests can observe the guaranteed-close obligation.
#[derive(Debug, Default)]
pub struct RecordingWriter {
    ops: Vec<Op>,
    capture: Option<String>,
    fail_at: Option<usize>,
    seen: usize,
}

impl RecordingWriter {
    /// Create a writer that accepts every operation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a writer that refuses the operation at `index` (zero-based,
    /// counting every driven operation) and accepts all others.
    pub fn failing_at(index: usize) -> Self {
        Self {
            fail_at: Some(index),
            ..Self::default()
        }
    }

    /// The operations accepted so far.
    pub fn ops(&self) -> &[Op] {
        &self.ops
    }

    /// Consume the writer, returning the accepted operations.
    pub fn into_ops(self) -> Vec<Op> {
        self.ops
    }

    fn admit(&mut self, op: Op) -> Result<(), WriterFault> {
        if let Some(buf) = &mut self.capture {
            render(buf, &op);
            return Ok(());
        }
        let index = self.seen;
        self.seen += 1;
        if self.fail_at == Some(index) {
            return Err(WriterFault(index));
        }
        self.ops.push(op);
        Ok(())
    }

    fn capture_with<F>(&mut self, f: F) -> Result<String, WriterFault>
    where
        F: FnOnce(&mut Self) -> Result<(), WriterFault>,
    {
        let outer = self.capture.replace(String::new());
        let result = f(self);
        let captured = std::mem::replace(&mut self.capture, outer).unwrap_or_default();
        result?;
        Ok(captured)
    }
}

/// Render a captured operand textually (used for pair operands whose key or
/// value is itself a container).
fn render(buf: &mut String, op: &Op) {
    match op {
        Op::BeginArray => buf.push('['),
        Op::EndArray => buf.push(']'),
        Op::BeginObject => buf.push('{'),
        Op::EndObject => buf.push('}'),
        Op::Pair(k, v) => {
            buf.push_str(k);
            buf.push(':');
            buf.push_str(v);
        }
        Op::Value(v) => buf.push_str(v),
    }
}

impl JsonWriter for RecordingWriter {
    type Error = WriterFault;

    fn begin_array(&mut self) -> Result<(), WriterFault> {
        self.admit(Op::BeginArray)
    }

    fn end_array(&mut self) -> Result<(), WriterFault> {
        self.admit(Op::EndArray)
    }

    fn begin_object(&mut self) -> Result<(), WriterFault> {
        self.admit(Op::BeginObject)
    }

    fn end_object(&mut self) -> Result<(), WriterFault> {
        self.admit(Op::EndObject)
    }

    fn pair<K, V>(&mut self, key: &K, value: &V) -> Result<(), WriterFault>
    where
        K: WriteJson<Self> + ?Sized,
        V: WriteJson<Self> + ?Sized,
    {
        let key = self.capture_with(|w| key.write_json(w))?;
        let value = self.capture_with(|w| value.write_json(w))?;
        self.admit(Op::Pair(key, value))
    }
}

macro_rules! scalar_via_display {
    ($($ty:ty),*) => {
        $(
            impl WriteJson<RecordingWriter> for $ty {
                fn write_json(&self, writer: &mut RecordingWriter) -> Result<(), WriterFault> {
                    writer.admit(Op::Value(self.to_string()))
                }
            }
        )*
    };
}

scalar_via_display!(i32, i64, u32, u64, usize, f64, bool);

impl WriteJson<RecordingWriter> for str {
    fn write_json(&self, writer: &mut RecordingWriter) -> Result<(), WriterFault> {
        writer.admit(Op::Value(self.to_string()))
    }
}

impl WriteJson<RecordingWriter> for String {
    fn write_json(&self, writer: &mut RecordingWriter) -> Result<(), WriterFault> {
        writer.admit(Op::Value(self.clone()))
    }
}
