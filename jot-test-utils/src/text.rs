//! Compact reference writer producing RFC 4627 text

use std::convert::Infallible;

use jot_adapt::{JsonWriter, WriteJson};
use jot_escape::write_escaped;

/// Minimal compact-JSON writer over an in-memory buffer.
///
/// Implements the [`JsonWriter`] capability the adapters are written
/// against: comma separation via a per-scope flag stack, `"key":value`
/// pairs, and scalar formatting for the types the test suites use. String
/// values are escaped through `jot-escape`, which is what exercises the
/// escaper on the writer's string path.
///
/// No whitespace is ever inserted. The writer is infallible; it exists to
/// check wire output, not to model faults (see
/// [`RecordingWriter`](crate::RecordingWriter) for that).
#[derive(Debug, Default)]
pub struct TextWriter {
    out: Vec<u8>,
    needs_comma: Vec<bool>,
    suppress_separator: bool,
}

impl TextWriter {
    /// Create an empty writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume the writer, returning the produced bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.out
    }

    /// Consume the writer, returning the produced text.
    ///
    /// Panics if a raw non-UTF-8 byte sequence was written; test inputs are
    /// expected to be valid UTF-8.
    pub fn into_string(self) -> String {
        String::from_utf8(self.out).expect("writer output was not UTF-8")
    }

    fn separate(&mut self) {
        if self.suppress_separator {
            self.suppress_separator = false;
            return;
        }
        if let Some(top) = self.needs_comma.last_mut() {
            if *top {
                self.out.push(b',');
            }
            *top = true;
        }
    }

    /// Write a scalar rendered as raw JSON text.
    pub fn raw(&mut self, literal: &str) {
        self.separate();
        self.out.extend_from_slice(literal.as_bytes());
    }

    /// Write a quoted, escaped string value.
    pub fn string(&mut self, s: &str) {
        self.separate();
        self.out.push(b'"');
        // Vec sinks are infallible.
        let _ = write_escaped(&mut self.out, s.as_bytes());
        self.out.push(b'"');
    }
}

impl JsonWriter for TextWriter {
    type Error = Infallible;

    fn begin_array(&mut self) -> Result<(), Infallible> {
        self.separate();
        self.out.push(b'[');
        self.needs_comma.push(false);
        Ok(())
    }

    fn end_array(&mut self) -> Result<(), Infallible> {
        self.needs_comma.pop();
        self.out.push(b']');
        Ok(())
    }

    fn begin_object(&mut self) -> Result<(), Infallible> {
        self.separate();
        self.out.push(b'{');
        self.needs_comma.push(false);
        Ok(())
    }

    fn end_object(&mut self) -> Result<(), Infallible> {
        self.needs_comma.pop();
        self.out.push(b'}');
        Ok(())
    }

    fn pair<K, V>(&mut self, key: &K, value: &V) -> Result<(), Infallible>
    where
        K: WriteJson<Self> + ?Sized,
        V: WriteJson<Self> + ?Sized,
    {
        key.write_json(self)?;
        self.out.push(b':');
        self.suppress_separator = true;
        value.write_json(self)
    }
}

macro_rules! scalar_via_display {
    ($($ty:ty),*) => {
        $(
            impl WriteJson<TextWriter> for $ty {
                fn write_json(&self, writer: &mut TextWriter) -> Result<(), Infallible> {
                    writer.raw(&self.to_string());
                    Ok(())
                }
            }
        )*
    };
}

scalar_via_display!(i32, i64, u32, u64, usize, f64, bool);

impl WriteJson<TextWriter> for str {
    fn write_json(&self, writer: &mut TextWriter) -> Result<(), Infallible> {
        writer.string(self);
        Ok(())
    }
}

impl WriteJson<TextWriter> for String {
    fn write_json(&self, writer: &mut TextWriter) -> Result<(), Infallible> {
        writer.string(self);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commas_separate_array_elements() {
        let mut w = TextWriter::new();
        w.begin_array().unwrap();
        w.value(&1i32).unwrap();
        w.value(&2i32).unwrap();
        w.end_array().unwrap();
        assert_eq!(w.into_string(), "[1,2]");
    }

    #[test]
    fn pairs_have_no_separator_before_value() {
        let mut w = TextWriter::new();
        w.begin_object().unwrap();
        w.pair(&"a", &1i32).unwrap();
        w.pair(&"b", &2i32).unwrap();
        w.end_object().unwrap();
        assert_eq!(w.into_string(), "{\"a\":1,\"b\":2}");
    }

    #[test]
    fn strings_go_through_the_escaper() {
        let mut w = TextWriter::new();
        w.value(&"a\"b\\c\n").unwrap();
        assert_eq!(w.into_string(), "\"a\\\"b\\\\c\\u000A\"");
    }
}
