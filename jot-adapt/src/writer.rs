//! The external writer's capability contract

/// Capability contract for an external chained JSON writer.
///
/// Implementations own delimiter emission, separator bookkeeping, and the
/// formatting of every scalar type they support. This crate only drives the
/// scoping primitives and delegates each element through [`value`].
///
/// Callers must balance scopes themselves: every `begin_*` is matched by the
/// corresponding `end_*` exactly once, on every exit path. The adapter
/// helpers in [`crate::adapt`] uphold that obligation.
///
/// [`value`]: JsonWriter::value
pub trait JsonWriter: Sized {
    /// Error raised by the writer or its underlying output.
    type Error;

    /// Open a JSON array scope.
    fn begin_array(&mut self) -> Result<(), Self::Error>;

    /// Close the innermost JSON array scope.
    fn end_array(&mut self) -> Result<(), Self::Error>;

    /// Open a JSON object scope.
    fn begin_object(&mut self) -> Result<(), Self::Error>;

    /// Close the innermost JSON object scope.
    fn end_object(&mut self) -> Result<(), Self::Error>;

    /// Write one `"key":value` pair inside an object scope.
    ///
    /// Key and value formatting (including key quoting) is entirely the
    /// writer's business.
    fn pair<K, V>(&mut self, key: &K, value: &V) -> Result<(), Self::Error>
    where
        K: WriteJson<Self> + ?Sized,
        V: WriteJson<Self> + ?Sized;

    /// Generic single-value dispatch.
    ///
    /// Selects the value's representation by its type: scalars hit the
    /// writer's own impls, containers hit the shape adapters, which recurse
    /// back through this method for their elements.
    fn value<T: WriteJson<Self> + ?Sized>(&mut self, value: &T) -> Result<(), Self::Error> {
        value.write_json(self)
    }
}

/// A value that knows how to write itself through a given writer.
///
/// The `operator<<` seam: writers provide impls for their scalar types, and
/// [`crate::adapt`] provides the impls for the four container shapes.
pub trait WriteJson<W: JsonWriter> {
    /// Write `self` as a single JSON value.
    fn write_json(&self, writer: &mut W) -> Result<(), W::Error>;
}

impl<W: JsonWriter, T: WriteJson<W> + ?Sized> WriteJson<W> for &T {
    fn write_json(&self, writer: &mut W) -> Result<(), W::Error> {
        (**self).write_json(writer)
    }
}
