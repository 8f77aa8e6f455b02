//! Shape adapters mapping containers onto writer scoping primitives

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use crate::writer::{JsonWriter, WriteJson};

/// Write an iterable as a JSON array, one element per iteration step.
///
/// The matching `end_array` fires on every exit path: if an element write
/// faults, the scope is still closed before the fault propagates, unmodified.
/// A `begin_array` fault opens no scope and triggers no close.
///
/// Returns the writer reference for chaining.
pub fn write_array<'w, W, I>(writer: &'w mut W, items: I) -> Result<&'w mut W, W::Error>
where
    W: JsonWriter,
    I: IntoIterator,
    I::Item: WriteJson<W>,
{
    writer.begin_array()?;
    let body = write_elements(writer, items);
    let close = writer.end_array();
    body?;
    close?;
    Ok(writer)
}

/// Write an iterable of `(key, value)` entries as a JSON object.
///
/// Each entry goes through the writer's pair primitive; entry order is the
/// iterable's own (callers supply ascending-by-key containers, this function
/// never sorts). Same guaranteed-close contract as [`write_array`].
pub fn write_object<'w, W, I, K, V>(writer: &'w mut W, entries: I) -> Result<&'w mut W, W::Error>
where
    W: JsonWriter,
    I: IntoIterator<Item = (K, V)>,
    K: WriteJson<W>,
    V: WriteJson<W>,
{
    writer.begin_object()?;
    let body = write_entries(writer, entries);
    let close = writer.end_object();
    body?;
    close?;
    Ok(writer)
}

/// Write a single `"key":value` pair through the writer's pair primitive.
///
/// No scope markers of its own; only meaningful inside an open object scope.
pub fn write_pair<'w, W, K, V>(writer: &'w mut W, key: &K, value: &V) -> Result<&'w mut W, W::Error>
where
    W: JsonWriter,
    K: WriteJson<W> + ?Sized,
    V: WriteJson<W> + ?Sized,
{
    writer.pair(key, value)?;
    Ok(writer)
}

/// Write one value through the writer's generic dispatch.
pub fn write_value<'w, W, T>(writer: &'w mut W, value: &T) -> Result<&'w mut W, W::Error>
where
    W: JsonWriter,
    T: WriteJson<W> + ?Sized,
{
    writer.value(value)?;
    Ok(writer)
}

fn write_elements<W, I>(writer: &mut W, items: I) -> Result<(), W::Error>
where
    W: JsonWriter,
    I: IntoIterator,
    I::Item: WriteJson<W>,
{
    for item in items {
        writer.value(&item)?;
    }
    Ok(())
}

fn write_entries<W, I, K, V>(writer: &mut W, entries: I) -> Result<(), W::Error>
where
    W: JsonWriter,
    I: IntoIterator<Item = (K, V)>,
    K: WriteJson<W>,
    V: WriteJson<W>,
{
    for (key, value) in entries {
        writer.pair(&key, &value)?;
    }
    Ok(())
}

impl<W: JsonWriter, T: WriteJson<W>> WriteJson<W> for Vec<T> {
    fn write_json(&self, writer: &mut W) -> Result<(), W::Error> {
        write_array(writer, self).map(|_| ())
    }
}

impl<W: JsonWriter, T: WriteJson<W>> WriteJson<W> for [T] {
    fn write_json(&self, writer: &mut W) -> Result<(), W::Error> {
        write_array(writer, self).map(|_| ())
    }
}

impl<W: JsonWriter, T: WriteJson<W>> WriteJson<W> for VecDeque<T> {
    fn write_json(&self, writer: &mut W) -> Result<(), W::Error> {
        write_array(writer, self).map(|_| ())
    }
}

/// Sets serialize as arrays; `BTreeSet` iteration is already ascending.
impl<W: JsonWriter, T: WriteJson<W>> WriteJson<W> for BTreeSet<T> {
    fn write_json(&self, writer: &mut W) -> Result<(), W::Error> {
        write_array(writer, self).map(|_| ())
    }
}

/// Pairs delegate straight to the writer's pair primitive.
impl<W: JsonWriter, K: WriteJson<W>, V: WriteJson<W>> WriteJson<W> for (K, V) {
    fn write_json(&self, writer: &mut W) -> Result<(), W::Error> {
        writer.pair(&self.0, &self.1)
    }
}

/// Mappings serialize as objects; `BTreeMap` iteration is already
/// ascending by key, so insertion order never shows on the wire.
impl<W: JsonWriter, K: WriteJson<W>, V: WriteJson<W>> WriteJson<W> for BTreeMap<K, V> {
    fn write_json(&self, writer: &mut W) -> Result<(), W::Error> {
        write_object(writer, self).map(|_| ())
    }
}
