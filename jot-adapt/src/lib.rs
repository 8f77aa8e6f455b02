//! Container-shape adapters for chained JSON writers.
//!
//! The other half of the jot extension layer: generic functions that map a
//! container's *shape* onto an external writer's array/object scoping
//! primitives. Four shapes are recognized:
//!
//! - Ordered sequences (`Vec<T>`, `[T]`, `VecDeque<T>`) — JSON arrays
//! - Sets (`BTreeSet<T>`, ascending iteration) — JSON arrays
//! - Pairs (`(K, V)`) — one `"key":value` write
//! - Sorted mappings (`BTreeMap<K, V>`, ascending by key) — JSON objects
//!
//! The writer itself is an external collaborator, consumed through the
//! [`JsonWriter`] capability trait; delimiter emission and value formatting
//! belong to it, never to this crate. Element serialization recurses through
//! the writer's generic dispatch ([`JsonWriter::value`]), so nested
//! containers select their adapter by shape at every level.

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod adapt;
pub mod writer;

pub use adapt::{write_array, write_object, write_pair, write_value};
pub use writer::{JsonWriter, WriteJson};
