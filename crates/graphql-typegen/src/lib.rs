//! Compiles GraphQL selection sets, written against a typed schema, into
//! structural shape descriptors and per-artifact import lists.
//!
//! The two entry points are [`shape::compile`], which produces a
//! [`shape::ShapeDescriptor`] mirroring exactly the fields (and aliases) a
//! selection yields, and [`imports::extract_imports`], which produces the
//! deduplicated, first-seen-ordered list of external type artifacts a
//! generated type must reference. Both are pure functions over a read-only
//! [`schema::Schema`] and a caller-supplied [`config::ScalarSet`]; neither
//! performs any I/O.

pub mod ast;
pub mod config;
pub mod error;
pub mod filename;
pub mod flatten;
pub mod imports;
pub mod schema;
pub mod shape;
