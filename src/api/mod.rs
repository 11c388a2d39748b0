//! Purpose: Define the public Rust API boundary for jsondot.
//! Exports: Document loading, path queries, typed conversion, and errors.
//! Role: Public, additive-only surface; hides resolver and decoder internals.
//! Invariants: This module is the only public path to crate types.

mod document;
mod options;

pub use crate::core::coerce::FromValue;
pub use crate::core::error::{Error, ErrorKind};
pub use crate::core::path::{Lookup, lookup, resolve};
pub use crate::json::parse::Backend;
pub use document::Document;
pub use options::LoadOptions;
