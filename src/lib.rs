//! Purpose: Load JSON documents and read values out of them by dotted path (`a.0.b`).
//! Exports: `Document`, `LoadOptions`, `Backend`, `Lookup`, `FromValue`, `Error`, `ErrorKind`.
//! Role: Library crate; `api` is the public surface, `core` and `json` stay internal.
//! Invariants: Loading is the only fallible operation; queries default instead of erroring.
//! Invariants: Decoding goes through the `json` boundary only.
mod api;
mod core;
mod json;

pub use api::*;
