//! Purpose: Internal JSON decoding boundary.
//! Exports: `parse` module with the decode entrypoint and failure categorization.
//! Role: Single seam for decoder selection so callsites avoid ad hoc decode logic.
//! Invariants: All document bytes are decoded through this module.

pub(crate) mod parse;
