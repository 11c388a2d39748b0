//! Purpose: Configuration for loading documents.
//! Exports: `LoadOptions`.
//! Role: Keeps decoder selection out of the `Document` query surface.
//! Invariants: Defaults match `LoadOptions::new()`; options never affect path semantics.

use crate::json::parse::Backend;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LoadOptions {
    pub backend: Backend,
}

impl LoadOptions {
    pub fn new() -> Self {
        Self {
            backend: Backend::default(),
        }
    }

    pub fn with_backend(mut self, backend: Backend) -> Self {
        self.backend = backend;
        self
    }
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self::new()
    }
}
