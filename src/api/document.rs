//! Purpose: Own one decoded JSON tree and answer dotted-path queries against it.
//! Exports: `Document`.
//! Role: Public entrypoint: load from bytes or a file, then `get` and typed getters.
//! Invariants: A failed load leaves the previously loaded tree untouched.
//! Invariants: Queries never fail; misses and type mismatches become `None` or a default.
//! Invariants: The tree is replaced wholesale on reload and never mutated in place.
//! Notes: Reloading needs `&mut self`; share a loaded `Document` by reference for concurrent reads.

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde_json::Value;
use time::OffsetDateTime;
use tracing::{debug, trace};

use super::options::LoadOptions;
use crate::core::coerce::FromValue;
use crate::core::error::{Error, ErrorKind};
use crate::core::path::{Lookup, lookup as lookup_path, resolve as resolve_path};
use crate::json::parse;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Document {
    data: Option<Value>,
    options: LoadOptions,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: LoadOptions) -> Self {
        Self {
            data: None,
            options,
        }
    }

    /// Decodes `bytes` into a new document with default options.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, Error> {
        let mut document = Self::new();
        document.load(bytes)?;
        Ok(document)
    }

    /// Reads and decodes the file at `path` into a new document with default options.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, Error> {
        let mut document = Self::new();
        document.load_file(path)?;
        Ok(document)
    }

    pub fn options(&self) -> &LoadOptions {
        &self.options
    }

    /// Replaces the tree with the one decoded from `bytes`.
    ///
    /// Fails with [`ErrorKind::InvalidDocument`] when `bytes` is not well-formed JSON;
    /// the current tree is kept in that case.
    pub fn load(&mut self, bytes: &[u8]) -> Result<(), Error> {
        self.decode_into(bytes, "bytes")
    }

    pub fn load_str(&mut self, input: &str) -> Result<(), Error> {
        self.load(input.as_bytes())
    }

    /// Resolves `path` to an absolute path, reads it whole, and loads its contents.
    ///
    /// Errors are [`ErrorKind::PathResolution`] when the path cannot be made absolute
    /// (for example an empty path), [`ErrorKind::Io`] when the file cannot be read, and
    /// [`ErrorKind::InvalidDocument`] when its contents are not JSON.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<(), Error> {
        let path = path.as_ref();
        let absolute = std::path::absolute(path).map_err(|err| {
            Error::new(ErrorKind::PathResolution)
                .with_message("cannot resolve document path")
                .with_path(path)
                .with_source(err)
        })?;
        let bytes = fs::read(&absolute).map_err(|err| {
            Error::new(ErrorKind::Io)
                .with_message("failed to read document")
                .with_path(&absolute)
                .with_source(err)
        })?;
        self.decode_into(&bytes, &absolute.display().to_string())
            .map_err(|err| err.with_path(&absolute))
    }

    fn decode_into(&mut self, bytes: &[u8], context: &str) -> Result<(), Error> {
        let backend = self.options.backend;
        match parse::decode(bytes, backend) {
            Ok(value) => {
                debug!(
                    bytes = bytes.len(),
                    backend = backend.as_str(),
                    context,
                    "loaded json document"
                );
                self.data = Some(value);
                Ok(())
            }
            Err(err) => {
                let category = err.category();
                debug!(
                    bytes = bytes.len(),
                    backend = backend.as_str(),
                    context,
                    category = category.label(),
                    "rejected json document"
                );
                Err(Error::new(ErrorKind::InvalidDocument)
                    .with_message("document is not valid JSON")
                    .with_hint(parse::hint_for_error(&err, context))
                    .with_source(err))
            }
        }
    }

    /// The whole decoded tree, if a load has succeeded.
    pub fn data(&self) -> Option<&Value> {
        self.data.as_ref()
    }

    pub fn is_loaded(&self) -> bool {
        self.data.is_some()
    }

    pub fn clear(&mut self) {
        self.data = None;
    }

    /// Value at the dotted `path`; explicit `null` counts as absent.
    pub fn get(&self, path: &str) -> Option<&Value> {
        let found = resolve_path(self.data.as_ref(), path);
        if found.is_none() {
            trace!(path, "json path not found");
        }
        found
    }

    /// Like [`Document::get`] but tells an explicit `null` apart from a missing path.
    pub fn lookup(&self, path: &str) -> Lookup<'_> {
        lookup_path(self.data.as_ref(), path)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.get(path).is_some()
    }

    /// Value at `path` converted to `T`, or `None` when absent or of another type.
    pub fn get_as<T: FromValue>(&self, path: &str) -> Option<T> {
        self.get(path).and_then(T::from_value)
    }

    /// Deserializes the subtree at `path` into `T`; `None` when absent or its shape does not fit.
    pub fn extract<T: DeserializeOwned>(&self, path: &str) -> Option<T> {
        T::deserialize(self.get(path)?).ok()
    }

    pub fn get_or<T: FromValue>(&self, path: &str, fallback: T) -> T {
        self.get_as(path).unwrap_or(fallback)
    }

    pub fn get_str(&self, path: &str) -> &str {
        self.get(path).and_then(Value::as_str).unwrap_or_default()
    }

    pub fn get_string(&self, path: &str) -> String {
        self.get_as(path).unwrap_or_default()
    }

    pub fn get_int(&self, path: &str) -> i64 {
        self.get_as(path).unwrap_or_default()
    }

    pub fn get_float(&self, path: &str) -> f64 {
        self.get_as(path).unwrap_or_default()
    }

    pub fn get_bool(&self, path: &str) -> bool {
        self.get_as(path).unwrap_or_default()
    }

    /// RFC 3339 timestamp at `path`; the Unix epoch when absent or unparsable.
    pub fn get_time(&self, path: &str) -> OffsetDateTime {
        self.get_or(path, OffsetDateTime::UNIX_EPOCH)
    }

    /// Seconds at `path` as a `Duration`; zero when absent, negative, or not a number.
    pub fn get_duration(&self, path: &str) -> Duration {
        self.get_as(path).unwrap_or_default()
    }
}
