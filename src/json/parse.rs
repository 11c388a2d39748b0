//! Purpose: Decode raw JSON bytes into a `serde_json::Value` tree.
//! Exports: `Backend`, `decode`, `DecodeError`, `ParseFailureCategory`, category helpers.
//! Role: Parser boundary; the rest of the crate never calls a JSON decoder directly.
//! Invariants: Validation and decoding happen in one pass; there is no separate validity check.
//! Invariants: Both backends yield the same tree type, so resolution is backend-agnostic.
//! Notes: Error mapping is done by callsites so domain context stays explicit.
//! Notes: Depends only on std and the decoder crates so tests can include it by path.

use serde::Deserialize;
use serde_json::Value;
use std::error::Error as StdError;
use std::fmt;

/// JSON decoder used to load a document.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Backend {
    /// `serde_json`; integers beyond `u64` decode as floats, nesting depth is unbounded.
    #[default]
    SerdeJson,
    /// `simd-json`; input is copied once to satisfy its mutable-slice API.
    SimdJson,
}

impl Backend {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SerdeJson => "serde_json",
            Self::SimdJson => "simd-json",
        }
    }
}

#[derive(Debug)]
pub enum DecodeError {
    Serde(serde_json::Error),
    Simd(simd_json::Error),
}

impl DecodeError {
    pub fn category(&self) -> ParseFailureCategory {
        match self {
            Self::Serde(err) => categorize_serde_error(err),
            Self::Simd(err) => categorize_error(err),
        }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Serde(err) => write!(f, "{err}"),
            Self::Simd(err) => write!(f, "{err}"),
        }
    }
}

impl StdError for DecodeError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Serde(err) => Some(err),
            Self::Simd(err) => Some(err),
        }
    }
}

pub fn decode(bytes: &[u8], backend: Backend) -> Result<Value, DecodeError> {
    match backend {
        Backend::SerdeJson => {
            // Deep nesting grows the heap through `serde_stacker` instead of the call stack.
            let mut deserializer = serde_json::Deserializer::from_slice(bytes);
            deserializer.disable_recursion_limit();
            let value = Value::deserialize(serde_stacker::Deserializer::new(&mut deserializer))
                .map_err(DecodeError::Serde)?;
            deserializer.end().map_err(DecodeError::Serde)?;
            Ok(value)
        }
        Backend::SimdJson => {
            let mut owned = bytes.to_vec();
            simd_json::serde::from_slice(&mut owned).map_err(DecodeError::Simd)
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ParseFailureCategory {
    Syntax,
    Eof,
    Utf8,
    NumericRange,
    DepthLimit,
    Unknown,
}

impl ParseFailureCategory {
    pub fn label(self) -> &'static str {
        match self {
            Self::Syntax => "syntax",
            Self::Eof => "eof",
            Self::Utf8 => "utf8",
            Self::NumericRange => "numeric-range",
            Self::DepthLimit => "depth-limit",
            Self::Unknown => "unknown",
        }
    }
}

pub fn categorize_serde_error(err: &serde_json::Error) -> ParseFailureCategory {
    use serde_json::error::Category;
    match err.classify() {
        Category::Eof => ParseFailureCategory::Eof,
        Category::Io => ParseFailureCategory::Unknown,
        Category::Syntax | Category::Data => match categorize_message(&err.to_string()) {
            ParseFailureCategory::Unknown => ParseFailureCategory::Syntax,
            category => category,
        },
    }
}

pub fn categorize_error(err: &simd_json::Error) -> ParseFailureCategory {
    categorize_message(&err.to_string())
}

pub fn categorize_message(message: &str) -> ParseFailureCategory {
    let message = message.to_ascii_lowercase();
    let has = |needle: &str| message.contains(needle);

    if has("recursion") || has("depth") {
        ParseFailureCategory::DepthLimit
    } else if has("utf8") || has("utf-8") || has("unicode") {
        ParseFailureCategory::Utf8
    } else if has("number") || has("exponent") || has("overflow") {
        ParseFailureCategory::NumericRange
    } else if has("eof") || has("end of") {
        ParseFailureCategory::Eof
    } else if has("syntax")
        || has("expected")
        || has("unexpected")
        || has("trailing")
        || has("invalid")
    {
        ParseFailureCategory::Syntax
    } else {
        ParseFailureCategory::Unknown
    }
}

pub fn hint_for_category(category: ParseFailureCategory, context: &str) -> String {
    format!(
        "parse category: {}; context: {context}. Check the input is a single well-formed JSON value.",
        category.label()
    )
}

pub fn hint_for_error(err: &DecodeError, context: &str) -> String {
    hint_for_category(err.category(), context)
}
