// Core modules implementing path resolution, typed conversion, and error modeling.
pub mod coerce;
pub mod error;
pub mod path;
