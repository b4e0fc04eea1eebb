//! Decor Wrap - composable wrappers around record lookups
//!
//! A wrapper takes an operation (any `Fn(A) -> R`) and returns a new
//! operation accepting the same arguments. Several arguments travel as a
//! tuple. This crate provides:
//!
//! - Formatting: `bold`, `italic`, `shout`, and runtime-selected `Style`s
//! - Access gating: `Gate` with pluggable credential sources and notice sinks
//! - Serialization: JSON envelopes and delimited text with an optional header
//! - Composition: the `Compose` builder and the `decorate!` macro
//! - Configuration and test doubles
//!
//! # Caveats
//!
//! The gate compares a credential against a fixed secret. It exists to show
//! call gating, and provides no security.

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod compose;
pub mod config;
pub mod gate;
pub mod markup;
pub mod serialize;
pub mod testing;

// Re-export commonly used types
pub use compose::{compose, Compose};
pub use config::{GateConfig, WrapConfig};
pub use decor_records::{DecorError, Field, Record, RecordStore, Result};
pub use gate::{
    require_auth, CredentialSource, FixedCredential, Gate, NoticeSink, StderrNotice,
    StdinCredentials,
};
pub use markup::{bold, decorate_all, italic, shout, Style, TextOutput};
pub use serialize::{as_csv, as_json, CsvOptions, CsvWrapper, IntoRow, JsonWrapper};

/// A type-erased operation, used when wrappers are chosen at runtime
pub type BoxedOp<'a, A, R> = Box<dyn Fn(A) -> R + 'a>;
