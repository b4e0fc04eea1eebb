//! Decor Records - the static table behind every wrapped lookup
//!
//! This crate has no I/O. It provides:
//!
//! - `Record`: an ordered row of string fields
//! - `Field`: positional column names of the person table
//! - `RecordStore`: an immutable header + rows table with index and username lookup
//! - Error types

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod record;
pub mod store;

// Re-export commonly used types
pub use error::{DecorError, Result};
pub use record::{Field, Record};
pub use store::{RecordStore, PERSONS};
