//! Records and positional field names

use crate::error::{DecorError, Result};
use serde::Serialize;

/// One row of the table: an ordered sequence of string field values.
///
/// The header row is a `Record` too; its values are the field names.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Record(Vec<String>);

impl Record {
    /// Build a record from any sequence of string-like values
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(fields.into_iter().map(Into::into).collect())
    }

    /// Field values in positional order
    pub fn fields(&self) -> &[String] {
        &self.0
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when the record carries no fields
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Value at the position named by `field`
    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(field.position()).map(String::as_str)
    }

    /// `username` column
    pub fn username(&self) -> Option<&str> {
        self.get(Field::Username)
    }

    /// `full_name` column
    pub fn full_name(&self) -> Option<&str> {
        self.get(Field::FullName)
    }

    /// Join all values with `delimiter`. Values are not quoted or escaped.
    pub fn join(&self, delimiter: &str) -> String {
        self.0.join(delimiter)
    }

    /// Consume the record, returning its values
    pub fn into_fields(self) -> Vec<String> {
        self.0
    }
}

impl AsRef<[String]> for Record {
    fn as_ref(&self) -> &[String] {
        &self.0
    }
}

impl From<Vec<String>> for Record {
    fn from(fields: Vec<String>) -> Self {
        Self(fields)
    }
}

impl<S: Into<String>> FromIterator<S> for Record {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// Positional columns of the person table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Field {
    /// Login name, unique per row
    Username = 0,
    /// Display name
    FullName = 1,
    /// Display group (header name `show`)
    DisplayGroup = 2,
    /// Gender group (header name `gendergroup`)
    GenderGroup = 3,
    /// Age group (header name `agegroup`)
    AgeGroup = 4,
}

impl Field {
    /// All fields in header order
    pub const ALL: [Field; 5] = [
        Field::Username,
        Field::FullName,
        Field::DisplayGroup,
        Field::GenderGroup,
        Field::AgeGroup,
    ];

    /// Zero-based column position
    pub fn position(self) -> usize {
        self as usize
    }

    /// Column name as it appears in the header row
    pub fn name(self) -> &'static str {
        match self {
            Field::Username => "username",
            Field::FullName => "full_name",
            Field::DisplayGroup => "show",
            Field::GenderGroup => "gendergroup",
            Field::AgeGroup => "agegroup",
        }
    }

    /// Resolve a header name back to its field
    pub fn from_name(name: &str) -> Result<Self> {
        Field::ALL
            .into_iter()
            .find(|field| field.name() == name)
            .ok_or_else(|| DecorError::UnknownField(name.to_string()))
    }
}
