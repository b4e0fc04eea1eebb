//! Output-format wrappers
//!
//! Both wrappers take an operation returning a record and turn its result
//! into text, using the header of the store they were bound to:
//!
//! - JSON: `{"header":[...],"data":[...]}`
//! - CSV: optional header line, `\n`, then the joined values. No trailing
//!   newline and no quoting, so values containing the delimiter are emitted
//!   as-is.
//!
//! Errors from the inner operation (for example an out-of-range index)
//! propagate unchanged.

use decor_records::{Record, RecordStore, Result};
use serde::{Deserialize, Serialize};

/// Return values the serializers accept as a row
pub trait IntoRow {
    /// The row's field values
    type Row: AsRef<[String]>;

    /// Extract the row, propagating any error from the inner operation
    fn into_row(self) -> Result<Self::Row>;
}

impl IntoRow for Record {
    type Row = Record;

    fn into_row(self) -> Result<Record> {
        Ok(self)
    }
}

impl<'a> IntoRow for &'a Record {
    type Row = &'a Record;

    fn into_row(self) -> Result<&'a Record> {
        Ok(self)
    }
}

impl IntoRow for Vec<String> {
    type Row = Vec<String>;

    fn into_row(self) -> Result<Vec<String>> {
        Ok(self)
    }
}

impl<'a> IntoRow for &'a [String] {
    type Row = &'a [String];

    fn into_row(self) -> Result<&'a [String]> {
        Ok(self)
    }
}

impl<R: AsRef<[String]>> IntoRow for Result<R> {
    type Row = R;

    fn into_row(self) -> Result<R> {
        self
    }
}

#[derive(Serialize)]
struct Envelope<'a> {
    header: &'a [String],
    data: &'a [String],
}

/// JSON serializer bound to a store's header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonWrapper {
    header: Record,
}

impl JsonWrapper {
    /// Capture the header of `store`
    pub fn new(store: &RecordStore) -> Self {
        Self {
            header: store.header().clone(),
        }
    }

    /// Render one row inside the header/data envelope
    pub fn render(&self, row: &[String]) -> Result<String> {
        let envelope = Envelope {
            header: self.header.fields(),
            data: row,
        };
        Ok(serde_json::to_string(&envelope)?)
    }

    /// Wrap `f` so its row is returned as JSON text
    pub fn wrap<A, R, F>(self, f: F) -> impl Fn(A) -> Result<String>
    where
        F: Fn(A) -> R,
        R: IntoRow,
    {
        move |args| {
            let row = f(args).into_row()?;
            tracing::debug!(fields = row.as_ref().len(), "serializing row as json");
            self.render(row.as_ref())
        }
    }
}

impl Default for JsonWrapper {
    fn default() -> Self {
        Self::new(RecordStore::builtin())
    }
}

/// Serialize the row returned by `f` as JSON, with the built-in header
pub fn as_json<A, R, F>(f: F) -> impl Fn(A) -> Result<String>
where
    F: Fn(A) -> R,
    R: IntoRow,
{
    JsonWrapper::default().wrap(f)
}

/// CSV serializer settings; build once, apply to many operations
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CsvOptions {
    /// Separator placed between values (may be several characters)
    pub delimiter: String,
    /// Emit the header line before the data line
    pub include_header: bool,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            delimiter: ",".to_string(),
            include_header: false,
        }
    }
}

impl CsvOptions {
    /// Default settings: `,` and no header
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the delimiter
    pub fn delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    /// Enable or disable the header line
    pub fn include_header(mut self, include_header: bool) -> Self {
        self.include_header = include_header;
        self
    }

    /// Bind these settings to the built-in store's header
    pub fn build(self) -> CsvWrapper {
        self.build_for(RecordStore::builtin())
    }

    /// Bind these settings to `store`'s header
    pub fn build_for(self, store: &RecordStore) -> CsvWrapper {
        CsvWrapper {
            options: self,
            header: store.header().clone(),
        }
    }
}

/// CSV serializer with its settings fixed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvWrapper {
    options: CsvOptions,
    header: Record,
}

impl CsvWrapper {
    /// Settings this wrapper was built with
    pub fn options(&self) -> &CsvOptions {
        &self.options
    }

    /// Render one row, preceded by the header line if configured
    pub fn render(&self, row: &[String]) -> String {
        let delimiter = self.options.delimiter.as_str();
        let data = row.join(delimiter);
        if self.options.include_header {
            format!("{}\n{}", self.header.join(delimiter), data)
        } else {
            data
        }
    }

    /// Wrap `f` so its row is returned as delimited text
    pub fn wrap<A, R, F>(self, f: F) -> impl Fn(A) -> Result<String>
    where
        F: Fn(A) -> R,
        R: IntoRow,
    {
        move |args| {
            let row = f(args).into_row()?;
            tracing::debug!(
                fields = row.as_ref().len(),
                header = self.options.include_header,
                "serializing row as csv"
            );
            Ok(self.render(row.as_ref()))
        }
    }
}

/// Configure a CSV wrapper bound to the built-in header.
///
/// `as_csv(",", false)` matches `CsvOptions::default().build()`.
pub fn as_csv(delimiter: &str, include_header: bool) -> CsvWrapper {
    CsvOptions::new()
        .delimiter(delimiter)
        .include_header(include_header)
        .build()
}
