//! Immutable record store

use crate::error::{DecorError, Result};
use crate::record::{Field, Record};
use std::sync::OnceLock;

/// The built-in person table: header row followed by data rows.
pub const PERSONS: [[&str; 5]; 6] = [
    ["username", "full_name", "show", "gendergroup", "agegroup"],
    ["fred", "Fred Flintstone", "flintstones", "m", "adults"],
    ["wilma", "Wilma Flintstone", "flintstones", "f", "adults"],
    ["pebbles", "Pebbles Flintstone", "flintstones", "f", "kids"],
    ["barney", "Barney Rubble", "flintstones", "m", "adults"],
    ["betty", "Betty Rubble", "flintstones", "f", "adults"],
];

/// A header row plus data rows, all with the header's field count.
///
/// Stores are never mutated after construction. Data rows are addressed
/// 0-based with the header excluded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordStore {
    header: Record,
    rows: Vec<Record>,
}

impl RecordStore {
    /// Create a store, rejecting rows whose field count differs from the header's.
    pub fn new(header: Record, rows: Vec<Record>) -> Result<Self> {
        let expected = header.len();
        if let Some((row, record)) = rows
            .iter()
            .enumerate()
            .find(|(_, record)| record.len() != expected)
        {
            return Err(DecorError::RaggedRow {
                row,
                expected,
                found: record.len(),
            });
        }
        Ok(Self { header, rows })
    }

    /// Create a store from a table whose first row is the header.
    ///
    /// An empty table yields an empty header and no rows.
    pub fn from_table<T, R, S>(table: T) -> Result<Self>
    where
        T: IntoIterator<Item = R>,
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut rows = table.into_iter().map(Record::new);
        let header = rows.next().unwrap_or_else(|| Record::new(Vec::<String>::new()));
        Self::new(header, rows.collect())
    }

    /// The process-wide person table
    pub fn builtin() -> &'static Self {
        static INSTANCE: OnceLock<RecordStore> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let mut rows = PERSONS.iter().map(|row| Record::new(row.iter().copied()));
            Self {
                header: rows.next().unwrap_or_else(|| Record::new(Vec::<String>::new())),
                rows: rows.collect(),
            }
        })
    }

    /// Field names
    pub fn header(&self) -> &Record {
        &self.header
    }

    /// Data rows in insertion order
    pub fn rows(&self) -> &[Record] {
        &self.rows
    }

    /// Number of data rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when the store has no data rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Data row at `index`
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` when `index >= len()`.
    pub fn lookup_by_index(&self, index: usize) -> Result<&Record> {
        self.rows.get(index).ok_or(DecorError::IndexOutOfRange {
            index,
            len: self.rows.len(),
        })
    }

    /// First data row whose `username` equals `name`.
    ///
    /// Rows are scanned in insertion order, so the earliest match wins if
    /// usernames ever repeat.
    pub fn search_by_username(&self, name: &str) -> Option<&Record> {
        self.rows
            .iter()
            .find(|record| record.get(Field::Username) == Some(name))
    }

    /// `full_name` of the first row whose `username` equals `name`
    pub fn full_name_of(&self, name: &str) -> Option<&str> {
        self.search_by_username(name).and_then(Record::full_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_shape() {
        let store = RecordStore::builtin();
        assert_eq!(store.len(), 5);
        assert_eq!(store.header().fields()[0], "username");
        for row in store.rows() {
            assert_eq!(row.len(), store.header().len());
        }
    }

    #[test]
    fn test_lookup_by_index_excludes_header() {
        let store = RecordStore::builtin();
        assert_eq!(store.lookup_by_index(0).unwrap().username(), Some("fred"));
        assert_eq!(store.lookup_by_index(4).unwrap().username(), Some("betty"));
    }

    #[test]
    fn test_lookup_out_of_range() {
        let store = RecordStore::builtin();
        match store.lookup_by_index(5) {
            Err(DecorError::IndexOutOfRange { index, len }) => {
                assert_eq!(index, 5);
                assert_eq!(len, 5);
            }
            other => panic!("expected IndexOutOfRange, got {:?}", other),
        }
    }

    #[test]
    fn test_search_by_username() {
        let store = RecordStore::builtin();
        assert_eq!(store.full_name_of("barney"), Some("Barney Rubble"));
        assert_eq!(store.full_name_of("dino"), None);
        // the header's "username" cell is not a data row
        assert!(store.search_by_username("username").is_none());
    }

    #[test]
    fn test_search_first_match_wins() {
        let store = RecordStore::from_table([
            ["username", "full_name"],
            ["fred", "Fred Flintstone"],
            ["fred", "Fred Impostor"],
        ])
        .unwrap();
        assert_eq!(store.full_name_of("fred"), Some("Fred Flintstone"));
    }

    #[test]
    fn test_ragged_row_rejected() {
        let header = Record::new(["username", "full_name"]);
        let rows = vec![
            Record::new(["fred", "Fred Flintstone"]),
            Record::new(["wilma"]),
        ];
        match RecordStore::new(header, rows) {
            Err(DecorError::RaggedRow {
                row,
                expected,
                found,
            }) => {
                assert_eq!((row, expected, found), (1, 2, 1));
            }
            other => panic!("expected RaggedRow, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_table() {
        let store = RecordStore::from_table(Vec::<Vec<String>>::new()).unwrap();
        assert!(store.is_empty());
        assert!(store.header().is_empty());
    }
}
