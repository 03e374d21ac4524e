//! Reader for whitespace-delimited node and element listings.
//!
//! A listing holds one record per line with fields separated by a single space.
//! The reader performs no validation; field counts and numbers are checked by
//! [`field`] and [`number`] when a [`Truss`](crate::Truss) is built from the records.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::errors::ListingError;

/// One line of a listing split into its fields.
pub type Record = Vec<String>;

/// Read a listing from disk.
///
/// # Errors
///
/// Returns [`ListingError::Io`] when the file cannot be read.
pub fn read_listing<P: AsRef<Path>>(path: P) -> Result<Vec<Record>, ListingError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| ListingError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let records = parse_listing(&text);
    debug!(path = %path.display(), records = records.len(), "read listing");
    Ok(records)
}

/// Split listing text into records.
///
/// # Examples
/// ```
/// use trussgraph::listing::parse_listing;
///
/// let records = parse_listing("0 0 1\n1 1 2\n");
/// assert_eq!(records.len(), 2);
/// assert_eq!(records[1], vec!["1", "1", "2"]);
/// ```
#[must_use]
pub fn parse_listing(text: &str) -> Vec<Record> {
    text.lines()
        .map(|line| line.split(' ').map(str::to_owned).collect())
        .collect()
}

/// Fetch field `index` of record number `line`.
///
/// # Errors
///
/// Returns [`ListingError::MissingField`] when the record is too short.
pub fn field(record: &[String], line: usize, index: usize) -> Result<&str, ListingError> {
    record
        .get(index)
        .map(String::as_str)
        .ok_or(ListingError::MissingField { line, index })
}

/// Parse field `index` of record number `line` as a decimal number.
///
/// # Errors
///
/// Returns [`ListingError::MissingField`] when the record is too short and
/// [`ListingError::InvalidNumber`] when the field does not parse.
pub fn number(record: &[String], line: usize, index: usize) -> Result<f64, ListingError> {
    let value = field(record, line, index)?;
    value.parse().map_err(|_| ListingError::InvalidNumber {
        line,
        field: index,
        value: value.to_owned(),
    })
}
