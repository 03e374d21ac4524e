//! Error types produced while reading listings or querying a truss.

use std::path::PathBuf;

use thiserror::Error;

/// Error returned when a listing cannot be read or one of its records is malformed.
#[derive(Debug, Error)]
pub enum ListingError {
    /// Returned when the listing file cannot be opened or read.
    #[error("failed to read listing {path:?}: {source}")]
    Io {
        /// Path of the listing that failed.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// Returned when a record has fewer fields than required.
    #[error("record {line} has no field at index {index}")]
    MissingField {
        /// Zero-based record number within the listing.
        line: usize,
        /// Index of the field that was expected.
        index: usize,
    },
    /// Returned when a coordinate field is not a decimal number.
    #[error("record {line}, field {field}: {value:?} is not a number")]
    InvalidNumber {
        /// Zero-based record number within the listing.
        line: usize,
        /// Index of the offending field.
        field: usize,
        /// Raw text of the field.
        value: String,
    },
}

impl PartialEq for ListingError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Io { path: a, source: x }, Self::Io { path: b, source: y }) => {
                a == b && x.kind() == y.kind()
            }
            (
                Self::MissingField { line: a, index: x },
                Self::MissingField { line: b, index: y },
            ) => a == b && x == y,
            (
                Self::InvalidNumber {
                    line: a,
                    field: x,
                    value: s,
                },
                Self::InvalidNumber {
                    line: b,
                    field: y,
                    value: t,
                },
            ) => a == b && x == y && s == t,
            _ => false,
        }
    }
}

/// Error returned when element properties are not physically meaningful.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum PropertyError {
    /// Returned when Young's modulus is zero, negative or not a number.
    #[error("young's modulus must be positive (received {0})")]
    NonPositiveYoungModulus(f64),
    /// Returned when the cross-sectional area is zero, negative or not a number.
    #[error("area must be positive (received {0})")]
    NonPositiveArea(f64),
}

/// Error returned when building or querying a [`Truss`](crate::Truss).
///
/// Lookups never fall back to a default entity: an unknown label is always reported.
///
/// # Examples
///
/// ```
/// use trussgraph::{ElementProperties, Truss, TrussError};
///
/// let properties = ElementProperties::new(2.0e11, 0.25, 0.1).expect("valid properties");
/// let truss = Truss::from_records(&[], &[], properties).expect("empty truss");
/// let error = truss.get_node_by_label("7").expect_err("no nodes");
/// assert_eq!(error, TrussError::NodeNotFound("7".to_string()));
/// ```
#[derive(Debug, Error, PartialEq)]
pub enum TrussError {
    /// Returned when no node carries the requested label.
    #[error("node {0:?} does not exist in this truss")]
    NodeNotFound(String),
    /// Returned when no element carries the requested label.
    #[error("element {0:?} does not exist in this truss")]
    ElementNotFound(String),
    /// Returned when the stiffness of an element with coincident nodes is requested.
    #[error("element {0:?} has zero length")]
    ZeroLengthElement(String),
    /// Returned when two nodes share a label and duplicates are rejected.
    #[error("node label {0:?} appears more than once")]
    DuplicateNodeLabel(String),
    /// Returned when two elements share a label and duplicates are rejected.
    #[error("element label {0:?} appears more than once")]
    DuplicateElementLabel(String),
    /// Returned when a listing cannot be turned into nodes or elements.
    #[error(transparent)]
    Listing(#[from] ListingError),
}
