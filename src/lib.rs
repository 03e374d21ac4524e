#![warn(clippy::all)]
#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]
#![doc = include_str!("../README.md")]

mod element;
mod errors;
mod geometry;
pub mod listing;
mod node;
mod properties;
mod truss;

pub use element::Element;
pub use errors::{ListingError, PropertyError, TrussError};
pub use geometry::{planar, spatial, Coordinates, Dimension};
pub use node::Node;
pub use properties::ElementProperties;
pub use truss::{DuplicateLabels, ReferenceCheck, Truss, TrussOptions};
