//! Truss nodes.

use crate::element::Element;
use crate::errors::TrussError;
use crate::geometry::Coordinates;
use crate::truss::Truss;

/// A labelled point of a [`Truss`] with the labels of the elements meeting there.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    /// Label, unique within one truss unless duplicates are tolerated.
    label: String,
    /// Position in metres.
    coordinates: Coordinates,
    /// Labels of incident elements in element-listing order.
    element_labels: Vec<String>,
}

impl Node {
    /// Create a node.
    pub(crate) fn new(label: String, coordinates: Coordinates, element_labels: Vec<String>) -> Self {
        Self {
            label,
            coordinates,
            element_labels,
        }
    }

    /// Label of the node.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Position of the node.
    #[must_use]
    pub fn coordinates(&self) -> &Coordinates {
        &self.coordinates
    }

    /// Labels of the elements that end at this node, in element-listing order.
    #[must_use]
    pub fn element_labels(&self) -> &[String] {
        &self.element_labels
    }

    /// Resolve the incident elements through `truss`, preserving stored order.
    ///
    /// # Errors
    ///
    /// Returns [`TrussError::ElementNotFound`] when a stored label is absent from `truss`.
    pub fn elements<'t>(&self, truss: &'t Truss) -> Result<Vec<&'t Element>, TrussError> {
        self.element_labels
            .iter()
            .map(|label| truss.get_element_by_label(label))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::planar;
    use crate::listing::parse_listing;
    use crate::ElementProperties;

    #[test]
    fn elements_follow_listing_order() {
        let properties = ElementProperties::new(2.0e11, 0.25, 0.1).expect("valid properties");
        let truss = Truss::from_records(
            &parse_listing("z a b\ny b c\nx a c"),
            &parse_listing("a 0 0\nb 1 0\nc 0 1"),
            properties,
        )
        .expect("truss builds");
        let node = truss.get_node_by_label("a").expect("node exists");
        let labels: Vec<&str> = node
            .elements(&truss)
            .expect("elements resolve")
            .iter()
            .map(|element| element.label())
            .collect();
        assert_eq!(labels, ["z", "x"]);
    }

    #[test]
    fn unknown_element_label_is_reported() {
        let properties = ElementProperties::new(2.0e11, 0.25, 0.1).expect("valid properties");
        let truss = Truss::from_records(&[], &[], properties).expect("empty truss");
        let orphan = Node::new("n".to_owned(), planar(0.0, 0.0), vec!["ghost".to_owned()]);
        assert_eq!(
            orphan.elements(&truss),
            Err(TrussError::ElementNotFound("ghost".to_owned()))
        );
    }
}
