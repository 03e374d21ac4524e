//! Registry of the nodes and elements that make up one truss.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use petgraph::algo::connected_components;
use petgraph::graph::{NodeIndex, UnGraph};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::element::Element;
use crate::errors::TrussError;
use crate::geometry::{Coordinates, Dimension};
use crate::listing::{self, Record};
use crate::node::Node;
use crate::properties::ElementProperties;

/// What to do when two nodes or two elements share a label.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateLabels {
    /// Keep every record; lookups return the first one in listing order.
    #[default]
    FirstMatch,
    /// Fail construction on the first repeated label.
    Reject,
}

/// When dangling node labels in the element listing are reported.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferenceCheck {
    /// Only when the reference is traversed.
    #[default]
    Lazy,
    /// During construction.
    Eager,
}

/// Construction options for a [`Truss`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrussOptions {
    /// Number of coordinates read from each node record.
    pub dimension: Dimension,
    /// Handling of repeated labels.
    pub duplicate_labels: DuplicateLabels,
    /// Handling of element references to unknown nodes.
    pub references: ReferenceCheck,
}

/// Container for the nodes and elements of one pin-jointed truss.
///
/// Nodes and elements keep listing order. Label lookups go through an index built
/// once at construction that points at the first record carrying each label.
#[derive(Clone, Debug)]
pub struct Truss {
    /// Elements in listing order.
    elements: Vec<Element>,
    /// Nodes in listing order.
    nodes: Vec<Node>,
    /// First storage position of each element label.
    element_index: HashMap<String, usize>,
    /// First storage position of each node label.
    node_index: HashMap<String, usize>,
    /// Properties shared by every element.
    properties: Arc<ElementProperties>,
    /// Coordinate count of every node.
    dimension: Dimension,
}

impl Truss {
    /// Build a truss from an element listing and a node listing on disk.
    ///
    /// # Errors
    ///
    /// Returns [`TrussError::Listing`] when a file cannot be read or a record is
    /// malformed, and the errors of [`Truss::with_options`] otherwise.
    pub fn from_listings<P, Q>(
        elements_listing: P,
        nodes_listing: Q,
        properties: ElementProperties,
    ) -> Result<Self, TrussError>
    where
        P: AsRef<Path>,
        Q: AsRef<Path>,
    {
        Self::from_listings_with_options(
            elements_listing,
            nodes_listing,
            properties,
            TrussOptions::default(),
        )
    }

    /// [`Truss::from_listings`] with explicit options.
    ///
    /// # Errors
    ///
    /// See [`Truss::from_listings`].
    pub fn from_listings_with_options<P, Q>(
        elements_listing: P,
        nodes_listing: Q,
        properties: ElementProperties,
        options: TrussOptions,
    ) -> Result<Self, TrussError>
    where
        P: AsRef<Path>,
        Q: AsRef<Path>,
    {
        let element_records = listing::read_listing(elements_listing)?;
        let node_records = listing::read_listing(nodes_listing)?;
        Self::with_options(&element_records, &node_records, properties, options)
    }

    /// Build a planar truss from already-split records with default options.
    ///
    /// # Errors
    ///
    /// See [`Truss::with_options`].
    ///
    /// # Examples
    /// ```
    /// use trussgraph::{listing::parse_listing, ElementProperties, Truss};
    ///
    /// let elements = parse_listing("0 0 1\n1 1 2");
    /// let nodes = parse_listing("0 0.0 0.0\n1 1.0 0.0\n2 1.0 1.0");
    /// let properties = ElementProperties::new(2.0e11, 0.25, 0.1)?;
    /// let truss = Truss::from_records(&elements, &nodes, properties)?;
    ///
    /// assert_eq!(truss.element_count(), 2);
    /// assert_eq!(truss.get_node_by_label("1")?.element_labels(), ["0", "1"]);
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn from_records(
        element_records: &[Record],
        node_records: &[Record],
        properties: ElementProperties,
    ) -> Result<Self, TrussError> {
        Self::with_options(
            element_records,
            node_records,
            properties,
            TrussOptions::default(),
        )
    }

    /// Build a truss from already-split records.
    ///
    /// Element records are `label start end` with extra fields ignored. Node records
    /// are `label x y` or `label x y z` according to `options.dimension`, again with
    /// extra fields ignored.
    ///
    /// # Errors
    ///
    /// Returns [`TrussError::Listing`] for short records or unparsable coordinates,
    /// [`TrussError::DuplicateNodeLabel`] / [`TrussError::DuplicateElementLabel`]
    /// when duplicates are rejected, and [`TrussError::NodeNotFound`] for dangling
    /// references under [`ReferenceCheck::Eager`].
    pub fn with_options(
        element_records: &[Record],
        node_records: &[Record],
        properties: ElementProperties,
        options: TrussOptions,
    ) -> Result<Self, TrussError> {
        let properties = Arc::new(properties);

        let elements = element_records
            .iter()
            .enumerate()
            .map(|(line, record)| Self::create_element(record, line, &properties))
            .collect::<Result<Vec<_>, TrussError>>()?;
        let element_index = index_labels(
            elements.iter().map(Element::label),
            options.duplicate_labels,
            TrussError::DuplicateElementLabel,
        )?;

        let nodes = node_records
            .iter()
            .enumerate()
            .map(|(line, record)| Self::create_node(record, line, options.dimension, &elements))
            .collect::<Result<Vec<_>, TrussError>>()?;
        let node_index = index_labels(
            nodes.iter().map(Node::label),
            options.duplicate_labels,
            TrussError::DuplicateNodeLabel,
        )?;

        let truss = Self {
            elements,
            nodes,
            element_index,
            node_index,
            properties,
            dimension: options.dimension,
        };
        if options.references == ReferenceCheck::Eager {
            truss.validate_references()?;
        }
        debug!(
            elements = truss.element_count(),
            nodes = truss.node_count(),
            dimension = truss.dimension.components(),
            "built truss"
        );
        Ok(truss)
    }

    /// Create an element from `label start end`.
    fn create_element(
        record: &[String],
        line: usize,
        properties: &Arc<ElementProperties>,
    ) -> Result<Element, TrussError> {
        let label = listing::field(record, line, 0)?;
        let start = listing::field(record, line, 1)?;
        let end = listing::field(record, line, 2)?;
        Ok(Element::new(
            label.to_owned(),
            [start.to_owned(), end.to_owned()],
            Arc::clone(properties),
        ))
    }

    /// Create a node from `label x y [z]` and collect its incident elements.
    fn create_node(
        record: &[String],
        line: usize,
        dimension: Dimension,
        elements: &[Element],
    ) -> Result<Node, TrussError> {
        let label = listing::field(record, line, 0)?;
        let components = (1..=dimension.components())
            .map(|index| listing::number(record, line, index))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Node::new(
            label.to_owned(),
            Coordinates::new(&components),
            element_labels_for_node(label, elements),
        ))
    }

    /// Number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of elements.
    #[must_use]
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Nodes in listing order.
    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Elements in listing order.
    #[must_use]
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Properties shared by every element.
    #[must_use]
    pub fn properties(&self) -> &ElementProperties {
        &self.properties
    }

    /// Coordinate count of every node.
    #[must_use]
    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// Return the first element labelled `label`.
    ///
    /// # Errors
    ///
    /// Returns [`TrussError::ElementNotFound`] when no element carries `label`.
    pub fn get_element_by_label(&self, label: &str) -> Result<&Element, TrussError> {
        trace!(label, "element lookup");
        self.element_index
            .get(label)
            .map(|&index| &self.elements[index])
            .ok_or_else(|| TrussError::ElementNotFound(label.to_owned()))
    }

    /// Return the first node labelled `label`.
    ///
    /// # Errors
    ///
    /// Returns [`TrussError::NodeNotFound`] when no node carries `label`.
    pub fn get_node_by_label(&self, label: &str) -> Result<&Node, TrussError> {
        trace!(label, "node lookup");
        self.node_index
            .get(label)
            .map(|&index| &self.nodes[index])
            .ok_or_else(|| TrussError::NodeNotFound(label.to_owned()))
    }

    /// Check that every node label used by an element exists.
    ///
    /// # Errors
    ///
    /// Returns [`TrussError::NodeNotFound`] for the first dangling label in listing order.
    pub fn validate_references(&self) -> Result<(), TrussError> {
        for element in &self.elements {
            element.nodes(self)?;
        }
        Ok(())
    }

    /// Undirected graph with one vertex per node label and one edge per element.
    ///
    /// Vertices carry node labels and edges carry element labels. Duplicate node
    /// labels collapse into one vertex. Elements that reference unknown nodes are
    /// skipped.
    #[must_use]
    pub fn connectivity_graph(&self) -> UnGraph<&str, &str> {
        let mut graph = UnGraph::with_capacity(self.node_index.len(), self.element_count());
        let mut vertices: HashMap<&str, NodeIndex> = HashMap::new();
        for node in &self.nodes {
            vertices
                .entry(node.label())
                .or_insert_with(|| graph.add_node(node.label()));
        }
        for element in &self.elements {
            let [start, end] = element.node_labels();
            if let (Some(&a), Some(&b)) = (vertices.get(start), vertices.get(end)) {
                graph.add_edge(a, b, element.label());
            }
        }
        graph
    }

    /// Whether all nodes form a single connected structure.
    ///
    /// An empty truss is not connected.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        let graph = self.connectivity_graph();
        graph.node_count() > 0 && connected_components(&graph) == 1
    }
}

/// Labels of the elements that reference `node_label`, in listing order.
fn element_labels_for_node(node_label: &str, elements: &[Element]) -> Vec<String> {
    elements
        .iter()
        .filter(|element| element.connects(node_label))
        .map(|element| element.label().to_owned())
        .collect()
}

/// Map each label to its first position, applying the duplicate policy.
fn index_labels<'a>(
    labels: impl Iterator<Item = &'a str>,
    policy: DuplicateLabels,
    duplicate: fn(String) -> TrussError,
) -> Result<HashMap<String, usize>, TrussError> {
    let mut index = HashMap::new();
    for (position, label) in labels.enumerate() {
        match index.entry(label.to_owned()) {
            Entry::Vacant(slot) => {
                slot.insert(position);
            }
            Entry::Occupied(_) => match policy {
                DuplicateLabels::FirstMatch => {
                    warn!(label, position, "duplicate label shadowed by earlier record");
                }
                DuplicateLabels::Reject => return Err(duplicate(label.to_owned())),
            },
        }
    }
    Ok(index)
}
