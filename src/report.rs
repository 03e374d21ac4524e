use std::fmt::Write;

use serde::Serialize;
use trussgraph::{Truss, TrussError};

/// Geometry and stiffness of one element.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElementSummary {
    pub label: String,
    pub nodes: [String; 2],
    pub length: f64,
    pub direction_cosines: Vec<f64>,
    /// Global stiffness matrix, row by row.
    pub stiffness: Vec<Vec<f64>>,
}

/// Position and incidence of one node.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeSummary {
    pub label: String,
    pub coordinates: Vec<f64>,
    pub elements: Vec<String>,
}

/// Everything the report prints.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrussSummary {
    pub young_modulus: f64,
    pub area: f64,
    pub connected: bool,
    pub nodes: Vec<NodeSummary>,
    pub elements: Vec<ElementSummary>,
}

/// Evaluate every node and element of `truss`.
pub fn summarise(truss: &Truss) -> Result<TrussSummary, TrussError> {
    let nodes = truss
        .nodes()
        .iter()
        .map(|node| NodeSummary {
            label: node.label().to_owned(),
            coordinates: node.coordinates().as_slice().to_vec(),
            elements: node.element_labels().to_vec(),
        })
        .collect();

    let mut elements = Vec::with_capacity(truss.element_count());
    for element in truss.elements() {
        let [start, end] = element.node_labels();
        let stiffness = element.local_stiffness_matrix(truss)?;
        elements.push(ElementSummary {
            label: element.label().to_owned(),
            nodes: [start.to_owned(), end.to_owned()],
            length: element.length(truss)?,
            direction_cosines: element.direction_cosines(truss)?.iter().copied().collect(),
            stiffness: stiffness
                .row_iter()
                .map(|row| row.iter().copied().collect())
                .collect(),
        });
    }

    Ok(TrussSummary {
        young_modulus: truss.properties().young_modulus(),
        area: truss.properties().area(),
        connected: truss.is_connected(),
        nodes,
        elements,
    })
}

/// Render the summary as plain text.
#[must_use]
pub fn render_text(summary: &TrussSummary) -> String {
    let mut output = String::new();

    writeln!(
        &mut output,
        "Truss: {} nodes, {} elements (E = {:.3e} Pa, A = {:.3e} m^2){}",
        summary.nodes.len(),
        summary.elements.len(),
        summary.young_modulus,
        summary.area,
        if summary.connected { "" } else { ", not connected" }
    )
    .expect("writing to string cannot fail");

    for node in &summary.nodes {
        writeln!(
            &mut output,
            "node {}: ({}) elements [{}]",
            node.label,
            join(&node.coordinates, |value| format!("{value}")),
            node.elements.join(", ")
        )
        .expect("writing to string cannot fail");
    }

    for element in &summary.elements {
        writeln!(
            &mut output,
            "element {} ({} -> {}): L = {:.6} m, cosines ({})",
            element.label,
            element.nodes[0],
            element.nodes[1],
            element.length,
            join(&element.direction_cosines, |value| format!("{value:+.4}"))
        )
        .expect("writing to string cannot fail");
        for row in &element.stiffness {
            writeln!(
                &mut output,
                "    [{}]",
                join(row, |value| format!("{value:+.4e}"))
            )
            .expect("writing to string cannot fail");
        }
    }

    output
}

/// Render the summary as pretty-printed JSON.
pub fn render_json(summary: &TrussSummary) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(summary)
}

/// Format each value and join with commas.
fn join(values: &[f64], format: impl Fn(f64) -> String) -> String {
    values
        .iter()
        .map(|value| format(*value))
        .collect::<Vec<_>>()
        .join(", ")
}
