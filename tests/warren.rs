#![warn(clippy::pedantic)]

use std::path::PathBuf;

use approx::assert_relative_eq;
use nalgebra::Matrix2;
use trussgraph::{planar, ElementProperties, Truss, TrussError};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn properties() -> ElementProperties {
    ElementProperties::new(2.0e11, 0.25, 0.1).expect("valid properties")
}

fn warren_truss() -> Truss {
    Truss::from_listings(
        fixture("warren_el.txt"),
        fixture("warren_nl.txt"),
        properties(),
    )
    .expect("warren truss loads")
}

#[test]
fn builds_expected_topology() {
    let truss = warren_truss();

    assert_eq!(truss.element_count(), 7);
    assert_eq!(truss.node_count(), 5);
    assert_eq!(truss.properties(), &properties());

    let element_labels: Vec<&str> = truss.elements().iter().map(|e| e.label()).collect();
    assert_eq!(element_labels, ["0", "1", "2", "3", "4", "5", "6"]);
    let node_pairs: Vec<[&str; 2]> = truss.elements().iter().map(|e| e.node_labels()).collect();
    assert_eq!(
        node_pairs,
        [
            ["0", "1"],
            ["1", "2"],
            ["0", "2"],
            ["2", "3"],
            ["3", "4"],
            ["2", "4"],
            ["1", "3"],
        ]
    );

    let expected = [
        (0.00, 0.00),
        (0.05, 0.06),
        (0.10, 0.00),
        (0.15, 0.06),
        (0.20, 0.00),
    ];
    for (index, (node, (x, y))) in truss.nodes().iter().zip(expected).enumerate() {
        assert_eq!(node.label(), index.to_string());
        assert_eq!(node.coordinates(), &planar(x, y));
    }
}

#[test]
fn nodes_list_incident_elements_in_listing_order() {
    let truss = warren_truss();
    let incidence: Vec<&[String]> = truss.nodes().iter().map(|n| n.element_labels()).collect();
    assert_eq!(incidence[0], ["0", "2"]);
    assert_eq!(incidence[1], ["0", "1", "6"]);
    assert_eq!(incidence[2], ["1", "2", "3", "5"]);
    assert_eq!(incidence[3], ["3", "4", "6"]);
    assert_eq!(incidence[4], ["4", "5"]);

    let node = truss.get_node_by_label("0").expect("node exists");
    let elements = node.elements(&truss).expect("elements resolve");
    assert_eq!(elements[0].label(), "0");
    assert_eq!(elements[1].label(), "2");
}

#[test]
fn both_adjacency_directions_agree() {
    let truss = warren_truss();
    for element in truss.elements() {
        let nodes = element.nodes(&truss).expect("nodes resolve");
        assert_eq!(nodes.len(), 2);
        for node in nodes {
            assert!(node.element_labels().iter().any(|l| l == element.label()));
        }
    }
    for node in truss.nodes() {
        for element in node.elements(&truss).expect("elements resolve") {
            assert!(element.connects(node.label()));
        }
    }
}

#[test]
fn element_nodes_resolve_in_declared_order() {
    let truss = warren_truss();
    let element = truss.get_element_by_label("0").expect("element exists");
    let [start, end] = element.nodes(&truss).expect("nodes resolve");
    assert_eq!(start.label(), "0");
    assert_eq!(end.label(), "1");
}

#[test]
fn element_length_matches_geometry() {
    let truss = warren_truss();
    let element = truss.get_element_by_label("0").expect("element exists");
    let length = element.length(&truss).expect("length");
    assert!(length > 0.077 && length < 0.079);
    assert_relative_eq!(length, 0.0061_f64.sqrt(), max_relative = 1.0e-12);
}

#[test]
fn axial_stiffness_matches_closed_form() {
    let truss = warren_truss();
    let element = truss.get_element_by_label("2").expect("element exists");
    let length = element.length(&truss).expect("length");
    let k = element.axial_stiffness_matrix(&truss).expect("stiffness");
    let ea_over_l = 2.0e11 * 0.1 / length;
    assert_eq!(k, ea_over_l * Matrix2::new(-1.0, 1.0, 1.0, -1.0));
}

#[test]
fn global_stiffness_is_symmetric_with_zero_row_sums() {
    let truss = warren_truss();
    for element in truss.elements() {
        let k = element.local_stiffness_matrix(&truss).expect("stiffness");
        assert_eq!(k.shape(), (4, 4));
        assert_relative_eq!(k.clone(), k.transpose(), max_relative = 1.0e-12);
        // Rigid translation produces no force.
        for row in k.row_iter() {
            assert_relative_eq!(row[0] + row[2], 0.0, epsilon = 1.0e-3);
            assert_relative_eq!(row[1] + row[3], 0.0, epsilon = 1.0e-3);
        }
    }
}

#[test]
fn lookups_are_repeatable() {
    let truss = warren_truss();
    assert_eq!(
        truss.get_element_by_label("5"),
        truss.get_element_by_label("5")
    );
    assert_eq!(truss.get_node_by_label("3"), truss.get_node_by_label("3"));
}

#[test]
fn unknown_labels_are_not_found() {
    let truss = warren_truss();
    assert_eq!(
        truss.get_element_by_label("7"),
        Err(TrussError::ElementNotFound("7".to_owned()))
    );
    assert_eq!(
        truss.get_node_by_label("5"),
        Err(TrussError::NodeNotFound("5".to_owned()))
    );
}

#[test]
fn warren_truss_is_connected() {
    let truss = warren_truss();
    assert!(truss.is_connected());
    let graph = truss.connectivity_graph();
    assert_eq!(graph.node_count(), 5);
    assert_eq!(graph.edge_count(), 7);
}

#[test]
fn missing_listing_is_an_io_error() {
    let error = Truss::from_listings(
        fixture("absent_el.txt"),
        fixture("warren_nl.txt"),
        properties(),
    )
    .expect_err("listing is absent");
    assert!(matches!(
        error,
        TrussError::Listing(trussgraph::ListingError::Io { .. })
    ));
}
