use std::path::PathBuf;

use trussgraph::{ElementProperties, Truss};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // The listings used by the integration tests describe a five-node Warren truss.
    let fixtures = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures");
    let properties = ElementProperties::new(2.0e11, 0.25, 0.1)?;
    let truss = Truss::from_listings(
        fixtures.join("warren_el.txt"),
        fixtures.join("warren_nl.txt"),
        properties,
    )?;

    // Walk the graph from each node to the bars meeting there.
    for node in truss.nodes() {
        let mut lengths = Vec::new();
        for element in node.elements(&truss)? {
            lengths.push(format!("{}={:.4}", element.label(), element.length(&truss)?));
        }
        println!("node {}: {}", node.label(), lengths.join(" "));
    }

    Ok(())
}
