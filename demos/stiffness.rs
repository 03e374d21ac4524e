use trussgraph::{listing::parse_listing, ElementProperties, Truss};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A single 3-4-5 bar.
    let elements = parse_listing("ab a b");
    let nodes = parse_listing("a 0 0\nb 3 4");
    let properties = ElementProperties::new(2.0e11, 0.3, 0.005)?;
    let truss = Truss::from_records(&elements, &nodes, properties)?;

    let bar = truss.get_element_by_label("ab")?;
    println!("axial stiffness:{}", bar.axial_stiffness_matrix(&truss)?);
    println!("global stiffness:{}", bar.local_stiffness_matrix(&truss)?);

    Ok(())
}
