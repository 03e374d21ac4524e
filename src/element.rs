//! Two-node bar elements and their stiffness.
//!
//! The bar resists axial load only. Along its own axis, pointing from the first
//! node towards the second, the stiffness is
//!
//! ```text
//! k_axial = (E*A/L) * [-1   1]
//!                     [ 1  -1]
//! ```
//!
//! and in global coordinates it is `Tᵗ · k_axial · T`, where `T` carries the
//! direction cosines of the axis:
//!
//! ```text
//! T = [l  m  0  0]      (planar)
//!     [0  0  l  m]
//! ```
//!
//! Spatial trusses extend each row of `T` with the `n` cosine.

use std::sync::Arc;

use nalgebra::{DMatrix, DVector, Matrix2};

use crate::errors::TrussError;
use crate::node::Node;
use crate::properties::ElementProperties;
use crate::truss::Truss;

/// A bar connecting exactly two nodes of a [`Truss`].
///
/// Elements refer to their nodes by label; every derived quantity is resolved
/// through the owning truss passed in at call time.
#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    /// Label, unique within one truss unless duplicates are tolerated.
    label: String,
    /// Labels of the start and end nodes. The local axis runs from the first to the second.
    node_labels: [String; 2],
    /// Properties shared with every other element of the truss.
    properties: Arc<ElementProperties>,
}

impl Element {
    /// Create an element.
    pub(crate) fn new(
        label: String,
        node_labels: [String; 2],
        properties: Arc<ElementProperties>,
    ) -> Self {
        Self {
            label,
            node_labels,
            properties,
        }
    }

    /// Label of the element.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Labels of the start and end node, in declared order.
    #[must_use]
    pub fn node_labels(&self) -> [&str; 2] {
        [&self.node_labels[0], &self.node_labels[1]]
    }

    /// Whether `node_label` is one of the element's ends.
    #[must_use]
    pub fn connects(&self, node_label: &str) -> bool {
        self.node_labels.iter().any(|label| label == node_label)
    }

    /// Material and section properties of the element.
    #[must_use]
    pub fn properties(&self) -> &ElementProperties {
        &self.properties
    }

    /// Shared handle to the properties, for identity checks.
    #[must_use]
    pub fn shared_properties(&self) -> &Arc<ElementProperties> {
        &self.properties
    }

    /// Resolve the start and end node through `truss`.
    ///
    /// # Errors
    ///
    /// Returns [`TrussError::NodeNotFound`] when either label is absent from `truss`.
    ///
    /// # Examples
    /// ```
    /// use trussgraph::{listing::parse_listing, ElementProperties, Truss};
    ///
    /// let elements = parse_listing("a n1 n2");
    /// let nodes = parse_listing("n1 0 0\nn2 3 4");
    /// let properties = ElementProperties::new(2.0e11, 0.25, 0.1)?;
    /// let truss = Truss::from_records(&elements, &nodes, properties)?;
    ///
    /// let element = truss.get_element_by_label("a")?;
    /// let [start, end] = element.nodes(&truss)?;
    /// assert_eq!(start.label(), "n1");
    /// assert_eq!(end.label(), "n2");
    /// assert_eq!(element.length(&truss)?, 5.0);
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn nodes<'t>(&self, truss: &'t Truss) -> Result<[&'t Node; 2], TrussError> {
        let start = truss.get_node_by_label(&self.node_labels[0])?;
        let end = truss.get_node_by_label(&self.node_labels[1])?;
        Ok([start, end])
    }

    /// Distance between the two nodes in metres.
    ///
    /// # Errors
    ///
    /// Returns [`TrussError::NodeNotFound`] when either node is absent from `truss`.
    pub fn length(&self, truss: &Truss) -> Result<f64, TrussError> {
        let [start, end] = self.nodes(truss)?;
        Ok(start.coordinates().distance_to(end.coordinates()))
    }

    /// Axis vector from the start node to the end node, with its length.
    fn axis(&self, truss: &Truss) -> Result<(DVector<f64>, f64), TrussError> {
        let [start, end] = self.nodes(truss)?;
        let delta = start.coordinates().delta_to(end.coordinates());
        let length = delta.norm();
        if length == 0.0 {
            return Err(TrussError::ZeroLengthElement(self.label.clone()));
        }
        Ok((delta, length))
    }

    /// Unit vector along the element axis, one cosine per global axis.
    ///
    /// # Errors
    ///
    /// Returns [`TrussError::NodeNotFound`] for a dangling node label and
    /// [`TrussError::ZeroLengthElement`] when both nodes coincide.
    pub fn direction_cosines(&self, truss: &Truss) -> Result<DVector<f64>, TrussError> {
        let (delta, length) = self.axis(truss)?;
        Ok(delta / length)
    }

    /// Stiffness along the element's own axis, `(E·A/L)·[[-1, 1], [1, -1]]`.
    ///
    /// # Errors
    ///
    /// Returns [`TrussError::NodeNotFound`] for a dangling node label and
    /// [`TrussError::ZeroLengthElement`] when both nodes coincide.
    pub fn axial_stiffness_matrix(&self, truss: &Truss) -> Result<Matrix2<f64>, TrussError> {
        let (_, length) = self.axis(truss)?;
        Ok(self.axial_matrix(length))
    }

    /// Axial stiffness for a known length.
    fn axial_matrix(&self, length: f64) -> Matrix2<f64> {
        let ea_over_l = self.properties.axial_rigidity() / length;
        ea_over_l * Matrix2::new(-1.0, 1.0, 1.0, -1.0)
    }

    /// Matrix mapping global nodal displacements onto axial ones.
    ///
    /// Its shape is `2 × 2d` for a truss of dimension `d`.
    ///
    /// # Errors
    ///
    /// Returns [`TrussError::NodeNotFound`] for a dangling node label and
    /// [`TrussError::ZeroLengthElement`] when both nodes coincide.
    pub fn transformation_matrix(&self, truss: &Truss) -> Result<DMatrix<f64>, TrussError> {
        let cosines = self.direction_cosines(truss)?;
        Ok(transformation(&cosines))
    }

    /// Stiffness of the element in global coordinates, `Tᵗ · k_axial · T`.
    ///
    /// Planar trusses give a 4×4 matrix over `(x0, y0, x1, y1)`; spatial ones a 6×6
    /// matrix over `(x0, y0, z0, x1, y1, z1)`.
    ///
    /// # Errors
    ///
    /// Returns [`TrussError::NodeNotFound`] for a dangling node label and
    /// [`TrussError::ZeroLengthElement`] when both nodes coincide.
    pub fn local_stiffness_matrix(&self, truss: &Truss) -> Result<DMatrix<f64>, TrussError> {
        let (delta, length) = self.axis(truss)?;
        let t = transformation(&(delta / length));
        let k_axial = self.axial_matrix(length);
        let k_axial = DMatrix::from_column_slice(2, 2, k_axial.as_slice());
        Ok(t.transpose() * k_axial * t)
    }
}

/// Build `T = [[c, 0], [0, c]]` from the direction cosines `c`.
fn transformation(cosines: &DVector<f64>) -> DMatrix<f64> {
    let dim = cosines.len();
    let mut t = DMatrix::zeros(2, 2 * dim);
    for (axis, cosine) in cosines.iter().enumerate() {
        t[(0, axis)] = *cosine;
        t[(1, dim + axis)] = *cosine;
    }
    t
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::listing::parse_listing;
    use crate::truss::TrussOptions;
    use crate::Dimension;

    fn properties() -> ElementProperties {
        ElementProperties::new(2.0e11, 0.25, 0.1).expect("valid properties")
    }

    fn planar_truss(nodes: &str) -> Truss {
        Truss::from_records(&parse_listing("e a b"), &parse_listing(nodes), properties())
            .expect("truss builds")
    }

    #[test]
    fn axial_matrix_matches_closed_form() {
        let truss = planar_truss("a 0 0\nb 2 0");
        let element = truss.get_element_by_label("e").expect("element exists");
        let k = element.axial_stiffness_matrix(&truss).expect("stiffness");
        let ea_over_l = 2.0e11 * 0.1 / 2.0;
        assert_eq!(k, ea_over_l * Matrix2::new(-1.0, 1.0, 1.0, -1.0));
    }

    #[test]
    fn horizontal_bar_only_couples_x() {
        let truss = planar_truss("a 0 0\nb 2 0");
        let element = truss.get_element_by_label("e").expect("element exists");
        let k = element.local_stiffness_matrix(&truss).expect("stiffness");
        let ea_over_l = 1.0e10;
        let expected = DMatrix::from_row_slice(
            4,
            4,
            &[
                -ea_over_l, 0.0, ea_over_l, 0.0, //
                0.0, 0.0, 0.0, 0.0, //
                ea_over_l, 0.0, -ea_over_l, 0.0, //
                0.0, 0.0, 0.0, 0.0,
            ],
        );
        assert_relative_eq!(k, expected, epsilon = 1.0e-6);
    }

    #[test]
    fn inclined_bar_uses_direction_cosines() {
        let truss = planar_truss("a 0 0\nb 3 4");
        let element = truss.get_element_by_label("e").expect("element exists");
        let cosines = element.direction_cosines(&truss).expect("cosines");
        assert_relative_eq!(cosines[0], 0.6);
        assert_relative_eq!(cosines[1], 0.8);

        let t = element.transformation_matrix(&truss).expect("transformation");
        assert_eq!(t.shape(), (2, 4));
        assert_relative_eq!(t[(0, 0)], 0.6);
        assert_relative_eq!(t[(1, 3)], 0.8);
        assert_eq!(t[(0, 2)], 0.0);

        let k = element.local_stiffness_matrix(&truss).expect("stiffness");
        let ea_over_l = 2.0e11 * 0.1 / 5.0;
        let (l, m) = (0.6, 0.8);
        let expected = -ea_over_l
            * DMatrix::from_row_slice(
                4,
                4,
                &[
                    l * l, l * m, -l * l, -l * m, //
                    l * m, m * m, -l * m, -m * m, //
                    -l * l, -l * m, l * l, l * m, //
                    -l * m, -m * m, l * m, m * m,
                ],
            );
        assert_relative_eq!(k, expected, max_relative = 1.0e-12);
        assert_relative_eq!(k.clone(), k.transpose());
    }

    #[test]
    fn spatial_stiffness_is_six_by_six() {
        let options = TrussOptions {
            dimension: Dimension::Spatial,
            ..TrussOptions::default()
        };
        let truss = Truss::with_options(
            &parse_listing("e a b"),
            &parse_listing("a 0 0 0\nb 1 2 2"),
            properties(),
            options,
        )
        .expect("truss builds");
        let element = truss.get_element_by_label("e").expect("element exists");
        assert_relative_eq!(element.length(&truss).expect("length"), 3.0);
        let k = element.local_stiffness_matrix(&truss).expect("stiffness");
        assert_eq!(k.shape(), (6, 6));
        let ea_over_l = 2.0e11 * 0.1 / 3.0;
        assert_relative_eq!(k[(2, 2)], -ea_over_l * 4.0 / 9.0, max_relative = 1.0e-12);
        assert_relative_eq!(k[(0, 5)], ea_over_l * 2.0 / 9.0, max_relative = 1.0e-12);
    }

    #[test]
    fn length_ignores_node_order() {
        let forward = planar_truss("a 0.05 0.06\nb 0.1 0");
        let element = forward.get_element_by_label("e").expect("element exists");
        let reversed = Truss::from_records(
            &parse_listing("e b a"),
            &parse_listing("a 0.05 0.06\nb 0.1 0"),
            properties(),
        )
        .expect("truss builds");
        let flipped = reversed.get_element_by_label("e").expect("element exists");
        assert_eq!(
            element.length(&forward).expect("length"),
            flipped.length(&reversed).expect("length")
        );
    }

    #[test]
    fn coincident_nodes_are_rejected_by_stiffness() {
        let truss = planar_truss("a 1 1\nb 1 1");
        let element = truss.get_element_by_label("e").expect("element exists");
        assert_eq!(element.length(&truss), Ok(0.0));
        assert_eq!(
            element.local_stiffness_matrix(&truss),
            Err(TrussError::ZeroLengthElement("e".to_owned()))
        );
        assert_eq!(
            element.axial_stiffness_matrix(&truss),
            Err(TrussError::ZeroLengthElement("e".to_owned()))
        );
    }

    #[test]
    fn dangling_node_surfaces_on_access() {
        let truss = planar_truss("a 0 0");
        let element = truss.get_element_by_label("e").expect("element exists");
        assert_eq!(
            element.nodes(&truss).map(|_| ()),
            Err(TrussError::NodeNotFound("b".to_owned()))
        );
        assert_eq!(
            element.length(&truss),
            Err(TrussError::NodeNotFound("b".to_owned()))
        );
    }
}
