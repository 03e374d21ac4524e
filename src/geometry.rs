//! Coordinate types for truss nodes.

use nalgebra::DVector;
use serde::{Deserialize, Serialize};

/// Number of coordinate components carried by every node of one truss.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    /// Two components, `x y`.
    #[default]
    Planar,
    /// Three components, `x y z`.
    Spatial,
}

impl Dimension {
    /// Return the number of coordinate components.
    #[must_use]
    pub const fn components(self) -> usize {
        match self {
            Self::Planar => 2,
            Self::Spatial => 3,
        }
    }
}

/// Position of a node measured in metres.
#[derive(Clone, Debug, PartialEq)]
pub struct Coordinates(DVector<f64>);

impl Coordinates {
    /// Create coordinates from explicit components.
    #[must_use]
    pub fn new(components: &[f64]) -> Self {
        Self(DVector::from_column_slice(components))
    }

    /// Number of components.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.0.len()
    }

    /// Borrow the components in axis order.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        self.0.as_slice()
    }

    /// Convert the coordinates into an algebraic vector.
    #[must_use]
    pub fn to_vector(&self) -> DVector<f64> {
        self.0.clone()
    }

    /// Componentwise difference `other - self`.
    ///
    /// Both positions are expected to share a dimension; surplus components of the
    /// longer one are ignored.
    #[must_use]
    pub fn delta_to(&self, other: &Self) -> DVector<f64> {
        DVector::from_iterator(
            self.dimension().min(other.dimension()),
            self.0.iter().zip(other.0.iter()).map(|(a, b)| b - a),
        )
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance_to(&self, other: &Self) -> f64 {
        self.delta_to(other).norm()
    }
}

impl From<DVector<f64>> for Coordinates {
    fn from(value: DVector<f64>) -> Self {
        Self(value)
    }
}

impl From<Coordinates> for DVector<f64> {
    fn from(value: Coordinates) -> Self {
        value.0
    }
}

/// Convenience helper for planar [`Coordinates`].
///
/// # Examples
/// ```
/// use trussgraph::planar;
///
/// let origin = planar(0.0, 0.0);
/// assert_eq!(origin.dimension(), 2);
/// ```
#[must_use]
pub fn planar(x: f64, y: f64) -> Coordinates {
    Coordinates::new(&[x, y])
}

/// Convenience helper for spatial [`Coordinates`].
///
/// # Examples
/// ```
/// use trussgraph::spatial;
///
/// let tip = spatial(1.0, 2.0, 3.0);
/// assert_eq!(tip.as_slice(), &[1.0, 2.0, 3.0]);
/// ```
#[must_use]
pub fn spatial(x: f64, y: f64, z: f64) -> Coordinates {
    Coordinates::new(&[x, y, z])
}
