//! Material and cross-section properties shared by truss elements.

use crate::errors::PropertyError;

/// Material and section data for a bar element.
///
/// One value is shared by every element of a [`Truss`](crate::Truss).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ElementProperties {
    /// Young's modulus in pascals.
    young_modulus: f64,
    /// Poisson's ratio. Stored but not used by the bar stiffness.
    poisson_ratio: f64,
    /// Cross-sectional area in square metres.
    area: f64,
}

impl ElementProperties {
    /// Create properties, rejecting a non-positive modulus or area.
    ///
    /// Poisson's ratio is stored unchecked.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] when `young_modulus` or `area` is not strictly positive.
    ///
    /// # Examples
    /// ```
    /// use trussgraph::{ElementProperties, PropertyError};
    ///
    /// let steel = ElementProperties::new(2.0e11, 0.25, 0.1).expect("valid properties");
    /// assert_eq!(steel.axial_rigidity(), 2.0e10);
    ///
    /// let error = ElementProperties::new(2.0e11, 0.25, 0.0).expect_err("zero area");
    /// assert_eq!(error, PropertyError::NonPositiveArea(0.0));
    /// ```
    pub fn new(young_modulus: f64, poisson_ratio: f64, area: f64) -> Result<Self, PropertyError> {
        // Written so that NaN fails too.
        if !(young_modulus > 0.0) {
            return Err(PropertyError::NonPositiveYoungModulus(young_modulus));
        }
        if !(area > 0.0) {
            return Err(PropertyError::NonPositiveArea(area));
        }
        Ok(Self {
            young_modulus,
            poisson_ratio,
            area,
        })
    }

    /// Young's modulus in pascals.
    #[must_use]
    pub const fn young_modulus(&self) -> f64 {
        self.young_modulus
    }

    /// Poisson's ratio.
    #[must_use]
    pub const fn poisson_ratio(&self) -> f64 {
        self.poisson_ratio
    }

    /// Cross-sectional area in square metres.
    #[must_use]
    pub const fn area(&self) -> f64 {
        self.area
    }

    /// Product `E·A` in newtons.
    #[must_use]
    pub fn axial_rigidity(&self) -> f64 {
        self.young_modulus * self.area
    }
}
