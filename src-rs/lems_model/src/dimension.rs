//! Physical dimensions declared by a model.

use crate::{error::DefinitionKind, registry::Definition};

/// Exponents of the seven base dimensions.
///
/// A dimension such as voltage is expressed as `m l^2 t^-3 i^-1`. The model
/// tree only stores these exponents; it never combines them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DimensionExponents {
    /// Length
    pub length: i32,
    /// Mass
    pub mass: i32,
    /// Time
    pub time: i32,
    /// Electric current
    pub current: i32,
    /// Temperature
    pub temperature: i32,
    /// Amount of substance
    pub amount: i32,
    /// Luminous intensity
    pub luminous_intensity: i32,
}

impl DimensionExponents {
    /// Returns `true` if every exponent is zero.
    #[must_use]
    pub const fn is_dimensionless(&self) -> bool {
        self.length == 0
            && self.mass == 0
            && self.time == 0
            && self.current == 0
            && self.temperature == 0
            && self.amount == 0
            && self.luminous_intensity == 0
    }
}

/// A named physical dimension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dimension {
    name: String,
    exponents: DimensionExponents,
}

impl Dimension {
    /// Creates a dimensionless dimension with the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_exponents(name, DimensionExponents::default())
    }

    /// Creates a dimension with the given name and base exponents.
    ///
    /// # Example
    ///
    /// ```rust
    /// use lems_model::{Dimension, DimensionExponents};
    ///
    /// let time = Dimension::with_exponents(
    ///     "time",
    ///     DimensionExponents { time: 1, ..DimensionExponents::default() },
    /// );
    ///
    /// assert_eq!(time.name(), "time");
    /// assert_eq!(time.exponents().time, 1);
    /// ```
    #[must_use]
    pub fn with_exponents(name: impl Into<String>, exponents: DimensionExponents) -> Self {
        Self {
            name: name.into(),
            exponents,
        }
    }

    /// Returns the name of this dimension.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the base exponents of this dimension.
    #[must_use]
    pub const fn exponents(&self) -> &DimensionExponents {
        &self.exponents
    }
}

impl Definition for Dimension {
    const KIND: DefinitionKind = DefinitionKind::Dimension;

    fn key(&self) -> &str {
        &self.name
    }
}
