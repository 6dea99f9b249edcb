//! Units of measurement declared by a model.

use crate::{error::DefinitionKind, registry::Definition};

/// A unit of measurement, identified by its symbol.
///
/// A unit is a power-of-ten scaling of a dimension, so `mV` is the
/// `voltage` dimension with power `-3`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unit {
    symbol: String,
    dimension: String,
    power: i32,
}

impl Unit {
    /// Creates a new unit.
    ///
    /// # Arguments
    ///
    /// * `symbol` - The symbol the unit is referred to by, such as `mV`
    /// * `dimension` - The name of the dimension the unit measures
    /// * `power` - The power of ten the unit scales the dimension by
    #[must_use]
    pub fn new(symbol: impl Into<String>, dimension: impl Into<String>, power: i32) -> Self {
        Self {
            symbol: symbol.into(),
            dimension: dimension.into(),
            power,
        }
    }

    /// Returns the symbol of this unit.
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Returns the name of the dimension this unit measures.
    #[must_use]
    pub fn dimension(&self) -> &str {
        &self.dimension
    }

    /// Returns the power of ten this unit scales its dimension by.
    #[must_use]
    pub const fn power(&self) -> i32 {
        self.power
    }
}

impl Definition for Unit {
    const KIND: DefinitionKind = DefinitionKind::Unit;

    fn key(&self) -> &str {
        &self.symbol
    }
}
