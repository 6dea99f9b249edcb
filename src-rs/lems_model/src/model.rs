//! The root aggregate of a loaded model specification.
//!
//! A [`Model`] is built once by the parser and then only read: by the
//! simulator, which resolves dimensions, units and the context tree by name,
//! and by the renderer, which prints it for debugging.

use std::fmt;

use crate::{
    context::Context,
    dimension::Dimension,
    error::DuplicateDefinitionError,
    registry::Registry,
    render::{self, Config},
    unit::Unit,
};

/// A LEMS model: default runs, dimension and unit registries, and the
/// global context.
///
/// The registries are `None` until their first definition is added, which
/// keeps "no dimensions declared" distinguishable from an empty registry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Model {
    default_run: Vec<String>,
    dimensions: Option<Registry<Dimension>>,
    units: Option<Registry<Unit>>,
    context: Option<Context>,
}

impl Model {
    /// Creates an empty model.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            default_run: Vec::new(),
            dimensions: None,
            units: None,
            context: None,
        }
    }

    /// Registers a simulation to run by default.
    ///
    /// Runs are kept in call order and the same name may be registered
    /// more than once.
    pub fn set_default_run(&mut self, default_run: impl Into<String>) {
        self.default_run.push(default_run.into());
    }

    /// Returns the names of the simulations to run by default.
    #[must_use]
    pub fn default_run(&self) -> &[String] {
        &self.default_run
    }

    /// Adds a dimension to the model.
    ///
    /// # Errors
    ///
    /// Returns a [`DuplicateDefinitionError`] if a dimension with the same
    /// name is already defined. The existing dimension is kept.
    ///
    /// # Example
    ///
    /// ```rust
    /// use lems_model::{Dimension, Model};
    ///
    /// let mut model = Model::new();
    /// assert!(model.dimensions().is_none());
    ///
    /// model.add_dimension(Dimension::new("voltage")).unwrap();
    /// assert!(model.add_dimension(Dimension::new("voltage")).is_err());
    /// assert_eq!(model.dimensions().map(|dimensions| dimensions.len()), Some(1));
    /// ```
    pub fn add_dimension(&mut self, dimension: Dimension) -> Result<(), DuplicateDefinitionError> {
        self.dimensions
            .get_or_insert_with(Registry::new)
            .insert(dimension)
    }

    /// Adds a unit to the model.
    ///
    /// # Errors
    ///
    /// Returns a [`DuplicateDefinitionError`] if a unit with the same symbol
    /// is already defined. The existing unit is kept.
    pub fn add_unit(&mut self, unit: Unit) -> Result<(), DuplicateDefinitionError> {
        self.units.get_or_insert_with(Registry::new).insert(unit)
    }

    /// Returns the dimension registry, or `None` if no dimension was added.
    #[must_use]
    pub const fn dimensions(&self) -> Option<&Registry<Dimension>> {
        self.dimensions.as_ref()
    }

    /// Looks up a dimension by name.
    #[must_use]
    pub fn dimension(&self, name: &str) -> Option<&Dimension> {
        self.dimensions.as_ref()?.get(name)
    }

    /// Returns the unit registry, or `None` if no unit was added.
    #[must_use]
    pub const fn units(&self) -> Option<&Registry<Unit>> {
        self.units.as_ref()
    }

    /// Looks up a unit by symbol.
    #[must_use]
    pub fn unit(&self, symbol: &str) -> Option<&Unit> {
        self.units.as_ref()?.get(symbol)
    }

    /// Sets the global context of the model.
    pub fn set_context(&mut self, context: Context) {
        self.context = Some(context);
    }

    /// Returns the global context, if one has been set.
    #[must_use]
    pub const fn context(&self) -> Option<&Context> {
        self.context.as_ref()
    }

    /// Returns a mutable reference to the global context, if one has been set.
    pub const fn context_mut(&mut self) -> Option<&mut Context> {
        self.context.as_mut()
    }
}

impl fmt::Display for Model {
    /// Renders the model tree as indented text.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render::render(self, f, &Config::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DefinitionKind;

    #[test]
    fn new_model_has_no_registries_or_context() {
        let model = Model::new();

        assert!(model.default_run().is_empty());
        assert!(model.dimensions().is_none());
        assert!(model.units().is_none());
        assert!(model.context().is_none());
        assert_eq!(model, Model::default());
    }

    #[test]
    fn duplicate_dimension_keeps_first() {
        let mut model = Model::new();
        model
            .add_dimension(Dimension::new("voltage"))
            .expect("add should succeed");

        let error = model
            .add_dimension(Dimension::with_exponents(
                "voltage",
                crate::DimensionExponents {
                    mass: 1,
                    ..Default::default()
                },
            ))
            .expect_err("duplicate should be rejected");

        assert_eq!(error.kind(), DefinitionKind::Dimension);
        assert_eq!(error.name(), "voltage");

        let dimensions = model.dimensions().expect("registry should exist");
        assert_eq!(dimensions.len(), 1);
        let kept = model.dimension("voltage").expect("voltage should be present");
        assert!(kept.exponents().is_dimensionless());
    }

    #[test]
    fn units_are_independent_of_dimensions() {
        let mut model = Model::new();
        model
            .add_dimension(Dimension::new("mV"))
            .expect("add should succeed");
        model
            .add_unit(Unit::new("mV", "voltage", -3))
            .expect("unit symbol may match a dimension name");

        let error = model
            .add_unit(Unit::new("mV", "voltage", 0))
            .expect_err("duplicate symbol should be rejected");

        assert_eq!(error.kind(), DefinitionKind::Unit);
        assert_eq!(model.unit("mV").map(Unit::power), Some(-3));
        assert_eq!(model.units().map(|units| units.len()), Some(1));
    }

    #[test]
    fn adding_a_unit_does_not_create_dimension_registry() {
        let mut model = Model::new();
        model
            .add_unit(Unit::new("ms", "time", -3))
            .expect("add should succeed");

        assert!(model.dimensions().is_none());
        assert!(model.dimension("time").is_none());
        assert!(model.units().is_some());
    }

    #[test]
    fn default_run_is_append_only_with_duplicates() {
        let mut model = Model::new();
        model.set_default_run("sim1");
        model.set_default_run("sim2");
        model.set_default_run("sim1");

        assert_eq!(model.default_run(), ["sim1", "sim2", "sim1"]);
    }

    #[test]
    fn frozen_model_is_shareable_across_threads() {
        let model = std::sync::Arc::new(crate::test::construct::neuron_model());
        let expected = model.to_string();

        let handles: Vec<_> = std::iter::repeat_with(|| {
            let model = std::sync::Arc::clone(&model);
            std::thread::spawn(move || model.to_string())
        })
        .take(4)
        .collect();

        for handle in handles {
            let rendered = handle.join().expect("render thread should not panic");
            assert_eq!(rendered, expected);
        }
    }

    #[test]
    fn context_can_be_populated_after_set() {
        let mut model = Model::new();
        model.set_context(Context::new());

        if let Some(context) = model.context_mut() {
            context.add_exposure("v").expect("add should succeed");
        }

        let context = model.context().expect("context should be set");
        assert!(context.has_exposure("v"));
    }
}
