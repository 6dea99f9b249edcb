//! Behavior profiles and the regimes that describe their dynamics.
//!
//! A behavior profile is a named dynamical mode of a component. Its default
//! regime declares the state variables of the component and the time
//! derivatives the simulator integrates them with.

use tracing::{debug, warn};

use crate::{
    error::{DefinitionKind, DuplicateDefinitionError},
    expr::Expr,
    registry::{Definition, Registry},
};

/// A named dynamical profile.
///
/// A behavior with an empty name is the unnamed, default profile of its
/// context.
#[derive(Debug, Clone, PartialEq)]
pub struct Behavior {
    name: String,
    default_regime: Option<Regime>,
}

impl Behavior {
    /// Creates a behavior profile with the given name and no regime.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default_regime: None,
        }
    }

    /// Creates the unnamed behavior profile.
    #[must_use]
    pub const fn unnamed() -> Self {
        Self {
            name: String::new(),
            default_regime: None,
        }
    }

    /// Returns the name of this behavior profile.
    ///
    /// The name is empty for the unnamed profile.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns `true` if this is the unnamed, default profile.
    #[must_use]
    pub fn is_unnamed(&self) -> bool {
        self.name.is_empty()
    }

    /// Returns the default regime, if one has been set.
    #[must_use]
    pub const fn default_regime(&self) -> Option<&Regime> {
        self.default_regime.as_ref()
    }

    /// Returns a mutable reference to the default regime, if one has been set.
    pub const fn default_regime_mut(&mut self) -> Option<&mut Regime> {
        self.default_regime.as_mut()
    }

    /// Sets the default regime of this behavior profile.
    ///
    /// # Errors
    ///
    /// Returns a [`DuplicateDefinitionError`] if a default regime was
    /// already set. The existing regime is kept.
    pub fn set_default_regime(&mut self, regime: Regime) -> Result<(), DuplicateDefinitionError> {
        if self.default_regime.is_some() {
            warn!(behavior = %self.name, "rejected second default regime");
            return Err(DuplicateDefinitionError::new(
                DefinitionKind::DefaultRegime,
                self.name.clone(),
            ));
        }

        debug!(behavior = %self.name, "set default regime");
        self.default_regime = Some(regime);
        Ok(())
    }
}

impl Definition for Behavior {
    const KIND: DefinitionKind = DefinitionKind::BehaviorProfile;

    fn key(&self) -> &str {
        &self.name
    }
}

/// A dynamical regime: state variables and their time derivatives.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Regime {
    state_variables: Registry<StateVariable>,
    time_derivatives: Registry<TimeDerivative>,
}

impl Regime {
    /// Creates an empty regime.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a state variable to this regime.
    ///
    /// # Errors
    ///
    /// Returns a [`DuplicateDefinitionError`] if a state variable with the
    /// same name already exists.
    pub fn add_state_variable(
        &mut self,
        state_variable: StateVariable,
    ) -> Result<(), DuplicateDefinitionError> {
        self.state_variables.insert(state_variable)
    }

    /// Adds a time derivative to this regime.
    ///
    /// # Errors
    ///
    /// Returns a [`DuplicateDefinitionError`] if the variable already has a
    /// time derivative.
    pub fn add_time_derivative(
        &mut self,
        time_derivative: TimeDerivative,
    ) -> Result<(), DuplicateDefinitionError> {
        self.time_derivatives.insert(time_derivative)
    }

    /// Returns the state variables in declaration order.
    #[must_use]
    pub const fn state_variables(&self) -> &Registry<StateVariable> {
        &self.state_variables
    }

    /// Looks up a state variable by name.
    #[must_use]
    pub fn state_variable(&self, name: &str) -> Option<&StateVariable> {
        self.state_variables.get(name)
    }

    /// Returns the time derivatives in declaration order.
    #[must_use]
    pub const fn time_derivatives(&self) -> &Registry<TimeDerivative> {
        &self.time_derivatives
    }

    /// Looks up the time derivative of a variable.
    #[must_use]
    pub fn time_derivative(&self, variable: &str) -> Option<&TimeDerivative> {
        self.time_derivatives.get(variable)
    }
}

/// A state variable of a regime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateVariable {
    name: String,
    exposure: Option<String>,
    dimension: String,
}

impl StateVariable {
    /// Creates a state variable that is not exposed.
    #[must_use]
    pub fn new(name: impl Into<String>, dimension: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            exposure: None,
            dimension: dimension.into(),
        }
    }

    /// Creates a state variable made visible under the given exposure name.
    ///
    /// An empty exposure name leaves the variable unexposed.
    #[must_use]
    pub fn exposed(
        name: impl Into<String>,
        exposure: impl Into<String>,
        dimension: impl Into<String>,
    ) -> Self {
        let exposure = exposure.into();

        Self {
            name: name.into(),
            exposure: (!exposure.is_empty()).then_some(exposure),
            dimension: dimension.into(),
        }
    }

    /// Returns the name of the variable.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the exposure the variable is visible as, if any.
    #[must_use]
    pub fn exposure(&self) -> Option<&str> {
        self.exposure.as_deref()
    }

    /// Returns the name of the dimension of the variable.
    #[must_use]
    pub fn dimension(&self) -> &str {
        &self.dimension
    }
}

impl Definition for StateVariable {
    const KIND: DefinitionKind = DefinitionKind::StateVariable;

    fn key(&self) -> &str {
        &self.name
    }
}

/// The time derivative of a state variable.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeDerivative {
    variable: String,
    value: String,
    expression_tree: Expr,
}

impl TimeDerivative {
    /// Creates a new time derivative.
    ///
    /// # Arguments
    ///
    /// * `variable` - The state variable being differentiated
    /// * `value` - The expression text as written in the source
    /// * `expression_tree` - The parsed form of `value`
    #[must_use]
    pub fn new(variable: impl Into<String>, value: impl Into<String>, expression_tree: Expr) -> Self {
        Self {
            variable: variable.into(),
            value: value.into(),
            expression_tree,
        }
    }

    /// Returns the name of the differentiated variable.
    #[must_use]
    pub fn variable(&self) -> &str {
        &self.variable
    }

    /// Returns the expression text as written in the source.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the parsed expression.
    #[must_use]
    pub const fn expression_tree(&self) -> &Expr {
        &self.expression_tree
    }
}

impl Definition for TimeDerivative {
    const KIND: DefinitionKind = DefinitionKind::TimeDerivative;

    fn key(&self) -> &str {
        &self.variable
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::{BinaryOp, UnaryOp};

    #[test]
    fn unnamed_behavior_has_empty_name() {
        let behavior = Behavior::unnamed();

        assert!(behavior.is_unnamed());
        assert_eq!(behavior.name(), "");
        assert!(!Behavior::new("active").is_unnamed());
    }

    #[test]
    fn default_regime_can_only_be_set_once() {
        let mut behavior = Behavior::new("active");
        behavior
            .set_default_regime(Regime::new())
            .expect("first regime should be accepted");

        let mut second = Regime::new();
        second
            .add_state_variable(StateVariable::new("v", "voltage"))
            .expect("add should succeed");

        let error = behavior
            .set_default_regime(second)
            .expect_err("second regime should be rejected");

        assert_eq!(error.kind(), DefinitionKind::DefaultRegime);
        assert_eq!(error.name(), "active");

        let regime = behavior.default_regime().expect("regime should be set");
        assert!(regime.state_variables().is_empty());
    }

    #[test]
    fn regime_rejects_duplicate_state_variable() {
        let mut regime = Regime::new();
        regime
            .add_state_variable(StateVariable::new("v", "voltage"))
            .expect("add should succeed");

        let error = regime
            .add_state_variable(StateVariable::exposed("v", "vOut", "voltage"))
            .expect_err("duplicate should be rejected");

        assert_eq!(error.kind(), DefinitionKind::StateVariable);
        let v = regime.state_variable("v").expect("v should be present");
        assert_eq!(v.exposure(), None);
    }

    #[test]
    fn empty_exposure_leaves_state_variable_unexposed() {
        let v = StateVariable::exposed("v", "", "voltage");

        assert_eq!(v.exposure(), None);
        assert_eq!(v, StateVariable::new("v", "voltage"));
        assert_eq!(
            StateVariable::exposed("v", "vOut", "voltage").exposure(),
            Some("vOut")
        );
    }

    #[test]
    fn regime_rejects_second_derivative_of_same_variable() {
        let mut regime = Regime::new();
        let decay = Expr::unary_op(UnaryOp::Neg, Expr::variable("v"));
        regime
            .add_time_derivative(TimeDerivative::new("v", "-v", decay))
            .expect("add should succeed");

        let growth = Expr::binary_op(BinaryOp::Mul, Expr::number(2.0), Expr::variable("v"));
        let error = regime
            .add_time_derivative(TimeDerivative::new("v", "2*v", growth))
            .expect_err("duplicate should be rejected");

        assert_eq!(error.kind(), DefinitionKind::TimeDerivative);
        assert_eq!(regime.time_derivative("v").map(TimeDerivative::value), Some("-v"));
    }

    #[test]
    fn default_regime_mut_allows_populating_after_set() {
        let mut behavior = Behavior::unnamed();
        behavior
            .set_default_regime(Regime::new())
            .expect("regime should be accepted");

        if let Some(regime) = behavior.default_regime_mut() {
            regime
                .add_state_variable(StateVariable::new("t", "time"))
                .expect("add should succeed");
        }

        let regime = behavior.default_regime().expect("regime should be set");
        assert!(regime.state_variable("t").is_some());
    }
}
