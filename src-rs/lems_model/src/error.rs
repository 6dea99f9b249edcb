//! Errors raised while building a model.

use std::fmt;

use lems_shared::error::{AsLemsError, Context};

/// The kind of definition that collided with an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DefinitionKind {
    /// A dimension, keyed by name.
    Dimension,
    /// A unit, keyed by symbol.
    Unit,
    /// A component type, keyed by name.
    ComponentType,
    /// A component, keyed by id.
    Component,
    /// An exposure, keyed by name.
    Exposure,
    /// A behavior profile, keyed by name.
    BehaviorProfile,
    /// The default regime of a behavior profile.
    DefaultRegime,
    /// A state variable, keyed by name.
    StateVariable,
    /// A time derivative, keyed by the variable it differentiates.
    TimeDerivative,
}

impl DefinitionKind {
    /// Returns a lowercase, human-readable description of the kind.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Dimension => "dimension",
            Self::Unit => "unit",
            Self::ComponentType => "component type",
            Self::Component => "component",
            Self::Exposure => "exposure",
            Self::BehaviorProfile => "behavior profile",
            Self::DefaultRegime => "default regime",
            Self::StateVariable => "state variable",
            Self::TimeDerivative => "time derivative",
        }
    }
}

impl fmt::Display for DefinitionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// A definition was added under a key that is already taken.
///
/// This is the only error the model tree produces. The table that rejected
/// the definition keeps the original entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateDefinitionError {
    kind: DefinitionKind,
    name: String,
}

impl DuplicateDefinitionError {
    /// Creates a new error for a duplicate definition of `name`.
    #[must_use]
    pub fn new(kind: DefinitionKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
        }
    }

    /// Returns the kind of definition that was duplicated.
    #[must_use]
    pub const fn kind(&self) -> DefinitionKind {
        self.kind
    }

    /// Returns the name, symbol, or id that was duplicated.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for DuplicateDefinitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "duplicate {} - {}", self.kind, self.name)
    }
}

impl std::error::Error for DuplicateDefinitionError {}

impl AsLemsError for DuplicateDefinitionError {
    fn message(&self) -> String {
        self.to_string()
    }

    fn context(&self) -> Vec<Context> {
        let kind = self.kind;
        vec![Context::Help(format!(
            "each {kind} may only be defined once in its scope"
        ))]
    }
}
