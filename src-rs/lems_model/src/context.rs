//! Scopes of definitions.
//!
//! A [`Context`] holds the component types, components, exposures and
//! behavior profiles declared in one scope. The model owns the root context,
//! and every component type and component owns a nested one, so contexts form
//! a tree walked from the root down.

use indexmap::IndexSet;
use tracing::{debug, warn};

use crate::{
    behavior::{Behavior, Regime},
    component::{Component, ComponentType},
    error::{DefinitionKind, DuplicateDefinitionError},
    registry::Registry,
};

/// A scope holding nested definitions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Context {
    component_types: Registry<ComponentType>,
    components: Registry<Component>,
    exposures: IndexSet<String>,
    behavior_profiles: Registry<Behavior>,
}

impl Context {
    /// Creates an empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if nothing has been declared in this context.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.component_types.is_empty()
            && self.components.is_empty()
            && self.exposures.is_empty()
            && self.behavior_profiles.is_empty()
    }

    /// Adds a component type to this context.
    ///
    /// # Errors
    ///
    /// Returns a [`DuplicateDefinitionError`] if a component type with the
    /// same name is already declared here.
    pub fn add_component_type(
        &mut self,
        component_type: ComponentType,
    ) -> Result<(), DuplicateDefinitionError> {
        self.component_types.insert(component_type)
    }

    /// Adds a component to this context.
    ///
    /// # Errors
    ///
    /// Returns a [`DuplicateDefinitionError`] if a component with the same id
    /// is already declared here.
    pub fn add_component(&mut self, component: Component) -> Result<(), DuplicateDefinitionError> {
        self.components.insert(component)
    }

    /// Adds an exposure to this context.
    ///
    /// # Errors
    ///
    /// Returns a [`DuplicateDefinitionError`] if the name is already exposed.
    pub fn add_exposure(&mut self, name: impl Into<String>) -> Result<(), DuplicateDefinitionError> {
        let name = name.into();

        if self.exposures.contains(&name) {
            warn!(kind = %DefinitionKind::Exposure, name = %name, "rejected duplicate definition");
            return Err(DuplicateDefinitionError::new(DefinitionKind::Exposure, name));
        }

        debug!(kind = %DefinitionKind::Exposure, name = %name, "registered definition");
        self.exposures.insert(name);
        Ok(())
    }

    /// Adds a behavior profile to this context.
    ///
    /// # Errors
    ///
    /// Returns a [`DuplicateDefinitionError`] if a behavior profile with the
    /// same name is already declared here. At most one unnamed profile can
    /// exist per context.
    pub fn add_behavior_profile(
        &mut self,
        behavior: Behavior,
    ) -> Result<(), DuplicateDefinitionError> {
        self.behavior_profiles.insert(behavior)
    }

    /// Returns the component types in declaration order.
    #[must_use]
    pub const fn component_types(&self) -> &Registry<ComponentType> {
        &self.component_types
    }

    /// Looks up a component type declared in this context.
    #[must_use]
    pub fn component_type(&self, name: &str) -> Option<&ComponentType> {
        self.component_types.get(name)
    }

    /// Returns the nested context of a component type declared in this
    /// context, so it can be populated after the type was added.
    pub fn component_type_context_mut(&mut self, name: &str) -> Option<&mut Self> {
        self.component_types
            .get_mut(name)
            .map(ComponentType::context_mut)
    }

    /// Returns the components in declaration order.
    #[must_use]
    pub const fn components(&self) -> &Registry<Component> {
        &self.components
    }

    /// Looks up a component declared in this context.
    #[must_use]
    pub fn component(&self, id: &str) -> Option<&Component> {
        self.components.get(id)
    }

    /// Returns the nested context of a component declared in this context,
    /// so it can be populated after the component was added.
    pub fn component_context_mut(&mut self, id: &str) -> Option<&mut Self> {
        self.components.get_mut(id).map(Component::context_mut)
    }

    /// Returns the exposures in declaration order.
    #[must_use]
    pub const fn exposures(&self) -> &IndexSet<String> {
        &self.exposures
    }

    /// Returns `true` if `name` is exposed by this context.
    #[must_use]
    pub fn has_exposure(&self, name: &str) -> bool {
        self.exposures.contains(name)
    }

    /// Returns the behavior profiles in declaration order.
    #[must_use]
    pub const fn behavior_profiles(&self) -> &Registry<Behavior> {
        &self.behavior_profiles
    }

    /// Looks up a behavior profile by name. The unnamed profile has the
    /// empty name.
    #[must_use]
    pub fn behavior_profile(&self, name: &str) -> Option<&Behavior> {
        self.behavior_profiles.get(name)
    }

    /// Returns the default regime of a behavior profile declared in this
    /// context, so it can be populated after the profile was added.
    pub fn behavior_default_regime_mut(&mut self, name: &str) -> Option<&mut Regime> {
        self.behavior_profiles
            .get_mut(name)
            .and_then(Behavior::default_regime_mut)
    }
}
