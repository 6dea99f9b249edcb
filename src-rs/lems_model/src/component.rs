//! Component types and component instances.
//!
//! Both own a nested [`Context`] that holds the definitions scoped to them.

use crate::{context::Context, error::DefinitionKind, registry::Definition};

/// A reusable named definition of a kind of component.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentType {
    name: String,
    extends: Option<String>,
    context: Context,
}

impl ComponentType {
    /// Creates a component type with an empty context.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extends: None,
            context: Context::new(),
        }
    }

    /// Creates a component type that extends the component type `parent`.
    #[must_use]
    pub fn extending(name: impl Into<String>, parent: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extends: Some(parent.into()),
            context: Context::new(),
        }
    }

    /// Replaces the nested context of this component type.
    #[must_use]
    pub fn with_context(mut self, context: Context) -> Self {
        self.context = context;
        self
    }

    /// Returns the name of this component type.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the name of the extended component type, if any.
    #[must_use]
    pub fn extends(&self) -> Option<&str> {
        self.extends.as_deref()
    }

    /// Returns the context scoped to this component type.
    #[must_use]
    pub const fn context(&self) -> &Context {
        &self.context
    }

    /// Returns a mutable reference to the context scoped to this component type.
    pub const fn context_mut(&mut self) -> &mut Context {
        &mut self.context
    }
}

impl Definition for ComponentType {
    const KIND: DefinitionKind = DefinitionKind::ComponentType;

    fn key(&self) -> &str {
        &self.name
    }
}

/// What a component is built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComponentBase {
    /// An instance of the named component type.
    OfType(String),
    /// A variant of the named component.
    Extends(String),
}

/// A named component instance.
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    id: String,
    base: ComponentBase,
    context: Context,
}

impl Component {
    /// Creates a component that instantiates `component_type`.
    #[must_use]
    pub fn of_type(id: impl Into<String>, component_type: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            base: ComponentBase::OfType(component_type.into()),
            context: Context::new(),
        }
    }

    /// Creates a component that extends the component `parent`.
    #[must_use]
    pub fn extending(id: impl Into<String>, parent: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            base: ComponentBase::Extends(parent.into()),
            context: Context::new(),
        }
    }

    /// Replaces the nested context of this component.
    #[must_use]
    pub fn with_context(mut self, context: Context) -> Self {
        self.context = context;
        self
    }

    /// Returns the id of this component.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns what this component is built from.
    #[must_use]
    pub const fn base(&self) -> &ComponentBase {
        &self.base
    }

    /// Returns the name of the component type, if this component instantiates one.
    #[must_use]
    pub fn component_type(&self) -> Option<&str> {
        match &self.base {
            ComponentBase::OfType(component_type) => Some(component_type),
            ComponentBase::Extends(_) => None,
        }
    }

    /// Returns the id of the extended component, if this component extends one.
    #[must_use]
    pub fn extends(&self) -> Option<&str> {
        match &self.base {
            ComponentBase::Extends(parent) => Some(parent),
            ComponentBase::OfType(_) => None,
        }
    }

    /// Returns the context scoped to this component.
    #[must_use]
    pub const fn context(&self) -> &Context {
        &self.context
    }

    /// Returns a mutable reference to the context scoped to this component.
    pub const fn context_mut(&mut self) -> &mut Context {
        &mut self.context
    }
}

impl Definition for Component {
    const KIND: DefinitionKind = DefinitionKind::Component;

    fn key(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn component_type_and_extends_are_exclusive() {
        let instance = Component::of_type("n1", "neuron");
        assert_eq!(instance.component_type(), Some("neuron"));
        assert_eq!(instance.extends(), None);

        let variant = Component::extending("n2", "n1");
        assert_eq!(variant.component_type(), None);
        assert_eq!(variant.extends(), Some("n1"));
        assert_eq!(variant.base(), &ComponentBase::Extends("n1".to_string()));
    }

    #[test]
    fn component_type_extends_is_optional() {
        assert_eq!(ComponentType::new("baseCell").extends(), None);
        assert_eq!(
            ComponentType::extending("neuron", "baseCell").extends(),
            Some("baseCell")
        );
    }

    #[test]
    fn nested_context_is_owned_and_mutable() {
        let mut neuron = ComponentType::new("neuron");
        neuron
            .context_mut()
            .add_exposure("v")
            .expect("exposure should be added");

        assert!(neuron.context().has_exposure("v"));
    }
}
