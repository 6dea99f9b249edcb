//! Insertion-ordered tables of uniquely keyed definitions.
//!
//! Every named table in the model tree (dimensions, units, component types,
//! components, behavior profiles, state variables and time derivatives) is a
//! [`Registry`]. Entries keep the order they were added in, which is the
//! order they are rendered in, and an entry can never be replaced or removed.

use std::ops::Deref;

use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::error::{DefinitionKind, DuplicateDefinitionError};

/// A definition that can be stored in a [`Registry`].
pub trait Definition {
    /// The kind reported when two definitions share a key.
    const KIND: DefinitionKind;

    /// Returns the key the definition is registered under.
    fn key(&self) -> &str;
}

/// An append-only, insertion-ordered map from key to definition.
///
/// Read access goes through `Deref` to the underlying [`IndexMap`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registry<T>(IndexMap<String, T>);

impl<T> Registry<T> {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// Returns a mutable reference to the definition registered under `key`.
    ///
    /// Callers must only modify parts of the definition that are not its
    /// key, so this stays inside the crate.
    pub(crate) fn get_mut(&mut self, key: &str) -> Option<&mut T> {
        self.0.get_mut(key)
    }
}

impl<T: Definition> Registry<T> {
    /// Adds a definition under its own key.
    ///
    /// # Errors
    ///
    /// Returns a [`DuplicateDefinitionError`] if the key is already taken.
    /// The registry keeps the existing definition.
    ///
    /// # Example
    ///
    /// ```rust
    /// use lems_model::{Dimension, DefinitionKind, Registry};
    ///
    /// let mut dimensions = Registry::new();
    /// dimensions.insert(Dimension::new("voltage")).unwrap();
    ///
    /// let error = dimensions.insert(Dimension::new("voltage")).unwrap_err();
    /// assert_eq!(error.kind(), DefinitionKind::Dimension);
    /// assert_eq!(dimensions.len(), 1);
    /// ```
    pub fn insert(&mut self, definition: T) -> Result<(), DuplicateDefinitionError> {
        let kind = T::KIND;
        let key = definition.key().to_string();

        if self.0.contains_key(&key) {
            warn!(kind = %kind, name = %key, "rejected duplicate definition");
            return Err(DuplicateDefinitionError::new(kind, key));
        }

        debug!(kind = %kind, name = %key, "registered definition");
        self.0.insert(key, definition);
        Ok(())
    }
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deref for Registry<T> {
    type Target = IndexMap<String, T>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'a, T> IntoIterator for &'a Registry<T> {
    type Item = (&'a String, &'a T);
    type IntoIter = indexmap::map::Iter<'a, String, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
