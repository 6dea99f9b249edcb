//! Errors for the LEMS crates

mod context;
mod traits;

use std::fmt;

pub use context::Context;
pub use traits::AsLemsError;

/// Unified error representation for LEMS tooling
///
/// This struct holds an error in a form suitable for display to users: a
/// human-readable message and the notes and help attached to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LemsError {
    /// Human-readable error message
    message: String,
    /// Optional context information
    context: Vec<Context>,
}

impl LemsError {
    /// Creates a new `LemsError` from an error that implements `AsLemsError`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lems_shared::error::{AsLemsError, LemsError};
    ///
    /// struct SimpleError(String);
    ///
    /// impl AsLemsError for SimpleError {
    ///     fn message(&self) -> String {
    ///         self.0.clone()
    ///     }
    /// }
    ///
    /// let error = SimpleError("something went wrong".to_string());
    /// let lems_error = LemsError::from_error(&error);
    ///
    /// assert_eq!(lems_error.message(), "something went wrong");
    /// assert!(lems_error.context().is_empty());
    /// ```
    #[must_use]
    pub fn from_error(error: &impl AsLemsError) -> Self {
        Self {
            message: error.message(),
            context: error.context(),
        }
    }

    /// Returns the human-readable error message
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the context information attached to the error
    #[must_use]
    pub fn context(&self) -> &[Context] {
        &self.context
    }
}

impl fmt::Display for LemsError {
    /// Formats the error as
    ///
    /// ```text
    /// error: <message>
    ///   = note: <note>
    ///   = help: <help>
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error: {}", self.message)?;

        for context in &self.context {
            write!(f, "\n  = {}: {}", context.label(), context.message())?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct DuplicateThing {
        name: &'static str,
    }

    impl AsLemsError for DuplicateThing {
        fn message(&self) -> String {
            format!("duplicate thing - {}", self.name)
        }

        fn context(&self) -> Vec<Context> {
            vec![
                Context::Note("things must be unique".to_string()),
                Context::Help("rename the second thing".to_string()),
            ]
        }
    }

    #[test]
    fn from_error_copies_message_and_context() {
        let error = LemsError::from_error(&DuplicateThing { name: "x" });

        assert_eq!(error.message(), "duplicate thing - x");
        assert_eq!(error.context().len(), 2);
        assert_eq!(error.context()[0].label(), "note");
        assert_eq!(error.context()[1].message(), "rename the second thing");
    }

    #[test]
    fn display_lists_context_after_message() {
        let error = LemsError::from_error(&DuplicateThing { name: "x" });

        let expected = "error: duplicate thing - x\n  = note: things must be unique\n  = help: rename the second thing";
        assert_eq!(error.to_string(), expected);
    }
}
