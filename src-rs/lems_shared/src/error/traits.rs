use crate::error::Context;

/// Trait for types that can be converted to LEMS error messages.
///
/// Every error the LEMS crates produce implements this trait so that a
/// front end can report them uniformly through [`crate::error::LemsError`].
pub trait AsLemsError {
    /// Returns the primary error message.
    ///
    /// This should be a concise description of what went wrong, without a
    /// trailing period.
    fn message(&self) -> String;

    /// Returns additional context information about the error.
    ///
    /// Returns an empty vector if no context is available.
    fn context(&self) -> Vec<Context> {
        vec![]
    }
}
