/// Additional information attached to an error message.
///
/// Notes explain the circumstances of the error, help entries suggest a fix.
///
/// # Examples
///
/// ```rust
/// use lems_shared::error::Context;
///
/// let note = Context::Note("`voltage` was first declared here".to_string());
/// let help = Context::Help("rename one of the dimensions".to_string());
///
/// let contexts = vec![note, help];
/// assert_eq!(contexts.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Context {
    /// Supplementary detail about the error.
    Note(String),

    /// An actionable suggestion for resolving the error.
    Help(String),
}

impl Context {
    /// Returns the label used when the context is printed (`note` or `help`).
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Note(_) => "note",
            Self::Help(_) => "help",
        }
    }

    /// Returns the text of the context entry.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Note(message) | Self::Help(message) => message,
        }
    }
}
