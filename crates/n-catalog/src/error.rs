use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("unknown keyword '{0}'")]
    UnknownKeyword(String),

    #[error("keyword '{0}' has no generated help")]
    NoGeneratedHelp(String),

    /// Offsets are char offsets into the template source.
    #[error("unknown placeholder '${{{name}}}' at {offset}")]
    UnknownPlaceholder { name: String, offset: usize },

    #[error("unterminated placeholder at {offset}")]
    UnterminatedPlaceholder { offset: usize },
}
