//! Pipeline errors

use crate::domain::error::ModelError;
use thiserror::Error;

/// Failures that abort a parse.
///
/// Unrecognised fragments are not errors; they are recorded as gaps in
/// [`Diagnostics`](super::Diagnostics).
#[derive(Debug, Error)]
pub enum ParseError {
    /// A node invariant was violated while building the tree
    #[error("model error: {0}")]
    Model(#[from] ModelError),

    /// The outermost stage did not produce a document
    #[error("the {stage} stage did not produce a document")]
    Unrecognized {
        /// Name of the outermost stage
        stage: &'static str,
    },

    /// The parallel executor could not be set up
    #[error("execution failed: {0}")]
    Execution(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::NodeKind;

    #[test]
    fn test_model_error_conversion() {
        let error: ParseError = ModelError::UnsupportedOperation {
            operation: "add",
            kind: NodeKind::Symbol,
        }
        .into();
        assert!(matches!(error, ParseError::Model(_)));
        assert_eq!(
            error.to_string(),
            "model error: cannot add children on a symbol leaf"
        );
    }

    #[test]
    fn test_unrecognized_display() {
        let error = ParseError::Unrecognized { stage: "document" };
        assert_eq!(error.to_string(), "the document stage did not produce a document");
    }
}
