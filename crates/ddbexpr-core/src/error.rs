//! Builder error type.
//!
//! Every error is raised before the failing operation touches builder state.

/// Errors returned by the builder's mutation operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UpdateExpressionError {
    /// A declared name alias does not appear in the operation's `Name`.
    #[error(
        "Validation error - {operation} Name does not contain key found in AttributeNames '#{alias}'"
    )]
    Validation {
        /// The operation that was rejected.
        operation: &'static str,
        /// Alias key, without the leading `#`.
        alias: String,
    },
    /// A raw `SetExpression` was combined with plain assignment fields.
    #[error(
        "You cannot provide both a {field} and a SetExpression. Use add_attribute_value to register values and reference their tokens in the expression"
    )]
    ConflictingInput {
        /// The plain field supplied alongside the raw expression.
        field: &'static str,
    },
    /// A field the selected mode depends on is absent.
    #[error("{operation} requires {field}")]
    MissingField {
        /// The operation that was rejected.
        operation: &'static str,
        /// The absent field.
        field: &'static str,
    },
}

/// Result alias for builder operations.
pub type Result<T> = std::result::Result<T, UpdateExpressionError>;
