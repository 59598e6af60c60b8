//! Resolution of a [`SetInput`] into one of the three SET clause shapes.

use ddbexpr_model::{AttributeValue, ListAppendPosition, SetInput};

use crate::error::{Result, UpdateExpressionError};

/// The shape of a single SET clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetMode {
    /// A caller-built fragment pushed verbatim. It embeds its own aliases.
    Expression(String),
    /// `name = :T`, or `name = if_not_exists(name, :T)`.
    Assign {
        /// Target path.
        name: String,
        /// Assigned value.
        value: AttributeValue,
        /// Keep an existing value.
        if_not_exists: bool,
    },
    /// `name = list_append(...)` against a possibly missing list.
    ListAppend {
        /// Target list path.
        name: String,
        /// Elements written at `position`.
        elements: Vec<AttributeValue>,
        /// Which end receives the elements.
        position: ListAppendPosition,
    },
}

impl SetMode {
    /// The expression text that declared name aliases must appear in.
    #[must_use]
    pub fn subject(&self) -> &str {
        match self {
            Self::Expression(fragment) => fragment,
            Self::Assign { name, .. } | Self::ListAppend { name, .. } => name,
        }
    }
}

/// Picks the mode from which fields are present.
///
/// `SetExpression` wins and forbids `Name`/`Value`; otherwise `ListAppend`
/// selects a list append of the single `Value`; otherwise a plain assignment.
/// `IfNotExists` only affects plain assignment.
impl TryFrom<SetInput> for SetMode {
    type Error = UpdateExpressionError;

    fn try_from(input: SetInput) -> Result<Self> {
        if let Some(fragment) = input.set_expression {
            if input.value.is_some() {
                return Err(UpdateExpressionError::ConflictingInput { field: "Value" });
            }
            if input.name.is_some() {
                return Err(UpdateExpressionError::ConflictingInput { field: "Name" });
            }
            return Ok(Self::Expression(fragment));
        }

        let name = input.name.ok_or(UpdateExpressionError::MissingField {
            operation: "Set",
            field: "Name",
        })?;
        let value = input.value.ok_or(UpdateExpressionError::MissingField {
            operation: "Set",
            field: "Value",
        })?;

        Ok(match input.list_append {
            Some(position) => Self::ListAppend {
                name,
                elements: vec![value],
                position,
            },
            None => Self::Assign {
                name,
                value,
                if_not_exists: input.if_not_exists,
            },
        })
    }
}
