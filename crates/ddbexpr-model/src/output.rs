//! The finalized `UpdateItem` parameters.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::attribute_value::AttributeValue;

/// The three expression parameters of an `UpdateItem` request.
///
/// Absent fields are omitted on the wire; DynamoDB rejects empty alias maps and
/// empty update expressions, so an all-`None` record means "nothing to update".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateExpressionParams {
    /// The concatenated `SET`/`REMOVE`/`ADD`/`DELETE` sections.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_expression: Option<String>,

    /// Alias table for attribute names.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expression_attribute_names: Option<BTreeMap<String, String>>,

    /// Alias table for attribute values.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expression_attribute_values: Option<BTreeMap<String, AttributeValue>>,
}

impl UpdateExpressionParams {
    /// Returns `true` when no update is needed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.update_expression.is_none()
    }
}
