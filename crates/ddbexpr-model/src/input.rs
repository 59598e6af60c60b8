//! Input records for the builder's mutation operations.
//!
//! Field names follow `PascalCase` so the records deserialize from the same
//! option-bag shape callers already use (`{"Name": ..., "AttributeNames": ...,
//! "Value": ...}`). Every record can also be assembled with its generated
//! `builder()`.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use typed_builder::TypedBuilder;

use crate::attribute_value::AttributeValue;

/// Collect `(alias, attribute name)` pairs into an alias table.
///
/// # Examples
///
/// ```
/// use ddbexpr_model::input::attribute_names;
///
/// let names = attribute_names([("p", "profile")]);
/// assert_eq!(names["p"], "profile");
/// ```
#[must_use]
pub fn attribute_names<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> BTreeMap<String, String>
where
    K: Into<String>,
    V: Into<String>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}

/// Which end of a list a `list_append` writes to.
///
/// Parsing is lenient: `"start"` selects [`ListAppendPosition::Start`] and
/// every other string selects [`ListAppendPosition::End`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ListAppendPosition {
    /// Prepend to the existing list.
    Start,
    /// Append after the existing list.
    #[default]
    End,
}

impl ListAppendPosition {
    /// Wire spelling of the position.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::End => "end",
        }
    }
}

impl From<&str> for ListAppendPosition {
    fn from(s: &str) -> Self {
        if s == "start" { Self::Start } else { Self::End }
    }
}

impl fmt::Display for ListAppendPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ListAppendPosition {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ListAppendPosition {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::from(raw.as_str()))
    }
}

/// Input for `Set`.
///
/// Exactly one of three modes is selected from the fields present: a raw
/// `SetExpression`, a list append (`ListAppend` present), or a plain
/// assignment. A raw expression must not be combined with `Name` or `Value`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "PascalCase")]
pub struct SetInput {
    /// Document path being assigned, possibly containing `#alias` tokens.
    #[builder(default, setter(into, strip_option))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// A fully formed SET clause fragment, pushed verbatim.
    #[builder(default, setter(into, strip_option))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub set_expression: Option<String>,

    /// Only assign when the attribute does not exist yet.
    #[builder(default)]
    #[serde(default)]
    pub if_not_exists: bool,

    /// Aliases referenced from `name`, keyed without the leading `#`.
    #[builder(default, setter(into))]
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attribute_names: BTreeMap<String, String>,

    /// The value to assign, or the element to add to a list.
    #[builder(default, setter(strip_option))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<AttributeValue>,

    /// Turns the assignment into a `list_append` at the given end.
    #[builder(default, setter(strip_option))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_append: Option<ListAppendPosition>,
}

fn default_base_value() -> AttributeValue {
    AttributeValue::n(0)
}

fn default_increment_amount() -> AttributeValue {
    AttributeValue::n(1)
}

/// Input for `SetIncrement`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "PascalCase")]
pub struct SetIncrementInput {
    /// Counter attribute path.
    #[builder(setter(into))]
    pub name: String,

    /// Aliases referenced from `name`.
    #[builder(default, setter(into))]
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attribute_names: BTreeMap<String, String>,

    /// Starting value when the counter does not exist yet.
    #[builder(default = default_base_value())]
    #[serde(default = "default_base_value")]
    pub base_value_if_not_exist: AttributeValue,

    /// Amount added on every invocation.
    #[builder(default = default_increment_amount())]
    #[serde(default = "default_increment_amount")]
    pub increment_amount: AttributeValue,
}

/// Input for `Remove`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "PascalCase")]
pub struct RemoveInput {
    /// Attribute path to remove.
    #[builder(setter(into))]
    pub name: String,

    /// Aliases referenced from `name`.
    #[builder(default, setter(into))]
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attribute_names: BTreeMap<String, String>,
}

/// Input for `Add`: merge a number or set into an attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "PascalCase")]
pub struct AddInput {
    /// Attribute path.
    #[builder(setter(into))]
    pub name: String,

    /// Aliases referenced from `name`.
    #[builder(default, setter(into))]
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attribute_names: BTreeMap<String, String>,

    /// Number to add, or set whose members are merged in.
    pub value: AttributeValue,
}

/// Input for `Delete`: remove members from a set attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteInput {
    /// Set attribute path.
    #[builder(setter(into))]
    pub name: String,

    /// Aliases referenced from `name`.
    #[builder(default, setter(into))]
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attribute_names: BTreeMap<String, String>,

    /// Set of members to remove.
    pub value: AttributeValue,
}
