//! The update-expression builder.
//!
//! One [`UpdateExpressionBuilder`] accumulates the clauses of a single
//! `UpdateItem` call. Operations may be invoked in any order; each appends
//! clause fragments to its section and registers the aliases the fragment
//! references. [`UpdateExpressionBuilder::update_expression_params`] then
//! renders the sections in the fixed order `SET`, `REMOVE`, `ADD`, `DELETE`.

use std::collections::BTreeMap;
use std::fmt;

use ddbexpr_model::{
    AddInput, AttributeValue, DeleteInput, ListAppendPosition, RemoveInput, SetIncrementInput,
    SetInput, UpdateExpressionParams,
};
use tracing::{debug, trace, warn};

use crate::config::BuilderConfig;
use crate::error::{Result, UpdateExpressionError};
use crate::mode::SetMode;
use crate::token::{EMPTY_LIST_KEY, ValueKeyAllocator};

/// Update-expression sections, in render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    /// `SET` assignments.
    Set,
    /// `REMOVE` paths.
    Remove,
    /// `ADD` number/set merges.
    Add,
    /// `DELETE` set-member removals.
    Delete,
}

impl Section {
    /// All sections in the order they are rendered.
    pub const ALL: [Self; 4] = [Self::Set, Self::Remove, Self::Add, Self::Delete];

    /// The section keyword.
    #[must_use]
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Set => "SET",
            Self::Remove => "REMOVE",
            Self::Add => "ADD",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Accumulates clauses and aliases for one update statement.
///
/// # Examples
///
/// ```
/// use ddbexpr_core::UpdateExpressionBuilder;
/// use ddbexpr_model::{AttributeValue, SetInput, attribute_names};
///
/// let mut builder = UpdateExpressionBuilder::default();
/// builder
///     .set(
///         SetInput::builder()
///             .name("#p.qty")
///             .attribute_names(attribute_names([("p", "profile")]))
///             .value(AttributeValue::n(5))
///             .build(),
///     )
///     .unwrap();
///
/// let params = builder.update_expression_params();
/// assert_eq!(params.update_expression.as_deref(), Some("SET #p.qty = :A"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct UpdateExpressionBuilder {
    config: BuilderConfig,
    sets: Vec<String>,
    removes: Vec<String>,
    adds: Vec<String>,
    deletes: Vec<String>,
    attribute_names: BTreeMap<String, String>,
    attribute_values: BTreeMap<String, AttributeValue>,
    value_keys: ValueKeyAllocator,
    added_empty_list: bool,
}

impl UpdateExpressionBuilder {
    /// Create a builder with the given configuration.
    #[must_use]
    pub fn new(config: BuilderConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Create a builder that validates name aliases.
    #[must_use]
    pub fn with_validation() -> Self {
        Self::new(BuilderConfig::builder().validate_names(true).build())
    }

    /// The configuration this builder was created with.
    #[must_use]
    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    /// Clauses accumulated for `section`, in insertion order.
    #[must_use]
    pub fn clauses(&self, section: Section) -> &[String] {
        match section {
            Section::Set => &self.sets,
            Section::Remove => &self.removes,
            Section::Add => &self.adds,
            Section::Delete => &self.deletes,
        }
    }

    /// Registered name aliases.
    #[must_use]
    pub fn attribute_names(&self) -> &BTreeMap<String, String> {
        &self.attribute_names
    }

    /// Registered value aliases, including the empty-list sentinel if used.
    #[must_use]
    pub fn attribute_values(&self) -> &BTreeMap<String, AttributeValue> {
        &self.attribute_values
    }

    /// Returns `true` when no clause has been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        Section::ALL.iter().all(|s| self.clauses(*s).is_empty())
    }

    // -- Alias registration --

    /// Register `value` under a fresh token and return the token.
    ///
    /// Use this to obtain tokens for a raw `SetExpression`.
    pub fn add_attribute_value(&mut self, value: AttributeValue) -> String {
        let key = self.value_keys.next_key();
        trace!(key = %key, value = %value, "registered attribute value");
        self.attribute_values.insert(key.clone(), value);
        key
    }

    /// Merge name aliases without validation. Later keys overwrite earlier ones.
    pub fn add_attribute_names<K, V>(&mut self, names: impl IntoIterator<Item = (K, V)>)
    where
        K: Into<String>,
        V: Into<String>,
    {
        for (alias, name) in names {
            self.attribute_names.insert(alias.into(), name.into());
        }
    }

    /// Check every alias against `subject`, then merge them all.
    ///
    /// Nothing is merged when any alias fails validation.
    fn ingest_names(
        &mut self,
        operation: &'static str,
        subject: &str,
        names: BTreeMap<String, String>,
    ) -> Result<()> {
        if self.config.validate_names {
            if let Some(alias) = names
                .keys()
                .find(|alias| !subject.contains(&format!("#{alias}")))
            {
                warn!(operation, alias = %alias, subject, "name alias not referenced");
                return Err(UpdateExpressionError::Validation {
                    operation,
                    alias: alias.clone(),
                });
            }
        }
        self.add_attribute_names(names);
        Ok(())
    }

    fn push(&mut self, section: Section, clause: String) {
        debug!(%section, clause = %clause, "appended clause");
        match section {
            Section::Set => self.sets.push(clause),
            Section::Remove => self.removes.push(clause),
            Section::Add => self.adds.push(clause),
            Section::Delete => self.deletes.push(clause),
        }
    }

    fn ensure_empty_list(&mut self) {
        if !self.added_empty_list {
            trace!(key = EMPTY_LIST_KEY, "registered empty list sentinel");
            self.attribute_values
                .insert(EMPTY_LIST_KEY.to_owned(), AttributeValue::empty_list());
            self.added_empty_list = true;
        }
    }

    // -- SET --

    /// Add a SET clause described by `input`.
    ///
    /// Fails without touching state when `SetExpression` is combined with
    /// `Name` or `Value`, when a required field is absent, or when alias
    /// validation rejects one of `AttributeNames`.
    pub fn set(&mut self, mut input: SetInput) -> Result<()> {
        let names = std::mem::take(&mut input.attribute_names);
        let mode = SetMode::try_from(input)?;
        self.ingest_names("Set", mode.subject(), names)?;
        self.push_set(mode);
        Ok(())
    }

    /// Add a SET clause from an already resolved [`SetMode`].
    pub fn push_set(&mut self, mode: SetMode) {
        let clause = match mode {
            SetMode::Expression(fragment) => fragment,
            SetMode::Assign {
                name,
                value,
                if_not_exists,
            } => {
                let key = self.add_attribute_value(value);
                if if_not_exists {
                    format!("{name} = if_not_exists({name}, {key})")
                } else {
                    format!("{name} = {key}")
                }
            }
            SetMode::ListAppend {
                name,
                elements,
                position,
            } => {
                self.ensure_empty_list();
                let key = self.add_attribute_value(AttributeValue::L(elements));
                let existing = format!("if_not_exists({name}, {EMPTY_LIST_KEY})");
                match position {
                    ListAppendPosition::Start => {
                        format!("{name} = list_append({key}, {existing})")
                    }
                    ListAppendPosition::End => {
                        format!("{name} = list_append({existing}, {key})")
                    }
                }
            }
        };
        self.push(Section::Set, clause);
    }

    /// `name = value`.
    pub fn assign(&mut self, name: impl Into<String>, value: AttributeValue) {
        self.push_set(SetMode::Assign {
            name: name.into(),
            value,
            if_not_exists: false,
        });
    }

    /// `name = if_not_exists(name, value)`.
    pub fn assign_if_not_exists(&mut self, name: impl Into<String>, value: AttributeValue) {
        self.push_set(SetMode::Assign {
            name: name.into(),
            value,
            if_not_exists: true,
        });
    }

    /// Write `elements` at `position` of the list at `name`, creating it when missing.
    pub fn append_to_list(
        &mut self,
        name: impl Into<String>,
        elements: Vec<AttributeValue>,
        position: ListAppendPosition,
    ) {
        self.push_set(SetMode::ListAppend {
            name: name.into(),
            elements,
            position,
        });
    }

    /// Push a raw SET fragment. Register its values with
    /// [`add_attribute_value`](Self::add_attribute_value) first.
    pub fn set_expression(&mut self, fragment: impl Into<String>) {
        self.push_set(SetMode::Expression(fragment.into()));
    }

    /// `name = if_not_exists(name, :base) + :increment`.
    pub fn set_increment(&mut self, input: SetIncrementInput) -> Result<()> {
        let SetIncrementInput {
            name,
            attribute_names,
            base_value_if_not_exist,
            increment_amount,
        } = input;
        self.ingest_names("SetIncrement", &name, attribute_names)?;
        let base = self.add_attribute_value(base_value_if_not_exist);
        let increment = self.add_attribute_value(increment_amount);
        self.push(
            Section::Set,
            format!("{name} = if_not_exists({name}, {base}) + {increment}"),
        );
        Ok(())
    }

    // -- REMOVE / ADD / DELETE --

    /// Remove the attribute at `name`.
    pub fn remove(&mut self, input: RemoveInput) -> Result<()> {
        let RemoveInput {
            name,
            attribute_names,
        } = input;
        self.ingest_names("Remove", &name, attribute_names)?;
        self.push(Section::Remove, name);
        Ok(())
    }

    /// Add a number to, or merge a set into, the attribute at `name`.
    pub fn add(&mut self, input: AddInput) -> Result<()> {
        let AddInput {
            name,
            attribute_names,
            value,
        } = input;
        self.push_valued("Add", Section::Add, name, attribute_names, value)
    }

    /// Remove the members of a set from the attribute at `name`.
    pub fn delete(&mut self, input: DeleteInput) -> Result<()> {
        let DeleteInput {
            name,
            attribute_names,
            value,
        } = input;
        self.push_valued("Delete", Section::Delete, name, attribute_names, value)
    }

    fn push_valued(
        &mut self,
        operation: &'static str,
        section: Section,
        name: String,
        attribute_names: BTreeMap<String, String>,
        value: AttributeValue,
    ) -> Result<()> {
        self.ingest_names(operation, &name, attribute_names)?;
        let key = self.add_attribute_value(value);
        self.push(section, format!("{name} {key}"));
        Ok(())
    }

    // -- Finalization --

    /// Render the non-empty sections, or `None` when there are none.
    #[must_use]
    pub fn update_expression(&self) -> Option<String> {
        let sections: Vec<String> = Section::ALL
            .iter()
            .filter_map(|section| {
                let clauses = self.clauses(*section);
                (!clauses.is_empty()).then(|| format!("{section} {}", clauses.join(", ")))
            })
            .collect();
        (!sections.is_empty()).then(|| sections.join(" "))
    }

    /// Produce the `UpdateItem` expression parameters.
    ///
    /// Returns an empty record when no clause was added. Alias tables are only
    /// included when non-empty. Does not modify the builder.
    #[must_use]
    pub fn update_expression_params(&self) -> UpdateExpressionParams {
        let Some(update_expression) = self.update_expression() else {
            debug!("no clauses accumulated, nothing to update");
            return UpdateExpressionParams::default();
        };
        debug!(
            expression = %update_expression,
            names = self.attribute_names.len(),
            values = self.attribute_values.len(),
            "built update expression"
        );
        UpdateExpressionParams {
            update_expression: Some(update_expression),
            expression_attribute_names: (!self.attribute_names.is_empty())
                .then(|| self.attribute_names.clone()),
            expression_attribute_values: (!self.attribute_values.is_empty())
                .then(|| self.attribute_values.clone()),
        }
    }
}
