//! Builder configuration.

use std::env;

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

/// Options fixed when a builder is constructed.
///
/// # Examples
///
/// ```
/// use ddbexpr_core::config::BuilderConfig;
///
/// let config = BuilderConfig::builder().validate_names(true).build();
/// assert!(config.validate_names);
/// assert!(!BuilderConfig::default().validate_names);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct BuilderConfig {
    /// Require every declared `AttributeNames` key to appear as `#key` in the
    /// operation's `Name` (default: off).
    #[builder(default = false)]
    #[serde(default)]
    pub validate_names: bool,
}

impl BuilderConfig {
    /// Create configuration from environment variables.
    ///
    /// `DDBEXPR_VALIDATE_NAMES` enables alias validation.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            validate_names: env_bool("DDBEXPR_VALIDATE_NAMES", false),
        }
    }
}

fn env_bool(key: &str, default: bool) -> bool {
    env::var(key).map_or(default, |v| parse_bool(&v))
}

fn parse_bool(v: &str) -> bool {
    matches!(v, "1" | "true" | "yes" | "TRUE" | "YES")
}
