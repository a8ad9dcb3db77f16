//! Partitioning configuration.
//!
//! [`PartitionConfig`] is shared by every algorithm in the crate: the
//! one-shot heuristics and the complete (anytime) searches all read the
//! same three settings.

use std::fmt;
use std::str::FromStr;

use crate::error::{PartitionError, Result};

/// Implementation selector.
///
/// Every operation currently ships a single implementation. The selector is
/// kept so that configurations naming an implementation are validated up
/// front instead of silently falling back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub enum Method {
    /// The built-in heap/stack based implementation.
    #[default]
    Native,
}

impl Method {
    /// All accepted methods, in the order they are reported in errors.
    pub const ALL: [Method; 1] = [Method::Native];

    /// Selector string for this method.
    pub fn name(self) -> &'static str {
        match self {
            Method::Native => "native",
        }
    }

    /// Other selector strings accepted for this method.
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            Method::Native => &["purepython"],
        }
    }

    fn matches(self, name: &str) -> bool {
        self.name() == name || self.aliases().contains(&name)
    }

    fn valid_names() -> String {
        Self::ALL
            .iter()
            .flat_map(|m| std::iter::once(m.name()).chain(m.aliases().iter().copied()))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Method {
    type Err = PartitionError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|m| m.matches(s))
            .ok_or_else(|| PartitionError::UnknownMethod {
                method: s.to_string(),
                valid: Self::valid_names(),
            })
    }
}

impl TryFrom<String> for Method {
    type Error = PartitionError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Method> for String {
    fn from(method: Method) -> Self {
        method.name().to_string()
    }
}

/// Configuration for a partitioning run.
///
/// # Examples
///
/// ```
/// use u_partition::config::PartitionConfig;
///
/// let config = PartitionConfig::default()
///     .with_num_parts(3)
///     .with_return_indices(true);
/// assert_eq!(config.num_parts, 3);
/// assert!(config.validate().is_ok());
/// ```
///
/// Unknown selector strings are rejected before any search starts:
///
/// ```
/// use u_partition::config::PartitionConfig;
///
/// let err = PartitionConfig::default().with_method_name("foo").unwrap_err();
/// assert!(err.to_string().contains("native"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PartitionConfig {
    /// Number of parts `k`. May exceed the number of inputs, in which case
    /// some parts stay empty.
    pub num_parts: usize,

    /// When set, parts hold positions into the input instead of the values.
    pub return_indices: bool,

    /// Which implementation to run.
    pub method: Method,
}

impl Default for PartitionConfig {
    fn default() -> Self {
        Self {
            num_parts: 2,
            return_indices: false,
            method: Method::default(),
        }
    }
}

impl PartitionConfig {
    /// Creates a configuration for `num_parts` parts with default settings.
    pub fn new(num_parts: usize) -> Self {
        Self::default().with_num_parts(num_parts)
    }

    /// Sets the number of parts.
    pub fn with_num_parts(mut self, num_parts: usize) -> Self {
        self.num_parts = num_parts;
        self
    }

    /// Returns indices instead of values when `true`.
    pub fn with_return_indices(mut self, return_indices: bool) -> Self {
        self.return_indices = return_indices;
        self
    }

    /// Sets the implementation.
    pub fn with_method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Sets the implementation by its selector string.
    ///
    /// # Errors
    /// [`PartitionError::UnknownMethod`] naming the valid selectors.
    pub fn with_method_name(self, name: &str) -> Result<Self> {
        Ok(self.with_method(name.parse()?))
    }

    /// Checks that the configuration describes a runnable partitioning.
    pub fn validate(&self) -> Result<()> {
        if self.num_parts == 0 {
            return Err(PartitionError::ZeroParts);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = PartitionConfig::default();
        assert_eq!(config.num_parts, 2);
        assert!(!config.return_indices);
        assert_eq!(config.method, Method::Native);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builder() {
        let config = PartitionConfig::new(7)
            .with_return_indices(true)
            .with_method(Method::Native);
        assert_eq!(config.num_parts, 7);
        assert!(config.return_indices);
    }

    #[test]
    fn test_zero_parts_rejected() {
        let config = PartitionConfig::new(0);
        assert_eq!(config.validate(), Err(PartitionError::ZeroParts));
    }

    #[test]
    fn test_method_parse() {
        assert_eq!("native".parse::<Method>(), Ok(Method::Native));
        assert_eq!(Method::Native.to_string(), "native");
        assert_eq!("purepython".parse::<Method>(), Ok(Method::Native));
    }

    #[test]
    fn test_unknown_method_names_valid_set() {
        let err = "foo".parse::<Method>().unwrap_err();
        assert_eq!(
            err,
            PartitionError::UnknownMethod {
                method: "foo".into(),
                valid: "native, purepython".into(),
            }
        );
        assert_eq!(
            err.to_string(),
            "invalid method \"foo\"; valid options: native, purepython"
        );
    }

    #[test]
    fn test_with_method_name() {
        assert!(PartitionConfig::default().with_method_name("native").is_ok());
        assert!(PartitionConfig::default().with_method_name("purepython").is_ok());
        assert!(PartitionConfig::default().with_method_name("pure-python").is_err());
    }
}
