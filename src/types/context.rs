//! Debug bags attached to chain nodes.

use core::fmt::{self, Display};
use std::collections::btree_map::{self, BTreeMap};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::traits::Decorator;
use crate::types::Fields;

/// A bag of key/value debugging data attached to one node.
///
/// Values are recorded through their `Display` form. Every `Context` applied to
/// a node is kept as a separate bag; bags are never merged.
///
/// # Examples
///
/// ```
/// use error_trail::Context;
///
/// let ctx = Context::new().with("user_id", 42).with("region", "eu-west-1");
/// assert_eq!(ctx.get("user_id"), Some("42"));
///
/// let same = Context::from([("region", "eu-west-1"), ("user_id", "42")]);
/// assert_eq!(ctx, same);
/// assert_eq!(ctx.to_string(), "region=eu-west-1 user_id=42");
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Context(BTreeMap<String, String>);

impl Context {
    #[inline]
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Adds (or replaces) one entry.
    #[inline]
    pub fn with(mut self, key: impl Into<String>, value: impl Display) -> Self {
        self.0.insert(key.into(), value.to_string());
        self
    }

    #[inline]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    #[inline]
    pub fn iter(&self) -> btree_map::Iter<'_, String, String> {
        self.0.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Context
where
    K: Into<String>,
    V: Display,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.to_string())).collect())
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for Context
where
    K: Into<String>,
    V: Display,
{
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl<'a> IntoIterator for &'a Context {
    type Item = (&'a String, &'a String);
    type IntoIter = btree_map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Display for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (key, value) in &self.0 {
            if !first {
                f.write_str(" ")?;
            }
            first = false;
            write!(f, "{key}={value}")?;
        }
        Ok(())
    }
}

impl Decorator for Context {
    #[inline]
    fn decorate(self, fields: &mut Fields) {
        fields.push_context(self);
    }
}
