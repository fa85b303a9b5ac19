//! Names of catalog entries.
//!
//! Abilities and statuses are keyed by `Name` in the catalog, and every
//! status copied into an effect ledger carries its name along. Clones share
//! one `Arc<str>`, so a ledger full of `Burn` stacks holds a single string.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

/// The name of an ability or status.
///
/// Serializes as a plain JSON string. Maps keyed by `Name` can be queried
/// with a `&str`.
///
/// # Examples
///
/// ```rust
/// use elemental_combat::{Catalog, Name};
///
/// let catalog = Catalog::standard().unwrap();
/// let ember = catalog.ability("Ember").unwrap();
/// assert_eq!(ember.name(), &Name::new("Ember"));
/// assert_eq!(ember.name().to_string(), "Ember");
/// ```
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Name(Arc<str>);

impl Name {
    pub fn new(name: &str) -> Self {
        Self(Arc::from(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Name {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl Borrow<str> for Name {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for Name {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Name {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer).map(|name| Self(Arc::from(name)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_clones_share_storage() {
        let burn = Name::new("Burn");
        let copy = burn.clone();
        assert_eq!(burn, copy);
        assert!(Arc::ptr_eq(&burn.0, &copy.0));
    }

    #[test]
    fn test_map_lookup_by_str() {
        let mut costs = BTreeMap::new();
        costs.insert(Name::new("Blaze"), 30);
        costs.insert(Name::new("Ember"), 10);
        assert_eq!(costs.get("Ember"), Some(&10));
        assert_eq!(costs.get("Spark"), None);
        assert_eq!(costs.keys().next().map(Name::as_str), Some("Blaze"));
    }

    #[test]
    fn test_name_serializes_as_plain_string() {
        let json = serde_json::to_string(&Name::new("Daze")).unwrap();
        assert_eq!(json, "\"Daze\"");
        let back: Name = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Name::new("Daze"));
    }
}
