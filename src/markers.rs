//! Marker type resolution
//!
//! Annotation references in a schema name types by their fully-qualified
//! name. Resolution is two-stage:
//! 1. look the name up among everything loadable in this run
//!    (built-in markers, configured `known_annotations`, earlier placeholders)
//! 2. otherwise synthesize an empty placeholder under exactly that name and
//!    register it, so the next lookup finds it in stage 1
//!
//! The registry is scoped to one generation run. Independent runs must use
//! independent registries.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, warn};

use crate::error::{Result, TypegenError};

/// Markers every target platform is assumed to provide
pub const BUILTIN_MARKERS: &[&str] = &[
    "java.lang.Deprecated",
    "java.lang.FunctionalInterface",
    "java.lang.Override",
    "java.lang.SafeVarargs",
    "java.lang.SuppressWarnings",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MarkerId(usize);

/// Where a marker type came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerOrigin {
    /// Shipped with the target platform
    Builtin,
    /// Declared loadable by configuration
    Configured,
    /// Empty placeholder created during this run
    Synthesized,
}

/// A marker type. Placeholders have no members; only the name is meaningful.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkerType {
    pub name: String,
    pub origin: MarkerOrigin,
}

/// Resolve-then-synthesize capability used by the annotation rule
pub trait TypeResolver {
    /// Look `name` up among loadable types
    fn resolve_loadable_type(&self, name: &str) -> Option<MarkerId>;

    /// Create and register a placeholder named `name`.
    ///
    /// Repeated calls with the same name return the same id.
    fn synthesize_placeholder_type(&mut self, name: &str) -> Result<MarkerId>;
}

/// Name-keyed arena of marker types for one run
#[derive(Debug, Serialize)]
pub struct MarkerRegistry {
    types: Vec<MarkerType>,
    #[serde(skip)]
    by_name: HashMap<String, MarkerId>,
    #[serde(skip)]
    identifier: Regex,
}

impl Default for MarkerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkerRegistry {
    /// Registry seeded with [`BUILTIN_MARKERS`]
    pub fn new() -> Self {
        let mut registry = Self::empty();
        for name in BUILTIN_MARKERS {
            registry.insert(name, MarkerOrigin::Builtin);
        }
        registry
    }

    /// Registry with nothing loadable
    pub fn empty() -> Self {
        Self {
            types: Vec::new(),
            by_name: HashMap::new(),
            identifier: Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").unwrap(),
        }
    }

    /// Builtins plus the consumer's own marker types
    pub fn with_known<I, S>(known: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut registry = Self::new();
        for name in known {
            let name = name.as_ref().trim();
            if !registry.by_name.contains_key(name) {
                registry.insert(name, MarkerOrigin::Configured);
            }
        }
        registry
    }

    fn insert(&mut self, name: &str, origin: MarkerOrigin) -> MarkerId {
        let id = MarkerId(self.types.len());
        self.types.push(MarkerType {
            name: name.to_string(),
            origin,
        });
        self.by_name.insert(name.to_string(), id);
        id
    }

    pub fn get(&self, id: MarkerId) -> Option<&MarkerType> {
        self.types.get(id.0)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Number of placeholders created so far in this run
    pub fn synthesized_count(&self) -> usize {
        self.types
            .iter()
            .filter(|t| t.origin == MarkerOrigin::Synthesized)
            .count()
    }

    /// Check that `name` is a dotted identifier path
    pub(crate) fn check_name(&self, name: &str) -> Result<()> {
        let fail = |reason: String| TypegenError::TypeSynthesisFailure {
            name: name.to_string(),
            reason,
        };

        if name.is_empty() {
            return Err(fail("name is empty".to_string()));
        }
        for segment in name.split('.') {
            if !self.identifier.is_match(segment) {
                return Err(fail(format!("segment '{segment}' is not a valid identifier")));
            }
        }
        Ok(())
    }
}

impl TypeResolver for MarkerRegistry {
    fn resolve_loadable_type(&self, name: &str) -> Option<MarkerId> {
        self.by_name.get(name).copied()
    }

    fn synthesize_placeholder_type(&mut self, name: &str) -> Result<MarkerId> {
        if let Some(id) = self.by_name.get(name) {
            debug!(name, "placeholder already registered");
            return Ok(*id);
        }
        self.check_name(name)?;

        warn!(name, "marker type not loadable, synthesizing empty placeholder");
        Ok(self.insert(name, MarkerOrigin::Synthesized))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtins_resolve_without_synthesis() {
        let registry = MarkerRegistry::new();
        let id = registry.resolve_loadable_type("java.lang.Deprecated").unwrap();

        assert_eq!(registry.get(id).unwrap().origin, MarkerOrigin::Builtin);
        assert_eq!(registry.synthesized_count(), 0);
    }

    #[test]
    fn test_synthesis_is_cached() {
        let mut registry = MarkerRegistry::new();
        assert!(registry.resolve_loadable_type("com.example.Audited").is_none());

        let first = registry.synthesize_placeholder_type("com.example.Audited").unwrap();
        let second = registry.synthesize_placeholder_type("com.example.Audited").unwrap();

        assert_eq!(first, second);
        assert_eq!(registry.resolve_loadable_type("com.example.Audited"), Some(first));
        assert_eq!(registry.synthesized_count(), 1);
        assert_eq!(registry.get(first).unwrap().name, "com.example.Audited");
    }

    #[test]
    fn test_invalid_names_fail_synthesis() {
        let mut registry = MarkerRegistry::empty();

        for bad in ["", "com..Empty", "com.example.9Lives", "com.example.Has Space", "trailing."] {
            let err = registry.synthesize_placeholder_type(bad).unwrap_err();
            assert!(
                matches!(err, TypegenError::TypeSynthesisFailure { ref name, .. } if name == bad),
                "expected synthesis failure for {bad:?}, got {err:?}"
            );
        }
        assert!(registry.is_empty());
    }

    #[test]
    fn test_configured_markers_are_loadable() {
        let registry = MarkerRegistry::with_known(["com.acme.Audited", "java.lang.Deprecated"]);
        let id = registry.resolve_loadable_type("com.acme.Audited").unwrap();

        assert_eq!(registry.get(id).unwrap().origin, MarkerOrigin::Configured);
        assert_eq!(registry.len(), BUILTIN_MARKERS.len() + 1);
    }
}
