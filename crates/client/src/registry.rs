//! Version dispatch registry.
//!
//! Responsibilities:
//! - Map a (domain, server version string) pair to the wire-format family
//!   that implements it.
//! - Provide the default table of supported Kibana versions.
//!
//! Does NOT handle:
//! - Semantic version ranges. Lookups are exact string matches; every
//!   supported version needs its own entry.
//! - Constructing domain clients (see `client` module).
//!
//! Invariants:
//! - A registry is a plain value built once and injected into `KibanaClient`.
//! - A miss is reported as `ClientError::UnsupportedVersion` at first use.

use std::collections::HashMap;
use std::fmt;

use kibana_config::constants::{KIBANA_VERSION_553, KIBANA_VERSION_600, KIBANA_VERSION_720};

use crate::error::{ClientError, Result};

/// A family of saved-object clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Domain {
    Search,
    Visualization,
    Dashboard,
    IndexPattern,
    SavedObjects,
    Role,
    Space,
}

impl Domain {
    /// Domains backed by the saved objects store.
    pub const SAVED_OBJECT_DOMAINS: [Domain; 5] = [
        Domain::Search,
        Domain::Visualization,
        Domain::Dashboard,
        Domain::IndexPattern,
        Domain::SavedObjects,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Search => "search",
            Self::Visualization => "visualization",
            Self::Dashboard => "dashboard",
            Self::IndexPattern => "index-pattern",
            Self::SavedObjects => "saved objects",
            Self::Role => "role",
            Self::Space => "space",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Wire-format family implementing a domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiVariant {
    /// Kibana 5.x: documents written directly through the Elasticsearch proxy.
    EsProxy,
    /// Kibana 6.x saved objects API: inline ids, flat sort.
    SavedObjectsV6,
    /// Kibana 7.x saved objects API: references, `_find`, security and spaces.
    SavedObjectsV7,
}

impl ApiVariant {
    /// Whether create and update bodies carry a `references` array.
    pub fn sends_references(&self) -> bool {
        matches!(self, Self::SavedObjectsV7)
    }

    /// Path of the generic listing endpoint below the base URI.
    pub fn find_path(&self) -> Option<&'static str> {
        match self {
            Self::EsProxy => None,
            Self::SavedObjectsV6 => Some("/api/saved_objects/"),
            Self::SavedObjectsV7 => Some("/api/saved_objects/_find"),
        }
    }
}

/// Exact-match table of supported (domain, version) pairs.
#[derive(Debug, Clone)]
pub struct VersionRegistry {
    entries: HashMap<(Domain, String), ApiVariant>,
}

impl Default for VersionRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();
        for domain in Domain::SAVED_OBJECT_DOMAINS {
            registry.register(domain, KIBANA_VERSION_553, ApiVariant::EsProxy);
            registry.register(domain, KIBANA_VERSION_600, ApiVariant::SavedObjectsV6);
            registry.register(domain, KIBANA_VERSION_720, ApiVariant::SavedObjectsV7);
        }
        registry.register(Domain::Role, KIBANA_VERSION_720, ApiVariant::SavedObjectsV7);
        registry.register(Domain::Space, KIBANA_VERSION_720, ApiVariant::SavedObjectsV7);
        registry
    }
}

impl VersionRegistry {
    /// A registry with no entries.
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Register (or replace) the implementation for an exact version string.
    pub fn register(
        &mut self,
        domain: Domain,
        version: impl Into<String>,
        variant: ApiVariant,
    ) -> &mut Self {
        self.entries.insert((domain, version.into()), variant);
        self
    }

    /// Register a version for every saved-object domain at once.
    pub fn register_saved_objects(
        &mut self,
        version: impl Into<String>,
        variant: ApiVariant,
    ) -> &mut Self {
        let version = version.into();
        for domain in Domain::SAVED_OBJECT_DOMAINS {
            self.register(domain, version.clone(), variant);
        }
        self
    }

    pub fn resolve(&self, domain: Domain, version: &str) -> Result<ApiVariant> {
        self.entries
            .get(&(domain, version.to_string()))
            .copied()
            .ok_or_else(|| ClientError::UnsupportedVersion {
                domain,
                version: version.to_string(),
            })
    }

    pub fn supports(&self, domain: Domain, version: &str) -> bool {
        self.resolve(domain, version).is_ok()
    }

    /// Registered versions for a domain, sorted.
    pub fn versions(&self, domain: Domain) -> Vec<&str> {
        let mut versions: Vec<&str> = self
            .entries
            .keys()
            .filter(|(d, _)| *d == domain)
            .map(|(_, v)| v.as_str())
            .collect();
        versions.sort_unstable();
        versions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table() {
        let registry = VersionRegistry::default();
        assert_eq!(
            registry.resolve(Domain::Search, "5.5.3").unwrap(),
            ApiVariant::EsProxy
        );
        assert_eq!(
            registry.resolve(Domain::Dashboard, "6.0.0").unwrap(),
            ApiVariant::SavedObjectsV6
        );
        assert_eq!(
            registry.resolve(Domain::SavedObjects, "7.2.0").unwrap(),
            ApiVariant::SavedObjectsV7
        );
        assert_eq!(registry.versions(Domain::Role), vec!["7.2.0"]);
        assert_eq!(
            registry.versions(Domain::IndexPattern),
            vec!["5.5.3", "6.0.0", "7.2.0"]
        );
    }

    #[test]
    fn test_lookup_is_exact_match() {
        let registry = VersionRegistry::default();
        let err = registry.resolve(Domain::Search, "6.0").unwrap_err();
        assert!(matches!(
            err,
            ClientError::UnsupportedVersion { domain: Domain::Search, ref version } if version == "6.0"
        ));
        assert!(!registry.supports(Domain::Role, "6.0.0"));
    }

    #[test]
    fn test_register_adds_versions() {
        let mut registry = VersionRegistry::empty();
        registry
            .register_saved_objects("7.10.2", ApiVariant::SavedObjectsV7)
            .register(Domain::Space, "7.10.2", ApiVariant::SavedObjectsV7);
        assert!(registry.supports(Domain::Visualization, "7.10.2"));
        assert!(registry.supports(Domain::Space, "7.10.2"));
        assert!(!registry.supports(Domain::Role, "7.10.2"));
    }

    #[test]
    fn test_variant_capabilities() {
        assert!(!ApiVariant::SavedObjectsV6.sends_references());
        assert!(ApiVariant::SavedObjectsV7.sends_references());
        assert_eq!(ApiVariant::EsProxy.find_path(), None);
        assert_eq!(
            ApiVariant::SavedObjectsV7.find_path(),
            Some("/api/saved_objects/_find")
        );
    }
}
