//! Kibana server versions.
//!
//! Versions are parsed numerically so that wire-format decisions (reference
//! externalization, nested sort encoding, query syntax) can be made with
//! ordinary comparisons instead of string matching.

use std::fmt;
use std::str::FromStr;

use crate::error::ClientError;

/// A `major.minor.patch` server version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ServerVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl ServerVersion {
    /// First version that stores cross-object links as references.
    pub const REFERENCES: ServerVersion = ServerVersion::new(7, 0, 0);

    /// First version whose search sources carry a query `language`.
    pub const QUERY_LANGUAGE: ServerVersion = ServerVersion::new(6, 0, 0);

    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Whether saved objects carry a top-level `references` array.
    pub fn supports_references(&self) -> bool {
        *self >= Self::REFERENCES
    }

    /// Whether saved search sort columns use the nested `[["f","dir"]]` form.
    pub fn uses_nested_sort(&self) -> bool {
        *self >= Self::REFERENCES
    }

    pub fn supports_query_language(&self) -> bool {
        *self >= Self::QUERY_LANGUAGE
    }
}

impl FromStr for ServerVersion {
    type Err = ClientError;

    /// Parse `major[.minor[.patch]]`; missing parts default to zero.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ClientError::Validation(format!("invalid Kibana version '{s}'"));

        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(invalid());
        }

        let mut parts = [0u32; 3];
        let mut count = 0;
        for part in trimmed.split('.') {
            if count == parts.len() {
                return Err(invalid());
            }
            parts[count] = part.parse().map_err(|_| invalid())?;
            count += 1;
        }

        Ok(Self::new(parts[0], parts[1], parts[2]))
    }
}

impl fmt::Display for ServerVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}
