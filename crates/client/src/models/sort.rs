//! Saved search sort columns.
//!
//! Kibana has stored sort columns in two shapes over time:
//! - flat, below 7.0: `["@timestamp", "desc"]` (direction is a trailing sentinel)
//! - nested, 7.0 and later: `[["@timestamp", "desc"]]`
//!
//! `Sort` decodes either shape into the same value and encodes in the shape
//! chosen for the target server version. Equality ignores the shape.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::ClientError;
use crate::version::ServerVersion;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortOrder {
    Ascending,
    #[default]
    Descending,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(Self::Ascending),
            "desc" => Ok(Self::Descending),
            other => Err(ClientError::Validation(format!(
                "unknown sort direction '{other}'"
            ))),
        }
    }
}

/// Wire shape of a sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortEncoding {
    #[default]
    Flat,
    Nested,
}

impl SortEncoding {
    pub fn for_version(version: &ServerVersion) -> Self {
        if version.uses_nested_sort() {
            Self::Nested
        } else {
            Self::Flat
        }
    }
}

/// Sort columns sharing one direction.
#[derive(Debug, Clone, Default, Eq)]
pub struct Sort {
    pub columns: Vec<String>,
    pub direction: SortOrder,
    encoding: SortEncoding,
}

impl PartialEq for Sort {
    fn eq(&self, other: &Self) -> bool {
        self.columns == other.columns
            && (self.columns.is_empty() || self.direction == other.direction)
    }
}

impl Sort {
    pub fn new<I, S>(columns: I, direction: SortOrder) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            direction,
            encoding: SortEncoding::Flat,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn encoding(&self) -> SortEncoding {
        self.encoding
    }

    pub fn with_encoding(mut self, encoding: SortEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Same columns, encoded the way `version` stores them.
    pub fn encoded_for(&self, version: &ServerVersion) -> Self {
        self.clone().with_encoding(SortEncoding::for_version(version))
    }
}

impl Serialize for Sort {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if self.columns.is_empty() {
            return Vec::<String>::new().serialize(serializer);
        }
        let direction = self.direction.as_str();
        match self.encoding {
            SortEncoding::Flat => {
                let mut flat: Vec<&str> = self.columns.iter().map(String::as_str).collect();
                flat.push(direction);
                flat.serialize(serializer)
            }
            SortEncoding::Nested => self
                .columns
                .iter()
                .map(|c| [c.as_str(), direction])
                .collect::<Vec<_>>()
                .serialize(serializer),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SortWire {
    Flat(Vec<String>),
    Nested(Vec<Vec<String>>),
}

impl<'de> Deserialize<'de> for Sort {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match SortWire::deserialize(deserializer)? {
            SortWire::Flat(mut items) => {
                let direction = match items.last().map(|d| d.parse::<SortOrder>()) {
                    Some(Ok(direction)) => {
                        items.pop();
                        direction
                    }
                    _ => SortOrder::default(),
                };
                Ok(Sort::new(items, direction))
            }
            SortWire::Nested(pairs) => {
                let mut columns = Vec::with_capacity(pairs.len());
                let mut direction: Option<SortOrder> = None;
                for pair in pairs {
                    let [column, dir]: [String; 2] = pair.try_into().map_err(|_| {
                        D::Error::custom("nested sort entries must be [field, direction]")
                    })?;
                    let dir = dir.parse::<SortOrder>().map_err(D::Error::custom)?;
                    if direction.is_some_and(|d| d != dir) {
                        return Err(D::Error::custom("mixed sort directions are not supported"));
                    }
                    direction = Some(dir);
                    columns.push(column);
                }
                Ok(Sort::new(columns, direction.unwrap_or_default())
                    .with_encoding(SortEncoding::Nested))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    #[test]
    fn test_flat_and_nested_decode_identically() {
        let flat: Sort = serde_json::from_value(json!(["f", "desc"])).unwrap();
        let nested: Sort = serde_json::from_value(json!([["f", "desc"]])).unwrap();
        assert_eq!(flat, nested);
        assert_eq!(flat.columns, vec!["f"]);
        assert_eq!(flat.direction, SortOrder::Descending);
        assert_eq!(nested.encoding(), SortEncoding::Nested);
    }

    #[test]
    fn test_empty_array_is_empty_sort() {
        let sort: Sort = serde_json::from_value(json!([])).unwrap();
        assert!(sort.is_empty());
        assert_eq!(serde_json::to_value(&sort).unwrap(), json!([]));
    }

    #[test]
    fn test_encoding_follows_version() {
        let sort = Sort::new(["@timestamp"], SortOrder::Descending);
        let v6 = sort.encoded_for(&ServerVersion::new(6, 0, 0));
        let v7 = sort.encoded_for(&ServerVersion::new(7, 2, 0));
        assert_eq!(serde_json::to_value(&v6).unwrap(), json!(["@timestamp", "desc"]));
        assert_eq!(serde_json::to_value(&v7).unwrap(), json!([["@timestamp", "desc"]]));
    }

    #[test]
    fn test_flat_direction_is_trailing_sentinel() {
        let sort = Sort::new(["a", "b"], SortOrder::Ascending);
        assert_eq!(serde_json::to_value(&sort).unwrap(), json!(["a", "b", "asc"]));
    }

    #[test]
    fn test_mixed_nested_directions_rejected() {
        let result: Result<Sort, _> = serde_json::from_value(json!([["a", "asc"], ["b", "desc"]]));
        assert!(result.is_err());
    }

    #[test]
    fn test_malformed_nested_entry_rejected() {
        let result: Result<Sort, _> = serde_json::from_value(json!([["a"]]));
        assert!(result.is_err());
        let result: Result<Sort, _> = serde_json::from_value(json!([["a", "sideways"]]));
        assert!(result.is_err());
    }

    #[test]
    fn test_flat_without_direction_defaults_to_descending() {
        let sort: Sort = serde_json::from_value(json!(["@timestamp"])).unwrap();
        assert_eq!(sort.columns, vec!["@timestamp"]);
        assert_eq!(sort.direction, SortOrder::Descending);
    }

    fn field() -> impl Strategy<Value = String> {
        "[a-z@][a-z0-9_.]{0,12}".prop_filter("not a direction", |s| s != "asc" && s != "desc")
    }

    fn order() -> impl Strategy<Value = SortOrder> {
        prop_oneof![Just(SortOrder::Ascending), Just(SortOrder::Descending)]
    }

    proptest! {
        #[test]
        fn prop_flat_round_trip(columns in prop::collection::vec(field(), 1..4), direction in order()) {
            let sort = Sort::new(columns, direction);
            let encoded = serde_json::to_string(&sort).unwrap();
            let decoded: Sort = serde_json::from_str(&encoded).unwrap();
            prop_assert_eq!(&decoded, &sort);
            prop_assert_eq!(decoded.encoding(), SortEncoding::Flat);
        }

        #[test]
        fn prop_nested_and_flat_agree(columns in prop::collection::vec(field(), 1..4), direction in order()) {
            let sort = Sort::new(columns, direction);
            let nested = serde_json::to_string(&sort.clone().with_encoding(SortEncoding::Nested)).unwrap();
            let flat = serde_json::to_string(&sort).unwrap();
            let a: Sort = serde_json::from_str(&nested).unwrap();
            let b: Sort = serde_json::from_str(&flat).unwrap();
            prop_assert_eq!(a, b);
        }
    }
}
