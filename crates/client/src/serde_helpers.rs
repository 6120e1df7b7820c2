//! Serde helpers for Kibana's inconsistent JSON typing.
//!
//! Responsibilities:
//! - Accept either JSON numbers or strings for version fields.
//! - Accept both hit-count shapes returned by the Elasticsearch proxy.
//!
//! Explicitly does NOT handle:
//! - Validating higher-level semantics (ranges, required fields).
//!
//! Invariants / assumptions:
//! - Kibana 6.x returns saved-object `version` as an integer, 7.x as an opaque string.
//! - Elasticsearch 5/6 returns `hits.total` as a number, 7+ as `{"value": n}`.

use serde::Deserialize;
use serde::de::Error as _;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    U64(u64),
    I64(i64),
    F64(f64),
}

impl StringOrNumber {
    fn into_string(self) -> String {
        match self {
            Self::String(s) => s,
            Self::U64(v) => v.to_string(),
            Self::I64(v) => v.to_string(),
            Self::F64(v) => v.to_string(),
        }
    }
}

pub fn opt_string_from_number_or_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<StringOrNumber>::deserialize(deserializer)?;
    Ok(value.map(StringOrNumber::into_string))
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum HitTotal {
    Number(u64),
    Object { value: u64 },
    String(String),
}

pub fn hit_total<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    match HitTotal::deserialize(deserializer)? {
        HitTotal::Number(v) => Ok(v),
        HitTotal::Object { value } => Ok(value),
        HitTotal::String(s) => s.parse::<u64>().map_err(D::Error::custom),
    }
}
