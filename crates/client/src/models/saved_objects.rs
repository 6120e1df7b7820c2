//! Saved object envelopes and the generic listing request.
//!
//! Every typed domain (search, visualization, dashboard, index pattern) shares
//! the same request and response envelopes, parameterized by its attributes.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{ClientError, Result};
use crate::models::common::Reference;

/// Payload of a create call.
///
/// `references` is `None` for servers that keep links inline.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateRequest<A> {
    /// Caller supplied id; the server (or a fresh UUID) picks one otherwise.
    pub id: Option<String>,
    pub attributes: A,
    pub references: Option<Vec<Reference>>,
}

impl<A> CreateRequest<A> {
    pub fn new(attributes: A) -> Self {
        Self {
            id: None,
            attributes,
            references: None,
        }
    }

    pub fn references(&self) -> &[Reference] {
        self.references.as_deref().unwrap_or_default()
    }
}

/// Payload of an update call. The server merges the supplied attributes;
/// `references: None` keeps the stored references.
pub type UpdateRequest<A> = CreateRequest<A>;

/// A single saved object as returned by create, get and update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectResponse<A> {
    pub id: String,
    #[serde(rename = "type", default)]
    pub object_type: String,
    /// Integer on 6.x, opaque string on 7.x.
    #[serde(
        default,
        deserialize_with = "crate::serde_helpers::opt_string_from_number_or_string"
    )]
    pub version: Option<String>,
    pub attributes: A,
    #[serde(default)]
    pub references: Vec<Reference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// One page of a listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FindResponse<A> {
    #[serde(default)]
    pub page: u64,
    #[serde(default)]
    pub per_page: u64,
    #[serde(default)]
    pub total: u64,
    #[serde(default = "Vec::new")]
    pub saved_objects: Vec<ObjectResponse<A>>,
}

/// A saved object of any type with free-form attributes.
pub type SavedObject = ObjectResponse<Map<String, Value>>;

/// Result of the untyped listing endpoint.
pub type SavedObjectResponse = FindResponse<Map<String, Value>>;

/// Default page size of a listing.
pub const DEFAULT_PER_PAGE: u32 = 20;

/// Types that reflect into URL query pairs.
pub trait QueryParams {
    fn query_pairs(&self) -> Vec<(&'static str, String)>;
}

/// Filter for the untyped listing endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedObjectRequest {
    pub object_type: Option<String>,
    pub fields: Vec<String>,
    pub per_page: u32,
    /// 1-based page number; the server's first page when unset.
    pub page: Option<u32>,
}

impl Default for SavedObjectRequest {
    fn default() -> Self {
        Self {
            object_type: None,
            fields: Vec::new(),
            per_page: DEFAULT_PER_PAGE,
            page: None,
        }
    }
}

impl SavedObjectRequest {
    pub fn builder() -> SavedObjectRequestBuilder {
        SavedObjectRequestBuilder::default()
    }
}

impl QueryParams for SavedObjectRequest {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(self.fields.len() + 3);
        if let Some(object_type) = self.object_type.as_deref()
            && !object_type.is_empty()
        {
            pairs.push(("type", object_type.to_string()));
        }
        pairs.extend(self.fields.iter().map(|f| ("fields", f.clone())));
        pairs.push(("per_page", self.per_page.to_string()));
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        pairs
    }
}

#[derive(Debug, Clone, Default)]
pub struct SavedObjectRequestBuilder {
    object_type: Option<String>,
    fields: Vec<String>,
    per_page: Option<u32>,
    page: Option<u32>,
}

impl SavedObjectRequestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_type(mut self, object_type: impl Into<String>) -> Self {
        self.object_type = Some(object_type.into());
        self
    }

    pub fn with_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = fields.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn build(&self) -> Result<SavedObjectRequest> {
        let per_page = self.per_page.unwrap_or(DEFAULT_PER_PAGE);
        if per_page == 0 {
            return Err(ClientError::Validation(
                "per_page must be greater than 0".to_string(),
            ));
        }
        if self.page == Some(0) {
            return Err(ClientError::Validation("page starts at 1".to_string()));
        }
        Ok(SavedObjectRequest {
            object_type: self.object_type.clone(),
            fields: self.fields.clone(),
            per_page,
            page: self.page,
        })
    }
}
