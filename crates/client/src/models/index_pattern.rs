//! Index pattern models and request builder.

use serde::{Deserialize, Serialize};

use crate::error::{ClientError, Result};
use crate::models::saved_objects::{CreateRequest, ObjectResponse, UpdateRequest};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexPatternAttributes {
    /// The pattern itself, e.g. `logstash-*`.
    pub title: String,
    #[serde(rename = "timeFieldName", default, skip_serializing_if = "Option::is_none")]
    pub time_field_name: Option<String>,
    /// Field list as a JSON string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,
    #[serde(rename = "fieldFormatMap", default, skip_serializing_if = "Option::is_none")]
    pub field_format_map: Option<String>,
}

pub type CreateIndexPatternRequest = CreateRequest<IndexPatternAttributes>;
pub type UpdateIndexPatternRequest = UpdateRequest<IndexPatternAttributes>;
pub type IndexPatternResponse = ObjectResponse<IndexPatternAttributes>;

#[derive(Debug, Clone, Default)]
pub struct IndexPatternRequestBuilder {
    id: Option<String>,
    title: Option<String>,
    time_field_name: Option<String>,
    fields: Option<String>,
    field_format_map: Option<String>,
}

impl IndexPatternRequestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_time_field_name(mut self, field: impl Into<String>) -> Self {
        self.time_field_name = Some(field.into());
        self
    }

    pub fn with_fields(mut self, fields_json: impl Into<String>) -> Self {
        self.fields = Some(fields_json.into());
        self
    }

    pub fn with_field_format_map(mut self, format_map_json: impl Into<String>) -> Self {
        self.field_format_map = Some(format_map_json.into());
        self
    }

    /// Index patterns carry no links, so the request is the same for every version.
    pub fn build(&self) -> Result<CreateIndexPatternRequest> {
        let title = self
            .title
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| ClientError::Validation("index pattern requires a title".to_string()))?;

        Ok(CreateRequest {
            id: self.id.clone(),
            attributes: IndexPatternAttributes {
                title: title.to_string(),
                time_field_name: self.time_field_name.clone(),
                fields: self.fields.clone(),
                field_format_map: self.field_format_map.clone(),
            },
            references: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_is_required() {
        assert!(
            IndexPatternRequestBuilder::new()
                .build()
                .unwrap_err()
                .is_validation_error()
        );
        assert!(
            IndexPatternRequestBuilder::new()
                .with_title("  ")
                .build()
                .unwrap_err()
                .is_validation_error()
        );
    }

    #[test]
    fn test_optional_fields_are_omitted() {
        let request = IndexPatternRequestBuilder::new()
            .with_title("logs-*")
            .with_time_field_name("@timestamp")
            .build()
            .unwrap();
        let json = serde_json::to_value(&request.attributes).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"title": "logs-*", "timeFieldName": "@timestamp"})
        );
    }
}
