//! Document endpoints for Kibana 5.x, reached through the Elasticsearch proxy.
//!
//! Kibana 5 has no saved objects API: saved objects are documents of the
//! `.kibana` index, typed by saved object type. Every call carries the
//! `kbn-version` header the proxy checks.

use kibana_config::{Config, DeploymentType};
use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::agent::{HttpAgent, read_json};
use crate::endpoints::url_encoding::encode_path_segment;
use crate::error::{ClientError, HttpError, Result};
use crate::models::es_proxy::{Document, DocumentWriteResponse, SearchHits};
use crate::models::{CreateRequest, ObjectResponse, SavedObjectRequest, SavedObjectResponse};

/// Header the proxy requires to match the server version.
pub const VERSION_HEADER: &str = "kbn-version";

/// Path of the `.kibana` index for `config`'s deployment.
///
/// The hosted base URI already points at the customer's Kibana index.
pub fn document_prefix(config: &Config) -> Result<String> {
    match config.deployment_type {
        DeploymentType::Vanilla => Ok(format!("{}/es_admin/.kibana", config.base_uri)),
        DeploymentType::Logzio => Ok(config.base_uri.clone()),
        DeploymentType::Unknown => Err(ClientError::UnsupportedDeployment {
            deployment: config.deployment_type,
        }),
    }
}

#[derive(Serialize)]
struct UpdateBody<'a, A> {
    doc: &'a A,
}

#[derive(Serialize)]
struct SearchBody<'a> {
    size: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    from: Option<u32>,
    version: bool,
    #[serde(rename = "_source")]
    source: SourceFilter<'a>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum SourceFilter<'a> {
    All(bool),
    Fields(&'a [String]),
}

fn document_url(prefix: &str, object_type: &str, id: &str) -> String {
    format!("{}/{}/{}", prefix, object_type, encode_path_segment(id))
}

fn write_response<A>(
    object_type: &str,
    written: DocumentWriteResponse,
    attributes: A,
) -> ObjectResponse<A> {
    ObjectResponse {
        id: written.id,
        object_type: object_type.to_string(),
        version: written.version.map(|v| v.to_string()),
        attributes,
        references: Vec::new(),
        updated_at: None,
    }
}

/// Index a new document. A missing id is replaced by a fresh UUID.
pub async fn create_document<A>(
    agent: &HttpAgent,
    prefix: &str,
    server_version: &str,
    object_type: &str,
    request: &CreateRequest<A>,
) -> Result<ObjectResponse<A>>
where
    A: Serialize + Clone,
{
    let id = request
        .id
        .clone()
        .unwrap_or_else(|| Uuid::new_v4().to_string());
    let url = format!("{}/_create", document_url(prefix, object_type, &id));
    let builder = agent
        .request(Method::POST, &url)
        .header(VERSION_HEADER, server_version)
        .json(&request.attributes);
    let written: DocumentWriteResponse = agent.send_json(builder).await?;
    Ok(write_response(
        object_type,
        written,
        request.attributes.clone(),
    ))
}

/// Fetch a document. A `found: false` answer is reported as a 404.
pub async fn get_document<A>(
    agent: &HttpAgent,
    prefix: &str,
    server_version: &str,
    object_type: &str,
    id: &str,
) -> Result<ObjectResponse<A>>
where
    A: DeserializeOwned,
{
    let url = document_url(prefix, object_type, id);
    let builder = agent
        .request(Method::GET, &url)
        .header(VERSION_HEADER, server_version);
    let body = agent.send(builder).await?.text().await?;
    let document: Document<A> = serde_json::from_str(&body)
        .map_err(|e| ClientError::InvalidResponse(format!("Failed to parse document: {e}")))?;

    match document.source {
        Some(attributes) if document.found => Ok(ObjectResponse {
            id: document.id,
            object_type: object_type.to_string(),
            version: document.version.map(|v| v.to_string()),
            attributes,
            references: Vec::new(),
            updated_at: None,
        }),
        _ => Err(HttpError::new(404, body).into()),
    }
}

/// Partially update a document with the request attributes.
pub async fn update_document<A>(
    agent: &HttpAgent,
    prefix: &str,
    server_version: &str,
    object_type: &str,
    id: &str,
    request: &CreateRequest<A>,
) -> Result<ObjectResponse<A>>
where
    A: Serialize + Clone,
{
    let url = format!("{}/_update", document_url(prefix, object_type, id));
    let builder = agent
        .request(Method::POST, &url)
        .header(VERSION_HEADER, server_version)
        .json(&UpdateBody {
            doc: &request.attributes,
        });
    let written: DocumentWriteResponse = agent.send_json(builder).await?;
    Ok(write_response(
        object_type,
        written,
        request.attributes.clone(),
    ))
}

pub async fn delete_document(
    agent: &HttpAgent,
    prefix: &str,
    server_version: &str,
    object_type: &str,
    id: &str,
) -> Result<()> {
    let url = document_url(prefix, object_type, id);
    let builder = agent
        .request(Method::DELETE, &url)
        .header(VERSION_HEADER, server_version);
    agent.send(builder).await?;
    Ok(())
}

/// List documents, mapped into the saved objects listing envelope.
pub async fn search_documents(
    agent: &HttpAgent,
    prefix: &str,
    server_version: &str,
    request: Option<&SavedObjectRequest>,
) -> Result<SavedObjectResponse> {
    let request = request.cloned().unwrap_or_default();
    let url = match request.object_type.as_deref().filter(|t| !t.is_empty()) {
        Some(object_type) => format!("{prefix}/{object_type}/_search"),
        None => format!("{prefix}/_search"),
    };
    let source = if request.fields.is_empty() {
        SourceFilter::All(true)
    } else {
        SourceFilter::Fields(&request.fields)
    };
    let builder = agent
        .request(Method::POST, &url)
        .header(VERSION_HEADER, server_version)
        .json(&SearchBody {
            size: request.per_page,
            from: request
                .page
                .map(|page| page.saturating_sub(1).saturating_mul(request.per_page)),
            version: true,
            source,
        });
    let response = agent.send(builder).await?;
    let hits: SearchHits<Map<String, Value>> = read_json(response).await?;

    let saved_objects = hits
        .hits
        .hits
        .into_iter()
        .map(|doc| ObjectResponse {
            id: doc.id,
            object_type: doc.doc_type,
            version: doc.version.map(|v| v.to_string()),
            attributes: doc.source.unwrap_or_default(),
            references: Vec::new(),
            updated_at: None,
        })
        .collect();

    Ok(SavedObjectResponse {
        page: u64::from(request.page.unwrap_or(1)),
        per_page: u64::from(request.per_page),
        total: hits.hits.total,
        saved_objects,
    })
}
