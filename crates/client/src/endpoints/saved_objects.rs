//! Saved objects API endpoints (Kibana 6.x and 7.x).

use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::agent::HttpAgent;
use crate::endpoints::query::with_query;
use crate::endpoints::url_encoding::encode_path_segment;
use crate::error::Result;
use crate::models::{CreateRequest, FindResponse, ObjectResponse, QueryParams, Reference};

#[derive(Serialize)]
struct SavedObjectBody<'a, A> {
    attributes: &'a A,
    #[serde(skip_serializing_if = "Option::is_none")]
    references: Option<&'a [Reference]>,
}

impl<'a, A> SavedObjectBody<'a, A> {
    /// Create body: `references` is always an array when sent.
    fn create(request: &'a CreateRequest<A>, send_references: bool) -> Self {
        Self {
            attributes: &request.attributes,
            references: send_references.then(|| request.references()),
        }
    }

    /// Update body: `references` only when the caller supplied them, so the
    /// server keeps the stored ones otherwise.
    fn update(request: &'a CreateRequest<A>, send_references: bool) -> Self {
        Self {
            attributes: &request.attributes,
            references: request
                .references
                .as_deref()
                .filter(|_| send_references),
        }
    }
}

fn object_url(base_url: &str, object_type: &str, id: Option<&str>) -> String {
    match id {
        Some(id) => format!(
            "{}/api/saved_objects/{}/{}",
            base_url,
            object_type,
            encode_path_segment(id)
        ),
        None => format!("{}/api/saved_objects/{}", base_url, object_type),
    }
}

/// Create a saved object. `send_references` adds the `references` array.
pub async fn create_object<A>(
    agent: &HttpAgent,
    base_url: &str,
    object_type: &str,
    request: &CreateRequest<A>,
    send_references: bool,
) -> Result<ObjectResponse<A>>
where
    A: Serialize + DeserializeOwned,
{
    let url = object_url(base_url, object_type, request.id.as_deref());
    let builder = agent
        .request(Method::POST, &url)
        .json(&SavedObjectBody::create(request, send_references));
    agent.send_json(builder).await
}

pub async fn get_object<A>(
    agent: &HttpAgent,
    base_url: &str,
    object_type: &str,
    id: &str,
) -> Result<ObjectResponse<A>>
where
    A: DeserializeOwned,
{
    let url = object_url(base_url, object_type, Some(id));
    agent.send_json(agent.request(Method::GET, &url)).await
}

/// Update a saved object. References not supplied are left untouched.
pub async fn update_object<A>(
    agent: &HttpAgent,
    base_url: &str,
    object_type: &str,
    id: &str,
    request: &CreateRequest<A>,
    send_references: bool,
) -> Result<ObjectResponse<A>>
where
    A: Serialize + DeserializeOwned,
{
    let url = object_url(base_url, object_type, Some(id));
    let builder = agent
        .request(Method::PUT, &url)
        .json(&SavedObjectBody::update(request, send_references));
    agent.send_json(builder).await
}

pub async fn delete_object(
    agent: &HttpAgent,
    base_url: &str,
    object_type: &str,
    id: &str,
) -> Result<()> {
    let url = object_url(base_url, object_type, Some(id));
    agent.send(agent.request(Method::DELETE, &url)).await?;
    Ok(())
}

/// Run a listing against `find_path` (`/api/saved_objects/` or `/api/saved_objects/_find`).
pub async fn find_objects<A, Q>(
    agent: &HttpAgent,
    base_url: &str,
    find_path: &str,
    params: Option<&Q>,
) -> Result<FindResponse<A>>
where
    A: DeserializeOwned,
    Q: QueryParams,
{
    let url = with_query(&format!("{base_url}{find_path}"), params)?;
    agent.send_json(agent.request(Method::GET, &url)).await
}
