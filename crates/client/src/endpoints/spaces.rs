//! Kibana space endpoints (7.x).

use reqwest::Method;

use crate::agent::HttpAgent;
use crate::endpoints::url_encoding::encode_path_segment;
use crate::error::{ClientError, Result};
use crate::models::Space;

fn spaces_url(base_url: &str) -> String {
    format!("{base_url}/api/spaces/space")
}

fn space_url(base_url: &str, id: &str) -> String {
    format!("{}/{}", spaces_url(base_url), encode_path_segment(id))
}

fn validate(space: &Space) -> Result<()> {
    if space.id.trim().is_empty() || space.name.trim().is_empty() {
        return Err(ClientError::Validation(
            "space requires an id and a name".to_string(),
        ));
    }
    Ok(())
}

pub async fn create_space(agent: &HttpAgent, base_url: &str, space: &Space) -> Result<Space> {
    validate(space)?;
    let builder = agent
        .request(Method::POST, &spaces_url(base_url))
        .json(space);
    agent.send_json(builder).await
}

pub async fn update_space(agent: &HttpAgent, base_url: &str, space: &Space) -> Result<Space> {
    validate(space)?;
    let builder = agent
        .request(Method::PUT, &space_url(base_url, &space.id))
        .json(space);
    agent.send_json(builder).await
}

pub async fn get_space(agent: &HttpAgent, base_url: &str, id: &str) -> Result<Space> {
    agent
        .send_json(agent.request(Method::GET, &space_url(base_url, id)))
        .await
}

pub async fn delete_space(agent: &HttpAgent, base_url: &str, id: &str) -> Result<()> {
    agent
        .send(agent.request(Method::DELETE, &space_url(base_url, id)))
        .await?;
    Ok(())
}

pub async fn list_spaces(agent: &HttpAgent, base_url: &str) -> Result<Vec<Space>> {
    agent
        .send_json(agent.request(Method::GET, &spaces_url(base_url)))
        .await
}
