//! Kibana security role endpoints (7.x).

use reqwest::Method;

use crate::agent::HttpAgent;
use crate::endpoints::url_encoding::encode_path_segment;
use crate::error::{ClientError, Result};
use crate::models::Role;

fn roles_url(base_url: &str) -> String {
    format!("{base_url}/api/security/role")
}

fn role_url(base_url: &str, name: &str) -> String {
    format!("{}/{}", roles_url(base_url), encode_path_segment(name))
}

/// Create or replace a role. The name travels in the path.
pub async fn put_role(agent: &HttpAgent, base_url: &str, role: &Role) -> Result<()> {
    if role.name.trim().is_empty() {
        return Err(ClientError::Validation("role requires a name".to_string()));
    }
    let builder = agent
        .request(Method::PUT, &role_url(base_url, &role.name))
        .json(role);
    agent.send(builder).await?;
    Ok(())
}

pub async fn get_role(agent: &HttpAgent, base_url: &str, name: &str) -> Result<Role> {
    let mut role: Role = agent
        .send_json(agent.request(Method::GET, &role_url(base_url, name)))
        .await?;
    if role.name.is_empty() {
        role.name = name.to_string();
    }
    Ok(role)
}

pub async fn delete_role(agent: &HttpAgent, base_url: &str, name: &str) -> Result<()> {
    agent
        .send(agent.request(Method::DELETE, &role_url(base_url, name)))
        .await?;
    Ok(())
}

pub async fn list_roles(agent: &HttpAgent, base_url: &str) -> Result<Vec<Role>> {
    agent
        .send_json(agent.request(Method::GET, &roles_url(base_url)))
        .await
}
