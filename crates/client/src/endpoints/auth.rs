//! Logz.io login endpoints.
//!
//! These calls go to the identity provider and the Logz.io app, not to
//! Kibana, so they use the raw transport without Kibana headers.

use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::agent::{ensure_success, read_json};
use crate::auth::AUTH_TOKEN_HEADER;
use crate::endpoints::url_encoding::encode_path_segment;
use crate::error::{ClientError, Result};

const AUTH0_CONNECTION: &str = "Username-Password-Authentication";

#[derive(Serialize)]
struct ResourceOwnerRequest<'a> {
    client_id: &'a str,
    username: &'a str,
    password: &'a str,
    connection: &'a str,
    grant_type: &'a str,
    scope: &'a str,
}

#[derive(Deserialize)]
struct ResourceOwnerResponse {
    id_token: Option<String>,
}

#[derive(Serialize)]
struct JwtLoginRequest<'a> {
    jwt: &'a str,
}

#[derive(Deserialize)]
struct SessionResponse {
    #[serde(rename = "sessionToken")]
    session_token: Option<String>,
}

fn session_token(response: SessionResponse) -> Result<SecretString> {
    response
        .session_token
        .filter(|t| !t.is_empty())
        .map(|t| SecretString::new(t.into()))
        .ok_or_else(|| ClientError::AuthFailed("Missing sessionToken in response".to_string()))
}

/// Exchange a username and password for an Auth0 id token.
pub async fn exchange_credentials(
    http: &Client,
    auth0_uri: &str,
    client_id: &str,
    username: &str,
    password: &SecretString,
) -> Result<String> {
    debug!(username, "Exchanging credentials with Auth0");

    let url = format!("{auth0_uri}/oauth/ro");
    let body = ResourceOwnerRequest {
        client_id,
        username,
        password: password.expose_secret(),
        connection: AUTH0_CONNECTION,
        grant_type: "password",
        scope: "openid",
    };
    let response = ensure_success(http.post(&url).json(&body).send().await?).await?;
    let token: ResourceOwnerResponse = read_json(response).await?;

    token
        .id_token
        .filter(|t| !t.is_empty())
        .ok_or_else(|| ClientError::AuthFailed("Missing id_token in Auth0 response".to_string()))
}

/// Trade an Auth0 id token for a Logz.io session token.
pub async fn login_jwt(http: &Client, logz_uri: &str, id_token: &str) -> Result<SecretString> {
    let url = format!("{logz_uri}/login/jwt");
    let response = ensure_success(
        http.post(&url)
            .json(&JwtLoginRequest { jwt: id_token })
            .send()
            .await?,
    )
    .await?;
    session_token(read_json(response).await?)
}

/// Replace the current session with one scoped to `account_id`.
pub async fn replace_session(
    http: &Client,
    logz_uri: &str,
    current: &SecretString,
    account_id: &str,
) -> Result<SecretString> {
    debug!(account_id, "Replacing Logz.io session");

    let url = format!(
        "{}/user/session/replace/{}",
        logz_uri,
        encode_path_segment(account_id)
    );
    let response = ensure_success(
        http.post(&url)
            .header(AUTH_TOKEN_HEADER, current.expose_secret())
            .send()
            .await?,
    )
    .await?;
    session_token(read_json(response).await?)
}
