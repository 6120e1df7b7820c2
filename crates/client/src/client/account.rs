//! Logz.io account switching.

use kibana_config::DeploymentType;

use crate::auth::AuthenticationHandler;
use crate::client::KibanaClient;
use crate::error::{ClientError, Result};

impl KibanaClient {
    /// Scope this client's session to another Logz.io account.
    ///
    /// Objects of the previous account are not visible afterwards. Requests
    /// racing with the switch may run under either account.
    pub async fn change_account(&self, account_id: &str) -> Result<()> {
        if self.config.deployment_type != DeploymentType::Logzio {
            return Err(ClientError::UnsupportedDeployment {
                deployment: self.config.deployment_type,
            });
        }
        match self.agent.auth() {
            AuthenticationHandler::Logzio(auth) => {
                auth.replace_session(self.agent.http(), account_id).await
            }
            _ => Err(ClientError::AuthFailed(
                "account switching requires Logz.io authentication".to_string(),
            )),
        }
    }
}
