use serde::{Deserialize, Serialize};

use crate::oauth::OAuthLogin;

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub auth_url: String,
    pub state: String,
}

impl From<OAuthLogin> for LoginResponse {
    fn from(login: OAuthLogin) -> Self {
        Self {
            auth_url: login.auth_url,
            state: login.state,
        }
    }
}
