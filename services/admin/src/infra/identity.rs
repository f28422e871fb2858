use anyhow::Context as _;
use reqwest::{Client, StatusCode, header};
use serde::Deserialize;
use uuid::Uuid;

use capvote_core::session::CAPVOTE_SESSION;

use crate::domain::repository::IdentityPort;
use crate::domain::types::SessionUser;
use crate::error::AdminServiceError;

/// HTTP client for the identity service that owns sessions and sign-in.
#[derive(Clone)]
pub struct HttpIdentityClient {
    client: Client,
    base_url: String,
}

impl HttpIdentityClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    fn cookie_header(session_token: &str) -> String {
        format!("{CAPVOTE_SESSION}={session_token}")
    }
}

#[derive(Debug, Deserialize)]
struct CurrentUserResponse {
    user_id: Uuid,
    email: String,
}

impl IdentityPort for HttpIdentityClient {
    async fn current_user(
        &self,
        session_token: &str,
    ) -> Result<Option<SessionUser>, AdminServiceError> {
        let response = self
            .client
            .get(format!("{}/auth/@me", self.base_url))
            .header(header::COOKIE, Self::cookie_header(session_token))
            .send()
            .await
            .context("request current user from identity service")?;

        if response.status() == StatusCode::UNAUTHORIZED {
            return Ok(None);
        }

        let response = response
            .error_for_status()
            .context("identity service returned an error status")?;
        let body: CurrentUserResponse = response
            .json()
            .await
            .context("decode current user response")?;

        Ok(Some(SessionUser {
            id: body.user_id,
            email: body.email,
        }))
    }

    async fn sign_out(&self, session_token: &str) -> Result<(), AdminServiceError> {
        let response = self
            .client
            .delete(format!("{}/auth/token", self.base_url))
            .header(header::COOKIE, Self::cookie_header(session_token))
            .send()
            .await
            .context("request sign out from identity service")?;

        // An already-dead session is fine to sign out of.
        if response.status() == StatusCode::UNAUTHORIZED {
            return Ok(());
        }

        response
            .error_for_status()
            .context("identity service rejected sign out")?;
        Ok(())
    }
}
