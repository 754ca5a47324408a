//! Authenticated session against the administrative API
//!
//! The server tracks the login through a cookie, so every call goes through
//! one cookie-carrying client. Dropping the session closes its connections.

use common::models::{LoginCredentials, NewUser};
use reqwest::{Client, ClientBuilder, Response, StatusCode};
use serde_json::Value;
use tracing::{debug, info};

use crate::{config::ClientConfig, error::ApiError};

/// Connection-reusing client bound to one API base URL
#[derive(Debug)]
pub struct AdminSession {
    client: Client,
    config: ClientConfig,
}

impl AdminSession {
    /// Open a new session; nothing is sent until [`AdminSession::login`]
    ///
    /// The cookie store is always enabled on top of `builder`.
    pub fn new(config: ClientConfig, builder: ClientBuilder) -> Result<Self, ApiError> {
        let client = builder.cookie_store(true).build()?;

        Ok(Self { client, config })
    }

    /// Authenticate as an administrator
    pub async fn login(&self, credentials: &LoginCredentials) -> Result<(), ApiError> {
        info!("Logging in as {}", credentials.username);

        let response = self
            .client
            .post(self.config.endpoint("login"))
            .json(credentials)
            .send()
            .await?;
        ensure_success(response).await?;

        Ok(())
    }

    /// Create a user and return the server's description of it
    pub async fn create_user(&self, user: &NewUser) -> Result<Value, ApiError> {
        info!("Creating user {} with role {:?}", user.username, user.role);

        let response = self
            .client
            .post(self.config.endpoint("user"))
            .json(user)
            .send()
            .await?;
        let body = ensure_success(response).await?.text().await?;

        match serde_json::from_str(&body) {
            Ok(created) => Ok(created),
            Err(source) => Err(ApiError::Decode {
                source,
                details: body,
            }),
        }
    }

    /// End the server-side session
    ///
    /// Any HTTP response counts as done; only transport failures are errors.
    pub async fn logout(&self) -> Result<StatusCode, ApiError> {
        let response = self
            .client
            .post(self.config.endpoint("logout"))
            .send()
            .await?;

        Ok(response.status())
    }
}

/// Turn a non-success status into an error carrying the response body
async fn ensure_success(response: Response) -> Result<Response, ApiError> {
    debug!("{} returned {}", response.url(), response.status());

    let failure = response.error_for_status_ref().err();
    match failure {
        None => Ok(response),
        Some(source) => {
            let details = response.text().await.ok().filter(|body| !body.is_empty());
            Err(ApiError::Request { source, details })
        }
    }
}
