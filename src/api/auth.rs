// src/api/auth.rs

use serde_json::{Value, json};

use crate::{
    api::client::ApiClient,
    endpoints,
    error::AppError,
    models::user::{LoginRequest, LoginResponse, RegisterRequest},
    utils::identity::Identity,
};

impl ApiClient {
    /// Authenticates and returns the identity to persist.
    ///
    /// The token is trimmed; a blank token is an authentication failure even on 200.
    /// The username falls back to the login name when the backend omits it.
    pub async fn login(&self, username: &str, password: &str) -> Result<Identity, AppError> {
        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };

        let response: LoginResponse = self.post(endpoints::LOGIN, &request).await.map_err(|e| match e {
            AppError::Status { status: 401, message, .. } => AppError::AuthError(message),
            other => other,
        })?;

        let token = response
            .token
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| {
                AppError::AuthError(
                    response
                        .message
                        .clone()
                        .unwrap_or_else(|| "invalid token in response".to_string()),
                )
            })?;

        let name = response
            .username
            .as_deref()
            .filter(|u| !u.trim().is_empty())
            .unwrap_or(username);

        tracing::info!("Logged in as {}", name);
        Ok(Identity::logged_in(name, token))
    }

    /// Creates an account. The response body is returned as-is.
    pub async fn register(&self, request: &RegisterRequest) -> Result<Value, AppError> {
        let body: Option<Value> = match self.post(endpoints::REGISTER, request).await {
            Ok(body) => body,
            // Some deployments answer 201 with a plain-text body.
            Err(AppError::Decode(_)) => None,
            Err(e) => return Err(e),
        };
        tracing::info!("Account created for {}", request.username);
        Ok(body.unwrap_or(Value::Null))
    }

    /// Tells the backend the session is over. Callers treat failure as non-fatal.
    pub async fn logout(&self) -> Result<(), AppError> {
        self.post_ack(endpoints::LOGOUT, &json!({})).await
    }
}
