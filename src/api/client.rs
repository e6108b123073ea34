// src/api/client.rs

use reqwest::{Method, RequestBuilder, StatusCode};
use serde::{Serialize, de::DeserializeOwned};
use url::Url;

use crate::{config::Config, error::AppError};

/// Thin wrapper over `reqwest::Client` for the eTantara REST API.
///
/// * Resolves endpoint paths against the configured base URL.
/// * Adds `Authorization: Bearer <token>` when a token is set.
/// * Maps non-2xx responses to `AppError::Status`, keeping any JSON error body.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base: Url,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.http_timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            base: config.api_base.clone(),
            token: None,
        })
    }

    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|t| !t.trim().is_empty());
        self
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    pub fn url(&self, endpoint: &str) -> Result<Url, AppError> {
        Ok(self.base.join(endpoint.trim_start_matches('/'))?)
    }

    fn request(&self, method: Method, endpoint: &str) -> Result<RequestBuilder, AppError> {
        Ok(self.request_url(method, self.url(endpoint)?))
    }

    fn request_url(&self, method: Method, url: Url) -> RequestBuilder {
        tracing::debug!("{} {}", method, url);

        let mut builder = self.http.request(method, url);
        if let Some(token) = &self.token {
            builder = builder.bearer_auth(token);
        }
        builder
    }

    /// Sends the request and returns the raw body of a successful response.
    async fn send(&self, builder: RequestBuilder) -> Result<String, AppError> {
        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::debug!("API error {}: {}", status, body);
            return Err(AppError::Status {
                status: status.as_u16(),
                message: error_message(status, &body),
                body: serde_json::from_str(&body).ok(),
            });
        }

        Ok(body)
    }

    async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, AppError> {
        let body = self.send(builder).await?;
        Ok(serde_json::from_str(&body)?)
    }

    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, AppError> {
        self.send_json(self.request(Method::GET, endpoint)?).await
    }

    /// GET on a URL already built from the base, e.g. by `endpoints::user_points`.
    pub async fn get_url<T: DeserializeOwned>(&self, url: Url) -> Result<T, AppError> {
        self.send_json(self.request_url(Method::GET, url)).await
    }

    pub async fn post<T, B>(&self, endpoint: &str, body: &B) -> Result<T, AppError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send_json(self.request(Method::POST, endpoint)?.json(body)).await
    }


    /// POST to an endpoint that only acknowledges; the body is ignored.
    pub async fn post_ack<B: Serialize + ?Sized>(&self, endpoint: &str, body: &B) -> Result<(), AppError> {
        self.send(self.request(Method::POST, endpoint)?.json(body)).await?;
        Ok(())
    }

    /// PUT counterpart of `post_ack`.
    pub async fn put_ack<B: Serialize + ?Sized>(&self, endpoint: &str, body: &B) -> Result<(), AppError> {
        self.send(self.request(Method::PUT, endpoint)?.json(body)).await?;
        Ok(())
    }
}

/// Best human-readable message for a failed response:
/// the JSON `message`/`error` field, else the raw text, else the reason phrase.
fn error_message(status: StatusCode, body: &str) -> String {
    if let Ok(serde_json::Value::Object(map)) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["message", "error"] {
            if let Some(serde_json::Value::String(msg)) = map.get(key) {
                return msg.clone();
            }
        }
    }

    let text = body.trim();
    if !text.is_empty() {
        return text.to_string();
    }

    status.canonical_reason().unwrap_or("request failed").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_keeps_api_prefix() {
        let config = Config::for_base("http://localhost:8080/api").unwrap();
        let client = ApiClient::new(&config).unwrap();
        assert_eq!(client.url("/quiz/reponse").unwrap().as_str(), "http://localhost:8080/api/quiz/reponse");
        assert_eq!(
            client.url("contenus?type=ohabolana&limit=1").unwrap().as_str(),
            "http://localhost:8080/api/contenus?type=ohabolana&limit=1"
        );
    }

    #[test]
    fn test_blank_token_is_dropped() {
        let config = Config::for_base("http://localhost:8080/api").unwrap();
        let client = ApiClient::new(&config).unwrap().with_token(Some("   ".into()));
        assert_eq!(client.token(), None);
    }

    #[test]
    fn test_error_message_extraction() {
        assert_eq!(
            error_message(StatusCode::BAD_REQUEST, r#"{"message":"Efa nandray anjara"}"#),
            "Efa nandray anjara"
        );
        assert_eq!(error_message(StatusCode::CONFLICT, r#"{"error":"duplicate"}"#), "duplicate");
        assert_eq!(error_message(StatusCode::BAD_GATEWAY, "  upstream down "), "upstream down");
        assert_eq!(error_message(StatusCode::NOT_FOUND, ""), "Not Found");
    }
}
