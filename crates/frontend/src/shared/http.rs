//! Typed JSON client over the backend REST API.
//!
//! `ApiClient` owns status handling and (de)serialization; the network itself
//! sits behind [`Transport`] so the browser fetch can be swapped out.

use crate::shared::api_utils::ApiConfig;
use async_trait::async_trait;
use leptos::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("Request to {path} failed with status {status}")]
    Status { status: u16, path: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Failed to serialize request: {0}")]
    Encode(String),

    #[error("Failed to parse response: {0}")]
    Decode(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    /// Path relative to the API base, starting with "/"
    pub path: String,
    /// Serialized JSON body
    pub body: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one request and hands back the raw response
#[async_trait(?Send)]
pub trait Transport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

/// Browser `fetch` transport
#[derive(Clone, Debug)]
pub struct FetchTransport {
    config: ApiConfig,
}

impl FetchTransport {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }
}

#[async_trait(?Send)]
impl Transport for FetchTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        use gloo_net::http::Request;

        let url = self.config.url(&request.path);
        let builder = match request.method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Put => Request::put(&url),
            Method::Delete => Request::delete(&url),
        }
        .header("Content-Type", "application/json")
        .header("Accept", "application/json");

        let response = match request.body {
            Some(body) => {
                builder
                    .body(body)
                    .map_err(|e| ApiError::Network(e.to_string()))?
                    .send()
                    .await
            }
            None => builder.send().await,
        }
        .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Ok(HttpResponse { status, body })
    }
}

#[derive(Clone, Debug)]
pub struct ApiClient<T = FetchTransport> {
    transport: T,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub async fn get<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        let body = self.send(Method::Get, path, None).await?;
        decode(&body)
    }

    pub async fn post<B, R>(&self, path: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let body = self.send(Method::Post, path, Some(encode(body)?)).await?;
        decode(&body)
    }

    pub async fn put<B, R>(&self, path: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let body = self.send(Method::Put, path, Some(encode(body)?)).await?;
        decode(&body)
    }

    /// DELETE resolves with no value; any response body is ignored
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.send(Method::Delete, path, None).await.map(|_| ())
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
    ) -> Result<String, ApiError> {
        log::debug!("{} {}", method, path);
        let response = self
            .transport
            .execute(HttpRequest {
                method,
                path: path.to_string(),
                body,
            })
            .await?;
        if !response.is_success() {
            return Err(ApiError::Status {
                status: response.status,
                path: path.to_string(),
            });
        }
        Ok(response.body)
    }
}

fn encode<B: Serialize + ?Sized>(body: &B) -> Result<String, ApiError> {
    serde_json::to_string(body).map_err(|e| ApiError::Encode(e.to_string()))
}

fn decode<R: DeserializeOwned>(body: &str) -> Result<R, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Create the browser client and put it into context
pub fn provide_api_client() {
    let config = ApiConfig::from_env();
    log::info!("API base URL: {}", config.base_url);
    provide_context(ApiClient::new(FetchTransport::new(config)));
}

pub fn use_api_client() -> ApiClient {
    use_context::<ApiClient>().expect("ApiClient not found in context")
}
