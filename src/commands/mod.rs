//! Backend Client
//!
//! Typed wrappers over the REST endpoints, organized by domain.

mod todo;
mod chat;

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::models::{Task, TaskId};

/// Everything the task and chat panels need from the server.
///
/// `HttpBackend` talks to the real endpoints; tests use an in-memory fake.
#[allow(async_fn_in_trait)]
pub trait Backend {
    async fn list_tasks(&self) -> Result<Vec<Task>, ApiError>;
    async fn create_task(&self, title: &str) -> Result<(), ApiError>;
    async fn set_completed(&self, id: TaskId, completed: bool) -> Result<(), ApiError>;
    async fn delete_task(&self, id: TaskId) -> Result<(), ApiError>;
    async fn send_chat(&self, message: &str) -> Result<String, ApiError>;
}

/// Backend over `fetch`
#[derive(Debug, Clone)]
pub struct HttpBackend {
    config: ApiConfig,
}

impl HttpBackend {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }
}

impl Backend for HttpBackend {
    async fn list_tasks(&self) -> Result<Vec<Task>, ApiError> {
        let response = send(todo::list_tasks(&self.config)).await?;
        decode_json(response).await
    }

    async fn create_task(&self, title: &str) -> Result<(), ApiError> {
        send(todo::create_task(&self.config, title)?).await?;
        Ok(())
    }

    async fn set_completed(&self, id: TaskId, completed: bool) -> Result<(), ApiError> {
        send(todo::set_completed(&self.config, id, completed)?).await?;
        Ok(())
    }

    async fn delete_task(&self, id: TaskId) -> Result<(), ApiError> {
        send(todo::delete_task(&self.config, id)).await?;
        Ok(())
    }

    async fn send_chat(&self, message: &str) -> Result<String, ApiError> {
        let response = send(chat::send_chat(&self.config, message)?).await?;
        chat::decode_reply(response).await
    }
}

// ========================
// Endpoint Description
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// One call: method, url and optional JSON body
#[derive(Debug, Clone, PartialEq)]
pub struct Endpoint {
    pub method: HttpMethod,
    pub url: String,
    pub body: Option<String>,
}

impl Endpoint {
    fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self { method, url: url.into(), body: None }
    }

    fn with_json<T: Serialize>(mut self, body: &T) -> Result<Self, ApiError> {
        let body = serde_json::to_string(body).map_err(|e| ApiError::Encode(e.to_string()))?;
        self.body = Some(body);
        Ok(self)
    }
}

// ========================
// Response Helpers
// ========================

/// Send an endpoint and fail on any non-2xx status.
async fn send(endpoint: Endpoint) -> Result<Response, ApiError> {
    let Endpoint { method, url, body } = endpoint;
    log::debug!("{} {}", method.as_str(), url);

    let builder = match method {
        HttpMethod::Get => Request::get(&url),
        HttpMethod::Post => Request::post(&url),
        HttpMethod::Patch => Request::patch(&url),
        HttpMethod::Delete => Request::delete(&url),
    };
    let request = match body {
        Some(body) => with_json_body(builder, body)?,
        None => builder.build()?,
    };

    let response = request.send().await?;
    if !response.ok() {
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::Status {
            method: method.as_str(),
            url,
            status: response.status(),
            body,
        });
    }
    Ok(response)
}

fn with_json_body(builder: RequestBuilder, body: String) -> Result<Request, ApiError> {
    Ok(builder.header("content-type", "application/json").body(body)?)
}

async fn decode_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let text = response.text().await?;
    serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
}
