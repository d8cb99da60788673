//! Chat Commands
//!
//! Endpoint for the chat backend.

use gloo_net::http::Response;

use super::{decode_json, Endpoint, HttpMethod};
use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::models::{ChatReply, ChatRequest};

pub fn send_chat(config: &ApiConfig, message: &str) -> Result<Endpoint, ApiError> {
    Endpoint::new(HttpMethod::Post, config.chat_url.as_str()).with_json(&ChatRequest { message })
}

/// Extract the reply text
pub async fn decode_reply(response: Response) -> Result<String, ApiError> {
    let reply: ChatReply = decode_json(response).await?;
    Ok(reply.reply)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_posts_message() {
        let endpoint = send_chat(&ApiConfig::default(), "hello").unwrap();
        assert_eq!(endpoint.method, HttpMethod::Post);
        assert_eq!(endpoint.url, "/chat");
        assert_eq!(endpoint.body.as_deref(), Some(r#"{"message":"hello"}"#));
    }

    #[test]
    fn test_method_names() {
        assert_eq!(HttpMethod::Patch.as_str(), "PATCH");
        assert_eq!(HttpMethod::Delete.as_str(), "DELETE");
    }
}
