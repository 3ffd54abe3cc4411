//! HTTP client for the external chat backend.
//!
//! One POST to `{base_url}/chat` per submitted message, carrying the new
//! text plus the prior transcript. The backend is an opaque collaborator:
//! whatever NLP, stage derivation or profile extraction exists lives behind
//! this call. No retries, no backoff.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::widget::{Message, UserInfo};

/// Failure to obtain a valid reply.
///
/// The caller treats every variant identically: the raw error goes to the
/// log and the user sees the fixed fallback message.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("backend returned status {0}")]
    Status(reqwest::StatusCode),
    #[error("malformed backend response: {0}")]
    Decode(#[source] reqwest::Error),
}

#[derive(Debug, Serialize)]
struct TurnRequest<'a> {
    message: &'a str,
    history: &'a [Message],
}

#[derive(Debug, Deserialize)]
struct TurnResponse {
    reply: String,
    #[serde(rename = "userInfo")]
    user_info: Option<UserInfo>,
    stage: Option<String>,
}

/// Decoded result of one successful chat turn.
#[derive(Debug, Clone, PartialEq)]
pub struct TurnOutcome {
    pub reply: String,
    pub user_info: Option<UserInfo>,
    pub stage: Option<String>,
}

/// Client for the `/chat` endpoint.
#[derive(Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
}

impl std::fmt::Debug for BackendClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl BackendClient {
    /// Create a client with the given base URL and request timeout.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, BackendError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    /// Send one user turn.
    ///
    /// `history` is the transcript as it stood before the submitted message
    /// was appended; the backend receives the new text separately.
    pub async fn send_turn(
        &self,
        message: &str,
        history: &[Message],
    ) -> Result<TurnOutcome, BackendError> {
        let url = format!("{}/chat", self.base_url.trim_end_matches('/'));
        let body = TurnRequest { message, history };

        debug!(
            name: "backend.request",
            url = %url,
            history_len = history.len(),
            "Sending chat turn"
        );

        let resp = self.http.post(&url).json(&body).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(BackendError::Status(status));
        }

        let decoded: TurnResponse = resp.json().await.map_err(BackendError::Decode)?;

        debug!(
            name: "backend.response",
            reply_len = decoded.reply.len(),
            has_user_info = decoded.user_info.is_some(),
            stage = ?decoded.stage,
            "Received chat reply"
        );

        Ok(TurnOutcome {
            reply: decoded.reply,
            user_info: decoded.user_info,
            stage: decoded.stage,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::Role;

    #[test]
    fn request_body_matches_the_wire_contract() {
        let history = vec![Message::greeting()];
        let body = TurnRequest {
            message: "Pricing",
            history: &history,
        };

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["message"], "Pricing");
        let entry = &json["history"][0];
        assert_eq!(entry["role"], "bot");
        assert!(entry["read"].as_bool().unwrap());
        assert!(entry["timestamp"].is_string());
    }

    #[test]
    fn response_decodes_with_and_without_optional_fields() {
        let full: TurnResponse = serde_json::from_str(
            r#"{
                "reply": "Hi Ada!",
                "userInfo": {"name": "Ada", "email": null, "query_type": "pricing"},
                "stage": "collect_email"
            }"#,
        )
        .unwrap();
        assert_eq!(full.reply, "Hi Ada!");
        assert_eq!(full.user_info.unwrap().name.as_deref(), Some("Ada"));
        assert_eq!(full.stage.as_deref(), Some("collect_email"));

        let bare: TurnResponse = serde_json::from_str(r#"{"reply": "ok"}"#).unwrap();
        assert_eq!(bare.reply, "ok");
        assert!(bare.user_info.is_none());
        assert!(bare.stage.is_none());
    }

    #[tokio::test]
    async fn unreachable_backend_is_a_transport_error() {
        // Bind then drop a listener so the port is closed.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client =
            BackendClient::new(format!("http://{addr}"), Duration::from_secs(5)).unwrap();
        let err = client
            .send_turn("hello", &[Message::greeting()])
            .await
            .unwrap_err();
        assert!(matches!(err, BackendError::Transport(_)));
    }

    #[tokio::test]
    async fn non_2xx_status_is_a_status_error() {
        use axum::{Router, http::StatusCode, routing::post};

        let app = Router::new().route(
            "/chat",
            post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let client =
            BackendClient::new(format!("http://{addr}"), Duration::from_secs(5)).unwrap();
        let err = client.send_turn("hello", &[]).await.unwrap_err();
        assert!(matches!(
            err,
            BackendError::Status(reqwest::StatusCode::INTERNAL_SERVER_ERROR)
        ));
    }

    #[tokio::test]
    async fn successful_turn_decodes_the_reply() {
        use axum::{Json, Router, routing::post};
        use serde_json::json;

        let app = Router::new().route(
            "/chat",
            post(|Json(body): Json<serde_json::Value>| async move {
                assert_eq!(body["message"], "Pricing");
                assert_eq!(body["history"][0]["role"], "bot");
                Json(json!({
                    "reply": "Our plans start at $9/mo",
                    "stage": "faq"
                }))
            }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let client =
            BackendClient::new(format!("http://{addr}"), Duration::from_secs(5)).unwrap();
        let outcome = client
            .send_turn("Pricing", &[Message::greeting()])
            .await
            .unwrap();
        assert_eq!(outcome.reply, "Our plans start at $9/mo");
        assert_eq!(outcome.stage.as_deref(), Some("faq"));
        assert!(outcome.user_info.is_none());
    }

    #[test]
    fn user_message_roundtrips_role() {
        let msg = Message::user("hi");
        assert_eq!(msg.role, Role::User);
        let value = serde_json::to_value(&msg).unwrap();
        assert_eq!(value["role"], "user");
    }
}
