// Client for the LED strip effect controller server.
// The server takes JSON effect requests and replies with JSON; replies are
// not validated beyond being decodable.
use crate::error::{AppError, AppResult};
use crate::models::{EffectRequest, EffectStatus};
use log::debug;
use reqwest::Client;
use serde_json::Value;

#[derive(Debug, Clone)]
pub struct EffectClient {
    client: Client,
    base_url: String,
}

impl EffectClient {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    /// POSTs `payload` as JSON to `endpoint` and returns the decoded reply.
    ///
    /// An absent payload is sent as the JSON literal `null`. The call is
    /// made once; nothing is retried. A non-2xx status, a transport
    /// failure, or a body that is not JSON all come back as `Err`.
    pub async fn trigger_endpoint(
        &self,
        endpoint: &str,
        payload: Option<Value>,
    ) -> AppResult<Value> {
        let url = format!("{}{}", self.base_url, endpoint);
        let body = payload.unwrap_or(Value::Null);

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::External(format!("Request to {} failed: {}", endpoint, e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::External(format!(
                "Effect server error ({}): {}",
                status, error_text
            )));
        }

        let result: Value = response.json().await.map_err(|e| {
            AppError::Serialization(format!("Failed to decode effect server response: {}", e))
        })?;

        debug!("{} replied: {}", endpoint, result);
        Ok(result)
    }

    /// Asks the server to run the requested effect.
    pub async fn start_effect(&self, request: EffectRequest) -> AppResult<Value> {
        let payload = serde_json::to_value(request)?;
        self.trigger_endpoint("/start", Some(payload)).await
    }

    /// Stops whatever effect is currently running.
    pub async fn stop_effect(&self) -> AppResult<Value> {
        self.trigger_endpoint("/stop", None).await
    }

    pub async fn status(&self) -> AppResult<EffectStatus> {
        let url = format!("{}/status", self.base_url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::External(format!("Request to /status failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::External(format!(
                "Effect server error ({}): {}",
                status, error_text
            )));
        }

        response.json::<EffectStatus>().await.map_err(|e| {
            AppError::Serialization(format!("Failed to decode status response: {}", e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn test_client(server: &mockito::ServerGuard) -> EffectClient {
        EffectClient::new(Client::new(), server.url())
    }

    #[tokio::test]
    async fn test_trigger_endpoint_round_trips_payload() {
        let mut server = mockito::Server::new_async().await;
        let payload = json!({"effect": "wheel", "args": [], "nested": {"n": 1}});
        let mock = server
            .mock("POST", "/start")
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(payload.clone()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"status":"ok"}"#)
            .create_async()
            .await;

        let result = test_client(&server)
            .trigger_endpoint("/start", Some(payload))
            .await
            .unwrap();

        assert_eq!(result, json!({"status": "ok"}));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_absent_payload_is_sent_as_json_null() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/stop")
            .match_header("content-type", "application/json")
            .match_body(Matcher::Exact("null".to_string()))
            .with_status(200)
            .with_body(r#"{"message":"Effect stopped"}"#)
            .create_async()
            .await;

        let result = test_client(&server)
            .trigger_endpoint("/stop", None)
            .await
            .unwrap();

        assert_eq!(result, json!({"message": "Effect stopped"}));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_non_2xx_status_is_an_external_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/start")
            .with_status(404)
            .with_body(r#"{"error":"Effect 'nope' does not exist"}"#)
            .create_async()
            .await;

        let err = test_client(&server)
            .trigger_endpoint("/start", Some(json!({"effect": "nope", "args": []})))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::External(_)), "got {:?}", err);
    }

    #[tokio::test]
    async fn test_malformed_body_is_a_serialization_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/start")
            .with_status(200)
            .with_body("not json at all")
            .create_async()
            .await;

        let err = test_client(&server)
            .trigger_endpoint("/start", None)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Serialization(_)), "got {:?}", err);
    }

    #[tokio::test]
    async fn test_start_effect_posts_the_request_shape() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/start")
            .match_body(Matcher::Json(
                json!({"effect": "text_effect", "args": ["hello world"]}),
            ))
            .with_status(200)
            .with_body(r#"{"message":"Effect 'text_effect' started"}"#)
            .create_async()
            .await;

        let result = test_client(&server)
            .start_effect(EffectRequest::text_effect("hello world"))
            .await
            .unwrap();

        assert_eq!(result, json!({"message": "Effect 'text_effect' started"}));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_status_parses_running_effect() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/status")
            .with_status(200)
            .with_body(r#"{"status":"running","effect":"race"}"#)
            .create_async()
            .await;

        let status = test_client(&server).status().await.unwrap();

        assert_eq!(status.status, "running");
        assert_eq!(status.effect.as_deref(), Some("race"));
    }

    #[test]
    fn test_trailing_slash_is_stripped_from_base_url() {
        let client = EffectClient::new(Client::new(), "http://example.com/");
        assert_eq!(client.base_url, "http://example.com");
    }
}
