//! Authenticated HTTP client for hub state endpoints.

use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};

use hubreport_app::ports::StateSource;
use hubreport_domain::endpoint::SensorEndpoint;
use hubreport_domain::fetch::{FetchFailure, FetchOutcome};
use hubreport_domain::record::StateRecord;

use crate::config::HubClientConfig;
use crate::error::HubClientError;

/// HTTP client sending one authenticated `GET` per sensor endpoint.
#[derive(Debug, Clone)]
pub struct HubClient {
    client: reqwest::Client,
}

impl HubClient {
    /// Build a client carrying the bearer token and JSON accept header on
    /// every request, bounded by the configured timeout.
    ///
    /// An empty token sends no `Authorization` header at all.
    ///
    /// # Errors
    ///
    /// Returns [`HubClientError::InvalidToken`] when the token cannot be
    /// used as a header value, or [`HubClientError::Build`] when reqwest
    /// fails to initialise.
    pub fn new(config: &HubClientConfig) -> Result<Self, HubClientError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if !config.auth_token.is_empty() {
            let mut auth = HeaderValue::from_str(&format!("Bearer {}", config.auth_token))
                .map_err(HubClientError::InvalidToken)?;
            auth.set_sensitive(true);
            headers.insert(AUTHORIZATION, auth);
        }

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout())
            .build()
            .map_err(HubClientError::Build)?;

        Ok(Self { client })
    }

    async fn get_record(&self, url: &str) -> Result<StateRecord, FetchFailure> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|err| FetchFailure::Transport(describe(&err)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchFailure::Status(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|err| FetchFailure::Transport(describe(&err)))?;

        let document: serde_json::Value =
            serde_json::from_slice(&body).map_err(|err| FetchFailure::Decode(err.to_string()))?;
        if !document.is_object() {
            return Err(FetchFailure::Decode("expected a JSON object".to_string()));
        }
        serde_json::from_value(document).map_err(|err| FetchFailure::Decode(err.to_string()))
    }
}

impl StateSource for HubClient {
    async fn fetch(&self, endpoint: &SensorEndpoint) -> FetchOutcome {
        match self.get_record(&endpoint.url).await {
            Ok(record) => {
                tracing::debug!(url = %endpoint.url, entity_id = ?record.entity_id, "state fetched");
                FetchOutcome::Success(record)
            }
            Err(failure) => {
                tracing::warn!(url = %endpoint.url, %failure, "invalid response from hub");
                FetchOutcome::Failure(failure)
            }
        }
    }
}

fn describe(err: &reqwest::Error) -> String {
    if err.is_timeout() {
        "request timed out".to_string()
    } else if err.is_connect() {
        format!("connection failed: {err}")
    } else {
        err.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::time::Duration;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const AIR_PATH: &str = "/api/states/sensor.air_temperature";

    fn config(timeout_secs: u64) -> HubClientConfig {
        HubClientConfig {
            auth_token: "secret-token".to_string(),
            timeout_secs,
        }
    }

    fn endpoint(server: &MockServer) -> SensorEndpoint {
        SensorEndpoint::new("Air", format!("{}{AIR_PATH}", server.uri())).unwrap()
    }

    #[tokio::test]
    async fn should_return_record_when_hub_answers() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(AIR_PATH))
            .and(header("authorization", "Bearer secret-token"))
            .and(header("accept", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "entity_id": "sensor.air_temperature",
                "state": "21.5",
                "attributes": {"unit_of_measurement": "°C"}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = HubClient::new(&config(10)).unwrap();
        let outcome = client.fetch(&endpoint(&server)).await;

        let FetchOutcome::Success(record) = outcome else {
            panic!("expected success, got {outcome:?}");
        };
        assert_eq!(record.state_text().as_deref(), Some("21.5"));
        assert_eq!(record.unit_of_measurement().as_deref(), Some("°C"));
    }

    #[tokio::test]
    async fn should_report_status_failure_on_unauthorized() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(AIR_PATH))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let client = HubClient::new(&config(10)).unwrap();
        let outcome = client.fetch(&endpoint(&server)).await;

        assert_eq!(outcome, FetchOutcome::Failure(FetchFailure::Status(401)));
    }

    #[tokio::test]
    async fn should_not_retry_on_server_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(AIR_PATH))
            .respond_with(ResponseTemplate::new(503))
            .expect(1)
            .mount(&server)
            .await;

        let client = HubClient::new(&config(10)).unwrap();
        let outcome = client.fetch(&endpoint(&server)).await;

        assert_eq!(outcome, FetchOutcome::Failure(FetchFailure::Status(503)));
    }

    #[tokio::test]
    async fn should_report_decode_failure_on_invalid_json() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(AIR_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let client = HubClient::new(&config(10)).unwrap();
        let outcome = client.fetch(&endpoint(&server)).await;

        assert!(matches!(
            outcome,
            FetchOutcome::Failure(FetchFailure::Decode(_))
        ));
    }

    #[tokio::test]
    async fn should_report_decode_failure_when_body_is_not_an_object() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(AIR_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let client = HubClient::new(&config(10)).unwrap();
        let outcome = client.fetch(&endpoint(&server)).await;

        assert_eq!(
            outcome,
            FetchOutcome::Failure(FetchFailure::Decode("expected a JSON object".to_string()))
        );
    }

    #[tokio::test]
    async fn should_report_transport_failure_on_timeout() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(AIR_PATH))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"state": "1"}))
                    .set_delay(Duration::from_secs(5)),
            )
            .mount(&server)
            .await;

        let client = HubClient::new(&config(1)).unwrap();
        let outcome = client.fetch(&endpoint(&server)).await;

        assert_eq!(
            outcome,
            FetchOutcome::Failure(FetchFailure::Transport("request timed out".to_string()))
        );
    }

    #[tokio::test]
    async fn should_report_transport_failure_when_unreachable() {
        let client = HubClient::new(&config(2)).unwrap();
        let endpoint = SensorEndpoint::new("Air", "http://127.0.0.1:1/api/states/x").unwrap();

        let outcome = client.fetch(&endpoint).await;

        assert!(matches!(
            outcome,
            FetchOutcome::Failure(FetchFailure::Transport(_))
        ));
    }

    #[test]
    fn should_reject_token_with_newline() {
        let config = HubClientConfig {
            auth_token: "bad\ntoken".to_string(),
            timeout_secs: 1,
        };
        assert!(matches!(
            HubClient::new(&config),
            Err(HubClientError::InvalidToken(_))
        ));
    }
}
