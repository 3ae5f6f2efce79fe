//! Axum router assembly.

use std::path::PathBuf;

use axum::Router;
use axum::routing::get;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use hubreport_app::ports::{ReportStore, StateSource};

use crate::api;
use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// When `static_dir` is set, unmatched paths are served from that directory.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<S, R>(state: AppState<S, R>, static_dir: Option<PathBuf>) -> Router
where
    S: StateSource + Send + Sync + 'static,
    R: ReportStore + Send + Sync + 'static,
{
    let mut router = Router::new()
        .route("/health", get(health_check))
        .route("/run", get(api::run::run::<S, R>))
        .route("/data.txt", get(api::report::raw::<S, R>))
        .nest("/api", api::routes());

    if let Some(dir) = static_dir {
        router = router.fallback_service(ServeDir::new(dir));
    }

    router.layer(TraceLayer::new_for_http()).with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use hubreport_app::services::poll_service::PollService;
    use hubreport_domain::endpoint::SensorEndpoint;
    use hubreport_domain::error::HubReportError;
    use hubreport_domain::fetch::{FetchFailure, FetchOutcome};
    use hubreport_domain::record::{StateRecord, UNIT_OF_MEASUREMENT};
    use std::sync::Mutex;
    use std::time::Duration;
    use tower::ServiceExt;

    struct StubSource;

    impl StateSource for StubSource {
        async fn fetch(&self, endpoint: &SensorEndpoint) -> FetchOutcome {
            if endpoint.label == "Air" {
                FetchOutcome::Success(
                    StateRecord::default()
                        .with_state("21.5")
                        .with_attribute(UNIT_OF_MEASUREMENT, "\u{b0}C"),
                )
            } else {
                FetchOutcome::Failure(FetchFailure::Status(500))
            }
        }
    }

    struct StalledSource;

    impl StateSource for StalledSource {
        async fn fetch(&self, _endpoint: &SensorEndpoint) -> FetchOutcome {
            std::future::pending::<FetchOutcome>().await
        }
    }

    struct SlowSource;

    impl StateSource for SlowSource {
        async fn fetch(&self, endpoint: &SensorEndpoint) -> FetchOutcome {
            tokio::time::sleep(Duration::from_millis(100)).await;
            StubSource.fetch(endpoint).await
        }
    }

    #[derive(Default)]
    struct StubStore {
        content: Mutex<Option<String>>,
        fail_writes: bool,
    }

    impl ReportStore for StubStore {
        async fn write(&self, content: &str) -> Result<(), HubReportError> {
            if self.fail_writes {
                return Err(HubReportError::Storage(Box::new(std::io::Error::from(
                    std::io::ErrorKind::PermissionDenied,
                ))));
            }
            *self.content.lock().unwrap() = Some(content.to_string());
            Ok(())
        }

        async fn read(&self) -> Result<Option<String>, HubReportError> {
            Ok(self.content.lock().unwrap().clone())
        }

        fn location(&self) -> String {
            "stub".to_string()
        }
    }

    fn endpoints() -> Vec<SensorEndpoint> {
        vec![
            SensorEndpoint::new("Air", "http://hub/air").unwrap(),
            SensorEndpoint::new("Eau", "http://hub/eau").unwrap(),
            SensorEndpoint::new("Pression", "http://hub/pression").unwrap(),
        ]
    }

    fn app_with<S>(source: S, store: StubStore) -> Router
    where
        S: StateSource + Send + Sync + 'static,
    {
        let service = PollService::new(source, store, endpoints());
        build(AppState::new(service, Duration::from_millis(200)), None)
    }

    fn app() -> Router {
        app_with(StubSource, StubStore::default())
    }

    async fn fetch_page(app: Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn should_return_ok_when_health_check_called() {
        let (status, body) = fetch_page(app(), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "OK");
    }

    #[tokio::test]
    async fn should_return_not_found_before_first_run() {
        let (status, _) = fetch_page(app(), "/data.txt").await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = fetch_page(app(), "/api/readings").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_run_poll_and_return_readings() {
        let (status, body) = fetch_page(app(), "/run").await;
        assert_eq!(status, StatusCode::OK);

        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["status"], "OK");
        assert_eq!(json["raw"], "Air = 21.5 \u{b0}C\nEau = N/A\nPression = N/A\n");
        let readings = json["readings"].as_array().unwrap();
        assert_eq!(readings.len(), 3);
        assert_eq!(readings[0]["name"], "Air");
        assert_eq!(readings[0]["value"], 21.5);
        assert_eq!(readings[0]["unit"], "\u{b0}C");
        assert!(readings[1]["value"].is_null());
    }

    #[tokio::test]
    async fn should_serve_report_after_run() {
        let app = app();
        let (status, _) = fetch_page(app.clone(), "/run").await;
        assert_eq!(status, StatusCode::OK);

        let (status, body) = fetch_page(app.clone(), "/data.txt").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "Air = 21.5 \u{b0}C\nEau = N/A\nPression = N/A\n");

        let (status, body) = fetch_page(app, "/api/readings").await;
        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json[2]["name"], "Pression");
        assert_eq!(json[2]["raw"], "N/A");
    }

    #[tokio::test]
    async fn should_return_error_status_when_write_fails() {
        let store = StubStore {
            fail_writes: true,
            ..StubStore::default()
        };
        let (status, body) = fetch_page(app_with(StubSource, store), "/run").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["status"], "ERROR");
    }

    #[tokio::test]
    async fn should_return_error_status_when_run_times_out() {
        let (status, body) = fetch_page(app_with(StalledSource, StubStore::default()), "/run").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["status"], "ERROR");
    }

    #[tokio::test]
    async fn should_finish_timed_out_run_in_background() {
        let app = app_with(SlowSource, StubStore::default());

        let (status, body) = fetch_page(app.clone(), "/run").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["status"], "ERROR");

        let (status, body) = fetch_page(app.clone(), "/run").await;
        assert_eq!(status, StatusCode::CONFLICT);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["status"], "RUNNING");

        tokio::time::sleep(Duration::from_millis(300)).await;
        let (status, body) = fetch_page(app, "/data.txt").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "Air = 21.5 \u{b0}C\nEau = N/A\nPression = N/A\n");
    }

    #[test]
    fn should_report_conflict_status_for_running_response() {
        let response = api::run::RunResponse::Running {
            message: "busy".to_string(),
        };
        let response = axum::response::IntoResponse::into_response(response);
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn should_serve_static_files_when_configured() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<h1>sensors</h1>").unwrap();
        let service = PollService::new(StubSource, StubStore::default(), endpoints());
        let app = build(
            AppState::new(service, Duration::from_secs(1)),
            Some(dir.path().to_path_buf()),
        );

        let (status, body) = fetch_page(app, "/index.html").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "<h1>sensors</h1>");
    }
}
