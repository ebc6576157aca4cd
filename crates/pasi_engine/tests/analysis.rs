use std::time::Duration;

use pasi_engine::{
    build_invoker, synthetic_result, AnalysisInvoker, AnalysisMode, AnalysisSettings, FailureKind,
    RemoteAnalysisInvoker, SimulatedAnalysisInvoker, SIMULATED_DELAY_MS,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PAYLOAD: &str = "data:image/jpeg;base64,/9j/4AAQ";

fn remote_settings(server: &MockServer) -> AnalysisSettings {
    AnalysisSettings {
        mode: AnalysisMode::Remote,
        endpoint: format!("{}/score", server.uri()),
        ..AnalysisSettings::default()
    }
}

#[tokio::test]
async fn remote_invoker_posts_json_string_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/score"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!(PAYLOAD)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "result": "PASI 6.2" })))
        .expect(1)
        .mount(&server)
        .await;

    let invoker = RemoteAnalysisInvoker::new(remote_settings(&server));
    let result = invoker.invoke(PAYLOAD).await.expect("analysis ok");
    assert_eq!(result.as_str(), "PASI 6.2");
}

#[tokio::test]
async fn remote_invoker_reports_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/score"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let invoker = RemoteAnalysisInvoker::new(remote_settings(&server));
    let err = invoker.invoke(PAYLOAD).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(503));
}

#[tokio::test]
async fn remote_invoker_rejects_non_json_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/score"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let invoker = RemoteAnalysisInvoker::new(remote_settings(&server));
    let err = invoker.invoke(PAYLOAD).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::InvalidBody);
}

#[tokio::test]
async fn remote_invoker_honours_configured_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/score"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_json(json!("late")),
        )
        .mount(&server)
        .await;

    let settings = AnalysisSettings {
        request_timeout_ms: Some(50),
        ..remote_settings(&server)
    };
    let err = RemoteAnalysisInvoker::new(settings)
        .invoke(PAYLOAD)
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::Timeout);
}

#[tokio::test]
async fn remote_invoker_rejects_invalid_endpoint() {
    let settings = AnalysisSettings {
        mode: AnalysisMode::Remote,
        endpoint: "not a url".to_string(),
        ..AnalysisSettings::default()
    };
    let err = RemoteAnalysisInvoker::new(settings)
        .invoke(PAYLOAD)
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::InvalidEndpoint);
}

#[tokio::test]
async fn remote_invoker_rejects_oversized_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/score"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!("0123456789")))
        .mount(&server)
        .await;

    let settings = AnalysisSettings {
        max_response_bytes: 4,
        ..remote_settings(&server)
    };
    let err = RemoteAnalysisInvoker::new(settings)
        .invoke(PAYLOAD)
        .await
        .unwrap_err();
    assert!(matches!(err.kind, FailureKind::TooLarge { max_bytes: 4, .. }));
}

#[tokio::test(start_paused = true)]
async fn simulated_invoker_waits_fixed_delay() {
    let invoker = SimulatedAnalysisInvoker::default();
    let start = tokio::time::Instant::now();

    let result = invoker.invoke(PAYLOAD).await.unwrap();

    assert!(start.elapsed() >= Duration::from_millis(SIMULATED_DELAY_MS));
    assert_eq!(result, synthetic_result());
}

#[tokio::test(start_paused = true)]
async fn simulated_result_ignores_payload_and_has_two_lines() {
    let invoker = SimulatedAnalysisInvoker::new(Duration::from_millis(10));
    let first = invoker.invoke(PAYLOAD).await.unwrap();
    let second = invoker.invoke("data:,").await.unwrap();
    assert_eq!(first, second);

    let lines: Vec<&str> = first.as_str().lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("score"));
    assert!(lines[1].contains("Affected surface"));
}

#[tokio::test(start_paused = true)]
async fn default_settings_select_simulation() {
    let invoker = build_invoker(&AnalysisSettings {
        simulated_delay_ms: 1,
        ..AnalysisSettings::default()
    });
    assert_eq!(invoker.invoke(PAYLOAD).await.unwrap(), synthetic_result());
}
