mod common;

use httpmock::prelude::*;
use hybrid_tester::{ConfigUpdate, Outcome, Provider, probe};
use serde_json::json;

const SWITCH: &str = r#"{"action": "update-config", "config": {"provider": "python"}}"#;
const RESTORE: &str =
    r#"{"action": "update-config", "config": {"provider": "hybrid", "primaryProvider": "python"}}"#;

#[tokio::test]
async fn switches_and_restores() {
    let server = MockServer::start_async().await;
    let switch = server
        .mock_async(|when, then| {
            when.method(POST).path("/api/hybrid/status").json_body_partial(SWITCH);
            then.status(200).json_body(common::config_echo("python"));
        })
        .await;
    let restore = server
        .mock_async(|when, then| {
            when.method(POST).path("/api/hybrid/status").json_body_partial(RESTORE);
            then.status(200).json_body(common::config_echo("hybrid"));
        })
        .await;

    let mut out = common::console();
    let report = probe::config_change(
        &common::client_for(&server),
        &mut out,
        ConfigUpdate::hybrid_default(),
    )
    .await
    .unwrap();

    switch.assert_async().await;
    restore.assert_async().await;
    let text = out.text();
    assert!(text.contains("설정 변경 성공: True"));
    assert!(text.contains("새 설정: python"));
    assert!(text.contains("✅ 설정 변경 테스트 성공"));
    assert_eq!(report.outcome, Outcome::Passed);
}

#[tokio::test]
async fn failed_restore_is_reported_after_attempt() {
    let server = MockServer::start_async().await;
    let switch = server
        .mock_async(|when, then| {
            when.method(POST).path("/api/hybrid/status").json_body_partial(SWITCH);
            then.status(200).json_body(common::config_echo("python"));
        })
        .await;
    let restore = server
        .mock_async(|when, then| {
            when.method(POST).path("/api/hybrid/status").json_body_partial(RESTORE);
            then.status(500)
                .json_body(json!({"success": false, "error": "Internal server error"}));
        })
        .await;

    let mut out = common::console();
    let report = probe::config_change(
        &common::client_for(&server),
        &mut out,
        ConfigUpdate::hybrid_default(),
    )
    .await
    .unwrap();

    switch.assert_async().await;
    restore.assert_async().await;
    let text = out.text();
    assert!(text.contains("설정 변경 성공: True"));
    assert!(text.contains("❌ 하이브리드 복원 실패"));
    assert!(!text.contains("✅"));
    assert_eq!(report.outcome, Outcome::Failed);
}

#[tokio::test]
async fn rejected_switch_skips_restore() {
    let server = MockServer::start_async().await;
    let switch = server
        .mock_async(|when, then| {
            when.method(POST).path("/api/hybrid/status").json_body_partial(SWITCH);
            then.status(400).body("{\"success\":false,\"error\":\"Invalid action\"}");
        })
        .await;
    let restore = server
        .mock_async(|when, then| {
            when.method(POST).path("/api/hybrid/status").json_body_partial(RESTORE);
            then.status(200).json_body(common::config_echo("hybrid"));
        })
        .await;

    let mut out = common::console();
    let report = probe::config_change(
        &common::client_for(&server),
        &mut out,
        ConfigUpdate::hybrid_default(),
    )
    .await
    .unwrap();

    switch.assert_async().await;
    assert_eq!(restore.hits_async().await, 0);
    assert!(out.text().contains("❌ 설정 변경 실패: {\"success\":false,\"error\":\"Invalid action\"}"));
    assert_eq!(report.outcome, Outcome::Failed);
}

#[tokio::test]
async fn unexpected_echo_still_restores() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/hybrid/status").json_body_partial(SWITCH);
            then.status(200).json_body(json!({"success": true}));
        })
        .await;
    let restore = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/hybrid/status")
                .json_body_partial(r#"{"config": {"provider": "aws"}}"#);
            then.status(200).json_body(common::config_echo("aws"));
        })
        .await;

    let mut out = common::console();
    let report = probe::config_change(
        &common::client_for(&server),
        &mut out,
        ConfigUpdate::only(Provider::Aws),
    )
    .await
    .unwrap();

    restore.assert_async().await;
    let text = out.text();
    assert!(text.contains("⚠️ 새 설정이 응답에 없음"));
    assert!(text.contains("✅ 설정 변경 테스트 성공"));
    assert_eq!(report.outcome, Outcome::Passed);
}
