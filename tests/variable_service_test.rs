//! Tests for VariableService

mod common;

use std::sync::Arc;

use glvars::application::services::VariableService;
use glvars::application::ApplicationError;
use glvars::util::testing;

use common::{settings, MockHttpClient, RecordingTrace, API};

fn service(mock: &Arc<MockHttpClient>, project: &str) -> VariableService {
    testing::init_test_setup();
    VariableService::new(mock.clone(), Arc::new(settings(project)))
}

#[test]
fn given_variables_array_when_fetching_then_returns_mapping() {
    // Arrange
    let url = format!("{API}/projects/42/variables");
    let mock = Arc::new(MockHttpClient::new().respond(
        &url,
        200,
        r#"[{"Key":"A","Value":"1"},{"Key":"B","Value":"2"}]"#,
    ));
    let service = service(&mock, "42");

    // Act
    let vars = service.fetch_variables(&url).unwrap();

    // Assert
    assert_eq!(vars.len(), 2);
    assert_eq!(vars.get("A"), Some("1"));
    assert_eq!(vars.get("B"), Some("2"));
}

#[test]
fn given_gitlab_payload_when_fetching_then_ignores_extra_fields() {
    let url = format!("{API}/projects/42/variables");
    let mock = Arc::new(MockHttpClient::new().respond(
        &url,
        200,
        r#"[{"variable_type":"env_var","key":"DB_URL","value":"postgres://db","protected":true,"masked":false,"raw":false,"environment_scope":"*","description":null}]"#,
    ));
    let service = service(&mock, "42");

    let vars = service.fetch_variables(&url).unwrap();

    assert_eq!(vars.get("DB_URL"), Some("postgres://db"));
}

#[test]
fn given_duplicate_keys_when_fetching_then_last_occurrence_wins() {
    let url = format!("{API}/projects/42/variables");
    let mock = Arc::new(MockHttpClient::new().respond(
        &url,
        200,
        r#"[{"key":"A","value":"first"},{"key":"A","value":"second"}]"#,
    ));
    let service = service(&mock, "42");

    let vars = service.fetch_variables(&url).unwrap();

    assert_eq!(vars.len(), 1);
    assert_eq!(vars.get("A"), Some("second"));
}

#[test]
fn given_request_when_fetching_then_sends_private_token_header() {
    let url = format!("{API}/projects/42/variables");
    let mock = Arc::new(MockHttpClient::new().respond(&url, 200, "[]"));
    let service = service(&mock, "42");

    service.fetch_variables(&url).unwrap();

    let requests = mock.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(
        requests[0].headers,
        vec![("PRIVATE-TOKEN".to_string(), "secret-token".to_string())]
    );
}

#[test]
fn given_non_200_status_when_fetching_then_returns_empty_mapping() {
    for status in [401, 403, 404, 500] {
        let url = format!("{API}/projects/42/variables");
        let mock = Arc::new(MockHttpClient::new().respond(
            &url,
            status,
            r#"{"message":"nope"}"#,
        ));
        let service = service(&mock, "42");

        let vars = service.fetch_variables(&url).unwrap();

        assert!(vars.is_empty(), "status {status} should yield no variables");
    }
}

#[test]
fn given_non_200_with_garbage_body_when_fetching_then_body_is_not_decoded() {
    let url = format!("{API}/projects/42/variables");
    let mock = Arc::new(MockHttpClient::new().respond(&url, 502, "<html>Bad Gateway</html>"));
    let service = service(&mock, "42");

    assert!(service.fetch_variables(&url).unwrap().is_empty());
}

#[test]
fn given_null_body_when_fetching_then_returns_empty_mapping() {
    let url = format!("{API}/projects/42/variables");
    let mock = Arc::new(MockHttpClient::new().respond(&url, 200, "null"));
    let service = service(&mock, "42");

    assert!(service.fetch_variables(&url).unwrap().is_empty());
}

#[test]
fn given_malformed_json_when_fetching_then_returns_decode_error() {
    let url = format!("{API}/projects/42/variables");
    let mock = Arc::new(MockHttpClient::new().respond(&url, 200, r#"[{"key":"A""#));
    let service = service(&mock, "42");

    let err = service.fetch_variables(&url).unwrap_err();

    assert!(matches!(err, ApplicationError::Decode { url: ref u, .. } if *u == url));
}

#[test]
fn given_connection_failure_when_fetching_then_returns_transport_error() {
    let url = format!("{API}/projects/42/variables");
    let mock = Arc::new(MockHttpClient::new().fail(&url, "connection refused"));
    let service = service(&mock, "42");

    let err = service.fetch_variables(&url).unwrap_err();

    assert!(matches!(err, ApplicationError::Transport(ref t) if t.url == url));
}

// ============================================================
// resolve_group_id() tests
// ============================================================

#[test]
fn given_project_detail_when_resolving_group_then_returns_namespace_id() {
    let mock = Arc::new(MockHttpClient::new().respond(
        &format!("{API}/projects/42"),
        200,
        r#"{"id":42,"name":"app","path_with_namespace":"grp/app","namespace":{"id":7,"kind":"group"}}"#,
    ));
    let service = service(&mock, "42");

    assert_eq!(service.resolve_group_id().unwrap(), Some(7));
}

#[test]
fn given_namespaced_project_when_resolving_group_then_path_is_encoded() {
    let mock = Arc::new(MockHttpClient::new().respond(
        &format!("{API}/projects/grp%2Fsub%2Fapp"),
        200,
        r#"{"id":42,"path_with_namespace":"grp/sub/app","namespace":{"id":9}}"#,
    ));
    let service = service(&mock, "grp/sub/app");

    assert_eq!(service.resolve_group_id().unwrap(), Some(9));
    assert_eq!(mock.urls(), vec![format!("{API}/projects/grp%2Fsub%2Fapp")]);
}

#[test]
fn given_project_detail_without_id_when_resolving_group_then_still_returns_namespace_id() {
    let mock = Arc::new(MockHttpClient::new().respond(
        &format!("{API}/projects/1"),
        200,
        r#"{"namespace":{"id":3}}"#,
    ));
    let service = service(&mock, "1");

    assert_eq!(service.resolve_group_id().unwrap(), Some(3));
}

#[test]
fn given_project_lookup_not_found_when_resolving_group_then_returns_none() {
    let mock = Arc::new(MockHttpClient::new());
    let service = service(&mock, "42");

    assert_eq!(service.resolve_group_id().unwrap(), None);
}

#[test]
fn given_project_without_namespace_when_resolving_group_then_returns_none() {
    let mock = Arc::new(MockHttpClient::new().respond(
        &format!("{API}/projects/42"),
        200,
        r#"{"id":42}"#,
    ));
    let service = service(&mock, "42");

    assert_eq!(service.resolve_group_id().unwrap(), None);
}

#[test]
fn given_malformed_project_detail_when_resolving_group_then_returns_decode_error() {
    let mock = Arc::new(MockHttpClient::new().respond(&format!("{API}/projects/42"), 200, "{"));
    let service = service(&mock, "42");

    assert!(matches!(
        service.resolve_group_id().unwrap_err(),
        ApplicationError::Decode { .. }
    ));
}

// ============================================================
// collect() tests
// ============================================================

#[test]
fn given_group_and_project_variables_when_collecting_then_project_overrides_group() {
    // Arrange
    let mock = Arc::new(
        MockHttpClient::new()
            .respond(
                &format!("{API}/projects/42"),
                200,
                r#"{"id":42,"namespace":{"id":7}}"#,
            )
            .respond(
                &format!("{API}/groups/7/variables"),
                200,
                r#"[{"key":"A","value":"1"}]"#,
            )
            .respond(
                &format!("{API}/projects/42/variables"),
                200,
                r#"[{"key":"A","value":"9"},{"key":"B","value":"2"}]"#,
            ),
    );
    let service = service(&mock, "42");

    // Act
    let vars = service.collect().unwrap();

    // Assert
    assert_eq!(vars.len(), 2);
    assert_eq!(vars.get("A"), Some("9"));
    assert_eq!(vars.get("B"), Some("2"));
    assert_eq!(
        mock.urls(),
        vec![
            format!("{API}/projects/42"),
            format!("{API}/groups/7/variables"),
            format!("{API}/projects/42/variables"),
        ]
    );
}

#[test]
fn given_unresolvable_group_when_collecting_then_skips_group_request() {
    let mock = Arc::new(MockHttpClient::new().respond(
        &format!("{API}/projects/42/variables"),
        200,
        r#"[{"key":"B","value":"2"}]"#,
    ));
    let service = service(&mock, "42");

    let vars = service.collect().unwrap();

    assert_eq!(vars.get("B"), Some("2"));
    assert_eq!(
        mock.urls(),
        vec![
            format!("{API}/projects/42"),
            format!("{API}/projects/42/variables"),
        ]
    );
}

#[test]
fn given_forbidden_group_variables_when_collecting_then_keeps_project_variables() {
    let mock = Arc::new(
        MockHttpClient::new()
            .respond(
                &format!("{API}/projects/42"),
                200,
                r#"{"id":42,"namespace":{"id":7}}"#,
            )
            .respond(
                &format!("{API}/groups/7/variables"),
                403,
                r#"{"message":"403 Forbidden"}"#,
            )
            .respond(
                &format!("{API}/projects/42/variables"),
                200,
                r#"[{"key":"B","value":"2"}]"#,
            ),
    );
    let service = service(&mock, "42");

    let vars = service.collect().unwrap();

    assert_eq!(vars.len(), 1);
    assert_eq!(vars.get("B"), Some("2"));
}

#[test]
fn given_transport_failure_on_group_when_collecting_then_stops_before_project_request() {
    let mock = Arc::new(
        MockHttpClient::new()
            .respond(
                &format!("{API}/projects/42"),
                200,
                r#"{"id":42,"namespace":{"id":7}}"#,
            )
            .fail(&format!("{API}/groups/7/variables"), "timed out"),
    );
    let service = service(&mock, "42");

    let err = service.collect().unwrap_err();

    assert!(matches!(err, ApplicationError::Transport(_)));
    assert_eq!(mock.urls().len(), 2);
}

// ============================================================
// verbose request trace
// ============================================================

fn full_mock() -> Arc<MockHttpClient> {
    Arc::new(
        MockHttpClient::new()
            .respond(
                &format!("{API}/projects/42"),
                200,
                r#"{"id":42,"namespace":{"id":7}}"#,
            )
            .respond(&format!("{API}/groups/7/variables"), 403, "{}")
            .respond(&format!("{API}/projects/42/variables"), 200, "[]"),
    )
}

#[test]
fn given_verbose_when_collecting_then_traces_every_request_with_status() {
    testing::init_test_setup();
    let tracer = Arc::new(RecordingTrace::default());
    let service = VariableService::new(full_mock(), Arc::new(settings("42").with_verbose(true)))
        .with_tracer(tracer.clone());

    service.collect().unwrap();

    assert_eq!(
        tracer.lines(),
        vec![
            format!("GET {API}/projects/42 200"),
            format!("GET {API}/groups/7/variables 403"),
            format!("GET {API}/projects/42/variables 200"),
        ]
    );
}

#[test]
fn given_not_verbose_when_collecting_then_traces_nothing() {
    testing::init_test_setup();
    let tracer = Arc::new(RecordingTrace::default());
    let service = VariableService::new(full_mock(), Arc::new(settings("42")))
        .with_tracer(tracer.clone());

    service.collect().unwrap();

    assert!(tracer.lines().is_empty());
}
