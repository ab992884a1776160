use super::*;
use serde_json::json;

// ============================================================
// Base URL resolution
// ============================================================

#[test]
fn base_url_falls_back_when_unconfigured() {
    assert_eq!(base_url_from(None), "/api");
}

#[test]
fn base_url_falls_back_when_blank() {
    assert_eq!(base_url_from(Some("")), "/api");
    assert_eq!(base_url_from(Some("   ")), "/api");
}

#[test]
fn base_url_uses_configured_value_trimmed() {
    assert_eq!(base_url_from(Some("http://localhost:8080/api")), "http://localhost:8080/api");
    assert_eq!(base_url_from(Some(" /v2 ")), "/v2");
}

#[test]
fn base_url_is_never_empty() {
    assert!(!base_url().is_empty());
}

#[test]
fn join_url_concatenates() {
    assert_eq!(join_url("/api", "/auth/login"), "/api/auth/login");
    assert_eq!(join_url("http://localhost:8080/api", "/score/student"),
        "http://localhost:8080/api/score/student");
}

// ============================================================
// Auth header planning
// ============================================================

#[test]
fn auth_free_paths_are_exact_matches() {
    assert!(is_auth_free("/auth/login"));
    assert!(is_auth_free("/auth/register/student"));
    assert!(is_auth_free("/auth/register/teacher"));
    assert!(!is_auth_free("/auth/login/extra"));
    assert!(!is_auth_free("/auth"));
    assert!(!is_auth_free("/score/student"));
}

#[test]
fn auth_free_path_never_gets_header_even_with_token() {
    assert_eq!(auth_header_for("/auth/login", "stale-token"), None);
    assert_eq!(auth_header_for("/auth/register/teacher", "tok"), None);
}

#[test]
fn protected_path_gets_bearer_header_when_token_present() {
    assert_eq!(
        auth_header_for("/score/student", "abc123"),
        Some("Bearer abc123".to_owned())
    );
}

#[test]
fn protected_path_gets_no_header_without_usable_token() {
    assert_eq!(auth_header_for("/score/student", ""), None);
    assert_eq!(auth_header_for("/score/student", "   "), None);
}

#[test]
fn bearer_token_is_trimmed() {
    assert_eq!(auth_header_for("/teacher/info", "  tok  "), Some("Bearer tok".to_owned()));
}

// ============================================================
// Envelope classification
// ============================================================

#[test]
fn list_envelope_passes_through_verbatim() {
    let body = json!({"total": 2, "list": [{"id": 1}, {"id": 2}]});
    assert_eq!(classify_body(body.clone()), Ok(body));
}

#[test]
fn list_envelope_matches_on_either_key() {
    let by_list = json!({"list": []});
    assert_eq!(classify_body(by_list.clone()), Ok(by_list));
    let by_total = json!({"total": 0});
    assert_eq!(classify_body(by_total.clone()), Ok(by_total));
}

#[test]
fn list_envelope_wins_over_coded_keys() {
    // A paginated body that also happens to carry a failing code must
    // still be handed back untouched.
    let body = json!({"total": 1, "list": [], "code": 500, "msg": "ignored"});
    assert_eq!(classify_body(body.clone()), Ok(body));
}

#[test]
fn coded_success_unwraps_data() {
    let body = json!({"code": 200, "msg": "ok", "data": {"token": "t", "role": "student"}});
    assert_eq!(classify_body(body), Ok(json!({"token": "t", "role": "student"})));
}

#[test]
fn coded_success_with_null_data_yields_null() {
    assert_eq!(classify_body(json!({"code": 200, "data": null})), Ok(json!(null)));
}

#[test]
fn coded_success_without_data_yields_whole_object() {
    let body = json!({"code": 200, "msg": "saved"});
    assert_eq!(classify_body(body.clone()), Ok(body));
}

#[test]
fn coded_failure_rejects_with_server_message() {
    let body = json!({"code": 500, "msg": "duplicate score record"});
    assert_eq!(
        classify_body(body),
        Err(ApiError::Business("duplicate score record".to_owned()))
    );
}

#[test]
fn coded_failure_without_msg_uses_fallback() {
    assert_eq!(
        classify_body(json!({"code": 403})),
        Err(ApiError::Business(BUSINESS_FALLBACK_MSG.to_owned()))
    );
    assert_eq!(
        classify_body(json!({"code": 400, "msg": 12})),
        Err(ApiError::Business(BUSINESS_FALLBACK_MSG.to_owned()))
    );
}

#[test]
fn non_envelope_bodies_are_opaque() {
    let array = json!([1, 2, 3]);
    assert_eq!(classify_body(array.clone()), Ok(array));
    let string = json!("plain");
    assert_eq!(classify_body(string.clone()), Ok(string));
    let number = json!(42);
    assert_eq!(classify_body(number.clone()), Ok(number));
    let object = json!({"anything": true});
    assert_eq!(classify_body(object.clone()), Ok(object));
}

#[test]
fn non_numeric_code_is_opaque_not_coded() {
    let body = json!({"code": "success", "msg": "hi"});
    assert_eq!(classify_body(body.clone()), Ok(body));
}

// ============================================================
// Status mapping
// ============================================================

#[test]
fn status_401_maps_to_unauthorized() {
    let err = error_for_status(401, None);
    assert!(matches!(err, ApiError::Unauthorized(_)));
    assert_eq!(err.status(), Some(401));
    assert_eq!(err.message(), SESSION_EXPIRED_MSG);
}

#[test]
fn status_403_maps_to_forbidden() {
    let err = error_for_status(403, None);
    assert!(matches!(err, ApiError::Forbidden(_)));
    assert_eq!(err.status(), Some(403));
    assert_eq!(err.message(), FORBIDDEN_MSG);
}

#[test]
fn status_404_maps_to_not_found() {
    let err = error_for_status(404, None);
    assert!(matches!(err, ApiError::NotFound(_)));
    assert_eq!(err.status(), Some(404));
    assert_eq!(err.message(), NOT_FOUND_MSG);
}

#[test]
fn other_statuses_map_to_server_error() {
    let err = error_for_status(500, None);
    assert_eq!(err, ApiError::Server { message: SERVER_ERROR_MSG.to_owned(), status: Some(500) });
    let err = error_for_status(502, None);
    assert_eq!(err.status(), Some(502));
}

#[test]
fn server_supplied_message_is_preferred() {
    let err = error_for_status(403, Some("scores are locked".to_owned()));
    assert_eq!(err.message(), "scores are locked");
    let err = error_for_status(500, Some("boom".to_owned()));
    assert_eq!(err.message(), "boom");
}

#[test]
fn extract_msg_reads_json_error_bodies() {
    assert_eq!(extract_msg(r#"{"code":500,"msg":"oops"}"#), Some("oops".to_owned()));
    assert_eq!(extract_msg(r#"{"code":500}"#), None);
    assert_eq!(extract_msg(r#"{"msg":7}"#), None);
    assert_eq!(extract_msg("<html>bad gateway</html>"), None);
    assert_eq!(extract_msg(""), None);
}

// ============================================================
// Error taxonomy surface
// ============================================================

#[test]
fn statusless_variants_report_none() {
    assert_eq!(ApiError::RequestConstruction("x".into()).status(), None);
    assert_eq!(ApiError::Timeout(TIMEOUT_MSG.to_owned()).status(), None);
    assert_eq!(ApiError::Business("x".into()).status(), None);
    assert_eq!(ApiError::Server { message: "x".into(), status: None }.status(), None);
}

#[test]
fn message_matches_display() {
    let err = ApiError::Business("no data".to_owned());
    assert_eq!(err.message(), "no data");
    assert_eq!(err.to_string(), "no data");
    let err = ApiError::Server { message: "bad gateway".to_owned(), status: Some(502) };
    assert_eq!(err.to_string(), "bad gateway");
}
