use super::*;
use serde_json::json;

fn save_request() -> ScoreSaveRequest {
    ScoreSaveRequest {
        id: None,
        student_id: 7,
        course_id: 3,
        score: 88.5,
        exam_time: "2024-06-20".to_owned(),
    }
}

// ============================================================
// Save validation
// ============================================================

#[test]
fn valid_insert_passes() {
    assert_eq!(validate_score_save(&save_request()), Ok(()));
}

#[test]
fn valid_update_passes() {
    let mut request = save_request();
    request.id = Some(42);
    assert_eq!(validate_score_save(&request), Ok(()));
}

#[test]
fn update_with_nonpositive_id_is_rejected() {
    let mut request = save_request();
    request.id = Some(0);
    assert!(matches!(
        validate_score_save(&request),
        Err(ApiError::RequestConstruction(_))
    ));
    request.id = Some(-3);
    assert!(validate_score_save(&request).is_err());
}

#[test]
fn missing_student_or_course_is_rejected() {
    let mut request = save_request();
    request.student_id = 0;
    assert!(validate_score_save(&request).is_err());

    let mut request = save_request();
    request.course_id = -1;
    assert!(validate_score_save(&request).is_err());
}

#[test]
fn zero_score_is_a_legal_value() {
    let mut request = save_request();
    request.score = 0.0;
    assert_eq!(validate_score_save(&request), Ok(()));
}

#[test]
fn non_finite_score_is_rejected() {
    let mut request = save_request();
    request.score = f64::NAN;
    assert!(validate_score_save(&request).is_err());
    request.score = f64::INFINITY;
    assert!(validate_score_save(&request).is_err());
}

#[test]
fn blank_exam_time_is_rejected() {
    let mut request = save_request();
    request.exam_time = "   ".to_owned();
    assert!(validate_score_save(&request).is_err());
}

#[test]
fn record_id_must_be_positive() {
    assert_eq!(validate_record_id(1), Ok(()));
    assert!(validate_record_id(0).is_err());
    assert!(validate_record_id(-7).is_err());
}

// ============================================================
// Query building
// ============================================================

#[test]
fn page_query_uses_backend_names() {
    let query = page_query(2, 20);
    assert_eq!(query, vec![
        ("pageNum".to_owned(), "2".to_owned()),
        ("pageSize".to_owned(), "20".to_owned()),
    ]);
}

#[test]
fn page_query_defaults_zero_to_first_page() {
    let query = page_query(0, 0);
    assert_eq!(query, vec![
        ("pageNum".to_owned(), "1".to_owned()),
        ("pageSize".to_owned(), "10".to_owned()),
    ]);
}

#[test]
fn non_blank_trims_and_drops_empty() {
    assert_eq!(non_blank(Some("  math  ")), Some("math".to_owned()));
    assert_eq!(non_blank(Some("   ")), None);
    assert_eq!(non_blank(Some("")), None);
    assert_eq!(non_blank(None), None);
}

// ============================================================
// Payload decoding
// ============================================================

#[test]
fn decode_reads_page_envelope() {
    let page: ScorePage = decode(json!({
        "total": 2,
        "list": [
            {"id": 1, "studentId": 7, "courseId": 3, "score": 91.0, "examTime": "2024-06-20"},
            {"id": 2, "studentId": 8, "courseId": 3, "score": 62.5, "examTime": "2024-06-20"}
        ]
    }))
    .unwrap();
    assert_eq!(page.total, 2);
    assert_eq!(page.list.len(), 2);
}

#[test]
fn decode_reads_scalars_and_lists() {
    let unique: bool = decode(json!(true)).unwrap();
    assert!(unique);
    let courses: Vec<Course> = decode(json!([{"id": 1, "courseName": "Math"}])).unwrap();
    assert_eq!(courses[0].course_name, "Math");
}

#[test]
fn decode_mismatch_is_a_server_error() {
    let outcome: Result<ScorePage, ApiError> = decode(json!("not a page"));
    assert_eq!(
        outcome,
        Err(ApiError::Server { message: "unexpected response shape".to_owned(), status: None })
    );
}

#[test]
fn encode_serializes_requests() {
    let value = encode(&LoginRequest {
        username: "s001".to_owned(),
        password: "pw".to_owned(),
    })
    .unwrap();
    assert_eq!(value, json!({"username": "s001", "password": "pw"}));
}
