use super::*;

#[test]
fn login_data_decodes_camel_case_fields() {
    let data: LoginData = serde_json::from_value(serde_json::json!({
        "token": "tok-1",
        "role": "student",
        "realName": "Wang Fang"
    }))
    .expect("login data");
    assert_eq!(data.token, "tok-1");
    assert_eq!(data.role, "student");
    assert_eq!(data.real_name, "Wang Fang");
}

#[test]
fn login_data_tolerates_missing_real_name() {
    let data: LoginData = serde_json::from_value(serde_json::json!({
        "token": "tok-1",
        "role": "teacher"
    }))
    .expect("login data");
    assert_eq!(data.real_name, "");
}

#[test]
fn score_page_decodes_bare_list_envelope() {
    let page: ScorePage = serde_json::from_value(serde_json::json!({
        "total": 2,
        "list": [
            {"id": 1, "studentId": 11, "courseId": 3, "score": 88.5, "examTime": "2024-06-20"},
            {"id": 2, "studentId": 12, "courseId": 3, "score": 91.0, "examTime": "2024-06-20",
             "studentName": "Li Lei", "courseName": "Calculus"}
        ]
    }))
    .expect("score page");
    assert_eq!(page.total, 2);
    assert_eq!(page.list.len(), 2);
    assert_eq!(page.list[0].student_name, None);
    assert_eq!(page.list[1].course_name.as_deref(), Some("Calculus"));
}

#[test]
fn score_page_defaults_missing_fields() {
    let page: ScorePage = serde_json::from_value(serde_json::json!({"total": 0})).expect("page");
    assert!(page.list.is_empty());
}

#[test]
fn score_save_request_omits_absent_id() {
    let body = serde_json::to_value(ScoreSaveRequest {
        id: None,
        student_id: 7,
        course_id: 2,
        score: 73.0,
        exam_time: "2024-01-15".to_owned(),
    })
    .expect("serialize");
    assert!(body.get("id").is_none());
    assert_eq!(body.get("studentId"), Some(&serde_json::json!(7)));
    assert_eq!(body.get("examTime"), Some(&serde_json::json!("2024-01-15")));
}

#[test]
fn score_save_request_keeps_id_on_update() {
    let body = serde_json::to_value(ScoreSaveRequest {
        id: Some(42),
        student_id: 7,
        course_id: 2,
        score: 73.0,
        exam_time: "2024-01-15".to_owned(),
    })
    .expect("serialize");
    assert_eq!(body.get("id"), Some(&serde_json::json!(42)));
}

#[test]
fn course_uses_camel_case_name() {
    let course: Course =
        serde_json::from_value(serde_json::json!({"id": 5, "courseName": "Physics"})).expect("course");
    assert_eq!(course.course_name, "Physics");
}

#[test]
fn teacher_info_defaults_optional_profile_fields() {
    let info: TeacherInfo =
        serde_json::from_value(serde_json::json!({"id": 9, "realName": "Zhao Min"})).expect("info");
    assert_eq!(info.department, None);
    assert!(info.courses.is_empty());
}
