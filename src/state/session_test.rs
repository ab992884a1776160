use super::*;

// =============================================================
// Role parsing / normalization
// =============================================================

#[test]
fn role_parse_case_folds_and_trims() {
    assert_eq!(Role::parse("Teacher "), Some(Role::Teacher));
    assert_eq!(Role::parse("  STUDENT"), Some(Role::Student));
    assert_eq!(Role::parse("student"), Some(Role::Student));
}

#[test]
fn role_parse_rejects_unknown_values() {
    assert_eq!(Role::parse("admin"), None);
    assert_eq!(Role::parse(""), None);
    assert_eq!(Role::parse("   "), None);
}

#[test]
fn role_home_paths() {
    assert_eq!(Role::Student.home_path(), "/student/dashboard");
    assert_eq!(Role::Teacher.home_path(), "/teacher/dashboard");
}

#[test]
fn role_as_str_round_trips_through_parse() {
    assert_eq!(Role::parse(Role::Student.as_str()), Some(Role::Student));
    assert_eq!(Role::parse(Role::Teacher.as_str()), Some(Role::Teacher));
}

// =============================================================
// Session invariants
// =============================================================

#[test]
fn whitespace_token_counts_as_absent() {
    let session = Session { token: "   ".to_owned(), ..Session::default() };
    assert!(!session.has_token());
}

#[test]
fn effective_role_requires_token() {
    let session = Session { token: String::new(), role: "teacher".to_owned(), ..Session::default() };
    assert_eq!(session.effective_role(), None);
}

#[test]
fn effective_role_normalizes_stored_role() {
    let session = Session {
        token: "tok".to_owned(),
        role: " Teacher ".to_owned(),
        ..Session::default()
    };
    assert_eq!(session.effective_role(), Some(Role::Teacher));
}

#[test]
fn effective_role_none_for_unknown_role_even_with_token() {
    let session = Session { token: "tok".to_owned(), role: "admin".to_owned(), ..Session::default() };
    assert_eq!(session.effective_role(), None);
}

// =============================================================
// Blob / individual-key merge
// =============================================================

#[test]
fn merge_prefers_blob_fields() {
    let (session, purge) = merge_stored(
        Some(r#"{"token":"blob-tok","role":"student","realName":"Blob Name"}"#),
        Some("key-tok".to_owned()),
        Some("teacher".to_owned()),
        Some("Key Name".to_owned()),
    );
    assert!(!purge);
    assert_eq!(session.token, "blob-tok");
    assert_eq!(session.role, "student");
    assert_eq!(session.real_name, "Blob Name");
}

#[test]
fn merge_fills_missing_blob_fields_from_keys() {
    let (session, purge) = merge_stored(
        Some(r#"{"token":"blob-tok"}"#),
        None,
        Some("student".to_owned()),
        Some("Key Name".to_owned()),
    );
    assert!(!purge);
    assert_eq!(session.token, "blob-tok");
    assert_eq!(session.role, "student");
    assert_eq!(session.real_name, "Key Name");
}

#[test]
fn merge_without_blob_uses_individual_keys() {
    let (session, purge) =
        merge_stored(None, Some("tok".to_owned()), Some("teacher".to_owned()), None);
    assert!(!purge);
    assert_eq!(session.token, "tok");
    assert_eq!(session.role, "teacher");
    assert_eq!(session.real_name, "");
}

#[test]
fn malformed_blob_is_purged_without_error() {
    let (session, purge) = merge_stored(Some("{not json"), None, None, None);
    assert!(purge);
    assert_eq!(session, Session::default());
    assert_eq!(session.effective_role(), None);
}

#[test]
fn malformed_blob_still_falls_back_to_individual_keys() {
    let (session, purge) = merge_stored(Some("]["), Some("tok".to_owned()), None, None);
    assert!(purge);
    assert_eq!(session.token, "tok");
}

#[test]
fn blob_with_wrong_value_types_is_purged() {
    let (_, purge) = merge_stored(Some(r#"{"token":42}"#), None, None, None);
    assert!(purge);
}
