use super::*;
use serde_json::json;

#[test]
fn plain_string_body_is_shown_verbatim() {
    assert_eq!(summarize_upload(&json!("12 rows imported")), "12 rows imported");
}

#[test]
fn message_field_wins_over_counts() {
    let result = json!({"msg": "partial import", "successCount": 10, "failCount": 2});
    assert_eq!(summarize_upload(&result), "partial import");
}

#[test]
fn counts_are_formatted() {
    assert_eq!(
        summarize_upload(&json!({"successCount": 10, "failCount": 2})),
        "imported 10 rows, 2 failed"
    );
    assert_eq!(summarize_upload(&json!({"successCount": 7})), "imported 7 rows");
}

#[test]
fn unknown_shapes_fall_back_to_generic_text() {
    assert_eq!(summarize_upload(&json!({"rows": 3})), "import finished");
    assert_eq!(summarize_upload(&json!(null)), "import finished");
}
