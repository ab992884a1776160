//! Wire DTOs for the records-portal REST API.
//!
//! DESIGN
//! ======
//! These types mirror the backend's camelCase JSON payloads so serde
//! round-trips stay lossless. Paginated queries arrive as a bare
//! `{total, list}` envelope (no status code), which `ScorePage` decodes
//! verbatim.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Credentials posted to `/auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Payload for the student/teacher registration endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    /// Display name shown in dashboards and score listings.
    pub real_name: String,
}

/// Business payload of a successful login: the session triple.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginData {
    pub token: String,
    pub role: String,
    #[serde(default)]
    pub real_name: String,
}

/// One score row as returned by the paginated score queries.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRecord {
    pub id: i64,
    pub student_id: i64,
    pub course_id: i64,
    pub score: f64,
    /// Exam date as the backend formats it (`YYYY-MM-DD`).
    pub exam_time: String,
    #[serde(default)]
    pub student_name: Option<String>,
    #[serde(default)]
    pub course_name: Option<String>,
}

/// Body of `/score/teacher/save` for both insert and update.
///
/// `id` is `None` on insert; updates carry the record id.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreSaveRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub student_id: i64,
    pub course_id: i64,
    pub score: f64,
    pub exam_time: String,
}

/// Bare list envelope returned by the paginated score queries.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ScorePage {
    #[serde(default)]
    pub total: i64,
    #[serde(default)]
    pub list: Vec<ScoreRecord>,
}

/// A course as listed for filter dropdowns and statistics.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: i64,
    pub course_name: String,
}

/// One bucket of the per-course score-segment statistic.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentCount {
    /// Human-readable bucket label (e.g. `"90-100"`).
    pub segment: String,
    pub count: i64,
}

/// Profile data for the signed-in teacher.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeacherInfo {
    pub id: i64,
    #[serde(default)]
    pub real_name: String,
    #[serde(default)]
    pub teacher_no: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    /// Courses this teacher is responsible for.
    #[serde(default)]
    pub courses: Vec<Course>,
}

/// A student row as returned by the per-course student listings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentItem {
    pub id: i64,
    #[serde(default)]
    pub real_name: String,
    #[serde(default)]
    pub student_no: Option<String>,
    #[serde(default)]
    pub class_name: Option<String>,
}
