//! Typed endpoint surface.
//!
//! One function per backend operation, all funneled through the
//! pipeline in [`crate::net::http`]. Parameter validation that the
//! backend would reject anyway happens here, before anything touches
//! the network. Query parameters use the backend's camelCase names.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde_json::Value;

use crate::net::http::{self, ApiError};
use crate::net::types::{
    Course, LoginData, LoginRequest, RegisterRequest, ScorePage, ScoreSaveRequest, SegmentCount,
    StudentItem, TeacherInfo,
};

const DEFAULT_PAGE: u32 = 1;
const DEFAULT_PAGE_SIZE: u32 = 10;

// ------------------------------------------------------------------
// Auth
// ------------------------------------------------------------------

/// Exchange credentials for a token/role pair.
pub async fn login(request: &LoginRequest) -> Result<LoginData, ApiError> {
    decode(http::post("/auth/login", &encode(request)?).await?)
}

/// Self-service student account creation.
pub async fn register_student(request: &RegisterRequest) -> Result<(), ApiError> {
    http::post("/auth/register/student", &encode(request)?).await.map(|_| ())
}

/// Self-service teacher account creation.
pub async fn register_teacher(request: &RegisterRequest) -> Result<(), ApiError> {
    http::post("/auth/register/teacher", &encode(request)?).await.map(|_| ())
}

// ------------------------------------------------------------------
// Scores
// ------------------------------------------------------------------

/// Page of the signed-in student's own scores, optionally filtered by
/// course name.
pub async fn student_scores(
    page_num: u32,
    page_size: u32,
    course_name: Option<&str>,
) -> Result<ScorePage, ApiError> {
    let mut query = page_query(page_num, page_size);
    if let Some(name) = non_blank(course_name) {
        query.push(("courseName".to_owned(), name));
    }
    decode(http::get("/score/student", &query).await?)
}

/// Page of scores across the signed-in teacher's courses.
pub async fn teacher_scores(
    page_num: u32,
    page_size: u32,
    student_name: Option<&str>,
    course_id: Option<i64>,
) -> Result<ScorePage, ApiError> {
    let mut query = page_query(page_num, page_size);
    if let Some(name) = non_blank(student_name) {
        query.push(("studentName".to_owned(), name));
    }
    if let Some(id) = course_id {
        query.push(("courseId".to_owned(), id.to_string()));
    }
    decode(http::get("/score/teacher", &query).await?)
}

/// Create or update one score record (the backend keys off the
/// presence of `id`).
pub async fn save_score(request: &ScoreSaveRequest) -> Result<(), ApiError> {
    validate_score_save(request)?;
    http::post("/score/teacher/save", &encode(request)?).await.map(|_| ())
}

/// Delete one score record by id.
pub async fn delete_score(id: i64) -> Result<(), ApiError> {
    validate_record_id(id)?;
    http::delete(&format!("/score/teacher/{id}")).await.map(|_| ())
}

/// Whether a (student, course) pair is still free of a score record.
pub async fn check_score_unique(student_id: i64, course_id: i64) -> Result<bool, ApiError> {
    if student_id <= 0 || course_id <= 0 {
        return Err(invalid("student and course are required"));
    }
    let query = [
        ("studentId".to_owned(), student_id.to_string()),
        ("courseId".to_owned(), course_id.to_string()),
    ];
    decode(http::get("/score/teacher/check-unique", &query).await?)
}

/// Courses taught by the signed-in teacher.
pub async fn teacher_courses() -> Result<Vec<Course>, ApiError> {
    decode(http::get("/score/teacher/courses", &[]).await?)
}

/// Courses the signed-in student has scores in.
pub async fn student_courses() -> Result<Vec<Course>, ApiError> {
    decode(http::get("/score/student/courses", &[]).await?)
}

// ------------------------------------------------------------------
// Teacher directory
// ------------------------------------------------------------------

/// Profile of the signed-in teacher.
pub async fn teacher_info() -> Result<TeacherInfo, ApiError> {
    decode(http::get("/teacher/info", &[]).await?)
}

/// Students enrolled in one of the signed-in teacher's courses.
pub async fn students_by_course(course_id: i64) -> Result<Vec<StudentItem>, ApiError> {
    validate_record_id(course_id)?;
    let query = [("courseId".to_owned(), course_id.to_string())];
    decode(http::get("/teacher/students-by-course", &query).await?)
}

// ------------------------------------------------------------------
// Files and statistics
// ------------------------------------------------------------------

/// Bulk score import. The backend reads the multipart field `file`.
#[cfg(feature = "csr")]
pub async fn upload_score_file(file: &web_sys::File) -> Result<Value, ApiError> {
    let form = web_sys::FormData::new()
        .map_err(|_| invalid("could not build the upload form"))?;
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(|_| invalid("could not attach the selected file"))?;
    http::post_multipart("/file/upload/score", form).await
}

/// Excel export of score records, as raw bytes for a client-side
/// download.
pub async fn export_score_excel(course_id: Option<i64>) -> Result<Vec<u8>, ApiError> {
    let mut query = Vec::new();
    if let Some(id) = course_id {
        query.push(("courseId".to_owned(), id.to_string()));
    }
    http::get_bytes("/export/score/excel", &query).await
}

/// Score distribution buckets for one course.
pub async fn score_segments(course_id: i64) -> Result<Vec<SegmentCount>, ApiError> {
    validate_record_id(course_id)?;
    let query = [("courseId".to_owned(), course_id.to_string())];
    decode(http::get("/stat/score/segment", &query).await?)
}

// ------------------------------------------------------------------
// Helpers
// ------------------------------------------------------------------

fn encode<T: serde::Serialize>(value: &T) -> Result<Value, ApiError> {
    serde_json::to_value(value).map_err(|e| ApiError::RequestConstruction(e.to_string()))
}

/// Decode an unwrapped payload into its typed shape. A mismatch means
/// the backend broke its contract, which callers see as a server
/// error rather than a panic.
fn decode<T: serde::de::DeserializeOwned>(value: Value) -> Result<T, ApiError> {
    serde_json::from_value(value).map_err(|_| ApiError::Server {
        message: "unexpected response shape".to_owned(),
        status: None,
    })
}

/// Page parameters with the backend's defaults; zero is treated as
/// unset.
fn page_query(page_num: u32, page_size: u32) -> Vec<(String, String)> {
    let page_num = if page_num == 0 { DEFAULT_PAGE } else { page_num };
    let page_size = if page_size == 0 { DEFAULT_PAGE_SIZE } else { page_size };
    vec![
        ("pageNum".to_owned(), page_num.to_string()),
        ("pageSize".to_owned(), page_size.to_string()),
    ]
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value.map(str::trim).filter(|v| !v.is_empty()).map(str::to_owned)
}

fn validate_record_id(id: i64) -> Result<(), ApiError> {
    if id <= 0 {
        return Err(invalid("a valid record id is required"));
    }
    Ok(())
}

/// Reject a save payload the backend could not accept. A score of
/// zero is a legal value.
fn validate_score_save(request: &ScoreSaveRequest) -> Result<(), ApiError> {
    if let Some(id) = request.id {
        if id <= 0 {
            return Err(invalid("a valid record id is required"));
        }
    }
    if request.student_id <= 0 || request.course_id <= 0 {
        return Err(invalid("student and course are required"));
    }
    if !request.score.is_finite() {
        return Err(invalid("score must be a number"));
    }
    if request.exam_time.trim().is_empty() {
        return Err(invalid("exam time is required"));
    }
    Ok(())
}

fn invalid(msg: &str) -> ApiError {
    ApiError::RequestConstruction(msg.to_owned())
}
