//! Routed pages. Each signed-in page installs the navigation guard on
//! mount and talks to the backend only through the typed API surface.

pub mod file_upload;
pub mod login;
pub mod not_found;
pub mod paging;
pub mod score_manage;
pub mod shell;
pub mod statistic;
pub mod student_dashboard;
pub mod student_score;
pub mod teacher_dashboard;
