//! Static route table driving the navigation guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! One descriptor per app route, immutable at runtime. `requires_auth`
//! and `required_role` are the only inputs the guard reads; unknown
//! paths resolve to the public not-found descriptor.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use crate::state::session::Role;

pub const LOGIN_PATH: &str = "/login";
pub const STUDENT_HOME_PATH: &str = "/student/dashboard";
pub const STUDENT_SCORE_PATH: &str = "/student/score";
pub const TEACHER_HOME_PATH: &str = "/teacher/dashboard";
pub const SCORE_MANAGE_PATH: &str = "/teacher/score-manage";
pub const FILE_UPLOAD_PATH: &str = "/teacher/file-upload";
pub const STATISTIC_PATH: &str = "/teacher/statistic";

/// Access requirements for one route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteMeta {
    pub path: &'static str,
    pub requires_auth: bool,
    pub required_role: Option<Role>,
}

/// Every navigable route. The root entry only redirects to the login
/// page; the table still carries it so the guard has a descriptor for
/// the brief moment the redirect route is entered.
pub const ROUTES: &[RouteMeta] = &[
    RouteMeta { path: "/", requires_auth: false, required_role: None },
    RouteMeta { path: LOGIN_PATH, requires_auth: false, required_role: None },
    RouteMeta { path: STUDENT_HOME_PATH, requires_auth: true, required_role: Some(Role::Student) },
    RouteMeta { path: STUDENT_SCORE_PATH, requires_auth: true, required_role: Some(Role::Student) },
    RouteMeta { path: TEACHER_HOME_PATH, requires_auth: true, required_role: Some(Role::Teacher) },
    RouteMeta { path: SCORE_MANAGE_PATH, requires_auth: true, required_role: Some(Role::Teacher) },
    RouteMeta { path: FILE_UPLOAD_PATH, requires_auth: true, required_role: Some(Role::Teacher) },
    RouteMeta { path: STATISTIC_PATH, requires_auth: true, required_role: Some(Role::Teacher) },
];

/// Catch-all descriptor for unknown paths; the not-found page is
/// public.
pub const NOT_FOUND: RouteMeta =
    RouteMeta { path: "*", requires_auth: false, required_role: None };

/// Look up the descriptor for `path`, falling back to the catch-all.
pub fn route_for_path(path: &str) -> &'static RouteMeta {
    ROUTES
        .iter()
        .find(|route| route.path == path)
        .unwrap_or(&NOT_FOUND)
}
