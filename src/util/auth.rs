//! Navigation guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every routed page installs this guard, which decides before the
//! view settles whether the visitor may stay: allow, bounce to login,
//! or bounce to the visitor's own role home. The decision is a pure
//! function of the target route descriptor and the persisted session,
//! re-read fresh on every navigation because the HTTP layer's 401
//! handling (or a login in another view) may have rewritten storage
//! since the last look.
//!
//! DESIGN
//! ======
//! The pure decision lives in [`evaluate`] so the whole matrix is
//! testable off-browser; [`install_route_guard`] is the thin routed
//! wrapper that adds the warning banner and the actual redirect.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::routes::{self, RouteMeta};
use crate::state::session::{self, Role, Session};
use crate::util::notify;

/// Outcome of gating one attempted navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Mount the requested view.
    Allow,
    /// Not signed in: send the visitor to the login route.
    RedirectLogin,
    /// Signed in but wrong role: send the visitor to this home route.
    RedirectHome(&'static str),
}

/// Decision procedure, evaluated in order:
///
/// 1. public routes are allowed unconditionally;
/// 2. no usable token means login, regardless of any stored role;
/// 3. a role-restricted route with a mismatched effective role bounces
///    to the visitor's own home, unless the target already is that
///    home (a stale or unparseable role must not cause a redirect
///    loop);
/// 4. everything else is allowed.
pub fn evaluate(route: &RouteMeta, session: &Session) -> GuardDecision {
    if !route.requires_auth {
        return GuardDecision::Allow;
    }
    if !session.has_token() {
        return GuardDecision::RedirectLogin;
    }
    if let Some(required) = route.required_role {
        let effective = session.effective_role();
        if effective != Some(required) {
            let home = effective.map_or(routes::TEACHER_HOME_PATH, Role::home_path);
            if route.path != home {
                return GuardDecision::RedirectHome(home);
            }
        }
    }
    GuardDecision::Allow
}

/// Guard decision for a concrete path, from a fresh session read.
pub fn check_navigation(path: &str) -> GuardDecision {
    evaluate(routes::route_for_path(path), &session::load())
}

/// Install the guard on a routed page. Runs once when the view mounts;
/// at most one redirect is issued per evaluation.
pub fn install_route_guard<F>(path: &'static str, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let navigate = navigate.clone();
    Effect::new(move || match check_navigation(path) {
        GuardDecision::Allow => {}
        GuardDecision::RedirectLogin => {
            notify::warning("please sign in first");
            navigate(routes::LOGIN_PATH, NavigateOptions::default());
        }
        GuardDecision::RedirectHome(home) => {
            notify::warning("no permission for that page, returning to your home");
            navigate(home, NavigateOptions::default());
        }
    });
}
