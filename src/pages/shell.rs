//! Shared chrome for signed-in pages.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::routes;
use crate::state::session::{self, Role};

/// Top bar with role-aware navigation and the sign-out control.
#[component]
pub fn TopBar(title: &'static str) -> impl IntoView {
    let current = session::load();
    let display_name = if current.real_name.trim().is_empty() {
        current.role.clone()
    } else {
        current.real_name.clone()
    };
    let links: &[(&'static str, &'static str)] = match current.effective_role() {
        Some(Role::Teacher) => &[
            (routes::TEACHER_HOME_PATH, "Dashboard"),
            (routes::SCORE_MANAGE_PATH, "Scores"),
            (routes::FILE_UPLOAD_PATH, "Import & Export"),
            (routes::STATISTIC_PATH, "Statistics"),
        ],
        Some(Role::Student) => &[
            (routes::STUDENT_HOME_PATH, "Dashboard"),
            (routes::STUDENT_SCORE_PATH, "My Scores"),
        ],
        None => &[],
    };

    let on_sign_out = move |_| {
        session::clear();
        #[cfg(feature = "csr")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href(routes::LOGIN_PATH);
            }
        }
    };

    view! {
        <header class="topbar">
            <h1 class="topbar__title">{title}</h1>
            <nav class="topbar__nav">
                {links
                    .iter()
                    .map(|(href, label)| view! { <A href=*href>{*label}</A> })
                    .collect_view()}
            </nav>
            <div class="topbar__session">
                <span class="topbar__name">{display_name}</span>
                <button class="topbar__signout" on:click=on_sign_out>
                    "Sign out"
                </button>
            </div>
        </header>
    }
}
