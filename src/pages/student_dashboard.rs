//! Student landing page: enrolled courses and the latest scores.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::net::types::{Course, ScoreRecord};
use crate::pages::shell::TopBar;
use crate::routes;
use crate::state::session;
use crate::util::auth;

#[component]
pub fn StudentDashboardPage() -> impl IntoView {
    let navigate = use_navigate();
    auth::install_route_guard(routes::STUDENT_HOME_PATH, navigate);

    let greeting = {
        let current = session::load();
        if current.real_name.trim().is_empty() {
            "Welcome".to_owned()
        } else {
            format!("Welcome, {}", current.real_name)
        }
    };
    let courses = RwSignal::new(Vec::<Course>::new());
    let recent = RwSignal::new(Vec::<ScoreRecord>::new());

    Effect::new(move || {
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            if let Ok(list) = crate::net::api::student_courses().await {
                courses.set(list);
            }
            match crate::net::api::student_scores(1, 5, None).await {
                Ok(page) => recent.set(page.list),
                Err(e) => leptos::logging::warn!("recent scores failed: {}", e.message()),
            }
        });
    });

    view! {
        <div class="page">
            <TopBar title="Student Dashboard" />
            <main class="page__body">
                <h2 class="page__greeting">{greeting}</h2>
                <section class="panel">
                    <h3>"My courses"</h3>
                    <ul class="course-list">
                        <For each=move || courses.get() key=|course| course.id let:course>
                            <li class="course-list__item">{course.course_name.clone()}</li>
                        </For>
                    </ul>
                    <Show when=move || courses.get().is_empty()>
                        <p class="panel__empty">"No courses yet."</p>
                    </Show>
                </section>
                <section class="panel">
                    <h3>"Recent scores"</h3>
                    <ul class="recent-scores">
                        <For each=move || recent.get() key=|record| record.id let:record>
                            <li class="recent-scores__item">
                                <span>{record.course_name.clone().unwrap_or_default()}</span>
                                <span>{record.score}</span>
                            </li>
                        </For>
                    </ul>
                    <A href=routes::STUDENT_SCORE_PATH>"All scores"</A>
                </section>
            </main>
        </div>
    }
}
