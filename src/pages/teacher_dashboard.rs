//! Teacher landing page: profile card and taught courses.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::net::types::TeacherInfo;
use crate::pages::shell::TopBar;
use crate::routes;
use crate::util::auth;

#[component]
pub fn TeacherDashboardPage() -> impl IntoView {
    let navigate = use_navigate();
    auth::install_route_guard(routes::TEACHER_HOME_PATH, navigate);

    let info = RwSignal::new(None::<TeacherInfo>);

    Effect::new(move || {
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::teacher_info().await {
                Ok(data) => info.set(Some(data)),
                Err(e) => leptos::logging::warn!("teacher profile failed: {}", e.message()),
            }
        });
    });

    view! {
        <div class="page">
            <TopBar title="Teacher Dashboard" />
            <main class="page__body">
                {move || {
                    info.get().map(|data| {
                        view! {
                            <section class="panel profile">
                                <h2 class="profile__name">{data.real_name.clone()}</h2>
                                <p class="profile__line">
                                    {data.teacher_no.clone().unwrap_or_default()}
                                </p>
                                <p class="profile__line">
                                    {data.department.clone().unwrap_or_default()}
                                </p>
                                <ul class="course-list">
                                    {data
                                        .courses
                                        .iter()
                                        .map(|course| {
                                            view! {
                                                <li class="course-list__item">
                                                    {course.course_name.clone()}
                                                </li>
                                            }
                                        })
                                        .collect_view()}
                                </ul>
                            </section>
                        }
                    })
                }}
                <section class="panel quick-links">
                    <h3>"Manage"</h3>
                    <A href=routes::SCORE_MANAGE_PATH>"Score records"</A>
                    <A href=routes::FILE_UPLOAD_PATH>"Import & export"</A>
                    <A href=routes::STATISTIC_PATH>"Statistics"</A>
                </section>
            </main>
        </div>
    }
}
