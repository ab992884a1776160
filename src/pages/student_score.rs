//! Student's own score listing, paginated with a course-name filter.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::types::ScoreRecord;
use crate::pages::paging;
use crate::pages::shell::TopBar;
use crate::routes;
use crate::util::auth;

const PAGE_SIZE: u32 = 10;

#[component]
pub fn StudentScorePage() -> impl IntoView {
    let navigate = use_navigate();
    auth::install_route_guard(routes::STUDENT_SCORE_PATH, navigate);

    let scores = RwSignal::new(Vec::<ScoreRecord>::new());
    let total = RwSignal::new(0_i64);
    let page = RwSignal::new(1_u32);
    let course_filter = RwSignal::new(String::new());
    let applied_filter = RwSignal::new(String::new());

    // Reload whenever the page or the applied filter changes.
    Effect::new(move || {
        let page_num = page.get();
        let filter = applied_filter.get();
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let course = if filter.trim().is_empty() { None } else { Some(filter.as_str()) };
            match crate::net::api::student_scores(page_num, PAGE_SIZE, course).await {
                Ok(result) => {
                    total.set(result.total);
                    scores.set(result.list);
                }
                Err(e) => leptos::logging::warn!("score query failed: {}", e.message()),
            }
        });
        #[cfg(not(feature = "csr"))]
        let _ = (page_num, filter);
    });

    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        page.set(1);
        applied_filter.set(course_filter.get());
    };
    let on_prev = move |_| page.update(|p| *p = p.saturating_sub(1).max(1));
    let on_next = move |_| page.update(|p| *p = paging::clamp_page(*p + 1, total.get(), PAGE_SIZE));

    view! {
        <div class="page">
            <TopBar title="My Scores" />
            <main class="page__body">
                <form class="filter-bar" on:submit=on_search>
                    <input
                        class="filter-bar__input"
                        type="text"
                        placeholder="Course name"
                        prop:value=move || course_filter.get()
                        on:input=move |ev| course_filter.set(event_target_value(&ev))
                    />
                    <button class="filter-bar__button" type="submit">"Search"</button>
                </form>
                <table class="score-table">
                    <thead>
                        <tr>
                            <th>"Course"</th>
                            <th>"Score"</th>
                            <th>"Exam date"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For each=move || scores.get() key=|record| record.id let:record>
                            <tr>
                                <td>{record.course_name.clone().unwrap_or_default()}</td>
                                <td>{record.score}</td>
                                <td>{record.exam_time.clone()}</td>
                            </tr>
                        </For>
                    </tbody>
                </table>
                <Show when=move || scores.get().is_empty()>
                    <p class="score-table__empty">"No scores to show."</p>
                </Show>
                <div class="pager">
                    <button class="pager__button" on:click=on_prev disabled=move || page.get() <= 1>
                        "Previous"
                    </button>
                    <span class="pager__label">
                        {move || format!("Page {} of {}", page.get(), paging::total_pages(total.get(), PAGE_SIZE))}
                    </span>
                    <button
                        class="pager__button"
                        on:click=on_next
                        disabled=move || page.get() >= paging::total_pages(total.get(), PAGE_SIZE)
                    >
                        "Next"
                    </button>
                </div>
            </main>
        </div>
    }
}
