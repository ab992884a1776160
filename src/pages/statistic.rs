//! Per-course score distribution.

#[cfg(test)]
#[path = "statistic_test.rs"]
mod statistic_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::types::{Course, SegmentCount};
use crate::pages::shell::TopBar;
use crate::routes;
use crate::util::auth;

/// Bar length for one bucket relative to the fullest bucket.
fn bar_width_percent(count: i64, max: i64) -> u32 {
    if max <= 0 || count <= 0 {
        return 0;
    }
    let percent = count.saturating_mul(100) / max;
    u32::try_from(percent.clamp(0, 100)).unwrap_or(0)
}

#[component]
pub fn StatisticPage() -> impl IntoView {
    let navigate = use_navigate();
    auth::install_route_guard(routes::STATISTIC_PATH, navigate);

    let courses = RwSignal::new(Vec::<Course>::new());
    let selected = RwSignal::new(String::new());
    let segments = RwSignal::new(Vec::<SegmentCount>::new());

    Effect::new(move || {
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            if let Ok(list) = crate::net::api::teacher_courses().await {
                courses.set(list);
            }
        });
    });

    // Reload buckets whenever a course is picked.
    Effect::new(move || {
        let course_raw = selected.get();
        #[cfg(feature = "csr")]
        {
            if let Ok(course_id) = course_raw.trim().parse::<i64>() {
                leptos::task::spawn_local(async move {
                    match crate::net::api::score_segments(course_id).await {
                        Ok(list) => segments.set(list),
                        Err(e) => leptos::logging::warn!("statistics failed: {}", e.message()),
                    }
                });
            } else {
                segments.set(Vec::new());
            }
        }
        #[cfg(not(feature = "csr"))]
        let _ = course_raw;
    });

    view! {
        <div class="page">
            <TopBar title="Statistics" />
            <main class="page__body">
                <select
                    class="panel__select"
                    prop:value=move || selected.get()
                    on:change=move |ev| selected.set(event_target_value(&ev))
                >
                    <option value="">"Choose a course"</option>
                    <For each=move || courses.get() key=|course| course.id let:course>
                        <option value=course.id.to_string()>{course.course_name.clone()}</option>
                    </For>
                </select>
                <table class="score-table">
                    <thead>
                        <tr>
                            <th>"Segment"</th>
                            <th>"Students"</th>
                            <th>"Share"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let list = segments.get();
                            let max = list.iter().map(|seg| seg.count).max().unwrap_or(0);
                            list.iter()
                                .map(|seg| {
                                    let percent = bar_width_percent(seg.count, max);
                                    view! {
                                        <tr>
                                            <td>{seg.segment.clone()}</td>
                                            <td>{seg.count}</td>
                                            <td class="stat-bar__cell">
                                                <div
                                                    class="stat-bar"
                                                    style=format!("width: {percent}%")
                                                ></div>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                        }}
                    </tbody>
                </table>
                <Show when=move || segments.get().is_empty()>
                    <p class="score-table__empty">"Pick a course to see its distribution."</p>
                </Show>
            </main>
        </div>
    }
}
