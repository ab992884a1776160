//! Teacher score management: filtered listing plus create, edit and
//! delete for individual records.

#[cfg(test)]
#[path = "score_manage_test.rs"]
mod score_manage_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::types::{Course, ScoreRecord, ScoreSaveRequest, StudentItem};
use crate::pages::paging;
use crate::pages::shell::TopBar;
use crate::routes;
use crate::util::auth;

const PAGE_SIZE: u32 = 10;

/// Parse the editor's raw field values into a save payload.
fn parse_score_form(
    id: Option<i64>,
    student_id: &str,
    course_id: &str,
    score: &str,
    exam_time: &str,
) -> Result<ScoreSaveRequest, &'static str> {
    let student_id = student_id.trim().parse::<i64>().map_err(|_| "Choose a student.")?;
    let course_id = course_id.trim().parse::<i64>().map_err(|_| "Choose a course.")?;
    let score = score.trim().parse::<f64>().map_err(|_| "Score must be a number.")?;
    if !(0.0..=100.0).contains(&score) {
        return Err("Score must be between 0 and 100.");
    }
    let exam_time = exam_time.trim();
    if exam_time.is_empty() {
        return Err("Pick an exam date.");
    }
    Ok(ScoreSaveRequest { id, student_id, course_id, score, exam_time: exam_time.to_owned() })
}

/// Insert path checks the (student, course) pair is still free before
/// saving; updates go straight through.
#[cfg(feature = "csr")]
async fn save_with_uniqueness_check(request: &ScoreSaveRequest) -> Result<(), String> {
    if request.id.is_none() {
        match crate::net::api::check_score_unique(request.student_id, request.course_id).await {
            Ok(true) => {}
            Ok(false) => {
                return Err("This student already has a score for this course.".to_owned());
            }
            Err(e) => return Err(e.message().to_owned()),
        }
    }
    crate::net::api::save_score(request).await.map_err(|e| e.message().to_owned())
}

#[component]
pub fn ScoreManagePage() -> impl IntoView {
    let navigate = use_navigate();
    auth::install_route_guard(routes::SCORE_MANAGE_PATH, navigate);

    let records = RwSignal::new(Vec::<ScoreRecord>::new());
    let total = RwSignal::new(0_i64);
    let page = RwSignal::new(1_u32);
    let reload = RwSignal::new(0_u32);

    let filter_name = RwSignal::new(String::new());
    let filter_course = RwSignal::new(String::new());
    let applied_name = RwSignal::new(String::new());
    let applied_course = RwSignal::new(String::new());

    let courses = RwSignal::new(Vec::<Course>::new());
    let students = RwSignal::new(Vec::<StudentItem>::new());

    let editor_open = RwSignal::new(false);
    let editing_id = RwSignal::new(None::<i64>);
    let form_student = RwSignal::new(String::new());
    let form_course = RwSignal::new(String::new());
    let form_score = RwSignal::new(String::new());
    let form_time = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    // Course list for both the filter and the editor.
    Effect::new(move || {
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            if let Ok(list) = crate::net::api::teacher_courses().await {
                courses.set(list);
            }
        });
    });

    // Reload the table on page, filter or mutation changes.
    Effect::new(move || {
        let page_num = page.get();
        let name = applied_name.get();
        let course_raw = applied_course.get();
        let _ = reload.get();
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let name_opt = if name.trim().is_empty() { None } else { Some(name.as_str()) };
            let course_id = course_raw.trim().parse::<i64>().ok();
            match crate::net::api::teacher_scores(page_num, PAGE_SIZE, name_opt, course_id).await {
                Ok(result) => {
                    total.set(result.total);
                    records.set(result.list);
                }
                Err(e) => leptos::logging::warn!("score query failed: {}", e.message()),
            }
        });
        #[cfg(not(feature = "csr"))]
        let _ = (page_num, name, course_raw);
    });

    // The editor's student dropdown follows its course selection.
    Effect::new(move || {
        let course_raw = form_course.get();
        #[cfg(feature = "csr")]
        {
            if let Ok(course_id) = course_raw.trim().parse::<i64>() {
                leptos::task::spawn_local(async move {
                    if let Ok(list) = crate::net::api::students_by_course(course_id).await {
                        students.set(list);
                    }
                });
            } else {
                students.set(Vec::new());
            }
        }
        #[cfg(not(feature = "csr"))]
        let _ = course_raw;
    });

    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        page.set(1);
        applied_name.set(filter_name.get());
        applied_course.set(filter_course.get());
    };
    let on_prev = move |_| page.update(|p| *p = p.saturating_sub(1).max(1));
    let on_next = move |_| page.update(|p| *p = paging::clamp_page(*p + 1, total.get(), PAGE_SIZE));

    let open_blank_editor = move |_| {
        editing_id.set(None);
        form_student.set(String::new());
        form_course.set(String::new());
        form_score.set(String::new());
        form_time.set(String::new());
        info.set(String::new());
        editor_open.set(true);
    };
    let start_edit = move |record: ScoreRecord| {
        editing_id.set(Some(record.id));
        form_course.set(record.course_id.to_string());
        form_student.set(record.student_id.to_string());
        form_score.set(record.score.to_string());
        form_time.set(record.exam_time.clone());
        info.set(String::new());
        editor_open.set(true);
    };

    let request_delete = move |id: i64| {
        #[cfg(feature = "csr")]
        {
            let confirmed = web_sys::window()
                .and_then(|w| w.confirm_with_message("Delete this score record?").ok())
                .unwrap_or(false);
            if !confirmed {
                return;
            }
            leptos::task::spawn_local(async move {
                match crate::net::api::delete_score(id).await {
                    Ok(()) => {
                        crate::util::notify::success("score deleted");
                        reload.update(|n| *n += 1);
                    }
                    Err(e) => leptos::logging::warn!("delete failed: {}", e.message()),
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        let _ = id;
    };

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let parsed = parse_score_form(
            editing_id.get(),
            &form_student.get(),
            &form_course.get(),
            &form_score.get(),
            &form_time.get(),
        );
        let request = match parsed {
            Ok(request) => request,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match save_with_uniqueness_check(&request).await {
                Ok(()) => {
                    crate::util::notify::success("score saved");
                    editor_open.set(false);
                    reload.update(|n| *n += 1);
                }
                Err(message) => info.set(message),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = request;
            busy.set(false);
        }
    };

    view! {
        <div class="page">
            <TopBar title="Score Management" />
            <main class="page__body">
                <form class="filter-bar" on:submit=on_search>
                    <input
                        class="filter-bar__input"
                        type="text"
                        placeholder="Student name"
                        prop:value=move || filter_name.get()
                        on:input=move |ev| filter_name.set(event_target_value(&ev))
                    />
                    <select
                        class="filter-bar__select"
                        prop:value=move || filter_course.get()
                        on:change=move |ev| filter_course.set(event_target_value(&ev))
                    >
                        <option value="">"All courses"</option>
                        <For each=move || courses.get() key=|course| course.id let:course>
                            <option value=course.id.to_string()>{course.course_name.clone()}</option>
                        </For>
                    </select>
                    <button class="filter-bar__button" type="submit">"Search"</button>
                    <button class="filter-bar__button" type="button" on:click=open_blank_editor>
                        "New score"
                    </button>
                </form>

                <Show when=move || editor_open.get()>
                    <form class="score-editor" on:submit=on_save>
                        <h3>
                            {move || {
                                if editing_id.get().is_some() { "Edit score" } else { "New score" }
                            }}
                        </h3>
                        <select
                            class="score-editor__field"
                            prop:value=move || form_course.get()
                            on:change=move |ev| form_course.set(event_target_value(&ev))
                        >
                            <option value="">"Choose a course"</option>
                            <For each=move || courses.get() key=|course| course.id let:course>
                                <option value=course.id.to_string()>
                                    {course.course_name.clone()}
                                </option>
                            </For>
                        </select>
                        <select
                            class="score-editor__field"
                            prop:value=move || form_student.get()
                            on:change=move |ev| form_student.set(event_target_value(&ev))
                        >
                            <option value="">"Choose a student"</option>
                            <For each=move || students.get() key=|student| student.id let:student>
                                <option value=student.id.to_string()>
                                    {student.real_name.clone()}
                                </option>
                            </For>
                        </select>
                        <input
                            class="score-editor__field"
                            type="number"
                            step="0.5"
                            min="0"
                            max="100"
                            placeholder="Score"
                            prop:value=move || form_score.get()
                            on:input=move |ev| form_score.set(event_target_value(&ev))
                        />
                        <input
                            class="score-editor__field"
                            type="date"
                            prop:value=move || form_time.get()
                            on:input=move |ev| form_time.set(event_target_value(&ev))
                        />
                        <div class="score-editor__actions">
                            <button type="submit" disabled=move || busy.get()>
                                "Save"
                            </button>
                            <button type="button" on:click=move |_| editor_open.set(false)>
                                "Cancel"
                            </button>
                        </div>
                        <Show when=move || !info.get().is_empty()>
                            <p class="score-editor__message">{move || info.get()}</p>
                        </Show>
                    </form>
                </Show>

                <table class="score-table">
                    <thead>
                        <tr>
                            <th>"Student"</th>
                            <th>"Course"</th>
                            <th>"Score"</th>
                            <th>"Exam date"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For each=move || records.get() key=|record| record.id let:record>
                            {
                                let record_for_edit = record.clone();
                                let record_id = record.id;
                                view! {
                                    <tr>
                                        <td>{record.student_name.clone().unwrap_or_default()}</td>
                                        <td>{record.course_name.clone().unwrap_or_default()}</td>
                                        <td>{record.score}</td>
                                        <td>{record.exam_time.clone()}</td>
                                        <td class="score-table__actions">
                                            <button on:click=move |_| start_edit(record_for_edit.clone())>
                                                "Edit"
                                            </button>
                                            <button on:click=move |_| request_delete(record_id)>
                                                "Delete"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }
                        </For>
                    </tbody>
                </table>
                <Show when=move || records.get().is_empty()>
                    <p class="score-table__empty">"No records match the current filter."</p>
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
