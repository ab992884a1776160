//! Bulk score import from a spreadsheet, and the Excel export.

#[cfg(test)]
#[path = "file_upload_test.rs"]
mod file_upload_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
#[cfg(any(test, feature = "csr"))]
use serde_json::Value;

use crate::net::types::Course;
use crate::pages::shell::TopBar;
use crate::routes;
use crate::util::auth;

/// Human-readable summary of the import response, which may be a bare
/// message, a coded object, or an object carrying row counts.
#[cfg(any(test, feature = "csr"))]
fn summarize_upload(result: &Value) -> String {
    if let Some(text) = result.as_str() {
        return text.to_owned();
    }
    if let Some(msg) = result.get("msg").and_then(Value::as_str) {
        return msg.to_owned();
    }
    let success = result.get("successCount").and_then(Value::as_i64);
    let failed = result.get("failCount").and_then(Value::as_i64);
    match (success, failed) {
        (Some(success), Some(failed)) => format!("imported {success} rows, {failed} failed"),
        (Some(success), None) => format!("imported {success} rows"),
        _ => "import finished".to_owned(),
    }
}

#[component]
pub fn FileUploadPage() -> impl IntoView {
    let navigate = use_navigate();
    auth::install_route_guard(routes::FILE_UPLOAD_PATH, navigate);

    let courses = RwSignal::new(Vec::<Course>::new());
    let export_course = RwSignal::new(String::new());
    let status = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let file_input: NodeRef<leptos::html::Input> = NodeRef::new();

    Effect::new(move || {
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            if let Ok(list) = crate::net::api::teacher_courses().await {
                courses.set(list);
            }
        });
    });

    let on_upload = move |_| {
        if busy.get() {
            return;
        }
        #[cfg(feature = "csr")]
        {
            let Some(input) = file_input.get() else {
                return;
            };
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                status.set("Choose a spreadsheet first.".to_owned());
                return;
            };
            busy.set(true);
            status.set("Uploading...".to_owned());
            leptos::task::spawn_local(async move {
                match crate::net::api::upload_score_file(&file).await {
                    Ok(result) => {
                        crate::util::notify::success("import finished");
                        status.set(summarize_upload(&result));
                    }
                    Err(e) => status.set(e.message().to_owned()),
                }
                busy.set(false);
            });
        }
    };

    let on_export = move |_| {
        if busy.get() {
            return;
        }
        #[cfg(feature = "csr")]
        {
            let course_raw = export_course.get();
            busy.set(true);
            leptos::task::spawn_local(async move {
                let course_id = course_raw.trim().parse::<i64>().ok();
                match crate::net::api::export_score_excel(course_id).await {
                    Ok(bytes) => {
                        if crate::util::download::trigger_download(&bytes, "scores.xlsx") {
                            crate::util::notify::success("export downloaded");
                        } else {
                            crate::util::notify::error("could not start the download");
                        }
                    }
                    Err(e) => leptos::logging::warn!("export failed: {}", e.message()),
                }
                busy.set(false);
            });
        }
    };

    view! {
        <div class="page">
            <TopBar title="Import & Export" />
            <main class="page__body">
                <section class="panel">
                    <h3>"Import scores"</h3>
                    <p class="panel__hint">
                        "Upload a spreadsheet with studentId, courseId, score and examTime columns."
                    </p>
                    <input type="file" accept=".xlsx,.xls" node_ref=file_input />
                    <button class="panel__button" on:click=on_upload disabled=move || busy.get()>
                        "Upload"
                    </button>
                    <Show when=move || !status.get().is_empty()>
                        <p class="panel__status">{move || status.get()}</p>
                    </Show>
                </section>
                <section class="panel">
                    <h3>"Export scores"</h3>
                    <select
                        class="panel__select"
                        prop:value=move || export_course.get()
                        on:change=move |ev| export_course.set(event_target_value(&ev))
                    >
                        <option value="">"All courses"</option>
                        <For each=move || courses.get() key=|course| course.id let:course>
                            <option value=course.id.to_string()>{course.course_name.clone()}</option>
                        </For>
                    </select>
                    <button class="panel__button" on:click=on_export disabled=move || busy.get()>
                        "Download Excel"
                    </button>
                </section>
            </main>
        </div>
    }
}
