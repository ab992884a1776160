//! Login page with self-service student and teacher registration.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

#[cfg(any(test, feature = "csr"))]
use crate::state::session::Role;

#[cfg(feature = "csr")]
use crate::net::api;
#[cfg(feature = "csr")]
use crate::net::types::{LoginRequest, RegisterRequest};
#[cfg(feature = "csr")]
use crate::state::session;
#[cfg(feature = "csr")]
use crate::util::notify;

/// Landing route for a freshly issued role string. Anything the
/// backend sends that is not a student lands on the teacher side.
#[cfg(any(test, feature = "csr"))]
fn role_home_for(raw_role: &str) -> &'static str {
    Role::parse(raw_role).map_or(crate::routes::TEACHER_HOME_PATH, Role::home_path)
}

fn validate_login(username: &str, password: &str) -> Result<(), &'static str> {
    if username.trim().is_empty() || password.trim().is_empty() {
        return Err("Enter both username and password.");
    }
    Ok(())
}

fn validate_register(
    username: &str,
    password: &str,
    real_name: &str,
) -> Result<(), &'static str> {
    if username.trim().is_empty() || password.trim().is_empty() || real_name.trim().is_empty() {
        return Err("Username, password and real name are all required.");
    }
    if password.trim().len() < 6 {
        return Err("Password must be at least 6 characters.");
    }
    Ok(())
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let registering = RwSignal::new(false);
    let reg_role = RwSignal::new("student".to_owned());
    let reg_username = RwSignal::new(String::new());
    let reg_password = RwSignal::new(String::new());
    let reg_real_name = RwSignal::new(String::new());

    let on_login = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let username_value = username.get().trim().to_owned();
        let password_value = password.get().trim().to_owned();
        if let Err(message) = validate_login(&username_value, &password_value) {
            info.set(message.to_owned());
            return;
        }
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let request = LoginRequest { username: username_value, password: password_value };
            match api::login(&request).await {
                Ok(data) => {
                    session::save_login(&data.token, &data.role, &data.real_name);
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href(role_home_for(&data.role));
                    }
                }
                Err(e) => {
                    info.set(e.message().to_owned());
                    busy.set(false);
                }
            }
        });
    };

    let on_register = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let username_value = reg_username.get().trim().to_owned();
        let password_value = reg_password.get().trim().to_owned();
        let real_name_value = reg_real_name.get().trim().to_owned();
        if let Err(message) = validate_register(&username_value, &password_value, &real_name_value)
        {
            info.set(message.to_owned());
            return;
        }
        busy.set(true);
        info.set("Creating account...".to_owned());

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let request = RegisterRequest {
                username: username_value.clone(),
                password: password_value,
                real_name: real_name_value,
            };
            let outcome = if reg_role.get_untracked() == "teacher" {
                api::register_teacher(&request).await
            } else {
                api::register_student(&request).await
            };
            match outcome {
                Ok(()) => {
                    notify::success("account created, please sign in");
                    username.set(username_value);
                    registering.set(false);
                    info.set(String::new());
                }
                Err(e) => info.set(e.message().to_owned()),
            }
            busy.set(false);
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"ScoreHub"</h1>
                <Show
                    when=move || !registering.get()
                    fallback=move || {
                        view! {
                            <p class="login-card__subtitle">"Create an account"</p>
                            <form class="login-form" on:submit=on_register>
                                <select
                                    class="login-input"
                                    prop:value=move || reg_role.get()
                                    on:change=move |ev| reg_role.set(event_target_value(&ev))
                                >
                                    <option value="student">"Student"</option>
                                    <option value="teacher">"Teacher"</option>
                                </select>
                                <input
                                    class="login-input"
                                    type="text"
                                    placeholder="Username"
                                    prop:value=move || reg_username.get()
                                    on:input=move |ev| reg_username.set(event_target_value(&ev))
                                />
                                <input
                                    class="login-input"
                                    type="password"
                                    placeholder="Password (6+ characters)"
                                    prop:value=move || reg_password.get()
                                    on:input=move |ev| reg_password.set(event_target_value(&ev))
                                />
                                <input
                                    class="login-input"
                                    type="text"
                                    placeholder="Real name"
                                    prop:value=move || reg_real_name.get()
                                    on:input=move |ev| reg_real_name.set(event_target_value(&ev))
                                />
                                <button class="login-button" type="submit" disabled=move || busy.get()>
                                    "Register"
                                </button>
                            </form>
                            <button
                                class="login-link"
                                on:click=move |_| {
                                    registering.set(false);
                                    info.set(String::new());
                                }
                            >
                                "Back to sign in"
                            </button>
                        }
                    }
                >
                    <p class="login-card__subtitle">"Sign in to continue"</p>
                    <form class="login-form" on:submit=on_login>
                        <input
                            class="login-input"
                            type="text"
                            placeholder="Username"
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                        />
                        <input
                            class="login-input"
                            type="password"
                            placeholder="Password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                        <button class="login-button" type="submit" disabled=move || busy.get()>
                            "Sign in"
                        </button>
                    </form>
                    <button
                        class="login-link"
                        on:click=move |_| {
                            registering.set(true);
                            info.set(String::new());
                        }
                    >
                        "Create an account"
                    </button>
                </Show>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
