//! Catch-all for unknown paths.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::routes;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="page not-found">
            <h1>"404"</h1>
            <p>"That page does not exist."</p>
            <A href=routes::LOGIN_PATH>"Go to sign in"</A>
        </div>
    }
}
