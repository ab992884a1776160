//! Root application component with routing.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::pages::{
    file_upload::FileUploadPage, login::LoginPage, not_found::NotFoundPage,
    score_manage::ScoreManagePage, statistic::StatisticPage,
    student_dashboard::StudentDashboardPage, student_score::StudentScorePage,
    teacher_dashboard::TeacherDashboardPage,
};

/// Root application component. The route table here mirrors the
/// descriptors in [`crate::routes`]; the guard each page installs is
/// what actually enforces access.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/scorehub-client.css"/>
        <Title text="ScoreHub"/>

        <Router>
            <Routes fallback=NotFoundPage>
                <Route path=StaticSegment("") view=RootRedirect/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route
                    path=(StaticSegment("student"), StaticSegment("dashboard"))
                    view=StudentDashboardPage
                />
                <Route
                    path=(StaticSegment("student"), StaticSegment("score"))
                    view=StudentScorePage
                />
                <Route
                    path=(StaticSegment("teacher"), StaticSegment("dashboard"))
                    view=TeacherDashboardPage
                />
                <Route
                    path=(StaticSegment("teacher"), StaticSegment("score-manage"))
                    view=ScoreManagePage
                />
                <Route
                    path=(StaticSegment("teacher"), StaticSegment("file-upload"))
                    view=FileUploadPage
                />
                <Route
                    path=(StaticSegment("teacher"), StaticSegment("statistic"))
                    view=StatisticPage
                />
            </Routes>
        </Router>
    }
}

/// The bare origin only forwards to the sign-in page.
#[component]
fn RootRedirect() -> impl IntoView {
    view! { <Redirect path=crate::routes::LOGIN_PATH/> }
}
