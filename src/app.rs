//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::header::Header;
use crate::pages::{
    admin::AdminDashboardPage, catalog::CatalogPage, course_detail::CourseDetailPage,
    course_form::CourseFormPage, enrolled::EnrolledCoursesPage, home::HomePage,
    sign_in::SignInPage,
};
use crate::state::session::{self, SessionState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the tab-wide session context and sets up client-side routing.
/// The session hydrates from localStorage once, on first client mount;
/// until then every consumer observes the loading state.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    provide_context(session);

    Effect::new(move || {
        if session.get_untracked().loading {
            session::hydrate_from_storage(session);
        }
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/courseboard.css"/>
        <Title text="Courseboard"/>

        <Router>
            <Header/>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("auth") view=SignInPage/>
                    <Route path=StaticSegment("courses") view=CatalogPage/>
                    <Route path=(StaticSegment("courses"), ParamSegment("id")) view=CourseDetailPage/>
                    <Route path=StaticSegment("enrolledCourses") view=EnrolledCoursesPage/>
                    <Route path=StaticSegment("admin") view=AdminDashboardPage/>
                    <Route
                        path=(StaticSegment("admin"), ParamSegment("action"), ParamSegment("id"))
                        view=CourseFormPage
                    />
                </Routes>
            </main>
        </Router>
    }
}
