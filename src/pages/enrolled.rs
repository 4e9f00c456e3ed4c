//! Enrolled-courses page listing the caller's enrollments.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::course_card::CourseCard;
use crate::components::skeleton::SkeletonCard;
use crate::net::types::Course;
use crate::state::session::expect_session;
use crate::util::guard::{GuardOutcome, RedirectTargets, RoleRequirement, install_route_guard};

/// "My Enrolled Courses" page.
#[component]
pub fn EnrolledCoursesPage() -> impl IntoView {
    let session = expect_session();
    let navigate = use_navigate();
    let guard =
        install_route_guard(session, RoleRequirement::SignedIn, RedirectTargets::default(), navigate);

    let courses = RwSignal::new(Vec::<Course>::new());
    let loading = RwSignal::new(true);
    let notice = RwSignal::new(None::<String>);

    #[cfg(feature = "hydrate")]
    {
        let requested = RwSignal::new(false);
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_effect = alive.clone();
        Effect::new(move || {
            if requested.get() || !matches!(guard.get(), GuardOutcome::Allowed(_)) {
                return;
            }
            let Some(bearer) = session.get_untracked().token else {
                return;
            };
            requested.set(true);
            let alive = alive_effect.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::fetch_enrolled_courses(&bearer).await;
                if !alive.load(std::sync::atomic::Ordering::Relaxed) {
                    return;
                }
                match result {
                    Ok(list) => courses.set(list),
                    Err(e) => {
                        leptos::logging::warn!("enrolled courses failed: {e}");
                        notice.set(Some("Failed to load enrolled courses. Please try again.".to_owned()));
                    }
                }
                loading.set(false);
            });
        });
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    view! {
        <Show
            when=move || matches!(guard.get(), GuardOutcome::Allowed(_))
            fallback=|| view! { <div class="enrolled-page"><p>"Loading..."</p></div> }
        >
            <div class="enrolled-page">
                <h1 class="enrolled-page__heading">"My Enrolled Courses"</h1>
                <Show when=move || notice.get().is_some()>
                    <p class="page-notice page-notice--error">
                        {move || notice.get().unwrap_or_default()}
                    </p>
                </Show>
                <Show
                    when=move || !loading.get()
                    fallback=|| {
                        view! {
                            <div class="enrolled-page__grid">
                                {(0..6).map(|_| view! { <SkeletonCard/> }).collect::<Vec<_>>()}
                            </div>
                        }
                    }
                >
                    <Show
                        when=move || !courses.get().is_empty()
                        fallback=move || {
                            view! {
                                <div class="enrolled-page__empty">
                                    <h2>"No Enrolled Courses Yet"</h2>
                                    <p>"Explore our course catalog and start your learning journey today!"</p>
                                    <a class="btn btn--primary" href="/courses">"Browse Courses"</a>
                                </div>
                            }
                        }
                    >
                        <div class="enrolled-page__grid">
                            {move || {
                                courses
                                    .get()
                                    .into_iter()
                                    .map(|course| view! { <CourseCard course=course enrolled=true/> })
                                    .collect::<Vec<_>>()
                            }}
                        </div>
                    </Show>
                </Show>
            </div>
        </Show>
    }
}
