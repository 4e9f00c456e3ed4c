//! Course detail page with enrollment.
//!
//! SYSTEM CONTEXT
//! ==============
//! Fetches the course and the caller's enrollment status on mount, then lets
//! the visitor enroll once. A successful enroll flips the button locally;
//! the server is not re-queried for the new status.

#[cfg(test)]
#[path = "course_detail_test.rs"]
mod course_detail_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::skeleton::Skeleton;
use crate::net::types::Course;
use crate::state::session::expect_session;
use crate::util::guard::{GuardOutcome, RedirectTargets, RoleRequirement, install_route_guard};
#[cfg(feature = "hydrate")]
use crate::util::token;

fn enroll_button_label(enrolled: bool) -> &'static str {
    if enrolled { "You're Enrolled" } else { "Enroll Now - Start Learning Today" }
}

/// Course detail and enrollment page.
#[component]
pub fn CourseDetailPage() -> impl IntoView {
    let session = expect_session();
    let navigate = use_navigate();
    let params = use_params_map();
    let guard =
        install_route_guard(session, RoleRequirement::SignedIn, RedirectTargets::default(), navigate);

    let course = RwSignal::new(None::<Course>);
    let loading = RwSignal::new(true);
    let enrolled = RwSignal::new(false);
    let enrolling = RwSignal::new(false);
    let notice = RwSignal::new(None::<String>);

    let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));

    #[cfg(feature = "hydrate")]
    {
        let requested = RwSignal::new(false);
        let alive_effect = alive.clone();
        Effect::new(move || {
            if requested.get() {
                return;
            }
            let GuardOutcome::Allowed(claims) = guard.get() else {
                return;
            };
            let Some(id) = params.read().get("id") else {
                return;
            };
            let Some(bearer) = session.get_untracked().token else {
                return;
            };
            requested.set(true);
            let alive = alive_effect.clone();
            leptos::task::spawn_local(async move {
                let fetched = crate::net::api::fetch_course(&bearer, &id).await;
                if !alive.load(std::sync::atomic::Ordering::Relaxed) {
                    return;
                }
                match fetched {
                    Ok(found) => {
                        course.set(Some(found));
                        let status =
                            crate::net::api::check_enrollment(&bearer, &claims.user_id, &id).await;
                        if !alive.load(std::sync::atomic::Ordering::Relaxed) {
                            return;
                        }
                        match status {
                            Ok(flag) => enrolled.set(flag),
                            Err(e) => {
                                leptos::logging::warn!("enrollment check failed: {e}");
                                notice.set(Some("Failed to load course details.".to_owned()));
                            }
                        }
                    }
                    Err(e) => {
                        leptos::logging::warn!("course fetch failed: {e}");
                        notice.set(Some("Failed to load course details.".to_owned()));
                    }
                }
                loading.set(false);
            });
        });
    }

    {
        let alive = alive.clone();
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    let on_enroll = move |_| {
        if enrolled.get() || enrolling.get() {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let Some(id) = params.read().get("id") else {
                return;
            };
            let Some(bearer) = session.get_untracked().token else {
                return;
            };
            let Ok(claims) = token::decode(&bearer) else {
                return;
            };
            enrolling.set(true);
            let alive = alive.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::enroll(&bearer, &id, &claims.user_id).await;
                if !alive.load(std::sync::atomic::Ordering::Relaxed) {
                    return;
                }
                match result {
                    Ok(()) => {
                        enrolled.set(true);
                        notice.set(Some("Successfully enrolled in the course!".to_owned()));
                    }
                    Err(e) => {
                        leptos::logging::warn!("enroll failed: {e}");
                        notice.set(Some("Failed to enroll in course. Please try again later.".to_owned()));
                    }
                }
                enrolling.set(false);
            });
        }
    };

    view! {
        <Show
            when=move || matches!(guard.get(), GuardOutcome::Allowed(_))
            fallback=|| view! { <div class="detail-page"><p>"Loading..."</p></div> }
        >
            <div class="detail-page">
                <Show when=move || notice.get().is_some()>
                    <p class="page-notice">{move || notice.get().unwrap_or_default()}</p>
                </Show>
                <Show
                    when=move || !loading.get()
                    fallback=|| {
                        view! {
                            <div class="detail-card">
                                <Skeleton class="skeleton--title"/>
                                <Skeleton class="skeleton--line"/>
                                <Skeleton class="skeleton--line skeleton--line-short"/>
                                <Skeleton class="skeleton--button"/>
                            </div>
                        }
                    }
                >
                    {move || {
                        course
                            .get()
                            .map(|found| {
                                view! {
                                    <div class="detail-card">
                                        <h1 class="detail-card__title">{found.title}</h1>
                                        <p class="detail-card__description">{found.description}</p>
                                        <div class="detail-card__facts">
                                            <div class="detail-fact">
                                                <span class="detail-fact__label">"Duration"</span>
                                                <span class="detail-fact__value">{found.duration}</span>
                                            </div>
                                            <div class="detail-fact">
                                                <span class="detail-fact__label">"Instructor"</span>
                                                <span class="detail-fact__value">{found.instructor}</span>
                                            </div>
                                            <div class="detail-fact">
                                                <span class="detail-fact__label">"Access"</span>
                                                <span class="detail-fact__value">"Instant"</span>
                                            </div>
                                            <div class="detail-fact">
                                                <span class="detail-fact__label">"Certificate"</span>
                                                <span class="detail-fact__value">"Upon Completion"</span>
                                            </div>
                                        </div>
                                        <button
                                            class="btn btn--primary detail-card__enroll"
                                            disabled=move || enrolled.get() || enrolling.get()
                                            on:click=on_enroll.clone()
                                        >
                                            {move || {
                                                if enrolling.get() {
                                                    "Enrolling..."
                                                } else {
                                                    enroll_button_label(enrolled.get())
                                                }
                                            }}
                                        </button>
                                        <Show when=move || !enrolled.get()>
                                            <p class="detail-card__note">
                                                "30-Day Money-Back Guarantee · Instant Access"
                                            </p>
                                        </Show>
                                    </div>
                                }
                                .into_any()
                            })
                            .unwrap_or_else(|| {
                                view! {
                                    <p class="detail-page__missing">
                                        "No course found or failed to load course details."
                                    </p>
                                }
                                .into_any()
                            })
                    }}
                </Show>
            </div>
        </Show>
    }
}
