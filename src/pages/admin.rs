//! Admin dashboard — course inventory table with CRUD entry points.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only list view that talks to the authenticated admin endpoint. Delete
//! mutates through the API and refetches the inventory; create/update live on
//! the course form route. Stat cards are derived from the loaded list.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::skeleton::Skeleton;
use crate::net::types::Course;
use crate::pages::catalog::parse_duration_weeks;
use crate::state::session::expect_session;
use crate::util::guard::{GuardOutcome, RedirectTargets, RoleRequirement, install_route_guard};

fn filter_by_title(courses: &[Course], term: &str) -> Vec<Course> {
    let needle = term.to_lowercase();
    courses
        .iter()
        .filter(|course| course.title.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

fn distinct_instructor_count(courses: &[Course]) -> usize {
    let mut names: Vec<&str> = courses.iter().map(|course| course.instructor.as_str()).collect();
    names.sort_unstable();
    names.dedup();
    names.len()
}

/// Mean of the parseable duration prefixes, as a display label.
fn average_duration_label(courses: &[Course]) -> String {
    let weeks: Vec<u32> =
        courses.iter().filter_map(|course| parse_duration_weeks(&course.duration)).collect();
    if weeks.is_empty() {
        return "n/a".to_owned();
    }
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let mean = (f64::from(weeks.iter().sum::<u32>()) / weeks.len() as f64).round() as u32;
    format!("{mean} weeks")
}

#[cfg(feature = "hydrate")]
fn load_admin_courses(
    bearer: String,
    courses: RwSignal<Vec<Course>>,
    loading: RwSignal<bool>,
    notice: RwSignal<Option<String>>,
    alive: std::sync::Arc<std::sync::atomic::AtomicBool>,
) {
    loading.set(true);
    leptos::task::spawn_local(async move {
        let result = crate::net::api::fetch_admin_courses(&bearer).await;
        if !alive.load(std::sync::atomic::Ordering::Relaxed) {
            return;
        }
        match result {
            Ok(list) => courses.set(list),
            Err(e) => {
                leptos::logging::warn!("admin course list failed: {e}");
                notice.set(Some("Failed to fetch courses. Please try again.".to_owned()));
            }
        }
        loading.set(false);
    });
}

/// Admin dashboard page.
#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let session = expect_session();
    let navigate = use_navigate();
    let guard =
        install_route_guard(session, RoleRequirement::Admin, RedirectTargets::default(), navigate);

    let courses = RwSignal::new(Vec::<Course>::new());
    let loading = RwSignal::new(true);
    let notice = RwSignal::new(None::<String>);
    let search_term = RwSignal::new(String::new());

    let filtered = Memo::new(move |_| filter_by_title(&courses.get(), &search_term.get()));

    let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));

    #[cfg(feature = "hydrate")]
    {
        let requested = RwSignal::new(false);
        let alive_effect = alive.clone();
        Effect::new(move || {
            if requested.get() || !matches!(guard.get(), GuardOutcome::Allowed(_)) {
                return;
            }
            let Some(bearer) = session.get_untracked().token else {
                return;
            };
            requested.set(true);
            load_admin_courses(bearer, courses, loading, notice, alive_effect.clone());
        });
    }

    {
        let alive = alive.clone();
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    let on_delete = Callback::new(move |id: String| {
        #[cfg(feature = "hydrate")]
        {
            let Some(bearer) = session.get_untracked().token else {
                return;
            };
            let alive = alive.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::delete_course(&bearer, &id).await;
                if !alive.load(std::sync::atomic::Ordering::Relaxed) {
                    return;
                }
                match result {
                    Ok(()) => {
                        notice.set(Some("Course deleted successfully".to_owned()));
                        load_admin_courses(bearer, courses, loading, notice, alive);
                    }
                    Err(e) => {
                        leptos::logging::warn!("course delete failed: {e}");
                        notice.set(Some("Failed to delete the course.".to_owned()));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    });

    view! {
        <Show
            when=move || matches!(guard.get(), GuardOutcome::Allowed(_))
            fallback=|| view! { <div class="admin-page"><p>"Loading..."</p></div> }
        >
            <div class="admin-page">
                <div class="admin-page__panel">
                    <h1 class="admin-page__heading">"Admin Dashboard"</h1>
                    <p class="admin-page__subtitle">"Manage your courses and instructors"</p>
                    <Show when=move || notice.get().is_some()>
                        <p class="page-notice">{move || notice.get().unwrap_or_default()}</p>
                    </Show>
                    <div class="admin-page__controls">
                        <input
                            class="admin-search"
                            type="text"
                            placeholder="Search courses"
                            prop:value=move || search_term.get()
                            on:input=move |ev| search_term.set(event_target_value(&ev))
                        />
                        <a class="btn btn--primary" href="/admin/add-course/null">"+ Add New Course"</a>
                    </div>
                    <table class="admin-table">
                        <thead>
                            <tr>
                                <th>"Title"</th>
                                <th>"Instructor"</th>
                                <th>"Duration"</th>
                                <th>"Created By"</th>
                                <th class="admin-table__actions">"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <Show
                                when=move || !loading.get()
                                fallback=|| {
                                    (0..3)
                                        .map(|_| {
                                            view! {
                                                <tr>
                                                    {(0..5)
                                                        .map(|_| view! { <td><Skeleton class="skeleton--line"/></td> })
                                                        .collect::<Vec<_>>()}
                                                </tr>
                                            }
                                        })
                                        .collect::<Vec<_>>()
                                }
                            >
                                <Show
                                    when=move || !filtered.get().is_empty()
                                    fallback=|| {
                                        view! {
                                            <tr>
                                                <td class="admin-table__empty" colspan="5">
                                                    "No courses available."
                                                </td>
                                            </tr>
                                        }
                                    }
                                >
                                    {move || {
                                        filtered
                                            .get()
                                            .into_iter()
                                            .map(|course| {
                                                let edit_href = format!("/admin/edit-course/{}", course.id);
                                                let course_id = course.id.clone();
                                                view! {
                                                    <tr>
                                                        <td class="admin-table__title">{course.title}</td>
                                                        <td>{course.instructor}</td>
                                                        <td>{course.duration}</td>
                                                        <td>{course.created_by.unwrap_or_default()}</td>
                                                        <td class="admin-table__actions">
                                                            <a class="btn btn--ghost" href=edit_href>"Edit"</a>
                                                            <button
                                                                class="btn btn--danger"
                                                                on:click=move |_| on_delete.run(course_id.clone())
                                                            >
                                                                "Delete"
                                                            </button>
                                                        </td>
                                                    </tr>
                                                }
                                            })
                                            .collect::<Vec<_>>()
                                    }}
                                </Show>
                            </Show>
                        </tbody>
                    </table>
                </div>
                <div class="admin-page__stats">
                    <div class="stat-card">
                        <span class="stat-card__label">"Total Courses"</span>
                        <span class="stat-card__value">{move || courses.get().len()}</span>
                    </div>
                    <div class="stat-card">
                        <span class="stat-card__label">"Average Duration"</span>
                        <span class="stat-card__value">
                            {move || average_duration_label(&courses.get())}
                        </span>
                    </div>
                    <div class="stat-card">
                        <span class="stat-card__label">"Total Instructors"</span>
                        <span class="stat-card__value">
                            {move || distinct_instructor_count(&courses.get())}
                        </span>
                    </div>
                </div>
            </div>
        </Show>
    }
}
