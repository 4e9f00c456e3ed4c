//! Course catalog page with search and duration filtering.
//!
//! SYSTEM CONTEXT
//! ==============
//! Requires a decodable session but fetches the catalog without an auth
//! header; the endpoint is public to any signed-in visitor regardless of
//! role. Search and filtering run entirely over the in-memory list.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::course_card::CourseCard;
use crate::components::skeleton::SkeletonCard;
use crate::net::types::Course;
use crate::state::session::expect_session;
use crate::util::guard::{GuardOutcome, RedirectTargets, RoleRequirement, install_route_guard};

/// Duration buckets offered by the filter dropdown, in weeks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum DurationFilter {
    #[default]
    All,
    /// At most 4 weeks.
    Short,
    /// More than 4, at most 8 weeks.
    Medium,
    /// More than 8 weeks.
    Long,
}

impl DurationFilter {
    fn from_value(value: &str) -> Self {
        match value {
            "short" => Self::Short,
            "medium" => Self::Medium,
            "long" => Self::Long,
            _ => Self::All,
        }
    }

    /// Whether a duration label like `"3 weeks"` falls in this bucket.
    /// Unparsable durations match nothing but `All`.
    fn matches(self, duration: &str) -> bool {
        if self == Self::All {
            return true;
        }
        let Some(weeks) = parse_duration_weeks(duration) else {
            return false;
        };
        match self {
            Self::All => true,
            Self::Short => weeks <= 4,
            Self::Medium => weeks > 4 && weeks <= 8,
            Self::Long => weeks > 8,
        }
    }
}

/// Numeric prefix of a duration label, e.g. `"10 weeks"` -> `10`.
pub(crate) fn parse_duration_weeks(duration: &str) -> Option<u32> {
    let digits: String =
        duration.trim_start().chars().take_while(char::is_ascii_digit).collect();
    digits.parse().ok()
}

/// Case-insensitive search over title, instructor, and description.
fn matches_search(course: &Course, term: &str) -> bool {
    let needle = term.to_lowercase();
    course.title.to_lowercase().contains(&needle)
        || course.instructor.to_lowercase().contains(&needle)
        || course.description.to_lowercase().contains(&needle)
}

fn filter_courses(courses: &[Course], term: &str, filter: DurationFilter) -> Vec<Course> {
    courses
        .iter()
        .filter(|course| matches_search(course, term) && filter.matches(&course.duration))
        .cloned()
        .collect()
}

/// Course catalog page.
#[component]
pub fn CatalogPage() -> impl IntoView {
    let session = expect_session();
    let navigate = use_navigate();
    let guard =
        install_route_guard(session, RoleRequirement::SignedIn, RedirectTargets::default(), navigate);

    let courses = RwSignal::new(Vec::<Course>::new());
    let loading = RwSignal::new(true);
    let notice = RwSignal::new(None::<String>);
    let search_term = RwSignal::new(String::new());
    let filter = RwSignal::new(DurationFilter::All);

    let filtered =
        Memo::new(move |_| filter_courses(&courses.get(), &search_term.get(), filter.get()));

    #[cfg(feature = "hydrate")]
    {
        let requested = RwSignal::new(false);
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_effect = alive.clone();
        Effect::new(move || {
            if requested.get() || !matches!(guard.get(), GuardOutcome::Allowed(_)) {
                return;
            }
            requested.set(true);
            let alive = alive_effect.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::fetch_catalog().await;
                if !alive.load(std::sync::atomic::Ordering::Relaxed) {
                    return;
                }
                match result {
                    Ok(list) => courses.set(list),
                    Err(e) => {
                        leptos::logging::warn!("course list failed: {e}");
                        notice.set(Some("Failed to load courses. Please try again.".to_owned()));
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
            fallback=|| view! { <div class="catalog-page"><p>"Loading..."</p></div> }
        >
            <div class="catalog-page">
                <h1 class="catalog-page__heading">"Explore Our Courses"</h1>
                <div class="catalog-page__controls">
                    <input
                        class="catalog-search"
                        type="text"
                        placeholder="Search courses..."
                        prop:value=move || search_term.get()
                        on:input=move |ev| search_term.set(event_target_value(&ev))
                    />
                    <select
                        class="catalog-select"
                        on:change=move |ev| filter.set(DurationFilter::from_value(&event_target_value(&ev)))
                    >
                        <option value="all">"All Durations"</option>
                        <option value="short">"Short (<= 4 weeks)"</option>
                        <option value="medium">"Medium (4-8 weeks)"</option>
                        <option value="long">"Long (> 8 weeks)"</option>
                    </select>
                </div>
                <Show when=move || notice.get().is_some()>
                    <p class="page-notice page-notice--error">
                        {move || notice.get().unwrap_or_default()}
                    </p>
                </Show>
                <Show
                    when=move || !loading.get()
                    fallback=|| {
                        view! {
                            <div class="catalog-page__grid">
                                {(0..6).map(|_| view! { <SkeletonCard/> }).collect::<Vec<_>>()}
                            </div>
                        }
                    }
                >
                    <p class="catalog-page__count">
                        {move || {
                            format!("Showing {} of {} courses", filtered.get().len(), courses.get().len())
                        }}
                    </p>
                    <div class="catalog-page__grid">
                        {move || {
                            filtered
                                .get()
                                .into_iter()
                                .map(|course| view! { <CourseCard course=course/> })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                    <Show when=move || filtered.get().is_empty()>
                        <div class="catalog-page__empty">
                            <p class="catalog-page__empty-title">"No courses found"</p>
                            <p>"Try adjusting your search or filter criteria"</p>
                        </div>
                    </Show>
                </Show>
            </div>
        </Show>
    }
}
