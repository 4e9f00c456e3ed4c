//! Add/edit course form for the admin console.
//!
//! SYSTEM CONTEXT
//! ==============
//! One route serves both modes: `/admin/add-course/null` creates,
//! `/admin/edit-course/:id` prefetches and updates. Submissions stamp
//! `createdBy` with the admin's decoded user ID.

#[cfg(test)]
#[path = "course_form_test.rs"]
mod course_form_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::net::types::CourseDraft;
use crate::state::session::expect_session;
use crate::util::guard::{GuardOutcome, RedirectTargets, RoleRequirement, install_route_guard};

/// What the route parameters ask this form to do.
#[derive(Clone, Debug, PartialEq, Eq)]
enum FormMode {
    Create,
    Edit(String),
}

impl FormMode {
    /// `add-course` ignores the id segment (the dashboard links it as
    /// `null`); `edit-course` requires a real one.
    fn from_params(action: Option<&str>, id: Option<&str>) -> Option<Self> {
        match action? {
            "add-course" => Some(Self::Create),
            "edit-course" => {
                let id = id?;
                if id.is_empty() || id == "null" {
                    None
                } else {
                    Some(Self::Edit(id.to_owned()))
                }
            }
            _ => None,
        }
    }
}

fn validate_draft(
    title: &str,
    description: &str,
    duration: &str,
    instructor: &str,
    created_by: &str,
) -> Result<CourseDraft, &'static str> {
    let title = title.trim();
    let description = description.trim();
    let duration = duration.trim();
    let instructor = instructor.trim();
    if title.is_empty() || description.is_empty() || duration.is_empty() || instructor.is_empty() {
        return Err("All fields are required.");
    }
    Ok(CourseDraft {
        title: title.to_owned(),
        description: description.to_owned(),
        duration: duration.to_owned(),
        instructor: instructor.to_owned(),
        created_by: created_by.to_owned(),
    })
}

/// Course create/edit form page.
#[component]
pub fn CourseFormPage() -> impl IntoView {
    let session = expect_session();
    let navigate = use_navigate();
    let params = use_params_map();
    let guard = install_route_guard(
        session,
        RoleRequirement::Admin,
        RedirectTargets::default(),
        navigate.clone(),
    );

    let mode = Memo::new(move |_| {
        let map = params.read();
        FormMode::from_params(map.get("action").as_deref(), map.get("id").as_deref())
    });

    // Unrecognized action/id combinations fall back to the dashboard.
    let navigate_invalid = navigate.clone();
    Effect::new(move || {
        if mode.get().is_none() {
            navigate_invalid("/admin", NavigateOptions::default());
        }
    });

    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let duration = RwSignal::new(String::new());
    let instructor = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let notice = RwSignal::new(None::<String>);

    let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));

    #[cfg(feature = "hydrate")]
    {
        let requested = RwSignal::new(false);
        let alive_effect = alive.clone();
        Effect::new(move || {
            if requested.get() || !matches!(guard.get(), GuardOutcome::Allowed(_)) {
                return;
            }
            let Some(FormMode::Edit(id)) = mode.get() else {
                return;
            };
            let Some(bearer) = session.get_untracked().token else {
                return;
            };
            requested.set(true);
            busy.set(true);
            let alive = alive_effect.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::fetch_course(&bearer, &id).await;
                if !alive.load(std::sync::atomic::Ordering::Relaxed) {
                    return;
                }
                match result {
                    Ok(course) => {
                        title.set(course.title);
                        description.set(course.description);
                        duration.set(course.duration);
                        instructor.set(course.instructor);
                    }
                    Err(e) => {
                        leptos::logging::warn!("course prefetch failed: {e}");
                        notice.set(Some("Failed to fetch course details. Please try again.".to_owned()));
                    }
                }
                busy.set(false);
            });
        });
    }

    {
        let alive = alive.clone();
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    let navigate_submit = navigate.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let GuardOutcome::Allowed(claims) = guard.get_untracked() else {
            return;
        };
        let draft = match validate_draft(
            &title.get(),
            &description.get(),
            &duration.get(),
            &instructor.get(),
            &claims.user_id,
        ) {
            Ok(draft) => draft,
            Err(msg) => {
                notice.set(Some(msg.to_owned()));
                return;
            }
        };
        let Some(current_mode) = mode.get_untracked() else {
            return;
        };
        busy.set(true);
        notice.set(None);

        #[cfg(feature = "hydrate")]
        {
            let Some(bearer) = session.get_untracked().token else {
                return;
            };
            let navigate = navigate_submit.clone();
            let alive = alive.clone();
            leptos::task::spawn_local(async move {
                let result = match &current_mode {
                    FormMode::Create => crate::net::api::create_course(&bearer, &draft).await,
                    FormMode::Edit(id) => crate::net::api::update_course(&bearer, id, &draft).await,
                };
                if !alive.load(std::sync::atomic::Ordering::Relaxed) {
                    return;
                }
                match result {
                    Ok(()) => navigate("/admin", NavigateOptions::default()),
                    Err(e) => {
                        leptos::logging::warn!("course save failed: {e}");
                        notice.set(Some("Failed to submit form. Please try again.".to_owned()));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&draft, &current_mode, &navigate_submit, &alive);
        }
    };

    let navigate_cancel = navigate;
    let on_cancel = move |_| {
        navigate_cancel("/admin", NavigateOptions::default());
    };

    let creating = move || matches!(mode.get(), Some(FormMode::Create) | None);

    view! {
        <Show
            when=move || matches!(guard.get(), GuardOutcome::Allowed(_))
            fallback=|| view! { <div class="form-page"><p>"Loading..."</p></div> }
        >
            <div class="form-page">
                <div class="form-card">
                    <h1 class="form-card__title">
                        {move || if creating() { "Add New Course" } else { "Edit Course" }}
                    </h1>
                    <p class="form-card__subtitle">
                        {move || {
                            if creating() {
                                "Create a new course by filling out the form below."
                            } else {
                                "Update the course details using the form below."
                            }
                        }}
                    </p>
                    <Show when=move || notice.get().is_some()>
                        <p class="page-notice">{move || notice.get().unwrap_or_default()}</p>
                    </Show>
                    <form class="course-form" on:submit=on_submit.clone()>
                        <label class="course-form__label" for="title">"Course Title"</label>
                        <input
                            id="title"
                            class="course-form__input"
                            type="text"
                            placeholder="Enter course title"
                            prop:value=move || title.get()
                            on:input=move |ev| title.set(event_target_value(&ev))
                        />
                        <label class="course-form__label" for="description">"Description"</label>
                        <textarea
                            id="description"
                            class="course-form__textarea"
                            placeholder="Provide a detailed course description"
                            rows="4"
                            prop:value=move || description.get()
                            on:input=move |ev| description.set(event_target_value(&ev))
                        ></textarea>
                        <div class="course-form__row">
                            <div class="course-form__field">
                                <label class="course-form__label" for="duration">"Duration"</label>
                                <input
                                    id="duration"
                                    class="course-form__input"
                                    type="text"
                                    placeholder="e.g., 8 weeks"
                                    prop:value=move || duration.get()
                                    on:input=move |ev| duration.set(event_target_value(&ev))
                                />
                            </div>
                            <div class="course-form__field">
                                <label class="course-form__label" for="instructor">"Instructor"</label>
                                <input
                                    id="instructor"
                                    class="course-form__input"
                                    type="text"
                                    placeholder="Enter instructor name"
                                    prop:value=move || instructor.get()
                                    on:input=move |ev| instructor.set(event_target_value(&ev))
                                />
                            </div>
                        </div>
                        <div class="course-form__actions">
                            <button class="btn btn--outline" type="button" on:click=on_cancel.clone()>
                                "Cancel"
                            </button>
                            <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                                {move || {
                                    if busy.get() {
                                        "Please wait"
                                    } else if creating() {
                                        "Add Course"
                                    } else {
                                        "Update Course"
                                    }
                                }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}
