//! Reusable card component for course list items.
//!
//! DESIGN
//! ======
//! Keeps course presentation consistent between the catalog and the enrolled
//! list; the enrolled variant swaps the detail link for a progress
//! affordance.

use leptos::prelude::*;

use crate::net::types::Course;

/// A card representing one course.
#[component]
pub fn CourseCard(course: Course, #[prop(optional)] enrolled: bool) -> impl IntoView {
    let detail_href = format!("/courses/{}", course.id);

    view! {
        <div class="course-card">
            <div class="course-card__header">
                <span class="course-card__title">{course.title}</span>
                <span class="course-card__instructor">{course.instructor}</span>
            </div>
            <p class="course-card__description">{course.description}</p>
            <div class="course-card__meta">
                <span class="course-card__duration">"Duration: " {course.duration}</span>
                <Show when=move || enrolled>
                    <span class="course-card__badge">"Enrolled"</span>
                </Show>
            </div>
            <div class="course-card__footer">
                {if enrolled {
                    view! { <button class="btn btn--outline">"Continue Learning"</button> }.into_any()
                } else {
                    view! { <a class="btn btn--primary" href=detail_href>"View Details"</a> }.into_any()
                }}
            </div>
        </div>
    }
}
