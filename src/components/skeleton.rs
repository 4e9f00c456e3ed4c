//! Loading placeholders shown while page data is in flight.

use leptos::prelude::*;

/// A shimmering placeholder block sized by the caller's class.
#[component]
pub fn Skeleton(#[prop(optional)] class: &'static str) -> impl IntoView {
    view! { <div class=format!("skeleton {class}")></div> }
}

/// Card-shaped placeholder matching the course card layout.
#[component]
pub fn SkeletonCard() -> impl IntoView {
    view! {
        <div class="course-card course-card--skeleton">
            <Skeleton class="skeleton--title"/>
            <Skeleton class="skeleton--line"/>
            <Skeleton class="skeleton--line skeleton--line-short"/>
            <Skeleton class="skeleton--button"/>
        </div>
    }
}
