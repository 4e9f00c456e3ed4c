//! Home page — the role-titled landing dashboard.
//!
//! SYSTEM CONTEXT
//! ==============
//! The default authenticated route. Requires only a decodable session; the
//! decoded claims pick between the learner and admin renditions. All content
//! here is static chrome; the real data lives on the catalog and admin
//! routes.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::session::expect_session;
use crate::util::guard::{GuardOutcome, RedirectTargets, RoleRequirement, install_route_guard};

const USER_FEATURES: [(&str, &str); 4] = [
    ("Diverse Courses", "Explore a wide range of courses tailored to your interests and career goals."),
    ("Expert Instructors", "Learn from industry professionals and experienced educators."),
    ("Track Progress", "Monitor your learning journey with detailed progress reports."),
    ("Earn Certificates", "Receive recognized certificates upon course completion."),
];

const ADMIN_FEATURES: [(&str, &str); 4] = [
    ("Course Management", "Create, edit, and manage courses with ease."),
    ("User Analytics", "Gain insights into user engagement and performance."),
    ("Content Creation", "Develop and publish high-quality learning materials."),
    ("System Settings", "Configure and optimize the learning platform."),
];

fn welcome_heading(role: &str, user_id: &str) -> String {
    let kind = if role == "admin" { "Admin" } else { "Learning" };
    format!("Welcome to Your {kind} Dashboard, {user_id}")
}

fn welcome_subtitle(role: &str) -> &'static str {
    if role == "admin" {
        "Manage and optimize your learning platform"
    } else {
        "Your gateway to knowledge and skill development"
    }
}

/// Landing dashboard, rendered per role.
#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_session();
    let navigate = use_navigate();
    let guard =
        install_route_guard(session, RoleRequirement::SignedIn, RedirectTargets::default(), navigate);

    view! {
        <div class="home-page">
            {move || match guard.get() {
                GuardOutcome::Allowed(claims) => {
                    let is_admin = claims.role == "admin";
                    let features = if is_admin { ADMIN_FEATURES } else { USER_FEATURES };
                    let (cta_href, cta_label) =
                        if is_admin { ("/admin", "Manage Courses") } else { ("/courses", "Explore Courses Now") };
                    view! {
                        <h1 class="home-page__heading">{welcome_heading(&claims.role, &claims.user_id)}</h1>
                        <p class="home-page__subtitle">{welcome_subtitle(&claims.role)}</p>
                        <h2 class="home-page__section">
                            {if is_admin { "Admin Tools" } else { "Why Choose Our Platform?" }}
                        </h2>
                        <div class="home-page__features">
                            {features
                                .into_iter()
                                .map(|(title, description)| {
                                    view! {
                                        <div class="feature-card">
                                            <span class="feature-card__title">{title}</span>
                                            <p class="feature-card__description">{description}</p>
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </div>
                        <div class="home-page__cta">
                            <a class="btn btn--primary" href=cta_href>{cta_label}</a>
                        </div>
                    }
                    .into_any()
                }
                GuardOutcome::Pending => view! { <p>"Loading..."</p> }.into_any(),
                GuardOutcome::DeniedUnauthenticated | GuardOutcome::DeniedUnauthorized => {
                    view! { <p>"Redirecting..."</p> }.into_any()
                }
            }}
        </div>
    }
}
