//! Sign-in page exchanging a user ID for a session token.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only unauthenticated route. A successful login stores the issued
//! token through the session context, then routes by the decoded role claim:
//! admins land on the admin console, everyone else on the home dashboard.

#[cfg(test)]
#[path = "sign_in_test.rs"]
mod sign_in_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::expect_session;

fn validate_user_id_input(raw: &str) -> Result<String, &'static str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        Err("Enter your User ID first.")
    } else {
        Ok(trimmed.to_owned())
    }
}

/// Where a fresh sign-in lands, by decoded role.
#[cfg(any(test, feature = "hydrate"))]
fn landing_route(role: &str) -> &'static str {
    if role == "admin" { "/admin" } else { "/" }
}

/// Sign-in form page.
#[component]
pub fn SignInPage() -> impl IntoView {
    let session = expect_session();
    let user_id = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let navigate = use_navigate();

    let on_sign_in = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let value = match validate_user_id_input(&user_id.get()) {
            Ok(value) => value,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::login(&value).await {
                    Ok(issued) => {
                        crate::state::session::login(session, issued.clone());
                        // An undecodable token falls back to home, where the
                        // route guard takes over.
                        let route = crate::util::token::decode(&issued)
                            .map(|claims| landing_route(&claims.role))
                            .unwrap_or("/");
                        navigate(route, NavigateOptions::default());
                    }
                    Err(e) => {
                        leptos::logging::warn!("login failed: {e}");
                        info.set("Invalid credentials. Please try again.".to_owned());
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &navigate;
        }
    };

    view! {
        <div class="signin-page">
            <div class="signin-card">
                <h1>"Welcome Back"</h1>
                <p class="signin-card__subtitle">"Enter your User ID to sign in"</p>
                <form class="signin-form" on:submit=on_sign_in>
                    <label class="signin-form__label" for="user-id">"User ID"</label>
                    <input
                        id="user-id"
                        class="signin-input"
                        type="text"
                        placeholder="Enter your User ID"
                        prop:value=move || user_id.get()
                        on:input=move |ev| user_id.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing In..." } else { "Sign In" }}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="signin-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
