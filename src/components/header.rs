//! Site header with role-aware navigation.
//!
//! SYSTEM CONTEXT
//! ==============
//! The header derives the visitor's role from the session token on every
//! token change. An undecodable token renders the signed-out nav; the route
//! guards own clearing it.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::{self, SessionState, expect_session};
use crate::util::token;

/// Role shown in the nav, or `None` while hydrating / signed out / when the
/// token does not decode.
pub fn nav_role(state: &SessionState) -> Option<String> {
    if state.loading {
        return None;
    }
    let claims = token::decode(state.token.as_deref()?).ok()?;
    if claims.role.is_empty() { None } else { Some(claims.role) }
}

/// Top navigation bar rendered on every route.
#[component]
pub fn Header() -> impl IntoView {
    let session = expect_session();
    let navigate = use_navigate();
    let role = Memo::new(move |_| nav_role(&session.get()));

    let on_logout = move |_| {
        session::logout(session, |to| navigate(to, NavigateOptions::default()));
    };

    view! {
        <header class="site-header">
            <nav class="site-header__nav">
                <a class="site-header__brand" href="/">"Courseboard"</a>
                <span class="site-header__spacer"></span>
                <Show when=move || role.get().is_some()>
                    <a class="btn btn--ghost" href="/courses">"Courses"</a>
                    <a class="btn btn--ghost" href="/enrolledCourses">"Enrolled Courses"</a>
                </Show>
                <Show when=move || role.get().as_deref() == Some("admin")>
                    <a class="btn btn--ghost" href="/admin">"Admin"</a>
                </Show>
                <Show
                    when=move || role.get().is_some()
                    fallback=|| view! { <a class="btn btn--outline" href="/auth">"Login"</a> }
                >
                    <button class="btn btn--outline" on:click=on_logout.clone()>"Logout"</button>
                </Show>
            </nav>
        </header>
    }
}
