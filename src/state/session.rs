//! Session state for the current browser tab.
//!
//! SYSTEM CONTEXT
//! ==============
//! Exactly one session exists per tab, provided as `RwSignal<SessionState>`
//! context from the app root. Pages and the header read the token through it;
//! only `login`/`logout` (and the route guard's stale-token cleanup) mutate
//! it. The persisted token lives in [`crate::util::storage`].

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::util::storage;

/// Route users land on when unauthenticated.
pub const SIGN_IN_ROUTE: &str = "/auth";

/// Session state tracking the bearer token and hydration status.
///
/// `loading` is `true` from first render until the one-shot localStorage read
/// completes, so dependent reads observe "no token" during that window
/// instead of a stale default.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionState {
    pub token: Option<String>,
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self { token: None, loading: true }
    }
}

/// Fetch the session signal from context.
///
/// # Panics
///
/// Panics when called outside the root `App` provider; session access from an
/// unmounted tree is a programming error, not a recoverable state.
pub fn expect_session() -> RwSignal<SessionState> {
    use_context::<RwSignal<SessionState>>()
        .expect("session context is only available under the root App provider")
}

/// One-shot hydration: read the persisted token into in-memory state.
pub fn hydrate_from_storage(session: RwSignal<SessionState>) {
    let token = storage::load();
    session.update(|state| {
        state.token = token;
        state.loading = false;
    });
}

/// Record a freshly issued token. The token was already obtained from the
/// login endpoint; no server round-trip happens here.
pub fn login(session: RwSignal<SessionState>, token: String) {
    storage::save(&token);
    session.update(|state| apply_login(state, token));
}

/// End the session: drop the persisted and in-memory token, then navigate to
/// the sign-in route. Navigation is unconditional and happens exactly once
/// per call; calling twice is harmless.
pub fn logout(session: RwSignal<SessionState>, navigate: impl FnOnce(&str)) {
    clear(session);
    navigate(SIGN_IN_ROUTE);
}

/// Logout semantics minus navigation. The route guard uses this to drop an
/// undecodable token before issuing its own redirect.
pub fn clear(session: RwSignal<SessionState>) {
    storage::clear();
    session.update(apply_logout);
}

fn apply_login(state: &mut SessionState, token: String) {
    state.token = Some(token);
    state.loading = false;
}

fn apply_logout(state: &mut SessionState) {
    state.token = None;
    state.loading = false;
}
