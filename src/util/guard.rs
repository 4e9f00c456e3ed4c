//! Shared route guard for authenticated and role-restricted pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every route applies the same mount-time check: read the session token,
//! decode its claims, and silently redirect when the check fails. Pages vary
//! only in the role requirement and the two redirect targets, so the guard is
//! installed once per page instead of being re-implemented per page.
//!
//! Guard denials never retry and never surface user-visible errors; redirects
//! are the whole failure mode. Data-fetch failures after `Allowed` are the
//! pages' concern.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::{self, SessionState};
use crate::util::token::{self, Claims};

/// Per-page authorization predicate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoleRequirement {
    /// Any decodable token with a non-empty role claim.
    SignedIn,
    /// The role claim must equal `"admin"`.
    Admin,
}

/// Where the guard sends denied visitors.
#[derive(Clone, Copy, Debug)]
pub struct RedirectTargets {
    /// Missing or undecodable token: the visitor is not authenticated.
    pub sign_in: &'static str,
    /// Authenticated but under-privileged: the default authenticated landing.
    pub fallback: &'static str,
}

impl Default for RedirectTargets {
    fn default() -> Self {
        Self { sign_in: session::SIGN_IN_ROUTE, fallback: "/courses" }
    }
}

/// Result of evaluating the guard against current session state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Session is still hydrating from storage; render nothing yet.
    Pending,
    /// Checks passed; page content and data fetches may proceed.
    Allowed(Claims),
    /// No token, an undecodable token, or an empty role claim.
    DeniedUnauthenticated,
    /// Valid session, wrong role for this page.
    DeniedUnauthorized,
}

/// Pure guard state machine, re-run whenever the token changes.
pub fn evaluate(state: &SessionState, requirement: RoleRequirement) -> GuardOutcome {
    if state.loading {
        return GuardOutcome::Pending;
    }
    let Some(raw) = state.token.as_deref() else {
        return GuardOutcome::DeniedUnauthenticated;
    };
    let Ok(claims) = token::decode(raw) else {
        return GuardOutcome::DeniedUnauthenticated;
    };
    if claims.role.is_empty() {
        return GuardOutcome::DeniedUnauthenticated;
    }
    match requirement {
        RoleRequirement::SignedIn => GuardOutcome::Allowed(claims),
        RoleRequirement::Admin if claims.role == "admin" => GuardOutcome::Allowed(claims),
        RoleRequirement::Admin => GuardOutcome::DeniedUnauthorized,
    }
}

/// Install the guard for the current page.
///
/// Evaluates once on mount and again on every session change. Denials
/// redirect silently; an undecodable token is also dropped from the session
/// so it cannot linger in storage. Returns the live outcome for `Show`-gating
/// page content and reading the decoded claims.
pub fn install_route_guard<F>(
    session: RwSignal<SessionState>,
    requirement: RoleRequirement,
    targets: RedirectTargets,
    navigate: F,
) -> Memo<GuardOutcome>
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let outcome = Memo::new(move |_| evaluate(&session.get(), requirement));
    Effect::new(move || match outcome.get() {
        GuardOutcome::DeniedUnauthenticated => {
            if session.get_untracked().token.is_some() {
                session::clear(session);
            }
            navigate(targets.sign_in, NavigateOptions::default());
        }
        GuardOutcome::DeniedUnauthorized => {
            navigate(targets.fallback, NavigateOptions::default());
        }
        GuardOutcome::Pending | GuardOutcome::Allowed(_) => {}
    });
    outcome
}
