//! Route-guard decision for the authenticated layout.
//!
//! SYSTEM CONTEXT
//! ==============
//! The guard is a pure mapping from token validity to what the protected
//! route should show. The root page turns the decision into a router
//! redirect or a rendered layout, so the mapping itself stays testable
//! without a router or a browser.

#[cfg(test)]
#[path = "gate_test.rs"]
mod gate_test;

use crate::state::token::TokenValidity;

/// Destination for unauthenticated visitors.
pub const LOGIN_PATH: &str = "/login";

/// Landing route once a session is established.
pub const HOME_PATH: &str = "/";

/// What the protected route renders for a given token validity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateDecision {
    /// Navigate to the login screen; show nothing protected.
    Redirect,
    /// Render the header, sidebar and nested content.
    ShowLayout,
    /// Validation still pending: render neither the layout nor a redirect.
    ShowNothing,
}

/// Map token validity onto the guard decision.
#[must_use]
pub fn decide(valid: TokenValidity) -> GateDecision {
    match valid {
        TokenValidity::Invalid => GateDecision::Redirect,
        TokenValidity::Valid => GateDecision::ShowLayout,
        TokenValidity::Unknown => GateDecision::ShowNothing,
    }
}

/// Path to navigate to, if the decision calls for navigation at all.
#[must_use]
pub fn redirect_target(decision: GateDecision) -> Option<&'static str> {
    match decision {
        GateDecision::Redirect => Some(LOGIN_PATH),
        GateDecision::ShowLayout | GateDecision::ShowNothing => None,
    }
}
