//! Session-token state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Written by the token provider, the login page and logout controls. Read by
//! the auth gate to choose between redirecting, rendering the protected
//! layout, or rendering nothing while validation is still pending.

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

/// Tri-state validity of the stored session token.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TokenValidity {
    /// Validation has not completed yet.
    #[default]
    Unknown,
    /// The server accepted the token.
    Valid,
    /// No token is stored, or the server rejected it.
    Invalid,
}

impl TokenValidity {
    /// Map a completed server check onto the tri-state flag.
    #[must_use]
    pub fn from_check(accepted: bool) -> Self {
        if accepted { Self::Valid } else { Self::Invalid }
    }
}

/// Session token plus its validation status.
///
/// Provided app-wide as `RwSignal<TokenState>`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenState {
    pub token: Option<String>,
    pub valid: TokenValidity,
}

impl TokenState {
    /// Record the outcome of validating the current token.
    pub fn resolve(&mut self, accepted: bool) {
        self.valid = TokenValidity::from_check(accepted);
        if !accepted {
            self.token = None;
        }
    }

    /// Apply a check result only if `checked` is still the current token.
    ///
    /// Returns whether the result was applied. A check that finishes after a
    /// fresh login or a logout describes a token that is no longer in use.
    pub fn resolve_checked(&mut self, checked: &str, accepted: bool) -> bool {
        if self.token.as_deref() != Some(checked) {
            return false;
        }
        self.resolve(accepted);
        true
    }

    /// Store a freshly issued token; the server just vouched for it.
    pub fn sign_in(&mut self, token: String) {
        self.token = Some(token);
        self.valid = TokenValidity::Valid;
    }

    /// Forget the token and mark the session invalid.
    pub fn sign_out(&mut self) {
        self.token = None;
        self.valid = TokenValidity::Invalid;
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.valid == TokenValidity::Valid
    }
}
