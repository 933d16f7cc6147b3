//! Console login check.
//!
//! Both sides are hashed before comparison so the comparison length never
//! depends on the submitted input, and digests are compared without early
//! exit.

use sha2::{Digest, Sha256};

fn digest(value: &str) -> [u8; 32] {
    Sha256::digest(value.as_bytes()).into()
}

/// OR of the byte-wise XOR; zero means equal.
fn digest_diff(a: &[u8; 32], b: &[u8; 32]) -> u8 {
    a.iter().zip(b.iter()).fold(0u8, |acc, (x, y)| acc | (x ^ y))
}

/// Whether the submitted pair matches the configured account.
#[must_use]
pub fn credentials_match(expected_user: &str, expected_pass: &str, user: &str, pass: &str) -> bool {
    let user_diff = digest_diff(&digest(expected_user), &digest(user));
    let pass_diff = digest_diff(&digest(expected_pass), &digest(pass));
    (user_diff | pass_diff) == 0
}

#[cfg(test)]
#[path = "credentials_test.rs"]
mod tests;
