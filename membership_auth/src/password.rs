use subtle::ConstantTimeEq;

use crate::config::Secret;

/// Compare a submitted password against the membership password.
///
/// Exact byte equality: case-sensitive, no trimming or normalization.
pub(crate) fn verify_password(candidate: &str, expected: &Secret) -> bool {
    candidate
        .as_bytes()
        .ct_eq(expected.expose().as_bytes())
        .into()
}
