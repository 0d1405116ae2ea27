use bcrypt::{DEFAULT_COST, Version};
use rand::Rng;
use rand::distr::Alphanumeric;

use crate::error::OpError;

/// Length of a freshly generated secret.
pub const SECRET_LEN: usize = 16;

/// The tag the guestbook service's login path parses. bcrypt's `2a` and
/// `2b`/`2y` tags verify interchangeably in most implementations, but the
/// stored value must match the verifier byte-for-byte, so the tag is fixed
/// here instead of left to the library default.
const HASH_VERSION: Version = Version::TwoA;

/// Generate a secret of [`SECRET_LEN`] characters from [A-Za-z0-9], using
/// the thread-local CSPRNG. The caller holds the only plaintext copy that
/// will ever exist.
pub fn generate_secret() -> String {
    rand::rng()
        .sample_iter(Alphanumeric)
        .take(SECRET_LEN)
        .map(char::from)
        .collect()
}

/// Salted bcrypt hash of `secret` in the `$2a$<cost>$<salt+digest>` encoding.
pub fn hash_secret(secret: &str) -> Result<String, OpError> {
    let parts = bcrypt::hash_with_result(secret, DEFAULT_COST)?;
    Ok(parts.format_for_version(HASH_VERSION))
}
