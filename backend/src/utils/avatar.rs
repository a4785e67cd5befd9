//! Gravatar reference derived from an email address.

use sha2::{Digest, Sha256};

const GRAVATAR_BASE_URL: &str = "https://gravatar.com/avatar";

/// Builds the avatar URL for `email`.
///
/// The address is hashed exactly as stored, so accounts whose emails differ
/// only in case get distinct avatars. `d=identicon` makes unknown addresses
/// render a generated pattern.
pub fn gravatar_url(email: &str) -> String {
    let digest = Sha256::digest(email.as_bytes());
    format!("{}/{}?d=identicon", GRAVATAR_BASE_URL, hex::encode(digest))
}
