//! Identifier generation for short URLs and users.

use rand::Rng;

/// Number of random bytes in a user id (24 hex characters).
const USER_ID_BYTES: usize = 12;

/// Generates an opaque user id made of 24 lowercase hex characters.
///
/// # Examples
///
/// ```ignore
/// let id = generate_user_id();
/// assert_eq!(id.len(), 24);
/// assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
/// ```
pub fn generate_user_id() -> String {
    let mut buffer = [0u8; USER_ID_BYTES];
    rand::rng().fill(&mut buffer);

    hex::encode(buffer)
}

/// Renders a sequential counter value as a short identifier (lowercase hex).
pub fn short_id_from_counter(counter: u64) -> String {
    format!("{:x}", counter)
}
