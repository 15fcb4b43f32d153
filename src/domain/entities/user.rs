//! Exercise tracker user entity.

/// A registered user. Usernames are not unique; `id` is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub username: String,
}

impl User {
    pub fn new(id: String, username: String) -> Self {
        Self { id, username }
    }
}

/// Input data for registering a user.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
}
