//! Data Transfer Objects for API requests and responses.
//!
//! Request DTOs keep every field as a string and coerce it explicitly into
//! typed values before any service is called.

pub mod exercises;
pub mod hello;
pub mod logs;
pub mod shorten;
pub mod timestamp;
pub mod users;
pub mod whoami;
