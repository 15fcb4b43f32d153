//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod exercises;
pub mod hello;
pub mod logs;
pub mod redirect;
pub mod shorten;
pub mod timestamp;
pub mod users;
pub mod whoami;

pub use exercises::add_exercise_handler;
pub use hello::hello_handler;
pub use logs::logs_handler;
pub use redirect::redirect_handler;
pub use shorten::shorten_handler;
pub use timestamp::{timestamp_handler, timestamp_now_handler};
pub use users::{create_user_handler, list_users_handler};
pub use whoami::whoami_handler;
