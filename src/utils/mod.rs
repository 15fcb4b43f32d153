//! Utility functions for date handling, identifiers and URL validation.
//!
//! - [`date_parser`] - Epoch/calendar date parsing and rendering
//! - [`id_generator`] - Short URL and user id generation
//! - [`url_validator`] - Syntactic URL checks for the shortener

pub mod date_parser;
pub mod id_generator;
pub mod url_validator;
