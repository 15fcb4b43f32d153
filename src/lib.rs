//! # API Microservices
//!
//! A set of small HTTP microservices served by a single Axum application:
//!
//! - **Hello** - `GET /api/hello`
//! - **Request header parser** - `GET /api/whoami`
//! - **URL shortener** - `POST /api/shorturl`, `GET /api/shorturl/{short}`
//! - **Timestamp** - `GET /api/time/{date}`
//! - **Exercise tracker** - `/api/users`, `/api/users/{_id}/exercises`, `/api/users/{_id}/logs`
//!
//! All state is kept in memory and lost on restart.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entities, repository and resolver traits
//! - **Application Layer** ([`application`]) - Business logic services
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory stores and DNS resolution
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//! - **Web Layer** ([`web`]) - HTML landing page
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;
