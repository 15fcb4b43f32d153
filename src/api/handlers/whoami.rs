//! Handler for the request header parser endpoint.

use axum::{
    Json,
    extract::{ConnectInfo, State},
    http::{HeaderMap, header},
};
use std::net::SocketAddr;

use crate::api::dto::whoami::WhoamiResponse;
use crate::api::extract::{client_ip, header_or_empty};
use crate::state::AppState;

/// Echoes the caller's IP address, preferred language and user agent.
///
/// # Endpoint
///
/// `GET /api/whoami`
///
/// # Response
///
/// ```json
/// {
///   "ipaddress": "203.0.113.9",
///   "language": "en-US,en;q=0.9",
///   "software": "Mozilla/5.0 (X11; Linux x86_64)"
/// }
/// ```
pub async fn whoami_handler(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
) -> Json<WhoamiResponse> {
    Json(WhoamiResponse {
        ipaddress: client_ip(&headers, addr, state.behind_proxy),
        language: header_or_empty(&headers, header::ACCEPT_LANGUAGE),
        software: header_or_empty(&headers, header::USER_AGENT),
    })
}
