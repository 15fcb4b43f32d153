//! DTO for the request header parser endpoint.

use serde::Serialize;

/// Connection and header metadata echoed back to the caller.
#[derive(Debug, Serialize)]
pub struct WhoamiResponse {
    pub ipaddress: String,
    /// `Accept-Language` header, empty when absent.
    pub language: String,
    /// `User-Agent` header, empty when absent.
    pub software: String,
}
