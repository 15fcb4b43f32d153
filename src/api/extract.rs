//! Request extractors shared by API handlers.

use axum::{
    Form,
    extract::{FromRequest, FromRequestParts, Query, Request},
    http::{HeaderMap, header, request::Parts},
};
use serde::de::DeserializeOwned;
use std::convert::Infallible;
use std::net::SocketAddr;

/// Form extractor that never rejects.
///
/// A missing body, a wrong content type or an undecodable payload yields
/// `T::default()`, so handlers can answer with their own `{error}` payload
/// instead of an axum rejection status.
#[derive(Debug, Clone, Default)]
pub struct LenientForm<T>(pub T);

impl<T, S> FromRequest<S> for LenientForm<T>
where
    T: DeserializeOwned + Default + Send,
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Form::<T>::from_request(req, state).await {
            Ok(Form(value)) => Ok(Self(value)),
            Err(rejection) => {
                tracing::debug!("Falling back to empty form: {}", rejection);
                Ok(Self(T::default()))
            }
        }
    }
}

/// Query-string extractor that never rejects.
///
/// Duplicate or undecodable parameters yield `T::default()`.
#[derive(Debug, Clone, Default)]
pub struct LenientQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for LenientQuery<T>
where
    T: DeserializeOwned + Default + Send,
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Query::<T>::from_request_parts(parts, state).await {
            Ok(Query(value)) => Ok(Self(value)),
            Err(rejection) => {
                tracing::debug!("Falling back to empty query: {}", rejection);
                Ok(Self(T::default()))
            }
        }
    }
}

/// Determines the client IP address.
///
/// With `behind_proxy`, the first `X-Forwarded-For` entry wins, then
/// `X-Real-IP`; otherwise (or when neither header is usable) the peer socket
/// address is used.
pub fn client_ip(headers: &HeaderMap, peer: SocketAddr, behind_proxy: bool) -> String {
    if behind_proxy {
        let forwarded = headers
            .get("x-forwarded-for")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(',').next())
            .map(str::trim)
            .filter(|v| !v.is_empty());

        let real_ip = || {
            headers
                .get("x-real-ip")
                .and_then(|v| v.to_str().ok())
                .map(str::trim)
                .filter(|v| !v.is_empty())
        };

        if let Some(ip) = forwarded.or_else(real_ip) {
            return ip.to_string();
        }
    }

    peer.ip().to_string()
}

/// Returns a header value as a string, or an empty string when absent.
pub fn header_or_empty(headers: &HeaderMap, name: header::HeaderName) -> String {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[derive(Debug, Default, serde::Deserialize)]
    struct Params {
        limit: Option<String>,
    }

    async fn lenient_query(uri: &str) -> Params {
        let (mut parts, _) = axum::http::Request::builder()
            .uri(uri)
            .body(())
            .unwrap()
            .into_parts();
        let LenientQuery(params) = LenientQuery::<Params>::from_request_parts(&mut parts, &())
            .await
            .unwrap();
        params
    }

    #[tokio::test]
    async fn test_lenient_query_parses() {
        assert_eq!(lenient_query("/logs?limit=3").await.limit.as_deref(), Some("3"));
    }

    #[tokio::test]
    async fn test_lenient_query_duplicate_field_falls_back() {
        assert!(lenient_query("/logs?limit=1&limit=2").await.limit.is_none());
    }

    fn peer() -> SocketAddr {
        "10.1.2.3:4567".parse().unwrap()
    }

    #[test]
    fn test_client_ip_uses_peer_by_default() {
        let mut headers = HeaderMap::new();
        headers.insert("x-forwarded-for", HeaderValue::from_static("203.0.113.9"));

        assert_eq!(client_ip(&headers, peer(), false), "10.1.2.3");
    }

    #[test]
    fn test_client_ip_behind_proxy() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "x-forwarded-for",
            HeaderValue::from_static("203.0.113.9, 10.0.0.1"),
        );
        headers.insert("x-real-ip", HeaderValue::from_static("198.51.100.7"));

        assert_eq!(client_ip(&headers, peer(), true), "203.0.113.9");
    }

    #[test]
    fn test_client_ip_real_ip_fallback() {
        let mut headers = HeaderMap::new();
        headers.insert("x-real-ip", HeaderValue::from_static("198.51.100.7"));

        assert_eq!(client_ip(&headers, peer(), true), "198.51.100.7");
    }

    #[test]
    fn test_client_ip_without_proxy_headers() {
        assert_eq!(client_ip(&HeaderMap::new(), peer(), true), "10.1.2.3");
    }

    #[test]
    fn test_header_or_empty() {
        let mut headers = HeaderMap::new();
        headers.insert(header::USER_AGENT, HeaderValue::from_static("curl/8.0"));

        assert_eq!(header_or_empty(&headers, header::USER_AGENT), "curl/8.0");
        assert_eq!(header_or_empty(&headers, header::ACCEPT_LANGUAGE), "");
    }
}
