//! Syntactic validation of URLs submitted for shortening.
//!
//! Only checks the shape of the URL and extracts the hostname that still has
//! to be resolved. DNS resolution itself lives behind
//! [`crate::domain::resolver::HostResolver`].

use regex::Regex;
use std::sync::LazyLock;
use url::{Host, Url};

static ABSOLUTE_URL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://.+").unwrap());

static LOCALHOST_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://localhost").unwrap());

/// Errors that can occur during URL validation.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum UrlValidationError {
    #[error("URL must start with http:// or https://")]
    NotAbsolute,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("URL has no host")]
    MissingHost,
}

/// What has to happen before a validated URL can be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCheck {
    /// `localhost` URLs are accepted without a lookup.
    Skip,
    /// IP literals need no lookup either.
    IpLiteral,
    /// The contained hostname must resolve.
    Resolve(String),
}

/// Validates a raw URL and reports which host check it still needs.
///
/// # Rules
///
/// 1. Must match `^https?://.+`
/// 2. The URL must parse
/// 3. URLs starting with `http(s)://localhost` skip the host check
/// 4. Otherwise the URL must carry a host
///
/// # Errors
///
/// Returns [`UrlValidationError::NotAbsolute`] when the scheme prefix is missing,
/// [`UrlValidationError::InvalidFormat`] when the URL cannot be parsed and
/// [`UrlValidationError::MissingHost`] when it has no host.
pub fn validate_url(input: &str) -> Result<HostCheck, UrlValidationError> {
    if !ABSOLUTE_URL_REGEX.is_match(input) {
        return Err(UrlValidationError::NotAbsolute);
    }

    let url = Url::parse(input).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    if LOCALHOST_REGEX.is_match(input) {
        return Ok(HostCheck::Skip);
    }

    match url.host() {
        Some(Host::Domain(domain)) if !domain.is_empty() => {
            Ok(HostCheck::Resolve(domain.to_string()))
        }
        Some(Host::Ipv4(_)) | Some(Host::Ipv6(_)) => Ok(HostCheck::IpLiteral),
        _ => Err(UrlValidationError::MissingHost),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_https_url() {
        assert_eq!(
            validate_url("https://www.freecodecamp.org/news"),
            Ok(HostCheck::Resolve("www.freecodecamp.org".to_string()))
        );
    }

    #[test]
    fn test_validate_lowercases_host() {
        assert_eq!(
            validate_url("http://EXAMPLE.com/Path"),
            Ok(HostCheck::Resolve("example.com".to_string()))
        );
    }

    #[test]
    fn test_validate_localhost_skips_lookup() {
        assert_eq!(validate_url("http://localhost:3000/x"), Ok(HostCheck::Skip));
        assert_eq!(validate_url("https://localhost"), Ok(HostCheck::Skip));
    }

    #[test]
    fn test_validate_localhost_must_still_parse() {
        assert_eq!(validate_url("http://localhost/a\nb"), Ok(HostCheck::Skip));
        assert!(matches!(
            validate_url("http://localhost:99999/"),
            Err(UrlValidationError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_validate_ip_literal() {
        assert_eq!(
            validate_url("http://127.0.0.1:8080/"),
            Ok(HostCheck::IpLiteral)
        );
        assert_eq!(validate_url("http://[::1]/"), Ok(HostCheck::IpLiteral));
    }

    #[test]
    fn test_validate_rejects_missing_scheme() {
        assert_eq!(validate_url("not-a-url"), Err(UrlValidationError::NotAbsolute));
        assert_eq!(
            validate_url("www.example.com"),
            Err(UrlValidationError::NotAbsolute)
        );
        assert_eq!(
            validate_url("ftp://example.com"),
            Err(UrlValidationError::NotAbsolute)
        );
        assert_eq!(validate_url("https://"), Err(UrlValidationError::NotAbsolute));
        assert_eq!(validate_url(""), Err(UrlValidationError::NotAbsolute));
    }

    #[test]
    fn test_validate_rejects_unparsable() {
        assert!(matches!(
            validate_url("http://exa mple.com"),
            Err(UrlValidationError::InvalidFormat(_))
        ));
    }
}
