//! Landing page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;

/// One documented endpoint on the landing page.
pub struct EndpointDoc {
    pub method: &'static str,
    pub path: &'static str,
    pub example: &'static str,
    pub summary: &'static str,
    /// Whether the example can be opened directly from a browser.
    pub linkable: bool,
}

const ENDPOINTS: &[EndpointDoc] = &[
    EndpointDoc {
        method: "GET",
        path: "/api/hello",
        example: "/api/hello",
        summary: "Greeting",
        linkable: true,
    },
    EndpointDoc {
        method: "GET",
        path: "/api/whoami",
        example: "/api/whoami",
        summary: "Your IP address, preferred language and user agent",
        linkable: true,
    },
    EndpointDoc {
        method: "POST",
        path: "/api/shorturl",
        example: "/api/shorturl",
        summary: "Shorten a URL (form field url)",
        linkable: false,
    },
    EndpointDoc {
        method: "GET",
        path: "/api/shorturl/{short}",
        example: "/api/shorturl/1",
        summary: "Redirect to a shortened URL",
        linkable: true,
    },
    EndpointDoc {
        method: "GET",
        path: "/api/time/{date}",
        example: "/api/time/2015-12-25",
        summary: "Unix milliseconds and UTC string for a date (current time when omitted)",
        linkable: true,
    },
    EndpointDoc {
        method: "POST",
        path: "/api/users",
        example: "/api/users",
        summary: "Create a user (form field username)",
        linkable: false,
    },
    EndpointDoc {
        method: "GET",
        path: "/api/users",
        example: "/api/users",
        summary: "List users",
        linkable: true,
    },
    EndpointDoc {
        method: "POST",
        path: "/api/users/{_id}/exercises",
        example: "/api/users/{_id}/exercises",
        summary: "Log an exercise (form fields description, duration, date)",
        linkable: false,
    },
    EndpointDoc {
        method: "GET",
        path: "/api/users/{_id}/logs",
        example: "/api/users/{_id}/logs?from=2024-01-01&to=2024-12-31&limit=10",
        summary: "Exercise log, optionally filtered",
        linkable: false,
    },
];

/// Template for the landing page.
///
/// Renders `templates/index.html` with the list of endpoints and forms for
/// the URL shortener and the exercise tracker.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub version: &'static str,
    pub endpoints: &'static [EndpointDoc],
}

/// Renders the landing page.
///
/// # Endpoint
///
/// `GET /`
pub async fn index_handler() -> impl IntoResponse {
    IndexTemplate {
        version: env!("CARGO_PKG_VERSION"),
        endpoints: ENDPOINTS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_renders_endpoints() {
        let html = IndexTemplate {
            version: "0.0.0",
            endpoints: ENDPOINTS,
        }
        .render()
        .unwrap();

        assert!(html.contains("/api/shorturl"));
        assert!(html.contains("/api/users/{_id}/logs"));
        assert!(html.contains("0.0.0"));
    }
}
