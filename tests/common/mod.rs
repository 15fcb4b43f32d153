#![allow(dead_code)]

use api_microservices::api::routes::api_routes;
use api_microservices::infrastructure::dns::StaticResolver;
use api_microservices::state::AppState;
use axum::{Router, extract::ConnectInfo};
use axum_test::TestServer;
use std::net::SocketAddr;
use std::sync::Arc;
use tower::Layer;

/// Hosts the test resolver knows about.
pub const KNOWN_HOSTS: &[&str] = &["example.com", "www.example.com", "freecodecamp.org"];

pub fn create_test_state() -> AppState {
    create_test_state_with_proxy(false)
}

pub fn create_test_state_with_proxy(behind_proxy: bool) -> AppState {
    let resolver = KNOWN_HOSTS
        .iter()
        .fold(StaticResolver::new(), |resolver, host| {
            resolver.with_host(host)
        });

    AppState::new(Arc::new(resolver), behind_proxy)
}

/// API router nested under `/api`, as mounted by the application.
pub fn api_server(state: AppState) -> TestServer {
    let app = Router::new()
        .nest("/api", api_routes())
        .layer(MockConnectInfoLayer)
        .with_state(state);

    TestServer::new(app).unwrap()
}

pub async fn create_user(server: &TestServer, username: &str) -> String {
    let response = server
        .post("/api/users")
        .form(&[("username", username)])
        .await;
    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    json["_id"].as_str().unwrap().to_string()
}

pub async fn add_exercise(
    server: &TestServer,
    user_id: &str,
    description: &str,
    duration: &str,
    date: &str,
) -> serde_json::Value {
    let response = server
        .post(&format!("/api/users/{}/exercises", user_id))
        .form(&[
            ("description", description),
            ("duration", duration),
            ("date", date),
        ])
        .await;
    response.assert_status_ok();

    response.json::<serde_json::Value>()
}

#[derive(Clone)]
pub struct MockConnectInfoLayer;

impl<S> Layer<S> for MockConnectInfoLayer {
    type Service = MockConnectInfoService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        MockConnectInfoService { inner }
    }
}

#[derive(Clone)]
pub struct MockConnectInfoService<S> {
    inner: S,
}

impl<S, B> tower::Service<axum::http::Request<B>> for MockConnectInfoService<S>
where
    S: tower::Service<axum::http::Request<B>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    B: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: axum::http::Request<B>) -> Self::Future {
        let addr: SocketAddr = "127.0.0.1:12345".parse().unwrap();
        req.extensions_mut().insert(ConnectInfo(addr));
        self.inner.call(req)
    }
}
