//! End-to-end tests for the site routes.
//!
//! Each test drives the full router with an in-memory request and a
//! fixed-answer database handle.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use beantheory::config::Settings;
use beantheory::db::StaticDatabase;
use beantheory::server::{create_router, AppState, ROUTES};

fn test_app(db_alive: bool) -> Router {
    let settings = Settings::default();
    let state = AppState::new(&settings, Arc::new(StaticDatabase::new(db_alive)));
    create_router(state)
}

async fn get(app: Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn index_renders_browse_form() {
    let (status, body) = get(test_app(true), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"<table border="0">"#));
    assert!(body.contains(r#"name="speaker""#));
    assert!(body.contains(r#"name="title""#));
    assert!(body.contains("e.g. 50"));
}

#[tokio::test]
async fn index_with_query_renders_refine_form() {
    let (status, body) = get(test_app(true), "/?speaker=Serre&bogus=1").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Search results"));
    assert!(body.contains(r#"value="Serre""#));
    assert!(body.contains("Ignored parameters: bogus"));
}

#[tokio::test]
async fn health_returns_greeting_when_db_is_alive() {
    let (status, body) = get(test_app(true), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Beantheory!");

    let (status, _) = get(test_app(true), "/alive").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn health_returns_503_when_db_is_down() {
    let (status, body) = get(test_app(false), "/health").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert!(body.contains("currently unavailable"));
}

#[tokio::test]
async fn info_page_reports_offline_database() {
    let (status, body) = get(test_app(false), "/info").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("HOSTNAME"));
    assert!(body.contains("db is offline"));
    assert!(body.contains("# GIT info"));
    assert!(body.contains("<br>"));
}

#[tokio::test]
async fn sitemap_lists_every_route_sorted() {
    let (status, body) = get(test_app(true), "/sitemap").await;
    assert_eq!(status, StatusCode::OK);
    for (path, _) in ROUTES {
        assert!(body.contains(&format!(r#"href="{path}""#)), "missing {path}");
    }
}

#[tokio::test]
async fn unknown_route_renders_404_page() {
    let (status, body) = get(test_app(true), "/no-such-page").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("Page Not Found"));
    assert!(body.contains("/no-such-page is not a valid route."));
}

#[tokio::test]
async fn stylesheet_is_served_with_cache_headers() {
    let app = test_app(true);
    let response = app
        .oneshot(Request::builder().uri("/style.css").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "text/css"
    );
    assert_eq!(
        response.headers().get(header::CACHE_CONTROL).unwrap(),
        "public, max-age=600"
    );
}

#[tokio::test]
async fn robots_txt_disallows_off_canonical_hosts() {
    let app = test_app(true);
    let response = app
        .oneshot(
            Request::builder()
                .uri("/robots.txt")
                .header(header::HOST, "beta.beantheory.example")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert!(String::from_utf8(body.to_vec())
        .unwrap()
        .contains("Disallow: /"));
}

#[tokio::test]
async fn plain_http_on_canonical_host_redirects_to_https() {
    let app = test_app(true);
    let response = app
        .oneshot(
            Request::builder()
                .uri("/about")
                .header(header::HOST, "beantheory.org")
                .header("x-forwarded-proto", "http")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::MOVED_PERMANENTLY);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "https://beantheory.org/about"
    );
}

#[tokio::test]
async fn https_requests_are_not_redirected() {
    let app = test_app(true);
    let response = app
        .oneshot(
            Request::builder()
                .uri("/about")
                .header(header::HOST, "beantheory.org")
                .header("x-forwarded-proto", "https")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
