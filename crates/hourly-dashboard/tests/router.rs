//! End-to-end tests of the dashboard router with a demo backend.

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use axum::response::Response;
use hourly_auth::{Backend, DemoDirectory, mint_unsigned};
use hourly_core::{DemoUser, HourlyConfig, StorageKind, UserId, UserRecord};
use hourly_dashboard::{AppState, routes::create_router};
use tower::ServiceExt;

fn user(id: u64, login: &str, role: &str) -> DemoUser {
    let mut record = UserRecord::new(UserId::from(id));
    record.login = Some(login.to_string());
    record.name = Some(format!("{login} user"));
    record.role = Some(role.to_string());
    DemoUser {
        record,
        password: Some("pw".to_string()),
    }
}

fn app_with(config: HourlyConfig) -> Router {
    let directory = DemoDirectory::new(vec![
        user(1, "ada", "admin"),
        user(2, "max", "manager"),
        user(3, "eli", "executor"),
    ]);
    create_router(AppState::with_backend(config, &Backend::demo(directory)))
}

fn app() -> Router {
    app_with(HourlyConfig::default())
}

fn get(path: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().uri(path);
    if let Some(token) = token {
        builder = builder.header(header::COOKIE, format!("authToken={token}"));
    }
    builder.body(Body::empty()).unwrap()
}

fn post_form(path: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(path)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn token_for(id: u64) -> String {
    mint_unsigned(&UserId::from(id), None).unwrap().into_inner()
}

fn location(response: &Response) -> &str {
    response.headers().get(header::LOCATION).unwrap().to_str().unwrap()
}

fn set_cookie(response: &Response) -> Option<&str> {
    response
        .headers()
        .get(header::SET_COOKIE)
        .map(|v| v.to_str().unwrap())
}

async fn body_text(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn test_health_endpoint() {
    let response = app().oneshot(get("/healthz", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(body["ok"], true);
    assert_eq!(body["service"], "hourly-dashboard");
}

#[tokio::test]
async fn test_login_page_is_public() {
    let response = app().oneshot(get("/", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(set_cookie(&response).is_none());
    assert!(body_text(response).await.contains(r#"action="/login""#));
}

#[tokio::test]
async fn test_protected_page_without_cookie_redirects_to_login() {
    let response = app().oneshot(get("/admin", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");
    assert!(set_cookie(&response).is_none());
}

#[tokio::test]
async fn test_matching_role_renders_shell() {
    let token = token_for(1);
    let response = app().oneshot(get("/admin", Some(&token))).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(set_cookie(&response).is_none());

    let body = body_text(response).await;
    assert!(body.contains("Users"));
    assert!(body.contains("Competencies"));
    assert!(body.contains("ada user"));
}

#[tokio::test]
async fn test_role_mismatch_redirects_to_landing_and_keeps_cookie() {
    let token = token_for(2);
    let response = app().oneshot(get("/admin", Some(&token))).await.unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/manager");
    assert!(set_cookie(&response).is_none());
}

#[tokio::test]
async fn test_dashboard_allows_any_role() {
    for id in [1, 2, 3] {
        let token = token_for(id);
        let response = app().oneshot(get("/dashboard", Some(&token))).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK, "user {id}");
    }
}

#[tokio::test]
async fn test_bad_token_is_cleared() {
    let response = app()
        .oneshot(get("/executor", Some("h.%25%25%25.s")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");
    assert!(set_cookie(&response).unwrap().contains("Max-Age=0"));
}

#[tokio::test]
async fn test_unknown_user_is_cleared() {
    let token = token_for(42);
    let response = app().oneshot(get("/manager", Some(&token))).await.unwrap();
    assert_eq!(location(&response), "/");
    assert!(set_cookie(&response).unwrap().starts_with("authToken=;"));
}

#[tokio::test]
async fn test_login_sets_cookie_and_redirects_to_landing() {
    let response = app()
        .oneshot(post_form("/login", "login=eli&password=pw"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/executor");

    let cookie = set_cookie(&response).unwrap();
    assert!(cookie.starts_with("authToken="));
    assert!(cookie.contains("Max-Age=86400"));
}

#[tokio::test]
async fn test_session_storage_emits_session_cookie() {
    let mut config = HourlyConfig::default();
    config.session.storage = StorageKind::Session;

    let response = app_with(config)
        .oneshot(post_form("/login", "login=eli&password=pw"))
        .await
        .unwrap();
    assert!(!set_cookie(&response).unwrap().contains("Max-Age"));
}

#[tokio::test]
async fn test_rejected_login_redirects_with_error() {
    let response = app()
        .oneshot(post_form("/login", "login=eli&password=nope"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/?error=invalid");
    assert!(set_cookie(&response).is_none());
}

#[tokio::test]
async fn test_logout_clears_cookie() {
    let request = Request::builder()
        .method("POST")
        .uri("/logout")
        .header(header::COOKIE, format!("authToken={}", token_for(1)))
        .body(Body::empty())
        .unwrap();

    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");
    assert!(set_cookie(&response).unwrap().contains("Max-Age=0"));
}

#[tokio::test]
async fn test_unknown_path_is_404() {
    let response = app().oneshot(get("/nowhere", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
