//! ApiClient against a mocked REST backend.

use hourly_auth::{
    ApiClient, AuthError, Credential, IdentityResolver, LoginProvider, MemoryTokenStore,
    ResolveIdentity, TokenStore, mint_unsigned, session,
};
use hourly_core::{ApiConfig, Role, UserId};
use serde_json::json;
use std::sync::Arc;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> Arc<ApiClient> {
    let config = ApiConfig {
        base_url: format!("{}/", server.uri()),
        timeout_secs: 5,
    };
    Arc::new(ApiClient::new(&config).unwrap())
}

#[tokio::test]
async fn test_resolves_identity_with_bearer_token() {
    let server = MockServer::start().await;
    let token = mint_unsigned(&UserId::from(7), None).unwrap();

    Mock::given(method("GET"))
        .and(path("/users/7"))
        .and(header("authorization", format!("Bearer {}", token.as_str()).as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 7,
            "name": "Maria",
            "isManager": true
        })))
        .expect(1)
        .mount(&server)
        .await;

    let resolver = IdentityResolver::new(client_for(&server));
    let identity = resolver.resolve(&token).await.unwrap();

    assert_eq!(identity.id.as_str(), "7");
    assert_eq!(identity.name, "Maria");
    assert_eq!(identity.role, Role::Manager);
}

#[tokio::test]
async fn test_upstream_404_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/404"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let resolver = IdentityResolver::new(client_for(&server));
    let err = resolver
        .resolve(&mint_unsigned(&UserId::from(404), None).unwrap())
        .await
        .unwrap_err();
    assert!(matches!(err, AuthError::NotFound(_)));
}

#[tokio::test]
async fn test_null_body_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("null"))
        .mount(&server)
        .await;

    let resolver = IdentityResolver::new(client_for(&server));
    let err = resolver
        .resolve(&mint_unsigned(&UserId::from(1), None).unwrap())
        .await
        .unwrap_err();
    assert!(matches!(err, AuthError::NotFound(_)));
}

#[tokio::test]
async fn test_login_posts_password_as_query() {
    let server = MockServer::start().await;
    let issued = mint_unsigned(&UserId::from(1), None).unwrap();

    Mock::given(method("POST"))
        .and(path("/login/admin"))
        .and(query_param("password", "s3cret"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "access_token": issued.as_str() })),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/users/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "1",
            "name": "Root",
            "is_admin": true
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let resolver = IdentityResolver::new(client.clone());
    let store = MemoryTokenStore::new();

    let identity = session::login(&store, client.as_ref(), &resolver, "admin", "s3cret")
        .await
        .unwrap();
    assert_eq!(identity.role, Role::Admin);
    assert_eq!(store.get().unwrap(), Some(issued));
}

#[tokio::test]
async fn test_login_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login/admin"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let err = client_for(&server).login("admin", "wrong").await.unwrap_err();
    assert!(matches!(err, AuthError::LoginRejected(_)));
}

#[tokio::test]
async fn test_login_without_token_is_unexpected() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login/admin"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": true })))
        .mount(&server)
        .await;

    let err = client_for(&server).login("admin", "pw").await.unwrap_err();
    assert!(matches!(err, AuthError::UnexpectedResponse(_)));
}

#[tokio::test]
async fn test_unreachable_backend_is_not_found() {
    let server = MockServer::start().await;
    let client = client_for(&server);
    drop(server);

    let resolver = IdentityResolver::new(client);
    let token = mint_unsigned(&UserId::from(1), None).unwrap();
    let err = resolver
        .resolve(&Credential::new(token.into_inner()))
        .await
        .unwrap_err();
    assert!(matches!(err, AuthError::NotFound(_)));
}
