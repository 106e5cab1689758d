//! Full HTTP round trips through the gateway router.

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use pool_gateway::{GatewayConfig, GatewayService};
use pool_store::{EntryStore, MemoryStores, PoolStore};
use shared_types::AccessToken;
use std::sync::Arc;
use tower::ServiceExt;

fn router() -> Router {
    let stores = Arc::new(MemoryStores::new());
    let service = GatewayService::with_default_renderer(
        GatewayConfig::default(),
        Arc::clone(&stores) as Arc<dyn PoolStore>,
        stores as Arc<dyn EntryStore>,
    )
    .unwrap();
    service.router()
}

async fn send(router: &Router, request: Request<Body>) -> Response {
    router.clone().oneshot(request).await.unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn get_with_cookie(uri: &str, cookie: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header(header::COOKIE, cookie)
        .body(Body::empty())
        .unwrap()
}

fn form_post(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_string(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn salary_body(id: &str, title: &str, amount: &str) -> String {
    format!(
        "id={id}&amount={amount}&hourswk=40&yearsexperience=5&overtime=sometimes\
         &overtimepaid=paid&remote=partial&title={title}&travel=rarely"
    )
}

/// Create a pool through the HTTP surface and return its public token.
async fn create_pool(router: &Router, name: &str, min_size: u16) -> String {
    let response = send(
        router,
        form_post("/pool", &format!("poolName={name}&minSize={min_size}")),
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let location = response.headers()[header::LOCATION].to_str().unwrap().to_string();
    location
        .strip_prefix("/pool?id=")
        .expect("redirect should target the pool view")
        .to_string()
}

#[tokio::test]
async fn test_index_serves_pool_creation_form() {
    let router = router();
    let response = send(&router, get("/")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("name=\"poolName\""));
    assert!(body.contains("name=\"minSize\""));
}

#[tokio::test]
async fn test_full_reciprocity_flow() {
    let router = router();
    let token = create_pool(&router, "Eng", 2).await;

    // Without a cookie, the pool view is the submit form
    let response = send(&router, get(&format!("/pool?id={token}"))).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("name=\"amount\""));

    // First submission issues the credential and redirects back
    let response = send(
        &router,
        form_post("/pool/salary", &salary_body(&token, "Backend", "70000")),
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let set_cookie = response.headers()[header::SET_COOKIE].to_str().unwrap().to_string();
    assert!(set_cookie.starts_with(&format!("salary_{token}=")));
    assert!(set_cookie.contains("Max-Age=31536000"));
    let credential = set_cookie.split(';').next().unwrap().to_string();

    // Credentialed but below threshold: entries stay hidden
    let response = send(&router, get_with_cookie(&format!("/pool?id={token}"), &credential)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(!body.contains("Backend"));

    // Second participant submits
    let response = send(
        &router,
        form_post("/pool/salary", &salary_body(&token, "Analyst", "65000")),
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    // The credentialed view now reveals both entries, title ascending
    let response = send(&router, get_with_cookie(&format!("/pool?id={token}"), &credential)).await;
    let body = body_string(response).await;
    let analyst = body.find("Analyst").expect("Analyst row");
    let backend = body.find("Backend").expect("Backend row");
    assert!(analyst < backend);

    // An uncredentialed viewer still only sees the submit form
    let response = send(&router, get(&format!("/pool?id={token}"))).await;
    let body = body_string(response).await;
    assert!(body.contains("name=\"amount\""));
    assert!(!body.contains("Backend"));
}

#[tokio::test]
async fn test_unknown_pool_is_not_found() {
    let router = router();
    let unknown = AccessToken::generate().to_string();
    let response = send(&router, get(&format!("/pool?id={unknown}"))).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_missing_pool_id_is_bad_request() {
    let router = router();
    let response = send(&router, get("/pool")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_invalid_pool_params_are_bad_request() {
    let router = router();

    let response = send(&router, form_post("/pool", "poolName=Eng&minSize=0")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = send(&router, form_post("/pool", "poolName=&minSize=2")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = send(&router, form_post("/pool", "poolName=Eng&minSize=many")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_rejected_submission_reports_generic_reason() {
    let router = router();
    let token = create_pool(&router, "Eng", 2).await;

    let response = send(
        &router,
        form_post("/pool/salary", &salary_body(&token, "Backend", "-70000")),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_string(response).await;
    // Plain-text generic reason that names no field
    assert!(body.contains("invalid input"));
    assert!(!body.contains("amount"));
}

#[tokio::test]
async fn test_prior_cookie_blocks_second_submission() {
    let router = router();
    let token = create_pool(&router, "Eng", 2).await;

    let response = send(
        &router,
        form_post("/pool/salary", &salary_body(&token, "Backend", "70000")),
    )
    .await;
    let set_cookie = response.headers()[header::SET_COOKIE].to_str().unwrap().to_string();
    let credential = set_cookie.split(';').next().unwrap().to_string();

    let request = Request::builder()
        .method("POST")
        .uri("/pool/salary")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .header(header::COOKIE, credential)
        .body(Body::from(salary_body(&token, "Backend", "71000")))
        .unwrap();
    let response = send(&router, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
