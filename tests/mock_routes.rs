use axum::{
    Router,
    body::{self, Body},
    http::{Request, StatusCode, header},
    middleware,
};
use serde_json::json;
use tower::ServiceExt;
use uuid::Uuid;

use showroom_server::{
    auth::{
        Role,
        jwt::{JwtKeys, encode_token, make_access_claims},
    },
    middleware::{catch_panic_layer, json_error_middleware},
    routes::API_PREFIX,
    test_helpers::test_router,
};

const SECRET: &[u8] = b"mock-routes-secret";

fn app() -> Router {
    test_router(SECRET)
        .layer(middleware::from_fn(json_error_middleware))
        .layer(catch_panic_layer())
}

fn api_path(path: &str) -> String {
    format!("{API_PREFIX}{path}")
}

fn auth_header(secret: &[u8], roles: Vec<Role>) -> String {
    let claims = make_access_claims(&Uuid::new_v4(), roles, 3600);
    let jwt = JwtKeys::from_secret(secret);
    let token = encode_token(&jwt, &claims).expect("encode token");
    format!("Bearer {token}")
}

async fn json_response(app: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.oneshot(request).await.expect("request should succeed");
    let status = response.status();
    let bytes = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should read");
    let json = serde_json::from_slice(&bytes).expect("body should be JSON");
    (status, json)
}

#[tokio::test]
async fn unknown_route_is_shaped_as_json_404() {
    let (status, json) = json_response(
        app(),
        Request::builder()
            .uri(api_path("/does-not-exist"))
            .body(Body::empty())
            .expect("request should build"),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["status"], 404);
    assert!(json["message"].is_string());
}

#[tokio::test]
async fn admin_routes_require_a_token() {
    let (status, json) = json_response(
        app(),
        Request::builder()
            .uri(api_path("/admin/vehicles"))
            .body(Body::empty())
            .expect("request should build"),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["message"], "Missing access token");
}

#[tokio::test]
async fn admin_routes_reject_foreign_signatures() {
    let (status, _) = json_response(
        app(),
        Request::builder()
            .uri(api_path("/admin/vehicles"))
            .header(
                header::AUTHORIZATION,
                auth_header(b"some-other-secret", vec![Role::Admin]),
            )
            .body(Body::empty())
            .expect("request should build"),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn user_management_requires_super_admin() {
    let (status, json) = json_response(
        app(),
        Request::builder()
            .uri(api_path("/admin/users"))
            .header(header::AUTHORIZATION, auth_header(SECRET, vec![Role::Admin]))
            .body(Body::empty())
            .expect("request should build"),
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["message"], "Missing required role");
}

#[tokio::test]
async fn user_management_requires_a_token() {
    let (status, json) = json_response(
        app(),
        Request::builder()
            .uri(api_path("/admin/users"))
            .body(Body::empty())
            .expect("request should build"),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["message"], "Missing access token");
}

#[tokio::test]
async fn me_accepts_the_session_cookie() {
    let claims = make_access_claims(&Uuid::new_v4(), vec![Role::Admin], 3600);
    let token = encode_token(&JwtKeys::from_secret(SECRET), &claims).expect("encode token");

    let (status, json) = json_response(
        app(),
        Request::builder()
            .uri(api_path("/auth/me"))
            .header(header::COOKIE, format!("theme=dark; session={token}"))
            .body(Body::empty())
            .expect("request should build"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["sub"], claims.sub);
}

#[tokio::test]
async fn calculator_rejects_out_of_range_distance() {
    let (status, json) = json_response(
        app(),
        Request::builder()
            .method("POST")
            .uri(api_path("/calculator"))
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(
                json!({"vehicle_id": Uuid::new_v4(), "daily_km": 900.0}).to_string(),
            ))
            .expect("request should build"),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "daily_km must be between 1 and 500");
}

#[tokio::test]
async fn submissions_reject_unknown_form_types() {
    let (status, json) = json_response(
        app(),
        Request::builder()
            .method("POST")
            .uri(api_path("/submissions"))
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(
                json!({"form_type": "newsletter", "payload": {}}).to_string(),
            ))
            .expect("request should build"),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "unknown form type: newsletter");
}

#[tokio::test]
async fn dealer_filters_reject_orphan_district() {
    let (status, json) = json_response(
        app(),
        Request::builder()
            .uri(api_path("/dealers/filters?district=Ernakulam"))
            .body(Body::empty())
            .expect("request should build"),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "district filter requires a state");
}

#[tokio::test]
async fn object_upload_rejects_forged_tokens() {
    let (status, json) = json_response(
        app(),
        Request::builder()
            .method("PUT")
            .uri("/objects/upload/forged-token")
            .body(Body::from("bytes"))
            .expect("request should build"),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    let message = json["message"].as_str().expect("message should be string");
    assert!(message.starts_with("Invalid or expired token:"));
}

#[tokio::test]
async fn uploaded_objects_are_served_back() {
    let (status, json) = json_response(
        app(),
        Request::builder()
            .method("POST")
            .uri(api_path("/admin/objects/upload"))
            .header(header::AUTHORIZATION, auth_header(SECRET, vec![Role::Admin]))
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({"filename": "hero.png"}).to_string()))
            .expect("request should build"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let upload_url = json["data"]["upload_url"]
        .as_str()
        .expect("upload_url should be a string")
        .to_string();
    let public_path = json["data"]["public_path"]
        .as_str()
        .expect("public_path should be a string")
        .to_string();

    let response = app()
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri(&upload_url)
                .body(Body::from("png-bytes"))
                .expect("request should build"),
        )
        .await
        .expect("request should succeed");
    assert_eq!(response.status(), StatusCode::OK);

    let response = app()
        .oneshot(
            Request::builder()
                .uri(&public_path)
                .body(Body::empty())
                .expect("request should build"),
        )
        .await
        .expect("request should succeed");
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should read");
    assert_eq!(&bytes[..], b"png-bytes");
}

#[tokio::test]
async fn upload_grants_require_the_admin_role() {
    let (status, _) = json_response(
        app(),
        Request::builder()
            .method("POST")
            .uri(api_path("/admin/objects/upload"))
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({"filename": "hero.png"}).to_string()))
            .expect("request should build"),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}
