use axum::{
    Router,
    body::{self, Body},
    http::{Request, StatusCode, header},
};
use chrono::{FixedOffset, TimeZone};
use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase};
use serde_json::json;
use tower::ServiceExt;
use uuid::Uuid;

use showroom_server::{
    auth::{
        Role,
        jwt::{JwtKeys, encode_token, make_access_claims},
    },
    db::entities::{form_submission, stat, user},
    routes::{API_PREFIX, router},
    test_helpers::test_state,
};

const SECRET: &[u8] = b"admin-crud-secret";

fn app(db: DatabaseConnection) -> Router {
    router(test_state(SECRET, db))
}

fn empty_app() -> Router {
    app(MockDatabase::new(DatabaseBackend::Postgres).into_connection())
}

fn api_path(path: &str) -> String {
    format!("{API_PREFIX}{path}")
}

fn token_for(subject: &Uuid, roles: Vec<Role>) -> String {
    let claims = make_access_claims(subject, roles, 3600);
    let token = encode_token(&JwtKeys::from_secret(SECRET), &claims).expect("encode token");
    format!("Bearer {token}")
}

fn admin_header() -> String {
    token_for(&Uuid::new_v4(), vec![Role::Admin])
}

fn super_admin_header() -> String {
    token_for(&Uuid::new_v4(), vec![Role::SuperAdmin, Role::Admin])
}

fn ts() -> chrono::DateTime<chrono::FixedOffset> {
    FixedOffset::east_opt(0)
        .expect("offset should be valid")
        .with_ymd_and_hms(2026, 1, 1, 0, 0, 0)
        .single()
        .expect("timestamp should be valid")
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

fn post_json(path: &str, auth: &str, payload: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(api_path(path))
        .header(header::AUTHORIZATION, auth)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .expect("request should build")
}

#[tokio::test]
async fn stat_create_returns_201_with_the_row() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![stat::Model {
            id: Uuid::new_v4(),
            created_at: ts(),
            updated_at: ts(),
            label: "Range".to_string(),
            value: "100".to_string(),
            suffix: Some("km".to_string()),
            display_order: 0,
        }]])
        .into_connection();

    let (status, json) = json_response(
        app(db),
        post_json(
            "/admin/stats",
            &admin_header(),
            json!({"label": "Range", "value": "100", "suffix": "km", "display_order": 0}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["data"]["label"], "Range");
}

#[tokio::test]
async fn vehicle_create_rejects_unknown_category() {
    let (status, json) = json_response(
        empty_app(),
        post_json(
            "/admin/vehicles",
            &admin_header(),
            json!({
                "name": "Hoverboard One",
                "slug": "hoverboard-one",
                "category": "hoverboard",
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "unknown vehicle category: hoverboard");
}

#[tokio::test]
async fn testimonial_patch_rejects_out_of_range_rating() {
    let (status, json) = json_response(
        empty_app(),
        Request::builder()
            .method("PATCH")
            .uri(api_path(&format!("/admin/testimonials/{}", Uuid::new_v4())))
            .header(header::AUTHORIZATION, admin_header())
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({"rating": 9}).to_string()))
            .expect("request should build"),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "Rating must be between 1 and 5");
}

#[tokio::test]
async fn user_create_rejects_unknown_role() {
    let (status, json) = json_response(
        empty_app(),
        post_json(
            "/admin/users",
            &super_admin_header(),
            json!({"email": "ops@example.com", "password": "password123", "role": "owner"}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "Unknown role: owner");
}

#[tokio::test]
async fn user_listing_never_carries_password_hashes() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![user::Model {
            id: Uuid::new_v4(),
            created_at: ts(),
            updated_at: ts(),
            email: "admin@example.com".to_string(),
            password_hash: "argon2-material".to_string(),
            role: "admin".to_string(),
            last_login_at: None,
        }]])
        .into_connection();

    let (status, json) = json_response(
        app(db),
        Request::builder()
            .uri(api_path("/admin/users"))
            .header(header::AUTHORIZATION, super_admin_header())
            .body(Body::empty())
            .expect("request should build"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let row = &json["data"]["data"][0];
    assert_eq!(row["email"], "admin@example.com");
    assert!(row.get("password_hash").is_none());
}

#[tokio::test]
async fn submission_status_cannot_move_backwards() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![form_submission::Model {
            id: Uuid::new_v4(),
            created_at: ts(),
            updated_at: ts(),
            form_type: "enquiry".to_string(),
            payload: json!({"name": "Meera"}),
            status: "resolved".to_string(),
        }]])
        .into_connection();

    let (status, json) = json_response(
        app(db),
        Request::builder()
            .method("PATCH")
            .uri(api_path(&format!(
                "/admin/submissions/{}/status",
                Uuid::new_v4()
            )))
            .header(header::AUTHORIZATION, admin_header())
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({"status": "in_review"}).to_string()))
            .expect("request should build"),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        json["message"],
        "Cannot move submission from resolved to in_review"
    );
}

#[tokio::test]
async fn a_super_admin_cannot_delete_their_own_account() {
    let actor = Uuid::new_v4();

    let (status, json) = json_response(
        empty_app(),
        Request::builder()
            .method("DELETE")
            .uri(api_path(&format!("/admin/users/{actor}")))
            .header(
                header::AUTHORIZATION,
                token_for(&actor, vec![Role::SuperAdmin, Role::Admin]),
            )
            .body(Body::empty())
            .expect("request should build"),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(
        json["message"]
            .as_str()
            .expect("message should be string")
            .contains("own account")
    );
}

#[tokio::test]
async fn upload_grant_returns_a_token_url_and_public_path() {
    let (status, json) = json_response(
        empty_app(),
        post_json(
            "/admin/objects/upload",
            &admin_header(),
            json!({"filename": "Hero Shot.PNG"}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let upload_url = json["data"]["upload_url"]
        .as_str()
        .expect("upload_url should be a string");
    assert!(upload_url.starts_with("/objects/upload/"));
    let public_path = json["data"]["public_path"]
        .as_str()
        .expect("public_path should be a string");
    assert!(public_path.ends_with("-hero-shot.png"));
}
