//! Admin console API. Uniform content tables are served by [`CrudApiRouter`];
//! submissions, users and upload grants are hand-written. Everything here
//! sits behind the `admin` role, the user routes behind `super_admin`.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    middleware,
    routing::{get, patch, post},
};
use sea_orm::prelude::DateTimeWithTimeZone;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::{
    auth::{Role, SuperAdminRole},
    db::dao::PaginatedResponse,
    db::entities::{form_submission, user},
    error::AppError,
    middleware::{AuthRoleGuard, require_admin},
    response::{ApiResult, JsonApiResponse},
    routes::base_api_router::{CrudApiRouter, ListQuery},
    services::{
        ServiceContext,
        content_service::TestimonialService,
        crud_service::CrudService,
        listing_service::JobStatus,
        page_service::{PageLayout, PagePlacement},
        vehicle_service::{VehicleCategory, VehicleStatus},
    },
    state::AppState,
    storage::UploadGrant,
};

pub fn router(state: Arc<AppState>) -> Router {
    let services = ServiceContext::from_state(state.as_ref());

    let crud = Router::new()
        .merge(
            CrudApiRouter::new(services.vehicle(), "/vehicles")
                .set_payload_validator(validate_vehicle)
                .router(),
        )
        .merge(CrudApiRouter::new(services.vehicle_color(), "/vehicle-colors").router())
        .merge(CrudApiRouter::new(services.vehicle_spec(), "/vehicle-specs").router())
        .merge(CrudApiRouter::new(services.smart_feature(), "/smart-features").router())
        .merge(CrudApiRouter::new(services.hero_slide(), "/hero-slides").router())
        .merge(
            CrudApiRouter::new(services.testimonial(), "/testimonials")
                .set_payload_validator(validate_testimonial)
                .router(),
        )
        .merge(CrudApiRouter::new(services.stat(), "/stats").router())
        .merge(CrudApiRouter::new(services.dealer(), "/dealers").router())
        .merge(CrudApiRouter::new(services.faq_category(), "/faq-categories").router())
        .merge(CrudApiRouter::new(services.faq_question(), "/faq-questions").router())
        .merge(
            CrudApiRouter::new(services.job_opening(), "/jobs")
                .set_payload_validator(validate_job)
                .router(),
        )
        .merge(CrudApiRouter::new(services.press_article(), "/press").router())
        .merge(
            CrudApiRouter::new(services.dynamic_page(), "/pages")
                .set_payload_validator(validate_page)
                .router(),
        );

    let admin_routes = Router::new()
        .merge(crud)
        .route("/submissions", get(list_submissions))
        .route(
            "/submissions/{id}",
            get(get_submission).delete(delete_submission),
        )
        .route("/submissions/{id}/status", patch(set_submission_status))
        .route("/objects/upload", post(issue_upload))
        .layer(middleware::from_fn_with_state(state.clone(), require_admin));

    // User management gates per handler through `AuthRoleGuard` instead of a
    // router-level layer; only these four routes need the super_admin role.
    let user_routes = Router::new()
        .route("/users", get(list_users).post(create_user))
        .route("/users/{id}", patch(update_user).delete(delete_user));

    admin_routes.merge(user_routes).with_state(state)
}

// Payload validators for the generic CRUD surfaces. Absent fields are left to
// the database defaults; present ones must carry a known value.

fn validate_vehicle(payload: &Value) -> Result<(), AppError> {
    if let Some(category) = payload.get("category").and_then(Value::as_str) {
        VehicleCategory::try_from(category).map_err(AppError::bad_request)?;
    }
    if let Some(status) = payload.get("status").and_then(Value::as_str) {
        VehicleStatus::try_from(status).map_err(AppError::bad_request)?;
    }
    Ok(())
}

fn validate_testimonial(payload: &Value) -> Result<(), AppError> {
    if let Some(rating) = payload.get("rating").and_then(Value::as_i64) {
        TestimonialService::check_rating(rating as i32)?;
    }
    Ok(())
}

fn validate_job(payload: &Value) -> Result<(), AppError> {
    if let Some(status) = payload.get("status").and_then(Value::as_str) {
        JobStatus::try_from(status).map_err(AppError::bad_request)?;
    }
    Ok(())
}

fn validate_page(payload: &Value) -> Result<(), AppError> {
    if let Some(layout) = payload.get("layout").and_then(Value::as_str) {
        PageLayout::try_from(layout).map_err(AppError::bad_request)?;
    }
    if let Some(placement) = payload.get("placement").and_then(Value::as_str) {
        PagePlacement::try_from(placement).map_err(AppError::bad_request)?;
    }
    Ok(())
}

// Submissions

#[derive(Debug, Deserialize)]
pub struct SubmissionStatusRequest {
    pub status: String,
}

async fn list_submissions(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListQuery>,
) -> ApiResult<PaginatedResponse<form_submission::Model>> {
    let service = ServiceContext::from_state(state.as_ref()).form_submission();
    let page = query.page.unwrap_or(1);
    let page_size = query.page_size.unwrap_or(25);
    let response = service
        .find_with_filters(page, page_size, None, query.filters, |select| select)
        .await?;
    JsonApiResponse::ok(response)
}

async fn get_submission(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> ApiResult<form_submission::Model> {
    let submission = ServiceContext::from_state(state.as_ref())
        .form_submission()
        .find_by_id(id)
        .await?;
    JsonApiResponse::ok(submission)
}

async fn set_submission_status(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(body): Json<SubmissionStatusRequest>,
) -> ApiResult<form_submission::Model> {
    let submission = ServiceContext::from_state(state.as_ref())
        .form_submission()
        .transition_status(&id, &body.status)
        .await?;
    JsonApiResponse::ok(submission)
}

async fn delete_submission(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> ApiResult<Value> {
    ServiceContext::from_state(state.as_ref())
        .form_submission()
        .delete(id)
        .await?;
    JsonApiResponse::with_status(StatusCode::NO_CONTENT, "deleted", Value::Null)
}

// Upload grants

#[derive(Debug, Deserialize)]
pub struct UploadGrantRequest {
    pub filename: String,
}

async fn issue_upload(
    State(state): State<Arc<AppState>>,
    Json(body): Json<UploadGrantRequest>,
) -> ApiResult<UploadGrant> {
    let grant = state.objects.issue_upload(&body.filename)?;
    JsonApiResponse::ok(grant)
}

// Users. Hand-written so the password hash never rides along in responses.

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub email: String,
    pub password: String,
    pub role: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    pub role: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub email: String,
    pub role: String,
    pub last_login_at: Option<DateTimeWithTimeZone>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

impl From<user::Model> for UserResponse {
    fn from(model: user::Model) -> Self {
        Self {
            id: model.id,
            email: model.email,
            role: model.role,
            last_login_at: model.last_login_at,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

fn parse_role(role: &str) -> Result<Role, AppError> {
    Role::try_from(role)
        .map_err(|_| AppError::bad_request(format!("Unknown role: {role}")))
}

async fn list_users(
    State(state): State<Arc<AppState>>,
    _guard: AuthRoleGuard<SuperAdminRole>,
    Query(query): Query<ListQuery>,
) -> ApiResult<PaginatedResponse<UserResponse>> {
    let service = ServiceContext::from_state(state.as_ref()).user();
    let page = query.page.unwrap_or(1);
    let page_size = query.page_size.unwrap_or(25);
    let response = service
        .find_with_filters(page, page_size, None, query.filters, |select| select)
        .await?;
    JsonApiResponse::ok(PaginatedResponse {
        data: response.data.into_iter().map(UserResponse::from).collect(),
        page: response.page,
        page_size: response.page_size,
        has_next: response.has_next,
    })
}

async fn create_user(
    State(state): State<Arc<AppState>>,
    _guard: AuthRoleGuard<SuperAdminRole>,
    Json(body): Json<CreateUserRequest>,
) -> ApiResult<UserResponse> {
    let role = parse_role(&body.role)?;
    let user = ServiceContext::from_state(state.as_ref())
        .user()
        .create_account(&body.email, &body.password, &role)
        .await?;
    JsonApiResponse::with_status(StatusCode::CREATED, "created", user.into())
}

async fn update_user(
    State(state): State<Arc<AppState>>,
    _guard: AuthRoleGuard<SuperAdminRole>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateUserRequest>,
) -> ApiResult<UserResponse> {
    if body.role.is_none() && body.password.is_none() {
        return Err(AppError::bad_request("Role or password required"));
    }
    let service = ServiceContext::from_state(state.as_ref()).user();

    let mut updated = None;
    if let Some(role) = &body.role {
        let role = parse_role(role)?;
        updated = Some(service.change_role(&id, &role).await?);
    }
    if let Some(password) = &body.password {
        updated = Some(service.change_password(&id, password).await?);
    }

    let user = match updated {
        Some(user) => user,
        None => service
            .find_by_id(&id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))?,
    };
    JsonApiResponse::ok(user.into())
}

async fn delete_user(
    State(state): State<Arc<AppState>>,
    guard: AuthRoleGuard<SuperAdminRole>,
    Path(id): Path<Uuid>,
) -> ApiResult<Value> {
    let actor: Uuid = guard
        .claims
        .sub
        .parse()
        .map_err(|_| AppError::unauthorized("Invalid token subject"))?;
    ServiceContext::from_state(state.as_ref())
        .user()
        .delete_account(&actor, &id)
        .await?;
    JsonApiResponse::with_status(StatusCode::NO_CONTENT, "deleted", Value::Null)
}
