//! Generic admin CRUD router. Every uniformly-managed content table gets its
//! create/list/get/patch/delete surface from here instead of a hand-written
//! near-duplicate per screen.

use std::{collections::HashMap, sync::Arc};

use axum::{
    Json, Router,
    extract::rejection::QueryRejection,
    extract::{Path, Query},
    http::StatusCode,
    routing::{delete, get, patch, post},
};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, EntityTrait, IdenStatic, Iterable, Order,
    PrimaryKeyToColumn, TryIntoModel, Value as DbValue, sea_query::ColumnType,
};
use serde_json::Value;
use uuid::Uuid;

use crate::{
    db::dao::DaoBase, error::AppError, response::JsonApiResponse,
    services::crud_service::CrudService,
};

pub(crate) type DaoOf<S> = <S as CrudService>::Dao;
pub(crate) type EntityOf<S> = <DaoOf<S> as DaoBase>::Entity;
pub(crate) type ModelOf<S> = <EntityOf<S> as EntityTrait>::Model;
pub(crate) type ActiveModelOf<S> = <EntityOf<S> as EntityTrait>::ActiveModel;
pub(crate) type ColumnOf<S> = <EntityOf<S> as EntityTrait>::Column;

type PayloadValidator = Arc<dyn Fn(&Value) -> Result<(), AppError> + Send + Sync>;

#[derive(Clone, serde::Deserialize)]
pub struct ListQuery {
    pub page: Option<u64>,
    pub page_size: Option<u64>,
    #[serde(flatten, default)]
    pub filters: HashMap<String, String>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Method {
    Create,
    List,
    Get,
    Patch,
    Delete,
}

pub(crate) const DEFAULT_ALLOWED_METHODS: [Method; 5] = [
    Method::Create,
    Method::List,
    Method::Get,
    Method::Patch,
    Method::Delete,
];

const DEFAULT_PAGE_SIZE: u64 = 25;
const INVALID_PAYLOAD_MESSAGE: &str = "Invalid payload";
const INVALID_QUERY_MESSAGE: &str = "Invalid query";

pub struct CrudApiRouter<S> {
    service: S,
    base_path: &'static str,
    allowed_methods: Vec<Method>,
    validator: Option<PayloadValidator>,
}

impl<S> CrudApiRouter<S> {
    pub fn new(service: S, base_path: &'static str) -> Self {
        Self {
            service,
            base_path,
            allowed_methods: DEFAULT_ALLOWED_METHODS.to_vec(),
            validator: None,
        }
    }

    pub fn set_allowed_methods(mut self, methods: &[Method]) -> Self {
        self.allowed_methods = methods.to_vec();
        self
    }

    /// Domain check run against create and patch payloads before they reach
    /// the database (enum strings, value ranges).
    pub fn set_payload_validator<F>(mut self, validator: F) -> Self
    where
        F: Fn(&Value) -> Result<(), AppError> + Send + Sync + 'static,
    {
        self.validator = Some(Arc::new(validator));
        self
    }
}

impl<S> CrudApiRouter<S>
where
    S: CrudService + Clone + Send + Sync + 'static,
    ActiveModelOf<S>: ActiveModelTrait + TryIntoModel<ModelOf<S>>,
    ModelOf<S>: for<'de> serde::Deserialize<'de> + serde::Serialize,
    ModelOf<S>: sea_orm::IntoActiveModel<ActiveModelOf<S>>,
    ColumnOf<S>: Iterable,
{
    pub fn router<State>(self) -> Router<State>
    where
        State: Clone + Send + Sync + 'static,
    {
        let base = self.base_path;
        let id_path = format!("{}/{{id}}", base);
        let mut router = Router::<State>::new();

        if self.allowed_methods.contains(&Method::Create) {
            let service = self.service.clone();
            let validator = self.validator.clone();
            router = router.route(
                base,
                post(move |Json(payload): Json<Value>| async move {
                    if let Some(validator) = &validator {
                        validator(&payload)?;
                    }
                    let active = build_active::<S>(payload)?;
                    let model: ModelOf<S> = service.create(active).await?;
                    JsonApiResponse::with_status(StatusCode::CREATED, "created", model)
                }),
            );
        }

        if self.allowed_methods.contains(&Method::List) {
            let service = self.service.clone();
            router = router.route(
                base,
                get(
                    move |query: Result<Query<ListQuery>, QueryRejection>| async move {
                        let Query(query) = query.map_err(|err| {
                            AppError::bad_request(format!("{INVALID_QUERY_MESSAGE}: {err}"))
                        })?;
                        let page = query.page.unwrap_or(1);
                        let page_size = query.page_size.unwrap_or(DEFAULT_PAGE_SIZE);
                        let response = service
                            .find_with_filters(
                                page,
                                page_size,
                                None::<(ColumnOf<S>, Order)>,
                                query.filters,
                                |select| select,
                            )
                            .await?;
                        JsonApiResponse::ok(response)
                    },
                ),
            );
        }

        if self.allowed_methods.contains(&Method::Get) {
            let service = self.service.clone();
            router = router.route(
                &id_path,
                get(move |Path(id): Path<Uuid>| async move {
                    let model: ModelOf<S> = service.find_by_id(id).await?;
                    JsonApiResponse::ok(model)
                }),
            );
        }

        if self.allowed_methods.contains(&Method::Patch) {
            let service = self.service.clone();
            let validator = self.validator.clone();
            router = router.route(
                &id_path,
                patch(
                    move |Path(id): Path<Uuid>, Json(payload): Json<Value>| async move {
                        if let Some(validator) = &validator {
                            validator(&payload)?;
                        }
                        let patch = build_active::<S>(payload)?;
                        let model: ModelOf<S> = service
                            .update(id, move |active| apply_patch::<S>(active, patch))
                            .await?;
                        JsonApiResponse::ok(model)
                    },
                ),
            );
        }

        if self.allowed_methods.contains(&Method::Delete) {
            let service = self.service.clone();
            router = router.route(
                &id_path,
                delete(move |Path(id): Path<Uuid>| async move {
                    service.delete(id).await?;
                    JsonApiResponse::with_status(StatusCode::NO_CONTENT, "deleted", Value::Null)
                }),
            );
        }

        router
    }
}

/// Build an active model with exactly the columns the payload names set.
/// Absent columns stay `NotSet` so creates fall back to database defaults and
/// patches leave the row's other columns alone.
fn build_active<S>(payload: Value) -> Result<ActiveModelOf<S>, AppError>
where
    S: CrudService,
    ActiveModelOf<S>: ActiveModelTrait,
    ColumnOf<S>: Iterable,
{
    let Value::Object(mut fields) = payload else {
        return Err(AppError::bad_request(format!(
            "{INVALID_PAYLOAD_MESSAGE}: expected a JSON object"
        )));
    };

    let mut active = <ActiveModelOf<S> as ActiveModelTrait>::default();
    for col in ColumnOf::<S>::iter() {
        let Some(value) = fields.remove(col.as_str()) else {
            continue;
        };
        let column_type = col.def().get_column_type().clone();
        let value = json_to_column_value(value, &column_type).map_err(|detail| {
            AppError::bad_request(format!(
                "{INVALID_PAYLOAD_MESSAGE}: {} {detail}",
                col.as_str()
            ))
        })?;
        active.set(col, value);
    }

    if let Some(unknown) = fields.keys().next() {
        return Err(AppError::bad_request(format!(
            "{INVALID_PAYLOAD_MESSAGE}: unknown field {unknown}"
        )));
    }
    Ok(active)
}

fn json_to_column_value(value: Value, column_type: &ColumnType) -> Result<DbValue, String> {
    if value.is_null() {
        return null_column_value(column_type);
    }
    match column_type {
        ColumnType::Boolean => value
            .as_bool()
            .map(DbValue::from)
            .ok_or_else(|| "must be a boolean".to_string()),
        ColumnType::Integer | ColumnType::SmallInteger => {
            let wide = value.as_i64().ok_or("must be an integer")?;
            let narrow: i32 = wide.try_into().map_err(|_| "is out of range".to_string())?;
            Ok(DbValue::from(narrow))
        }
        ColumnType::BigInteger => value
            .as_i64()
            .map(DbValue::from)
            .ok_or_else(|| "must be an integer".to_string()),
        ColumnType::Float | ColumnType::Double => value
            .as_f64()
            .map(DbValue::from)
            .ok_or_else(|| "must be a number".to_string()),
        ColumnType::Uuid => {
            let parsed: Uuid = value
                .as_str()
                .ok_or("must be a UUID string")?
                .parse()
                .map_err(|_| "must be a UUID string".to_string())?;
            Ok(DbValue::from(parsed))
        }
        ColumnType::Char(_) | ColumnType::String(_) | ColumnType::Text => value
            .as_str()
            .map(|s| DbValue::from(s.to_owned()))
            .ok_or_else(|| "must be a string".to_string()),
        ColumnType::TimestampWithTimeZone => {
            let parsed = chrono::DateTime::parse_from_rfc3339(
                value.as_str().ok_or("must be an RFC 3339 timestamp")?,
            )
            .map_err(|_| "must be an RFC 3339 timestamp".to_string())?;
            Ok(DbValue::from(parsed))
        }
        ColumnType::Date => {
            let parsed = chrono::NaiveDate::parse_from_str(
                value.as_str().ok_or("must be a YYYY-MM-DD date")?,
                "%Y-%m-%d",
            )
            .map_err(|_| "must be a YYYY-MM-DD date".to_string())?;
            Ok(DbValue::from(parsed))
        }
        ColumnType::Json | ColumnType::JsonBinary => Ok(DbValue::Json(Some(Box::new(value)))),
        _ => Err("has an unsupported column type".to_string()),
    }
}

fn null_column_value(column_type: &ColumnType) -> Result<DbValue, String> {
    let value = match column_type {
        ColumnType::Boolean => DbValue::Bool(None),
        ColumnType::Integer | ColumnType::SmallInteger => DbValue::Int(None),
        ColumnType::BigInteger => DbValue::BigInt(None),
        ColumnType::Float => DbValue::Float(None),
        ColumnType::Double => DbValue::Double(None),
        ColumnType::Uuid => DbValue::Uuid(None),
        ColumnType::Char(_) | ColumnType::String(_) | ColumnType::Text => DbValue::String(None),
        ColumnType::TimestampWithTimeZone => DbValue::ChronoDateTimeWithTimeZone(None),
        ColumnType::Date => DbValue::ChronoDate(None),
        ColumnType::Json | ColumnType::JsonBinary => DbValue::Json(None),
        _ => return Err("has an unsupported column type".to_string()),
    };
    Ok(value)
}

/// Copy every set non-primary-key column from the patch payload onto the
/// fetched row's active model.
fn apply_patch<S>(active: &mut ActiveModelOf<S>, patch: ActiveModelOf<S>)
where
    S: CrudService,
    ActiveModelOf<S>: ActiveModelTrait,
    ColumnOf<S>: Iterable,
{
    let primary_keys: Vec<&'static str> = <EntityOf<S> as EntityTrait>::PrimaryKey::iter()
        .map(|pk| pk.into_column().as_str())
        .collect();

    for col in ColumnOf::<S>::iter() {
        if primary_keys.iter().any(|pk| *pk == col.as_str()) {
            continue;
        }
        match patch.get(col) {
            ActiveValue::Set(value) | ActiveValue::Unchanged(value) => active.set(col, value),
            ActiveValue::NotSet => {}
        }
    }
}
