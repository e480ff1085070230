use sea_orm::sea_query::{ColumnType, Value as QueryValue};
use sea_orm::{ColumnTrait, EntityTrait, IdenStatic, IntoActiveModel, Iterable, Order, Select};
use std::collections::{HashMap, HashSet};
use uuid::Uuid;

use crate::db::dao::{ColumnFilter, DaoBase, DaoLayerError, PaginatedResponse};
use crate::error::AppError;

type CrudEntity<D> = <D as DaoBase>::Entity;
type CrudModel<D> = <CrudEntity<D> as EntityTrait>::Model;
type CrudActiveModel<D> = <CrudEntity<D> as EntityTrait>::ActiveModel;
type CrudColumn<D> = <CrudEntity<D> as EntityTrait>::Column;

#[derive(Clone, Copy)]
pub enum CrudOp {
    Create,
    Find,
    List,
    Update,
    Delete,
}

const INVALID_FILTER_MESSAGE: &str = "Invalid filter";
const INVALID_FILTER_VALUE_MESSAGE: &str = "Invalid filter value";

/// Shared service surface over a [`DaoBase`]: maps DAO errors onto the HTTP
/// error taxonomy and turns query-string filters into typed equality
/// filters. Every admin-managed aggregate implements this once.
#[async_trait::async_trait]
pub trait CrudService {
    type Dao: DaoBase;

    fn dao(&self) -> &Self::Dao;

    /// Human name used in generic error messages ("Vehicle not found").
    fn resource_name(&self) -> &'static str {
        "Resource"
    }

    /// Columns that must never be filterable from the query string.
    fn denied_filter_keys(&self) -> &'static [&'static str] {
        &[]
    }

    fn map_error(&self, op: CrudOp, err: DaoLayerError) -> AppError {
        let resource = self.resource_name();
        match err {
            DaoLayerError::Db(db_err) => {
                let context = match op {
                    CrudOp::Create => "create",
                    CrudOp::Find | CrudOp::List => "fetch",
                    CrudOp::Update => "update",
                    CrudOp::Delete => "delete",
                };
                AppError::internal_with_source(
                    format!("{resource} {context} failed. Please check the logs for more details"),
                    db_err,
                )
            }
            DaoLayerError::NotFound { .. } => AppError::not_found(format!("{resource} not found")),
            DaoLayerError::InvalidPagination { .. } => AppError::bad_request(err.to_string()),
        }
    }

    async fn create<T>(&self, data: T) -> Result<CrudModel<Self::Dao>, AppError>
    where
        T: IntoActiveModel<CrudActiveModel<Self::Dao>> + Send,
    {
        self.dao()
            .create(data)
            .await
            .map_err(|err| self.map_error(CrudOp::Create, err))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<CrudModel<Self::Dao>, AppError> {
        self.dao()
            .find_by_id(id)
            .await
            .map_err(|err| self.map_error(CrudOp::Find, err))
    }

    async fn find_with_filters<F>(
        &self,
        page: u64,
        page_size: u64,
        order: Option<(CrudColumn<Self::Dao>, Order)>,
        filters: HashMap<String, String>,
        apply: F,
    ) -> Result<PaginatedResponse<CrudModel<Self::Dao>>, AppError>
    where
        F: FnOnce(Select<CrudEntity<Self::Dao>>) -> Select<CrudEntity<Self::Dao>> + Send,
        CrudColumn<Self::Dao>: ColumnTrait + Copy,
    {
        let column_filters = self.build_column_filters(filters)?;
        self.dao()
            .find_with_filters(page, page_size, order, &column_filters, apply)
            .await
            .map_err(|err| self.map_error(CrudOp::List, err))
    }

    async fn update<F>(&self, id: Uuid, apply: F) -> Result<CrudModel<Self::Dao>, AppError>
    where
        F: for<'a> FnOnce(&'a mut CrudActiveModel<Self::Dao>) + Send,
    {
        self.dao()
            .update(id, apply)
            .await
            .map_err(|err| self.map_error(CrudOp::Update, err))
    }

    async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.dao()
            .delete(id)
            .await
            .map(|_| ())
            .map_err(|err| self.map_error(CrudOp::Delete, err))
    }

    fn build_column_filters(
        &self,
        filters: HashMap<String, String>,
    ) -> Result<Vec<ColumnFilter<CrudColumn<Self::Dao>>>, AppError>
    where
        CrudColumn<Self::Dao>: ColumnTrait + Copy,
    {
        if filters.is_empty() {
            return Ok(Vec::new());
        }

        let deny_set: HashSet<&'static str> = self.denied_filter_keys().iter().copied().collect();
        let column_map: HashMap<&'static str, CrudColumn<Self::Dao>> =
            CrudColumn::<Self::Dao>::iter()
                .map(|column| (column.as_str(), column))
                .collect();

        let mut parsed = Vec::with_capacity(filters.len());
        for (key, value) in filters {
            if deny_set.contains(key.as_str()) {
                return Err(invalid_filter());
            }
            let column = column_map.get(key.as_str()).ok_or_else(invalid_filter)?;
            let column_type = column.def().get_column_type().clone();
            parsed.push(ColumnFilter {
                column: *column,
                value: parse_filter_value(&value, &column_type)?,
            });
        }
        Ok(parsed)
    }
}

fn invalid_filter() -> AppError {
    AppError::bad_request(INVALID_FILTER_MESSAGE)
}

fn invalid_filter_value_with(detail: impl std::fmt::Display) -> AppError {
    AppError::bad_request(format!("{INVALID_FILTER_VALUE_MESSAGE}: {detail}"))
}

fn parse_filter_value(raw: &str, column_type: &ColumnType) -> Result<QueryValue, AppError> {
    let raw = raw.trim();
    match column_type {
        ColumnType::Boolean => {
            let value = match raw.to_ascii_lowercase().as_str() {
                "true" | "t" | "1" | "yes" | "y" => true,
                "false" | "f" | "0" | "no" | "n" => false,
                _ => return Err(invalid_filter_value_with(format!("not a boolean: {raw}"))),
            };
            Ok(value.into())
        }
        ColumnType::Integer | ColumnType::SmallInteger => {
            let value: i32 = raw.parse().map_err(invalid_filter_value_with)?;
            Ok(value.into())
        }
        ColumnType::BigInteger => {
            let value: i64 = raw.parse().map_err(invalid_filter_value_with)?;
            Ok(value.into())
        }
        ColumnType::Uuid => {
            let value: Uuid = raw.parse().map_err(invalid_filter_value_with)?;
            Ok(value.into())
        }
        ColumnType::Date => {
            let value = chrono::NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .map_err(invalid_filter_value_with)?;
            Ok(value.into())
        }
        ColumnType::Char(_) | ColumnType::String(_) | ColumnType::Text => Ok(raw.into()),
        _ => Err(invalid_filter()),
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::sea_query::{ColumnType, StringLen, Value};

    use super::parse_filter_value;

    #[test]
    fn parses_bool_variants() {
        for raw in ["true", "T", "1", "yes"] {
            assert_eq!(
                parse_filter_value(raw, &ColumnType::Boolean).unwrap(),
                Value::from(true)
            );
        }
        assert_eq!(
            parse_filter_value("no", &ColumnType::Boolean).unwrap(),
            Value::from(false)
        );
        assert!(parse_filter_value("maybe", &ColumnType::Boolean).is_err());
    }

    #[test]
    fn parses_integers_and_uuids() {
        assert_eq!(
            parse_filter_value(" 42 ", &ColumnType::Integer).unwrap(),
            Value::from(42_i32)
        );
        assert!(parse_filter_value("4.2", &ColumnType::Integer).is_err());

        let id = uuid::Uuid::new_v4();
        assert_eq!(
            parse_filter_value(&id.to_string(), &ColumnType::Uuid).unwrap(),
            Value::from(id)
        );
        assert!(parse_filter_value("not-a-uuid", &ColumnType::Uuid).is_err());
    }

    #[test]
    fn passes_strings_through_trimmed() {
        assert_eq!(
            parse_filter_value("  active ", &ColumnType::String(StringLen::None)).unwrap(),
            Value::from("active")
        );
    }
}
