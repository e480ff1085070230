use serde::Serialize;

use crate::{
    db::dao::{SmartFeatureDao, VehicleColorDao, VehicleDao, VehicleSpecDao},
    db::entities::{smart_feature, vehicle, vehicle_color, vehicle_spec},
    error::AppError,
    services::crud_service::CrudService,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VehicleCategory {
    Scooter,
    Motorcycle,
    Cargo,
}

impl VehicleCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Scooter => "scooter",
            Self::Motorcycle => "motorcycle",
            Self::Cargo => "cargo",
        }
    }
}

impl TryFrom<&str> for VehicleCategory {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "scooter" => Ok(Self::Scooter),
            "motorcycle" => Ok(Self::Motorcycle),
            "cargo" => Ok(Self::Cargo),
            other => Err(format!("unknown vehicle category: {other}")),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VehicleStatus {
    Draft,
    Active,
    Inactive,
}

impl VehicleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }
}

impl TryFrom<&str> for VehicleStatus {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "draft" => Ok(Self::Draft),
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            other => Err(format!("unknown vehicle status: {other}")),
        }
    }
}

/// Storefront detail payload: the vehicle plus its ordered child rows.
#[derive(Clone, Debug, Serialize)]
pub struct VehicleDetail {
    #[serde(flatten)]
    pub vehicle: vehicle::Model,
    pub colors: Vec<vehicle_color::Model>,
    pub specs: Vec<vehicle_spec::Model>,
    pub features: Vec<smart_feature::Model>,
}

#[derive(Clone)]
pub struct VehicleService {
    vehicle_dao: VehicleDao,
    color_dao: VehicleColorDao,
    spec_dao: VehicleSpecDao,
    feature_dao: SmartFeatureDao,
}

impl VehicleService {
    pub fn new(
        vehicle_dao: VehicleDao,
        color_dao: VehicleColorDao,
        spec_dao: VehicleSpecDao,
        feature_dao: SmartFeatureDao,
    ) -> Self {
        Self {
            vehicle_dao,
            color_dao,
            spec_dao,
            feature_dao,
        }
    }

    /// Active vehicles for the storefront listing, display order ascending.
    pub async fn list_active(
        &self,
        category: Option<&str>,
    ) -> Result<Vec<vehicle::Model>, AppError> {
        let category = match category {
            Some(raw) => Some(
                VehicleCategory::try_from(raw)
                    .map_err(AppError::bad_request)?,
            ),
            None => None,
        };
        Ok(self
            .vehicle_dao
            .list_by_status(
                VehicleStatus::Active.as_str(),
                category.map(|c| c.as_str()),
            )
            .await?)
    }

    /// Full storefront detail. Draft and inactive vehicles 404 like missing
    /// ones so unpublished catalog entries never leak by slug.
    pub async fn detail_by_slug(&self, slug: &str) -> Result<VehicleDetail, AppError> {
        let not_found = || AppError::not_found("Vehicle not found");
        let vehicle = self
            .vehicle_dao
            .find_by_slug(slug)
            .await?
            .ok_or_else(not_found)?;
        if vehicle.status != VehicleStatus::Active.as_str() {
            return Err(not_found());
        }

        let colors = self.color_dao.list_for_vehicle(&vehicle.id).await?;
        let specs = self.spec_dao.list_for_vehicle(&vehicle.id).await?;
        let features = self.feature_dao.list_for_vehicle(&vehicle.id).await?;

        Ok(VehicleDetail {
            vehicle,
            colors,
            specs,
            features,
        })
    }

    pub async fn specs_for(
        &self,
        vehicle_id: &uuid::Uuid,
    ) -> Result<Vec<vehicle_spec::Model>, AppError> {
        Ok(self.spec_dao.list_for_vehicle(vehicle_id).await?)
    }
}

impl CrudService for VehicleService {
    type Dao = VehicleDao;

    fn dao(&self) -> &Self::Dao {
        &self.vehicle_dao
    }

    fn resource_name(&self) -> &'static str {
        "Vehicle"
    }
}

#[derive(Clone)]
pub struct VehicleColorService {
    dao: VehicleColorDao,
}

impl VehicleColorService {
    pub fn new(dao: VehicleColorDao) -> Self {
        Self { dao }
    }
}

impl CrudService for VehicleColorService {
    type Dao = VehicleColorDao;

    fn dao(&self) -> &Self::Dao {
        &self.dao
    }

    fn resource_name(&self) -> &'static str {
        "Vehicle color"
    }
}

#[derive(Clone)]
pub struct VehicleSpecService {
    dao: VehicleSpecDao,
}

impl VehicleSpecService {
    pub fn new(dao: VehicleSpecDao) -> Self {
        Self { dao }
    }
}

impl CrudService for VehicleSpecService {
    type Dao = VehicleSpecDao;

    fn dao(&self) -> &Self::Dao {
        &self.dao
    }

    fn resource_name(&self) -> &'static str {
        "Vehicle spec"
    }
}

#[derive(Clone)]
pub struct SmartFeatureService {
    dao: SmartFeatureDao,
}

impl SmartFeatureService {
    pub fn new(dao: SmartFeatureDao) -> Self {
        Self { dao }
    }
}

impl CrudService for SmartFeatureService {
    type Dao = SmartFeatureDao;

    fn dao(&self) -> &Self::Dao {
        &self.dao
    }

    fn resource_name(&self) -> &'static str {
        "Smart feature"
    }
}

#[cfg(test)]
mod tests {
    use chrono::{FixedOffset, TimeZone};
    use sea_orm::{DatabaseBackend, MockDatabase};
    use uuid::Uuid;

    use super::{VehicleCategory, VehicleService, VehicleStatus};
    use crate::{db::entities::vehicle, services::ServiceContext};

    fn service(db: sea_orm::DatabaseConnection) -> VehicleService {
        ServiceContext::new(&db).vehicle()
    }

    fn ts() -> chrono::DateTime<chrono::FixedOffset> {
        FixedOffset::east_opt(0)
            .expect("offset should be valid")
            .with_ymd_and_hms(2026, 1, 1, 0, 0, 0)
            .single()
            .expect("timestamp should be valid")
    }

    fn vehicle_model(slug: &str, status: &str) -> vehicle::Model {
        let now = ts();
        vehicle::Model {
            id: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
            name: slug.to_uppercase(),
            slug: slug.to_string(),
            tagline: "tagline".to_string(),
            description: "description".to_string(),
            category: "scooter".to_string(),
            status: status.to_string(),
            display_order: 0,
            hero_image: None,
        }
    }

    #[test]
    fn category_and_status_round_trip() {
        for category in [
            VehicleCategory::Scooter,
            VehicleCategory::Motorcycle,
            VehicleCategory::Cargo,
        ] {
            assert_eq!(VehicleCategory::try_from(category.as_str()), Ok(category));
        }
        assert!(VehicleCategory::try_from("truck").is_err());
        assert_eq!(VehicleStatus::try_from("active"), Ok(VehicleStatus::Active));
        assert!(VehicleStatus::try_from("published").is_err());
    }

    #[tokio::test]
    async fn list_active_rejects_unknown_category() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let err = service(db)
            .list_active(Some("hoverboard"))
            .await
            .expect_err("listing should fail");
        assert_eq!(err.message(), "unknown vehicle category: hoverboard");
    }

    #[tokio::test]
    async fn detail_by_slug_hides_draft_vehicles() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![vehicle_model("falcon", "draft")]])
            .into_connection();

        let err = service(db)
            .detail_by_slug("falcon")
            .await
            .expect_err("detail should fail");
        assert_eq!(err.message(), "Vehicle not found");
    }

    #[tokio::test]
    async fn detail_by_slug_assembles_children() {
        let falcon = vehicle_model("falcon", "active");
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![falcon.clone()]])
            .append_query_results([Vec::<crate::db::entities::vehicle_color::Model>::new()])
            .append_query_results([Vec::<crate::db::entities::vehicle_spec::Model>::new()])
            .append_query_results([Vec::<crate::db::entities::smart_feature::Model>::new()])
            .into_connection();

        let detail = service(db)
            .detail_by_slug("falcon")
            .await
            .expect("detail should succeed");
        assert_eq!(detail.vehicle.slug, "falcon");
        assert!(detail.colors.is_empty());
        assert!(detail.specs.is_empty());
        assert!(detail.features.is_empty());
    }
}
