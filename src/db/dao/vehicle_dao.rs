use sea_orm::{ColumnTrait, DatabaseConnection, Order, QueryFilter};
use uuid::Uuid;

use super::{DaoBase, DaoResult};
use crate::db::entities::prelude::{SmartFeature, Vehicle, VehicleColor, VehicleSpec};
use crate::db::entities::{smart_feature, vehicle, vehicle_color, vehicle_spec};

#[derive(Clone)]
pub struct VehicleDao {
    db: DatabaseConnection,
}

impl DaoBase for VehicleDao {
    type Entity = Vehicle;

    fn from_db(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl VehicleDao {
    pub async fn find_by_slug(&self, slug: &str) -> DaoResult<Option<vehicle::Model>> {
        let slug = slug.to_string();
        self.find(1, 1, None, move |query| {
            query.filter(vehicle::Column::Slug.eq(slug))
        })
        .await
        .map(|response| response.data.into_iter().next())
    }

    /// Storefront listing: one status, display order ascending.
    pub async fn list_by_status(
        &self,
        status: &str,
        category: Option<&str>,
    ) -> DaoResult<Vec<vehicle::Model>> {
        let status = status.to_string();
        let category = category.map(str::to_string);
        self.all(
            Some((vehicle::Column::DisplayOrder, Order::Asc)),
            move |query| {
                let query = query.filter(vehicle::Column::Status.eq(status.clone()));
                match &category {
                    Some(category) => query.filter(vehicle::Column::Category.eq(category.clone())),
                    None => query,
                }
            },
        )
        .await
    }
}

#[derive(Clone)]
pub struct VehicleColorDao {
    db: DatabaseConnection,
}

impl DaoBase for VehicleColorDao {
    type Entity = VehicleColor;

    fn from_db(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl VehicleColorDao {
    pub async fn list_for_vehicle(&self, vehicle_id: &Uuid) -> DaoResult<Vec<vehicle_color::Model>> {
        let vehicle_id = *vehicle_id;
        self.all(
            Some((vehicle_color::Column::DisplayOrder, Order::Asc)),
            move |query| query.filter(vehicle_color::Column::VehicleId.eq(vehicle_id)),
        )
        .await
    }
}

#[derive(Clone)]
pub struct VehicleSpecDao {
    db: DatabaseConnection,
}

impl DaoBase for VehicleSpecDao {
    type Entity = VehicleSpec;

    fn from_db(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl VehicleSpecDao {
    pub async fn list_for_vehicle(&self, vehicle_id: &Uuid) -> DaoResult<Vec<vehicle_spec::Model>> {
        let vehicle_id = *vehicle_id;
        self.all(
            Some((vehicle_spec::Column::DisplayOrder, Order::Asc)),
            move |query| query.filter(vehicle_spec::Column::VehicleId.eq(vehicle_id)),
        )
        .await
    }
}

#[derive(Clone)]
pub struct SmartFeatureDao {
    db: DatabaseConnection,
}

impl DaoBase for SmartFeatureDao {
    type Entity = SmartFeature;

    fn from_db(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl SmartFeatureDao {
    pub async fn list_for_vehicle(&self, vehicle_id: &Uuid) -> DaoResult<Vec<smart_feature::Model>> {
        let vehicle_id = *vehicle_id;
        self.all(
            Some((smart_feature::Column::DisplayOrder, Order::Asc)),
            move |query| query.filter(smart_feature::Column::VehicleId.eq(vehicle_id)),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use chrono::{FixedOffset, TimeZone};
    use sea_orm::{DatabaseBackend, MockDatabase};
    use uuid::Uuid;

    use crate::db::entities::vehicle;

    use super::VehicleDao;
    use crate::db::dao::DaoBase;

    fn ts() -> chrono::DateTime<chrono::FixedOffset> {
        FixedOffset::east_opt(0)
            .expect("offset should be valid")
            .with_ymd_and_hms(2026, 1, 1, 0, 0, 0)
            .single()
            .expect("timestamp should be valid")
    }

    fn vehicle_model(id: Uuid, slug: &str, status: &str) -> vehicle::Model {
        let now = ts();
        vehicle::Model {
            id,
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

    #[tokio::test]
    async fn find_by_slug_returns_match() {
        let id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[vehicle_model(id, "falcon", "active")]])
            .into_connection();
        let dao = VehicleDao::new(&db);

        let found = dao
            .find_by_slug("falcon")
            .await
            .expect("query should succeed")
            .expect("vehicle should exist");
        assert_eq!(found.id, id);
    }

    #[tokio::test]
    async fn list_by_status_collects_all_pages() {
        let rows: Vec<vehicle::Model> = (0..3)
            .map(|i| vehicle_model(Uuid::new_v4(), &format!("model-{i}"), "active"))
            .collect();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([rows.clone()])
            .into_connection();
        let dao = VehicleDao::new(&db);

        let listed = dao
            .list_by_status("active", None)
            .await
            .expect("query should succeed");
        assert_eq!(listed.len(), 3);
    }
}
