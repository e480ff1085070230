use serde::Serialize;

use crate::{
    db::dao::DealerDao,
    db::entities::dealer,
    error::AppError,
    services::crud_service::CrudService,
};

/// Options for the locator's cascading dropdowns. `districts` is only
/// populated once a state is chosen, `cities` once state and district are.
#[derive(Clone, Debug, Serialize)]
pub struct DealerFilterOptions {
    pub states: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub districts: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cities: Option<Vec<String>>,
}

#[derive(Clone)]
pub struct DealerService {
    dao: DealerDao,
}

impl DealerService {
    pub fn new(dao: DealerDao) -> Self {
        Self { dao }
    }

    pub async fn list_active(
        &self,
        state: Option<&str>,
        district: Option<&str>,
        city: Option<&str>,
    ) -> Result<Vec<dealer::Model>, AppError> {
        Ok(self.dao.list_active(state, district, city).await?)
    }

    /// Cascading filter options over active dealers. A narrower level without
    /// its parent is rejected so the frontend cannot get out of sync.
    pub async fn filter_options(
        &self,
        state: Option<&str>,
        district: Option<&str>,
    ) -> Result<DealerFilterOptions, AppError> {
        if district.is_some() && state.is_none() {
            return Err(AppError::bad_request("district filter requires a state"));
        }

        let all = self.dao.list_active(None, None, None).await?;
        let states = distinct_sorted(all.iter().map(|d| d.state.as_str()));

        let districts = state.map(|state| {
            distinct_sorted(
                all.iter()
                    .filter(|d| d.state == state)
                    .map(|d| d.district.as_str()),
            )
        });

        let cities = match (state, district) {
            (Some(state), Some(district)) => Some(distinct_sorted(
                all.iter()
                    .filter(|d| d.state == state && d.district == district)
                    .map(|d| d.city.as_str()),
            )),
            _ => None,
        };

        Ok(DealerFilterOptions {
            states,
            districts,
            cities,
        })
    }
}

fn distinct_sorted<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut out: Vec<String> = values.map(str::to_string).collect();
    out.sort();
    out.dedup();
    out
}

impl CrudService for DealerService {
    type Dao = DealerDao;

    fn dao(&self) -> &Self::Dao {
        &self.dao
    }

    fn resource_name(&self) -> &'static str {
        "Dealer"
    }
}

#[cfg(test)]
mod tests {
    use chrono::{FixedOffset, TimeZone};
    use sea_orm::{DatabaseBackend, MockDatabase};
    use uuid::Uuid;

    use super::DealerService;
    use crate::{db::entities::dealer, services::ServiceContext};

    fn service(db: sea_orm::DatabaseConnection) -> DealerService {
        ServiceContext::new(&db).dealer()
    }

    fn ts() -> chrono::DateTime<chrono::FixedOffset> {
        FixedOffset::east_opt(0)
            .expect("offset should be valid")
            .with_ymd_and_hms(2026, 1, 1, 0, 0, 0)
            .single()
            .expect("timestamp should be valid")
    }

    fn dealer_model(name: &str, state: &str, district: &str, city: &str) -> dealer::Model {
        let now = ts();
        dealer::Model {
            id: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
            name: name.to_string(),
            state: state.to_string(),
            district: district.to_string(),
            city: city.to_string(),
            address: "1 Main Road".to_string(),
            phone: None,
            email: None,
            active: true,
        }
    }

    fn sample_network() -> Vec<dealer::Model> {
        vec![
            dealer_model("EV South", "Kerala", "Ernakulam", "Kochi"),
            dealer_model("EV Central", "Kerala", "Ernakulam", "Aluva"),
            dealer_model("EV North", "Kerala", "Kozhikode", "Kozhikode"),
            dealer_model("EV West", "Karnataka", "Bengaluru Urban", "Bengaluru"),
            // Duplicate city to exercise dedupe.
            dealer_model("EV South 2", "Kerala", "Ernakulam", "Kochi"),
        ]
    }

    #[tokio::test]
    async fn filter_options_lists_distinct_sorted_states() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([sample_network()])
            .into_connection();

        let options = service(db)
            .filter_options(None, None)
            .await
            .expect("options should succeed");

        assert_eq!(options.states, vec!["Karnataka", "Kerala"]);
        assert!(options.districts.is_none());
        assert!(options.cities.is_none());
    }

    #[tokio::test]
    async fn filter_options_cascades_to_districts_and_cities() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([sample_network()])
            .into_connection();

        let options = service(db)
            .filter_options(Some("Kerala"), Some("Ernakulam"))
            .await
            .expect("options should succeed");

        assert_eq!(
            options.districts.as_deref(),
            Some(["Ernakulam".to_string(), "Kozhikode".to_string()].as_slice())
        );
        assert_eq!(
            options.cities.as_deref(),
            Some(["Aluva".to_string(), "Kochi".to_string()].as_slice())
        );
    }

    #[tokio::test]
    async fn filter_options_rejects_district_without_state() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

        let err = service(db)
            .filter_options(None, Some("Ernakulam"))
            .await
            .expect_err("options should fail");

        assert_eq!(err.message(), "district filter requires a state");
    }
}
