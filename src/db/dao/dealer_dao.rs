use sea_orm::{ColumnTrait, DatabaseConnection, Order, QueryFilter};

use super::{DaoBase, DaoResult};
use crate::db::entities::dealer::{self, Entity as Dealer};

#[derive(Clone)]
pub struct DealerDao {
    db: DatabaseConnection,
}

impl DaoBase for DealerDao {
    type Entity = Dealer;

    fn from_db(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl DealerDao {
    /// Active dealers, optionally narrowed by location. The cascading filter
    /// options for the locator are computed over this same result set.
    pub async fn list_active(
        &self,
        state: Option<&str>,
        district: Option<&str>,
        city: Option<&str>,
    ) -> DaoResult<Vec<dealer::Model>> {
        let state = state.map(str::to_string);
        let district = district.map(str::to_string);
        let city = city.map(str::to_string);
        self.all(Some((dealer::Column::Name, Order::Asc)), move |query| {
            let mut query = query.filter(dealer::Column::Active.eq(true));
            if let Some(state) = &state {
                query = query.filter(dealer::Column::State.eq(state.clone()));
            }
            if let Some(district) = &district {
                query = query.filter(dealer::Column::District.eq(district.clone()));
            }
            if let Some(city) = &city {
                query = query.filter(dealer::Column::City.eq(city.clone()));
            }
            query
        })
        .await
    }
}
