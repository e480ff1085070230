use chrono::{Duration, Utc};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use super::{DaoBase, DaoLayerError, DaoResult};
use crate::db::entities::session::{self, Entity as Session};

const DEFAULT_SESSION_TTL_DAYS: i64 = 30;

#[derive(Clone)]
pub struct SessionDao {
    db: DatabaseConnection,
}

impl DaoBase for SessionDao {
    type Entity = Session;

    fn from_db(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl SessionDao {
    pub async fn create_session(
        &self,
        user_id: &Uuid,
        ttl_days: Option<i64>,
    ) -> DaoResult<session::Model> {
        let expires_at = Utc::now().fixed_offset()
            + Duration::days(ttl_days.unwrap_or(DEFAULT_SESSION_TTL_DAYS));
        let model = session::ActiveModel {
            token: Set(Uuid::new_v4().to_string()),
            user_id: Set(*user_id),
            expires_at: Set(expires_at),
            revoked: Set(false),
            ..Default::default()
        };
        self.create(model).await
    }

    pub async fn find_active_by_token(&self, token: &str) -> DaoResult<Option<session::Model>> {
        let token = token.to_string();
        self.find(1, 1, None, move |query| {
            query
                .filter(session::Column::Token.eq(token))
                .filter(session::Column::Revoked.eq(false))
        })
        .await
        .map(|response| response.data.into_iter().next())
    }

    pub async fn revoke_token(&self, token: &str) -> DaoResult<()> {
        Session::update_many()
            .col_expr(
                session::Column::Revoked,
                sea_orm::sea_query::Expr::value(true),
            )
            .filter(session::Column::Token.eq(token))
            .exec(&self.db)
            .await
            .map_err(DaoLayerError::Db)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, FixedOffset, TimeZone};
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase};
    use uuid::Uuid;

    use crate::db::entities::session;

    use super::SessionDao;
    use crate::db::dao::{DaoBase, DaoLayerError};

    fn ts() -> chrono::DateTime<chrono::FixedOffset> {
        FixedOffset::east_opt(0)
            .expect("offset should be valid")
            .with_ymd_and_hms(2026, 1, 1, 0, 0, 0)
            .single()
            .expect("timestamp should be valid")
    }

    fn session_model(token: &str, user_id: Uuid, revoked: bool) -> session::Model {
        let now = ts();
        session::Model {
            id: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
            token: token.to_string(),
            user_id,
            expires_at: now + Duration::days(30),
            revoked,
        }
    }

    #[tokio::test]
    async fn find_active_by_token_returns_none_when_missing() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<session::Model>::new()])
            .into_connection();
        let dao = SessionDao::new(&db);

        let result = dao
            .find_active_by_token("missing-token")
            .await
            .expect("query should succeed");
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn find_active_by_token_returns_session_when_present() {
        let user_id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[session_model("token-1", user_id, false)]])
            .into_connection();
        let dao = SessionDao::new(&db);

        let session = dao
            .find_active_by_token("token-1")
            .await
            .expect("query should succeed")
            .expect("session should exist");
        assert_eq!(session.user_id, user_id);
        assert!(!session.revoked);
    }

    #[tokio::test]
    async fn revoke_token_maps_database_errors() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_errors([DbErr::Custom("update failed".to_string())])
            .into_connection();
        let dao = SessionDao::new(&db);

        let err = dao
            .revoke_token("token-1")
            .await
            .expect_err("update should fail");
        assert!(matches!(err, DaoLayerError::Db(_)));
    }
}
