use uuid::Uuid;

use sea_orm::Set;

use crate::{
    auth::{Role, password::hash_password},
    db::dao::{DaoBase, UserDao},
    db::entities::user,
    error::AppError,
    services::crud_service::CrudService,
};

#[derive(Clone)]
pub struct UserService {
    user_dao: UserDao,
}

impl UserService {
    pub fn new(user_dao: UserDao) -> Self {
        Self { user_dao }
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<user::Model>, AppError> {
        Ok(self.user_dao.find_by_email(email).await?)
    }

    pub async fn find_by_id(&self, id: &Uuid) -> Result<Option<user::Model>, AppError> {
        match self.user_dao.find_by_id(*id).await {
            Ok(model) => Ok(Some(model)),
            Err(crate::db::dao::DaoLayerError::NotFound { .. }) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    pub async fn create_account(
        &self,
        email: &str,
        password: &str,
        role: &Role,
    ) -> Result<user::Model, AppError> {
        let email = email.trim();
        if email.is_empty() || !email.contains('@') {
            return Err(AppError::bad_request("Valid email required"));
        }
        if self.find_by_email(email).await?.is_some() {
            return Err(AppError::conflict("User already exists"));
        }
        let password_hash = hash_password(password)?;
        Ok(self
            .user_dao
            .create_user(email, &password_hash, role.as_str())
            .await?)
    }

    pub async fn change_role(&self, id: &Uuid, role: &Role) -> Result<user::Model, AppError> {
        let role = role.as_str().to_string();
        CrudService::update(self, *id, move |active| {
            active.role = Set(role);
        })
        .await
    }

    pub async fn change_password(&self, id: &Uuid, password: &str) -> Result<user::Model, AppError> {
        let password_hash = hash_password(password)?;
        CrudService::update(self, *id, move |active| {
            active.password_hash = Set(password_hash);
        })
        .await
    }

    pub async fn delete_account(&self, actor: &Uuid, id: &Uuid) -> Result<(), AppError> {
        if actor == id {
            return Err(AppError::bad_request("Cannot delete your own account"));
        }
        CrudService::delete(self, *id).await
    }

    pub async fn set_last_login(
        &self,
        id: &Uuid,
        at: &chrono::DateTime<chrono::FixedOffset>,
    ) -> Result<(), AppError> {
        Ok(self.user_dao.set_last_login(id, at).await?)
    }
}

impl CrudService for UserService {
    type Dao = UserDao;

    fn dao(&self) -> &Self::Dao {
        &self.user_dao
    }

    fn resource_name(&self) -> &'static str {
        "User"
    }

    fn denied_filter_keys(&self) -> &'static [&'static str] {
        &["password_hash"]
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::{DatabaseBackend, MockDatabase};
    use uuid::Uuid;

    use super::UserService;
    use crate::{auth::Role, db::dao::DaoContext, db::entities::user};

    fn service(db: sea_orm::DatabaseConnection) -> UserService {
        UserService::new(DaoContext::new(&db).user())
    }

    fn ts() -> chrono::DateTime<chrono::FixedOffset> {
        use chrono::TimeZone;
        chrono::FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2026, 1, 1, 0, 0, 0)
            .unwrap()
    }

    fn user_model(email: &str, role: &str) -> user::Model {
        user::Model {
            id: Uuid::new_v4(),
            created_at: ts(),
            updated_at: ts(),
            email: email.to_string(),
            password_hash: "hash".to_string(),
            role: role.to_string(),
            last_login_at: None,
        }
    }

    #[tokio::test]
    async fn create_account_rejects_invalid_email() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let err = service(db)
            .create_account("not-an-email", "password123", &Role::Admin)
            .await
            .expect_err("create should fail");
        assert_eq!(err.message(), "Valid email required");
    }

    #[tokio::test]
    async fn create_account_rejects_duplicate_email() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![user_model("taken@example.com", "admin")]])
            .into_connection();
        let err = service(db)
            .create_account("taken@example.com", "password123", &Role::Admin)
            .await
            .expect_err("create should fail");
        assert_eq!(err.message(), "User already exists");
    }

    #[tokio::test]
    async fn delete_account_rejects_self_deletion() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let id = Uuid::new_v4();
        let err = service(db)
            .delete_account(&id, &id)
            .await
            .expect_err("delete should fail");
        assert_eq!(err.message(), "Cannot delete your own account");
    }
}
