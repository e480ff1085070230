use crate::{
    auth::{
        Claims, Role, TokenBundle,
        jwt::{JwtKeys, decode_token, encode_token, make_access_claims},
        password::{hash_password, verify_password},
    },
    config::AppConfig,
    db::dao::SessionDao,
    db::entities::user,
    error::AppError,
    services::{crud_service::CrudService, user_service::UserService},
};

pub const ACCESS_TTL_SECS: usize = 15 * 60; // 15 minutes
const SESSION_TTL_DAYS: i64 = 30;

/// Issues and rotates console sessions: a short-lived access JWT plus a
/// DB-persisted session token used to refresh it.
#[derive(Clone)]
pub struct AuthService {
    user_service: UserService,
    session_dao: SessionDao,
    jwt: JwtKeys,
}

impl AuthService {
    pub fn new(user_service: UserService, session_dao: SessionDao, jwt: JwtKeys) -> Self {
        Self {
            user_service,
            session_dao,
            jwt,
        }
    }

    fn roles_for(user: &user::Model) -> Result<Vec<Role>, AppError> {
        let primary = Role::try_from(user.role.as_str())
            .map_err(|_| AppError::internal("Account role not recognized"))?;
        let mut roles = vec![primary.clone()];
        // A super_admin passes every admin gate as well.
        if matches!(primary, Role::SuperAdmin) {
            roles.push(Role::Admin);
        }
        Ok(roles)
    }

    async fn issue_tokens(&self, user: &user::Model) -> Result<TokenBundle, AppError> {
        let roles = Self::roles_for(user)?;
        let claims = make_access_claims(&user.id, roles, ACCESS_TTL_SECS);
        let access_token = encode_token(&self.jwt, &claims)?;

        let session = self
            .session_dao
            .create_session(&user.id, Some(SESSION_TTL_DAYS))
            .await?;

        Ok(TokenBundle {
            access_token,
            session_token: session.token,
            token_type: "Bearer",
            expires_in: ACCESS_TTL_SECS,
        })
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<TokenBundle, AppError> {
        let user = self
            .user_service
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::unauthorized("Invalid credentials"))?;

        let password_ok = verify_password(password, &user.password_hash)?;
        if !password_ok {
            return Err(AppError::unauthorized("Invalid credentials"));
        }

        let now = chrono::Utc::now().fixed_offset();
        self.user_service.set_last_login(&user.id, &now).await?;

        self.issue_tokens(&user).await
    }

    pub async fn refresh(&self, session_token: &str) -> Result<TokenBundle, AppError> {
        let session = self
            .session_dao
            .find_active_by_token(session_token)
            .await?
            .ok_or_else(|| AppError::unauthorized("Invalid session token"))?;

        if session.expires_at < chrono::Utc::now().fixed_offset() || session.revoked {
            return Err(AppError::unauthorized("Session expired"));
        }

        let user = self
            .user_service
            .find_by_id(&session.user_id)
            .await?
            .ok_or_else(|| AppError::unauthorized("Invalid session token"))?;

        // Rotation: the presented token dies with the refresh.
        self.session_dao.revoke_token(session_token).await?;

        self.issue_tokens(&user).await
    }

    pub async fn logout(&self, session_token: &str) -> Result<(), AppError> {
        self.session_dao.revoke_token(session_token).await?;
        Ok(())
    }

    pub fn verify(&self, access_token: &str) -> Result<Claims, AppError> {
        decode_token(&self.jwt, access_token)
    }

    pub async fn seed_admin(&self, cfg: &AppConfig) -> anyhow::Result<()> {
        if let Some(existing) = self
            .user_service
            .find_by_email(&cfg.admin_email)
            .await
            .map_err(|err| anyhow::anyhow!("{err}"))?
        {
            tracing::info!("admin user already present: {}", existing.email);
            return Ok(());
        }

        let hash = hash_password(&cfg.admin_password)
            .map_err(|e| anyhow::anyhow!("admin seed hash error: {e}"))?;
        let user = self
            .user_service
            .dao()
            .create_user(&cfg.admin_email, &hash, Role::SuperAdmin.as_str())
            .await
            .map_err(|err| anyhow::anyhow!("{err}"))?;
        tracing::info!("seeded super_admin user {}", user.email);
        Ok(())
    }
}
