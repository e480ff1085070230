//! Disk-backed object store for uploaded media. Admins request an upload
//! grant, PUT the bytes against a short-lived signed token, and the stored
//! file is then served from the object root.

use std::path::{Component, Path, PathBuf};

use jsonwebtoken::{Algorithm, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    auth::jwt::{JwtKeys, now_unix},
    error::AppError,
};

pub const UPLOAD_TOKEN_TTL_SECS: usize = 10 * 60;

/// Claims inside an upload token: the relative path the bytes may land at.
#[derive(Debug, Serialize, Deserialize)]
struct UploadClaims {
    sub: String,
    exp: usize,
    iat: usize,
}

#[derive(Debug, Serialize)]
pub struct UploadGrant {
    pub upload_url: String,
    pub public_path: String,
    pub expires_in: usize,
}

#[derive(Clone)]
pub struct ObjectStore {
    root: PathBuf,
    max_bytes: usize,
    jwt: JwtKeys,
}

impl ObjectStore {
    pub fn new(root: PathBuf, max_bytes: usize, jwt: JwtKeys) -> Self {
        Self {
            root,
            max_bytes,
            jwt,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Issue a signed upload grant for a sanitized, uuid-prefixed filename.
    pub fn issue_upload(&self, filename: &str) -> Result<UploadGrant, AppError> {
        let sanitized = sanitize_filename(filename);
        if sanitized.is_empty() {
            return Err(AppError::bad_request("Filename required"));
        }

        let relative = format!("uploads/{}-{}", Uuid::new_v4(), sanitized);
        let iat = now_unix();
        let claims = UploadClaims {
            sub: relative.clone(),
            exp: iat + UPLOAD_TOKEN_TTL_SECS,
            iat,
        };
        let token = jsonwebtoken::encode(
            &jsonwebtoken::Header::new(Algorithm::HS256),
            &claims,
            &self.jwt.enc,
        )
        .map_err(|err| AppError::internal(format!("Upload token encoding failed: {err}")))?;

        Ok(UploadGrant {
            upload_url: format!("/objects/upload/{token}"),
            public_path: format!("/objects/{relative}"),
            expires_in: UPLOAD_TOKEN_TTL_SECS,
        })
    }

    /// Write the uploaded bytes under the object root. The token names the
    /// only path it can write to.
    pub async fn store(&self, token: &str, bytes: &[u8]) -> Result<String, AppError> {
        if bytes.len() > self.max_bytes {
            return Err(AppError::bad_request(format!(
                "Upload exceeds the {} byte limit",
                self.max_bytes
            )));
        }

        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        let data = jsonwebtoken::decode::<UploadClaims>(token, &self.jwt.dec, &validation)?;
        let relative = data.claims.sub;

        let target = self.resolve(&relative)?;
        if let Some(parent) = target.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|err| AppError::internal_with_source("Object write failed", err))?;
        }
        tokio::fs::write(&target, bytes)
            .await
            .map_err(|err| AppError::internal_with_source("Object write failed", err))?;

        Ok(format!("/objects/{relative}"))
    }

    fn resolve(&self, relative: &str) -> Result<PathBuf, AppError> {
        let path = Path::new(relative);
        let is_clean = path
            .components()
            .all(|component| matches!(component, Component::Normal(_)));
        if !is_clean {
            return Err(AppError::bad_request("Invalid object path"));
        }
        Ok(self.root.join(path))
    }
}

/// Keep the extension, flatten everything suspicious to dashes.
fn sanitize_filename(filename: &str) -> String {
    let trimmed = filename.trim().to_lowercase();
    let mut out = String::with_capacity(trimmed.len());
    let mut last_dash = false;
    for ch in trimmed.chars() {
        if ch.is_ascii_alphanumeric() || ch == '.' || ch == '_' {
            out.push(ch);
            last_dash = false;
        } else if !last_dash && !out.is_empty() {
            out.push('-');
            last_dash = true;
        }
    }
    out.trim_matches(|c| c == '-' || c == '.').to_string()
}
