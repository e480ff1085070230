use sea_orm::{DatabaseConnection, Set};
use uuid::Uuid;

use super::{DaoBase, DaoResult};
use crate::db::entities::form_submission::{self, Entity as FormSubmission};

#[derive(Clone)]
pub struct FormSubmissionDao {
    db: DatabaseConnection,
}

impl DaoBase for FormSubmissionDao {
    type Entity = FormSubmission;

    fn from_db(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl FormSubmissionDao {
    pub async fn create_submission(
        &self,
        form_type: &str,
        payload: serde_json::Value,
        status: &str,
    ) -> DaoResult<form_submission::Model> {
        let model = form_submission::ActiveModel {
            form_type: Set(form_type.to_string()),
            payload: Set(payload),
            status: Set(status.to_string()),
            ..Default::default()
        };
        self.create(model).await
    }

    pub async fn set_status(&self, id: &Uuid, status: &str) -> DaoResult<form_submission::Model> {
        let status = status.to_string();
        self.update(*id, move |active| {
            active.status = Set(status);
        })
        .await
    }
}
