use uuid::Uuid;

use crate::{
    db::dao::FormSubmissionDao,
    db::entities::form_submission,
    error::AppError,
    services::crud_service::CrudService,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormType {
    Enquiry,
    Partnership,
    JobApplication,
    SpareParts,
}

impl FormType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Enquiry => "enquiry",
            Self::Partnership => "partnership",
            Self::JobApplication => "job_application",
            Self::SpareParts => "spare_parts",
        }
    }
}

impl TryFrom<&str> for FormType {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "enquiry" => Ok(Self::Enquiry),
            "partnership" => Ok(Self::Partnership),
            "job_application" => Ok(Self::JobApplication),
            "spare_parts" => Ok(Self::SpareParts),
            other => Err(format!("unknown form type: {other}")),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmissionStatus {
    New,
    InReview,
    Resolved,
}

impl SubmissionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "new",
            Self::InReview => "in_review",
            Self::Resolved => "resolved",
        }
    }

    /// Forward-only triage: new → in_review → resolved, with the shortcut
    /// new → resolved for spam and one-touch closes.
    pub fn can_transition_to(&self, next: SubmissionStatus) -> bool {
        matches!(
            (self, next),
            (Self::New, Self::InReview)
                | (Self::New, Self::Resolved)
                | (Self::InReview, Self::Resolved)
        )
    }
}

impl TryFrom<&str> for SubmissionStatus {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "new" => Ok(Self::New),
            "in_review" => Ok(Self::InReview),
            "resolved" => Ok(Self::Resolved),
            other => Err(format!("unknown submission status: {other}")),
        }
    }
}

#[derive(Clone)]
pub struct FormSubmissionService {
    dao: FormSubmissionDao,
}

impl FormSubmissionService {
    pub fn new(dao: FormSubmissionDao) -> Self {
        Self { dao }
    }

    pub async fn submit(
        &self,
        form_type: &str,
        payload: serde_json::Value,
    ) -> Result<form_submission::Model, AppError> {
        let form_type = FormType::try_from(form_type).map_err(AppError::bad_request)?;
        Ok(self
            .dao
            .create_submission(
                form_type.as_str(),
                payload,
                SubmissionStatus::New.as_str(),
            )
            .await?)
    }

    pub async fn transition_status(
        &self,
        id: &Uuid,
        next: &str,
    ) -> Result<form_submission::Model, AppError> {
        let next = SubmissionStatus::try_from(next).map_err(AppError::bad_request)?;
        let current_model = CrudService::find_by_id(self, *id).await?;
        let current = SubmissionStatus::try_from(current_model.status.as_str())
            .map_err(|_| AppError::internal("Stored submission status is not recognized"))?;

        if !current.can_transition_to(next) {
            return Err(AppError::bad_request(format!(
                "Cannot move submission from {} to {}",
                current.as_str(),
                next.as_str()
            )));
        }

        Ok(self.dao.set_status(id, next.as_str()).await?)
    }
}

impl CrudService for FormSubmissionService {
    type Dao = FormSubmissionDao;

    fn dao(&self) -> &Self::Dao {
        &self.dao
    }

    fn resource_name(&self) -> &'static str {
        "Submission"
    }
}
