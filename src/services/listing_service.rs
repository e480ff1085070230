//! Careers and press listings.

use crate::{
    db::dao::{JobOpeningDao, PressArticleDao},
    db::entities::{job_opening, press_article},
    error::AppError,
    services::crud_service::CrudService,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JobStatus {
    Open,
    Closed,
}

impl JobStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
        }
    }
}

impl TryFrom<&str> for JobStatus {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "open" => Ok(Self::Open),
            "closed" => Ok(Self::Closed),
            other => Err(format!("unknown job status: {other}")),
        }
    }
}

#[derive(Clone)]
pub struct JobOpeningService {
    dao: JobOpeningDao,
}

impl JobOpeningService {
    pub fn new(dao: JobOpeningDao) -> Self {
        Self { dao }
    }

    pub async fn list_open(&self) -> Result<Vec<job_opening::Model>, AppError> {
        Ok(self.dao.list_open().await?)
    }
}

impl CrudService for JobOpeningService {
    type Dao = JobOpeningDao;

    fn dao(&self) -> &Self::Dao {
        &self.dao
    }

    fn resource_name(&self) -> &'static str {
        "Job opening"
    }
}

#[derive(Clone)]
pub struct PressArticleService {
    dao: PressArticleDao,
}

impl PressArticleService {
    pub fn new(dao: PressArticleDao) -> Self {
        Self { dao }
    }

    pub async fn list_newest_first(&self) -> Result<Vec<press_article::Model>, AppError> {
        Ok(self.dao.list_newest_first().await?)
    }
}

impl CrudService for PressArticleService {
    type Dao = PressArticleDao;

    fn dao(&self) -> &Self::Dao {
        &self.dao
    }

    fn resource_name(&self) -> &'static str {
        "Press article"
    }
}
