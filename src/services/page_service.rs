use serde::Serialize;

use crate::{
    db::dao::DynamicPageDao,
    db::entities::dynamic_page,
    error::AppError,
    services::crud_service::CrudService,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageLayout {
    Standard,
    Landing,
    Article,
}

impl PageLayout {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Landing => "landing",
            Self::Article => "article",
        }
    }
}

impl TryFrom<&str> for PageLayout {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "standard" => Ok(Self::Standard),
            "landing" => Ok(Self::Landing),
            "article" => Ok(Self::Article),
            other => Err(format!("unknown page layout: {other}")),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PagePlacement {
    Header,
    Footer,
    None,
}

impl PagePlacement {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Header => "header",
            Self::Footer => "footer",
            Self::None => "none",
        }
    }
}

impl TryFrom<&str> for PagePlacement {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "header" => Ok(Self::Header),
            "footer" => Ok(Self::Footer),
            "none" => Ok(Self::None),
            other => Err(format!("unknown page placement: {other}")),
        }
    }
}

/// Navigation entry for the storefront menus. Full page content is only
/// fetched per slug.
#[derive(Clone, Debug, Serialize)]
pub struct PageNavEntry {
    pub slug: String,
    pub title: String,
    pub placement: String,
}

#[derive(Clone)]
pub struct DynamicPageService {
    dao: DynamicPageDao,
}

impl DynamicPageService {
    pub fn new(dao: DynamicPageDao) -> Self {
        Self { dao }
    }

    pub async fn list_navigation(&self) -> Result<Vec<PageNavEntry>, AppError> {
        let pages = self.dao.list_published().await?;
        Ok(pages
            .into_iter()
            .map(|page| PageNavEntry {
                slug: page.slug,
                title: page.title,
                placement: page.placement,
            })
            .collect())
    }

    /// Unpublished pages 404 like missing ones.
    pub async fn get_published(&self, slug: &str) -> Result<dynamic_page::Model, AppError> {
        let not_found = || AppError::not_found("Page not found");
        let page = self.dao.find_by_slug(slug).await?.ok_or_else(not_found)?;
        if !page.published {
            return Err(not_found());
        }
        Ok(page)
    }
}

impl CrudService for DynamicPageService {
    type Dao = DynamicPageDao;

    fn dao(&self) -> &Self::Dao {
        &self.dao
    }

    fn resource_name(&self) -> &'static str {
        "Page"
    }
}

#[cfg(test)]
mod tests {
    use chrono::{FixedOffset, TimeZone};
    use sea_orm::{DatabaseBackend, MockDatabase};
    use uuid::Uuid;

    use super::{PageLayout, PagePlacement};
    use crate::{db::entities::dynamic_page, services::ServiceContext};

    fn ts() -> chrono::DateTime<chrono::FixedOffset> {
        FixedOffset::east_opt(0)
            .expect("offset should be valid")
            .with_ymd_and_hms(2026, 1, 1, 0, 0, 0)
            .single()
            .expect("timestamp should be valid")
    }

    fn page(slug: &str, published: bool) -> dynamic_page::Model {
        let now = ts();
        dynamic_page::Model {
            id: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
            title: slug.to_uppercase(),
            slug: slug.to_string(),
            layout: "standard".to_string(),
            placement: "footer".to_string(),
            content: serde_json::json!({"blocks": []}),
            published,
        }
    }

    #[test]
    fn layout_and_placement_round_trip() {
        assert_eq!(PageLayout::try_from("landing"), Ok(PageLayout::Landing));
        assert!(PageLayout::try_from("modal").is_err());
        assert_eq!(
            PagePlacement::try_from("header"),
            Ok(PagePlacement::Header)
        );
        assert!(PagePlacement::try_from("sidebar").is_err());
    }

    #[tokio::test]
    async fn get_published_hides_drafts() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![page("about-us", false)]])
            .into_connection();

        let err = ServiceContext::new(&db)
            .dynamic_page()
            .get_published("about-us")
            .await
            .expect_err("fetch should fail");
        assert_eq!(err.message(), "Page not found");
    }

    #[tokio::test]
    async fn list_navigation_projects_nav_fields() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![page("about-us", true)]])
            .into_connection();

        let nav = ServiceContext::new(&db)
            .dynamic_page()
            .list_navigation()
            .await
            .expect("listing should succeed");
        assert_eq!(nav.len(), 1);
        assert_eq!(nav[0].slug, "about-us");
        assert_eq!(nav[0].placement, "footer");
    }
}
