use serde::Serialize;

use crate::{
    db::dao::{FaqCategoryDao, FaqQuestionDao},
    db::entities::{faq_category, faq_question},
    error::AppError,
    services::crud_service::CrudService,
};

#[derive(Clone, Debug, Serialize)]
pub struct FaqCategoryWithQuestions {
    #[serde(flatten)]
    pub category: faq_category::Model,
    pub questions: Vec<faq_question::Model>,
}

#[derive(Clone)]
pub struct FaqCategoryService {
    category_dao: FaqCategoryDao,
    question_dao: FaqQuestionDao,
}

impl FaqCategoryService {
    pub fn new(category_dao: FaqCategoryDao, question_dao: FaqQuestionDao) -> Self {
        Self {
            category_dao,
            question_dao,
        }
    }

    /// The full FAQ tree: categories by display order, each with its ordered
    /// questions. Empty categories are kept so the admin sees what readers see.
    pub async fn list_with_questions(&self) -> Result<Vec<FaqCategoryWithQuestions>, AppError> {
        let categories = self.category_dao.list_ordered().await?;
        let mut out = Vec::with_capacity(categories.len());
        for category in categories {
            let questions = self.question_dao.list_for_category(&category.id).await?;
            out.push(FaqCategoryWithQuestions {
                category,
                questions,
            });
        }
        Ok(out)
    }
}

impl CrudService for FaqCategoryService {
    type Dao = FaqCategoryDao;

    fn dao(&self) -> &Self::Dao {
        &self.category_dao
    }

    fn resource_name(&self) -> &'static str {
        "FAQ category"
    }
}

#[derive(Clone)]
pub struct FaqQuestionService {
    dao: FaqQuestionDao,
}

impl FaqQuestionService {
    pub fn new(dao: FaqQuestionDao) -> Self {
        Self { dao }
    }
}

impl CrudService for FaqQuestionService {
    type Dao = FaqQuestionDao;

    fn dao(&self) -> &Self::Dao {
        &self.dao
    }

    fn resource_name(&self) -> &'static str {
        "FAQ question"
    }
}

#[cfg(test)]
mod tests {
    use chrono::{FixedOffset, TimeZone};
    use sea_orm::{DatabaseBackend, MockDatabase};
    use uuid::Uuid;

    use crate::{
        db::entities::{faq_category, faq_question},
        services::ServiceContext,
    };

    fn ts() -> chrono::DateTime<chrono::FixedOffset> {
        FixedOffset::east_opt(0)
            .expect("offset should be valid")
            .with_ymd_and_hms(2026, 1, 1, 0, 0, 0)
            .single()
            .expect("timestamp should be valid")
    }

    fn category(name: &str, display_order: i32) -> faq_category::Model {
        let now = ts();
        faq_category::Model {
            id: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
            name: name.to_string(),
            display_order,
        }
    }

    fn question(category_id: Uuid, question: &str) -> faq_question::Model {
        let now = ts();
        faq_question::Model {
            id: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
            category_id,
            question: question.to_string(),
            answer: "answer".to_string(),
            display_order: 0,
        }
    }

    #[tokio::test]
    async fn list_with_questions_groups_by_category() {
        let charging = category("Charging", 0);
        let warranty = category("Warranty", 1);
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![charging.clone(), warranty.clone()]])
            .append_query_results([vec![
                question(charging.id, "How long does a full charge take?"),
                question(charging.id, "Can I charge at home?"),
            ]])
            .append_query_results([Vec::<faq_question::Model>::new()])
            .into_connection();

        let tree = ServiceContext::new(&db)
            .faq_category()
            .list_with_questions()
            .await
            .expect("listing should succeed");

        assert_eq!(tree.len(), 2);
        assert_eq!(tree[0].category.name, "Charging");
        assert_eq!(tree[0].questions.len(), 2);
        assert!(tree[1].questions.is_empty());
    }
}
