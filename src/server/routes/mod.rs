mod categories;
mod questions;
mod quizzes;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

pub use categories::category_router;
pub use questions::questions_router;
pub use quizzes::{quizzes_router, QuizQuestion};

use crate::catalog::Page;
use crate::db::{queries::categories::get_all_categories, Question, StoreResult};

use super::deserializers::deserialize_page;

/// Categories keyed by id, rendered as a JSON object `{"1": "Science", ...}`.
pub type CategoryMap = BTreeMap<i64, String>;

async fn category_map(pool: &SqlitePool) -> StoreResult<CategoryMap> {
    Ok(get_all_categories(pool)
        .await?
        .into_iter()
        .map(|c| (c.id, c.kind))
        .collect())
}

#[derive(Deserialize)]
struct PageQuery {
    #[serde(default, deserialize_with = "deserialize_page")]
    page: Page,
}

#[derive(Serialize, Deserialize)]
pub struct QuestionsPage {
    pub questions: Vec<Question>,
    pub total_questions: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<CategoryMap>,
    pub current_category: Option<String>,
}
