use axum::{extract::State, routing::get, Router};
use serde::Serialize;
use sqlx::SqlitePool;

use crate::{
    catalog::paginate,
    db::queries::{categories::get_category, questions::get_questions_for_category},
    server::{
        app::AppState,
        error::{success, ApiError, ApiResponse, AppPath, AppQuery},
    },
};

use super::{category_map, CategoryMap, PageQuery, QuestionsPage};

#[derive(Serialize)]
struct CategoriesBody {
    categories: CategoryMap,
}

async fn get_categories(State(pool): State<SqlitePool>) -> ApiResponse<CategoriesBody> {
    let categories = category_map(&pool).await?;
    if categories.is_empty() {
        return Err(ApiError::NotFound);
    }
    success(CategoriesBody { categories })
}

async fn questions_for_category(
    State(pool): State<SqlitePool>,
    AppPath(id): AppPath<i64>,
    AppQuery(PageQuery { page }): AppQuery<PageQuery>,
) -> ApiResponse<QuestionsPage> {
    let category = get_category(&pool, id).await?;
    let selection = get_questions_for_category(&pool, id).await?;
    let questions = paginate(page, &selection).to_vec();
    if questions.is_empty() {
        tracing::info!(category = id, page = page.number(), "Empty page");
        return Err(ApiError::NotFound);
    }

    success(QuestionsPage {
        questions,
        total_questions: selection.len(),
        categories: Some(category_map(&pool).await?),
        current_category: Some(category.kind),
    })
}

pub fn category_router(state: AppState) -> Router {
    Router::new()
        .route("/categories", get(get_categories))
        .route("/categories/{id}/questions", get(questions_for_category))
        .with_state(state)
}
