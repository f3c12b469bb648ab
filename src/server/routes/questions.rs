use axum::{
    extract::State,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::{
    catalog::{paginate, search, Page},
    db::{
        queries::questions::{self, get_all_questions},
        NewQuestion,
    },
    server::{
        app::AppState,
        deserializers,
        error::{success, ApiError, ApiResponse, AppJson, AppPath, AppQuery},
    },
};

use super::{category_map, PageQuery, QuestionsPage};

/// Body of `POST /questions`: a `searchTerm` key asks for a search, anything
/// else is a new question.
#[derive(Deserialize)]
struct QuestionsBody {
    #[serde(rename = "searchTerm")]
    search_term: Option<String>,
    question: Option<String>,
    answer: Option<String>,
    #[serde(default)]
    #[serde(deserialize_with = "deserializers::deserialize_option_number_from_string")]
    category: Option<i64>,
    #[serde(default)]
    #[serde(deserialize_with = "deserializers::deserialize_option_number_from_string")]
    difficulty: Option<i64>,
}

#[derive(Deserialize)]
struct SearchBody {
    #[serde(rename = "searchTerm")]
    search_term: String,
}

#[derive(Serialize)]
struct Created {
    created: i64,
}

#[derive(Serialize)]
struct Deleted {
    deleted: i64,
}

impl TryFrom<QuestionsBody> for NewQuestion {
    type Error = ApiError;

    fn try_from(body: QuestionsBody) -> Result<Self, Self::Error> {
        match (body.question, body.answer, body.category, body.difficulty) {
            (Some(question), Some(answer), Some(category), Some(difficulty)) => Ok(NewQuestion {
                question,
                answer,
                category,
                difficulty,
            }),
            _ => {
                tracing::info!("New question is missing fields");
                Err(ApiError::Unprocessable)
            }
        }
    }
}

async fn list_questions(
    State(pool): State<SqlitePool>,
    AppQuery(PageQuery { page }): AppQuery<PageQuery>,
) -> ApiResponse<QuestionsPage> {
    let selection = get_all_questions(&pool).await?;
    let questions = paginate(page, &selection).to_vec();
    if questions.is_empty() {
        tracing::info!(page = page.number(), "Empty page");
        return Err(ApiError::NotFound);
    }

    success(QuestionsPage {
        questions,
        total_questions: selection.len(),
        categories: Some(category_map(&pool).await?),
        current_category: None,
    })
}

async fn search_questions(
    pool: &SqlitePool,
    term: &str,
    page: Page,
) -> ApiResponse<QuestionsPage> {
    let found = search(term, &get_all_questions(pool).await?);
    tracing::debug!(term, matches = found.len(), "Searched questions");
    success(QuestionsPage {
        questions: paginate(page, &found).to_vec(),
        total_questions: found.len(),
        categories: None,
        current_category: None,
    })
}

async fn create_question(pool: &SqlitePool, body: QuestionsBody) -> ApiResponse<Created> {
    let new_question = NewQuestion::try_from(body)?;
    let created = questions::create_question(pool, new_question)
        .await
        .map_err(ApiError::from_write)?;
    success(Created { created })
}

async fn create_or_search(
    State(pool): State<SqlitePool>,
    AppQuery(PageQuery { page }): AppQuery<PageQuery>,
    AppJson(mut body): AppJson<QuestionsBody>,
) -> Response {
    match body.search_term.take() {
        Some(term) => search_questions(&pool, &term, page).await.into_response(),
        None => create_question(&pool, body).await.into_response(),
    }
}

async fn search_only(
    State(pool): State<SqlitePool>,
    AppQuery(PageQuery { page }): AppQuery<PageQuery>,
    AppJson(body): AppJson<SearchBody>,
) -> ApiResponse<QuestionsPage> {
    search_questions(&pool, &body.search_term, page).await
}

async fn delete_question(
    State(pool): State<SqlitePool>,
    AppPath(id): AppPath<i64>,
) -> ApiResponse<Deleted> {
    questions::delete_question(&pool, id)
        .await
        .map_err(ApiError::from_write)?;
    success(Deleted { deleted: id })
}

pub fn questions_router(state: AppState) -> Router {
    Router::new()
        .route("/questions", get(list_questions).post(create_or_search))
        .route("/questions/search", post(search_only))
        .route("/questions/{id}", delete(delete_question))
        .with_state(state)
}
