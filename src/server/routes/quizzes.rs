use std::collections::HashSet;

use axum::{extract::State, routing::post, Router};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::{
    catalog::{next_question, QuizCategory},
    db::Question,
    server::{
        app::AppState,
        deserializers,
        error::{success, ApiResponse, AppJson},
    },
    telemetry::QUIZ_QUESTIONS_CNTR,
};

#[derive(Deserialize)]
struct QuizCategoryBody {
    #[serde(deserialize_with = "deserializers::deserialize_number_from_string")]
    id: i64,
}

#[derive(Deserialize)]
struct QuizBody {
    quiz_category: QuizCategoryBody,
    #[serde(default)]
    previous_questions: HashSet<i64>,
}

/// `question` is `null` once every eligible question has been asked.
#[derive(Serialize, Deserialize)]
pub struct QuizQuestion {
    pub question: Option<Question>,
}

async fn play_quiz(
    State(pool): State<SqlitePool>,
    AppJson(body): AppJson<QuizBody>,
) -> ApiResponse<QuizQuestion> {
    let category = QuizCategory::from(body.quiz_category.id);
    let question = next_question(&pool, category, &body.previous_questions).await?;
    if question.is_some() {
        QUIZ_QUESTIONS_CNTR
            .with_label_values(&[category.label().as_str()])
            .inc();
    }
    success(QuizQuestion { question })
}

pub fn quizzes_router(state: AppState) -> Router {
    Router::new()
        .route("/quizzes", post(play_quiz))
        .with_state(state)
}
