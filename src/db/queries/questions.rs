use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::db::{StoreError, StoreResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Question {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i64,
}

/// A question that has not been stored yet, so it has no id.
#[derive(Debug, Clone)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i64,
}

impl NewQuestion {
    pub fn validate(&self) -> StoreResult<()> {
        if self.question.trim().is_empty() {
            return Err(StoreError::Validation(
                "question text must not be empty".to_owned(),
            ));
        }
        if self.answer.trim().is_empty() {
            return Err(StoreError::Validation("answer must not be empty".to_owned()));
        }
        Ok(())
    }
}

#[tracing::instrument(skip(pool))]
pub async fn get_all_questions(pool: &SqlitePool) -> StoreResult<Vec<Question>> {
    let questions = sqlx::query_as::<_, Question>(
        r#"
SELECT id, question, answer, category, difficulty
FROM questions
ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .await?;
    Ok(questions)
}

#[tracing::instrument(skip(pool))]
pub async fn get_questions_for_category(
    pool: &SqlitePool,
    category: i64,
) -> StoreResult<Vec<Question>> {
    let questions = sqlx::query_as::<_, Question>(
        r#"
SELECT id, question, answer, category, difficulty
FROM questions
WHERE questions.category = ?1
ORDER BY id
        "#,
    )
    .bind(category)
    .fetch_all(pool)
    .await?;
    Ok(questions)
}

#[tracing::instrument(skip(pool))]
pub async fn create_question(pool: &SqlitePool, question: NewQuestion) -> StoreResult<i64> {
    question.validate()?;
    let mut conn = pool.acquire().await?;

    let id = sqlx::query(
        r#"
INSERT INTO questions (question, answer, category, difficulty) VALUES (?1, ?2, ?3, ?4)
        "#,
    )
    .bind(&question.question)
    .bind(&question.answer)
    .bind(question.category)
    .bind(question.difficulty)
    .execute(&mut *conn)
    .await?
    .last_insert_rowid();

    tracing::info!(id, "Created question");
    Ok(id)
}

/// Deletes in a single statement; whoever loses a race for the same id sees `NotFound`.
#[tracing::instrument(skip(pool))]
pub async fn delete_question(pool: &SqlitePool, id: i64) -> StoreResult<()> {
    let deleted = sqlx::query(
        r#"
DELETE FROM questions WHERE questions.id = ?1
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?
    .rows_affected();

    if deleted == 0 {
        return Err(StoreError::NotFound {
            entity: "question",
            id,
        });
    }
    tracing::info!(id, "Deleted question");
    Ok(())
}
