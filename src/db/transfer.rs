//! CSV import and export of the whole catalog.
//!
//! An export directory holds `categories.csv` and `questions.csv`. Importing
//! replaces every stored category and question with the file contents, ids
//! included, inside a single transaction.

use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;
use sqlx::SqlitePool;

use super::queries::categories::{get_all_categories, validate_category_type};
use super::queries::questions::get_all_questions;
use super::{Category, Question};

const CATEGORIES_FILE: &str = "categories.csv";
const QUESTIONS_FILE: &str = "questions.csv";

#[derive(Debug, thiserror::Error)]
pub enum TransferError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Store(#[from] super::StoreError),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

fn write_to(path: &Path, data: &[impl Serialize]) -> Result<(), TransferError> {
    let file = std::fs::File::create(path)?;
    let mut wtr = csv::Writer::from_writer(file);
    for line in data {
        wtr.serialize(line)?;
    }
    wtr.flush()?;
    Ok(())
}

fn read_from<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, TransferError> {
    let file = std::fs::File::open(path)?;
    let mut rdr = csv::Reader::from_reader(file);
    let mut out = Vec::new();
    for record in rdr.deserialize() {
        let record: T = record?;
        out.push(record);
    }
    Ok(out)
}

pub async fn export_data(pool: &SqlitePool, path: &Path) -> Result<(), TransferError> {
    let categories = get_all_categories(pool).await?;
    let questions = get_all_questions(pool).await?;
    if !path.exists() {
        std::fs::create_dir_all(path)?
    }
    write_to(&path.join(CATEGORIES_FILE), &categories)?;
    write_to(&path.join(QUESTIONS_FILE), &questions)?;
    tracing::info!(
        categories = categories.len(),
        questions = questions.len(),
        "Exported catalog to {}",
        path.display()
    );
    Ok(())
}

pub async fn import_data(pool: &SqlitePool, path: &Path) -> Result<(), TransferError> {
    let categories: Vec<Category> = read_from(&path.join(CATEGORIES_FILE))?;
    let questions: Vec<Question> = read_from(&path.join(QUESTIONS_FILE))?;
    for category in &categories {
        validate_category_type(&category.kind)?;
    }
    for question in &questions {
        super::NewQuestion {
            question: question.question.clone(),
            answer: question.answer.clone(),
            category: question.category,
            difficulty: question.difficulty,
        }
        .validate()?;
    }

    let mut tx = pool.begin().await?;
    sqlx::query("DELETE FROM questions").execute(&mut *tx).await?;
    sqlx::query("DELETE FROM categories").execute(&mut *tx).await?;
    for category in &categories {
        sqlx::query("INSERT INTO categories (id, type) VALUES (?1, ?2)")
            .bind(category.id)
            .bind(&category.kind)
            .execute(&mut *tx)
            .await?;
    }
    for question in &questions {
        sqlx::query(
            r#"
INSERT INTO questions (id, question, answer, category, difficulty) VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(question.id)
        .bind(&question.question)
        .bind(&question.answer)
        .bind(question.category)
        .bind(question.difficulty)
        .execute(&mut *tx)
        .await?;
    }
    tx.commit().await?;

    tracing::info!(
        categories = categories.len(),
        questions = questions.len(),
        "Imported catalog from {}",
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_utils::{memory_pool, seeded_pool};

    #[tokio::test]
    async fn exported_catalog_imports_into_fresh_store() {
        let dir = tempfile::tempdir().unwrap();
        let source = seeded_pool().await;
        export_data(&source, dir.path()).await.unwrap();

        let target = memory_pool().await;
        import_data(&target, dir.path()).await.unwrap();

        assert_eq!(
            get_all_categories(&target).await.unwrap(),
            get_all_categories(&source).await.unwrap()
        );
        assert_eq!(
            get_all_questions(&target).await.unwrap(),
            get_all_questions(&source).await.unwrap()
        );
    }

    #[tokio::test]
    async fn import_replaces_existing_rows() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CATEGORIES_FILE), "id,type\n5,Sports\n").unwrap();
        std::fs::write(
            dir.path().join(QUESTIONS_FILE),
            "id,question,answer,category,difficulty\n40,Who won?,Nobody,5,2\n",
        )
        .unwrap();

        let pool = seeded_pool().await;
        import_data(&pool, dir.path()).await.unwrap();

        let categories = get_all_categories(&pool).await.unwrap();
        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].kind, "Sports");
        let questions = get_all_questions(&pool).await.unwrap();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].id, 40);
    }

    #[tokio::test]
    async fn invalid_file_leaves_store_untouched() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CATEGORIES_FILE), "id,type\n1,Science\n").unwrap();
        std::fs::write(
            dir.path().join(QUESTIONS_FILE),
            "id,question,answer,category,difficulty\n1,,Nothing,1,1\n",
        )
        .unwrap();

        let pool = seeded_pool().await;
        assert!(import_data(&pool, dir.path()).await.is_err());
        assert_eq!(get_all_questions(&pool).await.unwrap().len(), 12);
    }

    #[tokio::test]
    async fn blank_category_type_leaves_store_untouched() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CATEGORIES_FILE), "id,type\n1,\n").unwrap();
        std::fs::write(
            dir.path().join(QUESTIONS_FILE),
            "id,question,answer,category,difficulty\n1,Why?,Because,1,1\n",
        )
        .unwrap();

        let pool = seeded_pool().await;
        assert!(matches!(
            import_data(&pool, dir.path()).await,
            Err(TransferError::Store(crate::db::StoreError::Validation(_)))
        ));
        let categories = get_all_categories(&pool).await.unwrap();
        assert_eq!(categories.len(), 3);
        assert_eq!(categories[0].kind, "Science");
        assert_eq!(get_all_questions(&pool).await.unwrap().len(), 12);
    }
}
