use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::db::{StoreError, StoreResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Category {
    pub id: i64,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: String,
}

#[tracing::instrument(skip(pool))]
pub async fn get_all_categories(pool: &SqlitePool) -> StoreResult<Vec<Category>> {
    let categories = sqlx::query_as::<_, Category>(
        r#"
SELECT id, type
FROM categories
ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .await?;
    Ok(categories)
}

#[tracing::instrument(skip(pool))]
pub async fn get_category(pool: &SqlitePool, id: i64) -> StoreResult<Category> {
    sqlx::query_as::<_, Category>(
        r#"
SELECT id, type
FROM categories
WHERE categories.id = ?1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or(StoreError::NotFound {
        entity: "category",
        id,
    })
}

pub fn validate_category_type(kind: &str) -> StoreResult<()> {
    if kind.trim().is_empty() {
        return Err(StoreError::Validation(
            "category type must not be empty".to_owned(),
        ));
    }
    Ok(())
}

pub async fn create_category(pool: &SqlitePool, kind: &str) -> StoreResult<i64> {
    validate_category_type(kind)?;
    let mut conn = pool.acquire().await?;

    let id = sqlx::query(
        r#"
INSERT INTO categories (type) VALUES (?1)
        "#,
    )
    .bind(kind)
    .execute(&mut *conn)
    .await?
    .last_insert_rowid();

    tracing::debug!(id, kind, "Created category");
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_utils::{memory_pool, seeded_pool};

    #[tokio::test]
    async fn categories_are_listed_by_id() {
        let pool = seeded_pool().await;
        let categories = get_all_categories(&pool).await.unwrap();
        let ids: Vec<i64> = categories.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(categories[0].kind, "Science");
    }

    #[tokio::test]
    async fn missing_category_is_not_found() {
        let pool = seeded_pool().await;
        assert_eq!(get_category(&pool, 2).await.unwrap().kind, "Art");
        assert!(matches!(
            get_category(&pool, 42).await,
            Err(StoreError::NotFound {
                entity: "category",
                id: 42
            })
        ));
    }

    #[tokio::test]
    async fn empty_store_has_no_categories() {
        let pool = memory_pool().await;
        assert!(get_all_categories(&pool).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn blank_category_type_is_rejected() {
        let pool = memory_pool().await;
        assert!(matches!(
            create_category(&pool, "  ").await,
            Err(StoreError::Validation(_))
        ));
    }

    #[test]
    fn category_serializes_with_type_key() {
        let category = Category {
            id: 3,
            kind: "History".to_owned(),
        };
        assert_eq!(
            serde_json::to_value(&category).unwrap(),
            serde_json::json!({"id": 3, "type": "History"})
        );
    }
}
