use std::collections::HashSet;

use rand::seq::IteratorRandom;
use rand::Rng;
use sqlx::SqlitePool;

use crate::db::queries::questions::{get_all_questions, get_questions_for_category};
use crate::db::{Question, StoreResult};

/// Which questions a quiz draws from. On the wire, category id `0` means all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizCategory {
    All,
    Category(i64),
}

impl From<i64> for QuizCategory {
    fn from(id: i64) -> Self {
        match id {
            0 => QuizCategory::All,
            id => QuizCategory::Category(id),
        }
    }
}

impl QuizCategory {
    pub fn label(&self) -> String {
        match self {
            QuizCategory::All => "all".to_owned(),
            QuizCategory::Category(id) => id.to_string(),
        }
    }
}

/// Picks one candidate uniformly at random among those whose id is not in
/// `previous`. `None` means the quiz is exhausted.
pub fn pick_question<R: Rng + ?Sized>(
    candidates: Vec<Question>,
    previous: &HashSet<i64>,
    rng: &mut R,
) -> Option<Question> {
    candidates
        .into_iter()
        .filter(|q| !previous.contains(&q.id))
        .choose(rng)
}

/// Draws the next quiz question. Holds no state between calls; the caller owns
/// the set of questions already asked.
#[tracing::instrument(skip(pool, previous), fields(asked = previous.len()))]
pub async fn next_question(
    pool: &SqlitePool,
    category: QuizCategory,
    previous: &HashSet<i64>,
) -> StoreResult<Option<Question>> {
    let candidates = match category {
        QuizCategory::All => get_all_questions(pool).await?,
        QuizCategory::Category(id) => get_questions_for_category(pool, id).await?,
    };
    let picked = pick_question(candidates, previous, &mut rand::thread_rng());
    if picked.is_none() {
        tracing::debug!("No questions left");
    }
    Ok(picked)
}
