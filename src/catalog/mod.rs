//! Query and selection logic layered over the question store: paging,
//! text search and quiz draws.

pub mod pagination;
pub mod quiz;
pub mod search;

pub use pagination::{paginate, Page, QUESTIONS_PER_PAGE};
pub use quiz::{next_question, pick_question, QuizCategory};
pub use search::search;
