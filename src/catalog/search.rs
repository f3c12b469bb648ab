use crate::db::Question;

/// Case-insensitive substring match over question text, keeping input order.
///
/// The empty term is a substring of every question and so matches all of them.
pub fn search(term: &str, questions: &[Question]) -> Vec<Question> {
    let needle = term.to_lowercase();
    questions
        .iter()
        .filter(|q| q.question.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}
