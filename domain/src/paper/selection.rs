//! Greedy question selection against a marks target.

use crate::question::entities::Question;

/// Pick questions in the given order while they fit the remaining budget.
///
/// Single first-fit pass: a candidate whose marks exceed what is left is
/// skipped and scanning continues. The result is an order-preserving
/// subsequence of `candidates` whose marks sum to at most `target_marks`.
/// Leftover budget is expected when nothing else fits.
pub fn select_questions(candidates: Vec<Question>, target_marks: f64) -> Vec<Question> {
    let mut remaining = target_marks;
    let mut selected = Vec::new();

    for candidate in candidates {
        if candidate.marks <= remaining {
            remaining -= candidate.marks;
            selected.push(candidate);
        }
    }

    selected
}

/// Total marks of a set of questions
pub fn selected_marks(questions: &[Question]) -> f64 {
    questions.iter().map(|q| q.marks).sum()
}
