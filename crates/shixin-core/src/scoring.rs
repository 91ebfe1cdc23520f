//! Pure reduction of answers into per-category totals.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::question::{LikertScore, Question};
use crate::quiz::AnswerSet;

/// Per-category point totals for one quiz run.
///
/// Every category is always present, zero-filled ones included, so
/// consumers never have to treat a missing key as zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScoreTable(BTreeMap<Category, u32>);

impl ScoreTable {
    /// A table with every category at zero.
    pub fn new() -> Self {
        let mut totals = BTreeMap::new();
        for category in Category::ALL {
            totals.insert(category, 0);
        }
        Self(totals)
    }

    /// Add points to a category's total.
    pub fn add(&mut self, category: Category, points: u32) {
        *self.0.entry(category).or_insert(0) += points;
    }

    /// The total for one category.
    pub fn get(&self, category: Category) -> u32 {
        self.0.get(&category).copied().unwrap_or(0)
    }

    /// Sum of all category totals.
    pub fn total(&self) -> u32 {
        self.0.values().sum()
    }

    /// Totals in canonical category order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, u32)> + '_ {
        Category::ALL.into_iter().map(|c| (c, self.get(c)))
    }

    /// The category with the strictly highest total.
    ///
    /// Ties resolve to whichever tied category comes first in canonical
    /// order, so an all-zero table yields [`Category::Appearance`].
    pub fn dominant(&self) -> Category {
        let mut best = Category::ALL[0];
        for category in Category::ALL {
            if self.get(category) > self.get(best) {
                best = category;
            }
        }
        best
    }
}

impl Default for ScoreTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Reduce an answer set to per-category totals.
///
/// # Panics
///
/// Panics if an answer references a question id absent from
/// `questions`. Such an answer can only come from corrupted state or a
/// caller bug, and folding it into an arbitrary category would produce
/// a quietly wrong result.
pub fn score_answers(questions: &[Question], answers: &AnswerSet) -> ScoreTable {
    let mut table = ScoreTable::new();
    for (question_id, score) in answers {
        let question = questions
            .iter()
            .find(|q| q.id == *question_id)
            .unwrap_or_else(|| panic!("answer references unknown question id {question_id}"));
        table.add(question.category, score.points());
    }
    table
}

/// The highest total a run over `question_count` questions can reach.
pub fn max_score(question_count: usize) -> u32 {
    question_count as u32 * LikertScore::Always.points()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::question::default_questions;
    use proptest::prelude::*;

    fn answer_all(scores: &[LikertScore]) -> (Vec<Question>, AnswerSet) {
        let questions = default_questions();
        let answers: AnswerSet = questions
            .iter()
            .zip(scores.iter().cycle())
            .map(|(q, s)| (q.id, *s))
            .collect();
        (questions, answers)
    }

    #[test]
    fn empty_answers_score_zero_everywhere() {
        let table = score_answers(&default_questions(), &AnswerSet::new());
        for category in Category::ALL {
            assert_eq!(table.get(category), 0);
        }
        assert_eq!(table.total(), 0);
    }

    #[test]
    fn uniform_answers_split_evenly() {
        let (questions, answers) = answer_all(&[LikertScore::Sometimes]);
        let table = score_answers(&questions, &answers);
        for category in Category::ALL {
            assert_eq!(table.get(category), 15, "5 questions at 3 points each");
        }
        assert_eq!(table.total(), 60);
    }

    #[test]
    fn dominant_picks_the_strict_maximum() {
        let questions = default_questions();
        let mut answers = AnswerSet::new();
        for question in &questions {
            let score = if question.category == Category::Phone {
                LikertScore::Always
            } else {
                LikertScore::AlmostNever
            };
            answers.insert(question.id, score);
        }
        let table = score_answers(&questions, &answers);
        assert_eq!(table.dominant(), Category::Phone);
    }

    #[test]
    fn ties_resolve_to_canonical_order() {
        let table = ScoreTable::new();
        assert_eq!(table.dominant(), Category::Appearance);

        let mut table = ScoreTable::new();
        table.add(Category::Perfectionist, 10);
        table.add(Category::Phone, 10);
        assert_eq!(
            table.dominant(),
            Category::Phone,
            "Phone precedes Perfectionist in canonical order"
        );
    }

    #[test]
    #[should_panic(expected = "unknown question id 99")]
    fn unknown_question_id_panics() {
        let questions = default_questions();
        let mut answers = AnswerSet::new();
        answers.insert(99, LikertScore::Often);
        score_answers(&questions, &answers);
    }

    #[test]
    fn partial_answers_score_only_their_category() {
        let questions = default_questions();
        let answers: AnswerSet = questions
            .iter()
            .filter(|q| q.category == Category::Perfectionist)
            .map(|q| (q.id, LikertScore::Always))
            .collect();

        let table = score_answers(&questions, &answers);
        assert_eq!(table.get(Category::Perfectionist), 25);
        assert_eq!(table.get(Category::Appearance), 0);
        assert_eq!(table.get(Category::Phone), 0);
        assert_eq!(table.get(Category::PeoplePleaser), 0);
        assert_eq!(table.dominant(), Category::Perfectionist);
    }

    #[test]
    fn scoring_is_idempotent() {
        let (questions, answers) = answer_all(&[
            LikertScore::Often,
            LikertScore::AlmostNever,
            LikertScore::Always,
        ]);
        let first = score_answers(&questions, &answers);
        let second = score_answers(&questions, &answers);
        assert_eq!(first, second);
        assert_eq!(first.dominant(), second.dominant());
    }

    #[test]
    fn max_score_covers_the_full_bank() {
        assert_eq!(max_score(20), 100);
        assert_eq!(max_score(5), 25);
        assert_eq!(max_score(0), 0);
    }

    #[test]
    fn iter_walks_canonical_order() {
        let mut table = ScoreTable::new();
        table.add(Category::PeoplePleaser, 7);
        let pairs: Vec<(Category, u32)> = table.iter().collect();
        assert_eq!(
            pairs,
            vec![
                (Category::Appearance, 0),
                (Category::Phone, 0),
                (Category::PeoplePleaser, 7),
                (Category::Perfectionist, 0),
            ]
        );
    }

    #[test]
    fn serializes_as_a_plain_map() {
        let mut table = ScoreTable::new();
        table.add(Category::Appearance, 12);
        let json = serde_json::to_value(&table).unwrap();
        assert_eq!(json["Appearance"], 12);
        assert_eq!(json["Phone"], 0);
    }

    proptest! {
        #[test]
        fn totals_are_conserved(raw in proptest::collection::vec(1u8..=5, 20)) {
            let questions = default_questions();
            let answers: AnswerSet = questions
                .iter()
                .zip(raw.iter())
                .map(|(q, r)| (q.id, LikertScore::try_from(*r).unwrap()))
                .collect();
            let table = score_answers(&questions, &answers);

            let expected: u32 = raw.iter().map(|r| *r as u32).sum();
            prop_assert_eq!(table.total(), expected);
            prop_assert!(table.total() <= max_score(questions.len()));
        }

        #[test]
        fn dominant_is_the_first_maximum(raw in proptest::collection::vec(1u8..=5, 20)) {
            let questions = default_questions();
            let answers: AnswerSet = questions
                .iter()
                .zip(raw.iter())
                .map(|(q, r)| (q.id, LikertScore::try_from(*r).unwrap()))
                .collect();
            let table = score_answers(&questions, &answers);

            let dominant = table.dominant();
            let top = Category::ALL.iter().map(|c| table.get(*c)).max().unwrap();
            prop_assert_eq!(table.get(dominant), top);
            for category in Category::ALL {
                if category == dominant {
                    break;
                }
                prop_assert!(table.get(category) < top, "earlier category ties must win");
            }
        }
    }
}
