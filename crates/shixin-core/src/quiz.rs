//! Sequential answer collection for a quiz run.
//!
//! A [`QuizSession`] walks a fixed question list front to back. Answers
//! are keyed by question id, one step back is always available before
//! completion, and answering the final question freezes the session.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::error::QuizError;
use crate::question::{default_questions, LikertScore, Question};
use crate::scoring::{score_answers, ScoreTable};

/// Answers recorded so far, keyed by question id.
pub type AnswerSet = BTreeMap<u32, LikertScore>;

/// Progress snapshot for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuizProgress {
    pub current_index: usize,
    pub total_questions: usize,
    pub answered_questions: usize,
    pub is_complete: bool,
}

/// A single run through the question list.
#[derive(Debug, Clone, Serialize)]
pub struct QuizSession {
    id: Uuid,
    questions: Vec<Question>,
    answers: AnswerSet,
    current_index: usize,
    started_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

impl QuizSession {
    /// Start a session over the bundled question bank.
    pub fn new() -> Self {
        Self::with_questions(default_questions())
    }

    /// Start a session over a custom question list.
    pub fn with_questions(questions: Vec<Question>) -> Self {
        Self {
            id: Uuid::new_v4(),
            questions,
            answers: AnswerSet::new(),
            current_index: 0,
            started_at: Utc::now(),
            completed_at: None,
        }
    }

    // ── Queries ──

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    pub fn is_complete(&self) -> bool {
        self.completed_at.is_some()
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    /// The question awaiting an answer, or `None` once complete.
    pub fn current_question(&self) -> Option<&Question> {
        if self.is_complete() {
            None
        } else {
            self.questions.get(self.current_index)
        }
    }

    pub fn progress(&self) -> QuizProgress {
        QuizProgress {
            current_index: self.current_index,
            total_questions: self.questions.len(),
            answered_questions: self.answers.len(),
            is_complete: self.is_complete(),
        }
    }

    // ── Transitions ──

    /// Record an answer for the current question and advance.
    ///
    /// Returns the next question, or `Ok(None)` when this answer
    /// completed the quiz. The id must match the current question;
    /// answers arriving out of sequence are rejected so a stale caller
    /// cannot overwrite the wrong slot.
    pub fn record_answer(
        &mut self,
        question_id: u32,
        score: LikertScore,
    ) -> Result<Option<&Question>, QuizError> {
        if self.is_complete() {
            return Err(QuizError::AlreadyComplete(self.id.to_string()));
        }
        let question = self
            .questions
            .get(self.current_index)
            .ok_or(QuizError::InvalidIndex(self.current_index))?;
        if question.id != question_id {
            return Err(QuizError::OutOfSequence {
                expected: question.id,
                got: question_id,
            });
        }

        self.answers.insert(question_id, score);

        if self.current_index + 1 >= self.questions.len() {
            self.completed_at = Some(Utc::now());
            Ok(None)
        } else {
            self.current_index += 1;
            Ok(self.questions.get(self.current_index))
        }
    }

    /// Step back to the previous question so it can be re-answered.
    ///
    /// Returns the new index, or `Ok(None)` when already at the first
    /// question. The earlier answer stays recorded until overwritten.
    pub fn go_back(&mut self) -> Result<Option<usize>, QuizError> {
        if self.is_complete() {
            return Err(QuizError::AlreadyComplete(self.id.to_string()));
        }
        if self.current_index == 0 {
            return Ok(None);
        }
        self.current_index -= 1;
        Ok(Some(self.current_index))
    }

    /// Discard all answers and start over with a fresh session id.
    pub fn restart(&mut self) {
        self.id = Uuid::new_v4();
        self.answers.clear();
        self.current_index = 0;
        self.started_at = Utc::now();
        self.completed_at = None;
    }

    /// Reduce the recorded answers to per-category totals.
    pub fn score(&self) -> ScoreTable {
        score_answers(&self.questions, &self.answers)
    }
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new()
    }
}
