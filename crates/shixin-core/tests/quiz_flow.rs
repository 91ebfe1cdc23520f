//! Integration tests for the full quiz flow: collect, score, resolve.

use shixin_core::{AdviceResolver, Category, LikertScore, QuizSession};

#[tokio::test]
async fn completed_run_always_yields_counsel() {
    let mut session = QuizSession::new();
    while let Some(question) = session.current_question().cloned() {
        let score = if question.category == Category::Phone {
            LikertScore::Always
        } else {
            LikertScore::Occasionally
        };
        session.record_answer(question.id, score).unwrap();
    }
    assert!(session.is_complete());

    let scores = session.score();
    let dominant = scores.dominant();
    let result = AdviceResolver::offline().resolve(scores, dominant).await;
    assert_eq!(result.dominant_category, Category::Phone);
    assert!(!result.advice.is_empty());
    assert_eq!(result.action_items.len(), 3);
    assert_eq!(result.scores.get(Category::Phone), 25);
    assert_eq!(result.scores.total(), 55, "5x5 for Phone plus 15x2 elsewhere");
}

#[test]
fn revising_an_answer_overwrites_rather_than_appends() {
    let mut session = QuizSession::new();
    session.record_answer(1, LikertScore::Always).unwrap();
    session.go_back().unwrap();
    session.record_answer(1, LikertScore::AlmostNever).unwrap();

    while let Some(question) = session.current_question().cloned() {
        session
            .record_answer(question.id, LikertScore::AlmostNever)
            .unwrap();
    }

    assert_eq!(session.answers().len(), 20);
    let scores = session.score();
    assert_eq!(scores.get(Category::Appearance), 5);
    assert_eq!(scores.total(), 20);
}

#[test]
fn uniform_answers_tie_break_to_the_first_category() {
    let mut session = QuizSession::new();
    while let Some(question) = session.current_question().cloned() {
        session
            .record_answer(question.id, LikertScore::Sometimes)
            .unwrap();
    }

    let scores = session.score();
    for category in Category::ALL {
        assert_eq!(scores.get(category), 15);
    }
    assert_eq!(scores.dominant(), Category::Appearance);
}

#[test]
fn frozen_sessions_reject_further_input() {
    let mut session = QuizSession::new();
    while let Some(question) = session.current_question().cloned() {
        session.record_answer(question.id, LikertScore::Often).unwrap();
    }

    assert!(session.record_answer(20, LikertScore::Often).is_err());
    assert!(session.go_back().is_err());

    session.restart();
    assert!(!session.is_complete());
    assert!(session.record_answer(1, LikertScore::Often).is_ok());
}

#[test]
fn progress_reports_the_walk_through_the_bank() {
    let mut session = QuizSession::new();
    assert_eq!(session.progress().total_questions, 20);

    for expected_answered in 1..=10u32 {
        let question = session.current_question().cloned().unwrap();
        session
            .record_answer(question.id, LikertScore::Sometimes)
            .unwrap();
        assert_eq!(
            session.progress().answered_questions,
            expected_answered as usize
        );
    }
    assert_eq!(session.progress().current_index, 10);
    assert!(!session.progress().is_complete);
}
