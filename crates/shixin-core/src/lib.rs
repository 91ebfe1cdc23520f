//! # Shixin Core Library
//!
//! This library provides the core logic for Shixin, a small clinic for
//! everyday obsessions: a twenty-question quiz that measures four
//! modern struggles and answers with a personal consultation. All
//! operations are available through a standalone CLI binary built on
//! top of this crate.
//!
//! ## Architecture
//!
//! - **Quiz**: A sequential answer collector over a fixed question
//!   bank, with one step back always available before completion
//! - **Scoring**: A pure reduction of answers into per-category totals
//!   with a canonical tie-break
//! - **Advice**: A resolver that races a remote Gemini consultation
//!   against bundled counsel and always has an answer ready
//! - **Storage**: TOML-based configuration and OS-keyring credentials
//!
//! ## Key Components
//!
//! - [`QuizSession`]: The answer collector state machine
//! - [`ScoreTable`]: Per-category totals and the dominant struggle
//! - [`AdviceResolver`]: Consultation with a deterministic floor
//! - [`Config`]: Application configuration management

pub mod advice;
pub mod category;
pub mod config;
pub mod error;
pub mod question;
pub mod quiz;
pub mod scoring;

pub use advice::{AdviceResolver, AdviceResult, GeminiClient};
pub use category::{Category, Doll};
pub use config::Config;
pub use error::{AdviceError, ConfigError, CoreError, QuizError};
pub use question::{default_questions, LikertScore, Question};
pub use quiz::{AnswerSet, QuizProgress, QuizSession};
pub use scoring::{max_score, score_answers, ScoreTable};
