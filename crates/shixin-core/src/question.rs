//! The bundled question bank and the Likert answer scale.
//!
//! Twenty questions, five per category, interleaved so no two adjacent
//! questions probe the same struggle. Each is answered on a five-point
//! frequency scale; raw integers are validated at the boundary and
//! out-of-range values are unrepresentable past it.

use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::error::QuizError;

/// A question in the quiz.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Unique identifier, 1-based and sequential in the default bank.
    pub id: u32,
    /// Question text.
    pub text: String,
    /// The struggle this question measures.
    pub category: Category,
}

/// One answer on the five-point frequency scale.
///
/// Serializes as its integer value (1-5), matching how answers travel
/// through answer sets and score reductions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum LikertScore {
    AlmostNever = 1,
    Occasionally = 2,
    Sometimes = 3,
    Often = 4,
    Always = 5,
}

impl LikertScore {
    /// All scores from lightest to heaviest.
    pub const ALL: [LikertScore; 5] = [
        LikertScore::AlmostNever,
        LikertScore::Occasionally,
        LikertScore::Sometimes,
        LikertScore::Often,
        LikertScore::Always,
    ];

    /// Points contributed to the owning category's total.
    pub fn points(&self) -> u32 {
        *self as u32
    }

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            LikertScore::AlmostNever => "almost never",
            LikertScore::Occasionally => "occasionally",
            LikertScore::Sometimes => "sometimes",
            LikertScore::Often => "often",
            LikertScore::Always => "always",
        }
    }
}

impl TryFrom<u8> for LikertScore {
    type Error = QuizError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(LikertScore::AlmostNever),
            2 => Ok(LikertScore::Occasionally),
            3 => Ok(LikertScore::Sometimes),
            4 => Ok(LikertScore::Often),
            5 => Ok(LikertScore::Always),
            other => Err(QuizError::InvalidScore(other)),
        }
    }
}

impl Serialize for LikertScore {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u8(*self as u8)
    }
}

impl<'de> Deserialize<'de> for LikertScore {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = u8::deserialize(deserializer)?;
        LikertScore::try_from(raw).map_err(serde::de::Error::custom)
    }
}

/// The bundled twenty-question bank.
pub fn default_questions() -> Vec<Question> {
    let bank: [(&str, Category); 20] = [
        (
            "I avoid mirrors, shop windows, or photos that might catch me at a bad angle.",
            Category::Appearance,
        ),
        (
            "I reach for my phone within minutes of waking up.",
            Category::Phone,
        ),
        (
            "I say yes to requests even when I am already running on empty.",
            Category::PeoplePleaser,
        ),
        (
            "I keep polishing work that everyone else already called finished.",
            Category::Perfectionist,
        ),
        (
            "I compare my face or body with the people I scroll past online.",
            Category::Appearance,
        ),
        (
            "I feel a phantom buzz and check my phone even though nothing arrived.",
            Category::Phone,
        ),
        (
            "I replay conversations at night, worrying that I upset someone.",
            Category::PeoplePleaser,
        ),
        (
            "I put off starting things until the conditions feel exactly right.",
            Category::Perfectionist,
        ),
        (
            "I retake a photo over and over before I let anyone else see it.",
            Category::Appearance,
        ),
        (
            "I open an app for one small thing and surface much later, unsure where the time went.",
            Category::Phone,
        ),
        (
            "I swallow my real opinion to keep the mood in the room pleasant.",
            Category::PeoplePleaser,
        ),
        (
            "Small mistakes stay with me long after everyone else has forgotten them.",
            Category::Perfectionist,
        ),
        (
            "I assume people are quietly judging the way I look.",
            Category::Appearance,
        ),
        (
            "I get restless when my phone is in another room or the battery is dying.",
            Category::Phone,
        ),
        (
            "I catch myself apologizing for things that were never my fault.",
            Category::PeoplePleaser,
        ),
        (
            "I hold myself to standards I would never impose on a friend.",
            Category::Perfectionist,
        ),
        (
            "A bad hair day or a new blemish can sink my mood for hours.",
            Category::Appearance,
        ),
        (
            "I check notifications mid-conversation, even with people I care about.",
            Category::Phone,
        ),
        (
            "I feel responsible for other people's moods.",
            Category::PeoplePleaser,
        ),
        (
            "Finishing something feels flat because I only see the flaws.",
            Category::Perfectionist,
        ),
    ];

    bank.iter()
        .enumerate()
        .map(|(index, (text, category))| Question {
            id: index as u32 + 1,
            text: (*text).to_string(),
            category: *category,
        })
        .collect()
}
