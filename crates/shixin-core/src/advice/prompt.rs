//! Prompt construction for the remote consultation.

use std::fmt::Write;

use crate::category::Category;
use crate::scoring::ScoreTable;

/// Build the consultation prompt sent to the model.
///
/// Everything the model needs rides in the prompt text itself, so the
/// request carries no separate system instruction.
pub fn build_consultation_prompt(scores: &ScoreTable, dominant: Category) -> String {
    let doll = dominant.doll();
    let score_json = serde_json::to_string(scores).unwrap_or_else(|_| "{}".to_string());

    let mut struggles = String::new();
    for (index, category) in Category::ALL.iter().enumerate() {
        let _ = writeln!(struggles, "{}. {}: {}", index + 1, category, category.label());
    }

    format!(
        "You are the lead counselor at Shixin, a quiet clinic for everyday \
         obsessions. A visitor has just finished the intake questionnaire.\n\n\
         The questionnaire measures four struggles:\n{struggles}\n\
         The visitor's scores, higher meaning the struggle runs deeper:\n\
         {score_json}\n\n\
         Their dominant struggle is {dominant}, embodied in the clinic by \
         {doll_name}: {doll_description}\n\n\
         Write the visitor a short consultation. Speak directly to them, warm \
         and plain, never clinical. Name the pattern you see without judging \
         it, and offer perspective they can keep rather than a lecture.\n\n\
         Respond with JSON only, no surrounding prose:\n\
         {{\n  \"advice\": \"150 to 200 words of counsel\",\n  \"actionItems\": [\"three concrete steps, each under 20 words\"]\n}}",
        doll_name = doll.name,
        doll_description = doll.description,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_carries_scores_and_persona() {
        let mut scores = ScoreTable::new();
        scores.add(Category::Phone, 21);
        let prompt = build_consultation_prompt(&scores, Category::Phone);

        assert!(prompt.contains("\"Phone\":21"));
        assert!(prompt.contains("The Signal Doll"));
        assert!(prompt.contains("phone addiction"));
        assert!(prompt.contains("actionItems"));
    }

    #[test]
    fn prompt_lists_every_struggle() {
        let prompt = build_consultation_prompt(&ScoreTable::new(), Category::Appearance);
        for category in Category::ALL {
            assert!(prompt.contains(category.label()));
        }
    }
}
