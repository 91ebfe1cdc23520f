//! Deterministic counsel used whenever remote consultation is unavailable.

use crate::category::Category;

/// Pre-written counsel for one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FallbackAdvice {
    pub advice: &'static str,
    pub action_items: [&'static str; 3],
}

/// The bundled counsel for a category.
pub fn fallback_for(category: Category) -> FallbackAdvice {
    match category {
        Category::Appearance => FallbackAdvice {
            advice: "The mirror only ever shows you a surface, and you have been \
                grading yourself against it as if it were the whole story. Most \
                people are far too busy worrying about their own reflection to \
                audit yours. Try treating your body as something you live in \
                rather than something you present. Attention spent on being seen \
                is attention taken away from seeing, and the hours you win back \
                will do more for how you carry yourself than any flawless angle \
                ever could.",
            action_items: [
                "Go one full day without checking your reflection outside of grooming.",
                "Unfollow three accounts that leave you feeling worse about your body.",
                "Write down two things your body did for you today that had nothing to do with looks.",
            ],
        },
        Category::Phone => FallbackAdvice {
            advice: "Your attention is the most honest record of what your life \
                is about, and right now a device is writing large parts of that \
                record for you. The feed is engineered to feel urgent and almost \
                none of it is. Start by reclaiming one small stretch of the day. \
                It will feel itchy at first, then quiet, and the quiet is where \
                your own thoughts get room to finish themselves. You do not have \
                to give the phone up. You only have to stop letting it go first.",
            action_items: [
                "Charge your phone outside the bedroom tonight.",
                "Turn off every notification that is not a person contacting you directly.",
                "Pick one daily meal to eat with the phone in another room.",
            ],
        },
        Category::PeoplePleaser => FallbackAdvice {
            advice: "Being easy to be around has a cost when it means being \
                absent from your own decisions. The people worth keeping will \
                adjust to an honest no. The discomfort of disappointing someone \
                passes in minutes, while the resentment of abandoning yourself \
                compounds for years. Start small. Let one true preference be \
                spoken out loud this week and notice that the room does not \
                collapse. Kindness that costs you yourself was never kindness, \
                it was fear wearing a friendly face.",
            action_items: [
                "Say no to one small request this week without giving a reason.",
                "Pause before agreeing to anything and ask whether you actually want to.",
                "Tell one trusted person an opinion you would normally keep quiet.",
            ],
        },
        Category::Perfectionist => FallbackAdvice {
            advice: "A standard that can never be met is not a standard, it is a \
                punishment on a timer. Finished work that exists will teach you \
                more than flawless work that never ships, and the flaws you \
                fixate on are mostly invisible to everyone else. Try letting one \
                thing go out at merely good this week and watch how little the \
                world minds. Your worth was never the polish. It was the fact \
                that you kept making things at all.",
            action_items: [
                "Ship one piece of work this week the moment it is good enough.",
                "Set a timer for a task and stop when it rings, rough edges and all.",
                "Keep a list of finished things and reread it when the flaws start shouting.",
            ],
        },
    }
}
