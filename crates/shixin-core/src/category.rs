//! The four struggle categories and their doll personas.
//!
//! The category set is closed and its declaration order is the canonical
//! order: iteration, display, and score tie-breaks all follow it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four modern struggles the quiz measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Appearance anxiety.
    Appearance,
    /// Phone addiction.
    Phone,
    /// The need to please.
    PeoplePleaser,
    /// Perfectionism.
    Perfectionist,
}

/// The persona a category projects in results and in the consultation
/// prompt: a wounded doll waiting to be heard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Doll {
    /// Display name.
    pub name: &'static str,
    /// One-sentence portrait.
    pub description: &'static str,
}

impl Category {
    /// All categories in canonical order.
    pub const ALL: [Category; 4] = [
        Category::Appearance,
        Category::Phone,
        Category::PeoplePleaser,
        Category::Perfectionist,
    ];

    /// Short human-readable label for the struggle itself.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Appearance => "appearance anxiety",
            Category::Phone => "phone addiction",
            Category::PeoplePleaser => "the need to please",
            Category::Perfectionist => "perfectionism",
        }
    }

    /// The doll persona for this category.
    pub fn doll(&self) -> Doll {
        match self {
            Category::Appearance => Doll {
                name: "The Mirror Doll",
                description: "A porcelain doll who lives inside the mirror, \
                     so busy checking her reflection that she has forgotten \
                     what her own face looks like.",
            },
            Category::Phone => Doll {
                name: "The Signal Doll",
                description: "A wind-up doll tangled in glowing wires, unable \
                     to rest until every blinking light has been answered.",
            },
            Category::PeoplePleaser => Doll {
                name: "The Mask Doll",
                description: "A soft cloth doll wearing a painted smile, who \
                     swapped her face for a mask so often she misplaced the \
                     original.",
            },
            Category::Perfectionist => Doll {
                name: "The Clockwork Doll",
                description: "A clockwork doll forever winding her own key, \
                     polishing gears that were never broken, chasing a finish \
                     line that keeps moving.",
            },
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Appearance => "Appearance",
            Category::Phone => "Phone",
            Category::PeoplePleaser => "PeoplePleaser",
            Category::Perfectionist => "Perfectionist",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_order_is_declaration_order() {
        assert_eq!(
            Category::ALL,
            [
                Category::Appearance,
                Category::Phone,
                Category::PeoplePleaser,
                Category::Perfectionist,
            ]
        );
        // Ord follows the same order, so sorted collections agree with ALL.
        assert!(Category::Appearance < Category::Phone);
        assert!(Category::Phone < Category::PeoplePleaser);
        assert!(Category::PeoplePleaser < Category::Perfectionist);
    }

    #[test]
    fn serde_uses_variant_names() {
        let json = serde_json::to_string(&Category::PeoplePleaser).unwrap();
        assert_eq!(json, "\"PeoplePleaser\"");
        let back: Category = serde_json::from_str("\"Perfectionist\"").unwrap();
        assert_eq!(back, Category::Perfectionist);
    }

    #[test]
    fn every_category_has_a_doll() {
        for category in Category::ALL {
            let doll = category.doll();
            assert!(!doll.name.is_empty());
            assert!(!doll.description.is_empty());
        }
        assert_eq!(Category::Appearance.doll().name, "The Mirror Doll");
        assert_eq!(Category::Perfectionist.doll().name, "The Clockwork Doll");
    }

    #[test]
    fn display_matches_serde_name() {
        for category in Category::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{category}\""));
        }
    }
}
