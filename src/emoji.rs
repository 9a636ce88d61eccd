//! # Emoji Matching
//!
//! Picks a decorative emoji for a task or list name.
//!
//! ## Matching
//! - Case-fold the label (upper then lower, so "ﬁ" and "ı" fold like their capitals).
//!   Whitespace and punctuation stay.
//! - Walk [`KEYWORDS`] in order, then each entry's keywords in order.
//! - First keyword found as a **substring** wins. No scoring.
//! - Nothing found means the category fallback: 📋 for lists, 📌 for tasks.
//!
//! Substring containment lets phrases like "hot dog" or "credit card" match as one
//! unit. It also means short keywords hit inside longer words ("cat" in "education").
//! Table order is what keeps the common cases right.
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{error::AppError, keywords::KEYWORDS};

const LIST_FALLBACK: EmojiMatch = EmojiMatch {
    emoji: "📋",
    animation: AnimationTag::None,
};

const TASK_FALLBACK: EmojiMatch = EmojiMatch {
    emoji: "📌",
    animation: AnimationTag::None,
};

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum AnimationTag {
    Bounce,
    Wiggle,
    Pulse,
    Spin,
    Wave,
    None,
}

/// Where a label is rendered. Only decides the fallback glyph.
#[derive(Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(try_from = "String")]
pub enum Category {
    List,
    #[default]
    Task,
}

impl Category {
    pub fn fallback(self) -> EmojiMatch {
        match self {
            Category::List => LIST_FALLBACK,
            Category::Task => TASK_FALLBACK,
        }
    }
}

impl FromStr for Category {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "list" => Ok(Category::List),
            "task" => Ok(Category::Task),
            _ => Err(AppError::UnknownCategory(s.to_string())),
        }
    }
}

impl TryFrom<String> for Category {
    type Error = AppError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        raw.parse()
    }
}

pub struct KeywordEntry {
    pub emoji: &'static str,
    /// Lower-case, checked in order.
    pub keywords: &'static [&'static str],
    pub animation: AnimationTag,
}

impl KeywordEntry {
    fn hit(&self, normalized: &str) -> bool {
        self.keywords
            .iter()
            .any(|keyword| normalized.contains(keyword))
    }

    fn to_match(&self) -> EmojiMatch {
        EmojiMatch {
            emoji: self.emoji,
            animation: self.animation,
        }
    }
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmojiMatch {
    pub emoji: &'static str,
    pub animation: AnimationTag,
}

impl EmojiMatch {
    pub fn is_fallback(&self) -> bool {
        self.animation == AnimationTag::None
    }
}

pub fn match_emoji(text: &str, category: Category) -> EmojiMatch {
    let normalized = text.to_uppercase().to_lowercase();

    KEYWORDS
        .iter()
        .find(|entry| entry.hit(&normalized))
        .map(KeywordEntry::to_match)
        .unwrap_or_else(|| category.fallback())
}

/// [`match_emoji`] for task labels, the common call site.
pub fn match_task_emoji(text: &str) -> EmojiMatch {
    match_emoji(text, Category::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matched(emoji: &'static str, animation: AnimationTag) -> EmojiMatch {
        EmojiMatch { emoji, animation }
    }

    #[test]
    fn matches_single_keywords() {
        assert_eq!(match_task_emoji("pizza"), matched("🍕", AnimationTag::Wiggle));
        assert_eq!(match_task_emoji("Buy groceries"), matched("🛒", AnimationTag::Bounce));
        assert_eq!(match_task_emoji("Write tests"), matched("📝", AnimationTag::Wave));
        assert_eq!(match_task_emoji("practice guitar lessons").emoji, "🎸");
        assert_eq!(match_task_emoji("go to the gym").emoji, "🏋️");
    }

    #[test]
    fn falls_back_per_category() {
        assert_eq!(match_emoji("xyzzy qqq", Category::List), matched("📋", AnimationTag::None));
        assert_eq!(match_emoji("xyzzy qqq", Category::Task), matched("📌", AnimationTag::None));
        assert_eq!(match_task_emoji("xyzzy qqq"), matched("📌", AnimationTag::None));
    }

    #[test]
    fn handles_degenerate_input() {
        assert_eq!(match_task_emoji(""), TASK_FALLBACK);
        assert_eq!(match_emoji("", Category::List), LIST_FALLBACK);
        assert_eq!(match_task_emoji("   \t\n"), TASK_FALLBACK);
        assert_eq!(match_task_emoji("!!! ??? 123"), TASK_FALLBACK);
        assert_eq!(match_emoji("🍕🍕🍕", Category::List), LIST_FALLBACK);
    }

    #[test]
    fn ignores_case() {
        for label in ["pizza", "Buy groceries", "Write tests", "team meeting", "xyzzy"] {
            assert_eq!(match_task_emoji(label), match_task_emoji(&label.to_uppercase()));
        }
        assert_eq!(match_task_emoji("PiZzA").emoji, "🍕");
    }

    #[test]
    fn folds_non_ascii_case() {
        for label in ["ﬁsh tank", "ﬂight home", "pızza", "Straße"] {
            assert_eq!(match_task_emoji(label), match_task_emoji(&label.to_uppercase()));
        }
        assert_eq!(match_task_emoji("ﬁsh tank").emoji, "🐟");
        assert_eq!(match_task_emoji("ﬂight home").emoji, "✈️");
        assert_eq!(match_task_emoji("pızza"), matched("🍕", AnimationTag::Wiggle));
    }

    #[test]
    fn matches_phrases_inside_sentences() {
        assert_eq!(match_task_emoji("I need a hot dog"), matched("🌭", AnimationTag::Wiggle));
        assert_eq!(match_task_emoji("buy ice cream today").emoji, "🍦");
        assert_eq!(match_task_emoji("Pay credit card").emoji, "💳");
        assert_eq!(match_task_emoji("  pizza  "), match_task_emoji("pizza"));
    }

    #[test]
    fn table_order_beats_input_order() {
        // "dog" and "plan" appear first in the input but belong to later entries.
        assert_eq!(match_task_emoji("Walk the dog then grab a hot dog").emoji, "🌭");
        assert_eq!(match_task_emoji("Plan trip").emoji, "✈️");
        assert_eq!(match_task_emoji("dog").emoji, "🐕");
    }

    #[test]
    fn longer_words_beat_car() {
        assert_eq!(match_task_emoji("Buy gift card").emoji, "🎁");
        assert_eq!(match_task_emoji("Self care").emoji, "🩺");
        assert_eq!(match_task_emoji("Healthcare forms").emoji, "🩺");
    }

    #[test]
    fn keeps_partial_word_hits() {
        assert_eq!(match_task_emoji("Education seminar"), matched("🐈", AnimationTag::Wave));
        assert_eq!(match_task_emoji("Oscar night").emoji, "🚗");
    }

    #[test]
    fn real_matches_are_animated() {
        for label in ["car", "dog", "pizza", "laundry", "team sync"] {
            let result = match_task_emoji(label);
            assert!(!result.is_fallback(), "{label} fell back");
        }
    }

    #[test]
    fn parses_categories() {
        assert_eq!("list".parse::<Category>().ok(), Some(Category::List));
        assert_eq!(" TASK ".parse::<Category>().ok(), Some(Category::Task));
        assert!(matches!(
            "board".parse::<Category>(),
            Err(AppError::UnknownCategory(raw)) if raw == "board"
        ));
    }

    #[test]
    fn deserializes_categories_like_query_strings() {
        let category: Category = serde_json::from_str(r#""List""#).unwrap();
        assert_eq!(category, Category::List);

        let category: Category = serde_json::from_str(r#"" task ""#).unwrap();
        assert_eq!(category, Category::Task);

        assert!(serde_json::from_str::<Category>(r#""board""#).is_err());
    }

    #[test]
    fn serializes_lowercase_tags() {
        let json = serde_json::to_value(match_task_emoji("pizza")).unwrap();
        assert_eq!(json, serde_json::json!({ "emoji": "🍕", "animation": "wiggle" }));

        let json = serde_json::to_value(TASK_FALLBACK).unwrap();
        assert_eq!(json["animation"], "none");
    }
}
