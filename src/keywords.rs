//! # Keyword Table
//!
//! Ordered emoji entries. Position is priority: an earlier entry beats a later one
//! whenever both have a keyword inside the same label.
//!
//! ## Ordering Notes
//! - Phrases before the single words they contain ("hot dog" before "dog").
//! - Words before the short keywords hidden inside them ("credit card", "carrot",
//!   "birthday", "gift" and "health" before "car"; "workout" and "homework" before "work").
//! - Keywords must be lower-case since only the label gets lower-cased.
use crate::emoji::{
    AnimationTag::{Bounce, Pulse, Spin, Wave, Wiggle},
    KeywordEntry,
};

pub static KEYWORDS: &[KeywordEntry] = &[
    KeywordEntry {
        emoji: "🌭",
        keywords: &["hot dog", "hotdog", "sausage"],
        animation: Wiggle,
    },
    KeywordEntry {
        emoji: "🍦",
        keywords: &["ice cream", "gelato", "sundae", "frozen yogurt"],
        animation: Wiggle,
    },
    KeywordEntry {
        emoji: "🍕",
        keywords: &["pizza"],
        animation: Wiggle,
    },
    KeywordEntry {
        emoji: "🍔",
        keywords: &["burger", "fries"],
        animation: Wiggle,
    },
    KeywordEntry {
        emoji: "🌮",
        keywords: &["taco", "burrito", "nachos"],
        animation: Wiggle,
    },
    KeywordEntry {
        emoji: "🍣",
        keywords: &["sushi", "ramen"],
        animation: Wiggle,
    },
    KeywordEntry {
        emoji: "🍝",
        keywords: &["pasta", "spaghetti", "noodle", "lasagna"],
        animation: Wiggle,
    },
    KeywordEntry {
        emoji: "🥞",
        keywords: &["pancake", "waffle", "breakfast", "brunch"],
        animation: Wiggle,
    },
    KeywordEntry {
        emoji: "🍪",
        keywords: &["cookie", "biscuit", "bake"],
        animation: Wiggle,
    },
    KeywordEntry {
        emoji: "🍳",
        keywords: &["cook", "recipe", "dinner", "lunch", "meal prep"],
        animation: Wiggle,
    },
    KeywordEntry {
        emoji: "☕",
        keywords: &["coffee", "espresso", "latte", "cappuccino"],
        animation: Wiggle,
    },
    KeywordEntry {
        emoji: "🥗",
        keywords: &["salad", "vegetable", "veggie"],
        animation: Wiggle,
    },
    KeywordEntry {
        emoji: "🥕",
        keywords: &["carrot"],
        animation: Wiggle,
    },
    KeywordEntry {
        emoji: "🍎",
        keywords: &["apple", "fruit"],
        animation: Wiggle,
    },
    KeywordEntry {
        emoji: "🍞",
        keywords: &["bread", "bagel", "toast"],
        animation: Wiggle,
    },
    KeywordEntry {
        emoji: "🍷",
        keywords: &["wine"],
        animation: Wiggle,
    },
    KeywordEntry {
        emoji: "🍺",
        keywords: &["beer", "brewery"],
        animation: Wiggle,
    },
    KeywordEntry {
        emoji: "🛒",
        keywords: &["grocery", "groceries", "supermarket", "shopping", "buy milk"],
        animation: Bounce,
    },
    KeywordEntry {
        emoji: "💳",
        keywords: &["credit card", "bill", "payment", "invoice"],
        animation: Pulse,
    },
    KeywordEntry {
        emoji: "💰",
        keywords: &["budget", "money", "salary", "savings", "taxes"],
        animation: Pulse,
    },
    KeywordEntry {
        emoji: "🏦",
        keywords: &["bank", "deposit"],
        animation: Pulse,
    },
    KeywordEntry {
        emoji: "📝",
        keywords: &["write", "note", "essay", "draft", "journal"],
        animation: Wave,
    },
    KeywordEntry {
        emoji: "📊",
        keywords: &["presentation", "slides", "report", "spreadsheet"],
        animation: Wiggle,
    },
    KeywordEntry {
        emoji: "📚",
        keywords: &["study", "homework", "book", "read", "library", "exam"],
        animation: Wave,
    },
    KeywordEntry {
        emoji: "🧪",
        keywords: &["test", "experiment", "science"],
        animation: Pulse,
    },
    KeywordEntry {
        emoji: "📅",
        keywords: &["meeting", "appointment", "schedule", "calendar", "deadline"],
        animation: Pulse,
    },
    KeywordEntry {
        emoji: "📧",
        keywords: &["email", "inbox", "reply"],
        animation: Bounce,
    },
    KeywordEntry {
        emoji: "📞",
        keywords: &["call", "phone"],
        animation: Wiggle,
    },
    KeywordEntry {
        emoji: "💻",
        keywords: &["code", "coding", "laptop", "computer", "deploy", "debug"],
        animation: Wiggle,
    },
    KeywordEntry {
        emoji: "🧘",
        keywords: &["yoga", "meditate", "meditation"],
        animation: Pulse,
    },
    KeywordEntry {
        emoji: "🏋️",
        keywords: &["gym", "workout", "exercise", "weights"],
        animation: Bounce,
    },
    KeywordEntry {
        emoji: "🏃",
        keywords: &["run", "jog", "marathon"],
        animation: Bounce,
    },
    KeywordEntry {
        emoji: "⚽",
        keywords: &["soccer", "football"],
        animation: Bounce,
    },
    KeywordEntry {
        emoji: "🏀",
        keywords: &["basketball"],
        animation: Bounce,
    },
    KeywordEntry {
        emoji: "🎸",
        keywords: &["guitar"],
        animation: Bounce,
    },
    KeywordEntry {
        emoji: "🎹",
        keywords: &["piano", "keyboard"],
        animation: Bounce,
    },
    KeywordEntry {
        emoji: "🎵",
        keywords: &["music", "song", "playlist", "concert"],
        animation: Wave,
    },
    KeywordEntry {
        emoji: "🎮",
        keywords: &["game", "gaming"],
        animation: Bounce,
    },
    KeywordEntry {
        emoji: "🎬",
        keywords: &["movie", "film", "cinema"],
        animation: Pulse,
    },
    KeywordEntry {
        emoji: "✈️",
        keywords: &["flight", "travel", "trip", "vacation", "airport", "plane"],
        animation: Bounce,
    },
    KeywordEntry {
        emoji: "🎂",
        keywords: &["birthday", "cake", "party"],
        animation: Pulse,
    },
    KeywordEntry {
        emoji: "🎁",
        keywords: &["gift", "present", "christmas"],
        animation: Bounce,
    },
    KeywordEntry {
        emoji: "🩺",
        keywords: &["doctor", "dentist", "checkup", "health", "self care"],
        animation: Pulse,
    },
    KeywordEntry {
        emoji: "🚗",
        keywords: &["car", "drive", "oil change"],
        animation: Bounce,
    },
    KeywordEntry {
        emoji: "🚲",
        keywords: &["bike", "bicycle", "cycling"],
        animation: Bounce,
    },
    KeywordEntry {
        emoji: "💼",
        keywords: &["work", "office", "business", "project", "client"],
        animation: Wiggle,
    },
    KeywordEntry {
        emoji: "🚌",
        keywords: &["bus", "commute"],
        animation: Bounce,
    },
    KeywordEntry {
        emoji: "🏠",
        keywords: &["home", "house", "apartment"],
        animation: Bounce,
    },
    KeywordEntry {
        emoji: "🧹",
        keywords: &["clean", "vacuum", "sweep", "tidy", "chores"],
        animation: Spin,
    },
    KeywordEntry {
        emoji: "🧺",
        keywords: &["laundry", "wash clothes"],
        animation: Spin,
    },
    KeywordEntry {
        emoji: "🍽️",
        keywords: &["dishes", "dishwasher"],
        animation: Spin,
    },
    KeywordEntry {
        emoji: "🪴",
        keywords: &["plant", "garden"],
        animation: Wave,
    },
    KeywordEntry {
        emoji: "🌍",
        keywords: &["world", "earth", "planet"],
        animation: Spin,
    },
    KeywordEntry {
        emoji: "🐕",
        keywords: &["dog", "puppy"],
        animation: Wave,
    },
    KeywordEntry {
        emoji: "🐟",
        keywords: &["fish", "aquarium"],
        animation: Wave,
    },
    KeywordEntry {
        emoji: "💊",
        keywords: &["medicine", "pills", "pharmacy", "vitamin"],
        animation: Pulse,
    },
    KeywordEntry {
        emoji: "❤️",
        keywords: &["love", "date night", "anniversary", "wedding"],
        animation: Pulse,
    },
    KeywordEntry {
        emoji: "💡",
        keywords: &["idea", "brainstorm", "plan"],
        animation: Pulse,
    },
    KeywordEntry {
        emoji: "🔧",
        keywords: &["fix", "repair", "maintenance"],
        animation: Spin,
    },
    KeywordEntry {
        emoji: "⚙️",
        keywords: &["settings", "setup", "configure"],
        animation: Spin,
    },
    KeywordEntry {
        emoji: "🔄",
        keywords: &["update", "sync", "renew"],
        animation: Spin,
    },
    KeywordEntry {
        emoji: "🎉",
        keywords: &["celebrate", "celebration", "holiday"],
        animation: Bounce,
    },
    KeywordEntry {
        emoji: "📦",
        keywords: &["package", "parcel", "deliver", "shipping"],
        animation: Bounce,
    },
    KeywordEntry {
        emoji: "🧳",
        keywords: &["pack", "luggage", "suitcase"],
        animation: Bounce,
    },
    KeywordEntry {
        emoji: "🎨",
        keywords: &["paint", "draw", "sketch", "design"],
        animation: Wave,
    },
    KeywordEntry {
        emoji: "📸",
        keywords: &["photo", "camera", "picture"],
        animation: Pulse,
    },
    KeywordEntry {
        emoji: "🗑️",
        keywords: &["trash", "garbage", "recycle"],
        animation: Wiggle,
    },
    KeywordEntry {
        emoji: "⏰",
        keywords: &["alarm", "remind", "wake up"],
        animation: Wiggle,
    },
    KeywordEntry {
        emoji: "💤",
        keywords: &["sleep", "nap", "bedtime"],
        animation: Pulse,
    },
    KeywordEntry {
        emoji: "🌞",
        keywords: &["summer", "beach", "sunscreen"],
        animation: Wave,
    },
    KeywordEntry {
        emoji: "❄️",
        keywords: &["winter", "snow", "skiing"],
        animation: Wave,
    },
    KeywordEntry {
        emoji: "🐈",
        keywords: &["cat", "kitten"],
        animation: Wave,
    },
    KeywordEntry {
        emoji: "🍵",
        keywords: &["tea", "matcha"],
        animation: Wiggle,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emoji::AnimationTag;

    #[test]
    fn entries_are_well_formed() {
        for entry in KEYWORDS {
            assert!(!entry.keywords.is_empty(), "{} has no keywords", entry.emoji);
            assert_ne!(entry.animation, AnimationTag::None, "{} is not animated", entry.emoji);

            for keyword in entry.keywords {
                assert!(!keyword.is_empty());
                assert_eq!(*keyword, keyword.to_lowercase(), "{keyword} is not lower-case");
            }
        }
    }

    #[test]
    fn phrases_precede_their_words() {
        let position = |keyword: &str| {
            KEYWORDS
                .iter()
                .position(|entry| entry.keywords.iter().any(|k| *k == keyword))
                .unwrap()
        };

        assert!(position("hot dog") < position("dog"));
        assert!(position("credit card") < position("car"));
        assert!(position("carrot") < position("car"));
        assert!(position("workout") < position("work"));
        assert!(position("homework") < position("work"));
        assert!(position("plant") < position("plan"));
        assert!(position("gift") < position("car"));
        assert!(position("health") < position("car"));
        assert!(position("self care") < position("car"));
    }
}
