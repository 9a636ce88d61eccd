//! # Animations
//!
//! CSS for the animation tags. The frontend loads `/animations.css` once and puts
//! [`AnimationTag::css_class`] on the emoji span.
//!
//! Every animation loops with the same timing: `2s ease-in-out infinite`.
use std::fmt::Write;

use crate::emoji::AnimationTag;

const TIMING: &str = "2s ease-in-out infinite";

const ANIMATED: [AnimationTag; 5] = [
    AnimationTag::Bounce,
    AnimationTag::Wiggle,
    AnimationTag::Pulse,
    AnimationTag::Spin,
    AnimationTag::Wave,
];

impl AnimationTag {
    pub fn css_class(self) -> Option<&'static str> {
        match self {
            AnimationTag::Bounce => Some("emoji-bounce"),
            AnimationTag::Wiggle => Some("emoji-wiggle"),
            AnimationTag::Pulse => Some("emoji-pulse"),
            AnimationTag::Spin => Some("emoji-spin"),
            AnimationTag::Wave => Some("emoji-wave"),
            AnimationTag::None => None,
        }
    }

    pub fn keyframes(self) -> Option<&'static str> {
        match self {
            AnimationTag::Bounce => Some(
                "0%, 100% { transform: translateY(0); }
  25% { transform: translateY(-4px); }
  50% { transform: translateY(0); }
  75% { transform: translateY(-2px); }",
            ),
            AnimationTag::Wiggle => Some(
                "0%, 100% { transform: rotate(0deg); }
  20% { transform: rotate(12deg); }
  40% { transform: rotate(-10deg); }
  60% { transform: rotate(6deg); }
  80% { transform: rotate(-4deg); }",
            ),
            AnimationTag::Pulse => Some(
                "0%, 100% { transform: scale(1); }
  50% { transform: scale(1.2); }",
            ),
            // A sway rather than a full turn.
            AnimationTag::Spin => Some(
                "0% { transform: rotate(0deg); }
  25% { transform: rotate(15deg); }
  50% { transform: rotate(0deg); }
  75% { transform: rotate(-15deg); }
  100% { transform: rotate(0deg); }",
            ),
            AnimationTag::Wave => Some(
                "0%, 100% { transform: rotate(0deg) translateY(0); }
  25% { transform: rotate(8deg) translateY(-2px); }
  50% { transform: rotate(0deg) translateY(0); }
  75% { transform: rotate(-8deg) translateY(-2px); }",
            ),
            AnimationTag::None => None,
        }
    }
}

pub fn stylesheet() -> String {
    let mut css = String::new();

    for tag in ANIMATED {
        let (Some(class), Some(frames)) = (tag.css_class(), tag.keyframes()) else {
            continue;
        };

        let _ = write!(
            css,
            "@keyframes {class} {{\n  {frames}\n}}\n\n.{class} {{\n  display: inline-flex;\n  animation: {class} {TIMING};\n}}\n\n"
        );
    }

    css
}
