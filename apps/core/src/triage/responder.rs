//! Rule-based supportive replies.
//!
//! An ordered table of theme rules is evaluated against the text, highest
//! severity first; the first rule whose markers match picks the reply.

use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use super::lexicon::{Lexicon, MarkerSet};

/// Theme detected in a user message, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    Crisis,
    Depression,
    Positive,
    Anxiety,
    Sleep,
    /// No theme matched
    General,
}

impl Theme {
    pub fn label(&self) -> &'static str {
        match self {
            Theme::Crisis => "crisis",
            Theme::Depression => "depression",
            Theme::Positive => "positive",
            Theme::Anxiety => "anxiety",
            Theme::Sleep => "sleep",
            Theme::General => "general",
        }
    }

    /// Reply pool for this theme. The first entry is the canonical reply.
    pub fn replies(&self) -> &'static [&'static str] {
        match self {
            Theme::Crisis => CRISIS_REPLIES,
            Theme::Depression => DEPRESSION_REPLIES,
            Theme::Positive => POSITIVE_REPLIES,
            Theme::Anxiety => ANXIETY_REPLIES,
            Theme::Sleep => SLEEP_REPLIES,
            Theme::General => GENERAL_REPLIES,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// Single entry so the crisis contacts are always named.
const CRISIS_REPLIES: &[&str] = &[
    "I'm really concerned about what you're going through, and I want you to know that you are not alone. \
     Your life matters and there are people who want to help you right now. \
     Please call 999 if you are in immediate danger, the Kenya Red Cross helpline on 1199, \
     or Befrienders Kenya on 0722 178 177. You can also text TALK to 741741.",
];

const DEPRESSION_REPLIES: &[&str] = &[
    "I'm sorry you're feeling this way. Feeling hopeless or empty is heavy to carry, \
     and it takes courage to say it out loud. Would you like to tell me more about what has been weighing on you?",
    "Thank you for trusting me with this. These feelings are valid, and you don't have to face them alone. \
     What has been the hardest part of your days lately?",
];

const POSITIVE_REPLIES: &[&str] = &[
    "That's really good to hear! It's important to notice the moments that feel better. \
     What do you think has been helping you feel this way?",
    "I'm glad you're feeling good. Would you like to share more about what's been going well?",
];

const ANXIETY_REPLIES: &[&str] = &[
    "It sounds like you're carrying a lot of worry right now. Let's try something together: \
     breathe in slowly for 4 seconds, hold for 4, and breathe out for 6. Repeat that a few times. \
     When you feel ready, would you like to talk about what has been triggering these feelings?",
];

const SLEEP_REPLIES: &[&str] = &[
    "Sleep and how we feel are closely connected. How have your sleep patterns been lately, \
     and have you noticed what keeps you awake or makes it hard to rest?",
];

const GENERAL_REPLIES: &[&str] = &[
    "Thank you for sharing with me. I'm here to listen. What's been on your mind lately?",
    "I appreciate your openness. It's normal to have ups and downs. What would help you feel better right now?",
    "I hear you. Take your time, and tell me more whenever you're ready.",
];

/// How a reply is picked from a theme's pool. Applies to every theme alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplySelection {
    /// Always the first reply of the pool
    #[default]
    Canonical,
    /// Uniformly random reply from the pool
    Varied,
}

/// A theme paired with the markers that trigger it
struct ThemeRule {
    theme: Theme,
    markers: &'static MarkerSet,
}

/// Picks one supportive reply for a user message.
pub struct ResponseGenerator {
    rules: Vec<ThemeRule>,
    selection: ReplySelection,
}

impl Default for ResponseGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl ResponseGenerator {
    /// Create a generator returning canonical replies
    pub fn new() -> Self {
        Self::with_selection(ReplySelection::Canonical)
    }

    pub fn with_selection(selection: ReplySelection) -> Self {
        let lexicon = Lexicon::standard();
        let rules = vec![
            ThemeRule {
                theme: Theme::Crisis,
                markers: &lexicon.crisis,
            },
            ThemeRule {
                theme: Theme::Depression,
                markers: &lexicon.depression,
            },
            ThemeRule {
                theme: Theme::Positive,
                markers: &lexicon.positive_theme,
            },
            ThemeRule {
                theme: Theme::Anxiety,
                markers: &lexicon.anxiety,
            },
            ThemeRule {
                theme: Theme::Sleep,
                markers: &lexicon.sleep,
            },
        ];

        Self { rules, selection }
    }

    pub fn selection(&self) -> ReplySelection {
        self.selection
    }

    /// First matching theme in severity order, or `General`.
    pub fn detect_theme(&self, text: &str) -> Theme {
        self.rules
            .iter()
            .find(|rule| rule.markers.is_match(text))
            .map(|rule| rule.theme)
            .unwrap_or(Theme::General)
    }

    /// Reply text for `theme` under the configured selection policy.
    pub fn reply_for(&self, theme: Theme) -> &'static str {
        let pool = theme.replies();
        match self.selection {
            ReplySelection::Canonical => pool[0],
            ReplySelection::Varied => pool.choose(&mut rand::thread_rng()).copied().unwrap_or(pool[0]),
        }
    }

    /// Generate the reply for a user message
    pub fn respond(&self, text: &str) -> String {
        let theme = self.detect_theme(text);
        debug!(theme = %theme, selection = ?self.selection, "Selected reply theme");
        self.reply_for(theme).to_string()
    }
}
