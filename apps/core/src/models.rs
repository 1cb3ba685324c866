use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Overall tone detected in a piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    pub fn label(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Coarse severity classification. Ordered so that `High > Medium > Low`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl RiskTier {
    pub fn label(&self) -> &'static str {
        match self {
            RiskTier::Low => "low",
            RiskTier::Medium => "medium",
            RiskTier::High => "high",
        }
    }

    /// Whether this tier requires the out-of-band crisis notice.
    pub fn requires_urgent_notice(&self) -> bool {
        matches!(self, RiskTier::High)
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Which half of a [`Bilingual`] pair to display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguagePreference {
    /// English.
    #[default]
    Primary,
    /// Kiswahili.
    Alternate,
}

/// A text available in the primary language (English) and the alternate one (Kiswahili).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bilingual {
    pub primary: String,
    pub alternate: String,
}

impl Bilingual {
    pub fn new(primary: impl Into<String>, alternate: impl Into<String>) -> Self {
        Self {
            primary: primary.into(),
            alternate: alternate.into(),
        }
    }

    pub fn get(&self, language: LanguagePreference) -> &str {
        match language {
            LanguagePreference::Primary => &self.primary,
            LanguagePreference::Alternate => &self.alternate,
        }
    }

    /// Both language variants, primary first.
    pub fn texts(&self) -> [&str; 2] {
        [&self.primary, &self.alternate]
    }
}

/// Output of a risk classifier for one input text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub sentiment: Sentiment,
    /// Confidence score (0.0 - 1.0)
    pub confidence: f32,
    pub risk_tier: RiskTier,
    /// Marker phrases that contributed to the decision
    #[serde(default)]
    pub matched_markers: Vec<String>,
}

/// Author of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    System,
}

/// A single message within a chat session. Never mutated after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// The unique identifier for the message (UUID v4).
    pub id: String,
    /// The text content of the message.
    pub content: String,
    /// Who authored the message.
    pub sender: Sender,
    /// When the message was created.
    pub created_at: DateTime<Utc>,
    /// Sentiment of the user text this reply answers. Only set on system messages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<Sentiment>,
    /// Risk tier of the user text this reply answers. Only set on system messages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_tier: Option<RiskTier>,
}

impl Message {
    /// Creates a message authored by the user. User messages never carry a tier.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            content: content.into(),
            sender: Sender::User,
            created_at: Utc::now(),
            sentiment: None,
            risk_tier: None,
        }
    }

    /// Creates a system reply annotated with the classification it answers.
    pub fn system(content: impl Into<String>, sentiment: Sentiment, risk_tier: RiskTier) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            content: content.into(),
            sender: Sender::System,
            created_at: Utc::now(),
            sentiment: Some(sentiment),
            risk_tier: Some(risk_tier),
        }
    }

    pub fn is_from_user(&self) -> bool {
        self.sender == Sender::User
    }
}
