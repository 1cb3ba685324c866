//! The fixed five-item screening questionnaire.

use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use crate::models::Bilingual;

/// Identifier of a questionnaire item (1-based).
pub type ItemId = u8;

/// The item asking about being better off dead or self-harm.
pub const SELF_HARM_ITEM: ItemId = 5;

/// One selectable answer with its score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOption {
    pub score: u8,
    pub label: Bilingual,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionnaireItem {
    pub id: ItemId,
    pub prompt: Bilingual,
    /// Ordered from lowest to highest score
    pub options: Vec<AnswerOption>,
}

impl QuestionnaireItem {
    /// Highest score any option of this item gives.
    pub fn max_score(&self) -> u8 {
        self.options.iter().map(|o| o.score).max().unwrap_or(0)
    }

    pub fn accepts(&self, score: u8) -> bool {
        self.options.iter().any(|o| o.score == score)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Questionnaire {
    items: Vec<QuestionnaireItem>,
    self_harm_item: ItemId,
}

fn frequency_options() -> Vec<AnswerOption> {
    [
        (0, "Not at all", "Hata kidogo"),
        (1, "Several days", "Siku kadhaa"),
        (2, "More than half the days", "Zaidi ya nusu ya siku"),
        (3, "Nearly every day", "Karibu kila siku"),
    ]
    .into_iter()
    .map(|(score, en, sw)| AnswerOption {
        score,
        label: Bilingual::new(en, sw),
    })
    .collect()
}

fn item(id: ItemId, en: &str, sw: &str) -> QuestionnaireItem {
    QuestionnaireItem {
        id,
        prompt: Bilingual::new(en, sw),
        options: frequency_options(),
    }
}

static STANDARD_QUESTIONNAIRE: LazyLock<Questionnaire> = LazyLock::new(|| Questionnaire {
    items: vec![
        item(
            1,
            "Over the past 2 weeks, how often have you felt down, depressed, or hopeless?",
            "Katika wiki 2 zilizopita, mara ngapi umehisi huzuni, unyangavu, au kutokuwa na matumaini?",
        ),
        item(
            2,
            "How often have you had little interest or pleasure in doing things?",
            "Mara ngapi umekuwa na maslahi madogo au furaha katika kufanya mambo?",
        ),
        item(
            3,
            "How often have you felt nervous, anxious, or on edge?",
            "Mara ngapi umehisi wasiwasi, hofu, au kuwa kwenye ukingo?",
        ),
        item(
            4,
            "How often have you had trouble falling or staying asleep?",
            "Mara ngapi umekuwa na shida za kulala au kubaki umelala?",
        ),
        item(
            SELF_HARM_ITEM,
            "How often have you felt that you would be better off dead or thought about hurting yourself?",
            "Mara ngapi umehisi kwamba ungekuwa bora kama ungekufa au umefikiri kujidhuru?",
        ),
    ],
    self_harm_item: SELF_HARM_ITEM,
});

impl Questionnaire {
    /// The built-in questionnaire.
    pub fn standard() -> &'static Questionnaire {
        &STANDARD_QUESTIONNAIRE
    }

    pub fn items(&self) -> &[QuestionnaireItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn item(&self, id: ItemId) -> Option<&QuestionnaireItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn self_harm_item(&self) -> ItemId {
        self.self_harm_item
    }

    /// Sum of every item's highest score (15 for the standard set).
    pub fn max_score(&self) -> u32 {
        self.items.iter().map(|item| u32::from(item.max_score())).sum()
    }
}
