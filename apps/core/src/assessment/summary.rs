use serde::{Deserialize, Serialize};

use super::scorer::AssessmentResult;
use crate::models::{Bilingual, LanguagePreference, RiskTier};
use crate::notice::{crisis_contacts, CrisisContact};

/// Bilingual explanation of an assessment result for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskSummary {
    pub risk_tier: RiskTier,
    pub headline: Bilingual,
    pub guidance: Bilingual,
    /// Crisis lines to show with the result. Only filled for the high tier.
    pub crisis_contacts: Vec<CrisisContact>,
}

impl RiskSummary {
    pub fn for_result(result: &AssessmentResult) -> Self {
        match result.risk_tier {
            RiskTier::High => Self {
                risk_tier: RiskTier::High,
                headline: Bilingual::new("High Risk", "Hatari Kubwa"),
                guidance: Bilingual::new(
                    "Your responses indicate you may be experiencing significant mental health challenges. \
                     Please consider reaching out to a mental health professional immediately.",
                    "Majibu yako yanaonyesha kwamba unaweza kukabiliana na changamoto kubwa za afya ya akili. \
                     Tafadhali fikiria kufikia mtaalamu wa afya ya akili mara moja.",
                ),
                crisis_contacts: crisis_contacts(),
            },
            RiskTier::Medium => Self {
                risk_tier: RiskTier::Medium,
                headline: Bilingual::new("Medium Risk", "Hatari ya Wastani"),
                guidance: Bilingual::new(
                    "Your responses suggest you may be experiencing some mental health challenges. \
                     Consider talking to a counselor or trusted friend.",
                    "Majibu yako yanaonyesha kwamba unaweza kukabiliana na baadhi ya changamoto za afya ya akili. \
                     Fikiria kuzungumza na mshauri au rafiki unayemwamini.",
                ),
                crisis_contacts: Vec::new(),
            },
            RiskTier::Low => Self {
                risk_tier: RiskTier::Low,
                headline: Bilingual::new("Low Risk", "Hatari Ndogo"),
                guidance: Bilingual::new(
                    "Your responses indicate you are doing relatively well. \
                     Continue taking care of your mental health.",
                    "Majibu yako yanaonyesha kwamba unafanya vizuri. Endelea kujitunza kiakili.",
                ),
                crisis_contacts: Vec::new(),
            },
        }
    }

    /// Plain-text rendering in the chosen language.
    pub fn render(&self, language: LanguagePreference) -> String {
        let mut out = format!("{}\n{}", self.headline.get(language), self.guidance.get(language));
        for contact in &self.crisis_contacts {
            out.push_str(&format!("\n  - {}: {}", contact.name, contact.contact));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(tier: RiskTier, flagged: bool) -> AssessmentResult {
        AssessmentResult {
            total_score: 1,
            max_score: 15,
            percentage: 6.67,
            risk_tier: tier,
            self_harm_flagged: flagged,
        }
    }

    #[test]
    fn test_high_lists_contacts() {
        let summary = RiskSummary::for_result(&result(RiskTier::High, true));
        assert_eq!(summary.headline.primary, "High Risk");
        assert!(!summary.crisis_contacts.is_empty());
        assert!(summary.render(LanguagePreference::Primary).contains("1199"));
    }

    #[test]
    fn test_low_and_medium_have_no_contacts() {
        assert!(RiskSummary::for_result(&result(RiskTier::Low, false)).crisis_contacts.is_empty());
        assert!(RiskSummary::for_result(&result(RiskTier::Medium, false)).crisis_contacts.is_empty());
    }

    #[test]
    fn test_kiswahili_rendering() {
        let summary = RiskSummary::for_result(&result(RiskTier::Low, false));
        assert!(summary.render(LanguagePreference::Alternate).starts_with("Hatari Ndogo"));
    }
}
