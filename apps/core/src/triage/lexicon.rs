//! Marker lexicon.
//!
//! Fixed phrase lists per category, in English and Kiswahili. Each list is
//! compiled once into a case-insensitive `RegexSet` of literal phrases, so a
//! phrase counts once no matter how often it appears in the text.

use regex::RegexSet;
use std::sync::LazyLock;

/// Markers that count towards negative sentiment and risk.
const NEGATIVE_MARKERS: &[&str] = &[
    "sad",
    "depressed",
    "anxious",
    "worried",
    "scared",
    "alone",
    "hurt",
    "death",
    "suicide",
    "suicidal",
    "kill myself",
    "end it all",
    "end my life",
    "take my life",
    "want to die",
    "better off dead",
    "hurt myself",
    "harm myself",
    "self-harm",
    "self harm",
    // Kiswahili
    "huzuni",
    "wasiwasi",
    "upweke",
    "kujiua",
    "nataka kufa",
];

/// Explicit self-harm phrases. Any one of them forces a high risk tier.
const HIGH_SEVERITY_MARKERS: &[&str] = &[
    "death",
    "suicide",
    "suicidal",
    "kill myself",
    "end it all",
    "end my life",
    "take my life",
    "want to die",
    "better off dead",
    "hurt myself",
    "harm myself",
    "self-harm",
    "self harm",
    // Kiswahili
    "kujiua",
    "nataka kufa",
];

const POSITIVE_MARKERS: &[&str] = &[
    "happy",
    "good",
    "great",
    "excited",
    "hopeful",
    "better",
    "fine",
    "okay",
    // Kiswahili
    "furaha",
    "nzuri",
];

/// Positive phrases for reply selection. Subset of [`POSITIVE_MARKERS`]
/// without "okay", "fine", "hopeful" and "excited".
const POSITIVE_THEME_MARKERS: &[&str] = &[
    "happy",
    "good",
    "great",
    "better",
    // Kiswahili
    "furaha",
    "nzuri",
];

/// Crisis phrases for reply selection. [`HIGH_SEVERITY_MARKERS`] plus softer
/// phrases that pick the crisis reply without forcing a high tier.
const CRISIS_MARKERS: &[&str] = &[
    "death",
    "suicide",
    "suicidal",
    "kill myself",
    "end it all",
    "end my life",
    "take my life",
    "want to die",
    "better off dead",
    "hurt myself",
    "harm myself",
    "self-harm",
    "self harm",
    "no reason to live",
    "can't go on",
    // Kiswahili
    "kujiua",
    "nataka kufa",
];

const DEPRESSION_MARKERS: &[&str] = &[
    "hopeless",
    "empty",
    "worthless",
    "depressed",
    // Kiswahili
    "kukata tamaa",
    "huzuni",
];

const ANXIETY_MARKERS: &[&str] = &[
    "anxious",
    "anxiety",
    "stress",
    "worried",
    "panic",
    "nervous",
    "overwhelmed",
    // Kiswahili
    "wasiwasi",
    "hofu",
];

const SLEEP_MARKERS: &[&str] = &[
    "sleep",
    "insomnia",
    "tired",
    "exhausted",
    "nightmare",
    // Kiswahili
    "usingizi",
    "kulala",
];

/// A named list of marker phrases with its compiled matcher.
pub struct MarkerSet {
    name: &'static str,
    phrases: &'static [&'static str],
    matcher: RegexSet,
}

impl MarkerSet {
    /// Compiles a phrase list. Phrases are matched literally, ignoring case.
    // NOTE: expect() is acceptable here: every phrase is escaped, so compilation only fails on a bug
    fn compile(name: &'static str, phrases: &'static [&'static str]) -> Self {
        let patterns = phrases
            .iter()
            .map(|phrase| format!("(?i){}", regex::escape(phrase)));
        let matcher = RegexSet::new(patterns).expect("Invalid regex: escaped marker phrase");

        Self {
            name,
            phrases,
            matcher,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn phrases(&self) -> &'static [&'static str] {
        self.phrases
    }

    /// Distinct phrases of this set found in `text`, in table order.
    pub fn matches(&self, text: &str) -> Vec<&'static str> {
        self.matcher
            .matches(text)
            .iter()
            .map(|index| self.phrases[index])
            .collect()
    }

    /// Number of distinct phrases of this set found in `text`.
    pub fn count(&self, text: &str) -> usize {
        self.matcher.matches(text).iter().count()
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.matcher.is_match(text)
    }
}

/// All marker sets used by the classifier and the response generator.
pub struct Lexicon {
    pub negative: MarkerSet,
    pub high_severity: MarkerSet,
    pub positive: MarkerSet,
    pub positive_theme: MarkerSet,
    pub crisis: MarkerSet,
    pub depression: MarkerSet,
    pub anxiety: MarkerSet,
    pub sleep: MarkerSet,
}

static STANDARD_LEXICON: LazyLock<Lexicon> = LazyLock::new(|| Lexicon {
    negative: MarkerSet::compile("negative", NEGATIVE_MARKERS),
    high_severity: MarkerSet::compile("high_severity", HIGH_SEVERITY_MARKERS),
    positive: MarkerSet::compile("positive", POSITIVE_MARKERS),
    positive_theme: MarkerSet::compile("positive_theme", POSITIVE_THEME_MARKERS),
    crisis: MarkerSet::compile("crisis", CRISIS_MARKERS),
    depression: MarkerSet::compile("depression", DEPRESSION_MARKERS),
    anxiety: MarkerSet::compile("anxiety", ANXIETY_MARKERS),
    sleep: MarkerSet::compile("sleep", SLEEP_MARKERS),
});

impl Lexicon {
    /// The built-in lexicon, compiled on first use.
    pub fn standard() -> &'static Lexicon {
        &STANDARD_LEXICON
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_high_severity_is_subset_of_negative() {
        for phrase in HIGH_SEVERITY_MARKERS {
            assert!(
                NEGATIVE_MARKERS.contains(phrase),
                "'{}' must also be a negative marker",
                phrase
            );
        }
    }

    #[test]
    fn test_crisis_is_broader_than_high_severity() {
        for phrase in HIGH_SEVERITY_MARKERS {
            assert!(CRISIS_MARKERS.contains(phrase), "'{}' missing from crisis", phrase);
        }
        assert!(CRISIS_MARKERS.len() > HIGH_SEVERITY_MARKERS.len());
    }

    #[test]
    fn test_positive_theme_is_subset_of_positive() {
        for phrase in POSITIVE_THEME_MARKERS {
            assert!(POSITIVE_MARKERS.contains(phrase), "'{}' must also be a positive marker", phrase);
        }
        let lexicon = Lexicon::standard();
        assert!(!lexicon.positive_theme.is_match("I'm not okay"));
        assert!(lexicon.positive.is_match("I'm not okay"));
    }

    #[test]
    fn test_case_insensitive_match() {
        let lexicon = Lexicon::standard();
        assert!(lexicon.negative.is_match("I am SO Worried"));
        assert_eq!(lexicon.negative.matches("I am SO Worried"), vec!["worried"]);
    }

    #[test]
    fn test_repeated_phrase_counts_once() {
        let lexicon = Lexicon::standard();
        assert_eq!(lexicon.negative.count("sad sad sad"), 1);
        assert_eq!(lexicon.negative.count("sad and scared"), 2);
    }

    #[test]
    fn test_regex_metacharacters_are_literal() {
        let lexicon = Lexicon::standard();
        assert!(lexicon.crisis.is_match("I can't go on"));
        assert!(!lexicon.crisis.is_match("I cant go on"));
    }

    #[test]
    fn test_kiswahili_markers() {
        let lexicon = Lexicon::standard();
        assert!(lexicon.high_severity.is_match("nafikiria kujiua"));
        assert!(lexicon.positive.is_match("Nina furaha leo"));
    }

    #[test]
    fn test_hopeless_is_depression_not_negative() {
        let lexicon = Lexicon::standard();
        assert!(lexicon.depression.is_match("hopeless"));
        assert_eq!(lexicon.negative.count("hopeless"), 0);
    }
}
