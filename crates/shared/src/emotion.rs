//! Keyword-based emotion classification.
//!
//! A fixed rule table, not a model: rules are checked in order against the
//! lower-cased input and the first match wins. The same text always produces
//! the same report. The `language` hint is accepted for forward compatibility
//! but the keyword set is English-only.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmotionLabel {
    Joy,
    Sadness,
    Anger,
    Fear,
    Love,
    Neutral,
    Stress,
    Burnout,
    Loneliness,
}

/// Result of classifying one piece of text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionReport {
    pub label: EmotionLabel,
    pub score: f64,
    pub suggestions: Vec<String>,
}

const SADNESS_KEYWORDS: &[&str] = &["sad", "down", "lonely", "alone", "tired"];
const ANGER_KEYWORDS: &[&str] = &["angry", "mad", "frustrated", "irritated"];
const FEAR_KEYWORDS: &[&str] = &["anxious", "worried", "fear", "scared"];
const BURNOUT_KEYWORDS: &[&str] = &["burnout", "exhausted", "overworked", "stressed"];

const SADNESS_SUGGESTIONS: &[&str] = &[
    "Try a 5-minute breathing exercise",
    "Reach out to a friend or join a community room",
    "Take a short walk and hydrate",
];
const ANGER_SUGGESTIONS: &[&str] = &[
    "Pause and note what triggered you",
    "Count 4-7-8 breaths",
    "Journal your thoughts for 3 minutes",
];
const FEAR_SUGGESTIONS: &[&str] = &[
    "Ground with 5-4-3-2-1 technique",
    "Limit caffeine and news for a bit",
    "Text a counselor if available",
];
const BURNOUT_SUGGESTIONS: &[&str] = &[
    "Schedule a 10-minute break block",
    "Delegate one small task",
    "Plan a wind-down routine tonight",
];
const NEUTRAL_SUGGESTIONS: &[&str] = &[
    "Keep a gratitude note for today",
    "Share a supportive message in your community",
];

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| text.contains(k))
}

fn suggestions(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

/// Classify `text` into an emotion label with a fixed confidence and a
/// canned suggestion list. Pure and deterministic; no I/O.
pub fn classify(text: &str, _language: &str) -> EmotionReport {
    let text = text.to_lowercase();

    let (label, suggestions) = if contains_any(&text, SADNESS_KEYWORDS) {
        let label = if text.contains("lonely") || text.contains("alone") {
            EmotionLabel::Loneliness
        } else {
            EmotionLabel::Sadness
        };
        (label, suggestions(SADNESS_SUGGESTIONS))
    } else if contains_any(&text, ANGER_KEYWORDS) {
        (EmotionLabel::Anger, suggestions(ANGER_SUGGESTIONS))
    } else if contains_any(&text, FEAR_KEYWORDS) {
        (EmotionLabel::Fear, suggestions(FEAR_SUGGESTIONS))
    } else if contains_any(&text, BURNOUT_KEYWORDS) {
        let label = if text.contains("burnout") {
            EmotionLabel::Burnout
        } else {
            EmotionLabel::Stress
        };
        (label, suggestions(BURNOUT_SUGGESTIONS))
    } else {
        (EmotionLabel::Neutral, suggestions(NEUTRAL_SUGGESTIONS))
    };

    let score = if label == EmotionLabel::Neutral { 0.5 } else { 0.8 };

    EmotionReport {
        label,
        score,
        suggestions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lonely_and_alone_map_to_loneliness() {
        for text in ["I feel so LONELY tonight.", "i am all alone", "Alone, again"] {
            let report = classify(text, "en");
            assert_eq!(report.label, EmotionLabel::Loneliness, "text: {text}");
            assert_eq!(report.score, 0.8);
        }
    }

    #[test]
    fn sad_without_lonely_maps_to_sadness() {
        let report = classify("I feel sad today", "en");
        assert_eq!(report.label, EmotionLabel::Sadness);
        assert_eq!(report.score, 0.8);
        assert_eq!(report.suggestions, suggestions(SADNESS_SUGGESTIONS));
    }

    #[test]
    fn unrecognized_text_is_neutral() {
        let report = classify("the weather is nice", "en");
        assert_eq!(report.label, EmotionLabel::Neutral);
        assert_eq!(report.score, 0.5);
        assert_eq!(report.suggestions, suggestions(NEUTRAL_SUGGESTIONS));
    }

    #[test]
    fn empty_text_is_valid_and_neutral() {
        let report = classify("", "en");
        assert_eq!(report.label, EmotionLabel::Neutral);
        assert_eq!(report.score, 0.5);
        assert_eq!(report.suggestions, suggestions(NEUTRAL_SUGGESTIONS));
    }

    #[test]
    fn sadness_rule_takes_precedence_over_anger() {
        let report = classify("I am sad and mad", "en");
        assert_eq!(report.label, EmotionLabel::Sadness);
    }

    #[test]
    fn anger_before_fear() {
        let report = classify("frustrated and worried", "en");
        assert_eq!(report.label, EmotionLabel::Anger);
    }

    #[test]
    fn burnout_splits_from_stress() {
        assert_eq!(
            classify("total burnout this week", "en").label,
            EmotionLabel::Burnout
        );
        assert_eq!(
            classify("so stressed at work", "en").label,
            EmotionLabel::Stress
        );
    }

    #[test]
    fn fear_keywords() {
        let report = classify("feeling anxious about tomorrow", "en");
        assert_eq!(report.label, EmotionLabel::Fear);
        assert_eq!(report.suggestions.len(), 3);
    }

    #[test]
    fn classify_is_deterministic() {
        let a = classify("I am sad and mad", "en");
        let b = classify("I am sad and mad", "en");
        assert_eq!(a, b);
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    #[test]
    fn language_hint_has_no_effect() {
        let en = classify("so tired of everything", "en");
        let es = classify("so tired of everything", "es");
        assert_eq!(en, es);
        assert_eq!(en.label, EmotionLabel::Sadness);
    }

    #[test]
    fn labels_serialize_lowercase() {
        assert_eq!(
            serde_json::to_string(&EmotionLabel::Loneliness).unwrap(),
            "\"loneliness\""
        );
    }
}
