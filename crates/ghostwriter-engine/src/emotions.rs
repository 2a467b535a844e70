use crate::tables::{
    MoodDescriptor, DEFAULT_EMOTION, EMOTION_KEYWORDS, EXPANSIONS, GENERIC_SILVER_LINING,
    SILVER_LININGS,
};

/// Emotions whose trigger words occur anywhere in the text.
///
/// Matching is case-insensitive substring containment, so "happy" also
/// fires inside "unhappy". Results follow keyword-table order; an empty
/// match yields `["contemplative"]`.
pub fn detect_emotions(text: &str) -> Vec<&'static str> {
    let lower = text.to_lowercase();
    let detected: Vec<&'static str> = EMOTION_KEYWORDS
        .iter()
        .filter(|(_, triggers)| triggers.iter().any(|t| lower.contains(t)))
        .map(|(emotion, _)| *emotion)
        .collect();

    if detected.is_empty() {
        vec![DEFAULT_EMOTION]
    } else {
        detected
    }
}

/// Canned elaboration for the first emotion name found in the text
pub fn expand_emotion(text: &str, descriptor: &MoodDescriptor) -> String {
    let lower = text.to_lowercase();
    EXPANSIONS
        .iter()
        .find(|(emotion, _)| lower.contains(emotion))
        .map(|(_, expansion)| expansion.to_string())
        .unwrap_or_else(|| {
            format!(
                "The {} feeling colored everything, leaving its imprint on the hours.",
                descriptor.intensity
            )
        })
}

/// Aphorism for the leading emotion
pub fn silver_lining(emotions: &[&str]) -> &'static str {
    emotions
        .first()
        .and_then(|first| SILVER_LININGS.iter().find(|(e, _)| e == first))
        .map(|(_, lining)| *lining)
        .unwrap_or(GENERIC_SILVER_LINING)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::descriptor_for;

    #[test]
    fn test_detection_is_substring_based() {
        assert_eq!(detect_emotions("Deeply unhappy"), vec!["joyful"]);
        assert_eq!(detect_emotions("CALM but Worried"), vec!["anxious", "peaceful"]);
        assert_eq!(detect_emotions(""), vec!["contemplative"]);
    }

    #[test]
    fn test_expansion_uses_emotion_names_not_triggers() {
        let d = descriptor_for(4);
        // "worried" triggers anxious detection but is not an expansion key
        assert_eq!(
            expand_emotion("so worried", d),
            "The bubbling feeling colored everything, leaving its imprint on the hours."
        );
        assert!(expand_emotion("I feel LOST", d).starts_with("I felt adrift"));
    }

    #[test]
    fn test_silver_lining_defaults() {
        assert_eq!(silver_lining(&["heavy"]), "strength is forged under pressure");
        assert_eq!(silver_lining(&["joyful"]), "beauty in the imperfect journey");
        assert_eq!(silver_lining(&[]), "beauty in the imperfect journey");
    }
}
