//! Fixed lookup tables behind reflection composition.
//!
//! Table order is significant: emotion detection and expansion both walk
//! these slices front to back.

/// Word set describing one mood level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoodDescriptor {
    pub intensity: &'static str,
    pub tone: &'static str,
    pub imagery: &'static str,
}

/// Mood used for values outside 1..=5
pub const MIDPOINT_MOOD: i64 = 3;

/// Emotion reported when no keyword matches
pub const DEFAULT_EMOTION: &str = "contemplative";

pub const GENERIC_SILVER_LINING: &str = "beauty in the imperfect journey";

pub static MOOD_DESCRIPTORS: [MoodDescriptor; 5] = [
    MoodDescriptor {
        intensity: "overwhelming",
        tone: "melancholic",
        imagery: "heavy shadows",
    },
    MoodDescriptor {
        intensity: "lingering",
        tone: "reflective",
        imagery: "soft rain",
    },
    MoodDescriptor {
        intensity: "present",
        tone: "contemplative",
        imagery: "gentle breeze",
    },
    MoodDescriptor {
        intensity: "bubbling",
        tone: "hopeful",
        imagery: "warm sunlight",
    },
    MoodDescriptor {
        intensity: "radiant",
        tone: "joyful",
        imagery: "bright skies",
    },
];

pub static EMOTION_KEYWORDS: [(&str, &[&str]); 5] = [
    ("lost", &["lost", "confused", "directionless", "adrift"]),
    ("heavy", &["heavy", "weight", "burden", "pressure", "crushing"]),
    ("anxious", &["anxious", "worried", "nervous", "uneasy"]),
    ("peaceful", &["peaceful", "calm", "serene", "tranquil"]),
    ("joyful", &["happy", "joyful", "excited", "elated"]),
];

/// Elaborations keyed by emotion name, matched against the raw text itself
pub static EXPANSIONS: [(&str, &str); 5] = [
    (
        "lost",
        "I felt adrift in a sea of uncertainty, each wave carrying questions without answers.",
    ),
    (
        "heavy",
        "The weight sat heavy on my chest, a silent companion to my thoughts.",
    ),
    (
        "anxious",
        "Butterflies of worry danced in my stomach, their wings brushing against my peace.",
    ),
    (
        "peaceful",
        "A gentle calm wrapped around me like a soft blanket, soothing the edges of the day.",
    ),
    (
        "joyful",
        "Laughter bubbled up from some deep well within, painting the world in brighter colors.",
    ),
];

// No joyful or peaceful entry; those fall through to the generic lining.
pub static SILVER_LININGS: [(&str, &str); 4] = [
    ("lost", "clarity often emerges from confusion"),
    ("heavy", "strength is forged under pressure"),
    ("anxious", "courage lives alongside fear"),
    ("contemplative", "wisdom grows in quiet moments"),
];

/// Deterministic fallback openings and closings, one pair per mood
pub static FALLBACK_TEMPLATES: [(&str, &str); 5] = [
    (
        "A difficult day.",
        "The weight feels real, but so does the strength to carry it.",
    ),
    (
        "Quiet reflections.",
        "Even in sadness, there's space for gentle understanding.",
    ),
    (
        "Moments of balance.",
        "The ordinary holds its own subtle magic.",
    ),
    (
        "Glimmers of light.",
        "Joy finds its way through, softening the edges.",
    ),
    (
        "Radiant moments.",
        "The heart feels full, expansive, alive.",
    ),
];

fn scale_index(mood: i64) -> Option<usize> {
    if (1..=5).contains(&mood) {
        Some((mood - 1) as usize)
    } else {
        None
    }
}

/// Descriptor for a mood, using the midpoint for out-of-range values
pub fn descriptor_for(mood: i64) -> &'static MoodDescriptor {
    let index = scale_index(mood).unwrap_or((MIDPOINT_MOOD - 1) as usize);
    &MOOD_DESCRIPTORS[index]
}

/// Fallback template pair for an in-range mood
pub fn fallback_template(mood: i64) -> Option<&'static (&'static str, &'static str)> {
    scale_index(mood).map(|i| &FALLBACK_TEMPLATES[i])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_uses_midpoint() {
        assert_eq!(descriptor_for(0), descriptor_for(3));
        assert_eq!(descriptor_for(6), descriptor_for(3));
        assert_eq!(descriptor_for(-40).intensity, "present");
        assert_eq!(descriptor_for(1).imagery, "heavy shadows");
    }

    #[test]
    fn test_silver_linings_skip_joyful() {
        assert!(SILVER_LININGS.iter().all(|(e, _)| *e != "joyful"));
        assert!(fallback_template(6).is_none());
    }
}
