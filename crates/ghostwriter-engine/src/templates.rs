use crate::emotions::{expand_emotion, silver_lining};
use crate::tables::{fallback_template, MoodDescriptor, DEFAULT_EMOTION};

/// The four sentence shapes a generated reflection can take
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReflectionTemplate {
    /// "Today, {intensity} {emotion} settled in my bones. ..."
    SettledInBones,
    /// "A {tone} stillness fills the space between thoughts. ..."
    StillnessBetweenThoughts,
    /// "The day unfolded with {intensity} presence. ..."
    QuietSilverLining,
    /// "{Tone} hues color my perception. ..."
    HuesOfPerception,
}

impl ReflectionTemplate {
    pub const ALL: [ReflectionTemplate; 4] = [
        ReflectionTemplate::SettledInBones,
        ReflectionTemplate::StillnessBetweenThoughts,
        ReflectionTemplate::QuietSilverLining,
        ReflectionTemplate::HuesOfPerception,
    ];

    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    pub fn render(self, raw_text: &str, descriptor: &MoodDescriptor, emotions: &[&str]) -> String {
        let expansion = expand_emotion(raw_text, descriptor);
        let lead = emotions.first().copied().unwrap_or(DEFAULT_EMOTION);

        match self {
            ReflectionTemplate::SettledInBones => format!(
                "Today, {} {} settled in my bones. {} The {} mirrors the landscape of my heart.",
                descriptor.intensity, lead, expansion, descriptor.imagery
            ),
            ReflectionTemplate::StillnessBetweenThoughts => format!(
                "A {} stillness fills the space between thoughts. {} Each breath carries the weight and wonder of this {} moment.",
                descriptor.tone,
                expansion,
                emotions.join(" and ")
            ),
            ReflectionTemplate::QuietSilverLining => format!(
                "The day unfolded with {} presence. {} In the quiet, I find {}.",
                descriptor.intensity,
                expansion,
                silver_lining(emotions)
            ),
            ReflectionTemplate::HuesOfPerception => format!(
                "{} hues color my perception. {} The {} reminds me that even {} has its own beauty.",
                capitalize_first(descriptor.tone),
                expansion,
                descriptor.imagery,
                lead
            ),
        }
    }
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Non-random reflection used when generation fails.
///
/// In-range moods wrap the raw text in that mood's fixed sentence pair;
/// any other mood returns the raw text unchanged.
pub fn fallback_reflection(raw_text: &str, mood: i64) -> String {
    match fallback_template(mood) {
        Some((opening, closing)) => format!("{} {} {}", opening, raw_text, closing),
        None => raw_text.to_string(),
    }
}
