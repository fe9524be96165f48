// web_app/model/badge.rs - Badge tones shared by order and product statuses

use serde::{Deserialize, Serialize};

/// Visual tone of a status badge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BadgeTone {
    Positive,
    Warning,
    Negative,
    Info,
}

impl BadgeTone {
    /// Tailwind classes for the badge pill.
    pub fn class(self) -> &'static str {
        match self {
            BadgeTone::Positive => "px-2 py-1 rounded-full text-xs bg-green-100 text-green-800",
            BadgeTone::Warning => "px-2 py-1 rounded-full text-xs bg-amber-100 text-amber-800",
            BadgeTone::Negative => "px-2 py-1 rounded-full text-xs bg-red-100 text-red-800",
            BadgeTone::Info => "px-2 py-1 rounded-full text-xs bg-blue-100 text-blue-800",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tone_classes() {
        assert!(BadgeTone::Positive.class().contains("bg-green-100"));
        assert!(BadgeTone::Warning.class().contains("bg-amber-100"));
        assert!(BadgeTone::Negative.class().contains("bg-red-100"));
        assert!(BadgeTone::Info.class().contains("bg-blue-100"));

        for tone in [BadgeTone::Positive, BadgeTone::Warning, BadgeTone::Negative, BadgeTone::Info] {
            assert!(tone.class().contains("rounded-full"), "Rounded for {:?}", tone);
            assert!(tone.class().contains("text-xs"), "Text size for {:?}", tone);
        }
    }
}
