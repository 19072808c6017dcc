//! Article tone: maps the requested tone to the style line injected into the prompt.

use std::fmt;
use std::str::FromStr;

/// Stylistic register requested for the article. Parsed case-insensitively,
/// so the form's "Formal" and the API's "formal" are the same tone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tone {
    Formal,
    #[default]
    Neutral,
    Casual,
}

impl Tone {
    pub const ALL: [Tone; 3] = [Tone::Formal, Tone::Neutral, Tone::Casual];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Formal => "formal",
            Tone::Neutral => "neutral",
            Tone::Casual => "casual",
        }
    }

    /// Style instruction appended to the prompt guidelines.
    pub fn style_guidance(&self) -> &'static str {
        match self {
            Tone::Formal => {
                "Write in a formal, authoritative register suited to a newspaper of record"
            }
            Tone::Neutral => "Write in a neutral, even-handed register",
            Tone::Casual => {
                "Write in a conversational, approachable register while staying factual"
            }
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tone {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Tone::ALL
            .into_iter()
            .find(|tone| tone.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                format!("unknown tone '{wanted}' (expected one of: formal, neutral, casual)")
            })
    }
}
