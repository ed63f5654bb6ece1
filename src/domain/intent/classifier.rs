//! Keyword-based intent classification
//!
//! Input is lowercased and split on whitespace into a token set. Intents are
//! tested in a fixed priority order and the first whose keyword set shares a
//! token with the input wins. Anything else is `General`.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Intent tag assigned to an incoming message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    Greeting,
    Results,
    Fees,
    Registration,
    Reporting,
    Units,
    General,
}

impl Intent {
    /// Keyword-matched intents in classification priority order
    pub const PRIORITY: [Intent; 6] = [
        Intent::Greeting,
        Intent::Results,
        Intent::Fees,
        Intent::Registration,
        Intent::Reporting,
        Intent::Units,
    ];

    /// Keywords that select this intent.
    ///
    /// The two-word greeting entries can never equal a single whitespace
    /// token, so they never match.
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Self::Greeting => &["hi", "hello", "hey", "good morning", "good afternoon"],
            Self::Results => &["result", "grade", "mark", "performance", "score"],
            Self::Fees => &["fee", "payment", "balance", "money", "bill", "tuition"],
            Self::Registration => &["register", "registration", "enroll", "enrollment"],
            Self::Reporting => &["report", "reporting", "declare"],
            Self::Units => &["unit", "course", "subject", "class", "module"],
            Self::General => &[],
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Greeting => "greeting",
            Self::Results => "results",
            Self::Fees => "fees",
            Self::Registration => "registration",
            Self::Reporting => "reporting",
            Self::Units => "units",
            Self::General => "general",
        }
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Classify free text into an intent
pub fn classify(text: &str) -> Intent {
    let lowered = text.to_lowercase();
    let tokens: HashSet<&str> = lowered.split_whitespace().collect();

    Intent::PRIORITY
        .into_iter()
        .find(|intent| intent.keywords().iter().any(|kw| tokens.contains(kw)))
        .unwrap_or(Intent::General)
}
