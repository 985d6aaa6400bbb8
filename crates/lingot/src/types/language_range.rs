use serde::{Deserialize, Serialize};

fn default_weight() -> f64 {
    1.0
}

/// A weighted language preference, such as `ar-SA`, `en-*` or `*`.
///
/// Each `*` segment stands for one or more ASCII letters or digits. A range
/// consisting of `*` alone is skipped during matching. `weight` only decides
/// the order ranges are tried in: lower weights are visited first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageRange {
    pub language: String,
    #[serde(default = "default_weight")]
    pub weight: f64,
}

impl LanguageRange {
    pub fn new(language: impl Into<String>) -> Self {
        Self::weighted(language, default_weight())
    }

    pub fn weighted(language: impl Into<String>, weight: f64) -> Self {
        Self {
            language: language.into(),
            weight,
        }
    }

    /// `true` for the lone `*` range.
    pub fn is_any(&self) -> bool {
        self.language.trim() == "*"
    }
}

impl From<&str> for LanguageRange {
    fn from(language: &str) -> Self {
        LanguageRange::new(language)
    }
}

impl From<String> for LanguageRange {
    fn from(language: String) -> Self {
        LanguageRange::new(language)
    }
}
