use serde::{Deserialize, Serialize};

/// A single display word, reused across several action variants.
///
/// Formatting flags and translations default to empty so client payloads
/// only need to carry the fields they set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Word {
    pub text: String,
    #[serde(default)]
    pub translations: Vec<String>,
    #[serde(default)]
    pub bold: bool,
    #[serde(default)]
    pub italic: bool,
    #[serde(default)]
    pub underline: bool,
    #[serde(default)]
    pub highlight: bool,
    /// Marks the word as a blank to be filled in by the learner.
    #[serde(default)]
    pub is_blank: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<String>,
}

impl Word {
    /// Plain word with no translations or formatting.
    pub fn plain(text: impl Into<String>) -> Self {
        Word {
            text: text.into(),
            translations: Vec::new(),
            bold: false,
            italic: false,
            underline: false,
            highlight: false,
            is_blank: false,
            audio_url: None,
        }
    }
}
