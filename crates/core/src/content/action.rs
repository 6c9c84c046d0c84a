use serde::{Deserialize, Serialize};

use crate::content::word::Word;

/// Horizontal alignment for explain blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Left,
    Center,
    Right,
}

/// Which side of a chat bubble a message renders on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatPosition {
    Left,
    Right,
}

/// One selectable option in a choice exercise.
///
/// `is_correct` is deliberately not defaulted: an option without it is a
/// malformed payload and must fail deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChoiceOption {
    pub word: Word,
    pub is_correct: bool,
}

/// One scrambled item in a reorder exercise, carrying its correct position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReorderItem {
    pub word: Word,
    pub sequence: i32,
}

/// One side of a match-card pair: text, an audio reference, or both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchSide {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchPair {
    pub left: MatchSide,
    pub right: MatchSide,
}

/// One titled column of words in a column layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnBlock {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<Word>,
    pub words: Vec<Word>,
}

/// A sentence fragment in a fill-by-typing exercise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentenceSegment {
    pub text: String,
    #[serde(default)]
    pub is_blank: bool,
}

/// A sentence fragment in a fill-with-choice exercise.
///
/// `in_sentence = false` marks a choice-only distractor that never renders
/// inline; blank segments carry their own choice pool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChoiceSegment {
    pub text: String,
    #[serde(default)]
    pub is_blank: bool,
    #[serde(default = "default_true")]
    pub in_sentence: bool,
    #[serde(default)]
    pub choices: Vec<String>,
}

fn default_true() -> bool {
    true
}

/// One typed interactive exercise unit within a screen.
///
/// The `type` field selects the variant; the rest of the payload must match
/// that variant's shape exactly or deserialization fails. Adding a variant
/// is a compile-time-checked change at every consumption site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Action {
    Explain {
        sequence: i32,
        words: Vec<Word>,
        align: Alignment,
        font_size: i32,
    },
    Reading {
        sequence: i32,
        words: Vec<Word>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        audio_url: Option<String>,
        #[serde(default = "default_true")]
        visible: bool,
        #[serde(default = "default_true")]
        readable: bool,
    },
    Audio {
        sequence: i32,
        audio_url: String,
        #[serde(default)]
        auto_play: bool,
    },
    Chat {
        sequence: i32,
        words: Vec<Word>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        audio_url: Option<String>,
        #[serde(default = "default_true")]
        visible: bool,
        #[serde(default = "default_true")]
        readable: bool,
    },
    Image {
        sequence: i32,
        image_url: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        caption: Option<String>,
    },
    Column {
        sequence: i32,
        columns: Vec<ColumnBlock>,
    },
    Choice {
        sequence: i32,
        options: Vec<ChoiceOption>,
    },
    Reorder {
        sequence: i32,
        items: Vec<ReorderItem>,
    },
    MatchCard {
        sequence: i32,
        pairs: Vec<MatchPair>,
    },
    FillSentenceByTyping {
        sequence: i32,
        segments: Vec<SentenceSegment>,
    },
    FillSentenceWithChoice {
        sequence: i32,
        segments: Vec<ChoiceSegment>,
    },
    WriteSentence {
        sequence: i32,
        sentence: Vec<String>,
    },
    WriteSentenceInChat {
        sequence: i32,
        sentence: Vec<String>,
        position: ChatPosition,
    },
}

impl Action {
    /// Position of this action within its screen.
    pub fn sequence(&self) -> i32 {
        match self {
            Action::Explain { sequence, .. }
            | Action::Reading { sequence, .. }
            | Action::Audio { sequence, .. }
            | Action::Chat { sequence, .. }
            | Action::Image { sequence, .. }
            | Action::Column { sequence, .. }
            | Action::Choice { sequence, .. }
            | Action::Reorder { sequence, .. }
            | Action::MatchCard { sequence, .. }
            | Action::FillSentenceByTyping { sequence, .. }
            | Action::FillSentenceWithChoice { sequence, .. }
            | Action::WriteSentence { sequence, .. }
            | Action::WriteSentenceInChat { sequence, .. } => *sequence,
        }
    }

    /// The discriminant of this action, without its payload.
    pub fn action_type(&self) -> ActionType {
        match self {
            Action::Explain { .. } => ActionType::Explain,
            Action::Reading { .. } => ActionType::Reading,
            Action::Audio { .. } => ActionType::Audio,
            Action::Chat { .. } => ActionType::Chat,
            Action::Image { .. } => ActionType::Image,
            Action::Column { .. } => ActionType::Column,
            Action::Choice { .. } => ActionType::Choice,
            Action::Reorder { .. } => ActionType::Reorder,
            Action::MatchCard { .. } => ActionType::MatchCard,
            Action::FillSentenceByTyping { .. } => ActionType::FillSentenceByTyping,
            Action::FillSentenceWithChoice { .. } => ActionType::FillSentenceWithChoice,
            Action::WriteSentence { .. } => ActionType::WriteSentence,
            Action::WriteSentenceInChat { .. } => ActionType::WriteSentenceInChat,
        }
    }
}

/// Payload-free action discriminant, used by session templates to describe
/// which action types each screen slot expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ActionType {
    Explain,
    Reading,
    Audio,
    Chat,
    Image,
    Column,
    Choice,
    Reorder,
    MatchCard,
    FillSentenceByTyping,
    FillSentenceWithChoice,
    WriteSentence,
    WriteSentenceInChat,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tagged_action_round_trips() {
        let action = Action::Choice {
            sequence: 0,
            options: vec![
                ChoiceOption {
                    word: Word::plain("der"),
                    is_correct: true,
                },
                ChoiceOption {
                    word: Word::plain("das"),
                    is_correct: false,
                },
            ],
        };

        let json = serde_json::to_value(&action).unwrap();
        assert_eq!(json["type"], "choice");

        let back: Action = serde_json::from_value(json).unwrap();
        assert_eq!(back, action);
        assert_eq!(back.action_type(), ActionType::Choice);
    }

    #[test]
    fn choice_option_missing_is_correct_is_rejected() {
        let payload = serde_json::json!({
            "type": "choice",
            "sequence": 0,
            "options": [{"word": {"text": "der"}}],
        });
        assert!(serde_json::from_value::<Action>(payload).is_err());
    }

    #[test]
    fn payload_must_match_declared_type() {
        // A reorder payload claiming to be an explain block.
        let payload = serde_json::json!({
            "type": "explain",
            "sequence": 0,
            "items": [{"word": {"text": "eins"}, "sequence": 0}],
        });
        assert!(serde_json::from_value::<Action>(payload).is_err());
    }

    #[test]
    fn unknown_action_type_is_rejected() {
        let payload = serde_json::json!({"type": "karaoke", "sequence": 0});
        assert!(serde_json::from_value::<Action>(payload).is_err());
    }

    #[test]
    fn fill_with_choice_defaults_in_sentence() {
        let payload = serde_json::json!({
            "type": "fillSentenceWithChoice",
            "sequence": 1,
            "segments": [
                {"text": "Ich", "isBlank": false},
                {"text": "bin", "isBlank": true, "choices": ["bin", "bist"]},
                {"text": "bist", "isBlank": false, "inSentence": false},
            ],
        });
        let action: Action = serde_json::from_value(payload).unwrap();
        match action {
            Action::FillSentenceWithChoice { segments, .. } => {
                assert!(segments[0].in_sentence);
                assert!(!segments[2].in_sentence);
                assert_eq!(segments[1].choices, vec!["bin", "bist"]);
            }
            other => panic!("wrong variant: {other:?}"),
        }
    }
}
