use serde::{Deserialize, Serialize};

use crate::content::action::{Action, ActionType};
use crate::types::DbId;

/// An ordered container of actions within a session.
///
/// `template_id` optionally references the session template this screen was
/// authored from; the reference is resolved by the caller, never expanded
/// at read time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Screen {
    pub sequence: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_id: Option<DbId>,
    pub actions: Vec<Action>,
}

/// One screen slot in a session template: the position and the action
/// types a session authored from the template should fill in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateScreen {
    pub sequence: i32,
    pub action_types: Vec<ActionType>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::word::Word;
    use crate::content::Alignment;

    #[test]
    fn screen_round_trips_with_nested_actions() {
        let screen = Screen {
            sequence: 0,
            template_id: Some(7),
            actions: vec![Action::Explain {
                sequence: 0,
                words: vec![Word::plain("Hallo")],
                align: Alignment::Center,
                font_size: 18,
            }],
        };

        let json = serde_json::to_value(&screen).unwrap();
        assert_eq!(json["templateId"], 7);
        assert_eq!(json["actions"][0]["type"], "explain");
        assert_eq!(json["actions"][0]["fontSize"], 18);

        let back: Screen = serde_json::from_value(json).unwrap();
        assert_eq!(back, screen);
    }

    #[test]
    fn template_screen_rejects_unknown_action_type() {
        let payload = serde_json::json!({
            "sequence": 0,
            "actionTypes": ["choice", "karaoke"],
        });
        assert!(serde_json::from_value::<TemplateScreen>(payload).is_err());
    }
}
