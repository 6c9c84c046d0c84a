//! Session content model: ordered screens of typed interactive actions.
//!
//! This is a data contract, not a state machine. A [`crate::content::Screen`]
//! holds an ordered list of [`Action`]s; each action is one variant of a
//! closed tagged union selected by its `type` field. The model has no
//! behavior beyond validated (de)serialization -- screens are persisted as
//! JSONB and returned to the client verbatim.

mod action;
mod screen;
mod word;

pub use action::{
    Action, ActionType, Alignment, ChatPosition, ChoiceOption, ChoiceSegment, ColumnBlock,
    MatchPair, MatchSide, ReorderItem, SentenceSegment,
};
pub use screen::{Screen, TemplateScreen};
pub use word::Word;
