//! Player actions
//!
//! The menu maps one keyed line of input onto a closed set of actions; the
//! game loop matches on them exhaustively.

use thiserror::Error;

/// Everything the menu can do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Show the bag of holding. Does not consume the turn.
    Inventory,
    /// Move to the next room; refused while monsters remain.
    Advance,
    /// Show the hero's hit points. Does not consume the turn.
    HeroHp,
    /// Show the current foe's hit points. Does not consume the turn.
    FoeHp,
    /// Attack the current foe.
    Attack,
    /// Spend a potion to attack with one extra die.
    PotionAttack,
}

/// A menu selection the game refuses. Every one of these re-prompts
/// without consuming the turn.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ActionError {
    /// Input that maps to no menu entry.
    #[error("unrecognized selection {0:?}")]
    Unrecognized(String),
    /// Potion attack selected with no potion in the bag.
    #[error("No cheating...")]
    NoPotion,
    /// A foe-targeting action with no monster in the room.
    #[error("There is no foe here...")]
    NoFoe,
}

impl Action {
    /// Map one line of menu input onto an action.
    pub fn from_key(input: &str) -> Result<Self, ActionError> {
        match input.trim() {
            "1" => Ok(Action::Inventory),
            "2" => Ok(Action::Advance),
            "3" => Ok(Action::HeroHp),
            "4" => Ok(Action::FoeHp),
            "5" => Ok(Action::Attack),
            "6" => Ok(Action::PotionAttack),
            other => Err(ActionError::Unrecognized(other.to_string())),
        }
    }
}
