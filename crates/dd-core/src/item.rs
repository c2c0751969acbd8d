//! Items and treasure
//!
//! The bag of holding is a flat list of these. Only the potion has a
//! mechanical effect; the rest are trophies.

use strum::{Display, EnumIter};

/// Everything that can sit in the hero's bag of holding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Item {
    Potion,
    #[strum(serialize = "Eye of the Tiger")]
    EyeOfTheTiger,
    #[strum(serialize = "Sword of Omens")]
    SwordOfOmens,
    Gold,
    #[strum(serialize = "Wall Chicken")]
    WallChicken,
    #[strum(serialize = "Old Toby")]
    OldToby,
    #[strum(serialize = "Old Greg")]
    OldGreg,
}

/// Treasure table for cleared rooms. The potion is on it too, so a lucky
/// find re-arms the potion attack.
pub const TREASURES: [Item; 7] = [
    Item::EyeOfTheTiger,
    Item::SwordOfOmens,
    Item::Gold,
    Item::WallChicken,
    Item::OldToby,
    Item::OldGreg,
    Item::Potion,
];
