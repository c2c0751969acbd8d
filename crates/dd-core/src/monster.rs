//! Monsters
//!
//! Monster kinds are a closed vocabulary with fixed starting hit points;
//! everything else about an instance is rolled at spawn time.

use strum::{Display, EnumIter};

use crate::rng::GameRng;

/// Monster species.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum MonsterKind {
    Rat,
    Bat,
    Ghoul,
    Zombie,
    Bandit,
    Golem,
}

impl MonsterKind {
    /// All kinds, for random generation.
    pub const ALL: [MonsterKind; 6] = [
        MonsterKind::Rat,
        MonsterKind::Bat,
        MonsterKind::Ghoul,
        MonsterKind::Zombie,
        MonsterKind::Bandit,
        MonsterKind::Golem,
    ];

    /// Starting hit points for this kind.
    pub const fn starting_hp(self) -> i32 {
        match self {
            MonsterKind::Rat | MonsterKind::Bat => 1,
            MonsterKind::Ghoul | MonsterKind::Zombie | MonsterKind::Bandit => 2,
            MonsterKind::Golem => 3,
        }
    }
}

/// An enemy combatant occupying a room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Monster {
    pub kind: MonsterKind,
    pub hp: i32,
    /// Size of the monster's combat pool, 1 or 2.
    pub die: u32,
}

impl Monster {
    /// Spawn a random monster: uniform kind, die count 1 or 2.
    pub fn generate(rng: &mut GameRng) -> Self {
        let kind = MonsterKind::ALL[rng.rn2(MonsterKind::ALL.len() as u32) as usize];
        let die = rng.rnd(2);
        Self {
            kind,
            hp: kind.starting_hp(),
            die,
        }
    }

    /// A landed hit removes exactly one hit point, clamped at 0.
    pub fn take_hit(&mut self) {
        self.hp = (self.hp - 1).max(0);
    }

    pub fn is_dead(&self) -> bool {
        self.hp <= 0
    }
}
