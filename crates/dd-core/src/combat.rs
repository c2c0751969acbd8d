//! Combat resolution
//!
//! Initiative and attacks are both contests between the best face of each
//! side's dice pool. The rolling stage is kept apart from the judging stage
//! so the policy can be tested without an RNG.

use crate::dice;
use crate::rng::GameRng;

/// Which side of a contest a combatant is on. Ties read differently for
/// each.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Hero,
    Monster,
}

/// Turn order for an encounter, fixed once per foe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Initiative {
    HeroFirst,
    FoeFirst,
}

impl Initiative {
    /// Ties favor the hero.
    pub fn from_maxima(hero_max: u8, foe_max: u8) -> Self {
        if hero_max >= foe_max {
            Initiative::HeroFirst
        } else {
            Initiative::FoeFirst
        }
    }
}

/// Roll opposed pools and fix the turn order for a new encounter.
pub fn roll_initiative(rng: &mut GameRng, hero_die: u32, foe_die: u32) -> Initiative {
    let hero_max = dice::best_face(rng, hero_die);
    let foe_max = dice::best_face(rng, foe_die);
    let order = Initiative::from_maxima(hero_max, foe_max);
    tracing::debug!(hero_max, foe_max, ?order, "initiative rolled");
    order
}

/// Outcome of a single attack contest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The attacker's best face beat the defender's.
    Hit,
    /// Equal best faces with the hero attacking; still a hit.
    HeroEdge,
    /// Everything else: the defender holds.
    Defended,
}

impl Verdict {
    /// Judge an attack from the two pool maxima. Ties favor the hero only
    /// when the hero is the attacker.
    pub fn judge(attacker_max: u8, defender_max: u8, attacker: Role) -> Self {
        if attacker_max > defender_max {
            Verdict::Hit
        } else if attacker_max == defender_max && attacker == Role::Hero {
            Verdict::HeroEdge
        } else {
            Verdict::Defended
        }
    }

    pub fn is_hit(self) -> bool {
        matches!(self, Verdict::Hit | Verdict::HeroEdge)
    }
}

/// Roll the opposed pool maxima for one attack.
pub fn attack_maxima(rng: &mut GameRng, attacker_die: u32, defender_die: u32) -> (u8, u8) {
    let attacker_max = dice::best_face(rng, attacker_die);
    let defender_max = dice::best_face(rng, defender_die);
    tracing::debug!(attacker_max, defender_max, "attack rolled");
    (attacker_max, defender_max)
}
