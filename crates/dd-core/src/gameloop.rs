//! Main game loop
//!
//! The loop owns an explicit `GameState` and reports a tri-state
//! `LoopResult` up to a single caller, which decides the process exit; win
//! and loss never short-circuit from inside game logic.
//!
//! A turn has three phases. `begin_turn` announces the situation and lets a
//! foe holding the initiative strike. The frontend then runs the menu,
//! feeding `apply_action` until an action consumes the turn. `finish_turn`
//! clears out a slain foe or lets a live one counter-attack.

use crate::action::{Action, ActionError};
use crate::combat::{self, Initiative, Role, Verdict};
use crate::dungeon::Dungeon;
use crate::hero::Hero;
use crate::item::TREASURES;
use crate::monster::Monster;
use crate::rng::GameRng;

/// Result of a game-loop phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopResult {
    /// Keep playing.
    Continue,
    /// The dungeon has been cleared.
    Victory,
    /// The hero is dead.
    Defeat,
}

/// What the menu loop should do after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The action did not consume the turn; present the menu again.
    Menu,
    /// The turn is over; control returns to the game loop.
    Over,
    /// The last room was vacated; the game is won.
    Victory,
}

/// The whole game: hero, dungeon, randomness, and pending narration.
///
/// Constructed by the entry point and passed down; nothing lives in
/// globals. Narration is pushed here and drained by the frontend.
#[derive(Debug, Clone)]
pub struct GameState {
    pub hero: Hero,
    pub dungeon: Dungeon,
    pub rng: GameRng,
    /// Turn order for the current encounter. None outside an encounter;
    /// rolled afresh when a new foe steps up.
    pub order: Option<Initiative>,
    /// Narration for the frontend, in emission order.
    pub messages: Vec<String>,
}

impl GameState {
    /// Generate a fresh game from the given RNG.
    pub fn new(mut rng: GameRng) -> Self {
        let dungeon = Dungeon::generate(&mut rng);
        Self {
            hero: Hero::new(),
            dungeon,
            rng,
            order: None,
            messages: Vec::new(),
        }
    }

    /// Take the pending narration, oldest first.
    pub fn drain_messages(&mut self) -> Vec<String> {
        std::mem::take(&mut self.messages)
    }

    fn say(&mut self, msg: impl Into<String>) {
        self.messages.push(msg.into());
    }

    /// The monster the hero is facing, if any.
    pub fn current_foe(&self) -> Option<&Monster> {
        self.dungeon.current_room().and_then(|room| room.foe())
    }

    /// Top of the loop: announce the situation and let the foe strike if it
    /// holds the initiative. A new foe rolls initiative exactly once.
    pub fn begin_turn(&mut self) -> LoopResult {
        if self.dungeon.is_empty() {
            return LoopResult::Victory;
        }
        let foe_info = self.current_foe().map(|foe| (foe.kind, foe.die));
        let Some((kind, foe_die)) = foe_info else {
            self.order = None;
            self.say("Room is empty...");
            return LoopResult::Continue;
        };
        self.say(format!("FOE: {kind}"));
        if self.order.is_none() {
            self.order = Some(combat::roll_initiative(
                &mut self.rng,
                self.hero.die,
                foe_die,
            ));
        }
        if self.order == Some(Initiative::FoeFirst) {
            self.say(format!("{kind} attacks!"));
            self.foe_attacks_hero();
            if self.hero.is_dead() {
                return LoopResult::Defeat;
            }
        }
        LoopResult::Continue
    }

    /// One menu selection. Info actions and rejections leave the turn open.
    pub fn apply_action(&mut self, action: Action) -> Result<TurnOutcome, ActionError> {
        match action {
            Action::Inventory => {
                let listing = self
                    .hero
                    .bag
                    .iter()
                    .map(|item| item.to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                self.say(format!("Inventory: {listing}"));
                Ok(TurnOutcome::Menu)
            }
            Action::HeroHp => {
                self.say(format!("Your HP: {}", self.hero.hp));
                Ok(TurnOutcome::Menu)
            }
            Action::FoeHp => {
                let hp = self.current_foe().ok_or(ActionError::NoFoe)?.hp;
                self.say(format!("Enemy HP: {hp}"));
                Ok(TurnOutcome::Menu)
            }
            Action::Advance => Ok(self.advance()),
            Action::Attack => {
                self.hero_attacks_foe(self.hero.die)?;
                Ok(TurnOutcome::Over)
            }
            Action::PotionAttack => {
                if !self.hero.has_potion() {
                    return Err(ActionError::NoPotion);
                }
                // NoFoe must bounce before the potion is spent.
                self.hero_attacks_foe(self.hero.die + 1)?;
                self.hero.spend_potion();
                Ok(TurnOutcome::Over)
            }
        }
    }

    /// Post-menu bookkeeping: remove a slain foe, or let a live one
    /// counter-attack.
    pub fn finish_turn(&mut self) -> LoopResult {
        if self.order.is_none() {
            // No encounter this turn: the room was empty at `begin_turn`,
            // or the hero just walked into a fresh room.
            return LoopResult::Continue;
        }
        let foe_state = self.current_foe().map(|foe| (foe.kind, foe.is_dead()));
        let Some((kind, dead)) = foe_state else {
            return LoopResult::Continue;
        };
        if dead {
            if let Some(room) = self.dungeon.current_room_mut() {
                room.remove_foe();
            }
            // The next foe, if any, rolls fresh initiative.
            self.order = None;
        } else {
            self.say(format!("{kind} attacks!"));
            self.foe_attacks_hero();
            if self.hero.is_dead() {
                return LoopResult::Defeat;
            }
        }
        LoopResult::Continue
    }

    /// Movement. Refused while monsters remain; the refusal still consumes
    /// the turn, which is what exposes the hero to the attack of
    /// opportunity. Otherwise pop the room, maybe find treasure, and either
    /// win or announce the next room.
    fn advance(&mut self) -> TurnOutcome {
        let cleared = self
            .dungeon
            .current_room()
            .map(|room| room.is_cleared())
            .unwrap_or(false);
        if !cleared {
            self.say("There are still monsters here...");
            return TurnOutcome::Over;
        }
        self.dungeon.advance();
        self.order = None;
        if self.rng.one_in(2) {
            let found = TREASURES[self.rng.rn2(TREASURES.len() as u32) as usize];
            self.hero.bag.push(found);
            self.say(format!(
                "You find {found} and put it in your bag of holding."
            ));
        }
        match self.dungeon.current_room().map(|room| room.kind) {
            None => {
                self.say("YOU'VE WON!");
                TurnOutcome::Victory
            }
            Some(kind) => {
                self.say(format!("You have entered a {kind}"));
                TurnOutcome::Over
            }
        }
    }

    /// Foe-to-hero attack. No-op without a foe or with the hero already
    /// down.
    fn foe_attacks_hero(&mut self) {
        let Some(foe_die) = self.current_foe().map(|foe| foe.die) else {
            return;
        };
        if self.hero.is_dead() {
            return;
        }
        let (att, def) = combat::attack_maxima(&mut self.rng, foe_die, self.hero.die);
        if Verdict::judge(att, def, Role::Monster).is_hit() {
            self.hero.take_hit();
            self.say("Attack hits!");
        } else {
            self.say("Defended!");
        }
        if self.hero.is_dead() {
            self.say("You Died.");
        }
    }

    /// Hero-to-foe attack with the given pool size. A foe already at 0 hp
    /// absorbs nothing; the call is a no-op.
    fn hero_attacks_foe(&mut self, die: u32) -> Result<(), ActionError> {
        let Some((foe_hp, foe_die)) = self.current_foe().map(|foe| (foe.hp, foe.die)) else {
            return Err(ActionError::NoFoe);
        };
        if foe_hp == 0 {
            return Ok(());
        }
        let (att, def) = combat::attack_maxima(&mut self.rng, die, foe_die);
        match Verdict::judge(att, def, Role::Hero) {
            Verdict::Hit => {
                self.hurt_foe();
                self.say("Attack hits!");
            }
            Verdict::HeroEdge => {
                self.hurt_foe();
                self.say("Attack hits! (Hero advantage)");
            }
            Verdict::Defended => {
                self.say("Defended!");
            }
        }
        if self.current_foe().is_some_and(Monster::is_dead) {
            self.say("Victory Achieved.");
        }
        Ok(())
    }

    fn hurt_foe(&mut self) {
        if let Some(foe) = self.dungeon.current_room_mut().and_then(|room| room.foe_mut()) {
            foe.take_hit();
        }
    }
}
