//! Menu loop driver
//!
//! Reads one line per prompt, prints narration, and hands actions to the
//! core loop. Rejected selections re-prompt locally; only turn-ending
//! actions hand control back to the game loop.

use std::io::{BufRead, Write};

use anyhow::{Context, Result, bail};
use dd_core::action::{Action, ActionError};
use dd_core::{GameState, LoopResult, TurnOutcome};

/// Scene-setting narration shown once at startup.
pub const INTRO: &str = "\
You find yourself in a dungeon. It is dark, damp,
and the bricks, worn smooth, make you think it's very old.
You have no idea how you got to this place. In fact, your
memory is generally hazy. Your head hurts.
And you hear strange noises...

You are approached by a monster!
";

/// Line-oriented driver around a `GameState`.
pub struct App {
    state: GameState,
}

impl App {
    pub fn new(state: GameState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Play to completion. Returns how the game ended.
    pub fn run<R: BufRead, W: Write>(&mut self, input: &mut R, out: &mut W) -> Result<LoopResult> {
        writeln!(out, "{INTRO}")?;
        loop {
            let begun = self.state.begin_turn();
            self.flush_narration(out)?;
            match begun {
                LoopResult::Continue => {}
                ended => return Ok(ended),
            }
            if self.menu(input, out)? == TurnOutcome::Victory {
                return Ok(LoopResult::Victory);
            }
            let finished = self.state.finish_turn();
            self.flush_narration(out)?;
            match finished {
                LoopResult::Continue => {}
                ended => return Ok(ended),
            }
        }
    }

    /// Present the menu until the player spends the turn.
    fn menu<R: BufRead, W: Write>(&mut self, input: &mut R, out: &mut W) -> Result<TurnOutcome> {
        loop {
            self.render_menu(out)?;
            let line = read_line(input)?;
            writeln!(out)?;
            let Ok(action) = Action::from_key(&line) else {
                // Unrecognized selection: re-prompt, no turn spent.
                continue;
            };
            match self.state.apply_action(action) {
                Ok(TurnOutcome::Menu) => self.flush_narration(out)?,
                Ok(done) => {
                    self.flush_narration(out)?;
                    return Ok(done);
                }
                Err(rejected @ (ActionError::NoPotion | ActionError::NoFoe)) => {
                    writeln!(out, "{rejected}")?;
                }
                // from_key already filtered these out.
                Err(ActionError::Unrecognized(_)) => {}
            }
        }
    }

    fn render_menu<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "1. Check inventory.")?;
        writeln!(out, "2. Next room. (Note: Allows attacks of opportunity.)")?;
        writeln!(out, "3. Check HP.")?;
        writeln!(out, "4. Check enemy HP.")?;
        writeln!(out, "5. Attack.")?;
        if self.state.hero.has_potion() {
            writeln!(out, "6. Attack with potion.")?;
        }
        write!(out, ">>: ")?;
        out.flush()?;
        Ok(())
    }

    fn flush_narration<W: Write>(&mut self, out: &mut W) -> Result<()> {
        for msg in self.state.drain_messages() {
            writeln!(out, "{msg}")?;
        }
        Ok(())
    }
}

fn read_line<R: BufRead>(input: &mut R) -> Result<String> {
    let mut line = String::new();
    let n = input
        .read_line(&mut line)
        .context("reading menu selection")?;
    if n == 0 {
        bail!("input stream closed");
    }
    Ok(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dd_core::GameRng;
    use dd_core::dungeon::{Dungeon, Room, RoomKind};
    use dd_core::hero::Hero;

    fn cleared_game() -> GameState {
        GameState {
            hero: Hero::new(),
            dungeon: Dungeon::from_rooms(vec![Room {
                kind: RoomKind::Corridor,
                monsters: vec![],
            }]),
            rng: GameRng::new(42),
            order: None,
            messages: Vec::new(),
        }
    }

    #[test]
    fn empty_final_room_plays_out_to_victory() {
        let mut app = App::new(cleared_game());
        // Turn 1: room is empty, advance out of it, dungeon cleared.
        let mut input = b"2\n".as_slice();
        let mut out = Vec::new();
        let result = app.run(&mut input, &mut out).unwrap();
        assert_eq!(result, LoopResult::Victory);
        let transcript = String::from_utf8(out).unwrap();
        assert!(transcript.contains("Room is empty..."));
        assert!(transcript.contains("YOU'VE WON!"));
    }

    #[test]
    fn junk_input_re_prompts_without_spending_the_turn() {
        let mut app = App::new(cleared_game());
        let mut input = b"banana\n9\n2\n".as_slice();
        let mut out = Vec::new();
        let result = app.run(&mut input, &mut out).unwrap();
        assert_eq!(result, LoopResult::Victory);
        let transcript = String::from_utf8(out).unwrap();
        // Three prompts: two junk lines, then the real move.
        assert_eq!(transcript.matches(">>: ").count(), 3);
    }

    #[test]
    fn potion_option_hidden_without_a_potion() {
        let mut game = cleared_game();
        game.hero.bag.clear();
        let mut app = App::new(game);
        let mut input = b"2\n".as_slice();
        let mut out = Vec::new();
        app.run(&mut input, &mut out).unwrap();
        let transcript = String::from_utf8(out).unwrap();
        assert!(!transcript.contains("6. Attack with potion."));
        assert!(transcript.contains("5. Attack."));
    }

    #[test]
    fn closed_input_is_an_error() {
        let mut app = App::new(cleared_game());
        let mut input = b"".as_slice();
        let mut out = Vec::new();
        let err = app.run(&mut input, &mut out).unwrap_err();
        assert!(err.to_string().contains("input stream closed"));
    }

    #[test]
    fn info_actions_do_not_spend_the_turn() {
        let mut app = App::new(cleared_game());
        // Inventory, then HP, then move out.
        let mut input = b"1\n3\n2\n".as_slice();
        let mut out = Vec::new();
        let result = app.run(&mut input, &mut out).unwrap();
        assert_eq!(result, LoopResult::Victory);
        let transcript = String::from_utf8(out).unwrap();
        assert!(transcript.contains("Inventory: Potion"));
        assert!(transcript.contains("Your HP: 10"));
    }
}
