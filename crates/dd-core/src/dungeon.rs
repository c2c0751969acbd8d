//! Rooms and the dungeon
//!
//! A dungeon is an ordered run of rooms; the front room is always the one
//! the hero stands in. Cleared rooms are popped from the front, so the run
//! only ever shrinks.

use std::collections::VecDeque;

use strum::{Display, EnumIter};

use crate::monster::Monster;
use crate::rng::GameRng;

/// Room kinds. The capacity bounds how many monsters can spawn inside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum RoomKind {
    #[strum(serialize = "corridor")]
    Corridor,
    #[strum(serialize = "kitchen")]
    Kitchen,
    #[strum(serialize = "armory")]
    Armory,
    #[strum(serialize = "great hall")]
    GreatHall,
}

impl RoomKind {
    /// All kinds, for random generation.
    pub const ALL: [RoomKind; 4] = [
        RoomKind::Corridor,
        RoomKind::Kitchen,
        RoomKind::Armory,
        RoomKind::GreatHall,
    ];

    /// Maximum monster count for this kind of room.
    pub const fn capacity(self) -> u32 {
        match self {
            RoomKind::Corridor => 1,
            RoomKind::Kitchen => 2,
            RoomKind::Armory => 5,
            RoomKind::GreatHall => 10,
        }
    }
}

/// A discrete encounter unit containing zero or more monsters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub kind: RoomKind,
    /// The front monster is the current foe while the hero is here.
    pub monsters: Vec<Monster>,
}

impl Room {
    /// Generate a room: uniform kind, then 1..=capacity monsters.
    pub fn generate(rng: &mut GameRng) -> Self {
        let kind = RoomKind::ALL[rng.rn2(RoomKind::ALL.len() as u32) as usize];
        let count = rng.rnd(kind.capacity());
        let monsters = (0..count).map(|_| Monster::generate(rng)).collect();
        Self { kind, monsters }
    }

    pub fn is_cleared(&self) -> bool {
        self.monsters.is_empty()
    }

    pub fn foe(&self) -> Option<&Monster> {
        self.monsters.first()
    }

    pub fn foe_mut(&mut self) -> Option<&mut Monster> {
        self.monsters.first_mut()
    }

    /// Remove the front monster, if any.
    pub fn remove_foe(&mut self) -> Option<Monster> {
        if self.monsters.is_empty() {
            None
        } else {
            Some(self.monsters.remove(0))
        }
    }
}

/// The ordered sequence of rooms comprising one playthrough.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dungeon {
    rooms: VecDeque<Room>,
}

impl Dungeon {
    /// Generate a dungeon of 6..=9 rooms.
    pub fn generate(rng: &mut GameRng) -> Self {
        let count = 6 + rng.rn2(4);
        let rooms: VecDeque<Room> = (0..count).map(|_| Room::generate(rng)).collect();
        tracing::debug!(rooms = rooms.len(), "dungeon generated");
        Self { rooms }
    }

    /// Build a dungeon from explicit rooms (fixtures).
    pub fn from_rooms(rooms: impl IntoIterator<Item = Room>) -> Self {
        Self {
            rooms: rooms.into_iter().collect(),
        }
    }

    /// The room the hero stands in.
    pub fn current_room(&self) -> Option<&Room> {
        self.rooms.front()
    }

    pub fn current_room_mut(&mut self) -> Option<&mut Room> {
        self.rooms.front_mut()
    }

    /// Pop the current room. Callers check `is_cleared` on it first.
    pub fn advance(&mut self) -> Option<Room> {
        self.rooms.pop_front()
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monster::MonsterKind;

    #[test]
    fn capacity_table() {
        assert_eq!(RoomKind::Corridor.capacity(), 1);
        assert_eq!(RoomKind::Kitchen.capacity(), 2);
        assert_eq!(RoomKind::Armory.capacity(), 5);
        assert_eq!(RoomKind::GreatHall.capacity(), 10);
    }

    #[test]
    fn room_names() {
        assert_eq!(RoomKind::Corridor.to_string(), "corridor");
        assert_eq!(RoomKind::GreatHall.to_string(), "great hall");
    }

    #[test]
    fn generated_rooms_respect_capacity() {
        let mut rng = GameRng::new(42);
        for _ in 0..200 {
            let room = Room::generate(&mut rng);
            let count = room.monsters.len() as u32;
            assert!(count >= 1, "rooms always spawn at least one monster");
            assert!(count <= room.kind.capacity());
        }
    }

    #[test]
    fn generated_dungeon_size() {
        for seed in 0..50 {
            let mut rng = GameRng::new(seed);
            let dungeon = Dungeon::generate(&mut rng);
            assert!((6..=9).contains(&dungeon.len()));
        }
    }

    #[test]
    fn advance_pops_the_front_room() {
        let first = Room {
            kind: RoomKind::Corridor,
            monsters: vec![],
        };
        let second = Room {
            kind: RoomKind::Kitchen,
            monsters: vec![Monster {
                kind: MonsterKind::Rat,
                hp: 1,
                die: 1,
            }],
        };
        let mut dungeon = Dungeon::from_rooms([first.clone(), second.clone()]);
        assert_eq!(dungeon.len(), 2);
        assert_eq!(dungeon.advance(), Some(first));
        assert_eq!(dungeon.current_room(), Some(&second));
        assert_eq!(dungeon.len(), 1);
    }

    #[test]
    fn remove_foe_takes_the_front_monster() {
        let rat = Monster {
            kind: MonsterKind::Rat,
            hp: 0,
            die: 1,
        };
        let bat = Monster {
            kind: MonsterKind::Bat,
            hp: 1,
            die: 2,
        };
        let mut room = Room {
            kind: RoomKind::Kitchen,
            monsters: vec![rat.clone(), bat.clone()],
        };
        assert_eq!(room.remove_foe(), Some(rat));
        assert_eq!(room.foe(), Some(&bat));
        assert_eq!(room.remove_foe(), Some(bat));
        assert_eq!(room.remove_foe(), None);
        assert!(room.is_cleared());
    }
}
