//! Shared test fixtures for the `game` submodule test suites.

use std::collections::VecDeque;
use std::convert::Infallible;

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::{SeedableRng, TryRng};
use slotmap::SlotMap;

use crate::game::combat::CombatStats;
use crate::game::schedule::TurnTimer;
use crate::state::{GameState, Map, Opponent, Player};
use crate::types::{AiState, Faction, OpponentId, Pos};

use super::Game;

/// Replays a fixed list of raw `u32` rolls, then zeroes. Lets tests pin down
/// every random decision without touching the real generator.
pub(super) struct ScriptedRng {
    rolls: VecDeque<u32>,
}

impl ScriptedRng {
    pub(super) fn new(rolls: &[u32]) -> Self {
        Self { rolls: rolls.iter().copied().collect() }
    }
}

// The infallible `TryRng` impl gives us `Rng` through the blanket impl.
impl TryRng for ScriptedRng {
    type Error = Infallible;

    fn try_next_u32(&mut self) -> Result<u32, Infallible> {
        Ok(self.rolls.pop_front().unwrap_or(0))
    }

    fn try_next_u64(&mut self) -> Result<u64, Infallible> {
        Ok(u64::from(self.try_next_u32()?))
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Infallible> {
        for byte in dest.iter_mut() {
            *byte = self.try_next_u32()? as u8;
        }
        Ok(())
    }
}

pub(super) fn scripted(rolls: &[u32]) -> ScriptedRng {
    ScriptedRng::new(rolls)
}

pub(super) fn test_player(pos: Pos) -> Player {
    Player::new(
        pos,
        CombatStats::new("You", Faction::Friendly, 30, 10, 6, 10, 0),
        TurnTimer::new(20, 10, 4),
    )
}

pub(super) fn test_opponent(pos: Pos) -> Opponent {
    Opponent {
        id: OpponentId::default(),
        pos,
        stats: CombatStats::new("Orc", Faction::Hostile, 8, 6, 6, 1, 15),
        timer: TurnTimer::new(20, 1, 4),
        perception: 10,
        ai: AiState::Idle,
        erase: false,
    }
}

/// An empty all-floor world with the player at (1, 1) and nothing else.
pub(super) fn bare_game(width: usize, height: usize) -> Game {
    Game {
        seed: 0,
        tick: 0,
        rng: ChaCha8Rng::seed_from_u64(0),
        state: GameState {
            map: Map::open(width, height),
            player: test_player(Pos { y: 1, x: 1 }),
            opponents: SlotMap::with_key(),
            props: SlotMap::with_key(),
            doors: Vec::new(),
            events: Vec::new(),
        },
        log: Vec::new(),
        paused: false,
        outcome: None,
    }
}
