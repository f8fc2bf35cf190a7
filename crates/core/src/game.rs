//! The `Game` orchestrator: owns the world, the RNG and the log, consumes
//! commands, and advances one tick per `update` call.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;

use crate::content::{self, ContentPack, GRID_HEIGHT, GRID_WIDTH};
use crate::dialogue::{self, DialogueScript};
use crate::mapfile;
use crate::state::{GameState, Map};
use crate::types::{Command, GameError, LogEvent, RunOutcome};

pub mod combat;
pub mod door;
pub mod events;
pub mod items;
pub mod pathfinding;
pub mod prop;
pub mod schedule;

mod collision;
mod hash;
mod perception;
mod update;

#[cfg(test)]
mod test_support;

pub struct Game {
    seed: u64,
    tick: u64,
    rng: ChaCha8Rng,
    state: GameState,
    log: Vec<LogEvent>,
    paused: bool,
    outcome: Option<RunOutcome>,
}

impl Game {
    /// Builds the world from the content pack. A malformed map or dialogue
    /// file is not fatal: the failure is logged and an empty stand-in is
    /// used instead.
    pub fn new(seed: u64, pack: &ContentPack) -> Self {
        let mut log = Vec::new();
        let map = match mapfile::parse_map(&pack.map_text) {
            Ok(map) => map,
            Err(e) => {
                log.push(LogEvent::LoadFailure(e.to_string()));
                Map::open(GRID_WIDTH, GRID_HEIGHT)
            }
        };
        let script = match dialogue::parse_script(&pack.dialogue_text) {
            Ok(script) => script,
            Err(e) => {
                log.push(LogEvent::LoadFailure(e.to_string()));
                DialogueScript::default()
            }
        };
        let state = content::build_state(map, script);
        log.push(LogEvent::Narration(
            "You wake on the windy heath. The cave mouth gapes to the east.".to_string(),
        ));
        Self {
            seed,
            tick: 0,
            rng: ChaCha8Rng::seed_from_u64(seed),
            state,
            log,
            paused: false,
            outcome: None,
        }
    }

    /// Applies one player command. Movement only registers an intent; it is
    /// resolved by the next `update` when the move gate opens.
    pub fn handle_command(&mut self, command: Command) -> Result<(), GameError> {
        match command {
            Command::TogglePause => {
                self.paused = !self.paused;
                self.log.push(LogEvent::Paused(self.paused));
                Ok(())
            }
            Command::Move(direction) => {
                if !self.paused && self.outcome.is_none() {
                    self.state.player.pending_direction = Some(direction);
                }
                Ok(())
            }
            Command::ShowStatus => {
                let stats = &self.state.player.stats;
                self.log.push(LogEvent::StatusReport {
                    hp: stats.hp,
                    max_hp: stats.max_hp,
                    xp: self.state.player.xp,
                });
                Ok(())
            }
            Command::ShowInventory => {
                let lines = self.state.player.inventory_lines();
                self.log.push(LogEvent::InventoryListing(lines));
                Ok(())
            }
            Command::SelectItem(slot) => {
                self.state.player.select_item(slot, &mut self.log)
            }
        }
    }

    pub fn current_tick(&self) -> u64 {
        self.tick
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Mutable world access for headless tooling and test setup.
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn log(&self) -> &[LogEvent] {
        &self.log
    }

    /// Hands the accumulated log to the caller and clears it.
    pub fn drain_log(&mut self) -> Vec<LogEvent> {
        std::mem::take(&mut self.log)
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn outcome(&self) -> Option<RunOutcome> {
        self.outcome
    }
}
