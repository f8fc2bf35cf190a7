//! Opponent awareness and movement intent.
//!
//! Each opponent runs a small state machine per tick: corpses stay put, idle
//! opponents wait, searching opponents wander, engaging opponents follow the
//! pathfinder. Awareness is a perception roll against the Manhattan distance
//! to the player, so detection is probabilistic and fades with range.

use rand_chacha::rand_core::Rng;

use crate::game::combat::uniform;
use crate::game::pathfinding::manhattan;
use crate::state::Opponent;
use crate::types::{AiState, Pos};

impl Opponent {
    /// Runs the awareness transition, then picks the cell this opponent wants
    /// to step to. `path_step` is the pathfinder's suggestion toward the
    /// player, computed against a fresh obstacle snapshot.
    pub fn plan_step(
        &mut self,
        path_step: Pos,
        player_pos: Pos,
        rng: &mut impl Rng,
    ) -> Pos {
        self.update_awareness(path_step, player_pos, rng);
        match self.ai {
            AiState::Dead | AiState::Idle => self.pos,
            AiState::Searching => brownian_step(self.pos, rng),
            AiState::Engaging => path_step,
        }
    }

    fn update_awareness(
        &mut self,
        path_step: Pos,
        player_pos: Pos,
        rng: &mut impl Rng,
    ) {
        if !self.stats.alive {
            self.ai = AiState::Dead;
            return;
        }
        let dist = manhattan(self.pos, player_pos);
        // Rolled unconditionally so RNG consumption does not depend on the
        // branch taken.
        let roll = uniform(rng, self.perception);

        // A pathfinder that cannot make progress means the player is
        // unreachable from here; drop back to waiting.
        if path_step == self.pos {
            self.ai = AiState::Idle;
            return;
        }
        if roll >= dist {
            self.ai = AiState::Engaging;
            return;
        }
        match self.ai {
            AiState::Engaging if dist > self.perception => {
                self.ai = AiState::Searching;
            }
            AiState::Idle if dist <= self.perception => {
                self.ai = AiState::Searching;
            }
            _ => {}
        }
    }
}

/// Uniform pick among staying put and the four cardinal steps.
fn brownian_step(pos: Pos, rng: &mut impl Rng) -> Pos {
    match uniform(rng, 5) {
        1 => Pos { y: pos.y - 1, x: pos.x },
        2 => Pos { y: pos.y + 1, x: pos.x },
        3 => Pos { y: pos.y, x: pos.x - 1 },
        4 => Pos { y: pos.y, x: pos.x + 1 },
        _ => pos,
    }
}
