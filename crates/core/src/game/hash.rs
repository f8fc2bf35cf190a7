//! Stable snapshot hashing for deterministic verification.

use std::hash::Hasher;

use xxhash_rust::xxh3::Xxh3;

use crate::types::AiState;

use super::Game;

impl Game {
    /// Order-stable digest of the observable world state. Two runs with the
    /// same seed and the same command script must produce the same hash at
    /// the same tick.
    pub fn snapshot_hash(&self) -> u64 {
        let mut hasher = Xxh3::new();
        hasher.write_u64(self.seed);
        hasher.write_u64(self.tick);

        let player = &self.state.player;
        hasher.write_i32(player.pos.y);
        hasher.write_i32(player.pos.x);
        hasher.write_i32(player.stats.hp);
        hasher.write_i32(player.xp);
        hasher.write_u8(u8::from(player.has_key));
        hasher.write_u8(u8::from(player.has_relic));
        hasher.write_u8(u8::from(player.quest_complete));
        hasher.write_usize(player.inventory.len());
        for item in &player.inventory {
            hasher.write(item.name.as_bytes());
            hasher.write_i32(item.count);
        }

        for opponent in self.state.opponents.values() {
            hasher.write_i32(opponent.pos.y);
            hasher.write_i32(opponent.pos.x);
            hasher.write_i32(opponent.stats.hp);
            hasher.write_u8(match opponent.ai {
                AiState::Dead => 0,
                AiState::Idle => 1,
                AiState::Searching => 2,
                AiState::Engaging => 3,
            });
        }

        hasher.write_usize(self.state.props.len());
        for door in &self.state.doors {
            hasher.write_i32(door.anchor.y);
            hasher.write_i32(door.anchor.x);
            hasher.write_u8(door.state as u8);
        }
        hasher.finish()
    }
}
