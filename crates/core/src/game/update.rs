//! The per-tick world loop.
//!
//! One `update` call per unpaused frame: the player acts first if a move is
//! pending and the move gate opens, then every opponent takes its turn in
//! arena order, then win/lose is latched and everything flagged for erasure
//! is swept out.

use crate::content::PURSUIT_RADIUS;
use crate::game::pathfinding::next_step_toward;
use crate::state::GameState;
use crate::types::{LogEvent, OpponentId, RunOutcome};

use super::Game;

impl Game {
    pub fn update(&mut self) {
        if self.paused || self.outcome.is_some() {
            return;
        }
        self.player_turn();
        self.opponent_turns();
        self.latch_outcome();
        self.sweep();
        self.tick += 1;
    }

    fn player_turn(&mut self) {
        if self.state.player.pending_direction.is_none() {
            return;
        }
        if !self.state.player.timer.poll_move() {
            return;
        }
        let Some(direction) = self.state.player.pending_direction.take() else {
            return;
        };
        let requested = self.state.player.pos.step(direction);
        if self.resolve_player_step(requested) {
            self.trigger_events();
        }
    }

    /// Fires every map event covering the cell the player just reached.
    fn trigger_events(&mut self) {
        let GameState { player, events, .. } = &mut self.state;
        for event in events.iter_mut() {
            if !event.erase && event.area.contains(&player.pos) {
                event.trigger(player, &mut self.log);
            }
        }
    }

    fn opponent_turns(&mut self) {
        let ids: Vec<OpponentId> = self.state.opponents.keys().collect();
        for id in ids {
            if self.state.opponents[id].erase {
                continue;
            }
            if !self.state.opponents[id].timer.poll_move() {
                continue;
            }
            // Each opponent paths against a snapshot taken after everyone
            // before it has already moved.
            let grid = self.state.obstacle_snapshot();
            let origin = self.state.opponents[id].pos;
            let player_pos = self.state.player.pos;
            let path_step = next_step_toward(&grid, origin, player_pos, PURSUIT_RADIUS);

            let requested = {
                let GameState { opponents, .. } = &mut self.state;
                opponents[id].plan_step(path_step, player_pos, &mut self.rng)
            };
            self.resolve_opponent_step(id, requested);
        }
    }

    fn latch_outcome(&mut self) {
        if self.outcome.is_some() {
            return;
        }
        if !self.state.player.stats.alive {
            self.log.push(LogEvent::GameOver);
            self.outcome = Some(RunOutcome::Defeat);
        } else if self.state.player.quest_complete {
            self.log.push(LogEvent::QuestComplete);
            self.outcome = Some(RunOutcome::Victory);
        }
    }

    /// End-of-tick erasure sweep; nothing disappears mid-resolution.
    fn sweep(&mut self) {
        self.state.opponents.retain(|_, opponent| !opponent.erase);
        self.state.props.retain(|_, prop| !prop.erase);
        self.state.events.retain(|event| !event.erase);
    }
}
