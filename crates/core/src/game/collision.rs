//! Layered collision-and-interaction resolution.
//!
//! A requested step is checked against the world in fixed precedence: the
//! grid edge, then terrain, then an opposing combatant, then interactive
//! objects, then doors. The first layer that blocks wins; bumping into
//! something is how fighting, looting, talking and door handling happen.

use crate::game::combat::{resolve_attack, AttackOutcome};
use crate::game::door::log_reply;
use crate::game::items::roll_loot;
use crate::game::prop;
use crate::state::{GameState, Prop};
use crate::types::{LogEvent, OpponentId, Pos, PropId};

use super::Game;

impl Game {
    /// Resolves one requested player step. Returns whether the player
    /// actually moved.
    pub(super) fn resolve_player_step(&mut self, requested: Pos) -> bool {
        if !self.state.map.in_bounds(requested) {
            return false;
        }
        if self.state.map.blocks(requested) {
            return false;
        }

        // A blocking layer does not shadow the ones beneath it: every layer
        // still runs its interaction side effects, and only the final
        // blocked decision short-circuits. Loot can sit under an opponent.
        let mut blocked = false;
        if let Some(id) = self.opponent_at(requested) {
            self.player_bumps_opponent(id);
            blocked = true;
        }

        if let Some(id) = self.prop_at(requested) {
            let GameState { player, props, .. } = &mut self.state;
            let target = &mut props[id];
            prop::interact(player, target, &mut self.log);
            blocked |= target.blocks_path;
        }

        for door in &mut self.state.doors {
            if door.occupies(requested) {
                let reply = door.interact(self.state.player.has_key);
                log_reply(reply, &mut self.log);
                blocked = true;
            }
        }

        if blocked {
            return false;
        }
        self.state.player.pos = requested;
        true
    }

    /// Resolves one requested opponent step. Opponents fight the player on
    /// contact but treat everything else purely as an obstacle.
    pub(super) fn resolve_opponent_step(&mut self, id: OpponentId, requested: Pos) {
        if requested == self.state.opponents[id].pos {
            return;
        }
        if !self.state.map.in_bounds(requested) || self.state.map.blocks(requested) {
            return;
        }

        if requested == self.state.player.pos {
            self.opponent_bumps_player(id);
            return;
        }
        if self.opponent_at(requested).is_some() {
            return;
        }
        if let Some(prop_id) = self.prop_at(requested) {
            if self.state.props[prop_id].blocks_path {
                return;
            }
        }
        if self.state.doors.iter().any(|door| door.occupies(requested)) {
            return;
        }
        self.state.opponents[id].pos = requested;
    }

    fn player_bumps_opponent(&mut self, id: OpponentId) {
        if !self.state.player.timer.poll_attack() {
            return;
        }
        let attack = self.state.player.attack_value();

        let opponent = &mut self.state.opponents[id];
        let defense = opponent.stats.defense_base;
        let outcome = resolve_attack(attack, defense, &mut opponent.stats, &mut self.rng);
        let name = opponent.stats.name.clone();
        let (hp, max_hp) = (opponent.stats.hp, opponent.stats.max_hp);

        match outcome {
            AttackOutcome::Miss => self.log.push(LogEvent::AttackMissed {
                attacker: "You".to_string(),
                defender: name,
            }),
            AttackOutcome::Hit { damage, defender_died } => {
                self.log.push(LogEvent::AttackHit {
                    attacker: "You".to_string(),
                    defender: name,
                    damage,
                    defender_hp: hp,
                    defender_max_hp: max_hp,
                });
                if defender_died {
                    self.opponent_killed(id);
                }
            }
        }
    }

    /// Death bookkeeping: mark the corpse for the end-of-tick sweep, roll the
    /// drop table onto its cell, award the kill XP.
    fn opponent_killed(&mut self, id: OpponentId) {
        let opponent = &mut self.state.opponents[id];
        opponent.erase = true;
        let name = opponent.stats.name.clone();
        let pos = opponent.pos;
        let xp_value = opponent.stats.xp_value;

        self.log.push(LogEvent::OpponentDied { name });
        if let Some(item) = roll_loot(&mut self.rng) {
            let drop = Prop::loot(pos, "The fallen foe dropped something.", vec![item]);
            let key = self.state.props.insert(drop);
            self.state.props[key].id = key;
        }
        self.state.player.receive_xp(xp_value, &mut self.log);
    }

    fn opponent_bumps_player(&mut self, id: OpponentId) {
        let opponent = &mut self.state.opponents[id];
        if !opponent.timer.poll_attack() {
            return;
        }
        let attack = opponent.stats.attack_base;
        let name = opponent.stats.name.clone();
        let defense = self.state.player.defense_value();

        let outcome =
            resolve_attack(attack, defense, &mut self.state.player.stats, &mut self.rng);
        match outcome {
            AttackOutcome::Miss => self.log.push(LogEvent::AttackMissed {
                attacker: name,
                defender: "you".to_string(),
            }),
            AttackOutcome::Hit { damage, .. } => self.log.push(LogEvent::AttackHit {
                attacker: name,
                defender: "you".to_string(),
                damage,
                defender_hp: self.state.player.stats.hp,
                defender_max_hp: self.state.player.stats.max_hp,
            }),
        }
    }

    pub(super) fn opponent_at(&self, pos: Pos) -> Option<OpponentId> {
        self.state
            .opponents
            .iter()
            .find(|(_, o)| o.pos == pos && !o.erase)
            .map(|(id, _)| id)
    }

    pub(super) fn prop_at(&self, pos: Pos) -> Option<PropId> {
        self.state
            .props
            .iter()
            .find(|(_, p)| p.pos == pos && !p.erase)
            .map(|(id, _)| id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::items::InventoryItem;
    use crate::game::test_support::{bare_game, test_opponent};
    use crate::types::TileKind;

    fn combat_logged(log: &[LogEvent]) -> bool {
        log.iter().any(|e| {
            matches!(e, LogEvent::AttackHit { .. } | LogEvent::AttackMissed { .. })
        })
    }

    #[test]
    fn wall_blocks_before_the_opponent_with_no_combat() {
        let mut game = bare_game(6, 6);
        let cell = Pos { y: 1, x: 2 };
        game.state.map.set_tile(cell, TileKind::InnerWall);
        let id = game.state.opponents.insert(test_opponent(cell));
        game.state.opponents[id].id = id;

        // Open the attack gate so a combat check would definitely swing.
        for _ in 0..41 {
            game.state.player.timer.poll_move();
        }
        assert!(!game.resolve_player_step(cell));
        assert!(!combat_logged(&game.log));
        assert_eq!(game.state.opponents[id].stats.hp, 8);
    }

    #[test]
    fn blocking_opponent_still_lets_the_player_grab_loot_beneath() {
        let mut game = bare_game(6, 6);
        let cell = Pos { y: 1, x: 2 };
        let id = game.state.opponents.insert(test_opponent(cell));
        game.state.opponents[id].id = id;
        let pile = Prop::loot(cell, "", vec![InventoryItem::currency("Gold Coin", 4)]);
        let key = game.state.props.insert(pile);
        game.state.props[key].id = key;

        assert!(!game.resolve_player_step(cell));
        assert_eq!(game.state.player.pos, Pos { y: 1, x: 1 });
        assert!(game.log.iter().any(|e| matches!(
            e,
            LogEvent::ItemReceived { name, .. } if name == "Gold Coin"
        )));
        assert!(game.state.props[key].erase);
    }

    #[test]
    fn opponents_never_trigger_interactions_when_blocked() {
        let mut game = bare_game(6, 6);
        let orc_pos = Pos { y: 1, x: 3 };
        let id = game.state.opponents.insert(test_opponent(orc_pos));
        game.state.opponents[id].id = id;
        let cell = Pos { y: 1, x: 4 };
        let pile = Prop::chest(cell, "", vec![InventoryItem::currency("Gold Coin", 4)]);
        let key = game.state.props.insert(pile);
        game.state.props[key].id = key;

        game.resolve_opponent_step(id, cell);
        assert_eq!(game.state.opponents[id].pos, orc_pos);
        assert!(game.log.is_empty());
        assert!(!game.state.props[key].items.is_empty());
    }
}
