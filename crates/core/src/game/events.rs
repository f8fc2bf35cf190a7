//! Positional map events.
//!
//! Events cover one or more cells and fire when the player actually arrives
//! on one of them. Four flavors: one-shot, persistent, light-level changes,
//! and collection quests that pay out once every cell in the area has been
//! visited.

use crate::state::{MapEvent, Player};
use crate::types::{EventKind, LogEvent, Pos, Vision};

impl MapEvent {
    pub fn single(area: Vec<Pos>, message: &str) -> Self {
        Self::with_kind(area, EventKind::Single, message)
    }

    pub fn persistent(area: Vec<Pos>, message: &str) -> Self {
        Self::with_kind(area, EventKind::Persistent, message)
    }

    pub fn illumination(
        area: Vec<Pos>,
        message: &str,
        vision: Vision,
    ) -> Self {
        let mut event = Self::with_kind(area, EventKind::Illumination, message);
        event.illumination = Some(vision);
        event
    }

    pub fn collection_quest(
        area: Vec<Pos>,
        message: &str,
        xp: i32,
    ) -> Self {
        let mut event = Self::with_kind(area, EventKind::CollectionQuest, message);
        event.xp = xp;
        event
    }

    pub fn with_damage(mut self, damage: i32) -> Self {
        self.damage = damage;
        self
    }

    pub fn with_xp(mut self, xp: i32) -> Self {
        self.xp = xp;
        self
    }

    fn with_kind(area: Vec<Pos>, kind: EventKind, message: &str) -> Self {
        Self {
            area,
            kind,
            message: message.to_string(),
            xp: 0,
            damage: 0,
            illumination: None,
            erase: false,
        }
    }

    /// Fires the event for a player standing on one of its cells. The caller
    /// has already checked membership.
    pub fn trigger(&mut self, player: &mut Player, log: &mut Vec<LogEvent>) {
        match self.kind {
            EventKind::Single => {
                self.fire(player, log);
                self.erase = true;
            }
            EventKind::Persistent => self.fire(player, log),
            EventKind::Illumination => {
                if let Some(vision) = self.illumination {
                    player.vision = vision;
                }
                self.fire(player, log);
            }
            EventKind::CollectionQuest => {
                self.area.retain(|&cell| cell != player.pos);
                if self.area.is_empty() {
                    self.fire(player, log);
                    self.erase = true;
                }
            }
        }
    }

    fn fire(&self, player: &mut Player, log: &mut Vec<LogEvent>) {
        if !self.message.is_empty() {
            log.push(LogEvent::Narration(self.message.clone()));
        }
        if self.damage > 0 {
            player.stats.take_damage(self.damage);
            log.push(LogEvent::EventDamage { amount: self.damage });
        } else if self.damage < 0 {
            let healed = player.stats.heal(-self.damage);
            log.push(LogEvent::EventHealed { amount: healed });
        }
        player.receive_xp(self.xp, log);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::test_support::test_player;

    #[test]
    fn single_event_fires_once_then_erases() {
        let mut player = test_player(Pos { y: 2, x: 2 });
        let mut log = Vec::new();
        let mut event =
            MapEvent::single(vec![Pos { y: 2, x: 2 }], "A trap!").with_damage(5);
        event.trigger(&mut player, &mut log);
        assert!(event.erase);
        assert_eq!(player.stats.hp, player.stats.max_hp - 5);
        assert!(log.contains(&LogEvent::EventDamage { amount: 5 }));
    }

    #[test]
    fn persistent_event_keeps_firing() {
        let mut player = test_player(Pos { y: 2, x: 2 });
        let mut log = Vec::new();
        let mut event = MapEvent::persistent(vec![Pos { y: 2, x: 2 }], "It is cold.");
        event.trigger(&mut player, &mut log);
        event.trigger(&mut player, &mut log);
        assert!(!event.erase);
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn illumination_sets_the_vision_level() {
        let mut player = test_player(Pos { y: 2, x: 2 });
        let mut log = Vec::new();
        let mut event =
            MapEvent::illumination(vec![Pos { y: 2, x: 2 }], "", Vision::Dark2);
        event.trigger(&mut player, &mut log);
        assert_eq!(player.vision, Vision::Dark2);
        assert!(log.is_empty());
    }

    #[test]
    fn collection_quest_pays_out_exactly_once() {
        let cells = [Pos { y: 1, x: 1 }, Pos { y: 5, x: 5 }, Pos { y: 9, x: 9 }];
        let mut event =
            MapEvent::collection_quest(cells.to_vec(), "All rocks touched.", 30);
        let mut log = Vec::new();

        let mut player = test_player(cells[0]);
        event.trigger(&mut player, &mut log);
        assert!(!event.erase);
        assert!(log.is_empty());

        // Revisiting an already-collected cell changes nothing.
        event.trigger(&mut player, &mut log);
        assert_eq!(event.area.len(), 2);

        player.pos = cells[1];
        event.trigger(&mut player, &mut log);
        player.pos = cells[2];
        event.trigger(&mut player, &mut log);
        assert!(event.erase);
        assert_eq!(player.xp, 30);
        assert!(log.contains(&LogEvent::Narration("All rocks touched.".to_string())));
    }
}
