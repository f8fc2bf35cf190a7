//! Player interaction with interactive map objects.
//!
//! Treasure and loot piles hand over their items and vanish; chests hand over
//! their items and stay behind as furniture; NPCs talk. The questgiver NPC
//! additionally pays out escalating rewards for persistence and the big
//! bucketed reward once the player returns carrying the relic.

use crate::game::items::InventoryItem;
use crate::state::{Player, Prop};
use crate::types::{LogEvent, PropKind};

/// XP for pestering the questgiver to annoyance level six.
const PERSISTENCE_XP: i32 = 20;
/// Coins and XP for pushing on to level seven.
const PERSISTENCE_COINS: i32 = 25;
const PERSISTENCE_COINS_XP: i32 = 30;
/// XP for completing the main quest.
const QUEST_XP: i32 = 250;

pub fn interact(player: &mut Player, prop: &mut Prop, log: &mut Vec<LogEvent>) {
    match prop.kind {
        PropKind::Treasure | PropKind::Loot => {
            hand_over(player, prop, log);
            prop.erase = true;
        }
        PropKind::Chest => hand_over(player, prop, log),
        PropKind::Npc => talk(player, prop, log),
    }
}

fn hand_over(player: &mut Player, prop: &mut Prop, log: &mut Vec<LogEvent>) {
    if prop.items.is_empty() {
        log.push(LogEvent::NothingToPickUp);
        return;
    }
    if !prop.pickup_text.is_empty() {
        log.push(LogEvent::Narration(prop.pickup_text.clone()));
    }
    for item in prop.items.drain(..) {
        player.receive_item(item, log);
    }
}

fn talk(player: &mut Player, prop: &mut Prop, log: &mut Vec<LogEvent>) {
    if prop.main_quest_giver && player.has_relic && !player.quest_complete {
        complete_quest(player, prop, log);
        return;
    }

    if let Some(line) = prop.dialogue.line(prop.annoyance) {
        log.push(LogEvent::DialogueLine(line.to_string()));
    }
    match prop.annoyance {
        6 => player.receive_xp(PERSISTENCE_XP, log),
        7 => {
            player.receive_item(
                InventoryItem::currency("Gold Coin", PERSISTENCE_COINS),
                log,
            );
            player.receive_xp(PERSISTENCE_COINS_XP, log);
        }
        _ => {}
    }
    prop.annoyance += 1;
}

/// How much the player pestered the questgiver decides which closing line
/// and coin purse they get; the quest XP is fixed.
fn complete_quest(player: &mut Player, prop: &mut Prop, log: &mut Vec<LogEvent>) {
    let (response, coins) = match prop.annoyance {
        0..=2 => (0, 50),
        3..=5 => (1, 30),
        6 => (2, 50),
        7..=9 => (3, 25),
        10..=12 => (4, 25),
        _ => (5, 25),
    };
    if let Some(line) = prop.dialogue.final_response(response) {
        log.push(LogEvent::DialogueLine(line.to_string()));
    }
    player.receive_item(InventoryItem::currency("Gold Coin", coins), log);
    player.receive_xp(QUEST_XP, log);
    player.quest_complete = true;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialogue::DialogueScript;
    use crate::game::test_support::test_player;
    use crate::types::Pos;

    fn npc_with_script(lines: &[&str], finals: &[&str]) -> Prop {
        Prop::npc(
            Pos { y: 6, x: 12 },
            DialogueScript {
                lines: lines.iter().map(|s| s.to_string()).collect(),
                final_responses: finals.iter().map(|s| s.to_string()).collect(),
            },
        )
    }

    #[test]
    fn loot_piles_empty_into_the_inventory_and_vanish() {
        let mut player = test_player(Pos { y: 1, x: 1 });
        let mut log = Vec::new();
        let mut pile = Prop::loot(
            Pos { y: 1, x: 2 },
            "You find the orc's pockets.",
            vec![InventoryItem::currency("Gold Coin", 4)],
        );
        interact(&mut player, &mut pile, &mut log);
        assert!(pile.erase);
        assert!(pile.items.is_empty());
        assert_eq!(player.inventory[0].count, 4);
    }

    #[test]
    fn chests_stay_behind_and_report_when_empty() {
        let mut player = test_player(Pos { y: 1, x: 1 });
        let mut log = Vec::new();
        let mut chest = Prop::chest(
            Pos { y: 1, x: 2 },
            "The lid creaks open.",
            vec![InventoryItem::armor("Mail", 3)],
        );
        interact(&mut player, &mut chest, &mut log);
        assert!(!chest.erase);
        assert_eq!(player.inventory.len(), 1);

        interact(&mut player, &mut chest, &mut log);
        assert!(log.contains(&LogEvent::NothingToPickUp));
        assert!(!chest.erase);
    }

    #[test]
    fn repeated_talks_walk_the_script_and_clamp() {
        let mut player = test_player(Pos { y: 1, x: 1 });
        let mut log = Vec::new();
        let mut npc = npc_with_script(&["Hello.", "You again?"], &["Bye."]);
        for _ in 0..4 {
            interact(&mut player, &mut npc, &mut log);
        }
        let lines: Vec<_> = log
            .iter()
            .filter_map(|e| match e {
                LogEvent::DialogueLine(line) => Some(line.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(lines, ["Hello.", "You again?", "You again?", "You again?"]);
        assert_eq!(npc.annoyance, 4);
    }

    #[test]
    fn pestering_pays_out_at_levels_six_and_seven() {
        let mut player = test_player(Pos { y: 1, x: 1 });
        let mut log = Vec::new();
        let mut npc = npc_with_script(&["Go away."], &["Bye."]);
        for _ in 0..8 {
            interact(&mut player, &mut npc, &mut log);
        }
        assert_eq!(player.xp, PERSISTENCE_XP + PERSISTENCE_COINS_XP);
        assert_eq!(player.inventory[0].name, "Gold Coin");
        assert_eq!(player.inventory[0].count, PERSISTENCE_COINS);
    }

    #[test]
    fn returning_with_the_relic_completes_the_quest() {
        let mut player = test_player(Pos { y: 1, x: 1 });
        player.has_relic = true;
        let mut log = Vec::new();
        let mut npc = npc_with_script(
            &["Find my relic."],
            &["Splendid!", "Good.", "Incredible!", "Fine.", "Hm.", "Whatever."],
        );
        npc.main_quest_giver = true;

        // A patient hero who never pestered gets the warmest line and the
        // full purse.
        interact(&mut player, &mut npc, &mut log);
        assert!(player.quest_complete);
        assert_eq!(player.xp, QUEST_XP);
        assert_eq!(player.inventory[0].count, 50);
        assert!(log.contains(&LogEvent::DialogueLine("Splendid!".to_string())));
    }

    #[test]
    fn quest_reward_buckets_follow_the_annoyance_counter() {
        let cases = [
            (0usize, "Splendid!", 50),
            (4, "Good.", 30),
            (6, "Incredible!", 50),
            (8, "Fine.", 25),
            (12, "Hm.", 25),
            (20, "Whatever.", 25),
        ];
        for (annoyance, line, coins) in cases {
            let mut player = test_player(Pos { y: 1, x: 1 });
            player.has_relic = true;
            let mut log = Vec::new();
            let mut npc = npc_with_script(
                &["Find my relic."],
                &["Splendid!", "Good.", "Incredible!", "Fine.", "Hm.", "Whatever."],
            );
            npc.main_quest_giver = true;
            npc.annoyance = annoyance;

            interact(&mut player, &mut npc, &mut log);
            assert_eq!(player.inventory[0].count, coins, "annoyance {annoyance}");
            assert!(log.contains(&LogEvent::DialogueLine(line.to_string())));
        }
    }

    #[test]
    fn only_the_questgiver_accepts_the_relic() {
        let mut player = test_player(Pos { y: 1, x: 1 });
        player.has_relic = true;
        let mut log = Vec::new();
        let mut npc = npc_with_script(&["Nice weather."], &["Bye."]);
        interact(&mut player, &mut npc, &mut log);
        assert!(!player.quest_complete);
        assert_eq!(npc.annoyance, 1);
    }
}
