//! Static content tables: pacing constants, stat blocks, and the hand-placed
//! population of the bundled level.

use crate::dialogue::DialogueScript;
use crate::game::combat::CombatStats;
use crate::game::items::InventoryItem;
use crate::game::schedule::TurnTimer;
use crate::state::{Door, GameState, Map, MapEvent, Opponent, Player, Prop};
use crate::types::{AiState, Faction, OpponentId, Pos, Vision};

pub const GRID_WIDTH: usize = 40;
pub const GRID_HEIGHT: usize = 24;

/// Base move interval shared by every combatant; agility is subtracted.
pub const BASE_TURN_INTERVAL: i32 = 20;
/// The attack gate opens once per this many move intervals.
pub const STEPS_PER_ATTACK: i32 = 4;
/// How far out an opponent will path toward the player.
pub const PURSUIT_RADIUS: i32 = 20;

const ORC_PERCEPTION: i32 = 10;

/// The raw text resources a [`crate::Game`] is built from. The bundled level
/// ships compiled in; tools may substitute their own.
#[derive(Clone)]
pub struct ContentPack {
    pub map_text: String,
    pub dialogue_text: String,
}

impl Default for ContentPack {
    fn default() -> Self {
        Self {
            map_text: include_str!("../assets/levelmap.txt").to_string(),
            dialogue_text: include_str!("../assets/dialogue.txt").to_string(),
        }
    }
}

pub fn player_stats() -> CombatStats {
    CombatStats::new("You", Faction::Friendly, 30, 10, 6, 10, 0)
}

pub fn player_timer() -> TurnTimer {
    TurnTimer::new(BASE_TURN_INTERVAL, 10, STEPS_PER_ATTACK)
}

pub fn orc_stats() -> CombatStats {
    CombatStats::new("Orc", Faction::Hostile, 8, 6, 6, 1, 15)
}

fn orc(pos: Pos) -> Opponent {
    let stats = orc_stats();
    let timer = TurnTimer::new(BASE_TURN_INTERVAL, stats.agility, STEPS_PER_ATTACK);
    Opponent {
        id: OpponentId::default(),
        pos,
        stats,
        timer,
        perception: ORC_PERCEPTION,
        ai: AiState::Idle,
        erase: false,
    }
}

fn at(x: i32, y: i32) -> Pos {
    Pos { y, x }
}

/// Populates the parsed map with the bundled level's inhabitants, stashes,
/// doors and events.
pub(crate) fn build_state(map: Map, script: DialogueScript) -> GameState {
    let player = Player::new(at(3, 12), player_stats(), player_timer());

    let mut opponents = slotmap::SlotMap::with_key();
    for pos in [at(23, 5), at(26, 15), at(30, 9), at(34, 19), at(24, 20)] {
        let id = opponents.insert(orc(pos));
        opponents[id].id = id;
    }

    let mut props = slotmap::SlotMap::with_key();
    let mut questgiver = Prop::npc(at(6, 10), script);
    questgiver.main_quest_giver = true;
    let placed = [
        questgiver,
        Prop::treasure(
            at(8, 4),
            "Half buried in the grass lies an iron key.",
            vec![InventoryItem::key("Iron Key")],
        ),
        Prop::treasure(
            at(22, 3),
            "A few coins glint in the dust.",
            vec![InventoryItem::currency("Gold Coin", 5)],
        ),
        Prop::treasure(
            at(37, 20),
            "Someone dropped a purse here.",
            vec![InventoryItem::currency("Gold Coin", 8)],
        ),
        Prop::treasure(
            at(28, 21),
            "A stoppered flask, still full.",
            vec![InventoryItem::consumable("Healing Draught", 6)],
        ),
        Prop::loot(
            at(31, 17),
            "A blade lies beside old bones.",
            vec![InventoryItem::weapon("Worn Blade", 3)],
        ),
        Prop::chest(
            at(25, 8),
            "The chest lid creaks open.",
            vec![
                InventoryItem::armor("Leather Jerkin", 2),
                InventoryItem::currency("Gold Coin", 10),
            ],
        ),
        Prop::chest(
            at(36, 3),
            "Inside, wrapped in rotting cloth, rests the Sun Relic.",
            vec![InventoryItem::quest_token("Sun Relic")],
        ),
    ];
    for prop in placed {
        let id = props.insert(prop);
        props[id].id = id;
    }

    let doors = vec![
        Door::regular(at(19, 11), at(19, 12), false, true),
        Door::secret(at(34, 7), at(35, 7), true, false),
    ];

    let rocks = vec![at(5, 20), at(14, 3), at(37, 12)];
    let events = vec![
        MapEvent::illumination(
            vec![at(20, 11), at(20, 12)],
            "The daylight dies behind you.",
            Vision::Cavern,
        ),
        MapEvent::illumination(vec![at(18, 11), at(18, 12)], "", Vision::Daylight),
        MapEvent::collection_quest(rocks, "You have touched every standing stone.", 30),
        MapEvent::persistent(
            vec![at(28, 12), at(28, 13)],
            "The floor ahead looks disturbed.",
        ),
        MapEvent::single(vec![at(29, 12)], "A spike snaps up from the floor!")
            .with_damage(5),
        MapEvent::single(vec![at(29, 13)], "A spike snaps up from the floor!")
            .with_damage(5),
        MapEvent::single(vec![at(30, 12)], "A spike snaps up from the floor!")
            .with_damage(5),
        MapEvent::single(
            vec![at(24, 18)],
            "A quiet alcove. Something slithered away just now.",
        ),
        MapEvent::persistent(vec![at(31, 16)], "It is unnaturally cold here."),
        MapEvent::illumination(vec![at(32, 20)], "", Vision::Cavern),
        MapEvent::illumination(
            vec![at(33, 20)],
            "The darkness thickens.",
            Vision::Dark1,
        ),
    ];

    GameState { map, player, opponents, props, doors, events }
}
