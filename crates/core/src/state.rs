use slotmap::SlotMap;

use crate::dialogue::DialogueScript;
use crate::game::combat::CombatStats;
use crate::game::items::InventoryItem;
use crate::game::schedule::TurnTimer;
use crate::types::*;

#[derive(Clone, Debug)]
pub struct Map {
    pub width: usize,
    pub height: usize,
    pub tiles: Vec<TileKind>,
}

impl Map {
    /// An all-floor map of the given size, used as the fallback when the
    /// level file cannot be read.
    pub fn open(width: usize, height: usize) -> Self {
        Self { width, height, tiles: vec![TileKind::Floor; width * height] }
    }

    pub fn tile_at(&self, pos: Pos) -> TileKind {
        if !self.in_bounds(pos) {
            return TileKind::OuterWall;
        }
        self.tiles[self.index(pos)]
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.x >= 0
            && pos.y >= 0
            && (pos.x as usize) < self.width
            && (pos.y as usize) < self.height
    }

    /// Whether the terrain itself forbids standing on this cell.
    pub fn blocks(&self, pos: Pos) -> bool {
        matches!(
            self.tile_at(pos),
            TileKind::OuterWall | TileKind::InnerWall | TileKind::Bedrock
        )
    }

    pub fn set_tile(&mut self, pos: Pos, tile: TileKind) {
        if !self.in_bounds(pos) {
            return;
        }
        let idx = self.index(pos);
        self.tiles[idx] = tile;
    }

    fn index(&self, pos: Pos) -> usize {
        (pos.y as usize) * self.width + (pos.x as usize)
    }
}

#[derive(Clone, Debug)]
pub struct Player {
    pub pos: Pos,
    pub stats: CombatStats,
    pub timer: TurnTimer,
    pub pending_direction: Option<Direction>,
    pub inventory: Vec<InventoryItem>,
    pub equipped_weapon: Option<usize>,
    pub equipped_armor: Option<usize>,
    pub xp: i32,
    pub has_key: bool,
    pub has_relic: bool,
    pub quest_complete: bool,
    pub vision: Vision,
}

impl Player {
    pub fn new(pos: Pos, stats: CombatStats, timer: TurnTimer) -> Self {
        Self {
            pos,
            stats,
            timer,
            pending_direction: None,
            inventory: Vec::new(),
            equipped_weapon: None,
            equipped_armor: None,
            xp: 0,
            has_key: false,
            has_relic: false,
            quest_complete: false,
            vision: Vision::Daylight,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Opponent {
    pub id: OpponentId,
    pub pos: Pos,
    pub stats: CombatStats,
    pub timer: TurnTimer,
    pub perception: i32,
    pub ai: AiState,
    pub erase: bool,
}

/// A stationary interactive map object: loose treasure, a dropped loot pile,
/// a chest, or a talking NPC.
#[derive(Clone, Debug)]
pub struct Prop {
    pub id: PropId,
    pub pos: Pos,
    pub kind: PropKind,
    pub blocks_path: bool,
    pub items: Vec<InventoryItem>,
    pub pickup_text: String,
    pub dialogue: DialogueScript,
    pub annoyance: usize,
    pub main_quest_giver: bool,
    pub erase: bool,
}

impl Prop {
    pub fn treasure(pos: Pos, pickup_text: &str, items: Vec<InventoryItem>) -> Self {
        Self::stash(pos, PropKind::Treasure, pickup_text, items)
    }

    pub fn loot(pos: Pos, pickup_text: &str, items: Vec<InventoryItem>) -> Self {
        Self::stash(pos, PropKind::Loot, pickup_text, items)
    }

    pub fn chest(pos: Pos, pickup_text: &str, items: Vec<InventoryItem>) -> Self {
        let mut prop = Self::stash(pos, PropKind::Chest, pickup_text, items);
        prop.blocks_path = true;
        prop
    }

    pub fn npc(pos: Pos, dialogue: DialogueScript) -> Self {
        Self {
            id: PropId::default(),
            pos,
            kind: PropKind::Npc,
            blocks_path: true,
            items: Vec::new(),
            pickup_text: String::new(),
            dialogue,
            annoyance: 0,
            main_quest_giver: false,
            erase: false,
        }
    }

    fn stash(pos: Pos, kind: PropKind, pickup_text: &str, items: Vec<InventoryItem>) -> Self {
        Self {
            id: PropId::default(),
            pos,
            kind,
            blocks_path: false,
            items,
            pickup_text: pickup_text.to_string(),
            dialogue: DialogueScript::default(),
            annoyance: 0,
            main_quest_giver: false,
            erase: false,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Door {
    pub anchor: Pos,
    pub wing: Pos,
    pub horizontal: bool,
    pub state: DoorState,
    pub kind: DoorKind,
}

#[derive(Clone, Debug)]
pub struct MapEvent {
    pub area: Vec<Pos>,
    pub kind: EventKind,
    pub message: String,
    pub xp: i32,
    pub damage: i32,
    pub illumination: Option<Vision>,
    pub erase: bool,
}

/// All mutable world data. The `Game` orchestrator owns exactly one of these;
/// cross-references between collections are resolved by position lookup, never
/// by stored handles.
pub struct GameState {
    pub map: Map,
    pub player: Player,
    pub opponents: SlotMap<OpponentId, Opponent>,
    pub props: SlotMap<PropId, Prop>,
    pub doors: Vec<Door>,
    pub events: Vec<MapEvent>,
}
