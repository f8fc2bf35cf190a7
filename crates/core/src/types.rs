use slotmap::new_key_type;

new_key_type! {
    pub struct OpponentId;
    pub struct PropId;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub y: i32,
    pub x: i32,
}

impl Pos {
    pub fn step(self, direction: Direction) -> Pos {
        match direction {
            Direction::Up => Pos { y: self.y - 1, x: self.x },
            Direction::Down => Pos { y: self.y + 1, x: self.x },
            Direction::Left => Pos { y: self.y, x: self.x - 1 },
            Direction::Right => Pos { y: self.y, x: self.x + 1 },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TileKind {
    OuterWall,
    InnerWall,
    Bedrock,
    Grass,
    Floor,
}

/// Ambient light level around the player, set by illumination events and
/// consumed by the renderer as a visibility radius.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Vision {
    Daylight,
    Cavern,
    Dark1,
    Dark2,
    Dark3,
}

impl Vision {
    /// Visible radius in tiles; `None` means unrestricted.
    pub fn radius(self) -> Option<i32> {
        match self {
            Vision::Daylight => None,
            Vision::Cavern => Some(8),
            Vision::Dark1 => Some(5),
            Vision::Dark2 => Some(3),
            Vision::Dark3 => Some(2),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Faction {
    Neutral,
    Friendly,
    Hostile,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AiState {
    Dead,
    Idle,
    Searching,
    Engaging,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DoorState {
    Locked,
    Closed,
    Open,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DoorKind {
    Regular,
    Secret,
    Discovered,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PropKind {
    Treasure,
    Loot,
    Chest,
    Npc,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventKind {
    Single,
    Persistent,
    Illumination,
    CollectionQuest,
}

/// One player intent per rendered frame, translated from raw input by the
/// front end.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    TogglePause,
    Move(Direction),
    ShowStatus,
    ShowInventory,
    SelectItem(u8),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    Victory,
    Defeat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameError {
    InvalidItemSlot,
}

/// Structured simulation output. The core never prints; the front end drains
/// these each frame and formats them for the console.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LogEvent {
    Narration(String),
    LoadFailure(String),
    Paused(bool),
    AttackHit { attacker: String, defender: String, damage: i32, defender_hp: i32, defender_max_hp: i32 },
    AttackMissed { attacker: String, defender: String },
    OpponentDied { name: String },
    XpGained { amount: i32, total: i32 },
    ItemReceived { name: String, count: i32 },
    ItemEquipped { name: String },
    ItemUsed { name: String, healed: i32 },
    NothingToPickUp,
    DialogueLine(String),
    DoorDiscovered { locked: bool },
    DoorUnlocked,
    DoorLocked,
    DoorOpened,
    EventDamage { amount: i32 },
    EventHealed { amount: i32 },
    StatusReport { hp: i32, max_hp: i32, xp: i32 },
    InventoryListing(Vec<String>),
    GameOver,
    QuestComplete,
}
