//! Door interaction.
//!
//! A door occupies two cells, the anchor and the wing. Interacting is the
//! only way its state changes: secret doors are discovered first, locked
//! doors need the key, and opening swings both cells off the walkway so the
//! passage becomes walkable. Open is terminal.

use crate::state::Door;
use crate::types::{DoorKind, DoorState, LogEvent, Pos};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DoorReply {
    AlreadyOpen,
    SecretFound { locked: bool },
    Locked,
    Unlocked,
    Opened,
}

impl Door {
    pub fn regular(anchor: Pos, wing: Pos, horizontal: bool, locked: bool) -> Self {
        Self {
            anchor,
            wing,
            horizontal,
            state: if locked { DoorState::Locked } else { DoorState::Closed },
            kind: DoorKind::Regular,
        }
    }

    pub fn secret(anchor: Pos, wing: Pos, horizontal: bool, locked: bool) -> Self {
        Self {
            anchor,
            wing,
            horizontal,
            state: if locked { DoorState::Locked } else { DoorState::Closed },
            kind: DoorKind::Secret,
        }
    }

    pub fn occupies(&self, pos: Pos) -> bool {
        self.anchor == pos || self.wing == pos
    }

    /// One bump against either door cell. The reply is what happened; the
    /// caller turns it into log events.
    pub fn interact(&mut self, has_key: bool) -> DoorReply {
        if self.kind == DoorKind::Secret {
            self.kind = DoorKind::Discovered;
            return DoorReply::SecretFound { locked: self.state == DoorState::Locked };
        }
        match self.state {
            DoorState::Open => DoorReply::AlreadyOpen,
            DoorState::Locked => {
                if has_key {
                    self.state = DoorState::Closed;
                    DoorReply::Unlocked
                } else {
                    DoorReply::Locked
                }
            }
            DoorState::Closed => {
                self.open();
                DoorReply::Opened
            }
        }
    }

    /// Swings the leaf aside: both cells move off the walkway so the former
    /// doorway is free to walk through.
    fn open(&mut self) {
        self.state = DoorState::Open;
        if self.horizontal {
            self.anchor = Pos { y: self.anchor.y - 1, x: self.anchor.x - 1 };
            self.wing = Pos { y: self.wing.y - 2, x: self.wing.x - 1 };
        } else {
            self.anchor = Pos { y: self.anchor.y - 1, x: self.anchor.x + 1 };
            self.wing = Pos { y: self.wing.y - 1, x: self.wing.x + 2 };
        }
    }
}

pub fn log_reply(reply: DoorReply, log: &mut Vec<LogEvent>) {
    match reply {
        DoorReply::AlreadyOpen => {}
        DoorReply::SecretFound { locked } => {
            log.push(LogEvent::DoorDiscovered { locked });
        }
        DoorReply::Locked => log.push(LogEvent::DoorLocked),
        DoorReply::Unlocked => log.push(LogEvent::DoorUnlocked),
        DoorReply::Opened => log.push(LogEvent::DoorOpened),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vertical_door(locked: bool) -> Door {
        Door::regular(
            Pos { y: 11, x: 19 },
            Pos { y: 12, x: 19 },
            false,
            locked,
        )
    }

    #[test]
    fn locked_door_needs_the_key() {
        let mut door = vertical_door(true);
        assert_eq!(door.interact(false), DoorReply::Locked);
        assert_eq!(door.state, DoorState::Locked);
        assert_eq!(door.interact(true), DoorReply::Unlocked);
        assert_eq!(door.state, DoorState::Closed);
    }

    #[test]
    fn opening_is_terminal_and_clears_the_walkway() {
        let mut door = vertical_door(false);
        let walkway = [door.anchor, door.wing];
        assert_eq!(door.interact(false), DoorReply::Opened);
        assert_eq!(door.state, DoorState::Open);
        for cell in walkway {
            assert!(!door.occupies(cell));
        }
        assert_eq!(door.anchor, Pos { y: 10, x: 20 });
        assert_eq!(door.wing, Pos { y: 11, x: 21 });
        assert_eq!(door.interact(true), DoorReply::AlreadyOpen);
    }

    #[test]
    fn horizontal_door_swings_up_and_left() {
        let mut door = Door::regular(
            Pos { y: 7, x: 34 },
            Pos { y: 7, x: 35 },
            true,
            false,
        );
        assert_eq!(door.interact(false), DoorReply::Opened);
        assert_eq!(door.anchor, Pos { y: 6, x: 33 });
        assert_eq!(door.wing, Pos { y: 5, x: 34 });
    }

    #[test]
    fn secret_door_is_discovered_before_anything_else() {
        let mut door = Door::secret(
            Pos { y: 7, x: 34 },
            Pos { y: 7, x: 35 },
            true,
            false,
        );
        assert_eq!(door.interact(true), DoorReply::SecretFound { locked: false });
        assert_eq!(door.kind, DoorKind::Discovered);
        assert_eq!(door.state, DoorState::Closed);
        // Now it behaves like a regular closed door.
        assert_eq!(door.interact(false), DoorReply::Opened);
    }
}
