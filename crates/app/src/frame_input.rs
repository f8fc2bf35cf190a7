//! Keyboard translation for one rendered frame.
//!
//! Movement keys are read as held so a pressed arrow keeps feeding intent to
//! the move gate; everything else fires on the key-press edge.

use core::{Command, Direction};
use macroquad::prelude::{KeyCode, is_key_down, is_key_pressed};

const ITEM_KEYS: [(KeyCode, u8); 9] = [
    (KeyCode::Key1, 1),
    (KeyCode::Key2, 2),
    (KeyCode::Key3, 3),
    (KeyCode::Key4, 4),
    (KeyCode::Key5, 5),
    (KeyCode::Key6, 6),
    (KeyCode::Key7, 7),
    (KeyCode::Key8, 8),
    (KeyCode::Key9, 9),
];

pub fn capture_commands() -> Vec<Command> {
    let mut commands = Vec::new();

    if is_key_pressed(KeyCode::P) {
        commands.push(Command::TogglePause);
    }
    if is_key_pressed(KeyCode::C) {
        commands.push(Command::ShowStatus);
    }
    if is_key_pressed(KeyCode::I) {
        commands.push(Command::ShowInventory);
    }
    for (key, slot) in ITEM_KEYS {
        if is_key_pressed(key) {
            commands.push(Command::SelectItem(slot));
        }
    }

    if is_key_down(KeyCode::Up) {
        commands.push(Command::Move(Direction::Up));
    } else if is_key_down(KeyCode::Down) {
        commands.push(Command::Move(Direction::Down));
    } else if is_key_down(KeyCode::Left) {
        commands.push(Command::Move(Direction::Left));
    } else if is_key_down(KeyCode::Right) {
        commands.push(Command::Move(Direction::Right));
    }

    commands
}

pub fn quit_requested() -> bool {
    is_key_pressed(KeyCode::Escape)
}
