//! Tile and entity rendering with a vision-radius shade.

use core::{DoorState, GameState, Pos, PropKind, TileKind};
use macroquad::prelude::*;

pub const TILE_SIZE: f32 = 24.0;
const MARGIN: f32 = 8.0;

fn screen_pos(pos: Pos) -> (f32, f32) {
    (
        MARGIN + pos.x as f32 * TILE_SIZE,
        MARGIN + pos.y as f32 * TILE_SIZE,
    )
}

fn tile_color(tile: TileKind) -> Color {
    match tile {
        TileKind::OuterWall => DARKGRAY,
        TileKind::InnerWall => GRAY,
        TileKind::Bedrock => Color::new(0.25, 0.2, 0.15, 1.0),
        TileKind::Grass => Color::new(0.2, 0.45, 0.2, 1.0),
        TileKind::Floor => Color::new(0.35, 0.3, 0.25, 1.0),
    }
}

fn visible(state: &GameState, pos: Pos) -> bool {
    match state.player.vision.radius() {
        None => true,
        Some(radius) => {
            (pos.x - state.player.pos.x).abs() + (pos.y - state.player.pos.y).abs()
                <= radius
        }
    }
}

pub fn draw_world(state: &GameState) {
    for y in 0..state.map.height as i32 {
        for x in 0..state.map.width as i32 {
            let pos = Pos { y, x };
            let (sx, sy) = screen_pos(pos);
            let color = if visible(state, pos) {
                tile_color(state.map.tile_at(pos))
            } else {
                BLACK
            };
            draw_rectangle(sx, sy, TILE_SIZE - 1.0, TILE_SIZE - 1.0, color);
        }
    }

    for prop in state.props.values() {
        if !visible(state, prop.pos) {
            continue;
        }
        let (sx, sy) = screen_pos(prop.pos);
        let color = match prop.kind {
            PropKind::Treasure | PropKind::Loot => GOLD,
            PropKind::Chest => BROWN,
            PropKind::Npc => SKYBLUE,
        };
        draw_rectangle(sx + 4.0, sy + 4.0, TILE_SIZE - 9.0, TILE_SIZE - 9.0, color);
    }

    for door in &state.doors {
        let color = match door.state {
            DoorState::Open => BEIGE,
            _ => ORANGE,
        };
        for cell in [door.anchor, door.wing] {
            if visible(state, cell) {
                let (sx, sy) = screen_pos(cell);
                draw_rectangle(sx, sy, TILE_SIZE - 1.0, TILE_SIZE - 1.0, color);
            }
        }
    }

    for opponent in state.opponents.values() {
        if !visible(state, opponent.pos) {
            continue;
        }
        let (sx, sy) = screen_pos(opponent.pos);
        let color = if opponent.stats.alive { RED } else { MAROON };
        draw_circle(
            sx + TILE_SIZE / 2.0,
            sy + TILE_SIZE / 2.0,
            TILE_SIZE / 2.0 - 3.0,
            color,
        );
    }

    let (sx, sy) = screen_pos(state.player.pos);
    draw_circle(
        sx + TILE_SIZE / 2.0,
        sy + TILE_SIZE / 2.0,
        TILE_SIZE / 2.0 - 3.0,
        WHITE,
    );
}

pub fn draw_hud(state: &GameState, paused: bool, fps: i32) {
    let bottom = MARGIN + state.map.height as f32 * TILE_SIZE + 18.0;
    let stats = &state.player.stats;
    let line = format!(
        "HP {}/{}  XP {}  FPS {}{}",
        stats.hp,
        stats.max_hp,
        state.player.xp,
        fps,
        if paused { "  [PAUSED]" } else { "" }
    );
    draw_text(&line, MARGIN, bottom, 22.0, LIGHTGRAY);
}
