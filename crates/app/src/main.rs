use core::{ContentPack, Game};
use macroquad::prelude::*;

use app::frame_input::{capture_commands, quit_requested};
use app::log_text::format_event;
use app::render::{draw_hud, draw_world};

fn window_conf() -> Conf {
    Conf {
        window_title: "Cave of the Sun Relic".to_string(),
        window_width: 980,
        window_height: 640,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let seed = macroquad::miniquad::date::now().to_bits();
    let mut game = Game::new(seed, &ContentPack::default());

    loop {
        if quit_requested() {
            break;
        }
        for command in capture_commands() {
            // Invalid item slots are a player typo, not a crash.
            let _ = game.handle_command(command);
        }
        game.update();

        for event in game.drain_log() {
            println!("{}", format_event(&event));
        }

        clear_background(BLACK);
        draw_world(game.state());
        draw_hud(game.state(), game.paused(), get_fps());
        next_frame().await;
    }
}
