pub mod content;
pub mod dialogue;
pub mod game;
pub mod mapfile;
pub mod state;
pub mod types;

pub use content::ContentPack;
pub use game::Game;
pub use state::{GameState, Map};
pub use types::*;
