pub mod autoplay;
pub mod draw;
pub mod engine;
pub mod input;
pub mod state;
pub mod theme;
pub mod transition;

pub use engine::DeckEngine;
