use raylib::prelude::*;

pub const BACKGROUND: Color = Color::new(13, 27, 42, 255);
pub const HEADER: Color = Color::new(20, 40, 62, 255);
pub const FOOTER: Color = Color::new(20, 40, 62, 255);
pub const PANEL: Color = Color::new(27, 52, 79, 255);
pub const PANEL_BORDER: Color = Color::new(52, 88, 125, 255);

pub const ACCENT: Color = Color::new(64, 156, 255, 255);
pub const ACCENT_SOFT: Color = Color::new(40, 96, 160, 255);
pub const HIGHLIGHT: Color = Color::new(255, 196, 61, 255);

pub const TEXT: Color = Color::new(230, 237, 245, 255);
pub const TEXT_MUTED: Color = Color::new(150, 170, 192, 255);
pub const TEXT_ON_ACCENT: Color = Color::new(255, 255, 255, 255);

pub const DISABLED: Color = Color::new(60, 72, 88, 255);
pub const PLACEHOLDER: Color = Color::new(34, 44, 58, 255);

pub const ROUNDNESS: f32 = 0.12;
pub const SEGMENTS: i32 = 8;
