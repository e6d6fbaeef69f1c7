pub const RENDER_WIDTH: i32 = 1920;           // Width of the render texture
pub const RENDER_HEIGHT: i32 = 1080;          // Height of the render texture
pub const FPS: u32 = 60;                      // Frames per second

pub const TRANSITION_DURATION: f32 = 0.35;    // Slide change animation (seconds)
pub const SCROLL_STEP: f32 = 60.0;            // Body scroll per key press / wheel notch (pixels)

// --- Chrome metrics (render texture pixels) ---
pub const HEADER_HEIGHT: f32 = 120.0;
pub const FOOTER_HEIGHT: f32 = 48.0;
pub const NAV_HEIGHT: f32 = 88.0;
pub const MARGIN: f32 = 48.0;
pub const GAP: f32 = 28.0;

pub const INDICATOR_SIZE: f32 = 40.0;
pub const INDICATOR_GAP: f32 = 12.0;
pub const NAV_BUTTON_WIDTH: f32 = 200.0;
pub const NAV_BUTTON_HEIGHT: f32 = 56.0;

// --- Font sizes ---
pub const DECK_TITLE_SIZE: i32 = 34;
pub const SLIDE_TITLE_SIZE: i32 = 46;
pub const SUBTITLE_SIZE: i32 = 28;
pub const HEADING_SIZE: i32 = 28;
pub const CARD_TITLE_SIZE: i32 = 22;
pub const BODY_SIZE: i32 = 20;
pub const SMALL_SIZE: i32 = 18;
pub const METRIC_VALUE_SIZE: i32 = 48;
