use fuel_deck::Command;
use fuel_deck::constants::SCROLL_STEP;
use raylib::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    Navigate(Command),
    Scroll(f32),
}

/// Keys polled every frame.
pub const BOUND_KEYS: [KeyboardKey; 19] = [
    KeyboardKey::KEY_RIGHT,
    KeyboardKey::KEY_SPACE,
    KeyboardKey::KEY_PAGE_DOWN,
    KeyboardKey::KEY_LEFT,
    KeyboardKey::KEY_BACKSPACE,
    KeyboardKey::KEY_PAGE_UP,
    KeyboardKey::KEY_HOME,
    KeyboardKey::KEY_END,
    KeyboardKey::KEY_UP,
    KeyboardKey::KEY_DOWN,
    KeyboardKey::KEY_ONE,
    KeyboardKey::KEY_TWO,
    KeyboardKey::KEY_THREE,
    KeyboardKey::KEY_FOUR,
    KeyboardKey::KEY_FIVE,
    KeyboardKey::KEY_SIX,
    KeyboardKey::KEY_SEVEN,
    KeyboardKey::KEY_EIGHT,
    KeyboardKey::KEY_NINE,
];

pub fn action_for_key(key: KeyboardKey) -> Option<Action> {
    use KeyboardKey::*;

    let action = match key {
        KEY_RIGHT | KEY_SPACE | KEY_PAGE_DOWN => Action::Navigate(Command::Next),
        KEY_LEFT | KEY_BACKSPACE | KEY_PAGE_UP => Action::Navigate(Command::Previous),
        KEY_HOME => Action::Navigate(Command::First),
        KEY_END => Action::Navigate(Command::Last),
        KEY_UP => Action::Scroll(-SCROLL_STEP),
        KEY_DOWN => Action::Scroll(SCROLL_STEP),
        KEY_ONE => Action::Navigate(Command::GoTo(0)),
        KEY_TWO => Action::Navigate(Command::GoTo(1)),
        KEY_THREE => Action::Navigate(Command::GoTo(2)),
        KEY_FOUR => Action::Navigate(Command::GoTo(3)),
        KEY_FIVE => Action::Navigate(Command::GoTo(4)),
        KEY_SIX => Action::Navigate(Command::GoTo(5)),
        KEY_SEVEN => Action::Navigate(Command::GoTo(6)),
        KEY_EIGHT => Action::Navigate(Command::GoTo(7)),
        KEY_NINE => Action::Navigate(Command::GoTo(8)),
        _ => return None,
    };
    Some(action)
}

/// Translate a window-space point into render texture space.
pub fn to_render_space(point: Vector2, screen: Vector2, render: Vector2) -> Vector2 {
    Vector2::new(point.x * render.x / screen.x, point.y * render.y / screen.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_navigate() {
        assert_eq!(
            action_for_key(KeyboardKey::KEY_RIGHT),
            Some(Action::Navigate(Command::Next))
        );
        assert_eq!(
            action_for_key(KeyboardKey::KEY_LEFT),
            Some(Action::Navigate(Command::Previous))
        );
        assert_eq!(
            action_for_key(KeyboardKey::KEY_END),
            Some(Action::Navigate(Command::Last))
        );
    }

    #[test]
    fn digits_jump_to_slides() {
        assert_eq!(
            action_for_key(KeyboardKey::KEY_ONE),
            Some(Action::Navigate(Command::GoTo(0)))
        );
        assert_eq!(
            action_for_key(KeyboardKey::KEY_NINE),
            Some(Action::Navigate(Command::GoTo(8)))
        );
    }

    #[test]
    fn every_bound_key_has_an_action() {
        assert!(BOUND_KEYS.iter().all(|k| action_for_key(*k).is_some()));
        assert_eq!(action_for_key(KeyboardKey::KEY_Q), None);
    }

    #[test]
    fn window_points_scale_to_render_texture() {
        let p = to_render_space(
            Vector2::new(480.0, 270.0),
            Vector2::new(960.0, 540.0),
            Vector2::new(1920.0, 1080.0),
        );
        assert_eq!((p.x, p.y), (960.0, 540.0));
    }
}
