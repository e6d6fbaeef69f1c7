use fuel_deck::Direction;
use fuel_deck::constants::TRANSITION_DURATION;
use raylib::prelude::*;

/// Push animation between the slide that was showing and the current one.
pub struct Transition {
    pub from: usize,
    pub from_scroll: f32,
    direction: Direction,
    tween: ease::Tween,
    timer: f32,
    progress: f32,
}

impl Transition {
    pub fn new(from: usize, from_scroll: f32, direction: Direction) -> Self {
        Self {
            from,
            from_scroll,
            direction,
            tween: ease::Tween::new(ease::cubic_out, 0.0, 1.0, TRANSITION_DURATION),
            timer: 0.0,
            progress: 0.0,
        }
    }

    /// Advance by `dt`; returns true once the incoming slide is in place.
    pub fn update(&mut self, dt: f32) -> bool {
        self.timer += dt;
        self.progress = self.tween.apply(dt).clamp(0.0, 1.0);
        if self.timer >= TRANSITION_DURATION {
            self.progress = 1.0;
            return true;
        }
        false
    }

    /// Horizontal offsets of the outgoing and incoming slide bodies.
    pub fn offsets(&self, distance: f32) -> (f32, f32) {
        slide_offsets(self.direction, self.progress, distance)
    }
}

fn slide_offsets(direction: Direction, progress: f32, distance: f32) -> (f32, f32) {
    match direction {
        Direction::Forward => (-progress * distance, (1.0 - progress) * distance),
        Direction::Backward => (progress * distance, -(1.0 - progress) * distance),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_pushes_left() {
        assert_eq!(slide_offsets(Direction::Forward, 0.0, 100.0), (0.0, 100.0));
        assert_eq!(slide_offsets(Direction::Forward, 1.0, 100.0), (-100.0, 0.0));
    }

    #[test]
    fn backward_pushes_right() {
        assert_eq!(slide_offsets(Direction::Backward, 0.0, 100.0), (0.0, -100.0));
        assert_eq!(slide_offsets(Direction::Backward, 0.5, 100.0), (50.0, -50.0));
    }

    #[test]
    fn finishes_after_duration() {
        let mut t = Transition::new(0, 0.0, Direction::Forward);
        assert!(!t.update(TRANSITION_DURATION * 0.5));
        assert!(t.update(TRANSITION_DURATION));
        assert_eq!(t.offsets(100.0), (-100.0, 0.0));
    }
}
