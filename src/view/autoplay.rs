/// Advances the deck after a fixed time on each slide.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Autoplay {
    interval: Option<f32>,
    elapsed: f32,
}

impl Autoplay {
    /// `None` disables autoplay.
    pub fn new(interval: Option<f32>) -> Self {
        Self { interval, elapsed: 0.0 }
    }

    /// Advance by `dt`; returns true when the interval runs out. The wait
    /// starts over whenever it fires, even if the deck could not move.
    pub fn tick(&mut self, dt: f32) -> bool {
        let Some(interval) = self.interval else {
            return false;
        };
        self.elapsed += dt;
        if self.elapsed >= interval {
            self.elapsed = 0.0;
            return true;
        }
        false
    }

    pub fn reset(&mut self) {
        self.elapsed = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fuel_deck::{EdgeBehavior, Presentation, Slide};

    #[test]
    fn fires_once_the_interval_elapses() {
        let mut a = Autoplay::new(Some(2.0));
        assert!(!a.tick(1.0));
        assert!(!a.tick(0.5));
        assert!(a.tick(0.5));
        assert!(!a.tick(1.0));
    }

    #[test]
    fn disabled_never_fires() {
        let mut a = Autoplay::new(None);
        assert!(!a.tick(1_000.0));
    }

    #[test]
    fn manual_navigation_restarts_the_wait() {
        let mut a = Autoplay::new(Some(2.0));
        assert!(!a.tick(1.5));
        a.reset();
        assert!(!a.tick(1.5));
        assert!(a.tick(0.5));
    }

    #[test]
    fn rearms_when_a_bounded_deck_cannot_advance() {
        let slides = vec![Slide::new("a", "A", ()), Slide::new("b", "B", ())];
        let mut p = Presentation::new(slides).unwrap().with_edges(EdgeBehavior::Stop);
        p.last();

        let mut a = Autoplay::new(Some(2.0));
        assert!(a.tick(2.0));
        p.next();
        assert_eq!(p.current_index(), 1);

        assert!(!a.tick(1.0));
        assert!(a.tick(1.0));
    }
}
