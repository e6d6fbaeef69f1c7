use tracing::debug;

use crate::command::Command;
use crate::constants::*;
use crate::presentation::Presentation;

/// Axis-aligned rectangle in render texture pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Half-open containment: the right and bottom edges belong to the neighbour.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    pub fn inset(&self, by: f32) -> Self {
        Self::new(
            self.x + by,
            self.y + by,
            (self.width - 2.0 * by).max(0.0),
            (self.height - 2.0 * by).max(0.0),
        )
    }

    pub fn offset(&self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.width, self.height)
    }

    /// Split horizontally into `count` equal columns separated by `gap`.
    pub fn columns(&self, count: usize, gap: f32) -> Vec<Bounds> {
        if count == 0 {
            return Vec::new();
        }
        let width = (self.width - gap * (count - 1) as f32) / count as f32;
        (0..count)
            .map(|i| Self::new(self.x + i as f32 * (width + gap), self.y, width, self.height))
            .collect()
    }

    /// Lay `count` cells of `cell_height` out row by row, `columns` per row,
    /// starting at the top of this rectangle.
    pub fn grid(&self, count: usize, columns: usize, cell_height: f32, gap: f32) -> Vec<Bounds> {
        let columns = columns.max(1);
        let row_template = Self::new(self.x, self.y, self.width, cell_height).columns(columns, gap);
        (0..count)
            .map(|i| {
                let line = (i / columns) as f32;
                row_template[i % columns].offset(0.0, line * (cell_height + gap))
            })
            .collect()
    }
}

/// Fixed regions of the presenter window, shared by drawing and hit testing.
#[derive(Debug, Clone, PartialEq)]
pub struct Chrome {
    pub header: Bounds,
    pub deck_title: Bounds,
    pub indicators: Vec<Bounds>,
    pub counter: Bounds,
    pub current_title: Bounds,
    pub body: Bounds,
    pub previous: Bounds,
    pub next: Bounds,
    pub footer: Bounds,
}

impl Chrome {
    pub fn new(width: f32, height: f32, slide_count: usize) -> Self {
        let header = Bounds::new(0.0, 0.0, width, HEADER_HEIGHT);
        let deck_title = Bounds::new(MARGIN, 16.0, width * 0.5, DECK_TITLE_SIZE as f32);

        let indicator_y = deck_title.bottom() + 14.0;
        let indicators = (0..slide_count)
            .map(|i| {
                Bounds::new(
                    MARGIN + i as f32 * (INDICATOR_SIZE + INDICATOR_GAP),
                    indicator_y,
                    INDICATOR_SIZE,
                    INDICATOR_SIZE,
                )
            })
            .collect();

        let right_column = width * 0.4;
        let counter = Bounds::new(width - MARGIN - right_column, 20.0, right_column, BODY_SIZE as f32);
        let current_title = Bounds::new(counter.x, indicator_y + 6.0, right_column, BODY_SIZE as f32);

        let footer = Bounds::new(0.0, height - FOOTER_HEIGHT, width, FOOTER_HEIGHT);
        let nav = Bounds::new(0.0, footer.y - NAV_HEIGHT, width, NAV_HEIGHT);
        let button_y = nav.y + (NAV_HEIGHT - NAV_BUTTON_HEIGHT) * 0.5;
        let previous = Bounds::new(MARGIN, button_y, NAV_BUTTON_WIDTH, NAV_BUTTON_HEIGHT);
        let next = Bounds::new(
            width - MARGIN - NAV_BUTTON_WIDTH,
            button_y,
            NAV_BUTTON_WIDTH,
            NAV_BUTTON_HEIGHT,
        );

        let body_top = header.bottom() + GAP;
        let body = Bounds::new(
            MARGIN,
            body_top,
            width - 2.0 * MARGIN,
            (nav.y - GAP - body_top).max(0.0),
        );

        Self {
            header,
            deck_title,
            indicators,
            counter,
            current_title,
            body,
            previous,
            next,
            footer,
        }
    }

    /// Map a click to a command. Disabled buttons swallow the click.
    pub fn hit_test<C>(&self, x: f32, y: f32, presentation: &Presentation<C>) -> Option<Command> {
        let clicked = presentation
            .indicators()
            .zip(self.indicators.iter())
            .find(|(_, b)| b.contains(x, y));
        if let Some((indicator, _)) = clicked {
            debug!(label = %indicator.accessible_label(), "indicator clicked");
            return Some(indicator.command());
        }
        if self.previous.contains(x, y) {
            return presentation.can_go_previous().then_some(Command::Previous);
        }
        if self.next.contains(x, y) {
            return presentation.can_go_next().then_some(Command::Next);
        }
        None
    }
}

/// Greedy word wrap. `measure` returns the drawn width of a string.
///
/// A single word wider than `max_width` gets a line of its own.
pub fn wrap_text(text: &str, max_width: f32, measure: impl Fn(&str) -> f32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        if line.is_empty() {
            line.push_str(word);
            continue;
        }
        let candidate = format!("{line} {word}");
        if measure(&candidate) <= max_width {
            line = candidate;
        } else {
            lines.push(std::mem::take(&mut line));
            line.push_str(word);
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::EdgeBehavior;
    use crate::slide::Slide;

    // Ten pixels per character.
    fn mono(s: &str) -> f32 {
        s.chars().count() as f32 * 10.0
    }

    #[test]
    fn wrap_breaks_on_word_boundaries() {
        let lines = wrap_text("the quick brown fox jumps", 100.0, mono);
        assert_eq!(lines, vec!["the quick", "brown fox", "jumps"]);
    }

    #[test]
    fn wrap_keeps_long_words_whole() {
        let lines = wrap_text("a supercalifragilistic b", 50.0, mono);
        assert_eq!(lines, vec!["a", "supercalifragilistic", "b"]);
    }

    #[test]
    fn wrap_of_blank_text_is_empty() {
        assert!(wrap_text("   ", 100.0, mono).is_empty());
    }

    #[test]
    fn columns_share_width_evenly() {
        let cols = Bounds::new(0.0, 0.0, 320.0, 50.0).columns(3, 10.0);
        assert_eq!(cols.len(), 3);
        assert_eq!(cols[0].width, 100.0);
        assert_eq!(cols[1].x, 110.0);
        assert_eq!(cols[2].right(), 320.0);
    }

    #[test]
    fn grid_wraps_to_new_rows() {
        let cells = Bounds::new(0.0, 0.0, 210.0, 500.0).grid(3, 2, 40.0, 10.0);
        assert_eq!(cells[0], Bounds::new(0.0, 0.0, 100.0, 40.0));
        assert_eq!(cells[1], Bounds::new(110.0, 0.0, 100.0, 40.0));
        assert_eq!(cells[2], Bounds::new(0.0, 50.0, 100.0, 40.0));
    }

    #[test]
    fn chrome_has_one_indicator_per_slide_without_overlap() {
        let chrome = Chrome::new(RENDER_WIDTH as f32, RENDER_HEIGHT as f32, 7);
        assert_eq!(chrome.indicators.len(), 7);
        for pair in chrome.indicators.windows(2) {
            assert!(pair[0].right() < pair[1].x);
        }
        assert!(chrome.body.y >= chrome.header.bottom());
        assert!(chrome.body.bottom() <= chrome.previous.y);
        assert!(chrome.next.bottom() <= chrome.footer.y);
    }

    fn deck(len: usize) -> Presentation<()> {
        let slides = (0..len).map(|i| Slide::new(format!("s{i}"), "", ())).collect();
        Presentation::new(slides).unwrap()
    }

    #[test]
    fn clicks_map_to_commands() {
        let chrome = Chrome::new(RENDER_WIDTH as f32, RENDER_HEIGHT as f32, 7);
        let p = deck(7);
        let third = chrome.indicators[2];
        assert_eq!(chrome.hit_test(third.x + 1.0, third.y + 1.0, &p), Some(Command::GoTo(2)));
        let prev = chrome.previous;
        assert_eq!(chrome.hit_test(prev.x + 5.0, prev.y + 5.0, &p), Some(Command::Previous));
        let next = chrome.next;
        assert_eq!(chrome.hit_test(next.x + 5.0, next.y + 5.0, &p), Some(Command::Next));
        let body = chrome.body;
        assert_eq!(chrome.hit_test(body.x + 5.0, body.y + 5.0, &p), None);
    }

    #[test]
    fn indicator_clicks_use_the_indicator_command() {
        let chrome = Chrome::new(RENDER_WIDTH as f32, RENDER_HEIGHT as f32, 7);
        let p = deck(7);
        for indicator in p.indicators() {
            let b = chrome.indicators[indicator.index];
            assert_eq!(
                chrome.hit_test(b.x + 2.0, b.y + 2.0, &p),
                Some(indicator.command())
            );
        }
    }

    #[test]
    fn disabled_buttons_ignore_clicks() {
        let chrome = Chrome::new(RENDER_WIDTH as f32, RENDER_HEIGHT as f32, 7);
        let mut p = deck(7).with_edges(EdgeBehavior::Stop);
        let prev = chrome.previous;
        assert_eq!(chrome.hit_test(prev.x + 5.0, prev.y + 5.0, &p), None);
        p.last();
        let next = chrome.next;
        assert_eq!(chrome.hit_test(next.x + 5.0, next.y + 5.0, &p), None);
        assert_eq!(chrome.hit_test(prev.x + 5.0, prev.y + 5.0, &p), Some(Command::Previous));
    }
}
