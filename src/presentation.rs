use std::collections::HashSet;
use std::fmt;

use tracing::debug;

use crate::command::Command;
use crate::error::{PresentationError, Result};
use crate::slide::Slide;

/// What `next`/`previous` do at the ends of the deck.
///
/// Chosen once per presentation; the button enable flags in [`Frame`] follow
/// the same policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EdgeBehavior {
    /// Step past the last slide to the first one, and back.
    #[default]
    Wrap,
    /// Stay put at the first/last slide.
    Stop,
}

/// 1-based position of the cursor, displayed as `"3 / 7"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub number: usize,
    pub total: usize,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.number, self.total)
    }
}

/// One entry of the indicator strip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Indicator {
    pub index: usize,
    pub label: String,
    pub active: bool,
}

impl Indicator {
    pub fn accessible_label(&self) -> String {
        format!("Go to slide {}", self.index + 1)
    }

    pub fn command(&self) -> Command {
        Command::GoTo(self.index)
    }
}

/// Everything a renderer needs to draw the current slide.
#[derive(Debug)]
pub struct Frame<'a, C> {
    pub id: &'a str,
    pub title: &'a str,
    pub subtitle: Option<&'a str>,
    pub content: &'a C,
    pub position: Position,
    pub can_go_previous: bool,
    pub can_go_next: bool,
}

/// Fixed slide sequence plus the single cursor into it.
#[derive(Debug, Clone)]
pub struct Presentation<C> {
    slides: Vec<Slide<C>>,
    current_index: usize,
    edges: EdgeBehavior,
}

impl<C> Presentation<C> {
    pub fn new(slides: Vec<Slide<C>>) -> Result<Self> {
        if slides.is_empty() {
            return Err(PresentationError::Empty);
        }
        let mut seen = HashSet::new();
        for slide in &slides {
            if !seen.insert(slide.id.as_str()) {
                return Err(PresentationError::DuplicateId(slide.id.clone()));
            }
        }
        Ok(Self {
            slides,
            current_index: 0,
            edges: EdgeBehavior::default(),
        })
    }

    pub fn with_edges(mut self, edges: EdgeBehavior) -> Self {
        self.edges = edges;
        self
    }

    pub fn edges(&self) -> EdgeBehavior {
        self.edges
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Never true once constructed.
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn slides(&self) -> &[Slide<C>] {
        &self.slides
    }

    pub fn current(&self) -> &Slide<C> {
        &self.slides[self.current_index]
    }

    pub fn next(&mut self) {
        let len = self.len();
        match self.edges {
            EdgeBehavior::Wrap => self.current_index = (self.current_index + 1) % len,
            EdgeBehavior::Stop if self.current_index + 1 < len => self.current_index += 1,
            EdgeBehavior::Stop => {}
        }
        debug!(index = self.current_index, "next slide");
    }

    pub fn previous(&mut self) {
        let len = self.len();
        match self.edges {
            EdgeBehavior::Wrap => self.current_index = (self.current_index + len - 1) % len,
            EdgeBehavior::Stop if self.current_index > 0 => self.current_index -= 1,
            EdgeBehavior::Stop => {}
        }
        debug!(index = self.current_index, "previous slide");
    }

    /// Jump straight to `index`. Out-of-range values are rejected, never
    /// wrapped or clamped.
    pub fn go_to(&mut self, index: usize) -> Result<()> {
        if index >= self.len() {
            return Err(PresentationError::InvalidIndex {
                index: i64::try_from(index).unwrap_or(i64::MAX),
                len: self.len(),
            });
        }
        self.current_index = index;
        debug!(index, "go to slide");
        Ok(())
    }

    /// [`go_to`](Self::go_to) for callers holding a signed index.
    pub fn go_to_signed(&mut self, index: i64) -> Result<()> {
        match usize::try_from(index) {
            Ok(index) => self.go_to(index),
            Err(_) => Err(PresentationError::InvalidIndex {
                index,
                len: self.len(),
            }),
        }
    }

    pub fn first(&mut self) {
        self.current_index = 0;
        debug!(index = self.current_index, "first slide");
    }

    pub fn last(&mut self) {
        self.current_index = self.len() - 1;
        debug!(index = self.current_index, "last slide");
    }

    pub fn execute(&mut self, command: Command) -> Result<()> {
        match command {
            Command::Next => self.next(),
            Command::Previous => self.previous(),
            Command::GoTo(index) => self.go_to(index)?,
            Command::First => self.first(),
            Command::Last => self.last(),
        }
        Ok(())
    }

    pub fn position(&self) -> Position {
        Position {
            number: self.current_index + 1,
            total: self.len(),
        }
    }

    pub fn can_go_previous(&self) -> bool {
        match self.edges {
            EdgeBehavior::Wrap => self.len() > 1,
            EdgeBehavior::Stop => self.current_index > 0,
        }
    }

    pub fn can_go_next(&self) -> bool {
        match self.edges {
            EdgeBehavior::Wrap => self.len() > 1,
            EdgeBehavior::Stop => self.current_index + 1 < self.len(),
        }
    }

    pub fn indicators(&self) -> impl Iterator<Item = Indicator> + '_ {
        (0..self.len()).map(|index| Indicator {
            index,
            label: (index + 1).to_string(),
            active: index == self.current_index,
        })
    }

    pub fn frame(&self) -> Frame<'_, C> {
        let slide = self.current();
        Frame {
            id: &slide.id,
            title: &slide.title,
            subtitle: slide.subtitle.as_deref(),
            content: &slide.content,
            position: self.position(),
            can_go_previous: self.can_go_previous(),
            can_go_next: self.can_go_next(),
        }
    }
}
