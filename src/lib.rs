//! Slide navigation and content model for the fuel prediction presenter.
//!
//! The [`Presentation`] controller owns the slide sequence and the cursor; the
//! binary renders the [`Frame`] it exposes with raylib.

pub mod command;
pub mod constants;
pub mod content;
pub mod deck;
pub mod error;
pub mod layout;
pub mod presentation;
pub mod slide;

pub use command::{Command, Direction};
pub use content::Content;
pub use error::{PresentationError, Result};
pub use presentation::{EdgeBehavior, Frame, Indicator, Position, Presentation};
pub use slide::Slide;
