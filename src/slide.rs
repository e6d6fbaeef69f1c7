/// One immutable unit of the deck.
///
/// The controller never looks inside `content`; it only hands a reference to
/// whoever renders the frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Slide<C> {
    pub id: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub content: C,
}

impl<C> Slide<C> {
    pub fn new(id: impl Into<String>, title: impl Into<String>, content: C) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            subtitle: None,
            content,
        }
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }
}
