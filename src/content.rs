//! Structured payload for the authored slides.
//!
//! A slide body is a list of [`Row`]s drawn top to bottom; each row splits the
//! available width evenly between its [`Section`]s.

pub type Row = Vec<Section>;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Content {
    pub rows: Vec<Row>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Section {
    pub heading: Option<&'static str>,
    pub blocks: Vec<Block>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Paragraph(&'static str),
    List { ordered: bool, items: Vec<&'static str> },
    Cards { columns: usize, cards: Vec<Card> },
    Metrics(Vec<Metric>),
    Steps(Vec<Step>),
    Table(Table),
    Bars(Vec<Bar>),
    Images(Vec<Image>),
    Callout { title: &'static str, text: &'static str },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub title: &'static str,
    pub lines: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Metric {
    pub value: &'static str,
    pub label: &'static str,
    pub note: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub title: &'static str,
    pub text: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub header: Vec<&'static str>,
    pub rows: Vec<Vec<&'static str>>,
    /// Row drawn with the accent background.
    pub highlight: Option<usize>,
}

/// Horizontal bar; `fraction` is the bar width relative to the widest bar.
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: &'static str,
    pub fraction: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    /// File name inside the assets directory.
    pub file: &'static str,
    pub alt: &'static str,
}

impl Content {
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.rows.iter().flatten()
    }

    pub fn blocks(&self) -> impl Iterator<Item = &Block> {
        self.sections().flat_map(|s| s.blocks.iter())
    }

    /// Every image referenced by this slide, in reading order.
    pub fn images(&self) -> impl Iterator<Item = &Image> {
        self.blocks().flat_map(|block| match block {
            Block::Images(images) => images.as_slice(),
            _ => &[],
        })
    }
}

impl Section {
    pub fn new(heading: &'static str, blocks: Vec<Block>) -> Self {
        Self {
            heading: Some(heading),
            blocks,
        }
    }

    pub fn untitled(blocks: Vec<Block>) -> Self {
        Self {
            heading: None,
            blocks,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn images_are_collected_across_rows() {
        let content = Content::new(vec![
            vec![
                Section::untitled(vec![Block::Paragraph("text")]),
                Section::new(
                    "Charts",
                    vec![Block::Images(vec![Image { file: "a.png", alt: "A" }])],
                ),
            ],
            vec![Section::untitled(vec![Block::Images(vec![
                Image { file: "b.png", alt: "B" },
                Image { file: "c.png", alt: "C" },
            ])])],
        ]);
        let files: Vec<_> = content.images().map(|i| i.file).collect();
        assert_eq!(files, vec!["a.png", "b.png", "c.png"]);
    }
}
