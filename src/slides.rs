// ABOUTME: Slide data model and segmenter for the poseur application
// ABOUTME: Groups translated source lines into slides of revealable items

use crate::markup::translate;

/// Marker appended to an item when a single blank line follows it.
const LINE_BREAK: &str = "<br />";

/// One incrementally revealed unit of text within a slide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    text: String,
}

impl Item {
    pub fn new(text: impl Into<String>) -> Self {
        Item { text: text.into() }
    }

    /// The display markup for this item.
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// An ordered group of items paged as a unit. Slides that reach a
/// presentation always hold at least one item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    items: Vec<Item>,
}

impl Slide {
    pub fn new(items: Vec<Item>) -> Self {
        Slide { items }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// The full ordered slide deck, built once and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Presentation {
    slides: Vec<Slide>,
}

impl Presentation {
    /// Build a presentation directly from prepared slides. Empty slides
    /// are skipped, so every retained slide has at least one item.
    pub fn new(slides: impl IntoIterator<Item = Slide>) -> Self {
        Presentation {
            slides: slides.into_iter().filter(|slide| !slide.is_empty()).collect(),
        }
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }
}

/// Group raw source lines into slides of revealable items.
///
/// A single blank line is a soft break inside the preceding item's
/// paragraph; two consecutive blank lines close the current slide. Blank
/// lines before any content are ignored, and a slide is only emitted once
/// a boundary or the end of input is seen, so no slide is ever empty.
pub fn segment<I, S>(lines: I) -> Presentation
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut slides = Vec::new();
    let mut current: Vec<Item> = Vec::new();
    let mut pending_break = false;

    for line in lines {
        let line = line.as_ref();
        if !line.trim().is_empty() {
            current.push(Item::new(translate(line)));
            pending_break = false;
        } else if pending_break {
            // Second blank line in a row: slide boundary.
            if !current.is_empty() {
                slides.push(Slide::new(std::mem::take(&mut current)));
            }
            pending_break = false;
        } else {
            // First blank line since the last content line: soft break on
            // the item it follows, not a new item.
            if let Some(last) = current.last_mut() {
                last.text.push_str(LINE_BREAK);
            }
            pending_break = true;
        }
    }

    if !current.is_empty() {
        slides.push(Slide::new(current));
    }

    Presentation { slides }
}
