//! Deck model: slide specifications, document metadata, and the assembler.
//!
//! A [`SlideSpec`] is pure data — one background fill plus an ordered list
//! of primitives — produced by the slide builders in [`slides`](crate::slides).
//! A [`Deck`] is an ordered, write-once sequence of specs plus document
//! metadata. The [`Assembler`] drains a deck into a serializer and performs
//! the single terminal commit.

// Submodule declarations
mod assembler;

// Re-exports
pub use assembler::{Assembler, CommitHandle};

use crate::common::Color;
use crate::layout::Primitive;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Document-level metadata written to the output's core properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeckMetadata {
    /// Presentation title
    pub title: String,
    /// Author name
    pub author: String,
    /// Creation timestamp
    pub created: DateTime<Utc>,
}

impl DeckMetadata {
    /// Create metadata stamped with the current time.
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            created: Utc::now(),
        }
    }
}

/// One slide before serialization: a background fill plus ordered
/// primitives. Primitive order is z-order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlideSpec {
    /// Solid background fill
    pub background: Color,
    /// Drawables in emission order
    pub primitives: Vec<Primitive>,
}

impl SlideSpec {
    /// Create an empty spec with the given background.
    pub fn new(background: Color) -> Self {
        Self {
            background,
            primitives: Vec::new(),
        }
    }

    /// Append a primitive on top of everything drawn so far.
    pub fn push(&mut self, primitive: Primitive) {
        self.primitives.push(primitive);
    }

    /// Append a sequence of primitives in order.
    pub fn extend(&mut self, primitives: impl IntoIterator<Item = Primitive>) {
        self.primitives.extend(primitives);
    }

    /// Number of primitives on the slide.
    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    /// Whether the slide has no primitives.
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }
}

/// An ordered sequence of slide specs plus document metadata.
///
/// Slide order is presentation order and is never reordered after assembly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deck {
    /// Document metadata
    pub metadata: DeckMetadata,
    slides: Vec<SlideSpec>,
}

impl Deck {
    /// Create an empty deck.
    pub fn new(metadata: DeckMetadata) -> Self {
        Self {
            metadata,
            slides: Vec::new(),
        }
    }

    /// Append a slide at the end of the presentation.
    pub fn push(&mut self, spec: SlideSpec) {
        self.slides.push(spec);
    }

    /// The slides in presentation order.
    pub fn slides(&self) -> &[SlideSpec] {
        &self.slides
    }

    /// Number of slides.
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Whether the deck has no slides.
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }
}
