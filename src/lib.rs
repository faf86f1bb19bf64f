//! Longan - A Rust library for composing slide decks from plain data
//!
//! This library turns small content tables into finished presentation
//! documents. Slides are described as data, composed into absolute
//! geometry by a repertoire of built-in layouts, and drained through a
//! narrow serializer boundary into a PowerPoint package.
//!
//! # Features
//!
//! - **Themes**: named semantic palettes and a shared shadow style
//! - **Layout engine**: pure, deterministic grid / column / panel layout
//!   on a fixed 16:9 canvas
//! - **Eight slide layouts**: title, comparison, architecture diagram,
//!   tabular list, numbered workflow, issue list, status board, closing
//! - **Serializer boundary**: a five-operation trait, so decks can be
//!   rendered by alternative backends or in-memory fakes in tests
//! - **Bundled .pptx backend**: DrawingML slide parts in a minimal OPC
//!   package, written in one filesystem operation
//!
//! # Example - Composing and writing a deck
//!
//! ```no_run
//! use longan::deck::Assembler;
//! use longan::serializer::PptxSerializer;
//! use longan::slides::{SlideContent, TitleContent, compose_deck};
//! use longan::{DeckMetadata, Theme};
//! use std::path::Path;
//!
//! # async fn run() -> longan::Result<()> {
//! let theme = Theme::ocean();
//! let contents = [SlideContent::Title(TitleContent {
//!     title: "Claude Game Player".into(),
//!     subtitle: "Autonomous Game-Playing Agent".into(),
//!     tagline: "Deployment & Operations Review".into(),
//!     date_line: "August 2026".into(),
//! })];
//!
//! let deck = compose_deck(DeckMetadata::new("Review", "Ops"), &contents, &theme)?;
//! let serializer = PptxSerializer::new(deck.metadata.clone());
//! let handle = Assembler::new(serializer)
//!     .build(&deck, Path::new("review.pptx"))
//!     .await?;
//! println!("wrote {} slides to {}", handle.slide_count(), handle.path().display());
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Low-level composition
//!
//! ```
//! use longan::Theme;
//! use longan::slides::{SlideContent, TableContent, TableRow};
//!
//! # fn main() -> longan::Result<()> {
//! let content = SlideContent::Table(TableContent {
//!     heading: "Deployment Scripts".into(),
//!     rows: vec![TableRow {
//!         name: "setup-vm.sh".into(),
//!         desc: "Provision the droplet".into(),
//!     }],
//! });
//!
//! // Composition is pure: no serializer involved yet.
//! let spec = content.compose(&Theme::ocean())?;
//! assert!(!spec.is_empty());
//! # Ok(())
//! # }
//! ```

pub mod common;
pub mod deck;
pub mod layout;
pub mod serializer;
pub mod slides;
pub mod theme;

// Convenience re-exports
pub use common::{Color, Error, Result};
pub use deck::{Assembler, CommitHandle, Deck, DeckMetadata, SlideSpec};
pub use layout::Frame;
pub use serializer::PptxSerializer;
pub use slides::{SlideContent, compose_deck};
pub use theme::Theme;
