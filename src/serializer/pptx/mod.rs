//! Bundled PowerPoint backend.
//!
//! Accumulates draw calls as DrawingML slide parts in memory and writes a
//! complete OPC package in a single filesystem operation at commit, so the
//! destination never holds a partially written document.
//!
//! # Examples
//!
//! ```no_run
//! use longan::serializer::{PptxSerializer, Serializer, ShapeKind, ShapeStyle};
//! use longan::{Color, DeckMetadata, Frame};
//! use std::path::Path;
//!
//! # async fn run() -> longan::Result<()> {
//! let mut serializer = PptxSerializer::new(DeckMetadata::new("Deck", "Author"));
//! serializer.add_slide()?;
//! serializer.set_background(Color::new(0xFF, 0xFF, 0xFF))?;
//! serializer.add_shape(
//!     ShapeKind::Rectangle,
//!     Frame::new(0.5, 0.5, 2.0, 1.0),
//!     &ShapeStyle { fill: Color::BLACK, shadow: None },
//! )?;
//! serializer.commit(Path::new("deck.pptx")).await?;
//! # Ok(())
//! # }
//! ```

// Submodule declarations
mod package;
mod slide;
mod template;

use super::{Serializer, ShapeKind, ShapeStyle};
use crate::common::{Color, Error, Result, TextRun, TextStyle};
use crate::deck::DeckMetadata;
use crate::layout::Frame;
use slide::SlidePart;
use std::path::{Path, PathBuf};

/// Serializer producing a `.pptx` package.
#[derive(Debug)]
pub struct PptxSerializer {
    metadata: DeckMetadata,
    slides: Vec<SlidePart>,
}

impl PptxSerializer {
    /// Create a serializer for a deck with the given document metadata.
    pub fn new(metadata: DeckMetadata) -> Self {
        Self {
            metadata,
            slides: Vec::new(),
        }
    }

    /// Number of slides started so far.
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    fn current(&mut self) -> Result<&mut SlidePart> {
        self.slides
            .last_mut()
            .ok_or_else(|| Error::Serialization("draw call before add_slide".into()))
    }
}

impl Serializer for PptxSerializer {
    fn add_slide(&mut self) -> Result<()> {
        self.slides.push(SlidePart::new());
        tracing::debug!(slide = self.slides.len(), "slide part started");
        Ok(())
    }

    fn set_background(&mut self, fill: Color) -> Result<()> {
        self.current()?.background = Some(fill);
        Ok(())
    }

    fn add_shape(&mut self, kind: ShapeKind, frame: Frame, style: &ShapeStyle) -> Result<()> {
        frame.validate()?;
        self.current()?.add_shape(kind, frame, style)
    }

    fn add_text(&mut self, frame: Frame, runs: &[TextRun], style: &TextStyle) -> Result<()> {
        frame.validate()?;
        self.current()?.add_text(frame, runs, style)
    }

    async fn commit(&mut self, dest: &Path) -> Result<PathBuf> {
        let bytes = package::package_bytes(&self.metadata, &self.slides)?;
        tokio::fs::write(dest, &bytes).await?;
        tracing::info!(
            path = %dest.display(),
            slides = self.slides.len(),
            bytes = bytes.len(),
            "package written"
        );
        Ok(dest.to_path_buf())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::{FontFace, TextStyle};

    fn serializer() -> PptxSerializer {
        PptxSerializer::new(DeckMetadata::new("Deck", "Author"))
    }

    #[test]
    fn test_draw_before_add_slide_is_rejected() {
        let mut s = serializer();
        let err = s.set_background(Color::BLACK).unwrap_err();
        assert!(matches!(err, Error::Serialization(_)));
        assert!(!err.is_configuration());
    }

    #[test]
    fn test_invalid_geometry_is_rejected() {
        let mut s = serializer();
        s.add_slide().unwrap();
        let err = s
            .add_text(
                Frame::new(0.0, 0.0, -1.0, 1.0),
                &[TextRun::plain("x")],
                &TextStyle::new(FontFace::Calibri, 12.0, Color::BLACK),
            )
            .unwrap_err();
        assert!(matches!(err, Error::InvalidGeometry(_)));
    }

    #[tokio::test]
    async fn test_committed_package_contains_composed_slides() {
        use crate::deck::Assembler;
        use crate::slides::{SlideContent, TableContent, TableRow, compose_deck};
        use crate::theme::Theme;
        use std::io::Read;

        let contents = [SlideContent::Table(TableContent {
            heading: "Deployment Scripts".into(),
            rows: vec![TableRow {
                name: "setup.sh".into(),
                desc: "One-time VM provisioning".into(),
            }],
        })];
        let deck = compose_deck(
            DeckMetadata::new("Review", "Ops"),
            &contents,
            &Theme::ocean(),
        )
        .unwrap();

        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("review.pptx");
        let handle = Assembler::new(PptxSerializer::new(deck.metadata.clone()))
            .build(&deck, &dest)
            .await
            .unwrap();
        assert_eq!(handle.slide_count(), 1);

        let file = std::fs::File::open(&dest).unwrap();
        let mut archive = zip::ZipArchive::new(file).unwrap();
        let mut slide_xml = String::new();
        archive
            .by_name("ppt/slides/slide1.xml")
            .unwrap()
            .read_to_string(&mut slide_xml)
            .unwrap();
        assert!(slide_xml.contains("Deployment Scripts"));
        assert!(slide_xml.contains("setup.sh"));

        let mut core = String::new();
        archive
            .by_name("docProps/core.xml")
            .unwrap()
            .read_to_string(&mut core)
            .unwrap();
        assert!(core.contains("<dc:title>Review</dc:title>"));
    }

    #[tokio::test]
    async fn test_commit_writes_package_to_destination() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("deck.pptx");

        let mut s = serializer();
        s.add_slide().unwrap();
        s.set_background(Color::new(0x0B, 0x1D, 0x3A)).unwrap();
        let path = s.commit(&dest).await.unwrap();

        assert_eq!(path, dest);
        let bytes = std::fs::read(&dest).unwrap();
        // Zip local file header magic.
        assert_eq!(&bytes[..4], b"PK\x03\x04");
    }
}
