//! Deck assembler: drains slide specs into a serializer in order.

use super::{Deck, SlideSpec};
use crate::common::{Error, Result};
use crate::layout::Primitive;
use crate::serializer::{Serializer, ShapeKind, ShapeStyle};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Proof that a deck was committed: the resolved output path and the
/// number of slides written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitHandle {
    path: PathBuf,
    slide_count: usize,
}

impl CommitHandle {
    /// Path the document was written to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of slides in the committed document.
    pub fn slide_count(&self) -> usize {
        self.slide_count
    }
}

/// Streams slide specs to a [`Serializer`] and performs the single
/// terminal commit.
///
/// The assembler is strictly sequential: slides are drawn in the order
/// given and nothing overlaps the final awaited persist. After a commit
/// every further operation fails with [`Error::AlreadyCommitted`].
///
/// # Examples
///
/// ```rust,no_run
/// use longan::deck::{Assembler, Deck, DeckMetadata};
/// use longan::serializer::PptxSerializer;
///
/// # async fn run(deck: Deck) -> longan::common::Result<()> {
/// let serializer = PptxSerializer::new(deck.metadata.clone());
/// let handle = Assembler::new(serializer).build(&deck, "out.pptx").await?;
/// println!("written: {}", handle.path().display());
/// # Ok(())
/// # }
/// ```
pub struct Assembler<S: Serializer> {
    serializer: S,
    slides_drawn: usize,
    committed: bool,
}

impl<S: Serializer> Assembler<S> {
    /// Wrap a serializer in an assembler.
    pub fn new(serializer: S) -> Self {
        Self {
            serializer,
            slides_drawn: 0,
            committed: false,
        }
    }

    /// Draw one slide: `add_slide`, `set_background`, then every primitive
    /// in emission order.
    ///
    /// # Errors
    ///
    /// [`Error::AlreadyCommitted`] if the deck was committed; any error the
    /// serializer returns for a rejected draw call.
    pub fn draw_slide(&mut self, spec: &SlideSpec) -> Result<()> {
        if self.committed {
            return Err(Error::AlreadyCommitted);
        }

        self.serializer.add_slide()?;
        self.serializer.set_background(spec.background)?;

        for primitive in &spec.primitives {
            match primitive {
                Primitive::Rect {
                    frame,
                    fill,
                    shadow,
                } => self.serializer.add_shape(
                    ShapeKind::Rectangle,
                    *frame,
                    &ShapeStyle {
                        fill: *fill,
                        shadow: *shadow,
                    },
                )?,
                Primitive::Oval { frame, fill } => self.serializer.add_shape(
                    ShapeKind::Ellipse,
                    *frame,
                    &ShapeStyle {
                        fill: *fill,
                        shadow: None,
                    },
                )?,
                Primitive::Text { frame, runs, style } => {
                    self.serializer.add_text(*frame, runs, style)?
                },
            }
        }

        self.slides_drawn += 1;
        debug!(
            slide = self.slides_drawn,
            primitives = spec.len(),
            "slide drawn"
        );
        Ok(())
    }

    /// Persist everything drawn so far. Terminal: no further draws or
    /// commits are accepted afterwards.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyDeck`] if no slide was drawn; [`Error::AlreadyCommitted`]
    /// on a second commit; any error the serializer's persist surfaces
    /// (not retried, never partially committed).
    pub async fn commit<P: AsRef<Path>>(&mut self, dest: P) -> Result<CommitHandle> {
        if self.committed {
            return Err(Error::AlreadyCommitted);
        }
        if self.slides_drawn == 0 {
            return Err(Error::EmptyDeck);
        }

        let path = self.serializer.commit(dest.as_ref()).await?;
        self.committed = true;
        info!(path = %path.display(), slides = self.slides_drawn, "deck committed");

        Ok(CommitHandle {
            path,
            slide_count: self.slides_drawn,
        })
    }

    /// Draw every slide of `deck` in order, then commit.
    ///
    /// An empty deck is rejected before any serializer call.
    pub async fn build<P: AsRef<Path>>(mut self, deck: &Deck, dest: P) -> Result<CommitHandle> {
        if deck.is_empty() {
            return Err(Error::EmptyDeck);
        }

        for spec in deck.slides() {
            self.draw_slide(spec)?;
        }
        self.commit(dest).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::{Color, FontFace, TextStyle};
    use crate::deck::DeckMetadata;
    use crate::layout::Frame;

    /// Records the boundary calls it receives, in order.
    #[derive(Default)]
    struct RecordingSerializer {
        calls: Vec<String>,
        fail_commit: bool,
    }

    impl Serializer for RecordingSerializer {
        fn add_slide(&mut self) -> Result<()> {
            self.calls.push("add_slide".into());
            Ok(())
        }

        fn set_background(&mut self, fill: Color) -> Result<()> {
            self.calls.push(format!("set_background {}", fill.to_hex()));
            Ok(())
        }

        fn add_shape(&mut self, kind: ShapeKind, frame: Frame, _style: &ShapeStyle) -> Result<()> {
            self.calls.push(format!("add_shape {kind:?} @{},{}", frame.x, frame.y));
            Ok(())
        }

        fn add_text(
            &mut self,
            frame: Frame,
            _runs: &[crate::common::TextRun],
            _style: &TextStyle,
        ) -> Result<()> {
            self.calls.push(format!("add_text @{},{}", frame.x, frame.y));
            Ok(())
        }

        async fn commit(&mut self, dest: &Path) -> Result<PathBuf> {
            if self.fail_commit {
                return Err(Error::Serialization("target unwritable".into()));
            }
            self.calls.push("commit".into());
            Ok(dest.to_path_buf())
        }
    }

    fn sample_spec() -> SlideSpec {
        let mut spec = SlideSpec::new(Color::new(0xF5, 0xF9, 0xFB));
        spec.push(Primitive::rect(
            Frame::new(0.7, 1.5, 8.6, 0.5),
            Color::new(0xFF, 0xFF, 0xFF),
        ));
        spec.push(Primitive::text(
            Frame::new(1.0, 1.5, 3.5, 0.5),
            "VM Provisioned",
            TextStyle::new(FontFace::Calibri, 13.0, Color::BLACK),
        ));
        spec
    }

    fn sample_deck(slides: usize) -> Deck {
        let mut deck = Deck::new(DeckMetadata::new("Test", "Tester"));
        for _ in 0..slides {
            deck.push(sample_spec());
        }
        deck
    }

    #[tokio::test]
    async fn test_draw_calls_preserve_emission_order() {
        let mut assembler = Assembler::new(RecordingSerializer::default());
        assembler.draw_slide(&sample_spec()).unwrap();
        let handle = assembler.commit("deck.pptx").await.unwrap();

        assert_eq!(handle.slide_count(), 1);
        assert_eq!(
            assembler.serializer.calls,
            vec![
                "add_slide",
                "set_background F5F9FB",
                "add_shape Rectangle @0.7,1.5",
                "add_text @1,1.5",
                "commit",
            ]
        );
    }

    #[tokio::test]
    async fn test_empty_deck_fails_before_any_serializer_call() {
        let serializer = RecordingSerializer::default();
        let result = Assembler::new(serializer).build(&sample_deck(0), "deck.pptx").await;
        assert!(matches!(result, Err(Error::EmptyDeck)));
    }

    #[tokio::test]
    async fn test_commit_without_slides_is_rejected() {
        let mut assembler = Assembler::new(RecordingSerializer::default());
        let result = assembler.commit("deck.pptx").await;
        assert!(matches!(result, Err(Error::EmptyDeck)));
        assert!(assembler.serializer.calls.is_empty());
    }

    #[tokio::test]
    async fn test_draws_after_commit_are_rejected() {
        let mut assembler = Assembler::new(RecordingSerializer::default());
        assembler.draw_slide(&sample_spec()).unwrap();
        assembler.commit("deck.pptx").await.unwrap();

        let err = assembler.draw_slide(&sample_spec()).unwrap_err();
        assert!(matches!(err, Error::AlreadyCommitted));
        assert!(err.is_configuration());

        let err = assembler.commit("deck.pptx").await.unwrap_err();
        assert!(matches!(err, Error::AlreadyCommitted));
    }

    #[tokio::test]
    async fn test_failed_commit_is_surfaced_and_not_retried() {
        let serializer = RecordingSerializer {
            fail_commit: true,
            ..Default::default()
        };
        let result = Assembler::new(serializer).build(&sample_deck(2), "deck.pptx").await;
        assert!(matches!(result, Err(Error::Serialization(_))));
    }
}
