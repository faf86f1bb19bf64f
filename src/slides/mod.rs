//! The slide layout repertoire.
//!
//! Eight built-in layouts, each a pure function from a small content table
//! and a theme to a [`SlideSpec`]: title, comparison, architecture diagram,
//! tabular list, numbered workflow, issue/solution rows, status board, and
//! closing card. [`SlideContent`] ties a content table to its layout so a
//! whole deck can be described as plain data.

// Submodule declarations
mod build;
mod content;

// Re-exports
pub use content::{
    ClosingContent, ComparisonContent, Component, DiagramContent, IssueListContent, IssueRow,
    Panel, StatusBoardContent, StatusRow, TableContent, TableRow, TitleContent, WorkflowContent,
    WorkflowStep,
};

use crate::common::Result;
use crate::deck::{Deck, DeckMetadata, SlideSpec};
use crate::theme::Theme;
use serde::{Deserialize, Serialize};

/// One slide's content, tagged with its layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SlideContent {
    Title(TitleContent),
    Comparison(ComparisonContent),
    Diagram(DiagramContent),
    Table(TableContent),
    Workflow(WorkflowContent),
    Issues(IssueListContent),
    StatusBoard(StatusBoardContent),
    Closing(ClosingContent),
}

impl SlideContent {
    /// Compose this content into a slide spec with the given theme.
    ///
    /// Pure and deterministic: identical inputs produce structurally
    /// identical specs. Fails with a configuration error before any
    /// serializer involvement.
    pub fn compose(&self, theme: &Theme) -> Result<SlideSpec> {
        match self {
            SlideContent::Title(c) => build::title(c, theme),
            SlideContent::Comparison(c) => build::comparison(c, theme),
            SlideContent::Diagram(c) => build::diagram(c, theme),
            SlideContent::Table(c) => build::table(c, theme),
            SlideContent::Workflow(c) => build::workflow(c, theme),
            SlideContent::Issues(c) => build::issues(c, theme),
            SlideContent::StatusBoard(c) => build::status_board(c, theme),
            SlideContent::Closing(c) => build::closing(c, theme),
        }
    }
}

/// Compose an ordered list of slide contents into a deck.
///
/// Any slide failing to compose aborts the whole deck, so a partially
/// composed deck never reaches a serializer.
pub fn compose_deck(
    metadata: DeckMetadata,
    contents: &[SlideContent],
    theme: &Theme,
) -> Result<Deck> {
    let mut deck = Deck::new(metadata);
    for content in contents {
        deck.push(content.compose(theme)?);
    }
    Ok(deck)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Error;
    use crate::layout::{Frame, Primitive, Stripe, grid_rows};

    fn theme() -> Theme {
        Theme::ocean()
    }

    fn status_fixture() -> StatusBoardContent {
        StatusBoardContent {
            heading: "Current Status".into(),
            rows: vec![
                StatusRow {
                    label: "VM Provisioned".into(),
                    status: "DONE".into(),
                    accent: "mint".into(),
                },
                StatusRow {
                    label: "Login".into(),
                    status: "IN PROGRESS".into(),
                    accent: "gold".into(),
                },
            ],
            next_heading: "Next Steps".into(),
            next_steps: vec!["Set password".into()],
        }
    }

    /// Row primitives for a status board start right after the heading:
    /// card, label, chip, chip text per row.
    fn status_row_cards(spec: &crate::deck::SlideSpec) -> Vec<(Frame, crate::common::Color)> {
        spec.primitives
            .iter()
            .filter_map(|p| match p {
                Primitive::Rect {
                    frame,
                    fill,
                    shadow: Some(_),
                } if frame.w == 5.5 => Some((*frame, *fill)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_status_board_rows_at_expected_offsets() {
        let spec = build::status_board(&status_fixture(), &theme()).unwrap();
        let cards = status_row_cards(&spec);
        assert_eq!(cards.len(), 2);
        assert!((cards[0].0.y - 1.5).abs() < 1e-12);
        assert!((cards[1].0.y - 2.1).abs() < 1e-12);
        // Row 0 takes stripe A (white), row 1 stripe B (light).
        assert_eq!(cards[0].1, theme().color("white").unwrap());
        assert_eq!(cards[1].1, theme().color("light").unwrap());
    }

    #[test]
    fn test_workflow_columns_at_expected_origins() {
        let content = WorkflowContent {
            heading: "Deployment Workflow".into(),
            steps: (1..=4)
                .map(|i| WorkflowStep {
                    title: format!("Step {i}"),
                    desc: String::new(),
                })
                .collect(),
            command: None,
        };
        let spec = build::workflow(&content, &theme()).unwrap();

        let card_xs: Vec<f64> = spec
            .primitives
            .iter()
            .filter_map(|p| match p {
                Primitive::Rect {
                    frame,
                    shadow: Some(_),
                    ..
                } => Some(frame.x),
                _ => None,
            })
            .collect();
        // The stride accumulates rounding error (0.5 + 3*2.35 is not
        // exactly 7.55 in f64), so compare within an epsilon.
        let expected = [0.5, 2.85, 5.2, 7.55];
        assert_eq!(card_xs.len(), expected.len());
        for (x, want) in card_xs.iter().zip(expected) {
            assert!((x - want).abs() < 1e-9, "card at {x}, expected {want}");
        }

        // Step markers are ovals numbered from 1.
        let markers = spec
            .primitives
            .iter()
            .filter(|p| matches!(p, Primitive::Oval { .. }))
            .count();
        assert_eq!(markers, 4);
    }

    #[test]
    fn test_empty_tables_produce_no_row_primitives() {
        let content = TableContent {
            heading: "Deployment Scripts".into(),
            rows: vec![],
        };
        let spec = build::table(&content, &theme()).unwrap();
        // Just the heading; no placeholder rows.
        assert_eq!(spec.len(), 1);
    }

    #[test]
    fn test_diagram_requires_components() {
        let content = DiagramContent {
            heading: "Architecture".into(),
            container_label: "Droplet".into(),
            components: vec![],
            flow_note: String::new(),
            callouts: vec![],
        };
        let err = build::diagram(&content, &theme()).unwrap_err();
        assert!(matches!(err, Error::EmptyContent(_)));
        assert!(err.is_configuration());
    }

    #[test]
    fn test_unknown_accent_fails_at_composition() {
        let mut content = status_fixture();
        content.rows[0].accent = "magenta".into();
        let err = build::status_board(&content, &theme()).unwrap_err();
        assert!(matches!(err, Error::UnknownColor(_)));
    }

    #[test]
    fn test_composition_is_idempotent() {
        let content = SlideContent::StatusBoard(status_fixture());
        assert_eq!(
            content.compose(&theme()).unwrap(),
            content.compose(&theme()).unwrap()
        );
    }

    #[test]
    fn test_compose_deck_preserves_order_and_aborts_on_error() {
        let theme = theme();
        let good = SlideContent::StatusBoard(status_fixture());
        let bad = SlideContent::Diagram(DiagramContent {
            heading: String::new(),
            container_label: String::new(),
            components: vec![],
            flow_note: String::new(),
            callouts: vec![],
        });

        let deck = compose_deck(
            crate::deck::DeckMetadata::new("t", "a"),
            &[good.clone(), good.clone()],
            &theme,
        )
        .unwrap();
        assert_eq!(deck.len(), 2);

        let err = compose_deck(
            crate::deck::DeckMetadata::new("t", "a"),
            &[good, bad],
            &theme,
        )
        .unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_grid_rows_match_slide_geometry() {
        // The builders and the raw layout function must agree.
        let rows = grid_rows(2, 1.5, 0.6);
        let spec = build::status_board(&status_fixture(), &theme()).unwrap();
        let cards = status_row_cards(&spec);
        for (row, (frame, _)) in rows.iter().zip(&cards) {
            assert!((row.y - frame.y).abs() < 1e-12);
            assert_eq!(row.stripe, if row.index % 2 == 0 { Stripe::A } else { Stripe::B });
        }
    }
}
