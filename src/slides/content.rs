//! Content tables for the built-in slide layouts.
//!
//! These are the small data tables the layout engine turns into geometry.
//! Accent colors are referenced by semantic palette name and resolved
//! through the [`Theme`](crate::theme::Theme) while the slide is composed,
//! so a misspelled name fails before any serializer call.
//!
//! Row-oriented tables make per-row fields inseparable; the `from_columns`
//! constructors exist for callers holding parallel columns and validate
//! that the columns agree in length.

use crate::common::{Error, Result};
use serde::{Deserialize, Serialize};

/// Title slide: full-bleed accent bar, large heading, footer band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TitleContent {
    pub title: String,
    pub subtitle: String,
    pub tagline: String,
    /// Right-aligned footer text, typically a date
    pub date_line: String,
}

/// One card of a comparison slide: colored header band plus bullets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Panel {
    pub header: String,
    /// Palette name for the header band
    pub accent: String,
    pub bullets: Vec<String>,
}

/// Two-column (or N-column) comparison slide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonContent {
    pub heading: String,
    pub panels: Vec<Panel>,
}

/// One component card inside the architecture diagram.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    pub name: String,
    pub desc: String,
    /// Palette name for the card fill
    pub accent: String,
}

/// Architecture diagram slide: container box, component cards, flow note,
/// callout boxes underneath.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagramContent {
    pub heading: String,
    /// Monospace label at the top of the container box
    pub container_label: String,
    pub components: Vec<Component>,
    /// Italic connection note under the component row
    pub flow_note: String,
    pub callouts: Vec<String>,
}

/// One striped row of the tabular-list slide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    /// Monospace row key (a script or file name)
    pub name: String,
    pub desc: String,
}

/// Tabular-list slide with alternating row shading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableContent {
    pub heading: String,
    pub rows: Vec<TableRow>,
}

/// One numbered step of the workflow slide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowStep {
    pub title: String,
    pub desc: String,
}

/// Numbered-workflow slide: equal columns of circled step markers over
/// cards, with an optional command bar at the bottom.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowContent {
    pub heading: String,
    pub steps: Vec<WorkflowStep>,
    /// Monospace command shown in the bottom bar, if any
    pub command: Option<String>,
}

/// One issue/solution row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssueRow {
    pub issue: String,
    pub solution: String,
    /// Palette name for the row's accent edge
    pub accent: String,
}

/// Issue/solution slide: full-width cards with a colored accent edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssueListContent {
    pub heading: String,
    pub rows: Vec<IssueRow>,
}

impl IssueListContent {
    /// Build from parallel columns, validating that they agree in length.
    pub fn from_columns(
        heading: impl Into<String>,
        issues: Vec<String>,
        solutions: Vec<String>,
        accents: Vec<String>,
    ) -> Result<Self> {
        check_lengths("issues", issues.len(), "solutions", solutions.len())?;
        check_lengths("issues", issues.len(), "accents", accents.len())?;

        let rows = issues
            .into_iter()
            .zip(solutions)
            .zip(accents)
            .map(|((issue, solution), accent)| IssueRow {
                issue,
                solution,
                accent,
            })
            .collect();
        Ok(Self {
            heading: heading.into(),
            rows,
        })
    }
}

/// One row of the status board: a label and a colored status chip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusRow {
    pub label: String,
    pub status: String,
    /// Palette name for the status chip
    pub accent: String,
}

/// Status-board slide: striped label rows with status chips on the left,
/// a next-steps bullet column on the right.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusBoardContent {
    pub heading: String,
    pub rows: Vec<StatusRow>,
    pub next_heading: String,
    pub next_steps: Vec<String>,
}

impl StatusBoardContent {
    /// Build from parallel columns, validating that they agree in length.
    pub fn from_columns(
        heading: impl Into<String>,
        labels: Vec<String>,
        statuses: Vec<String>,
        accents: Vec<String>,
        next_heading: impl Into<String>,
        next_steps: Vec<String>,
    ) -> Result<Self> {
        check_lengths("labels", labels.len(), "statuses", statuses.len())?;
        check_lengths("labels", labels.len(), "accents", accents.len())?;

        let rows = labels
            .into_iter()
            .zip(statuses)
            .zip(accents)
            .map(|((label, status), accent)| StatusRow {
                label,
                status,
                accent,
            })
            .collect();
        Ok(Self {
            heading: heading.into(),
            rows,
            next_heading: next_heading.into(),
            next_steps,
        })
    }
}

/// Closing slide: dark card with heading, address, and monospace details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClosingContent {
    pub heading: String,
    /// Large monospace line, typically a host address
    pub address: String,
    pub lines: Vec<String>,
}

fn check_lengths(left: &'static str, left_len: usize, right: &'static str, right_len: usize) -> Result<()> {
    if left_len != right_len {
        return Err(Error::LengthMismatch {
            left,
            left_len,
            right,
            right_len,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_columns_rejects_mismatched_lengths() {
        let err = StatusBoardContent::from_columns(
            "Current Status",
            vec!["VM Provisioned".into(), "Login".into()],
            vec!["DONE".into()],
            vec!["mint".into(), "gold".into()],
            "Next Steps",
            vec![],
        )
        .unwrap_err();
        assert!(matches!(err, Error::LengthMismatch { left_len: 2, right_len: 1, .. }));
        assert!(err.is_configuration());
    }

    #[test]
    fn test_from_columns_zips_rows() {
        let content = IssueListContent::from_columns(
            "Issues & Solutions",
            vec!["blocked".into()],
            vec!["new user".into()],
            vec!["coral".into()],
        )
        .unwrap();
        assert_eq!(content.rows.len(), 1);
        assert_eq!(content.rows[0].solution, "new user");
    }
}
