//! Grid-row layout: stacked rows with alternating stripe fills.
//!
//! Used by the tabular-list and status-board slides. Row `i` starts at
//! `y0 + i * row_height`; even rows take stripe A, odd rows stripe B.

use crate::common::Color;
use serde::{Deserialize, Serialize};

/// Which of the two alternating stripe fills a row takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stripe {
    /// Even rows (0, 2, 4, …)
    A,
    /// Odd rows (1, 3, 5, …)
    B,
}

impl Stripe {
    /// Pick the fill for this stripe from the two alternatives.
    #[inline]
    pub fn pick(&self, a: Color, b: Color) -> Color {
        match self {
            Stripe::A => a,
            Stripe::B => b,
        }
    }
}

/// One slot in a grid-row layout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridRow {
    /// Zero-based row index
    pub index: usize,
    /// Row y-origin in inches
    pub y: f64,
    /// Alternating stripe assignment
    pub stripe: Stripe,
}

/// Lay out `count` rows starting at `y0` with constant `row_height`.
///
/// Returns an empty vector for `count == 0`.
///
/// # Examples
///
/// ```rust
/// use longan::layout::{grid_rows, Stripe};
///
/// let rows = grid_rows(2, 1.5, 0.6);
/// assert_eq!(rows[0].y, 1.5);
/// assert_eq!(rows[1].y, 2.1);
/// assert_eq!(rows[0].stripe, Stripe::A);
/// assert_eq!(rows[1].stripe, Stripe::B);
/// ```
pub fn grid_rows(count: usize, y0: f64, row_height: f64) -> Vec<GridRow> {
    (0..count)
        .map(|index| GridRow {
            index,
            y: y0 + index as f64 * row_height,
            stripe: if index % 2 == 0 { Stripe::A } else { Stripe::B },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_empty_table_yields_no_rows() {
        assert!(grid_rows(0, 1.4, 0.55).is_empty());
    }

    #[test]
    fn test_scripted_list_offsets() {
        let rows = grid_rows(7, 1.4, 0.55);
        assert_eq!(rows.len(), 7);
        assert!((rows[6].y - (1.4 + 6.0 * 0.55)).abs() < 1e-12);
    }

    proptest! {
        #[test]
        fn prop_row_origins_follow_arithmetic_progression(
            count in 0usize..64,
            y0 in 0.0f64..5.0,
            h in 0.01f64..2.0,
        ) {
            let rows = grid_rows(count, y0, h);
            prop_assert_eq!(rows.len(), count);
            for row in &rows {
                prop_assert!((row.y - (y0 + row.index as f64 * h)).abs() < 1e-9);
            }
            // Strictly increasing, non-overlapping for positive heights.
            for pair in rows.windows(2) {
                prop_assert!(pair[1].y > pair[0].y);
                prop_assert!(pair[1].y - pair[0].y >= h - 1e-9);
            }
        }

        #[test]
        fn prop_stripes_alternate_by_parity(count in 0usize..64) {
            for row in grid_rows(count, 0.0, 1.0) {
                let expected = if row.index % 2 == 0 { Stripe::A } else { Stripe::B };
                prop_assert_eq!(row.stripe, expected);
            }
        }

        #[test]
        fn prop_layout_is_deterministic(count in 0usize..32, y0 in 0.0f64..5.0, h in 0.01f64..1.0) {
            prop_assert_eq!(grid_rows(count, y0, h), grid_rows(count, y0, h));
        }
    }
}
