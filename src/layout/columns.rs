//! Equal-column layout: constant-stride column origins.
//!
//! Used by the workflow slide (numbered step cards) and the architecture
//! diagram (component cards). Column `i` starts at `x_start + i * stride`.

use serde::{Deserialize, Serialize};

/// One slot in an equal-column layout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Column {
    /// Zero-based column index
    pub index: usize,
    /// Column x-origin in inches
    pub x: f64,
}

/// Lay out `count` columns starting at `x_start`, spaced by `stride`.
///
/// Returns an empty vector for `count == 0`.
///
/// # Examples
///
/// ```rust
/// use longan::layout::column_origins;
///
/// let cols = column_origins(4, 0.5, 2.35);
/// for (col, want) in cols.iter().zip([0.5, 2.85, 5.2, 7.55]) {
///     assert!((col.x - want).abs() < 1e-9);
/// }
/// ```
pub fn column_origins(count: usize, x_start: f64, stride: f64) -> Vec<Column> {
    (0..count)
        .map(|index| Column {
            index,
            x: x_start + index as f64 * stride,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_empty_table_yields_no_columns() {
        assert!(column_origins(0, 0.5, 2.35).is_empty());
    }

    proptest! {
        #[test]
        fn prop_stride_is_constant(
            count in 2usize..32,
            x_start in 0.0f64..5.0,
            stride in 0.1f64..3.0,
        ) {
            let cols = column_origins(count, x_start, stride);
            for pair in cols.windows(2) {
                prop_assert!((pair[1].x - pair[0].x - stride).abs() < 1e-9);
            }
        }

        #[test]
        fn prop_layout_is_deterministic(count in 0usize..16, x in 0.0f64..5.0, s in 0.1f64..3.0) {
            prop_assert_eq!(column_origins(count, x, s), column_origins(count, x, s));
        }
    }
}
