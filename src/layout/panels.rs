//! Panel-row layout: a small number of co-equal panels with a fixed gutter.
//!
//! Used by the comparison slide (problem/solution cards) and the diagram
//! slide's callout boxes. Panel `i` starts at `x0 + i * (width + gutter)`;
//! all panels share the same y-origin and extent.

use super::Frame;

/// Lay out `count` co-equal panels left-to-right.
///
/// Returns an empty vector for `count == 0`.
///
/// # Examples
///
/// ```rust
/// use longan::layout::panel_row;
///
/// // The two comparison cards: 4.1" wide with a 0.4" gutter.
/// let panels = panel_row(2, 0.7, 4.1, 0.4, 1.5, 3.5);
/// assert_eq!(panels[0].x, 0.7);
/// assert_eq!(panels[1].x, 5.2);
/// ```
pub fn panel_row(count: usize, x0: f64, width: f64, gutter: f64, y: f64, height: f64) -> Vec<Frame> {
    (0..count)
        .map(|index| Frame::new(x0 + index as f64 * (width + gutter), y, width, height))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_empty_table_yields_no_panels() {
        assert!(panel_row(0, 0.7, 4.1, 0.4, 1.5, 3.5).is_empty());
    }

    #[test]
    fn test_callout_boxes() {
        let panels = panel_row(2, 0.8, 3.5, 1.0, 4.1, 0.9);
        assert!((panels[1].x - 5.3).abs() < 1e-12);
        assert_eq!(panels[0].h, 0.9);
    }

    proptest! {
        #[test]
        fn prop_panels_are_co_equal_and_gapped(
            count in 1usize..8,
            x0 in 0.0f64..2.0,
            width in 0.5f64..4.0,
            gutter in 0.0f64..1.0,
        ) {
            let panels = panel_row(count, x0, width, gutter, 1.0, 3.0);
            for frame in &panels {
                prop_assert!((frame.w - width).abs() < 1e-9);
            }
            for pair in panels.windows(2) {
                prop_assert!((pair[1].x - pair[0].x - (width + gutter)).abs() < 1e-9);
            }
        }
    }
}
