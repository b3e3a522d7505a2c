//! Windowed rendering for the gallery grid
//!
//! Items group into rows of `column_count` entries; only rows near the
//! scroll viewport are mounted. Total scroll height is reserved up front
//! from the estimated row height, and mounted rows position absolutely by
//! offset. All measurements (scroll offset, viewport size, container top)
//! arrive as plain inputs from the rendering adapter; nothing in here
//! queries the environment.
//!
//! This is a performance refinement, not a correctness requirement; a
//! full-list render consuming the same row grouping is a valid fallback.

/// Viewport width below which the grid uses two columns instead of three.
pub const COLUMN_BREAKPOINT_PX: f64 = 640.0;
/// Estimated height of one grid row, device px.
pub const DEFAULT_ROW_HEIGHT: f64 = 560.0;
/// Rows rendered beyond the visible range on each side.
pub const DEFAULT_OVERSCAN: usize = 2;
/// Height of the trailing load-more sentinel strip.
pub const SENTINEL_HEIGHT: f64 = 120.0;
/// Extra margin that counts the sentinel as visible slightly early.
pub const SENTINEL_ROOT_MARGIN: f64 = 200.0;

/// Responsive column count for the grid.
pub fn column_count(viewport_width: f64) -> usize {
    if viewport_width >= COLUMN_BREAKPOINT_PX {
        3
    } else {
        2
    }
}

/// Rows needed to hold `item_count` items at `columns` per row.
pub fn row_count(item_count: usize, columns: usize) -> usize {
    if columns == 0 {
        return 0;
    }
    item_count.div_ceil(columns)
}

/// Scroll measurements supplied by the rendering adapter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Scroll offset of the scroll container.
    pub scroll_top: f64,
    /// Visible height of the scroll container.
    pub height: f64,
}

/// One mounted row with its absolute offset inside the list container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VirtualRow {
    pub index: usize,
    /// Offset from the top of the list container, device px.
    pub start: f64,
    pub size: f64,
}

/// Window calculator for fixed-estimate rows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowVirtualizer {
    pub row_height: f64,
    pub overscan: usize,
    /// Distance from the scroll origin to the top of the list container
    /// (intro header etc.), measured once by the adapter.
    pub scroll_margin: f64,
}

impl Default for RowVirtualizer {
    fn default() -> Self {
        RowVirtualizer {
            row_height: DEFAULT_ROW_HEIGHT,
            overscan: DEFAULT_OVERSCAN,
            scroll_margin: 0.0,
        }
    }
}

impl RowVirtualizer {
    /// Total height to reserve for `rows` rows (sentinel excluded).
    pub fn total_size(&self, rows: usize) -> f64 {
        rows as f64 * self.row_height
    }

    /// Rows to mount for the current viewport, visible range ± overscan.
    pub fn window(&self, rows: usize, viewport: Viewport) -> Vec<VirtualRow> {
        if rows == 0 || self.row_height <= 0.0 {
            return Vec::new();
        }
        let list_top = viewport.scroll_top - self.scroll_margin;
        let first_visible = (list_top / self.row_height).floor().max(0.0) as usize;
        let last_visible = ((list_top + viewport.height) / self.row_height).ceil().max(0.0) as usize;

        let first = first_visible.saturating_sub(self.overscan);
        let last = (last_visible + self.overscan).min(rows);
        (first..last)
            .map(|index| VirtualRow {
                index,
                start: index as f64 * self.row_height,
                size: self.row_height,
            })
            .collect()
    }

    /// Whether the trailing sentinel strip is (nearly) in view. The
    /// adapter edge-detects transitions before notifying the feed.
    pub fn sentinel_visible(&self, rows: usize, viewport: Viewport) -> bool {
        let sentinel_top = self.scroll_margin + self.total_size(rows);
        viewport.scroll_top + viewport.height + SENTINEL_ROOT_MARGIN >= sentinel_top
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_count_breakpoint() {
        assert_eq!(column_count(375.0), 2);
        assert_eq!(column_count(639.9), 2);
        assert_eq!(column_count(640.0), 3);
        assert_eq!(column_count(1440.0), 3);
    }

    #[test]
    fn test_row_count_rounds_up() {
        assert_eq!(row_count(0, 3), 0);
        assert_eq!(row_count(6, 3), 2);
        assert_eq!(row_count(7, 3), 3);
        assert_eq!(row_count(8, 2), 4);
        assert_eq!(row_count(5, 0), 0);
    }

    #[test]
    fn test_total_size_reserves_all_rows() {
        let v = RowVirtualizer::default();
        assert_eq!(v.total_size(4), 4.0 * DEFAULT_ROW_HEIGHT);
    }

    #[test]
    fn test_window_mounts_visible_plus_overscan() {
        let v = RowVirtualizer {
            row_height: 100.0,
            overscan: 1,
            scroll_margin: 0.0,
        };
        // Viewport covers rows 5..8 (500..800).
        let window = v.window(
            50,
            Viewport {
                scroll_top: 500.0,
                height: 300.0,
            },
        );
        let indices: Vec<usize> = window.iter().map(|r| r.index).collect();
        assert_eq!(indices, vec![4, 5, 6, 7, 8]);
        assert_eq!(window[0].start, 400.0);
        assert_eq!(window[0].size, 100.0);
    }

    #[test]
    fn test_window_clamps_at_both_ends() {
        let v = RowVirtualizer {
            row_height: 100.0,
            overscan: 2,
            scroll_margin: 0.0,
        };
        let top = v.window(
            3,
            Viewport {
                scroll_top: 0.0,
                height: 100.0,
            },
        );
        assert_eq!(top.first().unwrap().index, 0);
        assert_eq!(top.last().unwrap().index, 2);

        let past_end = v.window(
            3,
            Viewport {
                scroll_top: 10_000.0,
                height: 100.0,
            },
        );
        assert!(past_end.is_empty());
    }

    #[test]
    fn test_scroll_margin_shifts_the_window() {
        let v = RowVirtualizer {
            row_height: 100.0,
            overscan: 0,
            scroll_margin: 250.0,
        };
        // scroll_top 250 lands exactly at the list top.
        let window = v.window(
            10,
            Viewport {
                scroll_top: 250.0,
                height: 100.0,
            },
        );
        assert_eq!(window.first().unwrap().index, 0);
    }

    #[test]
    fn test_sentinel_visibility_near_end() {
        let v = RowVirtualizer {
            row_height: 100.0,
            overscan: 0,
            scroll_margin: 0.0,
        };
        // 10 rows => sentinel at 1000; root margin 200 pulls it to 800.
        assert!(!v.sentinel_visible(
            10,
            Viewport {
                scroll_top: 0.0,
                height: 500.0
            }
        ));
        assert!(v.sentinel_visible(
            10,
            Viewport {
                scroll_top: 320.0,
                height: 500.0
            }
        ));
    }

    #[test]
    fn test_empty_list_has_no_rows() {
        let v = RowVirtualizer::default();
        assert!(v
            .window(
                0,
                Viewport {
                    scroll_top: 0.0,
                    height: 800.0
                }
            )
            .is_empty());
    }
}
