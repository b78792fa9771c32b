//! Spatial grid for fast hit testing.
//!
//! Divides screen space into cells and indexes hittable frames by which cells
//! they overlap. Point queries only scan frames in the relevant cell instead
//! of the full list.

use std::collections::HashMap;

use crate::layout::LayoutRect;

/// Cell size in screen pixels. Each cell is CELL_SIZE × CELL_SIZE.
const CELL_SIZE: f32 = 64.0;

/// Spatial grid for O(1) cell lookup + O(k) scan within the cell.
#[derive(Debug)]
pub struct HitGrid {
    /// Flat array of cells, indexed by `row * cols + col`.
    /// Each cell holds frame IDs that overlap it, in strata/level order (low→high).
    cells: Vec<Vec<u64>>,
    rects: HashMap<u64, LayoutRect>,
    cols: usize,
    rows: usize,
}

impl HitGrid {
    /// Build a grid from the sorted hittable list.
    ///
    /// `hittable` must be sorted lowest-strata-first, so reverse iteration
    /// yields the topmost frame.
    pub fn new(hittable: &[(u64, LayoutRect)], screen_w: f32, screen_h: f32) -> Self {
        let cols = ((screen_w / CELL_SIZE).ceil() as usize).max(1);
        let rows = ((screen_h / CELL_SIZE).ceil() as usize).max(1);
        let mut cells: Vec<Vec<u64>> = vec![Vec::new(); cols * rows];
        let mut rects = HashMap::with_capacity(hittable.len());

        for &(id, rect) in hittable {
            if rect.is_empty() || rect.right() <= 0.0 || rect.bottom() <= 0.0 || rect.x >= screen_w || rect.y >= screen_h {
                continue;
            }
            rects.insert(id, rect);
            let (c0, r0, c1, r1) = cell_range(rect, cols, rows);
            for row in r0..=r1 {
                for col in c0..=c1 {
                    cells[row * cols + col].push(id);
                }
            }
        }

        Self { cells, rects, cols, rows }
    }

    /// Find the topmost frame containing the point.
    pub fn topmost_at(&self, x: f32, y: f32) -> Option<u64> {
        self.all_at(x, y).next()
    }

    /// Every frame containing the point, topmost first.
    pub fn all_at(&self, x: f32, y: f32) -> impl Iterator<Item = u64> + '_ {
        let cell: &[u64] = if x < 0.0 || y < 0.0 {
            &[]
        } else {
            let col = ((x / CELL_SIZE) as usize).min(self.cols - 1);
            let row = ((y / CELL_SIZE) as usize).min(self.rows - 1);
            &self.cells[row * self.cols + col]
        };
        cell.iter()
            .rev()
            .copied()
            .filter(move |id| self.rects.get(id).is_some_and(|r| r.contains(x, y)))
    }

    /// Check if a frame is in the hittable set and contains the point.
    pub fn contains(&self, id: u64, x: f32, y: f32) -> bool {
        self.rects.get(&id).is_some_and(|r| r.contains(x, y))
    }
}

/// Compute the inclusive cell range `(col_start, row_start, col_end, row_end)`
/// for a rectangle.
fn cell_range(rect: LayoutRect, cols: usize, rows: usize) -> (usize, usize, usize, usize) {
    let c0 = (rect.x.max(0.0) / CELL_SIZE) as usize;
    let r0 = (rect.y.max(0.0) / CELL_SIZE) as usize;
    let c1 = (rect.right().max(0.0) / CELL_SIZE) as usize;
    let r1 = (rect.bottom().max(0.0) / CELL_SIZE) as usize;
    (
        c0.min(cols - 1),
        r0.min(rows - 1),
        c1.min(cols - 1),
        r1.min(rows - 1),
    )
}
