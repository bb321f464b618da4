//! Background dot grid.
//!
//! A fixed lattice of dots behind the content, rebuilt whenever the terminal
//! resizes. Layout only; drawing happens in the section widget.

/// Dot lattice covering the viewport at a fixed spacing.
#[derive(Debug, Clone)]
pub struct DotGrid {
    spacing: u16,
    cols: u16,
    rows: u16,
}

impl DotGrid {
    pub fn new(spacing: u16, width: u16, height: u16) -> Self {
        let mut grid = Self {
            spacing: spacing.max(1),
            cols: 0,
            rows: 0,
        };
        grid.rebuild(width, height);
        grid
    }

    /// Recompute the lattice for a new viewport size.
    pub fn rebuild(&mut self, width: u16, height: u16) {
        self.cols = width.div_ceil(self.spacing);
        self.rows = height.div_ceil(self.spacing);
    }

    pub fn spacing(&self) -> u16 {
        self.spacing
    }

    /// Dot cell positions in viewport coordinates.
    pub fn positions(&self) -> impl Iterator<Item = (u16, u16)> + '_ {
        let spacing = self.spacing;
        (0..self.rows).flat_map(move |row| {
            (0..self.cols).map(move |col| (col * spacing, row * spacing))
        })
    }

    pub fn len(&self) -> usize {
        self.cols as usize * self.rows as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_covers_viewport() {
        let grid = DotGrid::new(6, 80, 24);
        // ceil(80/6)=14 cols, ceil(24/6)=4 rows
        assert_eq!(grid.len(), 14 * 4);
        let max = grid.positions().last().unwrap();
        assert_eq!(max, (13 * 6, 3 * 6));
    }

    #[test]
    fn test_rebuild_on_resize() {
        let mut grid = DotGrid::new(6, 80, 24);
        grid.rebuild(120, 40);
        assert_eq!(grid.len(), 20 * 7);
    }

    #[test]
    fn test_zero_viewport_is_empty() {
        let grid = DotGrid::new(6, 0, 0);
        assert!(grid.is_empty());
        assert_eq!(grid.positions().count(), 0);
    }

    #[test]
    fn test_zero_spacing_clamped() {
        let grid = DotGrid::new(0, 10, 10);
        assert_eq!(grid.spacing(), 1);
        assert_eq!(grid.len(), 100);
    }
}
