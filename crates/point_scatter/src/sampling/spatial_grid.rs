//! Uniform acceleration grid holding at most one point per cell.
use glam::DVec2;

/// Integer coordinates of a [`SpatialGrid`] cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridCell(
    /// Cell index along the X axis.
    pub usize,
    /// Cell index along the Y axis.
    pub usize,
);

/// Content of a single grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum CellSlot {
    #[default]
    Empty,
    Occupied(DVec2),
}

/// Fixed-size grid over a sampling domain.
///
/// The sampler sizes cells so that two accepted points can never share a cell, which
/// bounds every neighbourhood query to a constant number of comparisons.
#[derive(Clone, Debug)]
pub struct SpatialGrid {
    cell_size: f64,
    width: usize,
    height: usize,
    cells: Vec<CellSlot>,
}

impl SpatialGrid {
    /// Creates an empty grid of `width x height` cells.
    ///
    /// # Panics
    ///
    /// Panics if `width * height` overflows `usize`.
    pub fn new(width: usize, height: usize, cell_size: f64) -> Self {
        debug_assert!(cell_size > 0.0, "cell_size must be > 0");
        let len = width
            .checked_mul(height)
            .unwrap_or_else(|| panic!("grid of {width}x{height} cells is too large"));
        Self {
            cell_size,
            width,
            height,
            cells: vec![CellSlot::Empty; len],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    /// Cell containing `point`. The point must be inside the covered area.
    pub fn cell_for(&self, point: DVec2) -> GridCell {
        let ix = (point.x / self.cell_size).floor();
        let iy = (point.y / self.cell_size).floor();
        debug_assert!(
            ix >= 0.0 && iy >= 0.0,
            "point {point} lies before the grid origin"
        );
        GridCell(ix as usize, iy as usize)
    }

    /// Stores `point` in `cell`, replacing whatever was there.
    pub fn set_point(&mut self, cell: GridCell, point: DVec2) {
        let idx = self.index(cell);
        debug_assert!(
            matches!(self.cells[idx], CellSlot::Empty),
            "cell {cell:?} is already occupied"
        );
        self.cells[idx] = CellSlot::Occupied(point);
    }

    pub fn has_point(&self, cell: GridCell) -> bool {
        matches!(self.cells[self.index(cell)], CellSlot::Occupied(_))
    }

    /// Point stored in `cell`.
    ///
    /// # Panics
    ///
    /// Panics if the cell is empty.
    pub fn get_point(&self, cell: GridCell) -> DVec2 {
        match self.cells[self.index(cell)] {
            CellSlot::Occupied(point) => point,
            CellSlot::Empty => panic!("grid cell {cell:?} does not contain a point"),
        }
    }

    pub fn slot(&self, cell: GridCell) -> CellSlot {
        self.cells[self.index(cell)]
    }

    /// Number of occupied cells.
    pub fn occupied(&self) -> usize {
        self.cells
            .iter()
            .filter(|slot| matches!(slot, CellSlot::Occupied(_)))
            .count()
    }

    /// Whether any stored point within `reach` cells of `center` is closer to `point`
    /// than `min_distance`. The search window is clamped to the grid.
    pub fn has_neighbor_within(
        &self,
        center: GridCell,
        reach: usize,
        point: DVec2,
        min_distance: f64,
    ) -> bool {
        let min_distance_squared = min_distance * min_distance;
        let x0 = center.0.saturating_sub(reach);
        let x1 = center.0.saturating_add(reach).min(self.width - 1);
        let y0 = center.1.saturating_sub(reach);
        let y1 = center.1.saturating_add(reach).min(self.height - 1);

        for y in y0..=y1 {
            for x in x0..=x1 {
                let cell = GridCell(x, y);
                if self.has_point(cell)
                    && self.get_point(cell).distance_squared(point) < min_distance_squared
                {
                    return true;
                }
            }
        }

        false
    }

    #[inline]
    fn index(&self, cell: GridCell) -> usize {
        assert!(
            cell.0 < self.width && cell.1 < self.height,
            "grid cell {cell:?} outside {}x{} grid",
            self.width,
            self.height
        );
        cell.1 * self.width + cell.0
    }
}
