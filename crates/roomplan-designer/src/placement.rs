//! Auto-placement by deterministic grid scan.
//!
//! Used when a newly added item does not fit at its default position. The
//! scan walks X (outer) and Z (inner) from `min` to `max` inclusive in fixed
//! steps at floor level and returns the first cell the validator accepts.
//! Tie-breaking is purely scan order; the result is not the cell nearest to
//! the origin.

use crate::item::{Footprint, PlacedItem};
use crate::validator::PlacementValidator;
use roomplan_core::Point3;

/// Candidate grid for the scan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementGrid {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl Default for PlacementGrid {
    fn default() -> Self {
        Self {
            min: -5.0,
            max: 5.0,
            step: 0.5,
        }
    }
}

impl PlacementGrid {
    pub fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }

    /// Number of coordinates per axis. Zero for an unusable grid.
    pub fn steps_per_axis(&self) -> usize {
        if !(self.step > 0.0) || !self.step.is_finite() || self.max < self.min {
            return 0;
        }
        // Tolerate float noise in (max - min) / step
        ((self.max - self.min) / self.step + 1e-9).floor() as usize + 1
    }

    /// Axis coordinates in scan order. Computed from an integer index so the
    /// last value lands exactly on `max` when the range is a multiple of the step.
    pub fn axis_values(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.steps_per_axis()).map(move |i| self.min + i as f64 * self.step)
    }

    /// All candidate floor points, X outer and Z inner.
    pub fn candidates(&self) -> impl Iterator<Item = Point3> + '_ {
        self.axis_values()
            .flat_map(move |x| self.axis_values().map(move |z| Point3::on_floor(x, z)))
    }

    /// First legal cell for `footprint` among `existing`, or `None` when the
    /// whole grid is exhausted.
    pub fn find_placement(
        &self,
        validator: &PlacementValidator,
        footprint: &Footprint,
        existing: &[PlacedItem],
    ) -> Option<Point3> {
        let found = self
            .candidates()
            .find(|candidate| validator.is_valid_position(*candidate, footprint, existing));

        match found {
            Some(position) => {
                tracing::debug!("Grid scan found free cell at {}", position);
            }
            None => {
                tracing::debug!(
                    "Grid scan exhausted {} cells against {} items",
                    self.steps_per_axis().pow(2),
                    existing.len()
                );
            }
        }
        found
    }
}

/// Grid scan with the default grid and room.
pub fn find_placement(new_item: &PlacedItem, existing: &[PlacedItem]) -> Option<Point3> {
    PlacementGrid::default().find_placement(
        &PlacementValidator::default(),
        &new_item.footprint(),
        existing,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use roomplan_core::{Dimensions, FurnitureDefinition};

    fn item(dims: Dimensions) -> PlacedItem {
        PlacedItem::new(FurnitureDefinition::new("box", "Box", "test"), dims)
    }

    #[test]
    fn test_default_grid_shape() {
        let grid = PlacementGrid::default();
        assert_eq!(grid.steps_per_axis(), 21);
        let values: Vec<f64> = grid.axis_values().collect();
        assert_eq!(values.first(), Some(&-5.0));
        assert_eq!(values.last(), Some(&5.0));
        assert_eq!(grid.candidates().count(), 21 * 21);
    }

    #[test]
    fn test_scan_order_is_x_outer() {
        let grid = PlacementGrid::new(0.0, 1.0, 0.5);
        let cells: Vec<Point3> = grid.candidates().collect();
        assert_eq!(cells[0], Point3::on_floor(0.0, 0.0));
        assert_eq!(cells[1], Point3::on_floor(0.0, 0.5));
        assert_eq!(cells[3], Point3::on_floor(0.5, 0.0));
    }

    #[test]
    fn test_unusable_grid_is_empty() {
        assert_eq!(PlacementGrid::new(0.0, 1.0, 0.0).steps_per_axis(), 0);
        assert_eq!(PlacementGrid::new(1.0, 0.0, 0.5).steps_per_axis(), 0);
        assert_eq!(PlacementGrid::new(0.0, 1.0, f64::NAN).steps_per_axis(), 0);
    }

    #[test]
    fn test_first_legal_cell_in_empty_room() {
        // A unit cube first fits where its box touches the room's corner
        let cube = item(Dimensions::unit());
        let found = find_placement(&cube, &[]).unwrap();
        assert_eq!(found, Point3::on_floor(-4.5, -4.0));
    }

    #[test]
    fn test_blocked_cells_are_skipped() {
        let cube = item(Dimensions::unit());
        let blocker = item(Dimensions::unit()).with_position(Point3::on_floor(-4.5, -4.0));
        let found = find_placement(&cube, &[blocker]).unwrap();
        // (-4.5, -3.5) overlaps the blocker; (-4.5, -3.0) only touches it
        assert_eq!(found, Point3::on_floor(-4.5, -3.0));
    }

    #[test]
    fn test_item_larger_than_room() {
        let huge = item(Dimensions::new(20.0, 1.0, 1.0));
        assert_eq!(find_placement(&huge, &[]), None);
    }
}
