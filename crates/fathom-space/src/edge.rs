//! Spatial edge (boundary) behavior for the grid.

/// How the grid handles offsets that leave its bounds.
///
/// # Examples
///
/// ```
/// use fathom_core::Cell;
/// use fathom_space::{EdgeBehavior, Square8};
///
/// // Absorb: corner has 3 neighbours, interior has 8.
/// let absorb = Square8::new(4, 4, EdgeBehavior::Absorb).unwrap();
/// assert_eq!(absorb.neighbours(Cell::new(0, 0)).len(), 3);
/// assert_eq!(absorb.neighbours(Cell::new(1, 1)).len(), 8);
///
/// // Clamp: off-grid offsets collapse onto the boundary cell.
/// let clamp = Square8::new(4, 4, EdgeBehavior::Clamp).unwrap();
/// assert_eq!(clamp.resolve(fathom_core::Cell::new(0, 0), -1, -1), Some(Cell::new(0, 0)));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EdgeBehavior {
    /// Out-of-bounds target maps to the nearest boundary cell.
    Clamp,
    /// Out-of-bounds target is omitted.
    Absorb,
}
