/// A single position on the [`Grid`](crate::grid::Grid).
///
/// `x` and `y` are only kept for addressing and debugging. Neighbor arithmetic is done on grid
/// indices, never on these fields.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Cell {
    pub x: usize,
    pub y: usize,
    pub alive: bool,
}

impl Cell {
    /// A dead cell at `(x, y)`
    pub const fn dead(x: usize, y: usize) -> Self {
        Self { x, y, alive: false }
    }
}
