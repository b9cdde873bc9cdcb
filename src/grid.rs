use crate::cell::Cell;
use crate::pattern::Pattern;

/// A fixed `height × width` lattice of [`Cell`]s whose edges wrap around.
///
/// Cells are stored row-major, so `(row, col)` lives at `row * width + col`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Cell>,
    width: usize,
    height: usize,
}

impl Grid {
    /// Create a grid where every cell is dead.
    ///
    /// Panics if either dimension is zero.
    pub fn new(width: usize, height: usize) -> Self {
        assert!(width > 0, "grid width must be positive");
        assert!(height > 0, "grid height must be positive");

        let cells = (0..height)
            .flat_map(|y| (0..width).map(move |x| Cell::dead(x, y)))
            .collect();

        Self {
            cells,
            width,
            height,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.cells[self.index(row, col)].alive
    }

    pub fn set_alive(&mut self, row: usize, col: usize, alive: bool) {
        let i = self.index(row, col);
        self.cells[i].alive = alive;
    }

    /// Turn on every cell of `pattern`, anchored at `(row, col)`. Offsets that run past an edge
    /// wrap around to the opposite one.
    pub fn stamp(&mut self, pattern: &Pattern, row: usize, col: usize) {
        for &(dy, dx) in pattern.cells {
            let (y, x) = self.wrap(row as isize + dy, col as isize + dx);
            self.set_alive(y, x, true);
        }
    }

    /// Number of live cells among the 8 cells around `(row, col)`, wrapping at the edges.
    ///
    /// On grids narrower or shorter than 3, the same cell can be reached from more than one
    /// direction and is counted once per direction.
    pub fn live_neighbors(&self, row: usize, col: usize) -> u8 {
        let (row, col) = (row as isize, col as isize);
        let mut count = 0;

        for dy in -1..=1 {
            for dx in -1..=1 {
                if dy == 0 && dx == 0 {
                    continue;
                }

                let (y, x) = self.wrap(row + dy, col + dx);
                if self.is_alive(y, x) {
                    count += 1;
                }
            }
        }

        count
    }

    pub fn alive_count(&self) -> usize {
        self.cells.iter().filter(|c| c.alive).count()
    }

    /// All cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Reduce a possibly out-of-range coordinate onto the torus
    fn wrap(&self, row: isize, col: isize) -> (usize, usize) {
        (
            row.rem_euclid(self.height as isize) as usize,
            col.rem_euclid(self.width as isize) as usize,
        )
    }

    fn index(&self, row: usize, col: usize) -> usize {
        assert!(row < self.height, "row is out of bounds");
        assert!(col < self.width, "col is out of bounds");

        row * self.width + col
    }
}
