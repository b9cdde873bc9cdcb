use std::fmt;

use tracing::trace;

use crate::config::CELL_COLS;
use crate::error::RenderError;
use crate::grid::Grid;
use crate::world::World;

/// What a cell looks like on screen. Both glyphs must be [`CELL_COLS`] characters wide.
#[derive(Debug, Clone, Copy)]
pub struct Glyphs {
    pub alive: &'static str,
    pub dead: &'static str,
}

impl Glyphs {
    pub fn for_state(&self, alive: bool) -> &'static str {
        if alive { self.alive } else { self.dead }
    }
}

pub const BLOCK_GLYPHS: Glyphs = Glyphs {
    alive: "██",
    dead: "▒▒",
};

pub const ASCII_GLYPHS: Glyphs = Glyphs {
    alive: "##",
    dead: "..",
};

/// Anything a frame can be drawn on.
///
/// The simulation only ever hands out `(row, col, alive)` triples, so swapping the display
/// never touches the world.
pub trait Canvas {
    /// Blank the whole display
    fn clear(&mut self) -> Result<(), RenderError>;

    /// Draw the cell at grid position `(row, col)`
    fn draw_cell(&mut self, row: usize, col: usize, alive: bool) -> Result<(), RenderError>;

    /// Write a line of status text over the top-left corner
    fn draw_status(&mut self, text: &str) -> Result<(), RenderError>;

    /// Make everything drawn so far visible
    fn present(&mut self) -> Result<(), RenderError>;
}

/// Draw every cell of `grid` on a cleared canvas.
///
/// Cells that fall outside the display are skipped for this frame only; any other failure is
/// returned.
pub fn render_frame<C: Canvas + ?Sized>(grid: &Grid, canvas: &mut C) -> Result<(), RenderError> {
    canvas.clear()?;

    let mut skipped = 0usize;

    for cell in grid.cells() {
        match canvas.draw_cell(cell.y, cell.x, cell.alive) {
            Ok(()) => {}
            Err(RenderError::OutOfBounds { .. }) => skipped += 1,
            Err(e) => return Err(e),
        }
    }

    if skipped > 0 {
        trace!(skipped, "cells outside the display");
    }

    canvas.present()
}

pub fn status_line(generation: u64, alive: usize) -> String {
    format!("Generation: {generation} | Alive: {alive}")
}

/// Overlay the generation and live-cell count on the canvas
pub fn render_status<C: Canvas + ?Sized>(world: &World, canvas: &mut C) -> Result<(), RenderError> {
    canvas.draw_status(&status_line(world.generation(), world.alive_count()))?;
    canvas.present()
}

/// An in-memory character display. Useful wherever a real terminal is not.
pub struct TextCanvas {
    /// The frame buffer, one `char` per display column
    fb: Vec<Vec<char>>,

    glyphs: Glyphs,

    /// Width of the display in columns
    cols: usize,

    /// Height of the display in rows
    rows: usize,
}

impl TextCanvas {
    pub fn new(rows: usize, cols: usize, glyphs: Glyphs) -> Self {
        Self {
            fb: vec![vec![' '; cols]; rows],
            glyphs,
            cols,
            rows,
        }
    }

    /// A canvas exactly large enough for `grid`
    pub fn fitting(grid: &Grid, glyphs: Glyphs) -> Self {
        Self::new(grid.height(), grid.width() * CELL_COLS, glyphs)
    }
}

impl Canvas for TextCanvas {
    fn clear(&mut self) -> Result<(), RenderError> {
        for line in &mut self.fb {
            line.fill(' ');
        }

        Ok(())
    }

    fn draw_cell(&mut self, row: usize, col: usize, alive: bool) -> Result<(), RenderError> {
        let x = col * CELL_COLS;

        if row >= self.rows || x + CELL_COLS > self.cols {
            return Err(RenderError::OutOfBounds { row, col });
        }

        let line = &mut self.fb[row];
        for (i, c) in self.glyphs.for_state(alive).chars().enumerate() {
            line[x + i] = c;
        }

        Ok(())
    }

    fn draw_status(&mut self, text: &str) -> Result<(), RenderError> {
        if let Some(line) = self.fb.first_mut() {
            for (slot, c) in line.iter_mut().zip(text.chars()) {
                *slot = c;
            }
        }

        Ok(())
    }

    fn present(&mut self) -> Result<(), RenderError> {
        Ok(())
    }
}

impl fmt::Display for TextCanvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.fb.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }

            for c in line {
                write!(f, "{c}")?;
            }
        }

        Ok(())
    }
}
