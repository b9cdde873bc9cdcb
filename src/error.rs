use std::io;

use thiserror::Error;

/// The terminal offered less room than the game needs. Sizes are `(rows, cols)`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error(
    "The terminal size is too small! Minimum is {}x{} (rows x cols), current is {}x{}. \
     Please maximise your terminal window and try again.",
    .minimum.0, .minimum.1, .offered.0, .offered.1
)]
pub struct SizeError {
    pub offered: (u16, u16),
    pub minimum: (u16, u16),
}

#[derive(Error, Debug)]
pub enum RenderError {
    /// The glyph for `(row, col)` would land outside the physical display
    #[error("cell ({row}, {col}) is outside the display")]
    OutOfBounds { row: usize, col: usize },

    #[error("display error: {0}")]
    Io(#[from] io::Error),
}
