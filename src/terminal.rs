use std::io;
use std::io::Stdout;
use std::io::Write;
use std::time::Duration;
use std::time::Instant;

use crossterm::cursor;
use crossterm::event;
use crossterm::execute;
use crossterm::queue;
use crossterm::style;
use crossterm::style::Attribute;
use crossterm::style::Color;
use crossterm::style::Colors;
use crossterm::terminal as ct;
use tracing::debug;
use tracing::warn;

use crate::config::CELL_COLS;
use crate::error::RenderError;
use crate::events::Control;
use crate::io::convert_event;
use crate::render::BLOCK_GLYPHS;
use crate::render::Canvas;
use crate::render::Glyphs;

/// The crossterm display and keyboard.
///
/// Creating one puts the terminal in raw mode on the alternate screen. Dropping it restores the
/// terminal, whichever way the program is leaving.
pub struct Terminal {
    stdout: Stdout,

    glyphs: Glyphs,

    /// Width of the terminal in columns
    cols: u16,

    /// Height of the terminal in rows
    rows: u16,
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        let (cols, rows) = ct::size()?;

        ct::enable_raw_mode()?;

        // From here on, `Drop` is responsible for undoing raw mode
        let mut term = Self {
            stdout: io::stdout(),
            glyphs: BLOCK_GLYPHS,
            cols,
            rows,
        };

        execute!(term.stdout, ct::EnterAlternateScreen, cursor::Hide)?;
        debug!(cols, rows, "terminal ready");

        Ok(term)
    }

    /// `(cols, rows)` of the terminal as last seen
    pub fn size(&self) -> (u16, u16) {
        (self.cols, self.rows)
    }

    pub fn resize(&mut self, cols: u16, rows: u16) {
        debug!(cols, rows, "terminal resized");

        self.cols = cols;
        self.rows = rows;
    }

    /// Wait up to `timeout` for the user to quit or interrupt.
    ///
    /// Resizes are applied on the spot and do not end the wait.
    pub fn poll_control(&mut self, timeout: Duration) -> io::Result<Option<Control>> {
        let start = Instant::now();

        loop {
            let left = timeout.saturating_sub(start.elapsed());

            if !event::poll(left)? {
                return Ok(None);
            }

            match convert_event(event::read()?) {
                Some(Control::Resize { cols, rows }) => self.resize(cols, rows),
                Some(control) => return Ok(Some(control)),
                None => {}
            }
        }
    }

    fn restore(&mut self) -> io::Result<()> {
        execute!(
            self.stdout,
            style::ResetColor,
            cursor::Show,
            ct::LeaveAlternateScreen
        )?;

        ct::disable_raw_mode()
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        if let Err(e) = self.restore() {
            warn!("Failed to restore the terminal: {e}");
        }
    }
}

impl Canvas for Terminal {
    fn clear(&mut self) -> Result<(), RenderError> {
        queue!(self.stdout, ct::Clear(ct::ClearType::All))?;
        Ok(())
    }

    fn draw_cell(&mut self, row: usize, col: usize, alive: bool) -> Result<(), RenderError> {
        let x = col * CELL_COLS;

        if row >= self.rows as usize || x + CELL_COLS > self.cols as usize {
            return Err(RenderError::OutOfBounds { row, col });
        }

        let glyph = self.glyphs.for_state(alive);

        queue!(self.stdout, cursor::MoveTo(x as u16, row as u16))?;

        if alive {
            queue!(
                self.stdout,
                style::SetAttribute(Attribute::Bold),
                style::SetColors(Colors::new(Color::White, Color::Black)),
                style::Print(glyph),
                style::SetAttribute(Attribute::Reset),
            )?;
        } else {
            queue!(
                self.stdout,
                style::SetColors(Colors::new(Color::Black, Color::Black)),
                style::Print(glyph),
            )?;
        }

        Ok(())
    }

    fn draw_status(&mut self, text: &str) -> Result<(), RenderError> {
        let text: String = text.chars().take(self.cols as usize).collect();

        queue!(
            self.stdout,
            cursor::MoveTo(0, 0),
            style::SetAttribute(Attribute::Bold),
            style::SetColors(Colors::new(Color::White, Color::Black)),
            style::Print(text),
            style::SetAttribute(Attribute::Reset),
        )?;

        Ok(())
    }

    fn present(&mut self) -> Result<(), RenderError> {
        queue!(self.stdout, style::ResetColor)?;
        self.stdout.flush()?;

        Ok(())
    }
}
