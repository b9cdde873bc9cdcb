use std::time::Duration;

use tracing::debug;

use crate::error::SizeError;

/// Number of terminal columns a single cell occupies.
pub const CELL_COLS: usize = 2;

/// Deployment constants of the game. There are no flags or files; this is the whole of it.
#[derive(Debug, Clone)]
pub struct Config {
    /// Smallest terminal we agree to run in, in rows
    pub min_rows: u16,
    /// Smallest terminal we agree to run in, in columns
    pub min_cols: u16,

    /// Largest game area, in rows
    pub max_height: usize,
    /// Largest game area, in terminal columns. The cell grid gets half of this.
    pub max_width: usize,

    /// Time between generations
    pub tick: Duration,
    /// Time before the first frame is drawn
    pub startup_delay: Duration,
    /// Show the status line every this many generations
    pub status_interval: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            min_rows: 10,
            min_cols: 20,
            max_height: 100,
            max_width: 200,
            tick: Duration::from_millis(200),
            startup_delay: Duration::from_secs(1),
            status_interval: 100,
        }
    }
}

/// Dimensions of the cell grid that fits in a terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameArea {
    pub height: usize,
    pub width: usize,
}

impl GameArea {
    /// Fit a game area into a `rows × cols` terminal.
    ///
    /// One row and one column are left free so the last glyph never touches the corner of the
    /// screen.
    pub fn from_terminal(rows: u16, cols: u16, config: &Config) -> Result<Self, SizeError> {
        if rows < config.min_rows || cols < config.min_cols {
            return Err(SizeError {
                offered: (rows, cols),
                minimum: (config.min_rows, config.min_cols),
            });
        }

        let height = (rows as usize - 1).min(config.max_height);
        let width = ((cols as usize - 1) / CELL_COLS).min(config.max_width / CELL_COLS);

        debug!(rows, cols, height, width, "derived game area");

        Ok(Self { height, width })
    }
}

#[cfg(test)]
mod test {
    use super::Config;
    use super::GameArea;
    use crate::error::SizeError;

    #[test]
    fn too_small_reports_both_sizes() {
        let config = Config::default();
        let err = GameArea::from_terminal(5, 80, &config).unwrap_err();

        assert_eq!(
            err,
            SizeError {
                offered: (5, 80),
                minimum: (10, 20)
            }
        );

        let msg = err.to_string();
        assert!(msg.contains("10x20"), "{msg}");
        assert!(msg.contains("5x80"), "{msg}");
    }

    #[test]
    fn narrow_terminal_is_rejected() {
        let config = Config::default();
        assert!(GameArea::from_terminal(40, 19, &config).is_err());
    }

    #[test]
    fn area_leaves_a_margin() {
        let config = Config::default();
        let area = GameArea::from_terminal(24, 80, &config).unwrap();

        assert_eq!(area, GameArea { height: 23, width: 39 });
    }

    #[test]
    fn area_is_capped() {
        let config = Config::default();
        let area = GameArea::from_terminal(300, 500, &config).unwrap();

        assert_eq!(area, GameArea { height: 100, width: 100 });
    }

    #[test]
    fn minimum_terminal_is_accepted() {
        let config = Config::default();
        let area = GameArea::from_terminal(10, 20, &config).unwrap();

        assert_eq!(area, GameArea { height: 9, width: 9 });
    }
}
