/// Signals the host loop receives from the input side of the display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// The user asked to leave
    Quit,

    /// Ctrl+C. Not an error, but reported differently from [`Control::Quit`]
    Interrupt,

    /// The display changed size
    Resize { cols: u16, rows: u16 },
}
