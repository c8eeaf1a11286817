use crate::geometry::Rect;
use std::io;

/// A requested geometry that does not fit on the terminal.
///
/// Carries both sides of the comparison so the driver can tell the user how
/// large the terminal has to be, rather than rendering a clipped screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("cannot place {requested} on a {rows}x{cols} terminal")]
pub struct SizeError {
    /// The rectangle that was asked for.
    pub requested: Rect,
    /// Actual terminal rows.
    pub rows: u16,
    /// Actual terminal columns.
    pub cols: u16,
}

/// Errors produced by a [`Surface`](crate::Surface) and everything drawn on it.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An I/O error from terminal setup, rendering, key input, or teardown.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// A panel or screen does not fit the terminal.
    #[error(transparent)]
    Size(#[from] SizeError),
    /// The configured interrupt key was read while in raw mode.
    #[error("interrupted by user")]
    Interrupted,
}

/// Result alias used throughout tessera.
pub type Result<T> = std::result::Result<T, Error>;
