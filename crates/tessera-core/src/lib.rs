//! Core terminal layer for the **tessera** interaction engine.
//!
//! `tessera-core` owns the terminal for a synchronous, modal text UI: one
//! [`Surface`] per session, a fixed table of named [`Key`]s, display-width
//! text helpers, and the [`Backend`] seam that lets every loop run headless
//! under test.
//!
//! # Key types
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`Surface`] | Whole-terminal handle: banner, continue prompt, key reads, teardown |
//! | [`Key`] | Decoded key press with a stable textual token |
//! | [`Rect`] | Height, width and top-left origin of a region |
//! | [`Backend`] | Raw primitives a surface paints and reads through |
//! | [`CrosstermBackend`] | Real terminal via crossterm |
//! | [`TestBackend`](testing::TestBackend) | Scripted keys and an inspectable cell grid |
//! | [`Error`] | IO failure, geometry that does not fit, or the interrupt key |
//!
//! # Lifecycle
//!
//! 1. **acquire** -- [`Surface::new`] enters raw mode, hides the cursor and
//!    (by default) switches to the alternate screen.
//! 2. **draw** -- [`Surface::draw`] paints a centered title and an indented
//!    description; [`Surface::wait`] blocks on the continue key.
//! 3. **interact** -- panels and widgets from `tessera-widgets` paint through
//!    the surface and read keys from it, one at a time.
//! 4. **release** -- [`Surface::close`] or drop restores the terminal, exactly
//!    once, on every exit path including panics.

pub mod backend;
pub mod error;
pub mod geometry;
pub mod key;
pub mod options;
pub mod surface;
pub mod testing;
pub mod text;

pub use backend::{Backend, CrosstermBackend, Style};
pub use error::{Error, Result, SizeError};
pub use geometry::Rect;
pub use key::Key;
pub use options::{OutputTarget, SurfaceOptions};
pub use surface::Surface;

pub use crossterm;
