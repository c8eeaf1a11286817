//! **tessera** -- a blocking, key-driven terminal interaction engine.
//!
//! This is the umbrella crate that re-exports everything needed to build a
//! wizard or table picker from a single dependency:
//!
//! ```toml
//! [dependencies]
//! tessera = "0.1"
//! ```
//!
//! # Re-exports
//!
//! * All public items from [`tessera_core`] are available at the crate root
//!   ([`Surface`], [`Key`], [`Rect`], [`Error`], [`SurfaceOptions`], etc.).
//! * The [`widgets`] module re-exports everything from [`tessera_widgets`]
//!   (panels, text fields, toggles, table views, popups).
//! * [`crossterm`] is re-exported for styling.
//! * [`logging`] sends `tracing` output to a file while the UI owns the
//!   terminal.
//!
//! # Quick start
//!
//! ```ignore
//! use tessera::widgets::{pick_one, Panel, Record, Table};
//! use tessera::Surface;
//!
//! fn main() -> tessera::Result<()> {
//!     let mut surface = Surface::new()?;
//!     surface.draw("Locale", "Pick the system locale")?;
//!     let table = Table::from_records([
//!         Record::from([("LOCALE", "en_US.UTF-8")]),
//!         Record::from([("LOCALE", "de_DE.UTF-8")]),
//!     ])
//!     .map_err(std::io::Error::other)?;
//!     let mut panel = Panel::centered(&mut surface, 8, 30)?;
//!     let locale = pick_one(&mut panel, &table, "LOCALE")?;
//!     drop(panel);
//!     surface.close()?;
//!     println!("{locale:?}");
//!     Ok(())
//! }
//! ```

pub mod logging;

pub use tessera_core::*;
pub mod widgets {
    pub use tessera_widgets::*;
}
