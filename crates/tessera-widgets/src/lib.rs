//! Widgets for the **tessera** interaction engine.
//!
//! Everything here paints through a [`Panel`], a bordered region that
//! borrows the [`Surface`](tessera_core::Surface) for as long as it is on
//! screen. Each widget runs its own blocking key loop and hands back a value
//! when the user confirms.
//!
//! # Widgets
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`panel`] | Bordered, word-wrapped region with panel-relative painting |
//! | [`text_field`] | Single-line input with optional masking |
//! | [`toggle`] | Boolean check glyph flipped with `SPACE` |
//! | [`table_view`] | Scrollable table picker with incremental find |
//! | [`popup`] | Centered message box sized to its text |
//! | [`pick`] | One-row, many-row and required-selection helpers |
//!
//! # Utilities
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`record`] | [`Record`] and [`Table`], the data a table view shows |
//! | [`grid`] | Column-aligned text rendering of a [`Table`] |
//! | [`focus`] | [`FocusRing`] for moving between the widgets of a form |
//! | [`theme`] | Border, text, header and selection styles plus glyphs |
//! | [`widget`] | [`Intercept`] and [`Edit`] outcomes shared by widget loops |

pub mod focus;
pub mod grid;
pub mod panel;
pub mod pick;
pub mod popup;
pub mod record;
pub mod table_view;
pub mod text_field;
pub mod theme;
pub mod toggle;
pub mod widget;

pub use focus::FocusRing;
pub use grid::Grid;
pub use panel::Panel;
pub use pick::{pick_many, pick_many_required, pick_one, require};
pub use popup::popup;
pub use record::{AsTable, Record, Table, TableError};
pub use table_view::{find_match, TableView};
pub use text_field::TextField;
pub use theme::Theme;
pub use toggle::Toggle;
pub use widget::{Edit, Intercept};
