//! Scrollable, searchable table view.
//!
//! [`TableView::run`] renders a [`Table`] as a [`Grid`] inside a panel and
//! lets the user browse it: wraparound selection, paging, horizontal pan and
//! a find prompt. Keys it does not know go to the caller's handler, which is
//! how multi-select marking and row deletion are built on top of it.
//!
//! The table is never owned. It is fetched through a caller-supplied
//! accessor on every iteration and rebuilt from scratch, so changes made
//! between keys (including by the key handler itself) show up immediately.

use crate::grid::Grid;
use crate::panel::Panel;
use crate::record::{AsTable, Table};
use crate::text_field::TextField;
use tessera_core::text::{pad, slice_columns};
use tessera_core::{Backend, Key, Result};

const FIND_HEIGHT: u16 = 4;
const FIND_WIDTH: u16 = 50;
const FIND_PROMPT: &str = "FIND: ";
const EMPTY_NOTICE: &str = "(no records)";

/// Index of the first row after `after` with a value containing `needle`,
/// else the first matching row overall.
///
/// Matching is a case-sensitive substring test over every value of a row.
pub fn find_match(table: &Table, needle: &str, after: usize) -> Option<usize> {
    find_match_from(table, needle, after, 0)
}

/// [`find_match`] over the values of each row from column `skip` on.
fn find_match_from(table: &Table, needle: &str, after: usize, skip: usize) -> Option<usize> {
    let mut first = None;
    for (index, row) in table.rows().enumerate() {
        if row.iter().skip(skip).any(|value| value.contains(needle)) {
            if index > after {
                return Some(index);
            }
            first.get_or_insert(index);
        }
    }
    first
}

/// Largest horizontal offset for a grid of `total_width` in a window
/// `width` columns wide.
fn max_col_offset(total_width: usize, width: usize) -> usize {
    (total_width + 2).saturating_sub(width)
}

enum Step {
    Moved,
    Confirm,
    Find,
    Delegate,
}

/// Viewport and selection state for browsing a table.
///
/// ```rust,ignore
/// let disks = RefCell::new(Table::unified(listing));
/// let mut view = TableView::new();
/// let chosen = view.run(&mut panel, || disks.borrow(), |key, index| {
///     if *key == Key::Char('d') {
///         let _ = disks.borrow_mut().remove(index);
///     }
/// })?;
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    selected: usize,
    row_offset: usize,
    col_offset: usize,
    visible_height: Option<u16>,
    visible_width: Option<u16>,
    find_key: Key,
    unsearched: usize,
}

impl Default for TableView {
    fn default() -> Self {
        Self::new()
    }
}

impl TableView {
    /// A view with the first row selected and `CTRL-F` as the find key.
    pub fn new() -> Self {
        Self {
            selected: 0,
            row_offset: 0,
            col_offset: 0,
            visible_height: None,
            visible_width: None,
            find_key: Key::Ctrl('f'),
            unsearched: 0,
        }
    }

    /// Use `key` to open the find prompt.
    pub fn with_find_key(mut self, key: Key) -> Self {
        self.find_key = key;
        self
    }

    /// Override the visible window, which defaults to the panel interior.
    pub fn with_visible_size(mut self, height: u16, width: u16) -> Self {
        self.visible_height = Some(height);
        self.visible_width = Some(width);
        self
    }

    /// Leave the first `columns` columns out of find, for decoration
    /// columns that hold no record data.
    pub fn with_unsearched_columns(mut self, columns: usize) -> Self {
        self.unsearched = columns;
        self
    }

    /// Start with row `index` selected.
    pub fn with_selected(mut self, index: usize) -> Self {
        self.selected = index;
        self
    }

    /// The selected row.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// First record row in the window.
    pub fn row_offset(&self) -> usize {
        self.row_offset
    }

    /// First display column in the window.
    pub fn col_offset(&self) -> usize {
        self.col_offset
    }

    fn window<B: Backend>(&self, panel: &Panel<'_, B>) -> (usize, usize) {
        let (inner_h, inner_w) = (panel.inner_height(), panel.inner_width());
        let height = self.visible_height.map_or(inner_h, |h| h.min(inner_h));
        let width = self.visible_width.map_or(inner_w, |w| w.min(inner_w));
        (usize::from(height), usize::from(width))
    }

    /// Bring the state in line with a freshly built grid of `len` rows. A
    /// table that shrank under the selection keeps its last row selected.
    fn fit(&mut self, len: usize, total_width: usize, height: usize, width: usize) {
        if len == 0 {
            self.selected = 0;
            self.row_offset = 0;
            self.col_offset = 0;
            return;
        }
        self.selected = self.selected.min(len - 1);
        self.scroll(total_width, height, width);
    }

    /// Keep the selection inside the vertical band and the horizontal offset
    /// inside its range.
    fn scroll(&mut self, total_width: usize, height: usize, width: usize) {
        let band = height.saturating_sub(3);
        if self.row_offset + band < self.selected {
            self.row_offset = self.selected - band;
        }
        if self.row_offset > self.selected {
            self.row_offset = self.selected;
        }
        self.col_offset = self.col_offset.min(max_col_offset(total_width, width));
    }

    fn step(
        &mut self,
        key: &Key,
        len: usize,
        total_width: usize,
        height: usize,
        width: usize,
    ) -> Step {
        let page = height.saturating_sub(3) as isize;
        let mut selected = self.selected as isize;
        match key {
            k if *k == self.find_key => return Step::Find,
            Key::PageUp => selected -= page,
            Key::PageDown => selected += page,
            Key::Home => self.col_offset = 0,
            Key::End => self.col_offset = max_col_offset(total_width, width),
            Key::Up => selected -= 1,
            Key::Down => selected += 1,
            Key::Left => self.col_offset = self.col_offset.saturating_sub(1),
            Key::Right => self.col_offset += 1,
            Key::Enter => return Step::Confirm,
            _ => return Step::Delegate,
        }
        self.selected = if selected >= len as isize {
            0
        } else if selected < 0 {
            len - 1
        } else {
            selected as usize
        };
        self.scroll(total_width, height, width);
        Step::Moved
    }

    fn paint<B: Backend>(
        &self,
        panel: &mut Panel<'_, B>,
        grid: &Grid,
        has_schema: bool,
        height: usize,
        width: usize,
    ) -> Result<()> {
        panel.repaint()?;
        let theme = panel.theme().clone();
        let rows = usize::from(panel.inner_height()).min(height.max(1));
        if rows == 0 {
            return Ok(());
        }
        let line = |text: &str| pad(&slice_columns(text, self.col_offset, width), width);

        let mut y: u16 = 1;
        if has_schema {
            panel.put(y, 1, &line(grid.header()), theme.header)?;
            y += 1;
        }
        if grid.is_empty() {
            return panel.put(y, 1, EMPTY_NOTICE, theme.text);
        }

        let shown = height.saturating_sub(2).max(1);
        let last_row = rows as u16;
        for (index, text) in grid.rows().iter().enumerate().skip(self.row_offset).take(shown) {
            if y > last_row {
                break;
            }
            let style = if index == self.selected {
                theme.selected
            } else {
                theme.text
            };
            panel.put(y, 1, &line(text), style)?;
            y += 1;
        }
        Ok(())
    }

    /// Browse the table until `ENTER`, returning the selected row, or `None`
    /// for an empty table.
    ///
    /// `fetch` is called at the start of every iteration; the value it
    /// returns is dropped before `on_key` runs, so a `RefCell` borrow there
    /// does not conflict with a mutable borrow in the handler. Keys without a
    /// built-in meaning go to `on_key` with the selected row. On an empty
    /// table only `ENTER` does anything.
    pub fn run<B, F, T, K>(
        &mut self,
        panel: &mut Panel<'_, B>,
        mut fetch: F,
        mut on_key: K,
    ) -> Result<Option<usize>>
    where
        B: Backend,
        F: FnMut() -> T,
        T: AsTable,
        K: FnMut(&Key, usize),
    {
        loop {
            let (height, width) = self.window(panel);
            let (grid, has_schema) = {
                let fetched = fetch();
                let table = fetched.as_table();
                (Grid::build(table), table.has_schema())
            };
            let len = grid.len();
            self.fit(len, grid.total_width(), height, width);
            self.paint(panel, &grid, has_schema, height, width)?;

            let key = panel.read_key()?;
            if len == 0 {
                if key == Key::Enter {
                    tracing::debug!("table view closed on an empty table");
                    return Ok(None);
                }
                continue;
            }
            match self.step(&key, len, grid.total_width(), height, width) {
                Step::Moved => {}
                Step::Confirm => {
                    tracing::debug!(selected = self.selected, "table view confirmed");
                    return Ok(Some(self.selected));
                }
                Step::Find => {
                    self.find(panel, &mut fetch)?;
                    panel.surface_mut().redraw()?;
                }
                Step::Delegate => on_key(&key, self.selected),
            }
        }
    }

    fn find<B, F, T>(&mut self, panel: &mut Panel<'_, B>, fetch: &mut F) -> Result<()>
    where
        B: Backend,
        F: FnMut() -> T,
        T: AsTable,
    {
        let (_, cols) = panel.surface().size()?;
        let width = FIND_WIDTH.min(cols);
        let mut prompt = panel.child_centered(FIND_HEIGHT, width)?;
        prompt.write(FIND_PROMPT)?;
        let mut field = TextField::new(1, 7, usize::from(width.saturating_sub(8)));
        let needle = field.activate(&mut prompt)?;

        let found = {
            let fetched = fetch();
            find_match_from(fetched.as_table(), &needle, self.selected, self.unsearched)
        };
        match found {
            Some(index) => {
                tracing::debug!(needle = %needle, index, "find matched");
                self.selected = index;
            }
            None => {
                tracing::debug!(needle = %needle, "find matched nothing");
                prompt.set_text("Not found!")?;
                prompt.read_key()?;
            }
        }
        Ok(())
    }
}
