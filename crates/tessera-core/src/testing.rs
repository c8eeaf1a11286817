use crate::backend::{Backend, Style};
use crate::key::Key;
use std::collections::VecDeque;
use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use unicode_width::UnicodeWidthChar;

/// One terminal cell in a [`TestBackend`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    /// The character painted here; empty for the trailing half of a wide
    /// character.
    pub symbol: String,
    /// The style it was painted with.
    pub style: Style,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            symbol: " ".to_string(),
            style: Style::default(),
        }
    }
}

/// A headless backend that drives a [`Surface`](crate::Surface) without a
/// real terminal.
///
/// `TestBackend` lets you exercise every modal loop in a plain `#[test]`
/// function: keys are fed from a script, painting lands in a cell grid you
/// can inspect as strings. When the script runs dry, [`read_key`] fails with
/// [`io::ErrorKind::UnexpectedEof`] instead of blocking.
///
/// # Example
///
/// ```rust,ignore
/// use tessera_core::testing::TestBackend;
/// use tessera_core::{Key, Surface, SurfaceOptions};
///
/// let backend = TestBackend::new(24, 80).with_keys([Key::Space]);
/// let mut surface = Surface::with_backend(backend, SurfaceOptions::default());
/// surface.draw("Welcome", "Press space")?;
/// surface.wait()?;
/// assert!(surface.backend().line(1).contains("Welcome"));
/// ```
///
/// [`read_key`]: Backend::read_key
#[derive(Debug, Clone)]
pub struct TestBackend {
    rows: u16,
    cols: u16,
    cells: Vec<Vec<Cell>>,
    keys: VecDeque<Key>,
    cursor: (u16, u16),
    cursor_visible: bool,
    flushes: usize,
    // Shared between clones so a probe taken before `Surface::close` still
    // sees the restore.
    restores: Arc<AtomicUsize>,
    suspends: usize,
}

impl TestBackend {
    /// Create a blank `rows` x `cols` screen with an empty key script.
    pub fn new(rows: u16, cols: u16) -> Self {
        Self {
            rows,
            cols,
            cells: vec![vec![Cell::default(); usize::from(cols)]; usize::from(rows)],
            keys: VecDeque::new(),
            cursor: (0, 0),
            cursor_visible: false,
            flushes: 0,
            restores: Arc::new(AtomicUsize::new(0)),
            suspends: 0,
        }
    }

    /// Append keys to the script (builder variant).
    pub fn with_keys(mut self, keys: impl IntoIterator<Item = Key>) -> Self {
        self.push_keys(keys);
        self
    }

    /// Append one key to the script.
    pub fn push_key(&mut self, key: Key) {
        self.keys.push_back(key);
    }

    /// Append keys to the script.
    pub fn push_keys(&mut self, keys: impl IntoIterator<Item = Key>) {
        self.keys.extend(keys);
    }

    /// Append one key per character of `text` (space becomes
    /// [`Key::Space`]).
    pub fn type_text(&mut self, text: &str) {
        self.keys.extend(text.chars().map(Key::from_char));
    }

    /// Keys not yet consumed.
    pub fn pending_keys(&self) -> usize {
        self.keys.len()
    }

    /// Change the reported terminal size, keeping what fits of the grid.
    pub fn resize(&mut self, rows: u16, cols: u16) {
        self.cells
            .resize(usize::from(rows), vec![Cell::default(); usize::from(cols)]);
        for row in &mut self.cells {
            row.resize(usize::from(cols), Cell::default());
        }
        self.rows = rows;
        self.cols = cols;
    }

    /// The painted content of row `y`, trailing spaces included.
    pub fn line(&self, y: u16) -> String {
        self.cells
            .get(usize::from(y))
            .map(|row| row.iter().map(|c| c.symbol.as_str()).collect())
            .unwrap_or_default()
    }

    /// Every row, top to bottom.
    pub fn lines(&self) -> Vec<String> {
        (0..self.rows).map(|y| self.line(y)).collect()
    }

    /// Every row joined by newlines, trailing spaces trimmed per row.
    pub fn contents(&self) -> String {
        self.lines()
            .iter()
            .map(|l| l.trim_end())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// The cell at `(y, x)`.
    pub fn cell(&self, y: u16, x: u16) -> Option<&Cell> {
        self.cells.get(usize::from(y))?.get(usize::from(x))
    }

    /// Current cursor position as `(y, x)`.
    pub fn cursor(&self) -> (u16, u16) {
        self.cursor
    }

    /// Whether the cursor is currently shown.
    pub fn cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    /// How many times [`Backend::flush`] ran.
    pub fn flush_count(&self) -> usize {
        self.flushes
    }

    /// How many times [`Backend::restore`] ran.
    pub fn restore_count(&self) -> usize {
        self.restores.load(Ordering::SeqCst)
    }

    /// How many times [`Backend::suspend`] ran.
    pub fn suspend_count(&self) -> usize {
        self.suspends
    }
}

impl Backend for TestBackend {
    fn size(&self) -> io::Result<(u16, u16)> {
        Ok((self.rows, self.cols))
    }

    fn read_key(&mut self) -> io::Result<Key> {
        self.keys
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "key script exhausted"))
    }

    fn put(&mut self, y: u16, x: u16, text: &str, style: Style) -> io::Result<()> {
        let Some(row) = self.cells.get_mut(usize::from(y)) else {
            return Ok(());
        };
        let mut col = usize::from(x);
        for c in text.chars() {
            let w = c.width().unwrap_or(0);
            if w == 0 {
                continue;
            }
            if col + w > row.len() {
                break;
            }
            row[col] = Cell {
                symbol: c.to_string(),
                style,
            };
            for filler in row.iter_mut().skip(col + 1).take(w - 1) {
                *filler = Cell {
                    symbol: String::new(),
                    style,
                };
            }
            col += w;
        }
        self.cursor = (y, col.min(usize::from(u16::MAX)) as u16);
        Ok(())
    }

    fn move_cursor(&mut self, y: u16, x: u16) -> io::Result<()> {
        self.cursor = (y, x);
        Ok(())
    }

    fn set_cursor_visible(&mut self, visible: bool) -> io::Result<()> {
        self.cursor_visible = visible;
        Ok(())
    }

    fn clear(&mut self) -> io::Result<()> {
        for row in &mut self.cells {
            row.fill(Cell::default());
        }
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flushes += 1;
        Ok(())
    }

    fn suspend(&mut self) -> io::Result<()> {
        self.suspends += 1;
        Ok(())
    }

    fn restore(&mut self) -> io::Result<()> {
        self.restores.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
