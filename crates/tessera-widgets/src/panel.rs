//! Bordered panels.

use crate::theme::Theme;
use tessera_core::text::{pad, truncate, wrap};
use tessera_core::{Backend, CrosstermBackend, Key, Rect, Result, Style, Surface};

/// A bordered rectangle of the terminal holding wrapped text and hosting
/// interactive widgets.
///
/// A panel borrows its [`Surface`] for as long as it lives, so screens are
/// built as a stack: [`child`](Panel::child) opens a nested panel (the find
/// box of a table, a warning popup) that reborrows its parent, and drops back
/// to it when done.
///
/// Widget coordinates are relative to the panel's top-left corner, border
/// included: `(1, 1)` is the first interior cell.
///
/// ```rust,ignore
/// let mut panel = Panel::centered(&mut surface, 10, 40)?;
/// panel.write("Pick a disk.\n")?.write("Press ENTER to confirm.")?;
/// ```
pub struct Panel<'s, B: Backend = CrosstermBackend> {
    surface: &'s mut Surface<B>,
    rect: Rect,
    text: String,
    theme: Theme,
}

impl<'s, B: Backend> Panel<'s, B> {
    /// Open a panel at `rect` with the default theme.
    ///
    /// Fails with [`SizeError`](tessera_core::SizeError) when `rect` does not
    /// fit the terminal.
    pub fn new(surface: &'s mut Surface<B>, rect: Rect) -> Result<Self> {
        Self::with_theme(surface, rect, Theme::default())
    }

    /// Open a panel at `rect` painted with `theme`.
    pub fn with_theme(surface: &'s mut Surface<B>, rect: Rect, theme: Theme) -> Result<Self> {
        surface.check_fits(rect)?;
        let mut panel = Self {
            surface,
            rect,
            text: String::new(),
            theme,
        };
        panel.repaint()?;
        Ok(panel)
    }

    /// Open a `height` x `width` panel centered on the terminal.
    pub fn centered(surface: &'s mut Surface<B>, height: u16, width: u16) -> Result<Self> {
        let (rows, cols) = surface.size()?;
        Self::new(surface, Rect::centered(rows, cols, height, width))
    }

    /// Open a nested panel at `rect` (terminal coordinates), sharing this
    /// panel's theme.
    pub fn child(&mut self, rect: Rect) -> Result<Panel<'_, B>> {
        Panel::with_theme(&mut *self.surface, rect, self.theme.clone())
    }

    /// Open a nested `height` x `width` panel centered on the terminal.
    pub fn child_centered(&mut self, height: u16, width: u16) -> Result<Panel<'_, B>> {
        let (rows, cols) = self.surface.size()?;
        self.child(Rect::centered(rows, cols, height, width))
    }

    /// Where the panel sits on the terminal.
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Rows inside the border.
    pub fn inner_height(&self) -> u16 {
        self.rect.height.saturating_sub(2)
    }

    /// Columns inside the border.
    pub fn inner_width(&self) -> u16 {
        self.rect.width.saturating_sub(2)
    }

    /// The accumulated text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The theme widgets on this panel paint with.
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// The owning surface.
    pub fn surface(&self) -> &Surface<B> {
        &*self.surface
    }

    /// The owning surface, mutably.
    pub fn surface_mut(&mut self) -> &mut Surface<B> {
        &mut *self.surface
    }

    /// Append `text` and repaint.
    pub fn write(&mut self, text: &str) -> Result<&mut Self> {
        self.text.push_str(text);
        self.repaint()?;
        Ok(self)
    }

    /// Replace the text and repaint.
    pub fn set_text(&mut self, text: &str) -> Result<&mut Self> {
        self.text.clear();
        self.write(text)
    }

    /// Drop the text and repaint an empty panel.
    pub fn reset(&mut self) -> Result<&mut Self> {
        self.set_text("")
    }

    /// Move the panel's size to `height` x `width`, keeping its origin, and
    /// repaint border and text.
    pub fn resize(&mut self, height: u16, width: u16) -> Result<()> {
        let next = Rect {
            height,
            width,
            ..self.rect
        };
        self.surface.check_fits(next)?;
        self.blank()?;
        self.rect = next;
        self.repaint()
    }

    fn blank(&mut self) -> Result<()> {
        let Rect {
            height,
            width,
            y,
            x,
        } = self.rect;
        let spaces = " ".repeat(usize::from(width));
        for row in 0..height {
            self.surface.put(y + row, x, &spaces, Style::default())?;
        }
        Ok(())
    }

    /// Paint the border and the wrapped text.
    ///
    /// Text lines wrap at spaces to the interior width; lines past the
    /// interior height are not shown.
    pub fn repaint(&mut self) -> Result<()> {
        let Rect {
            height,
            width,
            y,
            x,
        } = self.rect;
        if height == 0 || width == 0 {
            return Ok(());
        }
        let inner_w = usize::from(self.inner_width());
        let inner_h = usize::from(self.inner_height());
        let fill = "═".repeat(inner_w);
        let border = self.theme.border;
        let text_style = self.theme.text;

        let top = truncate(&format!("╔{fill}╗"), usize::from(width));
        self.surface.put(y, x, &top, border)?;

        let lines: Vec<String> = self
            .text
            .lines()
            .flat_map(|line| wrap(line, inner_w))
            .take(inner_h)
            .collect();
        for row in 0..inner_h {
            let yy = y + 1 + row as u16;
            let line = lines.get(row).map(String::as_str).unwrap_or_default();
            self.surface.put(yy, x, "║", border)?;
            self.surface.put(yy, x + 1, &pad(line, inner_w), text_style)?;
            if width > 1 {
                self.surface.put(yy, x + width - 1, "║", border)?;
            }
        }

        if height > 1 {
            let bottom = truncate(&format!("╚{fill}╝"), usize::from(width));
            self.surface.put(y + height - 1, x, &bottom, border)?;
        }
        Ok(())
    }

    /// Paint `text` at `(y, x)` relative to the panel, clipped at the right
    /// border.
    pub fn put(&mut self, y: u16, x: u16, text: &str, style: Style) -> Result<()> {
        if y >= self.rect.height || x >= self.rect.width {
            return Ok(());
        }
        let room = usize::from(self.rect.width - x).saturating_sub(1);
        let clipped = truncate(text, room);
        self.surface
            .put(self.rect.y + y, self.rect.x + x, &clipped, style)
    }

    /// Move the terminal cursor to `(y, x)` relative to the panel.
    pub fn move_cursor(&mut self, y: u16, x: u16) -> Result<()> {
        self.surface
            .move_cursor(self.rect.y.saturating_add(y), self.rect.x.saturating_add(x))
    }

    /// Show or hide the terminal cursor.
    pub fn set_cursor_visible(&mut self, visible: bool) -> Result<()> {
        self.surface.set_cursor_visible(visible)
    }

    /// Block for the next key from the owning surface.
    pub fn read_key(&mut self) -> Result<Key> {
        self.surface.read_key()
    }

    /// Push buffered output to the terminal.
    pub fn flush(&mut self) -> Result<()> {
        self.surface.flush()
    }
}
