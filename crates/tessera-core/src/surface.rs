use crate::backend::{Backend, CrosstermBackend, Style};
use crate::error::{Result, SizeError};
use crate::geometry::Rect;
use crate::key::Key;
use crate::options::SurfaceOptions;
use crate::text;

/// The whole-terminal resource handle.
///
/// A `Surface` owns the terminal for one interactive session: raw input mode,
/// hidden cursor, and the title banner drawn by [`draw`](Surface::draw).
/// Panels and widgets paint through it and read keys from it.
///
/// Teardown happens exactly once: call [`close`](Surface::close) to observe
/// restore errors, or let the surface drop. A panic anywhere in the process
/// restores the terminal through the hook installed at acquisition.
///
/// # Example
///
/// ```rust,no_run
/// use tessera_core::Surface;
///
/// fn main() -> tessera_core::Result<()> {
///     let mut surface = Surface::new()?;
///     surface.draw("Welcome!", "This wizard will guide you through setup.")?;
///     surface.wait()?;
///     surface.close()
/// }
/// ```
pub struct Surface<B: Backend = CrosstermBackend> {
    backend: B,
    options: SurfaceOptions,
    title: String,
    desc: String,
    closed: bool,
}

impl Surface<CrosstermBackend> {
    /// Acquire the real terminal with default options.
    pub fn new() -> Result<Self> {
        Self::with_options(SurfaceOptions::default())
    }

    /// Acquire the real terminal with custom options.
    pub fn with_options(options: SurfaceOptions) -> Result<Self> {
        let backend = CrosstermBackend::new(&options)?;
        Ok(Self::with_backend(backend, options))
    }
}

impl<B: Backend> Surface<B> {
    /// Wrap an already-acquired backend.
    pub fn with_backend(backend: B, options: SurfaceOptions) -> Self {
        Self {
            backend,
            options,
            title: String::new(),
            desc: String::new(),
            closed: false,
        }
    }

    /// The underlying backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// The underlying backend, mutably.
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// The options this surface was created with.
    pub fn options(&self) -> &SurfaceOptions {
        &self.options
    }

    /// Terminal size as `(rows, cols)`.
    pub fn size(&self) -> Result<(u16, u16)> {
        Ok(self.backend.size()?)
    }

    /// Fail with [`SizeError`] unless `rect` lies inside the terminal.
    pub fn check_fits(&self, rect: Rect) -> Result<()> {
        let (rows, cols) = self.size()?;
        if rect.fits_within(rows, cols) {
            return Ok(());
        }
        tracing::warn!(%rect, rows, cols, "geometry does not fit terminal");
        Err(SizeError {
            requested: rect,
            rows,
            cols,
        }
        .into())
    }

    /// Fail with [`SizeError`] unless the terminal is at least
    /// `height` x `width`.
    pub fn require(&self, height: u16, width: u16) -> Result<()> {
        self.check_fits(Rect::new(height, width, 0, 0))
    }

    /// Clear the screen and paint a banner: each `title` line centered from
    /// row 1, a blank row, then each `desc` line indented by two columns.
    ///
    /// The banner is remembered for [`redraw`](Surface::redraw).
    pub fn draw(&mut self, title: &str, desc: &str) -> Result<()> {
        self.title = title.to_string();
        self.desc = desc.to_string();
        self.paint_banner()
    }

    /// Clear the screen and repaint the last banner.
    pub fn redraw(&mut self) -> Result<()> {
        self.paint_banner()
    }

    fn paint_banner(&mut self) -> Result<()> {
        let (_, cols) = self.size()?;
        self.backend.clear()?;
        let mut y: u16 = 1;
        for line in self.title.lines() {
            let x = text::center_column(line, cols);
            self.backend.put(y, x, line, Style::default())?;
            y = y.saturating_add(1);
        }
        y = y.saturating_add(1);
        for line in self.desc.lines() {
            self.backend.put(y, 2, line, Style::default())?;
            y = y.saturating_add(1);
        }
        self.backend.flush()?;
        Ok(())
    }

    /// Show `--- Press KEY to continue ---` and block until the configured
    /// continue key arrives.
    pub fn wait(&mut self) -> Result<()> {
        let key = self.options.continue_key.clone();
        self.wait_for(&key)
    }

    /// Show `--- Press KEY to continue ---` and block until `key` arrives.
    /// Other keys are swallowed.
    pub fn wait_for(&mut self, key: &Key) -> Result<()> {
        let (rows, cols) = self.size()?;
        let prompt = format!("--- Press {key} to continue ---");
        let x = text::center_column(&prompt, cols);
        self.backend
            .put(rows.saturating_sub(2), x, &prompt, Style::default())?;
        while self.read_key()? != *key {}
        Ok(())
    }

    /// Flush pending output, then block for the next key.
    ///
    /// Returns [`Error::Interrupted`](crate::Error::Interrupted) when the
    /// configured interrupt key is read.
    pub fn read_key(&mut self) -> Result<Key> {
        self.backend.flush()?;
        let key = self.backend.read_key()?;
        tracing::trace!(%key, "key");
        if self.options.interrupt_key.as_ref() == Some(&key) {
            tracing::info!(%key, "interrupt key pressed");
            return Err(crate::Error::Interrupted);
        }
        Ok(key)
    }

    /// Paint `text` at `(y, x)`.
    pub fn put(&mut self, y: u16, x: u16, text: &str, style: Style) -> Result<()> {
        Ok(self.backend.put(y, x, text, style)?)
    }

    /// Move the terminal cursor to `(y, x)`.
    pub fn move_cursor(&mut self, y: u16, x: u16) -> Result<()> {
        Ok(self.backend.move_cursor(y, x)?)
    }

    /// Show or hide the terminal cursor.
    pub fn set_cursor_visible(&mut self, visible: bool) -> Result<()> {
        Ok(self.backend.set_cursor_visible(visible)?)
    }

    /// Blank the screen. The remembered banner is kept.
    pub fn clear(&mut self) -> Result<()> {
        Ok(self.backend.clear()?)
    }

    /// Push buffered output to the terminal.
    pub fn flush(&mut self) -> Result<()> {
        Ok(self.backend.flush()?)
    }

    /// Suspend the process (Ctrl+Z behavior) and repaint the banner once
    /// resumed.
    pub fn suspend(&mut self) -> Result<()> {
        tracing::debug!("suspending");
        self.backend.suspend()?;
        self.redraw()
    }

    /// Restore the terminal now and report any error doing so.
    pub fn close(mut self) -> Result<()> {
        self.closed = true;
        Ok(self.backend.restore()?)
    }
}

impl<B: Backend> Drop for Surface<B> {
    fn drop(&mut self) {
        if !self.closed {
            let _ = self.backend.restore();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::testing::TestBackend;

    fn surface(keys: impl IntoIterator<Item = Key>) -> Surface<TestBackend> {
        Surface::with_backend(
            TestBackend::new(10, 40).with_keys(keys),
            SurfaceOptions::default(),
        )
    }

    #[test]
    fn draw_centers_title_and_indents_description() {
        let mut s = surface([]);
        s.draw("Select a disk", "line one\nline two").unwrap();
        let b = s.backend();
        assert_eq!(b.line(0).trim(), "");
        assert_eq!(b.line(1), format!("{:<40}", format!("{}Select a disk", " ".repeat(13))));
        assert_eq!(b.line(2).trim(), "");
        assert!(b.line(3).starts_with("  line one"));
        assert!(b.line(4).starts_with("  line two"));
    }

    #[test]
    fn multi_line_titles_stack() {
        let mut s = surface([]);
        s.draw("Ultramarine\nInstaller", "desc").unwrap();
        assert!(s.backend().line(1).contains("Ultramarine"));
        assert!(s.backend().line(2).contains("Installer"));
        assert!(s.backend().line(4).starts_with("  desc"));
    }

    #[test]
    fn redraw_repaints_remembered_banner() {
        let mut s = surface([]);
        s.draw("Title", "body").unwrap();
        s.put(8, 0, "scribble", Style::default()).unwrap();
        s.redraw().unwrap();
        assert!(s.backend().line(1).contains("Title"));
        assert_eq!(s.backend().line(8).trim(), "");
    }

    #[test]
    fn wait_swallows_keys_until_continue() {
        let mut s = surface([Key::Char('x'), Key::Enter, Key::Space, Key::Char('y')]);
        s.wait().unwrap();
        assert_eq!(s.backend().pending_keys(), 1);
        assert!(s.backend().line(8).contains("--- Press SPACE to continue ---"));
    }

    #[test]
    fn wait_for_custom_key() {
        let mut s = surface([Key::Space, Key::Enter]);
        s.wait_for(&Key::Enter).unwrap();
        assert!(s.backend().line(8).contains("Press ENTER"));
        assert_eq!(s.backend().pending_keys(), 0);
    }

    #[test]
    fn interrupt_key_aborts() {
        let mut s = surface([Key::Ctrl('c')]);
        assert!(matches!(s.read_key(), Err(Error::Interrupted)));
    }

    #[test]
    fn interrupt_can_be_disabled() {
        let options = SurfaceOptions {
            interrupt_key: None,
            ..SurfaceOptions::default()
        };
        let mut s =
            Surface::with_backend(TestBackend::new(5, 5).with_keys([Key::Ctrl('c')]), options);
        assert_eq!(s.read_key().unwrap(), Key::Ctrl('c'));
    }

    #[test]
    fn read_key_flushes_first() {
        let mut s = surface([Key::Up]);
        s.read_key().unwrap();
        assert_eq!(s.backend().flush_count(), 1);
    }

    #[test]
    fn require_reports_requested_and_actual() {
        let s = surface([]);
        assert!(s.require(10, 40).is_ok());
        let err = s.require(12, 50).unwrap_err();
        match err {
            Error::Size(e) => {
                assert_eq!(e.requested, Rect::new(12, 50, 0, 0));
                assert_eq!((e.rows, e.cols), (10, 40));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn check_fits_uses_origin() {
        let s = surface([]);
        assert!(s.check_fits(Rect::new(4, 20, 6, 20)).is_ok());
        assert!(s.check_fits(Rect::new(4, 20, 7, 20)).is_err());
    }

    #[test]
    fn close_restores_exactly_once() {
        let s = surface([]);
        let probe = s.backend().clone();
        s.close().unwrap();
        assert_eq!(probe.restore_count(), 1);
    }

    #[test]
    fn drop_restores_when_not_closed() {
        let s = surface([]);
        let probe = s.backend().clone();
        drop(s);
        assert_eq!(probe.restore_count(), 1);
    }

    #[test]
    fn suspend_redraws_after_resume() {
        let mut s = surface([]);
        s.draw("Title", "").unwrap();
        s.suspend().unwrap();
        assert_eq!(s.backend().suspend_count(), 1);
        assert!(s.backend().line(1).contains("Title"));
    }
}
