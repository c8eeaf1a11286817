//! Two-state checkbox.

use crate::panel::Panel;
use crate::widget::{interact, Edit, Intercept, Modal};
use tessera_core::{Backend, Key, Result};

/// A boolean toggle anchored at a panel coordinate.
///
/// `SPACE` flips it; `ENTER` or `ESCAPE` ends the interaction. The terminal
/// cursor rests one column right of the glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Toggle {
    checked: bool,
    y: u16,
    x: u16,
}

impl Toggle {
    /// An unchecked toggle at `(y, x)`.
    pub fn new(y: u16, x: u16) -> Self {
        Self {
            checked: false,
            y,
            x,
        }
    }

    /// Start in the given state.
    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    /// The current state.
    pub fn is_checked(&self) -> bool {
        self.checked
    }

    /// Set the state without repainting.
    pub fn set_checked(&mut self, checked: bool) {
        self.checked = checked;
    }

    /// Anchor coordinate inside the panel.
    pub fn position(&self) -> (u16, u16) {
        (self.y, self.x)
    }

    /// Apply the default handling for one key.
    pub fn handle_key(&mut self, key: &Key) -> Edit {
        match key {
            Key::Enter | Key::Escape => Edit::Submit,
            Key::Space => {
                self.checked = !self.checked;
                Edit::Changed
            }
            _ => Edit::Ignored,
        }
    }

    /// Paint the glyph without entering the loop.
    pub fn show<B: Backend>(&self, panel: &mut Panel<'_, B>) -> Result<()> {
        let theme = panel.theme();
        let glyph = if self.checked {
            theme.checked
        } else {
            theme.unchecked
        };
        let style = theme.text;
        panel.put(self.y, self.x, glyph.encode_utf8(&mut [0; 4]), style)
    }

    /// Run the toggle until `ENTER` or `ESCAPE`, then return its state.
    pub fn activate<B: Backend>(&mut self, panel: &mut Panel<'_, B>) -> Result<bool> {
        self.activate_with(panel, |_, _| Intercept::Continue)
    }

    /// Run the toggle, giving `intercept` the first look at every key.
    pub fn activate_with<B, F>(&mut self, panel: &mut Panel<'_, B>, intercept: F) -> Result<bool>
    where
        B: Backend,
        F: FnMut(&mut Toggle, &Key) -> Intercept,
    {
        interact(self, panel, intercept)?;
        Ok(self.checked)
    }
}

impl Modal for Toggle {
    fn handle_key(&mut self, key: &Key) -> Edit {
        Toggle::handle_key(self, key)
    }

    fn paint<B: Backend>(&self, panel: &mut Panel<'_, B>) -> Result<()> {
        self.show(panel)
    }

    fn cursor(&self) -> (u16, u16) {
        (self.y, self.x.saturating_add(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessera_core::testing::TestBackend;
    use tessera_core::{Rect, Surface, SurfaceOptions};

    fn surface(keys: impl IntoIterator<Item = Key>) -> Surface<TestBackend> {
        Surface::with_backend(TestBackend::new(5, 20).with_keys(keys), SurfaceOptions::default())
    }

    #[test]
    fn space_flips() {
        let mut t = Toggle::new(0, 0);
        assert_eq!(t.handle_key(&Key::Space), Edit::Changed);
        assert!(t.is_checked());
        t.handle_key(&Key::Space);
        assert!(!t.is_checked());
        assert_eq!(t.handle_key(&Key::Char('x')), Edit::Ignored);
        assert_eq!(t.handle_key(&Key::Escape), Edit::Submit);
        assert_eq!(t.handle_key(&Key::Enter), Edit::Submit);
    }

    #[test]
    fn activate_repaints_glyph() {
        let mut s = surface([Key::Space, Key::Char('q'), Key::Enter]);
        let mut panel = Panel::new(&mut s, Rect::new(3, 10, 0, 0)).unwrap();
        let mut t = Toggle::new(1, 2);
        assert!(t.activate(&mut panel).unwrap());
        drop(panel);
        let b = s.backend();
        assert_eq!(b.cell(1, 2).unwrap().symbol, "🗹");
        assert_eq!(b.cursor(), (1, 3));
    }

    #[test]
    fn starts_in_given_state() {
        let mut s = surface([Key::Escape]);
        let mut panel = Panel::new(&mut s, Rect::new(3, 10, 0, 0)).unwrap();
        let mut t = Toggle::new(1, 1).checked(true);
        t.show(&mut panel).unwrap();
        assert!(t.activate(&mut panel).unwrap());
    }

    #[test]
    fn intercept_deactivates() {
        let mut s = surface([Key::Tab, Key::Space]);
        let mut panel = Panel::new(&mut s, Rect::new(3, 10, 0, 0)).unwrap();
        let mut t = Toggle::new(1, 1);
        let state = t
            .activate_with(&mut panel, |_, key| {
                if *key == Key::Tab {
                    Intercept::Deactivate
                } else {
                    Intercept::Continue
                }
            })
            .unwrap();
        assert!(!state);
        drop(panel);
        assert_eq!(s.backend().pending_keys(), 1);
    }
}
