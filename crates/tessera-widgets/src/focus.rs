//! Focus management for a screen of sibling widgets.

use crate::widget::Intercept;
use tessera_core::Key;

/// Tracks which of `len` sibling widgets has focus.
///
/// The screen driver owns the ring and lends it to each widget's intercept
/// callback; [`handle`](FocusRing::handle) moves focus on `TAB`/`BACKTAB`
/// and ends the current widget's interaction so the driver can activate the
/// next one.
///
/// ```rust,ignore
/// let mut ring = FocusRing::new(2);
/// loop {
///     match ring.focused() {
///         0 => { name.activate_with(&mut panel, |_, k| ring.handle(k))?; }
///         _ => { admin.activate_with(&mut panel, |_, k| ring.handle(k))?; }
///     }
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusRing {
    len: usize,
    focused: usize,
}

impl FocusRing {
    /// A ring of `len` slots with focus on the first.
    pub fn new(len: usize) -> Self {
        Self { len, focused: 0 }
    }

    /// Index of the focused slot.
    pub fn focused(&self) -> usize {
        self.focused
    }

    /// Number of slots.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the ring has no slots.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Move focus to the next slot, wrapping after the last.
    pub fn next(&mut self) {
        if self.len > 0 {
            self.focused = (self.focused + 1) % self.len;
        }
    }

    /// Move focus to the previous slot, wrapping before the first.
    pub fn prev(&mut self) {
        if self.len > 0 {
            self.focused = (self.focused + self.len - 1) % self.len;
        }
    }

    /// Focus slot `index`, clamped to the ring.
    pub fn focus(&mut self, index: usize) {
        self.focused = index.min(self.len.saturating_sub(1));
    }

    /// Whether slot `index` has focus.
    pub fn is_focused(&self, index: usize) -> bool {
        self.focused == index
    }

    /// Intercept callback body: `TAB` focuses the next slot and `BACKTAB`
    /// the previous one, both ending the current interaction. Other keys
    /// fall through.
    pub fn handle(&mut self, key: &Key) -> Intercept {
        match key {
            Key::Tab => {
                self.next();
                Intercept::Deactivate
            }
            Key::BackTab => {
                self.prev();
                Intercept::Deactivate
            }
            _ => Intercept::Continue,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero() {
        let ring = FocusRing::new(3);
        assert_eq!(ring.focused(), 0);
        assert!(ring.is_focused(0));
    }

    #[test]
    fn next_and_prev_wrap() {
        let mut ring = FocusRing::new(3);
        ring.prev();
        assert_eq!(ring.focused(), 2);
        ring.next();
        assert_eq!(ring.focused(), 0);
    }

    #[test]
    fn focus_clamps() {
        let mut ring = FocusRing::new(3);
        ring.focus(10);
        assert_eq!(ring.focused(), 2);
    }

    #[test]
    fn empty_ring_is_inert() {
        let mut ring = FocusRing::new(0);
        ring.next();
        ring.prev();
        ring.focus(4);
        assert_eq!(ring.focused(), 0);
        assert!(ring.is_empty());
    }

    #[test]
    fn handle_moves_on_tab() {
        let mut ring = FocusRing::new(2);
        assert_eq!(ring.handle(&Key::Tab), Intercept::Deactivate);
        assert_eq!(ring.focused(), 1);
        assert_eq!(ring.handle(&Key::BackTab), Intercept::Deactivate);
        assert_eq!(ring.focused(), 0);
        assert_eq!(ring.handle(&Key::Char('a')), Intercept::Continue);
        assert_eq!(ring.focused(), 0);
    }
}
