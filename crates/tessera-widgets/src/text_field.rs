//! Single-line text entry.

use crate::panel::Panel;
use crate::widget::{interact, Edit, Intercept, Modal};
use tessera_core::text::{display_width, pad};
use tessera_core::{Backend, Key, Result};

fn char_width(c: char) -> usize {
    display_width(c.encode_utf8(&mut [0; 4]))
}

/// A single-line text field anchored at a panel coordinate.
///
/// The buffer never grows past `max_len` characters nor past `max_len`
/// display columns, so wide characters count double. The cursor always
/// lies in `0..=len`. A masked field shows the theme's mask character in
/// place of each character, for passwords.
///
/// ```rust,ignore
/// let mut name = TextField::new(2, 12, 24);
/// name.show(&mut panel)?;
/// let user = name.activate(&mut panel)?;
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextField {
    value: Vec<char>,
    cursor: usize,
    max_len: usize,
    masked: bool,
    y: u16,
    x: u16,
}

impl TextField {
    /// An empty field at `(y, x)` holding at most `max_len` characters.
    pub fn new(y: u16, x: u16, max_len: usize) -> Self {
        Self {
            value: Vec::new(),
            cursor: 0,
            max_len,
            masked: false,
            y,
            x,
        }
    }

    /// Start with `text`, truncated to the maximum length.
    pub fn with_text(mut self, text: &str) -> Self {
        self.set_text(text);
        self
    }

    /// Mask the contents on screen.
    pub fn masked(mut self, masked: bool) -> Self {
        self.masked = masked;
        self
    }

    /// The current text.
    pub fn value(&self) -> String {
        self.value.iter().collect()
    }

    /// Replace the text, truncated to the maximum length. The cursor moves
    /// to the end.
    pub fn set_text(&mut self, text: &str) {
        self.value.clear();
        for c in text.chars() {
            if !self.fits(c) {
                break;
            }
            self.value.push(c);
        }
        self.cursor = self.value.len();
    }

    /// Move the cursor, clamped to the text.
    pub fn set_cursor(&mut self, pos: usize) {
        self.cursor = pos.min(self.value.len());
    }

    /// Cursor position in characters.
    pub fn cursor_position(&self) -> usize {
        self.cursor
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.value.len()
    }

    /// Whether the field is empty.
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Maximum length in characters.
    pub fn max_len(&self) -> usize {
        self.max_len
    }

    /// Whether the contents are masked on screen.
    pub fn is_masked(&self) -> bool {
        self.masked
    }

    /// Anchor coordinate inside the panel.
    pub fn position(&self) -> (u16, u16) {
        (self.y, self.x)
    }

    /// Apply the default handling for one key.
    ///
    /// `ENTER` submits. `LEFT`/`RIGHT` move the cursor, `BACKSPACE` and
    /// `DELETE` remove before and at the cursor, printable characters insert
    /// while there is room. Everything else is ignored.
    pub fn handle_key(&mut self, key: &Key) -> Edit {
        match key {
            Key::Enter => Edit::Submit,
            Key::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                Edit::Changed
            }
            Key::Right => {
                self.cursor = (self.cursor + 1).min(self.value.len());
                Edit::Changed
            }
            Key::Backspace => {
                if self.cursor == 0 {
                    return Edit::Ignored;
                }
                self.cursor -= 1;
                self.value.remove(self.cursor);
                Edit::Changed
            }
            Key::Delete => {
                if self.cursor >= self.value.len() {
                    return Edit::Ignored;
                }
                self.value.remove(self.cursor);
                Edit::Changed
            }
            key => match key.printable() {
                Some(c) if self.fits(c) => {
                    self.value.insert(self.cursor, c);
                    self.cursor += 1;
                    Edit::Changed
                }
                _ => Edit::Ignored,
            },
        }
    }

    /// Whether `c` can be added without exceeding the length limit.
    fn fits(&self, c: char) -> bool {
        let used: usize = self.value.iter().map(|&v| char_width(v)).sum();
        self.value.len() < self.max_len && used + char_width(c) <= self.max_len
    }

    fn display(&self, mask: char) -> String {
        if self.masked {
            std::iter::repeat_n(mask, self.value.len()).collect()
        } else {
            self.value()
        }
    }

    /// Paint the field without entering the edit loop.
    pub fn show<B: Backend>(&self, panel: &mut Panel<'_, B>) -> Result<()> {
        let text = pad(&self.display(panel.theme().mask), self.max_len);
        let style = panel.theme().field;
        panel.put(self.y, self.x, &text, style)
    }

    /// Edit the field until `ENTER`, then return the text.
    pub fn activate<B: Backend>(&mut self, panel: &mut Panel<'_, B>) -> Result<String> {
        self.activate_with(panel, |_, _| Intercept::Continue)
    }

    /// Edit the field, giving `intercept` the first look at every key.
    pub fn activate_with<B, F>(&mut self, panel: &mut Panel<'_, B>, intercept: F) -> Result<String>
    where
        B: Backend,
        F: FnMut(&mut TextField, &Key) -> Intercept,
    {
        self.cursor = self.value.len();
        interact(self, panel, intercept)?;
        Ok(self.value())
    }
}

impl Modal for TextField {
    fn handle_key(&mut self, key: &Key) -> Edit {
        TextField::handle_key(self, key)
    }

    fn paint<B: Backend>(&self, panel: &mut Panel<'_, B>) -> Result<()> {
        self.show(panel)
    }

    fn cursor(&self) -> (u16, u16) {
        let width = if self.masked {
            self.cursor
        } else {
            display_width(&self.value[..self.cursor].iter().collect::<String>())
        };
        let offset = u16::try_from(width).unwrap_or(u16::MAX);
        (self.y, self.x.saturating_add(offset))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessera_core::testing::TestBackend;
    use tessera_core::{Rect, Surface, SurfaceOptions};

    fn type_into(field: &mut TextField, text: &str) {
        for c in text.chars() {
            field.handle_key(&Key::from_char(c));
        }
    }

    #[test]
    fn insertions_advance_cursor() {
        let mut f = TextField::new(0, 0, 10);
        type_into(&mut f, "hello");
        assert_eq!(f.value(), "hello");
        assert_eq!(f.len(), 5);
        assert_eq!(f.cursor_position(), 5);
    }

    #[test]
    fn space_is_inserted() {
        let mut f = TextField::new(0, 0, 10);
        type_into(&mut f, "a b");
        assert_eq!(f.value(), "a b");
    }

    #[test]
    fn insert_at_max_len_is_noop() {
        let mut f = TextField::new(0, 0, 3);
        type_into(&mut f, "abc");
        f.handle_key(&Key::Left);
        assert_eq!(f.handle_key(&Key::Char('z')), Edit::Ignored);
        assert_eq!(f.value(), "abc");
        assert_eq!(f.cursor_position(), 2);
    }

    #[test]
    fn wide_characters_count_by_column() {
        let mut f = TextField::new(0, 0, 5);
        type_into(&mut f, "日本語");
        assert_eq!(f.value(), "日本");
        assert_eq!(f.handle_key(&Key::Char('x')), Edit::Changed);
        assert_eq!(f.handle_key(&Key::Char('y')), Edit::Ignored);
        assert_eq!(f.value(), "日本x");
        let f = TextField::new(0, 0, 3).with_text("日本");
        assert_eq!(f.value(), "日");
    }

    #[test]
    fn wide_text_stays_inside_field() {
        let mut s = surface([]);
        let mut panel = Panel::new(&mut s, Rect::new(4, 20, 0, 0)).unwrap();
        let mut f = TextField::new(1, 2, 4);
        type_into(&mut f, "日本語");
        f.show(&mut panel).unwrap();
        drop(panel);
        let b = s.backend();
        assert_eq!(b.cell(1, 2).unwrap().symbol, "日");
        assert_eq!(b.cell(1, 4).unwrap().symbol, "本");
        assert_eq!(b.cell(1, 6).unwrap().symbol, " ");
        assert_eq!(b.cell(1, 6).unwrap().style, crate::Theme::default().text);
    }

    #[test]
    fn backspace_at_start_and_delete_at_end_are_noops() {
        let mut f = TextField::new(0, 0, 10).with_text("ab");
        assert_eq!(f.handle_key(&Key::Delete), Edit::Ignored);
        assert_eq!(f.value(), "ab");
        f.set_cursor(0);
        assert_eq!(f.handle_key(&Key::Backspace), Edit::Ignored);
        assert_eq!(f.value(), "ab");
        assert_eq!(f.cursor_position(), 0);
    }

    #[test]
    fn edits_at_cursor() {
        let mut f = TextField::new(0, 0, 10).with_text("abcd");
        f.handle_key(&Key::Left);
        f.handle_key(&Key::Left);
        f.handle_key(&Key::Backspace);
        assert_eq!(f.value(), "acd");
        f.handle_key(&Key::Delete);
        assert_eq!(f.value(), "ad");
        f.handle_key(&Key::Char('X'));
        assert_eq!(f.value(), "aXd");
        assert_eq!(f.cursor_position(), 2);
    }

    #[test]
    fn cursor_clamps() {
        let mut f = TextField::new(0, 0, 10).with_text("ab");
        for _ in 0..5 {
            f.handle_key(&Key::Right);
        }
        assert_eq!(f.cursor_position(), 2);
        for _ in 0..5 {
            f.handle_key(&Key::Left);
        }
        assert_eq!(f.cursor_position(), 0);
        f.set_cursor(99);
        assert_eq!(f.cursor_position(), 2);
    }

    #[test]
    fn named_keys_are_ignored() {
        let mut f = TextField::new(0, 0, 10);
        for key in [Key::Up, Key::Tab, Key::Home, Key::Function(3), Key::Ctrl('a')] {
            assert_eq!(f.handle_key(&key), Edit::Ignored);
        }
        assert!(f.is_empty());
        assert_eq!(f.handle_key(&Key::Enter), Edit::Submit);
    }

    #[test]
    fn set_text_truncates() {
        let f = TextField::new(0, 0, 4).with_text("password");
        assert_eq!(f.value(), "pass");
        assert_eq!(f.cursor_position(), 4);
    }

    #[test]
    fn never_exceeds_max_len() {
        let mut f = TextField::new(0, 0, 5);
        let keys = "abc\x7fdefgh ij";
        for _ in 0..3 {
            type_into(&mut f, keys);
            f.handle_key(&Key::Left);
            assert!(f.len() <= 5);
            assert!(f.cursor_position() <= f.len());
        }
    }

    fn surface(keys: impl IntoIterator<Item = Key>) -> Surface<TestBackend> {
        Surface::with_backend(TestBackend::new(6, 30).with_keys(keys), SurfaceOptions::default())
    }

    #[test]
    fn activate_paints_field_and_returns_text() {
        let mut s = surface([Key::Char('h'), Key::Char('i'), Key::Enter]);
        let mut panel = Panel::new(&mut s, Rect::new(4, 20, 0, 0)).unwrap();
        let mut f = TextField::new(1, 2, 6);
        let text = f.activate(&mut panel).unwrap();
        drop(panel);
        assert_eq!(text, "hi");
        let b = s.backend();
        assert_eq!(b.line(1), format!("║ hi{}║{}", " ".repeat(15), " ".repeat(10)));
        assert_eq!(b.cell(1, 7).unwrap().style, crate::Theme::default().field);
        assert_eq!(b.cursor(), (1, 4));
        assert!(!b.cursor_visible());
    }

    #[test]
    fn masked_field_hides_text() {
        let mut s = surface([Key::Char('p'), Key::Char('w'), Key::Enter]);
        let mut panel = Panel::new(&mut s, Rect::new(4, 20, 0, 0)).unwrap();
        let mut f = TextField::new(1, 1, 4).masked(true);
        assert_eq!(f.activate(&mut panel).unwrap(), "pw");
        drop(panel);
        assert!(s.backend().line(1).starts_with("║**  "));
    }

    #[test]
    fn intercept_can_deactivate_or_swallow() {
        let mut s = surface([Key::Char('a'), Key::Char('b'), Key::Tab, Key::Char('c')]);
        let mut panel = Panel::new(&mut s, Rect::new(4, 20, 0, 0)).unwrap();
        let mut f = TextField::new(1, 1, 10);
        let mut seen = Vec::new();
        let text = f
            .activate_with(&mut panel, |_, key| {
                seen.push(key.clone());
                match key {
                    Key::Char('b') => Intercept::Handled,
                    Key::Tab => Intercept::Deactivate,
                    _ => Intercept::Continue,
                }
            })
            .unwrap();
        assert_eq!(text, "a");
        assert_eq!(seen, [Key::Char('a'), Key::Char('b'), Key::Tab]);
        drop(panel);
        assert_eq!(s.backend().pending_keys(), 1);
    }

    #[test]
    fn intercept_may_edit_the_field() {
        let mut s = surface([Key::Ctrl('u'), Key::Enter]);
        let mut panel = Panel::new(&mut s, Rect::new(4, 20, 0, 0)).unwrap();
        let mut f = TextField::new(1, 1, 10).with_text("junk");
        let text = f
            .activate_with(&mut panel, |field, key| {
                if *key == Key::Ctrl('u') {
                    field.set_text("");
                    return Intercept::Handled;
                }
                Intercept::Continue
            })
            .unwrap();
        assert_eq!(text, "");
    }

    #[test]
    fn interrupt_hides_cursor_and_propagates() {
        let mut s = surface([Key::Char('a'), Key::Ctrl('c')]);
        let mut panel = Panel::new(&mut s, Rect::new(4, 20, 0, 0)).unwrap();
        let mut f = TextField::new(1, 1, 10);
        let err = f.activate(&mut panel).unwrap_err();
        assert!(matches!(err, tessera_core::Error::Interrupted));
        drop(panel);
        assert!(!s.backend().cursor_visible());
    }
}
