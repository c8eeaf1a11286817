//! Modal message boxes.

use crate::panel::Panel;
use tessera_core::text::display_width;
use tessera_core::{Backend, Key, Result, Surface};

/// Show `text` in a panel sized to fit it, centered on the terminal, and
/// return the key that dismissed it.
///
/// The panel is left on screen; callers repaint what it covered.
pub fn popup<B: Backend>(surface: &mut Surface<B>, text: &str) -> Result<Key> {
    let lines = text.lines().count().max(1);
    let widest = text.lines().map(display_width).max().unwrap_or(0);
    let height = u16::try_from(lines + 2).unwrap_or(u16::MAX);
    let width = u16::try_from(widest + 2).unwrap_or(u16::MAX);
    let mut panel = Panel::centered(surface, height, width)?;
    panel.write(text)?;
    let key = panel.read_key()?;
    tracing::debug!(%key, "popup dismissed");
    Ok(key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessera_core::testing::TestBackend;
    use tessera_core::{Error, SurfaceOptions};

    #[test]
    fn sized_to_text() {
        let backend = TestBackend::new(10, 30).with_keys([Key::Char('k')]);
        let mut s = Surface::with_backend(backend, SurfaceOptions::default());
        let key = popup(&mut s, "Pick at least\none disk").unwrap();
        assert_eq!(key, Key::Char('k'));
        // 4x15 box at ((10-4)/2-1, (30-15)/2-1) = (2, 6).
        let b = s.backend();
        assert_eq!(b.line(2), format!("      ╔{}╗         ", "═".repeat(13)));
        assert_eq!(b.line(3), "      ║Pick at least║         ");
        assert_eq!(b.line(4), "      ║one disk     ║         ");
        assert!(b.line(5).starts_with("      ╚"));
    }

    #[test]
    fn too_wide_for_terminal() {
        let mut s = Surface::with_backend(TestBackend::new(5, 10), SurfaceOptions::default());
        let err = popup(&mut s, "this will never fit").unwrap_err();
        assert!(matches!(err, Error::Size(_)));
    }
}
