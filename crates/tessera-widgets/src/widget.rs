//! The modal key loop shared by text fields and toggles.

use crate::panel::Panel;
use tessera_core::{Backend, Key, Result};

/// What an intercept callback decided about a key.
///
/// Intercepts run before a widget's own key handling, so a screen driver can
/// bind extra keys (focus movement, validation prompts) without the widget
/// knowing about them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intercept {
    /// Fall through to the widget's default handling.
    Continue,
    /// The key was consumed; skip default handling but keep editing.
    Handled,
    /// Stop the interaction now.
    Deactivate,
}

/// Outcome of a widget's default handling of one key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edit {
    /// A terminating key was read.
    Submit,
    /// The widget's state or cursor changed.
    Changed,
    /// The key means nothing to this widget.
    Ignored,
}

/// A widget driven by [`interact`].
pub(crate) trait Modal {
    /// Apply the default handling for `key`.
    fn handle_key(&mut self, key: &Key) -> Edit;

    /// Paint the widget onto `panel`.
    fn paint<B: Backend>(&self, panel: &mut Panel<'_, B>) -> Result<()>;

    /// Where the terminal cursor rests, relative to the panel.
    fn cursor(&self) -> (u16, u16);
}

fn place<W: Modal, B: Backend>(widget: &W, panel: &mut Panel<'_, B>) -> Result<()> {
    widget.paint(panel)?;
    let (y, x) = widget.cursor();
    panel.move_cursor(y, x)
}

/// Run `widget`'s modal loop on `panel` until a terminating key or a
/// [`Intercept::Deactivate`].
///
/// The terminal cursor is shown for the duration of the loop and hidden
/// again on the way out, errors included.
pub(crate) fn interact<W, B, F>(
    widget: &mut W,
    panel: &mut Panel<'_, B>,
    mut intercept: F,
) -> Result<()>
where
    W: Modal,
    B: Backend,
    F: FnMut(&mut W, &Key) -> Intercept,
{
    panel.set_cursor_visible(true)?;
    let outcome = run(widget, panel, &mut intercept);
    panel.set_cursor_visible(false)?;
    outcome
}

fn run<W, B, F>(widget: &mut W, panel: &mut Panel<'_, B>, intercept: &mut F) -> Result<()>
where
    W: Modal,
    B: Backend,
    F: FnMut(&mut W, &Key) -> Intercept,
{
    place(widget, panel)?;
    loop {
        let key = panel.read_key()?;
        match intercept(widget, &key) {
            Intercept::Deactivate => {
                tracing::debug!(%key, "widget deactivated by intercept");
                break;
            }
            Intercept::Handled => {}
            Intercept::Continue => match widget.handle_key(&key) {
                Edit::Submit => {
                    tracing::debug!(%key, "widget submitted");
                    break;
                }
                Edit::Ignored => continue,
                Edit::Changed => {}
            },
        }
        place(widget, panel)?;
    }
    place(widget, panel)
}
