use crate::key::Key;

/// Output target for the terminal UI.
///
/// By default the UI renders to **stdout**. When stdout is piped (e.g. a
/// wizard that prints its answers for a script to consume), switch to
/// [`Stderr`](OutputTarget::Stderr) so the UI goes to the terminal while data
/// flows through the pipe.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum OutputTarget {
    /// Write to stdout (default).
    #[default]
    Stdout,
    /// Write to stderr.
    Stderr,
}

/// Configuration options for a [`Surface`](crate::Surface).
///
/// All fields have sensible defaults (see [`Default`] impl). Use struct
/// update syntax to override only the options you need:
///
/// ```rust,ignore
/// use tessera_core::{Key, OutputTarget, SurfaceOptions};
///
/// let opts = SurfaceOptions {
///     output: OutputTarget::Stderr,
///     continue_key: Key::Enter,
///     ..SurfaceOptions::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct SurfaceOptions {
    /// Draw on the alternate screen (default: true).
    pub alt_screen: bool,
    /// Install a panic hook that restores the terminal (default: true).
    pub catch_panics: bool,
    /// Output target: stdout (default) or stderr.
    pub output: OutputTarget,
    /// Key that aborts the session with
    /// [`Error::Interrupted`](crate::Error::Interrupted) (default: Ctrl+C).
    /// Raw mode swallows SIGINT, so this is the only way out of a modal loop
    /// that does not listen for it.
    pub interrupt_key: Option<Key>,
    /// Key awaited by [`Surface::wait`](crate::Surface::wait) (default: Space).
    pub continue_key: Key,
}

impl Default for SurfaceOptions {
    fn default() -> Self {
        Self {
            alt_screen: true,
            catch_panics: true,
            output: OutputTarget::default(),
            interrupt_key: Some(Key::Ctrl('c')),
            continue_key: Key::Space,
        }
    }
}
