//! Terminal backends.
//!
//! A [`Backend`] is the raw primitive layer under a [`Surface`](crate::Surface):
//! cursor positioning, styled text at a coordinate, a blocking key read, and
//! mode setup/teardown. [`CrosstermBackend`] drives a real terminal;
//! [`TestBackend`](crate::testing::TestBackend) records into a cell grid.

use crate::key::Key;
use crate::options::{OutputTarget, SurfaceOptions};
use crossterm::{
    cursor, event, execute, queue,
    style::{ContentStyle, PrintStyledContent, StyledContent},
    terminal::{self, disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, stderr, stdout, Stderr, Stdout, Write};
use std::sync::atomic::{AtomicBool, Ordering};

/// Text attributes and colors applied to painted text.
pub type Style = ContentStyle;

/// The primitive operations a [`Surface`](crate::Surface) needs from a
/// terminal.
///
/// Coordinates are `(y, x)`, zero-based, in cells. Painting may be buffered
/// until [`flush`](Backend::flush).
pub trait Backend {
    /// Terminal size as `(rows, cols)`.
    fn size(&self) -> io::Result<(u16, u16)>;

    /// Block until the next key press.
    fn read_key(&mut self) -> io::Result<Key>;

    /// Paint `text` starting at `(y, x)` with `style`.
    fn put(&mut self, y: u16, x: u16, text: &str, style: Style) -> io::Result<()>;

    /// Move the terminal cursor to `(y, x)`.
    fn move_cursor(&mut self, y: u16, x: u16) -> io::Result<()>;

    /// Show or hide the terminal cursor.
    fn set_cursor_visible(&mut self, visible: bool) -> io::Result<()>;

    /// Blank the whole screen.
    fn clear(&mut self) -> io::Result<()>;

    /// Push buffered output to the terminal.
    fn flush(&mut self) -> io::Result<()>;

    /// Hand the terminal back to the shell (job control) and take it again
    /// once resumed.
    fn suspend(&mut self) -> io::Result<()> {
        Ok(())
    }

    /// Restore the original terminal mode. Must be idempotent.
    fn restore(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Writer that wraps either stdout or stderr.
enum Output {
    Stdout(Stdout),
    Stderr(Stderr),
}

impl Write for Output {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Output::Stdout(w) => w.write(buf),
            Output::Stderr(w) => w.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Output::Stdout(w) => w.flush(),
            Output::Stderr(w) => w.flush(),
        }
    }
}

impl Output {
    fn new(target: OutputTarget) -> Self {
        match target {
            OutputTarget::Stdout => Output::Stdout(stdout()),
            OutputTarget::Stderr => Output::Stderr(stderr()),
        }
    }
}

/// Set while this process holds the terminal in raw mode. Whoever clears it
/// (drop, explicit restore, or the panic hook) performs the one restore.
static TERMINAL_ACQUIRED: AtomicBool = AtomicBool::new(false);

/// A real terminal driven through crossterm.
///
/// Creating one enters raw mode; dropping it (or calling
/// [`restore`](Backend::restore)) puts the terminal back.
pub struct CrosstermBackend {
    out: Output,
    alt_screen: bool,
    target: OutputTarget,
}

impl CrosstermBackend {
    /// Acquire the terminal according to `options`.
    pub fn new(options: &SurfaceOptions) -> io::Result<Self> {
        init_terminal(options)?;
        Ok(Self {
            out: Output::new(options.output),
            alt_screen: options.alt_screen,
            target: options.output,
        })
    }
}

impl Backend for CrosstermBackend {
    fn size(&self) -> io::Result<(u16, u16)> {
        let (cols, rows) = terminal::size()?;
        Ok((rows, cols))
    }

    fn read_key(&mut self) -> io::Result<Key> {
        loop {
            if let event::Event::Key(ev) = event::read()? {
                if let Some(key) = Key::from_event(ev) {
                    return Ok(key);
                }
            }
        }
    }

    fn put(&mut self, y: u16, x: u16, text: &str, style: Style) -> io::Result<()> {
        queue!(
            self.out,
            cursor::MoveTo(x, y),
            PrintStyledContent(StyledContent::new(style, text))
        )
    }

    fn move_cursor(&mut self, y: u16, x: u16) -> io::Result<()> {
        queue!(self.out, cursor::MoveTo(x, y))
    }

    fn set_cursor_visible(&mut self, visible: bool) -> io::Result<()> {
        if visible {
            queue!(self.out, cursor::Show)
        } else {
            queue!(self.out, cursor::Hide)
        }
    }

    fn clear(&mut self) -> io::Result<()> {
        queue!(self.out, terminal::Clear(terminal::ClearType::All))
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    fn suspend(&mut self) -> io::Result<()> {
        self.restore()?;

        #[cfg(unix)]
        {
            unsafe {
                libc::raise(libc::SIGTSTP);
            }
        }

        // Resumed: take the terminal again with the same settings.
        let options = SurfaceOptions {
            alt_screen: self.alt_screen,
            output: self.target,
            ..SurfaceOptions::default()
        };
        init_terminal(&options)
    }

    fn restore(&mut self) -> io::Result<()> {
        restore_terminal(self.alt_screen, self.target)
    }
}

impl Drop for CrosstermBackend {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}

fn init_terminal(options: &SurfaceOptions) -> io::Result<()> {
    // Install panic hook that restores terminal (only once to avoid stacking)
    if options.catch_panics {
        use std::sync::Once;
        static HOOK_INSTALLED: Once = Once::new();
        let alt_screen = options.alt_screen;
        let output_target = options.output;
        HOOK_INSTALLED.call_once(|| {
            let original_hook = std::panic::take_hook();
            std::panic::set_hook(Box::new(move |info| {
                let _ = restore_terminal(alt_screen, output_target);
                original_hook(info);
            }));
        });
    }

    enable_raw_mode()?;
    TERMINAL_ACQUIRED.store(true, Ordering::SeqCst);
    let mut writer = Output::new(options.output);
    if options.alt_screen {
        execute!(writer, EnterAlternateScreen)?;
    }
    execute!(writer, cursor::Hide)?;
    tracing::info!(alt_screen = options.alt_screen, "terminal acquired");
    Ok(())
}

fn restore_terminal(alt_screen: bool, output_target: OutputTarget) -> io::Result<()> {
    if !TERMINAL_ACQUIRED.swap(false, Ordering::SeqCst) {
        return Ok(());
    }
    // Best-effort: keep going when one step fails so as much terminal state
    // as possible comes back.
    let r1 = disable_raw_mode();
    let mut writer = Output::new(output_target);
    execute!(writer, cursor::Show).ok();
    if alt_screen {
        execute!(writer, LeaveAlternateScreen).ok();
    }
    tracing::info!("terminal restored");
    r1
}
