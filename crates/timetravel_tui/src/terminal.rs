//! Terminal setup and guaranteed teardown.

use crossterm::{
    cursor::Show,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use std::io;
use tracing::error;

/// Runs its closure when dropped, including during panic unwinding.
pub struct OnDrop<F: FnMut()>(pub F);

impl<F: FnMut()> Drop for OnDrop<F> {
    fn drop(&mut self) {
        (self.0)()
    }
}

/// Puts the terminal in raw mode on the alternate screen.
///
/// The returned guard undoes this when dropped. If entering the alternate
/// screen fails, the guard created right after raw mode restores it.
pub fn enter() -> io::Result<OnDrop<fn()>> {
    enable_raw_mode()?;
    let guard = OnDrop(restore as fn());
    execute!(io::stdout(), EnterAlternateScreen)?;
    Ok(guard)
}

/// Leaves raw mode and the alternate screen and shows the cursor.
fn restore() {
    if let Err(e) = disable_raw_mode() {
        error!(error = %e, "Failed to disable raw mode");
    }
    if let Err(e) = execute!(io::stdout(), LeaveAlternateScreen, Show) {
        error!(error = %e, "Failed to restore terminal screen");
    }
}
