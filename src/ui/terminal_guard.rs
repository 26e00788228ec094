//! Raw mode and alternate screen lifetime of the console.

use crossterm::cursor::{Hide, Show};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, Clear as TermClear, ClearType, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::any::Any;
use std::io::{self, Stdout};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

pub type ConsoleTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Hands the terminal back exactly once: on drop, or from the panic hook if
/// the UI thread panics first.
pub struct TerminalGuard {
    active: Arc<AtomicBool>,
    restore: fn(),
}

impl TerminalGuard {
    fn with_restore(restore: fn()) -> Self {
        Self {
            active: Arc::new(AtomicBool::new(true)),
            restore,
        }
    }

    pub fn restore(&self) {
        restore_once(&self.active, self.restore);
    }

    /// Logs go to a file while the alternate screen is up, so the hook
    /// records the panic there before leaving it.
    fn install_panic_hook(&self) {
        let active = Arc::clone(&self.active);
        let restore = self.restore;
        let default_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let location = info
                .location()
                .map(|location| format!("{}:{}", location.file(), location.line()))
                .unwrap_or_else(|| "unknown".to_string());
            tracing::error!(%location, "console panicked: {}", panic_message(info.payload()));
            restore_once(&active, restore);
            default_hook(info);
        }));
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        self.restore();
    }
}

fn restore_once(active: &AtomicBool, restore: fn()) {
    if active.swap(false, Ordering::SeqCst) {
        restore();
        tracing::debug!("terminal restored");
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&str>() {
        *message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.as_str()
    } else {
        "non-string panic payload"
    }
}

fn leave_console_screen() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = stdout.execute(LeaveAlternateScreen);
    let _ = stdout.execute(Show);
}

pub fn setup_terminal() -> io::Result<(ConsoleTerminal, TerminalGuard)> {
    enable_raw_mode()?;
    // Any early return below drops the guard and leaves raw mode again
    let guard = TerminalGuard::with_restore(leave_console_screen);

    let mut stdout = io::stdout();
    stdout
        .execute(EnterAlternateScreen)?
        .execute(TermClear(ClearType::All))?
        .execute(Hide)?;

    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    guard.install_panic_hook();
    tracing::debug!("terminal in raw mode on the alternate screen");

    Ok((terminal, guard))
}
