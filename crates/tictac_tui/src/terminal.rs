//! Raw-mode session setup and teardown.

use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use std::io::Write;
use tracing::{debug, warn};

/// Puts the terminal back the way it was found when dropped.
///
/// Created right after raw mode is switched on, so every later exit
/// (an early `?`, a normal return or an unwinding panic) passes through
/// [`TerminalGuard::restore`].
#[derive(Debug)]
pub struct TerminalGuard<W: Write> {
    out: W,
    restored: bool,
}

impl<W: Write> TerminalGuard<W> {
    /// Enables raw mode, the alternate screen and mouse capture on `out`.
    pub fn enter(out: W) -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut guard = Self::armed(out);
        execute!(guard.out, EnterAlternateScreen, EnableMouseCapture)
            .context("Failed to enter alternate screen")?;
        Ok(guard)
    }

    /// Wraps `out` without touching the terminal; restores on drop.
    pub fn armed(out: W) -> Self {
        Self {
            out,
            restored: false,
        }
    }

    /// Leaves raw mode, the alternate screen and mouse capture.
    ///
    /// Runs once; later calls do nothing. Both steps are attempted even
    /// when the first fails, and the first error is returned.
    pub fn restore(&mut self) -> Result<()> {
        if self.restored {
            return Ok(());
        }
        self.restored = true;
        debug!("Restoring terminal");

        let raw = disable_raw_mode().context("Failed to disable raw mode");
        let screen = execute!(self.out, LeaveAlternateScreen, DisableMouseCapture, Show)
            .context("Failed to leave alternate screen");
        raw.and(screen)
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        if let Err(err) = self.restore() {
            warn!(error = ?err, "Terminal restore failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEAVE_ALTERNATE: &[u8] = b"\x1b[?1049l";

    fn contains(haystack: &[u8], needle: &[u8]) -> bool {
        haystack.windows(needle.len()).any(|w| w == needle)
    }

    #[test]
    fn test_drop_leaves_alternate_screen() {
        let mut out = Vec::new();
        {
            let _guard = TerminalGuard::armed(&mut out);
        }
        assert!(contains(&out, LEAVE_ALTERNATE));
    }

    #[test]
    fn test_restore_runs_once() {
        let mut out = Vec::new();
        {
            let mut guard = TerminalGuard::armed(&mut out);
            let _ = guard.restore();
            let _ = guard.restore();
        }
        let leaves = out
            .windows(LEAVE_ALTERNATE.len())
            .filter(|w| *w == LEAVE_ALTERNATE)
            .count();
        assert_eq!(leaves, 1);
    }

    #[test]
    fn test_early_error_still_restores() {
        fn failing(out: &mut Vec<u8>) -> Result<()> {
            let _guard = TerminalGuard::armed(out);
            anyhow::bail!("backend failed")
        }

        let mut out = Vec::new();
        assert!(failing(&mut out).is_err());
        assert!(contains(&out, LEAVE_ALTERNATE));
    }

    #[test]
    fn test_panic_unwinds_through_restore() {
        let mut out = Vec::new();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _guard = TerminalGuard::armed(&mut out);
            panic!("event loop panicked");
        }));
        assert!(result.is_err());
        assert!(contains(&out, LEAVE_ALTERNATE));
    }
}
