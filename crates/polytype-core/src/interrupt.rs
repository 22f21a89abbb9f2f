//! Ctrl+C / termination flag.
//!
//! While the TUI owns the terminal in raw mode, Ctrl+C arrives as a key event.
//! Outside raw mode (and for SIGTERM/SIGHUP) the signal handler below sets a
//! flag the runtime checks every frame.

use std::sync::OnceLock;
use std::sync::atomic::{AtomicBool, Ordering};

static INTERRUPTED: AtomicBool = AtomicBool::new(false);
static RESTORE_HOOK: OnceLock<Box<dyn Fn() + Send + Sync>> = OnceLock::new();

#[derive(Debug, thiserror::Error)]
#[error("Interrupted")]
pub struct InterruptedError;

/// Installs the Ctrl+C / termination handler.
///
/// # Errors
/// Returns an error if a handler is already registered.
pub fn init() -> Result<(), ctrlc::Error> {
    ctrlc::set_handler(trigger)
}

/// Sets the interrupt flag, force-exiting on a second interrupt.
pub fn trigger() {
    if INTERRUPTED.swap(true, Ordering::SeqCst) {
        // process::exit() bypasses Drop, so restore the terminal first.
        if let Some(hook) = RESTORE_HOOK.get() {
            hook();
        }
        std::process::exit(130);
    }
}

/// Checks if an interrupt has been requested.
pub fn is_interrupted() -> bool {
    INTERRUPTED.load(Ordering::SeqCst)
}

/// Resets the interrupt flag.
pub fn reset() {
    INTERRUPTED.store(false, Ordering::SeqCst);
}

/// Registers a hook run before a forced exit.
///
/// Typically used by the TUI to restore terminal state.
pub fn set_restore_hook<F>(hook: F)
where
    F: Fn() + Send + Sync + 'static,
{
    let _ = RESTORE_HOOK.set(Box::new(hook));
}
