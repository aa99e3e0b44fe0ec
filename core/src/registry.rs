//! # Serial Registry
//!
//! Issues the serial numbers embedded in container identity codes.
//!
//! Every container variant draws from the same registry, so serials are unique
//! across the whole process regardless of which kind of container asked.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, OnceLock};

use tracing::trace;

/// First serial handed out by a fresh registry.
pub const FIRST_SERIAL: u64 = 1337;

static GLOBAL: OnceLock<Arc<SerialRegistry>> = OnceLock::new();

/// Retrieves or initializes the process-wide registry.
pub fn global() -> Arc<SerialRegistry> {
    GLOBAL
        .get_or_init(|| Arc::new(SerialRegistry::default()))
        .clone()
}

/// Monotonic serial counter.
#[derive(Debug)]
pub struct SerialRegistry {
    next: AtomicU64,
}

impl SerialRegistry {
    pub fn new(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }

    /// Returns the current serial and advances the counter by one.
    ///
    /// The read and the increment happen as a single atomic operation.
    pub fn issue_serial(&self) -> u64 {
        let serial: u64 = self.next.fetch_add(1, Ordering::Relaxed);
        trace!(serial, "issued serial");
        serial
    }

    /// The serial the next call to [`issue_serial`](Self::issue_serial) will return.
    pub fn peek(&self) -> u64 {
        self.next.load(Ordering::Relaxed)
    }
}

impl Default for SerialRegistry {
    fn default() -> Self {
        Self::new(FIRST_SERIAL)
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
