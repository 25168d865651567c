//! Time sources for steeping.
//!
//! A cup never reads the system time directly. It asks its [`Clock`], which
//! is [`SystemClock`] in production and [`ManualClock`] wherever time has to
//! be driven by hand.

use std::fmt;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

/// A source of "now", in whole seconds.
///
/// Implementations must be monotonic for elapsed-time queries to stay
/// non-negative.
pub trait Clock: Send + Sync + fmt::Debug {
    /// Returns the current time in seconds.
    fn now_secs(&self) -> i64;
}

/// Wall-clock seconds since the Unix epoch.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_secs(&self) -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs() as i64)
            .unwrap_or(0)
    }
}

/// A clock that only moves when told to.
///
/// Clones share the same underlying time, so a test can keep one handle and
/// hand another to a cup:
///
/// ```
/// use teashop::{Clock, ManualClock};
///
/// let clock = ManualClock::new(1000);
/// let handle = clock.clone();
///
/// handle.advance(60);
/// assert_eq!(clock.now_secs(), 1060);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Arc<AtomicI64>,
}

impl ManualClock {
    /// Creates a clock reading `start_secs`.
    pub fn new(start_secs: i64) -> Self {
        Self {
            now: Arc::new(AtomicI64::new(start_secs)),
        }
    }

    /// Jumps to an absolute time.
    pub fn set(&self, secs: i64) {
        self.now.store(secs, Ordering::SeqCst);
    }

    /// Moves forward by `secs`.
    pub fn advance(&self, secs: i64) {
        self.now.fetch_add(secs, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now_secs(&self) -> i64 {
        self.now.load(Ordering::SeqCst)
    }
}
