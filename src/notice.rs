//! Transient notice banner state machine
//!
//! A notice is a short-lived confirmation or error message shown after a
//! user action ("Burger added to cart"). Exactly one notice may be pending:
//! showing a new one replaces both the message and the pending expiry, so a
//! stale deadline can never clear a newer message.
//!
//! Expiry is driven by comparing a stored deadline against an `Instant`
//! passed in by the event loop, which keeps the state machine deterministic
//! under test (no wall-clock timers, no timer thread).

use std::time::{Duration, Instant};

/// Notice kind, controls banner styling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A short-lived user-facing message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub kind: NoticeKind,
}

impl Notice {
    /// Create a success notice
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NoticeKind::Success,
        }
    }

    /// Create an error notice
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NoticeKind::Error,
        }
    }
}

/// Single-slot notice holder with deadline-based expiry
#[derive(Debug)]
pub struct NoticeHost {
    ttl: Duration,
    slot: Option<(Notice, Instant)>,
}

impl NoticeHost {
    /// Default display window
    pub const DEFAULT_TTL: Duration = Duration::from_millis(3000);

    /// Create a host with the given display window
    pub fn new(ttl: Duration) -> Self {
        Self { ttl, slot: None }
    }

    /// Show a notice, replacing any pending one and its expiry deadline
    pub fn show(&mut self, notice: Notice, now: Instant) {
        self.slot = Some((notice, now + self.ttl));
    }

    /// Expire the pending notice once its deadline has passed
    pub fn tick(&mut self, now: Instant) {
        if let Some((_, deadline)) = &self.slot {
            if now >= *deadline {
                self.slot = None;
            }
        }
    }

    /// The currently visible notice, if any
    pub fn current(&self) -> Option<&Notice> {
        self.slot.as_ref().map(|(notice, _)| notice)
    }

    /// Whether a notice is currently visible
    pub fn is_visible(&self) -> bool {
        self.slot.is_some()
    }

    /// The configured display window
    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}

impl Default for NoticeHost {
    fn default() -> Self {
        Self::new(Self::DEFAULT_TTL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_then_current() {
        let mut host = NoticeHost::default();
        assert!(!host.is_visible());

        let now = Instant::now();
        host.show(Notice::success("Burger added to cart"), now);

        let notice = host.current().unwrap();
        assert_eq!(notice.message, "Burger added to cart");
        assert_eq!(notice.kind, NoticeKind::Success);
    }

    #[test]
    fn test_expires_at_deadline() {
        let mut host = NoticeHost::default();
        let now = Instant::now();
        host.show(Notice::success("done"), now);

        host.tick(now + Duration::from_millis(2999));
        assert!(host.is_visible());

        host.tick(now + Duration::from_millis(3000));
        assert!(!host.is_visible());
    }

    #[test]
    fn test_show_replaces_pending_deadline() {
        let mut host = NoticeHost::default();
        let now = Instant::now();
        host.show(Notice::success("first"), now);

        // Second notice arrives 2s later; the first deadline must not
        // clear it at the 3s mark.
        host.show(Notice::error("second"), now + Duration::from_secs(2));

        host.tick(now + Duration::from_millis(3000));
        let notice = host.current().unwrap();
        assert_eq!(notice.message, "second");
        assert_eq!(notice.kind, NoticeKind::Error);

        host.tick(now + Duration::from_millis(5000));
        assert!(!host.is_visible());
    }

    #[test]
    fn test_tick_without_notice_is_noop() {
        let mut host = NoticeHost::default();
        host.tick(Instant::now());
        assert!(host.current().is_none());
    }

    #[test]
    fn test_custom_ttl() {
        let mut host = NoticeHost::new(Duration::from_millis(500));
        let now = Instant::now();
        host.show(Notice::success("quick"), now);

        host.tick(now + Duration::from_millis(499));
        assert!(host.is_visible());
        host.tick(now + Duration::from_millis(500));
        assert!(!host.is_visible());
    }
}
