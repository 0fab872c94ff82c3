//! Transient notices shown by the page.
//!
//! A notice disappears when it is dismissed or when its time-to-live runs
//! out, whichever happens first. Time is supplied by the caller as
//! milliseconds since the session started.

use serde::{Deserialize, Serialize};

/// Default lifetime of coupon messages.
pub const COUPON_NOTICE_TTL_MS: u64 = 3_000;

/// Default lifetime of "added to cart" notices.
pub const CART_NOTICE_TTL_MS: u64 = 8_000;

/// Notice flavour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Success,
    Failure,
    Info,
}

/// A message on screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub text: String,
    /// When the notice was posted.
    pub posted_at_ms: u64,
    pub ttl_ms: u64,
}

impl Notice {
    /// Instant at which the notice auto-dismisses.
    pub fn expires_at_ms(&self) -> u64 {
        self.posted_at_ms.saturating_add(self.ttl_ms)
    }

    /// Check if the notice has run out at `now_ms`.
    pub fn is_expired(&self, now_ms: u64) -> bool {
        now_ms >= self.expires_at_ms()
    }
}

/// Notice lifetimes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoticeSettings {
    #[serde(default = "default_coupon_ttl")]
    pub coupon_ttl_ms: u64,
    #[serde(default = "default_cart_ttl")]
    pub cart_ttl_ms: u64,
}

fn default_coupon_ttl() -> u64 {
    COUPON_NOTICE_TTL_MS
}

fn default_cart_ttl() -> u64 {
    CART_NOTICE_TTL_MS
}

impl Default for NoticeSettings {
    fn default() -> Self {
        Self {
            coupon_ttl_ms: COUPON_NOTICE_TTL_MS,
            cart_ttl_ms: CART_NOTICE_TTL_MS,
        }
    }
}

/// Active notices, oldest first.
#[derive(Debug, Clone, Default, Serialize)]
pub struct NoticeBoard {
    notices: Vec<Notice>,
    next_id: u64,
}

impl NoticeBoard {
    /// Create an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Post a notice and return its id.
    pub fn post(
        &mut self,
        kind: NoticeKind,
        text: impl Into<String>,
        now_ms: u64,
        ttl_ms: u64,
    ) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.notices.push(Notice {
            id,
            kind,
            text: text.into(),
            posted_at_ms: now_ms,
            ttl_ms,
        });
        id
    }

    /// Dismiss a notice. Returns false if it is already gone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let len_before = self.notices.len();
        self.notices.retain(|n| n.id != id);
        self.notices.len() < len_before
    }

    /// Remove and return every notice that has expired at `now_ms`.
    pub fn expire(&mut self, now_ms: u64) -> Vec<Notice> {
        let (expired, active): (Vec<_>, Vec<_>) = std::mem::take(&mut self.notices)
            .into_iter()
            .partition(|n| n.is_expired(now_ms));
        self.notices = active;
        expired
    }

    /// Notices currently on screen.
    pub fn active(&self) -> &[Notice] {
        &self.notices
    }

    /// Most recently posted notice still on screen.
    pub fn latest(&self) -> Option<&Notice> {
        self.notices.last()
    }

    /// Check if nothing is on screen.
    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }
}
