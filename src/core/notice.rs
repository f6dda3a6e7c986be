// PagePulse - core/notice.rs
//
// Transient notice stack: success/info/warning/error banners that hold
// for a configurable duration, fade out, and remove themselves. Every
// deadline lives on the notice record itself, so a notice that is
// dismissed early simply has its deadlines rewritten; there are no
// detached timers to orphan.

use serde::Deserialize;
use std::time::{Duration, Instant};

use crate::util::constants;

/// Visual category of a notice. Also appears in page definitions as the
/// `kind` of a flash notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum NoticeKind {
    Success,
    #[default]
    Info,
    Warning,
    Error,
}

/// Lifecycle phase of a live notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticePhase {
    /// Fully opaque, holding until its fade deadline.
    Visible,
    /// Fading and sliding out; removed at the next tick past `remove_at`.
    FadingOut,
}

/// A single live notice.
#[derive(Debug, Clone)]
pub struct Notice {
    pub id: u64,
    pub message: String,
    pub kind: NoticeKind,
    fade_start: Instant,
    remove_at: Instant,
}

impl Notice {
    pub fn phase(&self, now: Instant) -> NoticePhase {
        if now < self.fade_start {
            NoticePhase::Visible
        } else {
            NoticePhase::FadingOut
        }
    }

    /// Opacity in [0, 1] for this instant.
    pub fn alpha(&self, now: Instant) -> f32 {
        if now < self.fade_start {
            return 1.0;
        }
        let fade = Duration::from_millis(constants::NOTICE_FADE_MS).as_secs_f32();
        let t = now.saturating_duration_since(self.fade_start).as_secs_f32() / fade;
        (1.0 - t).clamp(0.0, 1.0)
    }

    /// Upward slide in logical pixels, growing as the notice fades.
    pub fn slide(&self, now: Instant) -> f32 {
        (1.0 - self.alpha(now)) * constants::NOTICE_SLIDE_PX
    }
}

/// Owns the stack of live notices, oldest first.
#[derive(Debug)]
pub struct NoticeCenter {
    notices: Vec<Notice>,
    next_id: u64,
    visible: Duration,
}

impl NoticeCenter {
    /// `visible_ms` is how long a notice holds before fading; callers
    /// pass the configured (already clamped) value.
    pub fn new(visible_ms: u64) -> Self {
        Self {
            notices: Vec::new(),
            next_id: 1,
            visible: Duration::from_millis(visible_ms),
        }
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    pub fn len(&self) -> usize {
        self.notices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }

    /// Add a notice. When the stack is at capacity the oldest notice is
    /// dropped immediately to make room. Returns the new notice's id.
    pub fn push(&mut self, message: impl Into<String>, kind: NoticeKind, now: Instant) -> u64 {
        if self.notices.len() >= constants::MAX_ACTIVE_NOTICES {
            let evicted = self.notices.remove(0);
            tracing::debug!(id = evicted.id, "Notice stack full; evicted oldest");
        }

        let id = self.next_id;
        self.next_id += 1;
        let message = message.into();
        tracing::debug!(id, ?kind, message = %message, "Notice pushed");
        self.notices.push(Notice {
            id,
            message,
            kind,
            fade_start: now + self.visible,
            remove_at: now + self.visible + Duration::from_millis(constants::NOTICE_FADE_MS),
        });
        id
    }

    /// Dismiss a notice early: its fade starts now instead of at the
    /// original deadline. No-op for unknown ids and for notices that are
    /// already fading, so repeated dismissal is harmless.
    pub fn dismiss(&mut self, id: u64, now: Instant) {
        if let Some(notice) = self.notices.iter_mut().find(|n| n.id == id) {
            if notice.phase(now) == NoticePhase::Visible {
                notice.fade_start = now;
                notice.remove_at = now + Duration::from_millis(constants::NOTICE_FADE_MS);
                tracing::debug!(id, "Notice dismissed");
            }
        }
    }

    /// Remove notices whose fade has completed. Returns how many were
    /// removed. Removal only ever happens here, so render code can hold
    /// indices stable within a frame.
    pub fn tick(&mut self, now: Instant) -> usize {
        let before = self.notices.len();
        self.notices.retain(|n| now < n.remove_at);
        let removed = before - self.notices.len();
        if removed > 0 {
            tracing::trace!(removed, remaining = self.notices.len(), "Notices expired");
        }
        removed
    }

    /// Time until the next phase change (a fade starting or a removal
    /// falling due), or `None` when the stack is empty. Drives the
    /// repaint schedule so an idle stack costs nothing.
    pub fn next_deadline(&self, now: Instant) -> Option<Duration> {
        self.notices
            .iter()
            .map(|n| {
                if now < n.fade_start {
                    n.fade_start - now
                } else {
                    n.remove_at.saturating_duration_since(now)
                }
            })
            .min()
    }
}

impl Default for NoticeCenter {
    fn default() -> Self {
        Self::new(constants::NOTICE_VISIBLE_MS)
    }
}
