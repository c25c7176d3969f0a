//! Transient notices
//!
//! One slot per [`NoticeKind`]. Posting into a slot replaces whatever is there
//! and hands back a fresh [`NoticeToken`]; a dismissal only clears the slot if
//! it still holds the notice that token was issued for, so a timer scheduled
//! for an older notice can never wipe a newer one.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Error,
    Success,
}

impl NoticeKind {
    pub const ALL: [NoticeKind; 2] = [NoticeKind::Error, NoticeKind::Success];

    pub fn index(self) -> usize {
        match self {
            NoticeKind::Error => 0,
            NoticeKind::Success => 1,
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            NoticeKind::Error => "notice notice-error",
            NoticeKind::Success => "notice notice-success",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }
}

/// Identifies one posted notice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoticeToken(u64);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct Posted {
    message: String,
    token: NoticeToken,
}

/// At most one visible notice per kind
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoticeBoard {
    slots: [Option<Posted>; 2],
    issued: u64,
}

impl NoticeBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `notice`, superseding any visible notice of the same kind.
    pub fn post(&mut self, notice: Notice) -> NoticeToken {
        self.issued += 1;
        let token = NoticeToken(self.issued);
        self.slots[notice.kind.index()] = Some(Posted {
            message: notice.message,
            token,
        });
        token
    }

    /// Clear the `kind` slot if it still holds the notice behind `token`.
    /// Returns whether anything was cleared.
    pub fn dismiss(&mut self, kind: NoticeKind, token: NoticeToken) -> bool {
        let slot = &mut self.slots[kind.index()];
        match slot {
            Some(posted) if posted.token == token => {
                *slot = None;
                true
            }
            _ => false,
        }
    }

    pub fn current(&self, kind: NoticeKind) -> Option<&str> {
        self.slots[kind.index()].as_ref().map(|p| p.message.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dismiss_clears_posted_notice() {
        let mut board = NoticeBoard::new();
        let token = board.post(Notice::success("Product added successfully!"));
        assert_eq!(board.current(NoticeKind::Success), Some("Product added successfully!"));

        assert!(board.dismiss(NoticeKind::Success, token));
        assert!(board.is_empty());
    }

    #[test]
    fn test_stale_dismissal_keeps_newer_notice() {
        let mut board = NoticeBoard::new();
        let first = board.post(Notice::error("Error: first"));
        let _second = board.post(Notice::error("Error: second"));

        assert!(!board.dismiss(NoticeKind::Error, first));
        assert_eq!(board.current(NoticeKind::Error), Some("Error: second"));
    }

    #[test]
    fn test_kinds_are_independent() {
        let mut board = NoticeBoard::new();
        let err = board.post(Notice::error("Error: boom"));
        let ok = board.post(Notice::success("Product deleted successfully."));

        assert!(board.dismiss(NoticeKind::Error, err));
        assert_eq!(board.current(NoticeKind::Success), Some("Product deleted successfully."));
        assert!(!board.dismiss(NoticeKind::Error, ok));
        assert!(board.dismiss(NoticeKind::Success, ok));
    }
}
