//! Auto-dismissed notice banners
//!
//! Wraps a [`NoticeBoard`] in a signal and schedules one gloo `Timeout` per
//! kind. Posting a new notice replaces the stored timer, and dropping a
//! `Timeout` cancels it, so only the latest notice of a kind has a pending
//! dismissal.

use catalog_core::{Notice, NoticeBoard, NoticeKind};
use gloo_timers::callback::Timeout;
use leptos::*;

/// Per-screen notice handle
#[derive(Clone, Copy)]
pub struct Notices {
    board: RwSignal<NoticeBoard>,
    timers: StoredValue<[Option<Timeout>; 2]>,
    duration_ms: u32,
}

impl Notices {
    pub fn new(duration_ms: u32) -> Self {
        Self {
            board: create_rw_signal(NoticeBoard::new()),
            timers: store_value([None, None]),
            duration_ms,
        }
    }

    pub fn post(&self, notice: Notice) {
        let kind = notice.kind;
        let Some(token) = self.board.try_update(|b| b.post(notice)) else {
            return;
        };

        let board = self.board;
        let timer = Timeout::new(self.duration_ms, move || {
            // the screen may be gone by now
            let _ = board.try_update(|b| b.dismiss(kind, token));
        });
        self.timers.update_value(|slots| slots[kind.index()] = Some(timer));
    }

    pub fn post_all(&self, notices: impl IntoIterator<Item = Notice>) {
        for notice in notices {
            self.post(notice);
        }
    }

    pub fn message(&self, kind: NoticeKind) -> Option<String> {
        self.board.with(|b| b.current(kind).map(str::to_string))
    }
}

/// Fixed-position banners for whatever notices are visible
#[component]
pub fn NoticeBanners(notices: Notices) -> impl IntoView {
    view! {
        <div class="notice-stack">
            {NoticeKind::ALL
                .into_iter()
                .map(|kind| {
                    move || {
                        notices
                            .message(kind)
                            .map(|message| view! { <div class=kind.css_class() role="status">{message}</div> })
                    }
                })
                .collect_view()}
        </div>
    }
}
