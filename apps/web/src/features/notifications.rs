//! Transient toast notifications.
//!
//! The session core returns [`Notice`] values describing what the user should
//! be told; this module owns how they appear and disappear. Inline field
//! errors are a separate channel and never pass through here.

use crate::components::{Alert, AlertKind};
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use session_core::{Notice, NoticeKind};

/// How long a toast stays on screen (milliseconds).
const TOAST_DURATION_MS: u32 = 5_000;

#[derive(Clone, PartialEq)]
pub struct Toast {
    id: u64,
    pub notice: Notice,
}

#[derive(Clone, Copy)]
pub struct Notifications {
    toasts: RwSignal<Vec<Toast>>,
    next_id: RwSignal<u64>,
}

impl Notifications {
    fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(0),
        }
    }

    /// Show a notice and schedule its dismissal.
    pub fn push(&self, notice: Notice) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);
        self.toasts.update(|toasts| toasts.push(Toast { id, notice }));

        let toasts = self.toasts;
        Timeout::new(TOAST_DURATION_MS, move || {
            toasts.update(|list| list.retain(|toast| toast.id != id));
        })
        .forget();
    }

    pub fn push_all(&self, notices: impl IntoIterator<Item = Notice>) {
        for notice in notices {
            self.push(notice);
        }
    }
}

/// Provides the notification context and mounts the toast stack.
#[component]
pub fn NotificationProvider(children: Children) -> impl IntoView {
    let notifications = Notifications::new();
    provide_context(notifications);

    view! {
        {children()}
        <ToastStack />
    }
}

/// Returns the notification context or a detached fallback.
pub fn use_notifications() -> Notifications {
    use_context::<Notifications>().unwrap_or_else(Notifications::new)
}

#[component]
fn ToastStack() -> impl IntoView {
    let notifications = use_notifications();
    let toasts = notifications.toasts;

    view! {
        <div class="fixed top-4 right-4 z-50 w-80 space-y-2">
            <For each=move || toasts.get() key=|toast| toast.id children=|toast| {
                let kind = match toast.notice.kind {
                    NoticeKind::Success => AlertKind::Success,
                    NoticeKind::Error => AlertKind::Error,
                };
                view! { <Alert kind=kind message=toast.notice.text.clone() /> }
            } />
        </div>
    }
}
