//! Transient user-facing notifications

use crate::config::TOAST_LIFETIME_MS;
use dioxus::prelude::*;

const MAX_VISIBLE: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Success,
    Error,
}

impl Level {
    pub fn class(&self) -> &'static str {
        match self {
            Level::Success => "toast toast-success",
            Level::Error => "toast toast-error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub level: Level,
    pub text: String,
}

#[derive(Debug, Default)]
pub struct Toasts {
    next_id: u64,
    items: Vec<Toast>,
}

impl Toasts {
    pub fn push(&mut self, level: Level, text: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Toast {
            id,
            level,
            text: text.into(),
        });
        if self.items.len() > MAX_VISIBLE {
            self.items.remove(0);
        }
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|t| t.id != id);
    }

    pub fn items(&self) -> &[Toast] {
        &self.items
    }
}

/// Handle components use to raise toasts. Each toast removes itself after
/// a few seconds, even when the component that raised it is already gone.
#[derive(Clone, Copy)]
pub struct Notifier(Signal<Toasts>);

impl Notifier {
    pub fn success(self, text: impl Into<String>) {
        self.show(Level::Success, text.into());
    }

    pub fn error(self, text: impl Into<String>) {
        self.show(Level::Error, text.into());
    }

    pub fn dismiss(self, id: u64) {
        let mut toasts = self.0;
        toasts.write().dismiss(id);
    }

    fn show(self, level: Level, text: String) {
        match level {
            Level::Success => log::info!("{}", text),
            Level::Error => log::warn!("{}", text),
        }
        let mut toasts = self.0;
        let id = toasts.write().push(level, text);
        // pages toast and then navigate away; the timer must outlive them
        spawn_forever(async move {
            sleep(TOAST_LIFETIME_MS).await;
            toasts.write().dismiss(id);
        });
    }
}

pub fn provide_toasts() -> Signal<Toasts> {
    use_context_provider(|| Signal::new(Toasts::default()))
}

pub fn use_notifier() -> Notifier {
    Notifier(use_context::<Signal<Toasts>>())
}

#[cfg(feature = "web")]
pub async fn sleep(ms: u32) {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        if let Some(window) = web_sys::window() {
            let _ = window
                .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms as i32);
        }
    });
    let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
}

#[cfg(not(feature = "web"))]
pub async fn sleep(ms: u32) {
    tokio::time::sleep(std::time::Duration::from_millis(ms as u64)).await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::drive;
    use crate::views::Toaster;
    use dioxus_core::VirtualDom;
    use std::cell::Cell;

    thread_local! {
        static SHOWN: Cell<usize> = const { Cell::new(0) };
    }

    #[component]
    fn Raiser() -> Element {
        let notifier = use_notifier();
        use_effect(move || notifier.success("Welcome back!"));
        rsx! {}
    }

    /// Raises a toast from a child and unmounts that child shortly after,
    /// the way Login does when it navigates to the dashboard.
    #[component]
    fn ToastHost() -> Element {
        let toasts = provide_toasts();
        let mut raiser = use_signal(|| true);
        use_future(move || async move {
            sleep(100).await;
            raiser.set(false);
        });
        SHOWN.with(|shown| shown.set(toasts.read().items().len()));

        rsx! {
            if raiser() {
                Raiser {}
            }
            Toaster {}
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_toast_expires_after_raiser_unmounts() {
        let mut dom = VirtualDom::new(ToastHost);
        dom.rebuild_in_place();

        drive(&mut dom, 1_000).await;
        assert_eq!(SHOWN.with(Cell::get), 1);

        drive(&mut dom, u64::from(TOAST_LIFETIME_MS) + 100).await;
        assert_eq!(SHOWN.with(Cell::get), 0);
    }

    #[test]
    fn test_push_and_dismiss() {
        let mut toasts = Toasts::default();
        let a = toasts.push(Level::Success, "Welcome back!");
        let b = toasts.push(Level::Error, "Login failed");
        assert_ne!(a, b);
        assert_eq!(toasts.items().len(), 2);

        toasts.dismiss(a);
        assert_eq!(toasts.items().len(), 1);
        assert_eq!(toasts.items()[0].text, "Login failed");

        // unknown id is ignored
        toasts.dismiss(1000);
        assert_eq!(toasts.items().len(), 1);
    }

    #[test]
    fn test_oldest_toast_is_dropped_when_full() {
        let mut toasts = Toasts::default();
        for i in 0..(MAX_VISIBLE + 2) {
            toasts.push(Level::Success, format!("toast {}", i));
        }
        assert_eq!(toasts.items().len(), MAX_VISIBLE);
        assert_eq!(toasts.items()[0].text, "toast 2");
    }
}
