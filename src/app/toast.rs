//! One-shot auto-dismiss timer for the pagination error toast.

use std::time::Duration;

use tokio::task::JoinHandle;

/// Singleton dismiss timer: at most one is ever pending per feature instance.
///
/// Call [`update`](Self::update) on every change of the observed error. The
/// previous timer is always cancelled first; if the new value is present a
/// fresh one-shot is scheduled, and its firing runs `on_fire` (typically
/// dispatching the internal clear action). A cancelled timer never fires.
pub struct DismissTimer {
    delay: Duration,
    pending: Option<JoinHandle<()>>,
}

impl DismissTimer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn update<F>(&mut self, error_present: bool, on_fire: F)
    where
        F: FnOnce() + Send + 'static,
    {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }

        if error_present {
            let delay = self.delay;
            self.pending = Some(tokio::spawn(async move {
                tokio::time::sleep(delay).await;
                on_fire();
            }));
        }
    }
}

impl Drop for DismissTimer {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}
