use std::sync::{Arc, Mutex};
use std::time::Duration;

use leptos::prelude::*;

type Teardown = Box<dyn FnOnce() + Send + Sync>;

/// Runs its teardown at most once; every later call is a no-op.
struct DisposeOnce {
    teardown: Mutex<Option<Teardown>>,
}

impl DisposeOnce {
    fn new(teardown: Teardown) -> Self {
        Self {
            teardown: Mutex::new(Some(teardown)),
        }
    }

    fn dispose(&self) {
        let teardown = self.teardown.lock().ok().and_then(|mut slot| slot.take());
        if let Some(teardown) = teardown {
            teardown();
        }
    }
}

/// Owner handle for a repeating timer. Clones share the same underlying
/// timer, and disposing any of them clears it exactly once.
#[derive(Clone)]
pub struct PollHandle {
    inner: Arc<DisposeOnce>,
}

impl PollHandle {
    fn from_teardown(teardown: Teardown) -> Self {
        Self {
            inner: Arc::new(DisposeOnce::new(teardown)),
        }
    }

    fn inert() -> Self {
        Self::from_teardown(Box::new(|| {}))
    }

    pub fn dispose(&self) {
        self.inner.dispose();
    }
}

/// Invokes `callback` every `interval` until the returned handle is
/// disposed. Ticks are not coalesced: a slow in-flight request does not
/// delay or swallow the next tick, the staleness token in the fetch hook
/// keeps the display consistent. Inert outside the browser.
pub fn start_polling(callback: impl Fn() + 'static, interval: Duration) -> PollHandle {
    #[cfg(feature = "hydrate")]
    {
        match set_interval_with_handle(callback, interval) {
            Ok(handle) => PollHandle::from_teardown(Box::new(move || handle.clear())),
            Err(_) => PollHandle::inert(),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (callback, interval);
        PollHandle::inert()
    }
}

/// `start_polling` with the timer tied to the component's lifetime: unmount
/// disposes it even if the caller never does.
pub fn use_polling(callback: impl Fn() + 'static, interval: Duration) -> PollHandle {
    let handle = start_polling(callback, interval);
    let cleanup = handle.clone();
    on_cleanup(move || cleanup.dispose());
    handle
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[test]
    fn dispose_runs_teardown_exactly_once() {
        let calls = Arc::new(AtomicU32::new(0));
        let counter = Arc::clone(&calls);
        let handle = PollHandle::from_teardown(Box::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        }));

        handle.dispose();
        handle.dispose();
        handle.dispose();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn clones_share_one_teardown() {
        let calls = Arc::new(AtomicU32::new(0));
        let counter = Arc::clone(&calls);
        let handle = PollHandle::from_teardown(Box::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        }));
        let clone = handle.clone();

        clone.dispose();
        handle.dispose();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn inert_handle_is_safe_to_dispose() {
        let handle = PollHandle::inert();
        handle.dispose();
        handle.dispose();
    }
}
