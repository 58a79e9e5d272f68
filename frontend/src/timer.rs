use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use leptos::leptos_dom::helpers::{TimeoutHandle, set_timeout_with_handle};
use leptos::prelude::*;
use wasm_bindgen::JsValue;

/// Where timeouts actually get scheduled.
pub trait Timeouts: Clone + Send + Sync + 'static {
    type Handle: Copy + Send + Sync + 'static;
    type Error: std::fmt::Debug;

    fn set(
        &self,
        delay: Duration,
        callback: impl FnOnce() + 'static,
    ) -> Result<Self::Handle, Self::Error>;

    fn clear(&self, handle: Self::Handle);
}

/// `window.setTimeout` / `clearTimeout`.
#[derive(Clone, Copy, Default)]
pub struct BrowserTimeouts;

impl Timeouts for BrowserTimeouts {
    type Handle = TimeoutHandle;
    type Error = JsValue;

    fn set(&self, delay: Duration, callback: impl FnOnce() + 'static) -> Result<TimeoutHandle, JsValue> {
        set_timeout_with_handle(callback, delay)
    }

    fn clear(&self, handle: TimeoutHandle) {
        handle.clear();
    }
}

/// At most one pending timeout, owned by the component that created it.
///
/// Arming again replaces the pending callback. When the owning component is
/// disposed the pending callback is cancelled, so it never writes into
/// signals that no longer exist.
pub struct DismissTimer<T: Timeouts = BrowserTimeouts> {
    timeouts: T,
    pending: Arc<Mutex<Option<T::Handle>>>,
}

impl<T: Timeouts> Clone for DismissTimer<T> {
    fn clone(&self) -> Self {
        Self {
            timeouts: self.timeouts.clone(),
            pending: Arc::clone(&self.pending),
        }
    }
}

impl DismissTimer {
    /// Call from inside the owning component's body.
    pub fn new() -> Self {
        Self::with_timeouts(BrowserTimeouts)
    }
}

impl<T: Timeouts> DismissTimer<T> {
    pub fn with_timeouts(timeouts: T) -> Self {
        let timer = Self {
            timeouts,
            pending: Arc::new(Mutex::new(None)),
        };
        let on_drop = timer.clone();
        on_cleanup(move || on_drop.cancel());
        timer
    }

    /// Replace any pending callback with `callback`, due after `delay`.
    pub fn arm(&self, delay: Duration, callback: impl FnOnce() + 'static) -> Result<(), T::Error> {
        self.cancel();
        let handle = self.timeouts.set(delay, callback)?;
        *self.slot() = Some(handle);
        Ok(())
    }

    pub fn cancel(&self) {
        if let Some(handle) = self.slot().take() {
            self.timeouts.clear(handle);
        }
    }

    fn slot(&self) -> MutexGuard<'_, Option<T::Handle>> {
        self.pending.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    thread_local! {
        static QUEUED: RefCell<Vec<(u32, Box<dyn FnOnce()>)>> = RefCell::new(Vec::new());
    }

    /// Queues callbacks until `fire_all`; cleared ones are discarded.
    #[derive(Clone, Default)]
    struct ManualTimeouts {
        next: Arc<AtomicUsize>,
        refuse: bool,
    }

    impl ManualTimeouts {
        fn fire_all(&self) {
            let due = QUEUED.with(|q| std::mem::take(&mut *q.borrow_mut()));
            for (_, callback) in due {
                callback();
            }
        }

        fn queued(&self) -> usize {
            QUEUED.with(|q| q.borrow().len())
        }
    }

    impl Timeouts for ManualTimeouts {
        type Handle = u32;
        type Error = &'static str;

        fn set(&self, _delay: Duration, callback: impl FnOnce() + 'static) -> Result<u32, &'static str> {
            if self.refuse {
                return Err("refused");
            }
            let id = self.next.fetch_add(1, Ordering::SeqCst) as u32;
            QUEUED.with(|q| q.borrow_mut().push((id, Box::new(callback))));
            Ok(id)
        }

        fn clear(&self, handle: u32) {
            QUEUED.with(|q| q.borrow_mut().retain(|(id, _)| *id != handle));
        }
    }

    #[test]
    fn fires_when_left_alone() {
        let timeouts = ManualTimeouts::default();
        let fired = Arc::new(AtomicUsize::new(0));
        let owner = Owner::new();
        owner.with(|| {
            let timer = DismissTimer::with_timeouts(timeouts.clone());
            let fired = Arc::clone(&fired);
            timer
                .arm(Duration::from_secs(3), move || {
                    fired.fetch_add(1, Ordering::SeqCst);
                })
                .unwrap();
        });
        timeouts.fire_all();
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn disposing_owner_cancels_pending_callback() {
        let timeouts = ManualTimeouts::default();
        let fired = Arc::new(AtomicUsize::new(0));
        let owner = Owner::new();
        owner.with(|| {
            let timer = DismissTimer::with_timeouts(timeouts.clone());
            let fired = Arc::clone(&fired);
            timer
                .arm(Duration::from_secs(3), move || {
                    fired.fetch_add(1, Ordering::SeqCst);
                })
                .unwrap();
        });
        assert_eq!(timeouts.queued(), 1);
        owner.cleanup();
        assert_eq!(timeouts.queued(), 0);
        timeouts.fire_all();
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn rearming_replaces_pending_callback() {
        let timeouts = ManualTimeouts::default();
        let fired = Arc::new(AtomicUsize::new(0));
        let owner = Owner::new();
        owner.with(|| {
            let timer = DismissTimer::with_timeouts(timeouts.clone());
            for step in [1, 10] {
                let fired = Arc::clone(&fired);
                timer
                    .arm(Duration::from_secs(3), move || {
                        fired.fetch_add(step, Ordering::SeqCst);
                    })
                    .unwrap();
            }
        });
        timeouts.fire_all();
        assert_eq!(fired.load(Ordering::SeqCst), 10);
    }

    #[test]
    fn arm_reports_scheduling_failure() {
        let timeouts = ManualTimeouts {
            refuse: true,
            ..Default::default()
        };
        let owner = Owner::new();
        let result = owner.with(|| DismissTimer::with_timeouts(timeouts.clone()).arm(Duration::from_secs(3), || {}));
        assert_eq!(result, Err("refused"));
        assert_eq!(timeouts.queued(), 0);
    }
}
