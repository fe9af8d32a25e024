//! Deferred callbacks for notice auto-hide.
//!
//! TRADE-OFFS
//! ==========
//! Timers are fire-and-forget: nothing keeps a handle, so a pending hide can
//! never be cancelled or reset by a later notice. Native builds drop the
//! callback, which keeps non-browser rendering deterministic.

use std::time::Duration;

/// Schedules a one-shot callback.
pub trait HideTimer {
    fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce()>);
}

/// `HideTimer` backed by `setTimeout`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTimer;

impl HideTimer for BrowserTimer {
    fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce()>) {
        #[cfg(feature = "csr")]
        {
            let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
            gloo_timers::callback::Timeout::new(millis, callback).forget();
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (delay, callback);
        }
    }
}
