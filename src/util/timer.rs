//! Delays as futures.
//!
//! Components await [`Timer::sleep`] instead of scheduling callbacks, so the
//! simulated form submission reads top to bottom and can be driven by a
//! virtual-time timer (`util::manual_timer`) in tests.

#[cfg(feature = "hydrate")]
use futures::FutureExt;
use futures::future::LocalBoxFuture;

pub trait Timer {
    /// Future that resolves after `ms` milliseconds.
    fn sleep(&self, ms: u32) -> LocalBoxFuture<'static, ()>;
}

/// `setTimeout`-backed timer.
#[cfg(feature = "hydrate")]
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserTimer;

#[cfg(feature = "hydrate")]
impl Timer for BrowserTimer {
    fn sleep(&self, ms: u32) -> LocalBoxFuture<'static, ()> {
        gloo_timers::future::TimeoutFuture::new(ms).boxed_local()
    }
}
