//! Utility helpers shared across page components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, time,
//! task spawning) from component logic so components can be driven headless.

pub mod clock;
pub mod email;
#[cfg(any(test, feature = "testing"))]
pub mod manual_timer;
pub mod storage;
pub mod task;
pub mod timer;
