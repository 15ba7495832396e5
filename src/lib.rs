//! Test-only library interface for tally.
//!
//! This module re-exports the pure logic modules that can be tested
//! on the host (no embedded hardware required).
//!
//! Usage: `cargo test`
//!
//! Note: The embedded binary uses main.rs with #![no_std] and #![no_main].
//! This lib.rs provides a separate entry point for host-based testing.

#![cfg_attr(not(test), no_std)]

// Internal module paths for the actual implementations
#[path = "counter.rs"]
mod counter_impl;
#[path = "dispatch.rs"]
mod dispatch_impl;
#[path = "event.rs"]
mod event_impl;
#[path = "ui/text.rs"]
mod ui_text_impl;

pub mod counter {
    pub use crate::counter_impl::*;
}

pub mod dispatch {
    pub use crate::dispatch_impl::*;
}

pub mod event {
    pub use crate::event_impl::*;
}

pub mod ui {
    pub mod text {
        pub use crate::ui_text_impl::*;
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Unit Tests
// ═══════════════════════════════════════════════════════════════════════════
