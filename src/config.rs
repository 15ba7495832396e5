//! Application-wide constants and compile-time configuration.
//!
//! All hardware pin assignments, timing parameters, and sizing constants
//! live here so they can be tuned in one place.

// Input

/// Button debounce time (ms).
pub const BUTTON_DEBOUNCE_MS: u64 = 50;

/// Hold time after which a press is classified as long (ms).
pub const LONG_PRESS_MS: u64 = 500;

/// Input event queue depth. A burst beyond this drops the newest event;
/// the enqueue never blocks the button tasks.
pub const INPUT_QUEUE_DEPTH: usize = 8;

// Feedback

/// Vibration pulse hold time (ms).
pub const VIBRO_PULSE_MS: u64 = 20;

/// Bound-alert LED flash hold time (ms).
pub const ALERT_FLASH_MS: u64 = 200;

// GPIO pin assignments (custom tally board, nRF52840)
//
// These are logical names; actual `embassy_nrf::peripherals::*` pins are
// selected in `main.rs`.  Adjust for your PCB revision.
//
//   Button UP      → P0.11
//   Button DOWN    → P0.12
//   Button LEFT    → P0.24
//   Button RIGHT   → P0.25
//   Button OK      → P0.03
//   Button BACK    → P0.04
//   I²C SDA        → P0.26
//   I²C SCL        → P0.27
//   Vibration motor→ P0.06
//   Alert LED      → P0.08
