//! Unified error type for tally.
//!
//! We avoid `alloc` - all variants carry only fixed-size data.
//! Implements `defmt::Format` for efficient on-target logging.
//!
//! Counter saturation is NOT represented here: hitting a bound is a normal
//! outcome carried by `counter::Outcome` and surfaced as user feedback.
//! The only fallible collaborator in this build is the I²C display.

use defmt::Format;

/// Top-level error type used across the application.
#[derive(Debug, Format)]
pub enum Error {
    /// The display controller rejected the init sequence at startup.
    DisplayInit,

    /// I²C transaction to the display failed mid-frame.
    Display,
}
