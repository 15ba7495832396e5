//! GPIO button input with async debouncing and press classification.
//!
//! Six physical buttons (active-low with internal pull-up):
//!   - UP / OK  - increment the count
//!   - DOWN     - decrement the count
//!   - BACK     - short: quit, long: reset to zero
//!   - OK long  - toggle haptic feedback
//!   - LEFT / RIGHT - reserved, no action
//!
//! Each button is handled by an async task that waits for a GPIO edge,
//! debounces it, classifies the hold as a short or long press, and puts an
//! `InputEvent` on the input channel. The put is non-blocking: when the
//! queue is full the newest event is dropped so burst input can never
//! stall a button task or grow memory.

use crate::config::{BUTTON_DEBOUNCE_MS, INPUT_QUEUE_DEPTH, LONG_PRESS_MS};
use crate::ui::{Button, InputEvent, Press};
use defmt::{info, warn};
use embassy_futures::select::{select, Either};
use embassy_nrf::gpio::{AnyPin, Input, Pull};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Sender;
use embassy_time::{Duration, Timer};

/// Run a single button polling loop.
///
/// Waits for the pin to go low (pressed), debounces, races the release
/// edge against the long-press timer to classify the press, sends the
/// event, then waits for release before repeating.
pub async fn button_task(
    pin: AnyPin,
    button: Button,
    tx: &Sender<'static, CriticalSectionRawMutex, InputEvent, INPUT_QUEUE_DEPTH>,
) -> ! {
    let mut btn = Input::new(pin, Pull::Up);

    loop {
        // Wait for falling edge (button press, active-low).
        btn.wait_for_falling_edge().await;

        // Debounce: wait and re-check.
        Timer::after(Duration::from_millis(BUTTON_DEBOUNCE_MS)).await;
        if btn.is_high() {
            continue;
        }

        // Classify: released before the threshold is a short press, the
        // threshold elapsing first is a long press (sent while still held,
        // independently of any short press).
        let kind = match select(
            btn.wait_for_rising_edge(),
            Timer::after(Duration::from_millis(LONG_PRESS_MS)),
        )
        .await
        {
            Either::First(()) => Press::Short,
            Either::Second(()) => Press::Long,
        };

        let event = InputEvent { kind, button };
        info!("Button: {}", event);
        if tx.try_send(event).is_err() {
            // Queue full: drop the newest event rather than block.
            warn!("input queue full, dropping {}", event);
        }

        // For a long press the pin is still low; wait out the release.
        if kind == Press::Long {
            btn.wait_for_rising_edge().await;
        }
        Timer::after(Duration::from_millis(BUTTON_DEBOUNCE_MS)).await;
    }
}
