//! Input dispatch - the counter's state transition table.
//!
//! One entry point, [`handle_event`], applies a classified press to the
//! counter and tells the caller what to do next:
//!
//! | Press | Button     | Effect         | Feedback                        |
//! |-------|------------|----------------|---------------------------------|
//! | short | Up / Ok    | increment      | pulse if vibro; alert at bound  |
//! | short | Down       | decrement      | pulse if vibro; alert at bound  |
//! | short | Back       | leave the loop | none                            |
//! | short | Left/Right | none           | none                            |
//! | long  | Back       | reset to 0     | none                            |
//! | long  | Ok         | toggle vibro   | pulse, always (acknowledgment)  |
//! | long  | rest       | none           | none                            |
//!
//! Feedback is returned already resolved against the vibro flag, so the
//! executor never needs to look at counter state. The caller requests a
//! redraw after every event except [`Step::Exit`], no-op presses included.

use crate::counter::{Counter, Outcome};
use crate::event::{Button, InputEvent, Press};

/// What the event loop should do after a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Step {
    /// Run the feedback, request a redraw, keep processing input.
    Continue(Feedback),
    /// Terminal: leave the event loop and shut down.
    Exit,
}

/// User-visible feedback for a transition, fully resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Feedback {
    /// Nothing.
    None,
    /// One short vibration pulse.
    Pulse,
    /// Bound alert flash only (vibro disabled).
    Alert,
    /// Bound alert flash, then a vibration pulse.
    AlertPulse,
}

/// Apply one input event to the counter.
///
/// Must be called with exclusive access to the counter; the embedded event
/// loop holds the state mutex across this call and releases it before any
/// feedback delay runs.
pub fn handle_event(counter: &mut Counter, event: InputEvent) -> Step {
    match (event.kind, event.button) {
        (Press::Short, Button::Up | Button::Ok) => {
            let outcome = counter.increment();
            Step::Continue(bound_feedback(outcome, counter.vibro_enabled()))
        }
        (Press::Short, Button::Down) => {
            let outcome = counter.decrement();
            Step::Continue(bound_feedback(outcome, counter.vibro_enabled()))
        }
        (Press::Short, Button::Back) => Step::Exit,
        (Press::Long, Button::Back) => {
            counter.reset();
            Step::Continue(Feedback::None)
        }
        (Press::Long, Button::Ok) => {
            counter.toggle_vibro();
            // Fixed acknowledgment, independent of the new flag value.
            Step::Continue(Feedback::Pulse)
        }
        // Left/Right and the remaining long presses are unbound.
        _ => Step::Continue(Feedback::None),
    }
}

/// Feedback for an increment/decrement outcome.
fn bound_feedback(outcome: Outcome, vibro: bool) -> Feedback {
    match (outcome, vibro) {
        (Outcome::Accepted, true) => Feedback::Pulse,
        (Outcome::Accepted, false) => Feedback::None,
        (Outcome::Rejected(_), true) => Feedback::AlertPulse,
        (Outcome::Rejected(_), false) => Feedback::Alert,
    }
}
