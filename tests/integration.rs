//! Integration tests for tally host-testable logic.
//!
//! Drives whole press sequences through the dispatch layer the way the
//! embedded event loop does, recording the feedback each step resolves to.

use tally::counter::{Counter, MAX_COUNT};
use tally::dispatch::{handle_event, Feedback, Step};
use tally::event::{Button, InputEvent, Press};

fn short(button: Button) -> InputEvent {
    InputEvent {
        kind: Press::Short,
        button,
    }
}

fn long(button: Button) -> InputEvent {
    InputEvent {
        kind: Press::Long,
        button,
    }
}

/// Feed a sequence of events, collecting the feedback of each step.
/// Panics if any event terminates the loop.
fn run(counter: &mut Counter, events: &[InputEvent]) -> Vec<Feedback> {
    events
        .iter()
        .map(|&event| match handle_event(counter, event) {
            Step::Continue(feedback) => feedback,
            Step::Exit => panic!("unexpected exit mid-sequence"),
        })
        .collect()
}

#[test]
fn count_walk_saturates_at_zero_and_recovers() {
    let mut counter = Counter::new();

    // Three up, five down: the last two downs are rejected at zero.
    run(&mut counter, &[short(Button::Up); 3]);
    assert_eq!(counter.snapshot().value, 3);

    let feedback = run(&mut counter, &[short(Button::Down); 5]);
    assert_eq!(counter.snapshot().value, 0);
    assert_eq!(feedback[3], Feedback::Alert);
    assert_eq!(feedback[4], Feedback::Alert);

    // Long BACK on an already-zero counter is a no-op reset.
    run(&mut counter, &[long(Button::Back)]);
    assert_eq!(counter.snapshot().value, 0);

    run(&mut counter, &[short(Button::Up)]);
    assert_eq!(counter.snapshot().value, 1);
}

#[test]
fn count_saturates_at_max_with_alert_feedback() {
    let mut counter = Counter::new();

    for _ in 0..MAX_COUNT {
        let step = handle_event(&mut counter, short(Button::Up));
        assert_eq!(step, Step::Continue(Feedback::None));
    }
    assert_eq!(counter.snapshot().value, MAX_COUNT);

    // One more press: value holds, bound alert is recorded.
    let step = handle_event(&mut counter, short(Button::Up));
    assert_eq!(step, Step::Continue(Feedback::Alert));
    assert_eq!(counter.snapshot().value, MAX_COUNT);
}

#[test]
fn vibro_toggle_gates_pulses_but_always_acknowledges() {
    let mut counter = Counter::new();

    // Enable haptics: one acknowledgment pulse, then presses pulse.
    let feedback = run(&mut counter, &[long(Button::Ok), short(Button::Up)]);
    assert_eq!(feedback, [Feedback::Pulse, Feedback::Pulse]);

    // Disable: the toggle still acknowledges, the press goes quiet.
    let feedback = run(&mut counter, &[long(Button::Ok), short(Button::Up)]);
    assert_eq!(feedback, [Feedback::Pulse, Feedback::None]);

    assert_eq!(counter.snapshot().value, 2);
    assert!(!counter.snapshot().vibro);
}

#[test]
fn short_back_terminates_the_loop() {
    let mut counter = Counter::new();
    run(&mut counter, &[short(Button::Up), short(Button::Up)]);

    let step = handle_event(&mut counter, short(Button::Back));
    assert_eq!(step, Step::Exit);

    // Termination leaves the state untouched.
    let snap = counter.snapshot();
    assert_eq!(snap.value, 2);
    assert!(!snap.vibro);
}
