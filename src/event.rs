//! Input event model.
//!
//! Buttons deliver a discrete stream of classified presses. Only short and
//! long presses exist at this layer; raw edges, repeats and releases are
//! consumed by the button tasks and never reach the event queue.

/// Physical buttons on the front panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    Up,
    Down,
    Left,
    Right,
    Ok,
    Back,
}

/// How long the button was held.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Press {
    /// Released before the long-press threshold.
    Short,
    /// Held past the long-press threshold; dispatched independently of the
    /// short press for the same button.
    Long,
}

/// A classified press, as queued for the event loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InputEvent {
    pub kind: Press,
    pub button: Button,
}
