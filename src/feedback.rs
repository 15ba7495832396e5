//! Haptic and visual feedback outputs.
//!
//! A pulse is a fixed sequence: motor on, hold, motor off. The bound
//! alert is the same shape on the LED with a longer hold; for
//! `AlertPulse` the flash runs first, then the pulse. Both run OUTSIDE
//! the counter lock: the event loop releases the mutex before calling in
//! here, so a concurrent render is never serialized behind a feedback
//! delay.

use crate::config::{ALERT_FLASH_MS, VIBRO_PULSE_MS};
use crate::dispatch::Feedback;
use embassy_nrf::gpio::{AnyPin, Level, Output, OutputDrive};
use embassy_time::{Duration, Timer};

/// Vibration motor and alert LED, both simple GPIO outputs.
pub struct FeedbackOutputs<'d> {
    motor: Output<'d>,
    alert_led: Output<'d>,
}

impl<'d> FeedbackOutputs<'d> {
    /// Take ownership of the two output pins, both initially off.
    pub fn new(motor_pin: AnyPin, alert_pin: AnyPin) -> Self {
        Self {
            motor: Output::new(motor_pin, Level::Low, OutputDrive::Standard),
            alert_led: Output::new(alert_pin, Level::Low, OutputDrive::Standard),
        }
    }

    /// Run one resolved feedback action to completion.
    pub async fn run(&mut self, feedback: Feedback) {
        match feedback {
            Feedback::None => {}
            Feedback::Pulse => self.pulse().await,
            Feedback::Alert => self.flash().await,
            Feedback::AlertPulse => {
                self.flash().await;
                self.pulse().await;
            }
        }
    }

    /// Short vibration pulse: on, hold, off.
    async fn pulse(&mut self) {
        self.motor.set_high();
        Timer::after(Duration::from_millis(VIBRO_PULSE_MS)).await;
        self.motor.set_low();
    }

    /// Bound-alert flash on the LED.
    async fn flash(&mut self) {
        self.alert_led.set_high();
        Timer::after(Duration::from_millis(ALERT_FLASH_MS)).await;
        self.alert_led.set_low();
    }
}
