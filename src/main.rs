//! tally - button-driven tally counter firmware for nRF52840.
//!
//! Three kinds of tasks share one explicitly-constructed counter state:
//!
//! - six button tasks classify GPIO presses and feed the input queue;
//! - the event loop drains the queue, applies transitions under the state
//!   mutex, runs feedback with the mutex released, and requests redraws;
//! - the render task redraws the OLED on request, reading a lock-consistent
//!   snapshot.
//!
//! A short BACK press terminates: the event loop signals the render task,
//! the panel is blanked and powered off, and the executor idles.

#![no_std]
#![no_main]

mod config;
mod counter;
mod dispatch;
mod error;
mod event;
mod feedback;
mod ui;

use counter::Counter;
use defmt::{debug, info, warn};
use dispatch::Step;
use event::{Button, InputEvent};
use feedback::FeedbackOutputs;

use defmt_rtt as _;
use panic_probe as _;

use embassy_executor::Spawner;
use embassy_futures::select::{select, Either};
use embassy_nrf::gpio::{AnyPin, Pin};
use embassy_nrf::twim::{self, Twim};
use embassy_nrf::{bind_interrupts, peripherals};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::mutex::Mutex;
use embassy_sync::signal::Signal;
use static_cell::StaticCell;

use config::INPUT_QUEUE_DEPTH;

bind_interrupts!(struct Irqs {
    TWISPI0 => twim::InterruptHandler<peripherals::TWISPI0>;
});

/// The counter behind its mutual-exclusion lock. Constructed once in
/// `main` and handed to the tasks by reference - no ambient singleton.
type SharedCounter = Mutex<CriticalSectionRawMutex, Counter>;

/// Concrete OLED driver type for this board's I²C bus.
type Oled = ui::display::Display<Twim<'static, peripherals::TWISPI0>>;

/// Bounded input queue. Button tasks enqueue without blocking; a full
/// queue drops the newest event.
static INPUT_EVENTS: Channel<CriticalSectionRawMutex, InputEvent, INPUT_QUEUE_DEPTH> =
    Channel::new();

/// Redraw request from the event loop to the render task.
static REDRAW: Signal<CriticalSectionRawMutex, ()> = Signal::new();

/// Shutdown request; terminal.
static SHUTDOWN: Signal<CriticalSectionRawMutex, ()> = Signal::new();

static STATE: StaticCell<SharedCounter> = StaticCell::new();

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_nrf::init(Default::default());
    info!("tally starting");

    let i2c = Twim::new(p.TWISPI0, Irqs, p.P0_26, p.P0_27, twim::Config::default());
    let display = match ui::display::init(i2c) {
        Ok(d) => d,
        // Startup allocation/init failure is the sole fatal path.
        Err(e) => defmt::panic!("display init failed: {}", e),
    };

    let state: &'static SharedCounter = STATE.init(Mutex::new(Counter::new()));
    let outputs = FeedbackOutputs::new(p.P0_06.degrade(), p.P0_08.degrade());

    spawner.must_spawn(render(state, display));
    spawner.must_spawn(event_loop(state, outputs));

    let buttons: [(AnyPin, Button); 6] = [
        (p.P0_11.degrade(), Button::Up),
        (p.P0_12.degrade(), Button::Down),
        (p.P0_24.degrade(), Button::Left),
        (p.P0_25.degrade(), Button::Right),
        (p.P0_03.degrade(), Button::Ok),
        (p.P0_04.degrade(), Button::Back),
    ];
    for (pin, button) in buttons {
        spawner.must_spawn(button_input(pin, button));
    }

    info!("tally ready");
}

/// One task per physical button.
#[embassy_executor::task(pool_size = 6)]
async fn button_input(pin: AnyPin, button: Button) -> ! {
    ui::buttons::button_task(pin, button, &INPUT_EVENTS.sender()).await
}

/// Input-processing loop: the only writer of counter state.
///
/// Blocks on the queue with no timeout. The mutex is held for the
/// transition only; feedback delays and the redraw signal happen after it
/// is released, so the render path is never serialized behind a pulse.
#[embassy_executor::task]
async fn event_loop(state: &'static SharedCounter, mut outputs: FeedbackOutputs<'static>) {
    loop {
        let event = INPUT_EVENTS.receive().await;

        let step = {
            let mut counter = state.lock().await;
            dispatch::handle_event(&mut counter, event)
        };

        match step {
            Step::Continue(fb) => {
                outputs.run(fb).await;
                REDRAW.signal(());
            }
            Step::Exit => break,
        }
    }

    info!("back pressed, shutting down");
    SHUTDOWN.signal(());
}

/// Render task: draws the count whenever a redraw is requested.
///
/// Redraw requests coalesce in the signal while a frame is in flight.
/// A failed frame is logged and retried on the next request.
#[embassy_executor::task]
async fn render(state: &'static SharedCounter, mut display: Oled) {
    draw_current(state, &mut display).await;

    loop {
        match select(REDRAW.wait(), SHUTDOWN.wait()).await {
            Either::First(()) => draw_current(state, &mut display).await,
            Either::Second(()) => break,
        }
    }

    if let Err(e) = ui::display::power_off(&mut display) {
        warn!("display power-off failed: {}", e);
    }
    info!("display released");
}

async fn draw_current(state: &'static SharedCounter, display: &mut Oled) {
    let snap = {
        let counter = state.lock().await;
        counter.snapshot()
    };
    debug!("render: {}", snap);

    if let Err(e) = ui::display::draw_count(display, snap.value) {
        warn!("draw failed: {}", e);
    }
}
