//! GPIO rotary encoder with push switch.
//!
//! Three pins (active-low with internal pull-up):
//!   - A, B   - quadrature channels
//!   - SWITCH - push button, pressed = low
//!
//! A sampling task reads the pins on a fixed tick and feeds the shared
//! [`EncoderSampler`]; the menu drains it through [`SharedEncoder`].
//! Sampling on a tick keeps steps from being lost while the menu is busy
//! flushing the display.

use core::cell::RefCell;

use defmt::info;
use embassy_nrf::gpio::{AnyPin, Input, Pull};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;
use embassy_time::{Duration, Instant, Ticker};

use crate::config::ENCODER_SAMPLE_INTERVAL_MS;
use crate::ui::input_logic::EncoderSampler;
use crate::ui::{ButtonState, InputSource, Motion};

/// Sampler state shared between the sampling task and the menu.
pub type SharedSampler = Mutex<CriticalSectionRawMutex, RefCell<EncoderSampler>>;

/// For `static` initialisation.
pub const fn shared_sampler() -> SharedSampler {
    Mutex::new(RefCell::new(EncoderSampler::new()))
}

/// Run the pin sampling loop.
///
/// Latches the resting A/B levels first so power-up does not produce a
/// phantom step.
pub async fn sample_task(a: AnyPin, b: AnyPin, switch: AnyPin, shared: &'static SharedSampler) -> ! {
    let a = Input::new(a, Pull::Up);
    let b = Input::new(b, Pull::Up);
    let switch = Input::new(switch, Pull::Up);

    shared.lock(|sampler| sampler.borrow_mut().prime(a.is_high(), b.is_high()));
    info!("Encoder: sampling every {} ms", ENCODER_SAMPLE_INTERVAL_MS);

    let mut ticker = Ticker::every(Duration::from_millis(ENCODER_SAMPLE_INTERVAL_MS));
    loop {
        let now = Instant::now().as_millis();
        let (a_high, b_high, pressed) = (a.is_high(), b.is_high(), switch.is_low());
        shared.lock(|sampler| sampler.borrow_mut().sample(a_high, b_high, pressed, now));
        ticker.next().await;
    }
}

/// Menu-side handle on the shared sampler.
#[derive(Clone, Copy)]
pub struct SharedEncoder {
    shared: &'static SharedSampler,
}

impl SharedEncoder {
    pub fn new(shared: &'static SharedSampler) -> Self {
        Self { shared }
    }
}

impl InputSource for SharedEncoder {
    fn poll_motion(&mut self) -> Motion {
        self.shared
            .lock(|sampler| sampler.borrow_mut().take_motion())
    }

    fn poll_button(&mut self) -> ButtonState {
        self.shared
            .lock(|sampler| sampler.borrow_mut().take_button())
    }
}
