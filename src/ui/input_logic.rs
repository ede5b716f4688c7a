//! Pure encoder decoding, sampled from raw pin levels.
//!
//! Kept free of HAL types so it runs in host tests. The firmware feeds it
//! from a periodic GPIO sampling task (see `ui::encoder`).

use crate::config::{
    BUTTON_DEBOUNCE_MS, BUTTON_DOUBLE_CLICK_MS, BUTTON_HOLD_MS, ENCODER_STEPS_PER_DETENT,
};
use crate::ui::{ButtonState, InputSource, Motion};

/// Quadrature step for `(previous << 2) | current` Gray-code pairs.
/// Clockwise is 00 → 01 → 11 → 10; invalid jumps count as zero.
const TRANSITIONS: [i8; 16] = [0, 1, -1, 0, -1, 0, 0, 1, 1, 0, 0, -1, 0, -1, 1, 0];

/// Turns A/B channel samples into detent steps.
#[derive(Clone, Copy, Debug)]
pub struct QuadratureDecoder {
    state: u8,
    accumulator: i8,
    steps_per_detent: i8,
}

impl QuadratureDecoder {
    pub const fn new(steps_per_detent: u8) -> Self {
        let steps = if steps_per_detent == 0 {
            1
        } else if steps_per_detent > 16 {
            16
        } else {
            steps_per_detent as i8
        };
        Self {
            state: 0,
            accumulator: 0,
            steps_per_detent: steps,
        }
    }

    /// Latch the resting pin levels without producing a step.
    pub fn prime(&mut self, a: bool, b: bool) {
        self.state = Self::encode(a, b);
        self.accumulator = 0;
    }

    /// Feed one sample. Returns a step once a full detent has been turned.
    pub fn update(&mut self, a: bool, b: bool) -> Motion {
        let current = Self::encode(a, b);
        let index = ((self.state << 2) | current) as usize;
        self.state = current;
        self.accumulator += TRANSITIONS[index];

        if self.accumulator >= self.steps_per_detent {
            self.accumulator = 0;
            Motion::Right
        } else if self.accumulator <= -self.steps_per_detent {
            self.accumulator = 0;
            Motion::Left
        } else {
            Motion::None
        }
    }

    fn encode(a: bool, b: bool) -> u8 {
        ((a as u8) << 1) | b as u8
    }
}

/// Press durations that separate clicks, double-clicks and holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ButtonTiming {
    pub debounce_ms: u64,
    pub double_click_ms: u64,
    pub hold_ms: u64,
}

impl ButtonTiming {
    pub const fn new() -> Self {
        Self {
            debounce_ms: BUTTON_DEBOUNCE_MS,
            double_click_ms: BUTTON_DOUBLE_CLICK_MS,
            hold_ms: BUTTON_HOLD_MS,
        }
    }
}

impl Default for ButtonTiming {
    fn default() -> Self {
        Self::new()
    }
}

/// Classifies a push-button from level samples and timestamps.
///
/// A short press is reported as `Clicked` only after the double-click
/// window has expired without a second press. `Held` stays latched until
/// the button is let go, which yields a single `Released`.
#[derive(Clone, Copy, Debug)]
pub struct ButtonDecoder {
    timing: ButtonTiming,
    pressed_since: Option<u64>,
    click_deadline: Option<u64>,
    held: bool,
    pending: ButtonState,
}

impl ButtonDecoder {
    pub const fn new(timing: ButtonTiming) -> Self {
        Self {
            timing,
            pressed_since: None,
            click_deadline: None,
            held: false,
            pending: ButtonState::Idle,
        }
    }

    /// Feed one sample of the (debounced or raw) button level.
    pub fn update(&mut self, pressed: bool, now_ms: u64) {
        if let Some(deadline) = self.click_deadline {
            if now_ms >= deadline {
                self.click_deadline = None;
                self.pending = ButtonState::Clicked;
            }
        }

        if pressed {
            let since = *self.pressed_since.get_or_insert(now_ms);
            if !self.held && now_ms.saturating_sub(since) >= self.timing.hold_ms {
                self.held = true;
                self.click_deadline = None;
                self.pending = ButtonState::Held;
            }
        } else if let Some(since) = self.pressed_since.take() {
            if self.held {
                self.held = false;
                self.pending = ButtonState::Released;
            } else if now_ms.saturating_sub(since) >= self.timing.debounce_ms {
                if self.click_deadline.take().is_some() {
                    self.pending = ButtonState::DoubleClicked;
                } else {
                    self.click_deadline = Some(now_ms + self.timing.double_click_ms);
                }
            }
        }
    }

    /// Read and consume the current state. `Held` is not consumed.
    pub fn take(&mut self) -> ButtonState {
        let state = self.pending;
        if state != ButtonState::Held {
            self.pending = ButtonState::Idle;
        }
        state
    }
}

/// Encoder plus switch, sampled together and drained by the menu.
///
/// Steps are counted between polls so a slow repaint does not lose them;
/// each [`take_motion`](Self::take_motion) hands out one.
#[derive(Clone, Copy, Debug)]
pub struct EncoderSampler {
    quadrature: QuadratureDecoder,
    button: ButtonDecoder,
    pending_steps: i16,
}

impl EncoderSampler {
    pub const fn new() -> Self {
        Self::with_timing(ENCODER_STEPS_PER_DETENT, ButtonTiming::new())
    }

    pub const fn with_timing(steps_per_detent: u8, timing: ButtonTiming) -> Self {
        Self {
            quadrature: QuadratureDecoder::new(steps_per_detent),
            button: ButtonDecoder::new(timing),
            pending_steps: 0,
        }
    }

    pub fn prime(&mut self, a: bool, b: bool) {
        self.quadrature.prime(a, b);
        self.pending_steps = 0;
    }

    /// Feed one sample of all three pins.
    pub fn sample(&mut self, a: bool, b: bool, pressed: bool, now_ms: u64) {
        match self.quadrature.update(a, b) {
            Motion::Right => self.pending_steps = self.pending_steps.saturating_add(1),
            Motion::Left => self.pending_steps = self.pending_steps.saturating_sub(1),
            Motion::None => {}
        }
        self.button.update(pressed, now_ms);
    }

    pub fn take_motion(&mut self) -> Motion {
        if self.pending_steps > 0 {
            self.pending_steps -= 1;
            Motion::Right
        } else if self.pending_steps < 0 {
            self.pending_steps += 1;
            Motion::Left
        } else {
            Motion::None
        }
    }

    pub fn take_button(&mut self) -> ButtonState {
        self.button.take()
    }
}

impl Default for EncoderSampler {
    fn default() -> Self {
        Self::new()
    }
}

impl InputSource for EncoderSampler {
    fn poll_motion(&mut self) -> Motion {
        self.take_motion()
    }

    fn poll_button(&mut self) -> ButtonState {
        self.take_button()
    }
}
