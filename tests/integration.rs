//! Integration tests for encoder-menu host-testable logic.
//!
//! Drives whole sessions end to end: pin-level encoder samples through the
//! decoder into the menu, and the menu through the embedded-graphics cell
//! adapter onto a mock pixel display.

use embedded_graphics::mock_display::MockDisplay;
use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use heapless::Deque;

use encoder_menu::ui::display::CellDisplay;
use encoder_menu::ui::input_logic::EncoderSampler;
use encoder_menu::{
    ButtonOutcome, ButtonState, DisplaySurface, EncoderMenu, InputSource, Menu, MenuEntry, Motion,
};

const FRUIT: [MenuEntry<'static>; 8] = [
    MenuEntry::title("Fruit"),
    MenuEntry::new("Apple", 1),
    MenuEntry::new("Banana", 2),
    MenuEntry::new("Cherry", 3),
    MenuEntry::new("Damson", 4),
    MenuEntry::new("Elder", 5),
    MenuEntry::new("Fig", 6),
    MenuEntry::new("Grape", 7),
];

/// Pin levels `(a, b, pressed)` held for a number of 1 ms samples.
type Segment = ((bool, bool, bool), u32);

/// Plays pin segments into an [`EncoderSampler`], one sample per poll,
/// then idles with the switch released.
struct PinPlayback {
    sampler: EncoderSampler,
    script: Deque<Segment, 32>,
    now_ms: u64,
}

impl PinPlayback {
    fn new(segments: &[Segment]) -> Self {
        let mut script = Deque::new();
        for &segment in segments {
            script.push_back(segment).unwrap();
        }
        Self {
            sampler: EncoderSampler::new(),
            script,
            now_ms: 0,
        }
    }

    fn tick(&mut self) {
        let levels = match self.script.front_mut() {
            Some((levels, remaining)) => {
                let levels = *levels;
                *remaining -= 1;
                if *remaining == 0 {
                    self.script.pop_front();
                }
                levels
            }
            None => (false, false, false),
        };
        self.now_ms += 1;
        self.sampler.sample(levels.0, levels.1, levels.2, self.now_ms);
        assert!(self.now_ms < 60_000, "session never ended");
    }
}

impl InputSource for PinPlayback {
    fn poll_motion(&mut self) -> Motion {
        self.tick();
        self.sampler.poll_motion()
    }

    fn poll_button(&mut self) -> ButtonState {
        self.tick();
        self.sampler.poll_button()
    }
}

/// One clockwise detent, starting and ending at rest (00).
const CW: [Segment; 4] = [
    ((false, true, false), 2),
    ((true, true, false), 2),
    ((true, false, false), 2),
    ((false, false, false), 2),
];

/// One counter-clockwise detent.
const CCW: [Segment; 4] = [
    ((true, false, false), 2),
    ((true, true, false), 2),
    ((false, true, false), 2),
    ((false, false, false), 2),
];

fn mock() -> CellDisplay<'static, MockDisplay<BinaryColor>> {
    let mut display = MockDisplay::new();
    display.set_allow_overdraw(true);
    CellDisplay::new(display, &FONT_6X10)
}

#[test]
fn two_detents_and_a_click_pick_the_third_entry() {
    let mut segments: Vec<Segment> = Vec::new();
    segments.extend_from_slice(&CW);
    segments.extend_from_slice(&CW);
    segments.push(((false, false, true), 80));

    let menu = Menu::new(&FRUIT).unwrap();
    let mut encoder_menu = EncoderMenu::new(mock(), PinPlayback::new(&segments));
    let selection = encoder_menu.show(&menu, 1).unwrap();

    assert_eq!(selection.index, 3);
    assert_eq!(selection.value, 3);
    assert_eq!(selection.outcome, ButtonOutcome::Clicked);
    assert_eq!(encoder_menu.last_button(), Some(ButtonOutcome::Clicked));
}

#[test]
fn turning_back_past_the_top_stays_on_first() {
    let mut segments: Vec<Segment> = Vec::new();
    for _ in 0..3 {
        segments.extend_from_slice(&CCW);
    }
    segments.push(((false, false, true), 80));
    segments.push(((false, false, false), 100));
    segments.push(((false, false, true), 80));

    let menu = Menu::new(&FRUIT).unwrap();
    let selection = EncoderMenu::new(mock(), PinPlayback::new(&segments))
        .show(&menu, 2)
        .unwrap();

    assert_eq!(selection.index, 1);
    assert_eq!(selection.outcome, ButtonOutcome::DoubleClicked);
}

#[test]
fn long_press_ends_with_held_after_release() {
    let mut segments: Vec<Segment> = Vec::new();
    segments.extend_from_slice(&CW);
    segments.push(((false, false, true), 2000));

    let menu = Menu::new(&FRUIT).unwrap();
    let selection = EncoderMenu::new(mock(), PinPlayback::new(&segments))
        .show(&menu, 6)
        .unwrap();

    assert_eq!(selection.index, 7);
    assert_eq!(selection.value, 7);
    assert_eq!(selection.outcome, ButtonOutcome::Held);
}

#[test]
fn pixels_show_header_and_marker() {
    let segments = [((false, false, true), 80)];
    let menu = Menu::new(&FRUIT).unwrap();
    let mut encoder_menu = EncoderMenu::new(mock(), PinPlayback::new(&segments));
    encoder_menu.show(&menu, 2).unwrap();

    let cells = encoder_menu.surface();
    assert_eq!((cells.columns(), cells.rows()), (10, 6));

    let display = cells.target();
    // Inverted header row.
    assert_eq!(display.get_pixel(Point::new(0, 0)), Some(BinaryColor::On));
    assert_eq!(display.get_pixel(Point::new(59, 9)), Some(BinaryColor::On));
    // Marker cell of the selected row (Banana, row 2) is inverted.
    assert_eq!(display.get_pixel(Point::new(5, 20)), Some(BinaryColor::On));
    // Leading cell of an unselected row keeps the dark background.
    assert_eq!(display.get_pixel(Point::new(5, 10)), Some(BinaryColor::Off));
}

#[test]
fn sentinel_table_runs_like_explicit_one() {
    let table = [
        MenuEntry::title("Yes/No"),
        MenuEntry::new("Yes", 1),
        MenuEntry::new("No", 0),
        MenuEntry::end(),
    ];
    let mut segments: Vec<Segment> = Vec::new();
    for _ in 0..4 {
        segments.extend_from_slice(&CW);
    }
    segments.push(((false, false, true), 80));

    let menu = Menu::from_terminated(&table).unwrap();
    let selection = EncoderMenu::new(mock(), PinPlayback::new(&segments))
        .show(&menu, 1)
        .unwrap();

    assert_eq!(menu.count(), 2);
    assert_eq!(selection.index, 2);
    assert_eq!(selection.value, 0);
}
