//! encoder-menu demo firmware for nRF52840.
//!
//! SSD1306 128×64 OLED on TWIM0 (SDA P0.26, SCL P0.27) and a clickable
//! rotary encoder on P0.11/P0.12 with the switch on P0.24. Shows a
//! settings menu, then a value sub-screen built from the same component,
//! forever.

#![no_std]
#![no_main]

use defmt::{info, unwrap, warn};
use embassy_executor::Spawner;
use embassy_nrf::gpio::{AnyPin, Pin};
use embassy_nrf::twim::{self, Twim};
use embassy_nrf::{bind_interrupts, peripherals};
use embassy_time::Timer;
use {defmt_rtt as _, panic_probe as _};

use encoder_menu::ui::display::{self, OledSurface};
use encoder_menu::ui::encoder::{sample_task, shared_sampler, SharedEncoder, SharedSampler};
use encoder_menu::{ButtonOutcome, EncoderMenu, Menu, MenuEntry};

bind_interrupts!(struct Irqs {
    TWISPI0 => twim::InterruptHandler<peripherals::TWISPI0>;
});

static ENCODER: SharedSampler = shared_sampler();

const SETTINGS: [MenuEntry<'static>; 9] = [
    MenuEntry::title("Settings"),
    MenuEntry::new("Brightness", 1),
    MenuEntry::new("Contrast", 2),
    MenuEntry::new("Sleep timer", 3),
    MenuEntry::new("Encoder dir", 4),
    MenuEntry::new("Click speed", 5),
    MenuEntry::new("Units", 6),
    MenuEntry::new("About", 7),
    MenuEntry::new("Factory reset", 8),
];

const LEVELS: [MenuEntry<'static>; 6] = [
    MenuEntry::title("Level"),
    MenuEntry::new("Off", 0),
    MenuEntry::new("Low", 25),
    MenuEntry::new("Medium", 50),
    MenuEntry::new("High", 75),
    MenuEntry::new("Max", 100),
];

#[embassy_executor::task]
async fn encoder_task(a: AnyPin, b: AnyPin, switch: AnyPin) -> ! {
    sample_task(a, b, switch, &ENCODER).await
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_nrf::init(Default::default());
    info!("encoder-menu starting");

    let i2c = Twim::new(p.TWISPI0, Irqs, p.P0_26, p.P0_27, twim::Config::default());
    let surface = OledSurface::new(display::init(i2c));

    unwrap!(spawner.spawn(encoder_task(
        p.P0_11.degrade(),
        p.P0_12.degrade(),
        p.P0_24.degrade(),
    )));

    let settings = unwrap!(Menu::new(&SETTINGS));
    let levels = unwrap!(Menu::new(&LEVELS));
    let mut menu = EncoderMenu::new(surface, SharedEncoder::new(&ENCODER));

    let mut active = 1;
    let mut level_index = 3;
    loop {
        let picked = match menu.show_async(&settings, active).await {
            Ok(picked) => picked,
            Err(e) => {
                warn!("Menu: {}", e);
                Timer::after_secs(1).await;
                continue;
            }
        };
        active = picked.index;

        // Hold backs out without opening the sub-menu.
        if picked.outcome == ButtonOutcome::Held {
            info!("Settings: held on {}", picked.value);
            continue;
        }

        match menu.show_async(&levels, level_index).await {
            Ok(level) if level.outcome != ButtonOutcome::Held => {
                level_index = level.index;
                info!("Settings: {} = {}%", picked.value, level.value);
            }
            Ok(_) => info!("Settings: {} unchanged", picked.value),
            Err(e) => warn!("Menu: {}", e),
        }
    }
}
