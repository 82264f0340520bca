//! uvbox firmware entry point (nRF52840).
//!
//! Build: `cargo run --release --features embedded --target thumbv7em-none-eabihf`
//!
//! One task tracks the encoder channels; the main task polls the device
//! once per millisecond and refreshes the OLED when the screen changed.

#![no_std]
#![no_main]

use defmt::{info, warn};
use embassy_executor::Spawner;
use embassy_nrf::gpio::{Input, Level, Output, OutputDrive, Pull};
use embassy_nrf::twim::{self, Twim};
use embassy_nrf::{bind_interrupts, peripherals};
use embassy_time::{Duration, Ticker};
use {defmt_rtt as _, panic_probe as _};

use uvbox::board::{encoder_task, ButtonPin, Oled, RelayPin, SharedEncoder, SystemClock};
use uvbox::config::{DISPLAY_REFRESH_MS, POLL_INTERVAL_MS};
use uvbox::{Device, DeviceConfig, Sample};

bind_interrupts!(struct Irqs {
    TWISPI0 => twim::InterruptHandler<peripherals::TWISPI0>;
});

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_nrf::init(Default::default());
    info!("uvbox starting");

    // Relay first so the load is off as early as possible.
    let relay = RelayPin::new(Output::new(p.P0_13, Level::Low, OutputDrive::Standard));

    let i2c = Twim::new(p.TWISPI0, Irqs, p.P0_26, p.P0_27, twim::Config::default());
    let oled = Oled::new(i2c);

    let encoder_a = Input::new(p.P0_03, Pull::Up);
    let encoder_b = Input::new(p.P0_04, Pull::Up);
    if spawner.spawn(encoder_task(encoder_a, encoder_b)).is_err() {
        warn!("Encoder task failed to start");
    }

    let mut button = ButtonPin::new(Input::new(p.P0_28, Pull::Up));
    let mut encoder = SharedEncoder;
    let clock = SystemClock;

    let config = DeviceConfig::default();
    info!("Config: {}", config);
    let mut device = Device::new(config, oled, relay);

    let mut ticker = Ticker::every(Duration::from_millis(POLL_INTERVAL_MS));
    let mut last_flush_ms = 0u64;

    loop {
        let sample = Sample::read(&clock, &mut encoder, &mut button);
        device.poll(sample);

        if device.display().is_dirty()
            && sample.now_ms.saturating_sub(last_flush_ms) >= DISPLAY_REFRESH_MS
        {
            last_flush_ms = sample.now_ms;
            if let Err(e) = device.display_mut().flush() {
                warn!("Display: {}", e);
            }
        }

        ticker.next().await;
    }
}
