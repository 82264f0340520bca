//! Integration tests for uvbox host-testable logic.
//!
//! These drive a [`Device`] end to end through the same capability traits
//! the firmware implements, with a software encoder feeding raw pin levels.

use std::cell::Cell;

use uvbox::input::{ButtonSource, Clock, PositionCounter, PositionSource};
use uvbox::relay::RelayOutput;
use uvbox::ui::TextGrid;
use uvbox::{Device, DeviceConfig, DeviceState, Gate, Sample, TimeValue};

/// Quadrature levels for one forward click, starting from (0, 0).
const CLICK_UP: [(bool, bool); 4] = [(false, true), (true, true), (true, false), (false, false)];
/// One reverse click.
const CLICK_DOWN: [(bool, bool); 4] = [(true, false), (true, true), (false, true), (false, false)];

/// Millisecond clock advanced by the test.
#[derive(Default)]
struct Ticks(Cell<u64>);

impl Clock for Ticks {
    fn now_ms(&self) -> u64 {
        self.0.get()
    }
}

/// Encoder whose pins are toggled by the test.
#[derive(Default)]
struct Knob(PositionCounter);

impl PositionSource for Knob {
    fn read_position(&mut self) -> i32 {
        self.0.position()
    }
}

#[derive(Default)]
struct Key(bool);

impl ButtonSource for Key {
    fn is_pressed(&mut self) -> bool {
        self.0
    }
}

#[derive(Default)]
struct Lamp {
    on: bool,
    switches: u32,
}

impl RelayOutput for Lamp {
    fn set_output(&mut self, on: bool) {
        if on != self.on {
            self.switches += 1;
        }
        self.on = on;
    }
}

struct Bench {
    clock: Ticks,
    knob: Knob,
    key: Key,
    device: Device<TextGrid, Lamp>,
}

impl Bench {
    fn new(config: DeviceConfig) -> Self {
        Self {
            clock: Ticks::default(),
            knob: Knob::default(),
            key: Key::default(),
            device: Device::new(config, TextGrid::new(), Lamp::default()),
        }
    }

    fn step(&mut self) {
        self.clock.0.set(self.clock.0.get() + 1);
        let sample = Sample::read(&self.clock, &mut self.knob, &mut self.key);
        self.device.poll(sample);
    }

    fn idle(&mut self, ms: u64) {
        for _ in 0..ms {
            self.step();
        }
    }

    fn rotate(&mut self, clicks: i32) {
        let levels = if clicks >= 0 { CLICK_UP } else { CLICK_DOWN };
        for _ in 0..clicks.unsigned_abs() {
            self.step();
            for (a, b) in levels {
                self.knob.0.update(a, b);
                self.step();
            }
        }
    }

    fn press(&mut self, hold_ms: u64) {
        self.key.0 = true;
        self.idle(hold_ms);
        self.key.0 = false;
        self.idle(60);
    }

    fn short(&mut self) {
        self.press(200);
    }

    fn long(&mut self) {
        self.press(2100);
    }

    fn screen(&self, line: u8) -> &str {
        self.device.display().line(line).trim_end()
    }
}

#[test]
fn sample_reads_every_source() {
    let clock = Ticks(Cell::new(42));
    let mut knob = Knob::default();
    for (a, b) in CLICK_UP {
        knob.0.update(a, b);
    }
    let sample = Sample::read(&clock, &mut knob, &mut Key(true));
    assert_eq!(
        sample,
        Sample {
            now_ms: 42,
            position: 4,
            pressed: true
        }
    );
}

#[test]
fn full_session_with_debounced_button() {
    let mut bench = Bench::new(DeviceConfig::default());
    assert_eq!(bench.screen(0), "Enter passcode");

    // Wrong code first.
    for digit in [1, 2, 3] {
        bench.rotate(digit);
        bench.short();
    }
    assert_eq!(bench.screen(1), "Passcode wrong");
    bench.idle(1000);
    assert_eq!(bench.device.gate(), Gate::Locked);

    for digit in [4, 5, 1] {
        bench.rotate(digit);
        bench.short();
    }
    assert_eq!(bench.screen(1), "Passcode correct");
    bench.idle(1000);
    assert_eq!(bench.screen(0), "Set time");

    // 00:03 via seconds dialled downward from 0.
    bench.short();
    bench.rotate(-57);
    assert_eq!(bench.screen(1), "00:03");
    bench.long();
    assert_eq!(bench.device.state(), DeviceState::Warming);

    bench.idle(1000);
    assert_eq!(bench.device.state(), DeviceState::Radiating);
    assert!(bench.device.relay().on);

    bench.idle(3000);
    assert_eq!(bench.device.state(), DeviceState::SettingTime);
    assert!(!bench.device.relay().on);
    assert_eq!(bench.device.relay().switches, 2);
    assert_eq!(bench.screen(1), "Done!");

    bench.idle(1000);
    assert_eq!(bench.screen(0), "Set time");
    assert_eq!(bench.screen(1), "00:03");
    assert_eq!(bench.device.seed(), TimeValue::new(0, 3).unwrap());
}

#[test]
fn relay_stays_off_while_locked() {
    let mut bench = Bench::new(DeviceConfig::default());
    bench.rotate(7);
    bench.long();
    bench.rotate(-3);
    bench.short();
    bench.long();
    bench.idle(5000);
    assert!(bench.device.is_locked());
    assert_eq!(bench.device.relay().switches, 0);
}
