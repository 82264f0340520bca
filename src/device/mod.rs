//! Device state machine.
//!
//! ```text
//!   Locked ──passcode ok──▶ SettingTime ──long press──▶ Warming ──▶ Radiating
//!     ▲  │                      ▲                                      │
//!     └──┘ wrong                └────────────── 00:00 ─────────────────┘
//! ```
//!
//! The device is polled once per sampling interval with a fresh [`Sample`].
//! Each poll consumes at most one detent and one press, feeds them to the
//! active widget, then advances timers (notices, warm-up, countdown tick).
//! Transient messages hold the screen for the notice duration; input that
//! arrives meanwhile is discarded.


use crate::config::DeviceConfig;
use crate::input::{Input, PressClassifier, QuadratureDecoder, Sample};
use crate::relay::{Relay, RelayOutput};
use crate::time::{SecondTicker, TimeValue};
use crate::ui::{CharDisplay, Cursor, PasscodeEntry, Step, TimeEntry, Widget};

pub const MSG_ENTER_PASSCODE: &str = "Enter passcode";
pub const MSG_PASSCODE_CORRECT: &str = "Passcode correct";
pub const MSG_PASSCODE_WRONG: &str = "Passcode wrong";
pub const MSG_SET_TIME: &str = "Set time";
pub const MSG_TIME_SET: &str = "Time set!";
pub const MSG_TIME_REMAINING: &str = "Time remaining";
pub const MSG_DONE: &str = "Done!";

/// Line holding headers.
const HEADER_LINE: u8 = 0;
/// Line holding the value under edit / countdown / notices.
const VALUE_LINE: u8 = 1;

/// Lifecycle state, cycling SettingTime → Warming → Radiating.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DeviceState {
    /// Operator is configuring the countdown.
    #[default]
    SettingTime,
    /// Pre-run stage before the relay is energised.
    Warming,
    /// Relay on, counting down.
    Radiating,
}

impl DeviceState {
    /// The only state this one may move to.
    pub const fn next(self) -> Self {
        match self {
            DeviceState::SettingTime => DeviceState::Warming,
            DeviceState::Warming => DeviceState::Radiating,
            DeviceState::Radiating => DeviceState::SettingTime,
        }
    }
}

/// Passcode gate in front of the lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Gate {
    Locked,
    Unlocked,
}

/// What starts once a notice expires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Resume {
    Unlock,
    SetTime,
    Warm,
}

#[derive(Clone, Debug)]
enum Stage {
    Unlocking(PasscodeEntry),
    Notice { until_ms: u64, then: Resume },
    SettingTime(TimeEntry),
    Warming { ready_at_ms: u64 },
    Radiating,
}

/// The whole controller: input decoding, widgets, countdown and outputs.
pub struct Device<D, R> {
    config: DeviceConfig,
    display: D,
    relay: Relay<R>,
    decoder: QuadratureDecoder,
    button: PressClassifier,
    ticker: SecondTicker,
    gate: Gate,
    state: DeviceState,
    stage: Stage,
    /// Last committed time, offered again on the next SettingTime.
    seed: TimeValue,
    /// Countdown value while Warming/Radiating.
    remaining: TimeValue,
    now_ms: u64,
}

impl<D: CharDisplay, R: RelayOutput> Device<D, R> {
    /// Build the device, switch the relay off and show the passcode prompt.
    pub fn new(config: DeviceConfig, display: D, relay: R) -> Self {
        let mut device = Self {
            config,
            display,
            relay: Relay::new(relay),
            decoder: QuadratureDecoder::new(),
            button: PressClassifier::new(config.long_press_ms, config.debounce_ms),
            ticker: SecondTicker::new(config.tick_ms),
            gate: Gate::Locked,
            state: DeviceState::SettingTime,
            stage: Stage::Notice {
                until_ms: 0,
                then: Resume::Unlock,
            },
            seed: TimeValue::ZERO,
            remaining: TimeValue::ZERO,
            now_ms: 0,
        };
        device.enter_unlock();
        device
    }

    pub fn state(&self) -> DeviceState {
        self.state
    }

    pub fn gate(&self) -> Gate {
        self.gate
    }

    pub fn is_locked(&self) -> bool {
        self.gate == Gate::Locked
    }

    /// True while a transient message is on screen.
    pub fn is_showing_notice(&self) -> bool {
        matches!(self.stage, Stage::Notice { .. })
    }

    pub fn remaining(&self) -> TimeValue {
        self.remaining
    }

    pub fn seed(&self) -> TimeValue {
        self.seed
    }

    pub fn relay_active(&self) -> bool {
        self.relay.is_active()
    }

    pub fn relay(&self) -> &R {
        self.relay.output()
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    pub fn config(&self) -> &DeviceConfig {
        &self.config
    }

    pub fn into_parts(self) -> (D, R) {
        (self.display, self.relay.into_output())
    }

    /// Run one polling iteration.
    pub fn poll(&mut self, sample: Sample) {
        self.now_ms = sample.now_ms;

        let detent = self.decoder.sample(sample.position);
        let press = self.button.sample(sample.pressed, sample.now_ms);
        let tick = self.ticker.poll(sample.now_ms);

        if let Some(detent) = detent {
            self.dispatch(Input::Turn(detent));
        }
        if press.is_press() {
            self.dispatch(Input::Press(press));
        }

        self.advance(tick);
    }

    fn dispatch(&mut self, input: Input) {
        match &mut self.stage {
            Stage::Unlocking(entry) => {
                if let Step::Done(code) = entry.handle(input, &mut self.display) {
                    self.check_passcode(code);
                }
            }
            Stage::SettingTime(entry) => {
                if let Step::Done(value) = entry.handle(input, &mut self.display) {
                    self.commit_time(value);
                }
            }
            Stage::Notice { .. } | Stage::Warming { .. } | Stage::Radiating => {
                debug!("Input ignored: {}", input);
            }
        }
    }

    fn advance(&mut self, tick: bool) {
        match &self.stage {
            Stage::Notice { until_ms, then } if self.now_ms >= *until_ms => {
                let then = *then;
                self.resume(then);
            }
            Stage::Warming { ready_at_ms } if self.now_ms >= *ready_at_ms => {
                self.enter_radiating();
            }
            Stage::Radiating if tick => self.on_tick(),
            _ => {}
        }
    }

    fn resume(&mut self, then: Resume) {
        match then {
            Resume::Unlock => self.enter_unlock(),
            Resume::SetTime => self.enter_setting_time(),
            Resume::Warm => self.enter_warming(),
        }
    }

    fn set_state(&mut self, next: DeviceState) {
        if next == self.state {
            return;
        }
        debug_assert_eq!(next, self.state.next(), "lifecycle states must not be skipped");
        info!("State: {} -> {}", self.state, next);
        self.state = next;
    }

    fn show_notice(&mut self, text: &str, then: Resume) {
        self.display.hide_cursor();
        self.display.show_line(VALUE_LINE, text);
        self.stage = Stage::Notice {
            until_ms: self.now_ms.saturating_add(self.config.notice_ms),
            then,
        };
    }

    fn render_remaining(&mut self) {
        self.display.set_cursor(Cursor::line_start(VALUE_LINE));
        self.display.print(&self.remaining.as_text());
    }

    // Locked

    fn enter_unlock(&mut self) {
        self.gate = Gate::Locked;
        self.display.hide_cursor();
        self.display.show_line(HEADER_LINE, MSG_ENTER_PASSCODE);
        self.display.clear_line(VALUE_LINE);

        let mut entry = PasscodeEntry::new(
            Cursor::line_start(VALUE_LINE),
            self.config.passcode.length(),
        );
        self.decoder.resync();
        entry.begin(&mut self.display);
        self.stage = Stage::Unlocking(entry);
    }

    fn check_passcode(&mut self, code: u32) {
        if self.config.passcode.matches(code) {
            info!("Passcode accepted");
            self.gate = Gate::Unlocked;
            self.show_notice(MSG_PASSCODE_CORRECT, Resume::SetTime);
        } else {
            warn!("Passcode rejected");
            self.show_notice(MSG_PASSCODE_WRONG, Resume::Unlock);
        }
    }

    // SettingTime

    fn enter_setting_time(&mut self) {
        self.set_state(DeviceState::SettingTime);
        self.display.hide_cursor();
        self.display.show_line(HEADER_LINE, MSG_SET_TIME);
        self.display.show_line(VALUE_LINE, &self.seed.as_text());

        let mut entry = TimeEntry::new(
            Cursor::line_start(VALUE_LINE),
            self.config.field_offset,
            self.seed,
        );
        self.decoder.resync();
        entry.begin(&mut self.display);
        self.stage = Stage::SettingTime(entry);
    }

    fn commit_time(&mut self, value: TimeValue) {
        info!("Time set: {}s", value.total_seconds());
        self.seed = value;
        self.remaining = value;
        self.set_state(DeviceState::Warming);
        self.show_notice(MSG_TIME_SET, Resume::Warm);
    }

    // Warming

    fn enter_warming(&mut self) {
        self.display.show_line(HEADER_LINE, MSG_TIME_REMAINING);
        self.display.clear_line(VALUE_LINE);
        self.render_remaining();

        if self.config.warmup_ms == 0 {
            self.enter_radiating();
        } else {
            debug!("Warming up for {} ms", self.config.warmup_ms);
            self.stage = Stage::Warming {
                ready_at_ms: self.now_ms.saturating_add(self.config.warmup_ms),
            };
        }
    }

    // Radiating

    fn enter_radiating(&mut self) {
        self.set_state(DeviceState::Radiating);
        self.ticker.rearm(self.now_ms);
        self.stage = Stage::Radiating;

        if self.remaining.is_zero() {
            self.finish();
            return;
        }
        self.relay.turn_on();
        self.render_remaining();
    }

    fn on_tick(&mut self) {
        // Checked before decrementing so 00:00 is never decremented.
        if self.remaining.decrement() {
            self.render_remaining();
        }
        if self.remaining.is_zero() {
            self.finish();
        }
    }

    fn finish(&mut self) {
        self.relay.turn_off();
        info!("Countdown finished");
        self.set_state(DeviceState::SettingTime);
        self.show_notice(MSG_DONE, Resume::SetTime);
    }
}
