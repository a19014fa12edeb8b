#![allow(dead_code)]

pub mod test_macro;

use core::cell::Cell;
use core::convert::Infallible;

use embedded_hal::digital::{ErrorType, InputPin};
use log::debug;
use pushbutton::{ActiveLevel, Button, ButtonEvent, Clock, PullMode, SetPull, TimingConfig};

// Init logger for tests
#[ctor::ctor]
pub fn init_log() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Trace)
        .is_test(true)
        .try_init();
}

/// Manually advanced millisecond clock
#[derive(Debug, Default)]
pub struct TestClock {
    now: Cell<u32>,
}

impl TestClock {
    pub fn starting_at(ms: u32) -> Self {
        Self { now: Cell::new(ms) }
    }

    pub fn advance(&self, ms: u32) {
        self.now.set(self.now.get().wrapping_add(ms));
    }
}

impl Clock for TestClock {
    fn now_ms(&self) -> u32 {
        self.now.get()
    }
}

/// Input pin reading the electrical level from a shared cell
pub struct TestPin<'a> {
    high: &'a Cell<bool>,
    pull: &'a Cell<Option<PullMode>>,
}

impl ErrorType for TestPin<'_> {
    type Error = Infallible;
}

impl InputPin for TestPin<'_> {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.high.get())
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.high.get())
    }
}

impl SetPull for TestPin<'_> {
    fn set_pull(&mut self, pull: PullMode) {
        self.pull.set(Some(pull));
    }
}

#[derive(Debug, Clone)]
pub struct TestStep {
    pub pressed: bool,
    pub duration: u32, // How long the input stays at this level in milliseconds
}

/// The electrical side of a test button: pin level, pull resistor and clock
pub struct TestBench {
    pub active: ActiveLevel,
    pub high: Cell<bool>,
    pub pull: Cell<Option<PullMode>>,
    pub clock: TestClock,
    pub timing: TimingConfig,
    /// Time between two polls in milliseconds
    pub poll_interval: u32,
}

impl TestBench {
    pub fn new(active: ActiveLevel) -> Self {
        let bench = Self {
            active,
            high: Cell::new(false),
            pull: Cell::new(None),
            clock: TestClock::default(),
            timing: TimingConfig::default(),
            poll_interval: 1,
        };
        bench.set_pressed(false);
        bench
    }

    pub fn with_timing(mut self, timing: TimingConfig) -> Self {
        self.timing = timing;
        self
    }

    pub fn with_poll_interval(mut self, poll_interval: u32) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    pub fn with_clock(mut self, clock: TestClock) -> Self {
        self.clock = clock;
        self
    }

    pub fn pin(&self) -> TestPin<'_> {
        TestPin {
            high: &self.high,
            pull: &self.pull,
        }
    }

    pub fn button(&self, id: u8) -> Button<TestPin<'_>, &TestClock> {
        Button::new(id, self.pin(), self.active, &self.clock).with_timing(self.timing)
    }

    pub fn set_pressed(&self, pressed: bool) {
        let high = match self.active {
            ActiveLevel::Low => !pressed,
            ActiveLevel::High => pressed,
        };
        self.high.set(high);
    }

    /// Play the sequence one millisecond at a time, polling every `poll_interval` ms.
    ///
    /// Returns the reported events with the time at which they were reported.
    pub fn run(&self, button: &mut Button<TestPin<'_>, &TestClock>, sequence: &[TestStep]) -> Vec<(u32, ButtonEvent)> {
        let mut events = Vec::new();
        let mut elapsed = 0;
        for step in sequence {
            self.set_pressed(step.pressed);
            for _ in 0..step.duration {
                if elapsed % self.poll_interval == 0 {
                    let event = button.status();
                    if !event.is_none() {
                        debug!("{:?} at {}ms", event, self.clock.now_ms());
                        events.push((self.clock.now_ms(), event));
                    }
                }
                self.clock.advance(1);
                elapsed += 1;
            }
        }
        events
    }
}
