use embassy_time::Timer;
use embedded_hal::digital::InputPin;

use crate::clock::{Clock, EmbassyClock};
use crate::config::TimingConfig;
use crate::debounce::{ButtonState, ClickDebouncer};
use crate::event::ButtonEvent;
use crate::pin::{ActiveLevel, PullMode, SetPull};

/// Callback receiving the event only
pub type EventCallback = fn(ButtonEvent);
/// Callback receiving the button id and the event
pub type PinEventCallback = fn(u8, ButtonEvent);
/// Hook receiving the button id, the previous and the new state on every transition
pub type TransitionHook = fn(u8, ButtonState, ButtonState);

/// A debounced push button.
///
/// Poll [`Button::status`] regularly, about every
/// [`TimingConfig::check_interval`] ms. Every poll reads the pin once, advances
/// the debouncer and, when a gesture completes, notifies the registered
/// callbacks before returning the event.
///
/// A button must be polled from a single context. Wrap it in a mutex to share it.
pub struct Button<P: InputPin, C: Clock = EmbassyClock> {
    /// Identifier passed to the [`PinEventCallback`]
    id: u8,
    pin: P,
    clock: C,
    /// Pin active level
    active: ActiveLevel,
    /// Pull resistor selected at creation, `None` if the pin was configured by the caller
    pull: Option<PullMode>,
    debouncer: ClickDebouncer,
    on_event: Option<EventCallback>,
    on_pin_event: Option<PinEventCallback>,
    on_transition: Option<TransitionHook>,
}

impl<P: InputPin, C: Clock> Button<P, C> {
    /// Create a button from an already configured input pin.
    pub fn new(id: u8, pin: P, active: ActiveLevel, clock: C) -> Self {
        Self {
            id,
            pin,
            clock,
            active,
            pull: None,
            debouncer: ClickDebouncer::default(),
            on_event: None,
            on_pin_event: None,
            on_transition: None,
        }
    }

    /// Replace the timing configuration
    pub fn with_timing(mut self, timing: TimingConfig) -> Self {
        *self.debouncer.timing_mut() = timing;
        self
    }

    pub fn id(&self) -> u8 {
        self.id
    }

    pub fn active(&self) -> ActiveLevel {
        self.active
    }

    pub fn pull(&self) -> Option<PullMode> {
        self.pull
    }

    pub fn state(&self) -> ButtonState {
        self.debouncer.state()
    }

    pub fn clicks(&self) -> u16 {
        self.debouncer.clicks()
    }

    pub fn timing(&self) -> &TimingConfig {
        self.debouncer.timing()
    }

    /// Timing setters return the previous value, see [`TimingConfig`].
    pub fn timing_mut(&mut self) -> &mut TimingConfig {
        self.debouncer.timing_mut()
    }

    /// Register the single-argument callback, replacing the previous one.
    pub fn on_event(&mut self, callback: EventCallback) {
        self.on_event = Some(callback);
    }

    /// Register the `(id, event)` callback, replacing the previous one.
    pub fn on_pin_event(&mut self, callback: PinEventCallback) {
        self.on_pin_event = Some(callback);
    }

    /// Register a hook called on every state transition.
    pub fn on_transition(&mut self, hook: TransitionHook) {
        self.on_transition = Some(hook);
    }

    /// Raw, undebounced pin sample.
    ///
    /// Read errors are treated as "not pressed".
    pub fn is_pressed(&mut self) -> bool {
        let level = match self.active {
            ActiveLevel::Low => self.pin.is_low(),
            ActiveLevel::High => self.pin.is_high(),
        };
        match level {
            Ok(pressed) => pressed,
            Err(_) => {
                warn!("Failed to read button {}", self.id);
                false
            }
        }
    }

    /// Drop the gesture in progress without reporting it.
    pub fn reset(&mut self) {
        let previous = self.debouncer.state();
        self.debouncer.reset();
        self.notify_transition(previous);
    }

    /// Poll the button once.
    ///
    /// Returns [`ButtonEvent::None`] unless a gesture completed during this poll.
    /// Non-empty events are passed to the `(id, event)` callback first, then to
    /// the single-argument callback.
    pub fn status(&mut self) -> ButtonEvent {
        let pressed = self.is_pressed();
        let now = self.clock.now_ms();
        let previous = self.debouncer.state();

        let event = self.debouncer.step(pressed, now);
        self.notify_transition(previous);

        if !event.is_none() {
            debug!("Button {} event: {:?}", self.id, event);
            if let Some(callback) = self.on_pin_event {
                callback(self.id, event);
            }
            if let Some(callback) = self.on_event {
                callback(event);
            }
        }
        event
    }

    /// [`Button::status`] as `0`, the click count, or `-1` for a hold.
    pub fn status_code(&mut self) -> i32 {
        self.status().code()
    }

    /// Poll every `check_interval` ms until a gesture completes.
    pub async fn wait_for_event(&mut self) -> ButtonEvent {
        loop {
            let event = self.status();
            if !event.is_none() {
                return event;
            }
            Timer::after_millis(self.timing().check_interval() as u64).await;
        }
    }

    fn notify_transition(&self, previous: ButtonState) {
        let current = self.debouncer.state();
        if previous == current {
            return;
        }
        trace!("Button {} state: {:?} -> {:?}", self.id, previous, current);
        if let Some(hook) = self.on_transition {
            hook(self.id, previous, current);
        }
    }
}

impl<P: InputPin + SetPull, C: Clock> Button<P, C> {
    /// Create a button and configure the pin's pull resistor for `active`.
    ///
    /// With `use_internal_pull` the pin is pulled towards the inactive level,
    /// otherwise it is left floating and an external resistor is expected.
    pub fn with_pull(id: u8, mut pin: P, active: ActiveLevel, use_internal_pull: bool, clock: C) -> Self {
        let pull = PullMode::select(active, use_internal_pull);
        info!("Button {}: active {:?}, pull {:?}", id, active, pull);
        pin.set_pull(pull);
        let mut button = Self::new(id, pin, active, clock);
        button.pull = Some(pull);
        button
    }
}
