use super::ButtonState;
use crate::config::TimingConfig;
use crate::event::ButtonEvent;

/// Debounce and click classification of a single button.
///
/// Both edges are debounced independently: a press must outlast
/// `debounce_press_time` and a release must outlast `debounce_release_time`
/// before they count. A confirmed release does not report a click right away,
/// it opens the multi-click window instead, and the accumulated count is only
/// reported once the window lapses without a new press. Releasing after more
/// than `hold_time` reports a hold immediately, without debouncing the release.
/// A release that is pressed again when its debounce ends was a dropout: the
/// press continues and keeps its original start for the hold time.
///
/// The debouncer does no I/O, the caller passes the raw sample and the current
/// time to [`ClickDebouncer::step`].
#[derive(Clone, Debug)]
pub struct ClickDebouncer {
    state: ButtonState,
    /// Time when the current state was entered
    event_time: u32,
    /// Time when the current press was confirmed, the hold time counts from here
    press_time: u32,
    /// Number of clicks in the current sequence
    clicks: u16,
    timing: TimingConfig,
}

impl Default for ClickDebouncer {
    fn default() -> Self {
        Self::new(TimingConfig::default())
    }
}

impl ClickDebouncer {
    pub fn new(timing: TimingConfig) -> Self {
        Self {
            state: ButtonState::AwaitPress,
            event_time: 0,
            press_time: 0,
            clicks: 0,
            timing,
        }
    }

    pub fn state(&self) -> ButtonState {
        self.state
    }

    /// Clicks accumulated in the current sequence, always 0 in `AwaitPress`
    pub fn clicks(&self) -> u16 {
        self.clicks
    }

    pub fn timing(&self) -> &TimingConfig {
        &self.timing
    }

    pub fn timing_mut(&mut self) -> &mut TimingConfig {
        &mut self.timing
    }

    /// Drop any gesture in progress without reporting it.
    pub fn reset(&mut self) {
        self.state = ButtonState::AwaitPress;
        self.clicks = 0;
    }

    fn enter(&mut self, state: ButtonState, now: u32) {
        if state == ButtonState::AwaitPress {
            self.clicks = 0;
        }
        self.state = state;
        self.event_time = now;
    }

    /// Advance the state machine with the raw sample `pressed` taken at `now` (ms).
    ///
    /// Performs at most one transition and returns the completed gesture, if any.
    pub fn step(&mut self, pressed: bool, now: u32) -> ButtonEvent {
        let elapsed = now.wrapping_sub(self.event_time);

        match self.state {
            ButtonState::AwaitPress => {
                self.clicks = 0;
                if pressed {
                    self.enter(ButtonState::DebouncePress, now);
                }
            }
            ButtonState::DebouncePress => {
                if elapsed > self.timing.debounce_press_time() as u32 {
                    if pressed {
                        self.press_time = now;
                        self.enter(ButtonState::AwaitRelease, now);
                    } else if self.clicks == 0 {
                        // Released before the debounce time ran out, it was noise
                        self.enter(ButtonState::AwaitPress, now);
                    } else {
                        // Noise in the middle of a sequence keeps the clicks counted so far
                        self.enter(ButtonState::AwaitMultiPress, now);
                    }
                }
            }
            ButtonState::AwaitRelease => {
                if !pressed {
                    if now.wrapping_sub(self.press_time) > self.timing.hold_time() as u32 {
                        self.enter(ButtonState::AwaitPress, now);
                        return ButtonEvent::Hold;
                    }
                    self.enter(ButtonState::DebounceRelease, now);
                }
            }
            ButtonState::DebounceRelease => {
                if elapsed > self.timing.debounce_release_time() as u32 {
                    if pressed {
                        // Pressed again before the release settled, still the same press
                        self.enter(ButtonState::AwaitRelease, now);
                    } else {
                        self.clicks = self.clicks.saturating_add(1);
                        self.enter(ButtonState::AwaitMultiPress, now);
                    }
                }
            }
            ButtonState::AwaitMultiPress => {
                if pressed {
                    self.enter(ButtonState::DebouncePress, now);
                } else if elapsed > self.timing.multi_click_window() as u32 {
                    let clicks = self.clicks;
                    self.enter(ButtonState::AwaitPress, now);
                    return ButtonEvent::Clicks(clicks);
                }
            }
        }

        ButtonEvent::None
    }
}
