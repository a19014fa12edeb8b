//! Timing configuration of a button.
//!
//! All durations are in milliseconds. [`DISABLED`] (`0xFFFF`) is reserved as the
//! "disabled" marker and is never stored: every setter ignores it and hands the
//! current value back, so `let old = cfg.set_hold_time(x); ...; cfg.set_hold_time(old);`
//! always restores the previous setting.

/// Delay to debounce the make part of the signal.
pub const DEFAULT_DEBOUNCE_PRESS_TIME: u16 = 15;
/// Delay to debounce the break part of the signal.
pub const DEFAULT_DEBOUNCE_RELEASE_TIME: u16 = 30;
/// Window after a confirmed release in which another press continues the click sequence.
pub const DEFAULT_MULTI_CLICK_WINDOW: u16 = 400;
/// Minimum press duration reported as a hold.
pub const DEFAULT_HOLD_TIME: u16 = 2000;
/// Suggested time between two polls.
pub const DEFAULT_CHECK_INTERVAL: u16 = 50;

/// Sentinel rejected by all timing setters.
pub const DISABLED: u16 = u16::MAX;

/// Generates a getter and a sentinel-checked setter for each timing field.
macro_rules! timing_accessors {
    ($($(#[$doc:meta])* $field:ident, $setter:ident;)*) => {
        $(
            $(#[$doc])*
            pub fn $field(&self) -> u16 {
                self.$field
            }

            #[doc = concat!("Set `", stringify!($field), "`, returning the previous value.")]
            ///
            /// [`DISABLED`] is rejected and leaves the field unchanged.
            pub fn $setter(&mut self, ms: u16) -> u16 {
                let previous = self.$field;
                if ms == DISABLED {
                    warn!("Rejected {} = {}, keeping {}", stringify!($field), ms, previous);
                } else {
                    self.$field = ms;
                }
                previous
            }
        )*
    };
}

/// Configurations for debounce, multi-click and hold detection
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimingConfig {
    debounce_press_time: u16,
    debounce_release_time: u16,
    multi_click_window: u16,
    hold_time: u16,
    check_interval: u16,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            debounce_press_time: DEFAULT_DEBOUNCE_PRESS_TIME,
            debounce_release_time: DEFAULT_DEBOUNCE_RELEASE_TIME,
            multi_click_window: DEFAULT_MULTI_CLICK_WINDOW,
            hold_time: DEFAULT_HOLD_TIME,
            check_interval: DEFAULT_CHECK_INTERVAL,
        }
    }
}

impl TimingConfig {
    pub fn new() -> Self {
        Self::default()
    }

    timing_accessors! {
        /// Time the raw signal must stay active before a press is confirmed.
        debounce_press_time, set_debounce_press_time;
        /// Time the raw signal must stay inactive before a release is confirmed.
        debounce_release_time, set_debounce_release_time;
        /// Time after a confirmed release during which a new press extends the click sequence.
        /// A window of 0 reports every click on its own.
        multi_click_window, set_multi_click_window;
        /// Press duration after which releasing the button reports a hold instead of a click.
        hold_time, set_hold_time;
        /// Suggested time between polls. Only used by [`crate::button::Button::wait_for_event`].
        check_interval, set_check_interval;
    }
}
