pub mod click_debouncer;

pub use click_debouncer::ClickDebouncer;

/// Debounce state of a button
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonState {
    /// Idle, no activity
    AwaitPress,
    /// The input just went active, waiting out contact bounce before trusting the press
    DebouncePress,
    /// Press confirmed, waiting for the release or the hold time
    AwaitRelease,
    /// The input just went inactive, waiting out contact bounce before trusting the release
    DebounceRelease,
    /// At least one click registered, waiting for another press or the end of the multi-click window
    AwaitMultiPress,
}
