//! Electrical side of the button: which level means "pressed" and which
//! pull resistor the input needs.

/// Logical level of the input while the button is pressed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ActiveLevel {
    /// Button connects the input to ground
    Low,
    /// Button connects the input to Vcc
    High,
}

/// Input mode of the button pin
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PullMode {
    PullUp,
    PullDown,
    /// No internal resistor, an external one holds the idle level
    Floating,
}

impl PullMode {
    /// Select the pull resistor which holds the input at the inactive level.
    pub const fn select(active: ActiveLevel, use_internal_pull: bool) -> Self {
        match (use_internal_pull, active) {
            (false, _) => PullMode::Floating,
            (true, ActiveLevel::Low) => PullMode::PullUp,
            (true, ActiveLevel::High) => PullMode::PullDown,
        }
    }
}

/// Pins whose pull resistor can be changed at runtime.
///
/// Implemented by the platform. Called once when the button is created with
/// [`crate::button::Button::with_pull`]. Platforms without a pull-down should
/// fall back to [`PullMode::Floating`] and rely on an external resistor.
pub trait SetPull {
    fn set_pull(&mut self, pull: PullMode);
}
