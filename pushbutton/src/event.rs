/// Outcome of a single poll.
///
/// Each completed gesture is reported exactly once: either as the number of
/// quick clicks in the sequence or as a hold.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonEvent {
    /// No gesture completed during this poll
    #[default]
    None,
    /// `n` consecutive quick clicks, `n >= 1`
    Clicks(u16),
    /// The button was held down longer than the hold time
    Hold,
}

impl ButtonEvent {
    /// Integer form of the event: `0`, the click count, or `-1` for a hold.
    pub const fn code(self) -> i32 {
        match self {
            ButtonEvent::None => 0,
            ButtonEvent::Clicks(n) => n as i32,
            ButtonEvent::Hold => -1,
        }
    }

    pub const fn is_none(self) -> bool {
        matches!(self, ButtonEvent::None)
    }

    /// Number of clicks, if this is a click event
    pub const fn clicks(self) -> Option<u16> {
        match self {
            ButtonEvent::Clicks(n) => Some(n),
            _ => None,
        }
    }
}

impl From<ButtonEvent> for i32 {
    fn from(event: ButtonEvent) -> Self {
        event.code()
    }
}
