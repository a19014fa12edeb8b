use embassy_time::Instant;

/// Monotonic millisecond clock.
///
/// The value is allowed to wrap around at `u32::MAX`; elapsed times are
/// computed with wrapping arithmetic on the same width.
pub trait Clock {
    fn now_ms(&self) -> u32;
}

impl<T: Clock + ?Sized> Clock for &T {
    fn now_ms(&self) -> u32 {
        (**self).now_ms()
    }
}

/// Clock backed by the `embassy-time` driver.
///
/// Returns the low 32 bits of the driver's millisecond count.
#[derive(Clone, Copy, Debug, Default)]
pub struct EmbassyClock;

impl Clock for EmbassyClock {
    fn now_ms(&self) -> u32 {
        Instant::now().as_millis() as u32
    }
}
