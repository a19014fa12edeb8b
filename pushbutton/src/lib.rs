//! Debounced push-button driver.
//!
//! A [`Button`] samples one input pin on every poll and classifies what the
//! user did with it: nothing, `n` quick clicks in a row, or a long hold.
//! Polling is cooperative, [`Button::status`] never blocks.
//!
//! ```ignore
//! let mut button = Button::new(5, pin, ActiveLevel::Low, EmbassyClock);
//! button.timing_mut().set_multi_click_window(300);
//! loop {
//!     match button.status() {
//!         ButtonEvent::Clicks(n) => info!("{} clicks", n),
//!         ButtonEvent::Hold => info!("hold"),
//!         ButtonEvent::None => {}
//!     }
//!     Timer::after_millis(button.timing().check_interval() as u64).await;
//! }
//! ```
//!
//! ## Feature flags
#![doc = document_features::document_features!()]
#![cfg_attr(not(test), no_std)]

// This mod MUST go first, so that the others see its macros.
pub(crate) mod fmt;

pub mod button;
pub mod clock;
pub mod config;
pub mod debounce;
pub mod event;
pub mod pin;

pub use button::Button;
pub use clock::{Clock, EmbassyClock};
pub use config::TimingConfig;
pub use debounce::{ButtonState, ClickDebouncer};
pub use event::ButtonEvent;
pub use pin::{ActiveLevel, PullMode, SetPull};
