//! Board-agnostic core logic for the remontoire watch firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - The retained counters and their update rule
//! - Time-of-day derivation and `HH:MI` formatting
//! - Wake cause reporting and EXT1 trigger decoding
//! - The watch-face abstraction trait

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod clock;
pub mod counter;
pub mod traits;
pub mod wake;

pub use clock::TimeOfDay;
pub use counter::WatchState;
pub use traits::face::{FaceFrame, WatchFace};
pub use wake::{Trigger, TriggerMap, WakeCause, WakeStatusError};
