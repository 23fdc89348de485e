//! Single Wire protocol engine for the AL3050 backlight controller
//!
//! This crate drives the chip over one bidirectional GPIO line
//! (abstracted by [`al3050_hal::SingleWireLine`]):
//!
//! - [`bus::SingleWireBus`] - the wire level: detection handshake,
//!   frame transmission, acknowledge (RFA) polling
//! - [`backlight::Al3050Backlight`] - the per-device session: brightness
//!   bookkeeping and the suspend/resume power state machine
//!
//! All operations block the calling thread; the sub-millisecond pulse
//! trains run inside a critical section so preemption cannot distort
//! the pulse widths the chip calibrated itself against.

#![no_std]
#![deny(unsafe_code)]

pub mod backlight;
pub mod bus;

#[cfg(test)]
mod mock;

pub use backlight::{Al3050Backlight, Al3050Config};
pub use bus::{SendOutcome, SingleWireBus};
