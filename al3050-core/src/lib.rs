//! Board-agnostic protocol logic for the AL3050 backlight controller
//!
//! This crate contains everything about the Single Wire protocol that
//! does not touch hardware:
//!
//! - Frame construction (address prefix, 5-bit brightness, RFA flag)
//! - The exact on-wire pulse schedule for a frame
//! - Protocol timing constants from the datasheet
//! - The power state machine (suspend / resume / refresh decisions)
//!
//! The `al3050-driver` crate replays the schedules produced here onto a
//! real GPIO line.

#![no_std]
#![deny(unsafe_code)]

pub mod frame;
pub mod power;
pub mod timing;

pub use frame::{Frame, Pulse};
pub use power::{PowerAction, PowerRequest, PowerState};
