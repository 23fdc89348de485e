//! AL3050 Hardware Abstraction Layer
//!
//! This crate defines the hardware abstraction trait the Single Wire
//! protocol engine is written against. Chip-specific HALs (RP2040,
//! STM32, a Linux gpiochip wrapper, ...) implement it for the one
//! bidirectional pin the AL3050 is wired to, which lets the same driver
//! code run on any platform.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Host firmware / backlight framework    │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  al3050-driver (protocol engine)        │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  al3050-hal (this crate - traits)       │
//! └─────────────────────────────────────────┘
//! ```

#![no_std]
#![deny(unsafe_code)]

pub mod line;

// Re-export the key trait at crate root for convenience
pub use line::SingleWireLine;
