//! AL3050 backlight session
//!
//! One [`Al3050Backlight`] per attached chip. It owns the bus plus the
//! persistent per-device state (requested brightness, last level
//! actually clocked out, power state) and decides when the detection
//! handshake has to run again.
//!
//! Single-caller discipline: the host invokes these operations
//! synchronously from its power/blank notifications, one at a time.
//! The struct is not shared and needs no locking under that contract.

use al3050_core::frame::{Frame, BRIGHTNESS_MASK, BRIGHTNESS_MAX};
use al3050_core::power::{PowerAction, PowerRequest, PowerState};
use al3050_hal::SingleWireLine;
use embedded_hal::delay::DelayNs;

use crate::bus::{SendOutcome, SingleWireBus};

/// Attachment-time configuration.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Al3050Config {
    /// Whether the chip variant acknowledges each frame (RFA).
    pub rfa_enabled: bool,
    /// Highest usable brightness level, at most 31.
    pub max_brightness: u8,
}

impl Default for Al3050Config {
    fn default() -> Self {
        Self {
            rfa_enabled: false,
            max_brightness: BRIGHTNESS_MAX,
        }
    }
}

/// Per-device backlight session.
pub struct Al3050Backlight<L, D> {
    bus: SingleWireBus<L, D>,
    config: Al3050Config,
    power: PowerState,
    /// Level currently requested by the host.
    brightness: u8,
    /// Last level actually clocked out; restored after a resume.
    last_brightness: u8,
}

impl<L, D> Al3050Backlight<L, D>
where
    L: SingleWireLine,
    D: DelayNs,
{
    /// Create a session over an already-acquired line.
    ///
    /// Starts `Active` at the maximum level, like the chip itself after
    /// power-up. Call [`initialize`](Self::initialize) once before the
    /// first frame.
    pub fn new(line: L, delay: D, config: Al3050Config) -> Self {
        let config = Al3050Config {
            max_brightness: config.max_brightness.min(BRIGHTNESS_MAX),
            ..config
        };
        Self {
            bus: SingleWireBus::new(line, delay),
            power: PowerState::Active,
            brightness: config.max_brightness,
            last_brightness: config.max_brightness,
            config,
        }
    }

    /// Attach-time init: run the detection handshake so the chip
    /// calibrates its receiver before the first frame.
    pub fn initialize(&mut self) {
        self.bus.handshake();
        self.power = PowerState::Active;
    }

    /// Command a brightness level (clamped to the configured maximum).
    ///
    /// Returns the previously requested level. While suspended only the
    /// request is recorded; the wire is untouched until the next
    /// resume.
    pub fn set_brightness(&mut self, level: u8) -> u8 {
        let previous = self.brightness;
        self.brightness = level.min(self.config.max_brightness) & BRIGHTNESS_MASK;
        if self.power.is_active() {
            self.send_current();
        }
        previous
    }

    /// Handle a display power/blank event.
    ///
    /// Anything other than an unblanked [`PowerRequest::Unblank`] parks
    /// the line low and zeroes the in-memory brightness (the last
    /// commanded level is kept for the resume). Unblanking from
    /// suspend re-runs the handshake and restores that level;
    /// unblanking while already active re-sends the current one.
    pub fn update_power_state(&mut self, request: PowerRequest, blanked: bool) {
        match self.power.plan(request, blanked) {
            PowerAction::Suspend => {
                self.bus.park_low();
                self.brightness = 0;
                self.power = PowerState::Suspended;
            }
            PowerAction::Resume => {
                self.bus.handshake();
                self.power = PowerState::Active;
                self.brightness = self.last_brightness;
                self.send_current();
            }
            PowerAction::Refresh => self.send_current(),
        }
    }

    /// Level currently requested by the host (0 while suspended).
    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    /// Last level actually clocked out to the chip.
    pub fn last_brightness(&self) -> u8 {
        self.last_brightness
    }

    /// Current power state.
    pub fn power(&self) -> PowerState {
        self.power
    }

    /// Tear down the session, returning the hardware.
    pub fn release(self) -> (L, D) {
        self.bus.free()
    }

    /// Transmit the current level.
    ///
    /// On an acknowledge timeout the chip is assumed to have lost its
    /// calibration: re-run the handshake once and leave the frame
    /// unsent for this cycle - the next brightness-affecting event
    /// re-drives it. No retry loop.
    fn send_current(&mut self) {
        let frame = Frame::new(self.brightness, self.config.rfa_enabled);
        if self.bus.send_frame(frame) == SendOutcome::AckTimeout {
            self.bus.handshake();
        }
        self.last_brightness = self.brightness;
    }
}
