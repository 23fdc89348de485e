//! Power state machine
//!
//! The chip loses its receiver calibration whenever the line is held
//! low for an extended period, so the session has to know whether the
//! next brightness command needs a fresh detection handshake first.
//! This module holds the pure decision half; `al3050-driver` executes
//! the resulting actions on the wire.

/// Session power states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PowerState {
    /// Line actively driven, chip calibrated and accepting frames.
    Active,
    /// Line parked low, chip considered uncalibrated.
    Suspended,
}

/// Host-requested power level, from the display framework's
/// power/blank notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PowerRequest {
    /// Display on; drive the backlight.
    Unblank,
    /// Display blanked.
    Blank,
    /// Display powered down.
    PowerDown,
}

/// What the session must do on the wire for a power event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PowerAction {
    /// Park the line low and zero the in-memory brightness.
    Suspend,
    /// Re-run the detection handshake, then restore the last
    /// successfully commanded brightness.
    Resume,
    /// Already active: re-send the current brightness.
    Refresh,
}

impl PowerState {
    /// Check if the chip is accepting frames in this state.
    pub fn is_active(self) -> bool {
        matches!(self, PowerState::Active)
    }

    /// Decide the wire action for a power/blank event.
    ///
    /// Anything other than an unblanked `Unblank` suspends the line.
    /// An unblanked `Unblank` resumes (with handshake) from
    /// `Suspended`, or refreshes the current level when already
    /// `Active`.
    pub fn plan(self, request: PowerRequest, blanked: bool) -> PowerAction {
        if request != PowerRequest::Unblank || blanked {
            return PowerAction::Suspend;
        }
        match self {
            PowerState::Suspended => PowerAction::Resume,
            PowerState::Active => PowerAction::Refresh,
        }
    }
}
