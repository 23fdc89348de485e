//! Single Wire frame construction
//!
//! A brightness command is one 16-bit frame: the fixed 8-bit device
//! address in the high byte, the 5-bit brightness level in the low
//! byte, plus the RFA flag bit when the chip variant acknowledges
//! transfers. No other frame shapes exist for this chip family.
//!
//! [`Frame::pulses`] turns a frame into the exact sequence of timed
//! line levels the chip expects, so the transmit path is a plain replay
//! loop and the encoding itself stays host-testable.

use heapless::Vec;

use crate::timing::{T_BIT_NS, T_EOS_NS, T_LOGIC_0_NS, T_LOGIC_1_NS, T_START_NS};

/// Fixed device address, occupying the frame's high byte.
pub const ADDRESS: u16 = 0x5800;
/// Maximum brightness level supported by the chip family.
pub const BRIGHTNESS_MAX: u8 = 31;
/// Brightness occupies the low 5 bits of the data byte.
pub const BRIGHTNESS_MASK: u8 = 0x1F;
/// Request-for-acknowledge flag bit in the data byte.
pub const RFA_FLAG: u16 = 0x0080;

/// Number of timed line-level segments in one frame:
/// start + 16 bit cells of 2 + inter-byte gap of 2 + end-of-stream.
pub const PULSES_PER_FRAME: usize = 36;

/// One timed line-level segment of the on-wire schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Pulse {
    /// Level to drive the line to.
    pub high: bool,
    /// How long to hold it, in nanoseconds.
    pub ns: u32,
}

/// One 16-bit address+data frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Frame(u16);

impl Frame {
    /// Build a brightness frame.
    ///
    /// `brightness` is masked to 5 bits; callers wanting clamp-to-max
    /// semantics clamp before constructing. `rfa` sets the flag bit
    /// asking the chip to acknowledge the transfer.
    pub fn new(brightness: u8, rfa: bool) -> Self {
        let mut word = ADDRESS | u16::from(brightness & BRIGHTNESS_MASK);
        if rfa {
            word |= RFA_FLAG;
        }
        Self(word)
    }

    /// The raw 16-bit wire word.
    pub fn word(self) -> u16 {
        self.0
    }

    /// Brightness level carried by this frame.
    pub fn brightness(self) -> u8 {
        (self.0 as u8) & BRIGHTNESS_MASK
    }

    /// Whether this frame requests an acknowledge.
    pub fn rfa(self) -> bool {
        self.0 & RFA_FLAG != 0
    }

    /// The complete on-wire schedule for this frame.
    ///
    /// Layout, in order:
    /// - start: high for `T_START_NS`
    /// - 16 bit cells, most significant bit first: low for
    ///   `T_LOGIC_1_NS` (bit 1) or `T_LOGIC_0_NS` (bit 0), then high
    ///   for the remainder of the fixed `T_BIT_NS` cell
    /// - after the 8th cell (the address/data boundary, and only
    ///   there): low for `T_EOS_NS`, then high for `T_START_NS`
    /// - end of stream: low for `T_EOS_NS`
    ///
    /// The schedule ends with the line low; the transmitter decides
    /// whether to idle high or read the acknowledge from there.
    pub fn pulses(self) -> Vec<Pulse, PULSES_PER_FRAME> {
        let mut seq: Vec<Pulse, PULSES_PER_FRAME> = Vec::new();
        let push = |seq: &mut Vec<Pulse, PULSES_PER_FRAME>, high: bool, ns: u32| {
            // Capacity is exact by construction.
            let _ = seq.push(Pulse { high, ns });
        };

        push(&mut seq, true, T_START_NS);
        for bit in (0..16).rev() {
            let t_low = if self.0 & (1 << bit) != 0 {
                T_LOGIC_1_NS
            } else {
                T_LOGIC_0_NS
            };
            push(&mut seq, false, t_low);
            push(&mut seq, true, T_BIT_NS - t_low);
            if bit == 8 {
                // Inter-byte gap between address and data byte.
                push(&mut seq, false, T_EOS_NS);
                push(&mut seq, true, T_START_NS);
            }
        }
        push(&mut seq, false, T_EOS_NS);
        seq
    }
}
