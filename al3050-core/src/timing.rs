//! Single Wire timing constants
//!
//! All values come from the AL3050 datasheet. They are protocol
//! constants, not tunables: the chip calibrates its receiver from the
//! detection window at power-up and then expects constant-period bit
//! cells, so changing any of these desynchronizes it.

/// Reset hold before the detection handshake (milliseconds).
pub const T_RESET_MS: u32 = 4;
/// High time between reset release and the detection window.
pub const T_DELAY_NS: u32 = 100_000;
/// Detection window: the chip measures this low pulse to calibrate
/// its bit-timing expectations.
pub const T_DETECTION_NS: u32 = 450_000;
/// High time signalling the start of a byte.
pub const T_START_NS: u32 = 4_000;
/// End-of-stream low after each byte.
pub const T_EOS_NS: u32 = 4_000;
/// Low time encoding a 1 bit.
pub const T_LOGIC_1_NS: u32 = 4_000;
/// Low time encoding a 0 bit.
pub const T_LOGIC_0_NS: u32 = 9_000;
/// Total bit-cell period. Every cell lasts this long regardless of the
/// bit value; only the low/high split varies.
pub const T_BIT_NS: u32 = T_LOGIC_1_NS + T_LOGIC_0_NS;

/// Interval between acknowledge polls.
pub const RFA_POLL_NS: u32 = 3_500;
/// Total acknowledge wait budget.
pub const RFA_TIMEOUT_NS: u32 = 900_000;
