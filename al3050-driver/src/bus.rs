//! Single Wire bus: handshake, frame transmit, acknowledge read
//!
//! The wire level of the protocol. Everything here is strictly timed:
//! the chip calibrates its receiver from the detection window during
//! the handshake and afterwards expects constant-period bit cells, so
//! the microsecond-scale sequences run inside `critical_section::with`
//! to keep preemption from stretching individual pulses. The 4 ms
//! reset hold is not protected; stretching it is harmless.

use al3050_core::frame::Frame;
use al3050_core::timing::{
    RFA_POLL_NS, RFA_TIMEOUT_NS, T_DELAY_NS, T_DETECTION_NS, T_RESET_MS,
};
use al3050_hal::SingleWireLine;
use embedded_hal::delay::DelayNs;

/// Result of one frame transmission.
///
/// Only meaningful when the frame requested an acknowledge; frames
/// without the RFA flag always report `Done` (the chip gives no other
/// feedback).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SendOutcome {
    /// Frame clocked out (and acknowledged, if requested).
    Done,
    /// The chip never pulled the line low within the acknowledge
    /// window; it likely missed the frame and needs a new handshake.
    AckTimeout,
}

/// Bit-banged Single Wire bus over one bidirectional line.
pub struct SingleWireBus<L, D> {
    line: L,
    delay: D,
}

impl<L, D> SingleWireBus<L, D>
where
    L: SingleWireLine,
    D: DelayNs,
{
    /// Create a bus over an already-acquired line.
    pub fn new(line: L, delay: D) -> Self {
        Self { line, delay }
    }

    /// Run the power-up detection handshake.
    ///
    /// Reset hold (low, 4 ms), then the detection window: high 100 us,
    /// low 450 us - the chip measures that low pulse to calibrate its
    /// bit timing. Leaves the line idling high. There is no failure
    /// return; the chip gives no feedback at this stage.
    ///
    /// Required once at attach time and again after every suspend,
    /// since an extended low drops the calibration.
    pub fn handshake(&mut self) {
        self.line.drive_low();
        self.delay.delay_ms(T_RESET_MS);
        critical_section::with(|_| {
            self.line.drive_high();
            self.delay.delay_ns(T_DELAY_NS);
            self.line.drive_low();
            self.delay.delay_ns(T_DETECTION_NS);
            self.line.drive_high();
        });
    }

    /// Transmit one frame, reading the acknowledge if the frame
    /// requests one. Leaves the line idling high on every path.
    pub fn send_frame(&mut self, frame: Frame) -> SendOutcome {
        critical_section::with(|_| {
            for pulse in frame.pulses() {
                self.line.drive(pulse.high);
                self.delay.delay_ns(pulse.ns);
            }
            // The schedule ends with the end-of-stream low.
            let outcome = if frame.rfa() {
                self.wait_for_ack()
            } else {
                SendOutcome::Done
            };
            self.line.drive_high();
            outcome
        })
    }

    /// Poll for the chip's acknowledge pulse.
    ///
    /// Fixed-budget, fixed-interval poll: the 900 us budget is
    /// decremented by the 3.5 us poll interval rather than by measured
    /// elapsed time. Once the chip is seen holding the line low, the
    /// remaining budget is slept out so we do not drive against its
    /// acknowledge pulse.
    fn wait_for_ack(&mut self) -> SendOutcome {
        self.line.release();
        let mut remaining = RFA_TIMEOUT_NS as i32;
        while remaining > 0 {
            if self.line.is_low() {
                break;
            }
            self.delay.delay_ns(RFA_POLL_NS);
            remaining -= RFA_POLL_NS as i32;
        }
        if remaining <= 0 {
            return SendOutcome::AckTimeout;
        }
        self.delay.delay_ns(remaining as u32);
        SendOutcome::Done
    }

    /// Park the line low. Used while suspended; the chip drops its
    /// calibration, so a handshake must precede the next frame.
    pub fn park_low(&mut self) {
        self.line.drive_low();
    }

    /// Tear down the bus, returning the hardware.
    pub fn free(self) -> (L, D) {
        (self.line, self.delay)
    }
}
