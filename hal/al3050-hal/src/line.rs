//! Single Wire line abstraction
//!
//! The AL3050 talks over exactly one bidirectional pin. The host drives
//! it as a push-pull output for resets and frames, and releases it to an
//! input while the chip pulls it low to acknowledge a transfer (RFA).

/// One bidirectional GPIO line.
///
/// Implementations handle the actual hardware register manipulation for
/// the specific chip. All operations are infallible: a pin that is
/// present at attach time does not go away, and protocol timing leaves
/// no room for per-edge error handling.
pub trait SingleWireLine {
    /// Drive the line high (logic 1).
    ///
    /// If the line was previously released with [`release`](Self::release),
    /// this must also reconfigure it as a driven output.
    fn drive_high(&mut self);

    /// Drive the line low (logic 0).
    ///
    /// Same output-mode requirement as [`drive_high`](Self::drive_high).
    fn drive_low(&mut self);

    /// Drive the line to a specific level.
    fn drive(&mut self, high: bool) {
        if high {
            self.drive_high();
        } else {
            self.drive_low();
        }
    }

    /// Stop driving the line and switch it to an input.
    ///
    /// The chip's acknowledge pulse is read in this mode; an external
    /// pull-up keeps the line high while the chip stays silent.
    fn release(&mut self);

    /// Check if the line currently reads high.
    ///
    /// Only meaningful after [`release`](Self::release).
    fn is_high(&self) -> bool;

    /// Check if the line currently reads low.
    fn is_low(&self) -> bool {
        !self.is_high()
    }
}
