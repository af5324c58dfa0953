//! `embedded-hal` adapters.

use embedded_hal::digital::OutputPin;

use crate::signals::ControlOutputs;

/// [`ControlOutputs`] backed by three GPIO output pins.
///
/// Pin errors are ignored: on most HALs setting a push-pull output is
/// infallible, and the control loop has no way to recover from a failed write.
pub struct GpioOutputs<I, R, L>
where
    I: OutputPin,
    R: OutputPin,
    L: OutputPin,
{
    indicator: I,
    right: R,
    left: L,
}

impl<I, R, L> GpioOutputs<I, R, L>
where
    I: OutputPin,
    R: OutputPin,
    L: OutputPin,
{
    /// Wraps the status indicator and the right/left headlight pins.
    pub fn new(indicator: I, right: R, left: L) -> Self {
        Self {
            indicator,
            right,
            left,
        }
    }

    /// Returns the pins.
    pub fn release(self) -> (I, R, L) {
        (self.indicator, self.right, self.left)
    }
}

fn drive<P: OutputPin>(pin: &mut P, on: bool) {
    let _ = if on { pin.set_high() } else { pin.set_low() };
}

impl<I, R, L> ControlOutputs for GpioOutputs<I, R, L>
where
    I: OutputPin,
    R: OutputPin,
    L: OutputPin,
{
    fn set_engine_indicator(&mut self, on: bool) {
        drive(&mut self.indicator, on);
    }

    fn set_headlights(&mut self, right: bool, left: bool) {
        drive(&mut self.right, right);
        drive(&mut self.left, left);
    }
}
