//! Hardware abstraction for controller inputs and outputs.

/// Trait for sampling the controller's input signals.
///
/// Implement this for your board (GPIO, ADC, ...). Digital inputs are
/// active-high; analog readings are normalized to 0.0-1.0 and are trusted to
/// be in range. Reads cannot fail: handle hardware errors internally and
/// return the idle level.
pub trait SignalSampler {
    /// Returns true while the ignition button is held.
    fn ignition_pressed(&mut self) -> bool;

    /// Returns true while the driver seat is occupied.
    fn seat_occupied(&mut self) -> bool;

    /// Returns the headlight selector potentiometer position.
    fn potentiometer(&mut self) -> f32;

    /// Returns the ambient light sensor reading.
    fn light_level(&mut self) -> f32;
}

/// Trait for driving the controller's output signals.
pub trait ControlOutputs {
    /// Sets the engine-running status indicator.
    fn set_engine_indicator(&mut self, on: bool);

    /// Sets the right and left headlights.
    fn set_headlights(&mut self, right: bool, left: bool);
}
