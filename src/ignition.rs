//! Engine on/off state driven by debounced button releases.

/// Status messages produced by the ignition subsystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IgnitionMessage {
    /// The engine was running and has been stopped.
    EngineOff,
    /// The engine was started.
    EngineStarted,
    /// Start attempted without a driver in the seat.
    DriverNotSeated,
}

impl IgnitionMessage {
    /// Returns the exact text written to the serial console.
    pub const fn as_str(&self) -> &'static str {
        match self {
            IgnitionMessage::EngineOff => "\r\nEngine turned off\r\n",
            IgnitionMessage::EngineStarted => "\r\nEngine started\r\n",
            IgnitionMessage::DriverNotSeated => "\r\nError: Driver must be seated\r\n",
        }
    }
}

impl core::fmt::Display for IgnitionMessage {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of one ignition tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct IgnitionOutcome {
    /// Engine state after the tick; also the status indicator level.
    pub engine_running: bool,
    /// Message to emit, if the tick handled a release event.
    pub message: Option<IgnitionMessage>,
}

/// Ignition subsystem.
///
/// Toggles the engine on each release event. Starting requires an occupied
/// seat; stopping does not. A refused start leaves no state behind, so the
/// next press simply tries again.
#[derive(Debug, Clone, Default)]
pub struct Ignition {
    engine_running: bool,
}

impl Ignition {
    /// Creates the subsystem with the engine off.
    pub const fn new() -> Self {
        Self {
            engine_running: false,
        }
    }

    /// Handles one tick. No-op unless `released` is true.
    pub fn tick(&mut self, released: bool, seat_occupied: bool) -> IgnitionOutcome {
        let message = if !released {
            None
        } else if self.engine_running {
            self.engine_running = false;
            log_info!("engine stopped");
            Some(IgnitionMessage::EngineOff)
        } else if seat_occupied {
            self.engine_running = true;
            log_info!("engine started");
            Some(IgnitionMessage::EngineStarted)
        } else {
            log_warn!("start refused, driver seat empty");
            Some(IgnitionMessage::DriverNotSeated)
        };

        IgnitionOutcome {
            engine_running: self.engine_running,
            message,
        }
    }

    /// Returns true if the engine is running.
    pub fn engine_running(&self) -> bool {
        self.engine_running
    }
}
