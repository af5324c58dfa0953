//! Fixed-period control loop.
//!
//! Provides [`ControlLoop`], which owns the ignition and headlight subsystems
//! together with the board collaborators, and runs both subsystems once per
//! tick: ignition first, then headlights.

use core::fmt::Write;

use embedded_hal::delay::DelayNs;

use crate::config::ControlConfig;
use crate::debounce::Debouncer;
use crate::headlight::{HeadlightController, HeadlightOutputs};
use crate::ignition::{Ignition, IgnitionMessage};
use crate::mode::{HeadlightMode, ModeSelector};
use crate::signals::{ControlOutputs, SignalSampler};
use crate::time::TimeDuration;

/// What happened during one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickReport {
    /// A debounced button release was confirmed this tick.
    pub released: bool,
    /// Engine state after the tick.
    pub engine_running: bool,
    /// Message written to the sink, if any.
    pub message: Option<IgnitionMessage>,
    /// Selected headlight mode. `None` while the engine is off, since the
    /// selector is not sampled then.
    pub mode: Option<HeadlightMode>,
    /// Headlight levels after the tick.
    pub headlights: HeadlightOutputs,
}

/// Errors that can occur while running the control loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ControlError {
    /// The text sink rejected a status message.
    ///
    /// Reported after the tick's outputs were driven; the subsystems' state has
    /// already advanced.
    MessageSink(IgnitionMessage),
}

impl core::fmt::Display for ControlError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ControlError::MessageSink(message) => {
                write!(f, "failed to write status message {:?}", message)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ControlError {}

/// Ignition and headlight controller.
///
/// # Type Parameters
/// * `D` - Duration type used for the tick period and all timers
/// * `S` - Input sampler implementation
/// * `O` - Output driver implementation
/// * `W` - Text sink for status messages (e.g. a UART)
pub struct ControlLoop<D: TimeDuration, S: SignalSampler, O: ControlOutputs, W: Write> {
    config: ControlConfig<D>,
    sampler: S,
    outputs: O,
    sink: W,
    debouncer: Debouncer<D>,
    ignition: Ignition,
    selector: ModeSelector,
    headlights: HeadlightController<D>,
    indicator_level: bool,
    headlight_levels: HeadlightOutputs,
}

impl<D: TimeDuration, S: SignalSampler, O: ControlOutputs, W: Write> ControlLoop<D, S, O, W> {
    /// Creates the controller with every output off and the debouncer seeded
    /// from the current button level.
    pub fn new(config: ControlConfig<D>, mut sampler: S, mut outputs: O, sink: W) -> Self {
        outputs.set_engine_indicator(false);
        outputs.set_headlights(false, false);

        let mut debouncer = Debouncer::new(config.debounce_time());
        debouncer.initialize(sampler.ignition_pressed());

        log_info!(
            "control loop ready, tick period {} ms",
            config.tick_period().as_millis()
        );

        Self {
            config,
            sampler,
            outputs,
            sink,
            debouncer,
            ignition: Ignition::new(),
            selector: ModeSelector::new(),
            headlights: HeadlightController::new(
                config.lights_on_delay(),
                config.lights_off_delay(),
            ),
            indicator_level: false,
            headlight_levels: HeadlightOutputs::OFF,
        }
    }

    /// Runs one period of work: ignition, then headlights, then outputs.
    ///
    /// # Returns
    /// * `Ok(TickReport)` - Summary of the tick
    /// * `Err(ControlError::MessageSink)` - The status message could not be
    ///   written; outputs are already up to date
    pub fn tick(&mut self) -> Result<TickReport, ControlError> {
        let period = self.config.tick_period();

        let released = self
            .debouncer
            .tick(self.sampler.ignition_pressed(), period);
        let seat_occupied = released && self.sampler.seat_occupied();
        let ignition = self.ignition.tick(released, seat_occupied);

        if ignition.engine_running != self.indicator_level {
            self.outputs.set_engine_indicator(ignition.engine_running);
            self.indicator_level = ignition.engine_running;
        }

        let (mode, headlights) = if ignition.engine_running {
            let mode = self.selector.select(self.sampler.potentiometer());
            let light = match mode {
                HeadlightMode::Auto => Some(self.sampler.light_level()),
                _ => None,
            };
            (Some(mode), self.headlights.tick(true, mode, light, period))
        } else {
            let outputs = self
                .headlights
                .tick(false, self.selector.mode(), None, period);
            (None, outputs)
        };

        if headlights != self.headlight_levels {
            self.outputs.set_headlights(headlights.right, headlights.left);
            self.headlight_levels = headlights;
        }

        if let Some(message) = ignition.message {
            self.sink
                .write_str(message.as_str())
                .map_err(|_| ControlError::MessageSink(message))?;
        }

        Ok(TickReport {
            released,
            engine_running: ignition.engine_running,
            message: ignition.message,
            mode,
            headlights,
        })
    }

    /// Runs the loop forever, sleeping one tick period after each tick.
    ///
    /// Sink failures are logged and otherwise ignored.
    pub fn run<T: DelayNs>(&mut self, delay: &mut T) -> ! {
        let period_ms = u32::try_from(self.config.tick_period().as_millis()).unwrap_or(u32::MAX);
        loop {
            if let Err(_e) = self.tick() {
                log_warn!("control tick: {}", _e);
            }
            delay.delay_ms(period_ms);
        }
    }

    /// Returns the loop configuration.
    pub fn config(&self) -> &ControlConfig<D> {
        &self.config
    }

    /// Returns true if the engine is running.
    pub fn engine_running(&self) -> bool {
        self.ignition.engine_running()
    }

    /// Returns the current headlight levels.
    pub fn headlights(&self) -> HeadlightOutputs {
        self.headlight_levels
    }

    /// Returns a reference to the input sampler.
    pub fn sampler(&self) -> &S {
        &self.sampler
    }

    /// Returns a mutable reference to the input sampler.
    pub fn sampler_mut(&mut self) -> &mut S {
        &mut self.sampler
    }

    /// Returns a reference to the output driver.
    pub fn outputs(&self) -> &O {
        &self.outputs
    }

    /// Returns a reference to the text sink.
    pub fn sink(&self) -> &W {
        &self.sink
    }

    /// Consumes the controller and returns its collaborators.
    pub fn release(self) -> (S, O, W) {
        (self.sampler, self.outputs, self.sink)
    }
}
