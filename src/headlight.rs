//! Headlight control with an ambient-light auto mode.
//!
//! In [`HeadlightMode::Auto`] the headlights only switch after the light sensor
//! has reported the same band continuously for a dwell time: dark for the
//! lights-on delay, bright for the (longer) lights-off delay. Readings in the
//! ambient band between the two restart both dwell timers, and leaving a band
//! restarts that band's timer, so short flashes of light or shadow never
//! accumulate into a toggle.

use crate::mode::HeadlightMode;
use crate::time::TimeDuration;

/// Upper bound (inclusive) of the light sensor's dark band.
pub const DARK_MAX: f32 = 0.33;

/// Lower bound (inclusive) of the light sensor's bright band.
pub const BRIGHT_MIN: f32 = 0.66;

/// Light sensor band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LightLevel {
    /// Reading at or below [`DARK_MAX`].
    Dark,
    /// Reading strictly between the dark and bright bands.
    Ambient,
    /// Reading at or above [`BRIGHT_MIN`].
    Bright,
}

impl LightLevel {
    /// Classifies a normalized light sensor reading.
    pub fn classify(reading: f32) -> Self {
        if reading >= BRIGHT_MIN {
            LightLevel::Bright
        } else if reading <= DARK_MAX {
            LightLevel::Dark
        } else {
            LightLevel::Ambient
        }
    }
}

/// Right and left headlight levels. Both sides are always driven together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HeadlightOutputs {
    pub right: bool,
    pub left: bool,
}

impl HeadlightOutputs {
    /// Both headlights off.
    pub const OFF: Self = Self::both(false);

    /// Both headlights on.
    pub const ON: Self = Self::both(true);

    /// Drives both sides to the same level.
    pub const fn both(on: bool) -> Self {
        Self { right: on, left: on }
    }

    /// Returns true if any headlight is lit.
    pub fn is_on(&self) -> bool {
        self.right || self.left
    }
}

/// Headlight subsystem state.
#[derive(Debug, Clone)]
pub struct HeadlightController<D: TimeDuration> {
    outputs: HeadlightOutputs,
    on_delay_elapsed: D,
    off_delay_elapsed: D,
    lights_on_delay: D,
    lights_off_delay: D,
}

impl<D: TimeDuration> HeadlightController<D> {
    /// Creates a controller with the headlights off.
    pub fn new(lights_on_delay: D, lights_off_delay: D) -> Self {
        Self {
            outputs: HeadlightOutputs::OFF,
            on_delay_elapsed: D::ZERO,
            off_delay_elapsed: D::ZERO,
            lights_on_delay,
            lights_off_delay,
        }
    }

    /// Advances the controller by one tick of length `period`.
    ///
    /// `light_reading` is only consulted in `Auto` mode with the engine
    /// running; pass `None` when it was not sampled. Leaving `Auto` for any
    /// reason clears both dwell timers.
    pub fn tick(
        &mut self,
        engine_running: bool,
        mode: HeadlightMode,
        light_reading: Option<f32>,
        period: D,
    ) -> HeadlightOutputs {
        if !engine_running {
            self.clear_delays();
            self.outputs = HeadlightOutputs::OFF;
            return self.outputs;
        }

        match mode {
            HeadlightMode::Off => {
                self.clear_delays();
                self.outputs = HeadlightOutputs::OFF;
            }
            HeadlightMode::On => {
                self.clear_delays();
                self.outputs = HeadlightOutputs::ON;
            }
            HeadlightMode::Auto => match light_reading {
                Some(reading) => self.auto_tick(LightLevel::classify(reading), period),
                None => self.clear_delays(),
            },
        }

        self.outputs
    }

    fn auto_tick(&mut self, level: LightLevel, period: D) {
        match level {
            LightLevel::Bright => {
                self.on_delay_elapsed = D::ZERO;
                self.off_delay_elapsed = self.off_delay_elapsed.saturating_add(period);
                if self.off_delay_elapsed >= self.lights_off_delay {
                    self.clear_delays();
                    if self.outputs.is_on() {
                        log_debug!("auto mode: bright, headlights off");
                    }
                    self.outputs = HeadlightOutputs::OFF;
                }
            }
            LightLevel::Dark => {
                self.off_delay_elapsed = D::ZERO;
                self.on_delay_elapsed = self.on_delay_elapsed.saturating_add(period);
                if self.on_delay_elapsed >= self.lights_on_delay {
                    self.clear_delays();
                    if !self.outputs.is_on() {
                        log_debug!("auto mode: dark, headlights on");
                    }
                    self.outputs = HeadlightOutputs::ON;
                }
            }
            LightLevel::Ambient => self.clear_delays(),
        }
    }

    fn clear_delays(&mut self) {
        self.on_delay_elapsed = D::ZERO;
        self.off_delay_elapsed = D::ZERO;
    }

    /// Returns the current headlight levels.
    pub fn outputs(&self) -> HeadlightOutputs {
        self.outputs
    }

    /// Returns how long the sensor has continuously read dark.
    pub fn on_delay_elapsed(&self) -> D {
        self.on_delay_elapsed
    }

    /// Returns how long the sensor has continuously read bright.
    pub fn off_delay_elapsed(&self) -> D {
        self.off_delay_elapsed
    }
}
