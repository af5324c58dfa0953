//! Loop timing configuration.
//!
//! The tick period is a runtime value and every delay is expressed as a
//! duration, so the debounce and headlight delays keep their wall-clock
//! meaning when the loop runs at a different rate.

use crate::time::TimeDuration;

/// Default control loop period.
pub const DEFAULT_TICK_PERIOD_MS: u64 = 10;

/// Default time a button level must hold before an edge is accepted.
pub const DEFAULT_DEBOUNCE_MS: u64 = 30;

/// Default time the light sensor must read dark before headlights turn on.
pub const DEFAULT_LIGHTS_ON_DELAY_MS: u64 = 1000;

/// Default time the light sensor must read bright before headlights turn off.
pub const DEFAULT_LIGHTS_OFF_DELAY_MS: u64 = 2000;

/// Validated timing configuration for a [`ControlLoop`](crate::ControlLoop).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlConfig<D: TimeDuration> {
    tick_period: D,
    debounce_time: D,
    lights_on_delay: D,
    lights_off_delay: D,
}

impl<D: TimeDuration> ControlConfig<D> {
    /// Creates a new configuration builder seeded with the defaults.
    pub fn builder() -> ConfigBuilder<D> {
        ConfigBuilder::new()
    }

    /// Returns the period between two ticks.
    pub fn tick_period(&self) -> D {
        self.tick_period
    }

    /// Returns the button debounce window.
    pub fn debounce_time(&self) -> D {
        self.debounce_time
    }

    /// Returns the dark dwell time before headlights switch on in auto mode.
    pub fn lights_on_delay(&self) -> D {
        self.lights_on_delay
    }

    /// Returns the bright dwell time before headlights switch off in auto mode.
    pub fn lights_off_delay(&self) -> D {
        self.lights_off_delay
    }
}

impl<D: TimeDuration> Default for ControlConfig<D> {
    fn default() -> Self {
        Self {
            tick_period: D::from_millis(DEFAULT_TICK_PERIOD_MS),
            debounce_time: D::from_millis(DEFAULT_DEBOUNCE_MS),
            lights_on_delay: D::from_millis(DEFAULT_LIGHTS_ON_DELAY_MS),
            lights_off_delay: D::from_millis(DEFAULT_LIGHTS_OFF_DELAY_MS),
        }
    }
}

/// Builder for constructing validated configurations.
#[derive(Debug)]
pub struct ConfigBuilder<D: TimeDuration> {
    config: ControlConfig<D>,
}

impl<D: TimeDuration> ConfigBuilder<D> {
    /// Creates a builder holding the default timings.
    pub fn new() -> Self {
        Self {
            config: ControlConfig::default(),
        }
    }

    /// Sets the loop period.
    pub fn tick_period(mut self, period: D) -> Self {
        self.config.tick_period = period;
        self
    }

    /// Sets the button debounce window.
    pub fn debounce_time(mut self, time: D) -> Self {
        self.config.debounce_time = time;
        self
    }

    /// Sets the dark dwell time before headlights switch on.
    pub fn lights_on_delay(mut self, delay: D) -> Self {
        self.config.lights_on_delay = delay;
        self
    }

    /// Sets the bright dwell time before headlights switch off.
    pub fn lights_off_delay(mut self, delay: D) -> Self {
        self.config.lights_off_delay = delay;
        self
    }

    /// Builds and validates the configuration.
    ///
    /// # Errors
    /// * `ZeroTickPeriod` - The tick period is zero, timers would never advance
    /// * `DelayShorterThanTick` - A delay cannot be resolved at the tick rate
    pub fn build(self) -> Result<ControlConfig<D>, ConfigError> {
        let config = self.config;

        if config.tick_period == D::ZERO {
            return Err(ConfigError::ZeroTickPeriod);
        }

        let delays = [
            ("debounce_time", config.debounce_time),
            ("lights_on_delay", config.lights_on_delay),
            ("lights_off_delay", config.lights_off_delay),
        ];
        for (name, delay) in delays {
            if delay < config.tick_period {
                return Err(ConfigError::DelayShorterThanTick { delay: name });
            }
        }

        Ok(config)
    }
}

impl<D: TimeDuration> Default for ConfigBuilder<D> {
    fn default() -> Self {
        Self::new()
    }
}

/// Configuration validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// The tick period is zero.
    ZeroTickPeriod,

    /// A delay is shorter than one tick period.
    DelayShorterThanTick {
        /// Name of the offending setting, e.g. "debounce_time"
        delay: &'static str,
    },
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::ZeroTickPeriod => {
                write!(f, "tick period must be non-zero")
            }
            ConfigError::DelayShorterThanTick { delay } => {
                write!(f, "{} must be at least one tick period", delay)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}
