//! Three-position headlight selector.

/// Upper bound (inclusive) of the potentiometer's OFF band.
pub const MODE_OFF_MAX: f32 = 0.33;

/// Lower bound (inclusive) of the potentiometer's ON band.
pub const MODE_ON_MIN: f32 = 0.66;

/// Headlight selector position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HeadlightMode {
    /// Headlights forced off.
    Off,
    /// Headlights follow the ambient light sensor.
    Auto,
    /// Headlights forced on.
    On,
}

impl HeadlightMode {
    /// Maps a normalized potentiometer reading to a mode.
    ///
    /// `0.33` belongs to `Off` and `0.66` to `On`; `Auto` is the open interval
    /// between them. Returns `None` for readings in no band (NaN).
    pub fn from_reading(reading: f32) -> Option<Self> {
        if reading <= MODE_OFF_MAX {
            Some(HeadlightMode::Off)
        } else if reading > MODE_OFF_MAX && reading < MODE_ON_MIN {
            Some(HeadlightMode::Auto)
        } else if reading >= MODE_ON_MIN {
            Some(HeadlightMode::On)
        } else {
            None
        }
    }
}

/// Mode selector that holds the previous mode when a reading is unusable.
#[derive(Debug, Clone)]
pub struct ModeSelector {
    mode: HeadlightMode,
}

impl ModeSelector {
    /// Creates a selector whose fallback mode is `Off`.
    pub const fn new() -> Self {
        Self {
            mode: HeadlightMode::Off,
        }
    }

    /// Selects the mode for `reading`, caching it for the next call.
    pub fn select(&mut self, reading: f32) -> HeadlightMode {
        if let Some(mode) = HeadlightMode::from_reading(reading) {
            self.mode = mode;
        }
        self.mode
    }

    /// Returns the most recently selected mode.
    pub fn mode(&self) -> HeadlightMode {
        self.mode
    }
}

impl Default for ModeSelector {
    fn default() -> Self {
        Self::new()
    }
}
