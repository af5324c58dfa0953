//! Debounced button-release detection.
//!
//! Provides [`Debouncer`], a four-state machine that accepts an edge only after
//! the raw level has held for a full debounce window, and reports a single-tick
//! event when a complete press-then-release cycle has been confirmed.

use crate::time::TimeDuration;

/// The current state of a [`Debouncer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonState {
    /// Button confirmed released.
    ReleasedStable,
    /// Press detected, waiting out the debounce window.
    Falling,
    /// Button confirmed pressed.
    PressedStable,
    /// Release detected, waiting out the debounce window.
    Rising,
    /// Not yet seeded from the raw level. The next tick re-initializes.
    Unknown,
}

/// Debounces a raw button level sampled once per tick.
///
/// The raw level is sampled when an edge is first seen and again once the
/// debounce window has elapsed; chatter in between is ignored. A release event
/// is emitted only on the `Rising -> ReleasedStable` transition, so one
/// physical press produces exactly one event.
#[derive(Debug, Clone)]
pub struct Debouncer<D: TimeDuration> {
    state: ButtonState,
    elapsed: D,
    debounce_time: D,
}

impl<D: TimeDuration> Debouncer<D> {
    /// Creates a debouncer in the `Unknown` state.
    pub fn new(debounce_time: D) -> Self {
        Self {
            state: ButtonState::Unknown,
            elapsed: D::ZERO,
            debounce_time,
        }
    }

    /// Seeds the state from the current raw level. Call once at startup.
    pub fn initialize(&mut self, raw_pressed: bool) {
        self.state = if raw_pressed {
            ButtonState::PressedStable
        } else {
            ButtonState::ReleasedStable
        };
        self.elapsed = D::ZERO;
    }

    /// Forgets the current state; the next tick re-initializes from the raw level.
    pub fn reset(&mut self) {
        self.state = ButtonState::Unknown;
        self.elapsed = D::ZERO;
    }

    /// Advances the state machine by one tick of length `period`.
    ///
    /// Returns `true` only on the tick where a release is confirmed.
    pub fn tick(&mut self, raw_pressed: bool, period: D) -> bool {
        let mut released = false;

        match self.state {
            ButtonState::ReleasedStable => {
                if raw_pressed {
                    self.enter(ButtonState::Falling);
                }
            }
            ButtonState::Falling => {
                if self.elapsed >= self.debounce_time {
                    if raw_pressed {
                        log_debug!("ignition button press confirmed");
                        self.state = ButtonState::PressedStable;
                    } else {
                        log_debug!("ignition button bounce rejected on press");
                        self.state = ButtonState::ReleasedStable;
                    }
                }
                self.elapsed = self.elapsed.saturating_add(period);
            }
            ButtonState::PressedStable => {
                if !raw_pressed {
                    self.enter(ButtonState::Rising);
                }
            }
            ButtonState::Rising => {
                if self.elapsed >= self.debounce_time {
                    if raw_pressed {
                        log_debug!("ignition button bounce rejected on release");
                        self.state = ButtonState::PressedStable;
                    } else {
                        log_debug!("ignition button release confirmed");
                        self.state = ButtonState::ReleasedStable;
                        released = true;
                    }
                }
                self.elapsed = self.elapsed.saturating_add(period);
            }
            ButtonState::Unknown => {
                log_warn!("debouncer state unknown, reinitializing");
                self.initialize(raw_pressed);
            }
        }

        released
    }

    /// Returns the current state.
    pub fn state(&self) -> ButtonState {
        self.state
    }

    /// Returns the time accumulated in the current transitional state.
    pub fn elapsed(&self) -> D {
        self.elapsed
    }

    fn enter(&mut self, state: ButtonState) {
        self.state = state;
        self.elapsed = D::ZERO;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::Millis;

    const PERIOD: Millis = Millis(10);

    fn debouncer() -> Debouncer<Millis> {
        let mut debouncer = Debouncer::new(Millis(30));
        debouncer.initialize(false);
        debouncer
    }

    #[test]
    fn initialize_seeds_from_raw_level() {
        let mut debouncer = Debouncer::new(Millis(30));
        assert_eq!(debouncer.state(), ButtonState::Unknown);

        debouncer.initialize(true);
        assert_eq!(debouncer.state(), ButtonState::PressedStable);

        debouncer.initialize(false);
        assert_eq!(debouncer.state(), ButtonState::ReleasedStable);
    }

    #[test]
    fn unknown_state_self_heals_without_event() {
        let mut debouncer = Debouncer::new(Millis(30));
        assert!(!debouncer.tick(true, PERIOD));
        assert_eq!(debouncer.state(), ButtonState::PressedStable);

        debouncer.reset();
        assert_eq!(debouncer.state(), ButtonState::Unknown);
        assert!(!debouncer.tick(false, PERIOD));
        assert_eq!(debouncer.state(), ButtonState::ReleasedStable);
    }

    #[test]
    fn press_enters_falling_with_zeroed_timer() {
        let mut debouncer = debouncer();
        assert!(!debouncer.tick(true, PERIOD));
        assert_eq!(debouncer.state(), ButtonState::Falling);
        assert_eq!(debouncer.elapsed(), Millis(0));
    }

    #[test]
    fn falling_resolves_once_window_has_accumulated() {
        let mut debouncer = debouncer();
        debouncer.tick(true, PERIOD);

        // 0, 10, 20 ms accumulated: still below the window
        for _ in 0..3 {
            debouncer.tick(true, PERIOD);
            assert_eq!(debouncer.state(), ButtonState::Falling);
        }

        // 30 ms accumulated: resample and settle
        debouncer.tick(true, PERIOD);
        assert_eq!(debouncer.state(), ButtonState::PressedStable);
    }

    #[test]
    fn short_press_is_rejected_as_bounce() {
        let mut debouncer = debouncer();
        debouncer.tick(true, PERIOD);
        for _ in 0..4 {
            assert!(!debouncer.tick(false, PERIOD));
        }
        assert_eq!(debouncer.state(), ButtonState::ReleasedStable);
    }

    #[test]
    fn timer_keeps_accumulating_while_transitional() {
        let mut debouncer = debouncer();
        debouncer.tick(true, PERIOD);
        debouncer.tick(true, PERIOD);
        debouncer.tick(true, PERIOD);
        assert_eq!(debouncer.elapsed(), Millis(20));
    }

    #[test]
    fn release_event_fires_once_per_cycle() {
        let mut debouncer = debouncer();
        let mut events = 0;

        for _ in 0..5 {
            if debouncer.tick(true, PERIOD) {
                events += 1;
            }
        }
        assert_eq!(debouncer.state(), ButtonState::PressedStable);

        for _ in 0..5 {
            if debouncer.tick(false, PERIOD) {
                events += 1;
            }
        }
        assert_eq!(debouncer.state(), ButtonState::ReleasedStable);
        assert_eq!(events, 1);

        // Staying released produces no further events
        for _ in 0..20 {
            assert!(!debouncer.tick(false, PERIOD));
        }
    }

    #[test]
    fn bounce_during_release_returns_to_pressed_without_event() {
        let mut debouncer = Debouncer::new(Millis(30));
        debouncer.initialize(true);

        assert!(!debouncer.tick(false, PERIOD));
        assert_eq!(debouncer.state(), ButtonState::Rising);
        for _ in 0..4 {
            assert!(!debouncer.tick(true, PERIOD));
        }
        assert_eq!(debouncer.state(), ButtonState::PressedStable);
    }

    #[test]
    fn window_scales_with_tick_period() {
        let mut debouncer = Debouncer::new(Millis(30));
        debouncer.initialize(false);

        // 15 ms ticks: 0 then 15 below the window, 30 resolves
        debouncer.tick(true, Millis(15));
        debouncer.tick(true, Millis(15));
        debouncer.tick(true, Millis(15));
        assert_eq!(debouncer.state(), ButtonState::Falling);
        debouncer.tick(true, Millis(15));
        assert_eq!(debouncer.state(), ButtonState::PressedStable);
    }
}
