//! Shared test infrastructure for ignition-headlights integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use ignition_headlights::{
    ControlConfig, ControlLoop, ControlOutputs, HeadlightOutputs, Millis, SignalSampler,
};

// ============================================================================
// Mock Inputs
// ============================================================================

/// Mock input signals, set directly by the test between ticks
#[derive(Debug, Clone, Copy)]
pub struct MockSignals {
    pub ignition: bool,
    pub seated: bool,
    pub potentiometer: f32,
    pub light: f32,
    pub light_reads: usize,
}

impl MockSignals {
    pub fn new() -> Self {
        Self {
            ignition: false,
            seated: true,
            potentiometer: 0.5,
            light: 0.5,
            light_reads: 0,
        }
    }
}

impl SignalSampler for MockSignals {
    fn ignition_pressed(&mut self) -> bool {
        self.ignition
    }

    fn seat_occupied(&mut self) -> bool {
        self.seated
    }

    fn potentiometer(&mut self) -> f32 {
        self.potentiometer
    }

    fn light_level(&mut self) -> f32 {
        self.light_reads += 1;
        self.light
    }
}

// ============================================================================
// Mock Outputs
// ============================================================================

/// Mock outputs that record every write for testing
pub struct MockOutputs {
    pub indicator: bool,
    pub headlights: HeadlightOutputs,
    pub indicator_history: heapless::Vec<bool, 32>,
    pub headlight_history: heapless::Vec<HeadlightOutputs, 32>,
}

impl MockOutputs {
    pub fn new() -> Self {
        Self {
            indicator: false,
            headlights: HeadlightOutputs::OFF,
            indicator_history: heapless::Vec::new(),
            headlight_history: heapless::Vec::new(),
        }
    }
}

impl ControlOutputs for MockOutputs {
    fn set_engine_indicator(&mut self, on: bool) {
        self.indicator = on;
        let _ = self.indicator_history.push(on);
    }

    fn set_headlights(&mut self, right: bool, left: bool) {
        self.headlights = HeadlightOutputs { right, left };
        let _ = self.headlight_history.push(self.headlights);
    }
}

// ============================================================================
// Mock Sinks
// ============================================================================

/// Text sink used by the tests
pub type Console = heapless::String<256>;

/// Sink that rejects every write
pub struct FailingSink;

impl core::fmt::Write for FailingSink {
    fn write_str(&mut self, _s: &str) -> core::fmt::Result {
        Err(core::fmt::Error)
    }
}

pub type TestLoop = ControlLoop<Millis, MockSignals, MockOutputs, Console>;

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Controller with default timings, seat occupied and button released
pub fn controller() -> TestLoop {
    ControlLoop::new(
        ControlConfig::default(),
        MockSignals::new(),
        MockOutputs::new(),
        Console::new(),
    )
}

/// Runs `ticks` ticks with the ignition button held at `pressed`
pub fn hold_button(controller: &mut TestLoop, pressed: bool, ticks: usize) {
    controller.sampler_mut().ignition = pressed;
    for _ in 0..ticks {
        controller.tick().unwrap();
    }
}

/// Presses for 50 ms then releases for 50 ms (5 ticks each at 10 ms)
pub fn press_and_release(controller: &mut TestLoop) {
    hold_button(controller, true, 5);
    hold_button(controller, false, 5);
}

/// Controller with the engine already started and the selector at `potentiometer`
pub fn running_controller(potentiometer: f32) -> TestLoop {
    let mut controller = controller();
    controller.sampler_mut().potentiometer = potentiometer;
    press_and_release(&mut controller);
    assert!(controller.engine_running());
    controller
}

/// Counts occurrences of `needle` in the console output
pub fn count_messages(console: &Console, needle: &str) -> usize {
    console.as_str().matches(needle).count()
}
