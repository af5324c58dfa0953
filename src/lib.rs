#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`ControlLoop`**: Owns both subsystems and the board collaborators; call `tick` once per period
//! - **`Debouncer`**: Turns a bouncing button level into a single release event per press
//! - **`Ignition`**: Toggles the engine on release events, refusing to start with an empty seat
//! - **`HeadlightMode`** / **`ModeSelector`**: Maps the selector potentiometer to Off, Auto or On
//! - **`HeadlightController`**: Drives the headlights, with dwell-time hysteresis in Auto
//! - **`SignalSampler`**: Trait to implement for your input hardware
//! - **`ControlOutputs`**: Trait to implement for your output hardware (or use `GpioOutputs`)
//! - **`TimeDuration`**: Trait to implement for your duration type (or use `Millis`)
//! - **`ControlConfig`**: Tick period and delays, validated by its builder
//!
//! Status messages are written to any `core::fmt::Write` sink, typically a UART.

#[macro_use]
mod logging;

pub mod config;
pub mod control;
pub mod debounce;
pub mod hal;
pub mod headlight;
pub mod ignition;
pub mod mode;
pub mod signals;
pub mod time;

pub use config::{ConfigBuilder, ConfigError, ControlConfig};
pub use control::{ControlError, ControlLoop, TickReport};
pub use debounce::{ButtonState, Debouncer};
pub use hal::GpioOutputs;
pub use headlight::{HeadlightController, HeadlightOutputs, LightLevel};
pub use ignition::{Ignition, IgnitionMessage, IgnitionOutcome};
pub use mode::{HeadlightMode, ModeSelector};
pub use signals::{ControlOutputs, SignalSampler};
pub use time::{Millis, TimeDuration};
