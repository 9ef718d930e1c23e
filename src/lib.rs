//! Compile-time configuration of a plant monitoring node.
//!
//! Operator values come from `cfg.toml` (see `cfg.toml.example`) and are
//! turned into [`config::CONFIG`] by the build script. The board family is
//! picked with exactly one of the `esp32` or `esp8266` features and fixes the
//! pin map and soil ADC range in [`board`].

#![cfg_attr(not(test), no_std)]

pub mod api;
pub mod board;
pub mod calibration;
pub mod config;
pub mod constants;
pub mod defaults;
pub mod device;
#[cfg(test)]
mod raw_config;
pub mod url;
pub mod validate;

pub use config::CONFIG;
