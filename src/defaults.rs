//! Values `build.rs` falls back to when `cfg.toml` leaves a field out.

/// How often the sensors are sampled
pub const SENSOR_INTERVAL_MS: u32 = 30_000;
/// How often device commands are polled from the server
pub const DEVICE_CHECK_INTERVAL_MS: u32 = 10_000;

/// Additive temperature trim in °C
pub const TEMPERATURE_OFFSET: f32 = 0.0;
/// Additive humidity trim in %
pub const HUMIDITY_OFFSET: f32 = 0.0;

pub const DEVICE_GROUP: &str = "tent1";

pub const LIGHT_DEVICE_NAME: &str = "Grow Light";
pub const FAN_DEVICE_NAME: &str = "Ventilation Fan";
pub const PUMP_DEVICE_NAME: &str = "Water Pump";
