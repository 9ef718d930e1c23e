/// Current crate version, reported alongside the configuration at boot
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Server route receiving sensor samples (POST)
pub const API_SENSOR_DATA_PATH: &str = "/api/sensor-data";
/// Server route listing device states (GET)
pub const API_DEVICES_PATH: &str = "/api/devices";

/// Capacity of a full endpoint URL (base URL plus API path)
pub const URL_BUFFER_SIZE: usize = 192;
/// Capacity of a sensor sample JSON body
pub const PAYLOAD_BUFFER_SIZE: usize = 256;
