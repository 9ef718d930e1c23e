use core::time::Duration;

use log::info;

use crate::board::{ADC_MAX, BOARD, PINS, SOIL_DRY_DEFAULT, SOIL_WET_DEFAULT};
use crate::calibration::SoilCalibration;
use crate::constants::VERSION;
use crate::validate;

pub struct Config {
    // Wi-Fi SSID to connect to
    pub wifi_ssid: &'static str,

    // Wi-Fi pre-shared key (password), empty for an open network
    pub wifi_psk: &'static str,

    // Base URL of the plant server, e.g. "https://your-app-name.replit.app"
    pub server_url: &'static str,

    // Plant this node reports for, `None` while unassigned
    pub plant_id: Option<&'static str>,

    // Grow area tag, e.g. "tent1", "tent2", "greenhouse"
    pub device_group: &'static str,

    // Display names of the relay-driven devices
    pub light_device_name: &'static str,
    pub fan_device_name: &'static str,
    pub pump_device_name: &'static str,

    // How often sensors are sampled, in milliseconds
    pub sensor_interval_ms: u32,

    // How often device commands are polled, in milliseconds
    pub device_check_interval_ms: u32,

    // Soil ADC overrides, the board defaults apply when unset
    pub soil_dry_value: Option<u16>,
    pub soil_wet_value: Option<u16>,

    // Additive trims for the DHT readings
    pub temperature_offset: f32,
    pub humidity_offset: f32,
}

// config values are generated at compile time
include!(concat!(env!("OUT_DIR"), "/config.rs"));

impl Config {
    pub fn plant_assigned(&self) -> bool {
        self.plant_id.is_some()
    }

    pub fn sensor_interval(&self) -> Duration {
        Duration::from_millis(self.sensor_interval_ms.into())
    }

    pub fn device_check_interval(&self) -> Duration {
        Duration::from_millis(self.device_check_interval_ms.into())
    }

    /// Soil endpoints with the board defaults filling unset overrides
    pub fn soil_calibration(&self) -> SoilCalibration {
        SoilCalibration::new(
            self.soil_dry_value.unwrap_or(SOIL_DRY_DEFAULT),
            self.soil_wet_value.unwrap_or(SOIL_WET_DEFAULT),
        )
    }

    /// Same checks `build.rs` runs on `cfg.toml`
    pub fn validate(&self) -> Result<(), validate::Error> {
        let soil = self.soil_calibration();
        let fields = validate::Fields {
            wifi_ssid: self.wifi_ssid,
            wifi_psk: self.wifi_psk,
            server_url: self.server_url,
            plant_id: self.plant_id,
            device_group: self.device_group,
            light_device_name: self.light_device_name,
            fan_device_name: self.fan_device_name,
            pump_device_name: self.pump_device_name,
            sensor_interval_ms: self.sensor_interval_ms,
            device_check_interval_ms: self.device_check_interval_ms,
            soil_dry: soil.dry,
            soil_wet: soil.wet,
            temperature_offset: self.temperature_offset,
            humidity_offset: self.humidity_offset,
        };
        validate::fields(&fields, ADC_MAX)
    }

    /// Logs the active configuration at boot, the passphrase is never printed
    pub fn log_summary(&self) {
        let soil = self.soil_calibration();
        info!("plant_monitor_config v{}", VERSION);
        info!(
            "Board {} (sensor GPIO{}, soil {:?}, status LED GPIO{})",
            BOARD.name(),
            PINS.sensor,
            PINS.soil,
            PINS.status_led
        );
        info!(
            "Wi-Fi SSID {:?}, passphrase {}",
            self.wifi_ssid,
            if self.wifi_psk.is_empty() {
                "<none>"
            } else {
                "<set>"
            }
        );
        info!("Server {}", self.server_url);
        match self.plant_id {
            Some(id) => info!("Group {:?}, plant {:?}", self.device_group, id),
            None => info!("Group {:?}, no plant assigned", self.device_group),
        }
        info!(
            "Relays: {:?} on GPIO{}, {:?} on GPIO{}, {:?} on GPIO{}",
            self.light_device_name,
            PINS.light_relay,
            self.fan_device_name,
            PINS.fan_relay,
            self.pump_device_name,
            PINS.pump_relay
        );
        info!(
            "Sample every {} ms, poll devices every {} ms",
            self.sensor_interval_ms, self.device_check_interval_ms
        );
        info!(
            "Soil dry {} / wet {}, trims {:+.1} °C {:+.1} %",
            soil.dry, soil.wet, self.temperature_offset, self.humidity_offset
        );
    }
}
