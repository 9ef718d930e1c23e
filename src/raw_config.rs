//! `cfg.toml` as the operator writes it.
//!
//! Needs `std`, so it is only compiled into `build.rs` and the host tests.

use serde::Deserialize;

use crate::board::{ADC_MAX, SOIL_DRY_DEFAULT, SOIL_WET_DEFAULT};
use crate::defaults;
use crate::validate;

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawConfig {
    wifi_ssid: String,
    wifi_psk: String,
    server_url: String,
    #[serde(default)]
    plant_id: String,
    #[serde(default = "default_device_group")]
    device_group: String,
    #[serde(default = "default_light_name")]
    light_device_name: String,
    #[serde(default = "default_fan_name")]
    fan_device_name: String,
    #[serde(default = "default_pump_name")]
    pump_device_name: String,
    #[serde(default = "default_sensor_interval")]
    sensor_interval_ms: u32,
    #[serde(default = "default_device_check_interval")]
    device_check_interval_ms: u32,
    soil_dry_value: Option<u16>,
    soil_wet_value: Option<u16>,
    #[serde(default = "default_temperature_offset")]
    temperature_offset: f32,
    #[serde(default = "default_humidity_offset")]
    humidity_offset: f32,
}

fn default_device_group() -> String {
    defaults::DEVICE_GROUP.into()
}
fn default_light_name() -> String {
    defaults::LIGHT_DEVICE_NAME.into()
}
fn default_fan_name() -> String {
    defaults::FAN_DEVICE_NAME.into()
}
fn default_pump_name() -> String {
    defaults::PUMP_DEVICE_NAME.into()
}
fn default_sensor_interval() -> u32 {
    defaults::SENSOR_INTERVAL_MS
}
fn default_device_check_interval() -> u32 {
    defaults::DEVICE_CHECK_INTERVAL_MS
}
fn default_temperature_offset() -> f32 {
    defaults::TEMPERATURE_OFFSET
}
fn default_humidity_offset() -> f32 {
    defaults::HUMIDITY_OFFSET
}

impl RawConfig {
    pub fn parse(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// An empty or blank plant id means the node is not assigned yet
    pub fn plant_id(&self) -> Option<&str> {
        Some(self.plant_id.trim()).filter(|id| !id.is_empty())
    }

    pub fn fields(&self) -> validate::Fields<'_> {
        validate::Fields {
            wifi_ssid: &self.wifi_ssid,
            wifi_psk: &self.wifi_psk,
            server_url: self.server_url.trim(),
            plant_id: self.plant_id(),
            device_group: &self.device_group,
            light_device_name: &self.light_device_name,
            fan_device_name: &self.fan_device_name,
            pump_device_name: &self.pump_device_name,
            sensor_interval_ms: self.sensor_interval_ms,
            device_check_interval_ms: self.device_check_interval_ms,
            soil_dry: self.soil_dry_value.unwrap_or(SOIL_DRY_DEFAULT),
            soil_wet: self.soil_wet_value.unwrap_or(SOIL_WET_DEFAULT),
            temperature_offset: self.temperature_offset,
            humidity_offset: self.humidity_offset,
        }
    }

    pub fn validate(&self) -> Result<(), validate::Error> {
        validate::fields(&self.fields(), ADC_MAX)
    }

    /// Source of the `CONFIG` constant included by `src/config.rs`
    pub fn to_rust(&self) -> String {
        format!(
            r#"
        pub const CONFIG: Config = Config {{
            wifi_ssid: {ssid:?},
            wifi_psk: {psk:?},
            server_url: {url:?},
            plant_id: {plant:?},
            device_group: {group:?},
            light_device_name: {light:?},
            fan_device_name: {fan:?},
            pump_device_name: {pump:?},
            sensor_interval_ms: {sensor_intv},
            device_check_interval_ms: {device_intv},
            soil_dry_value: {dry:?},
            soil_wet_value: {wet:?},
            temperature_offset: {temp:?},
            humidity_offset: {hum:?},
        }};
    "#,
            ssid = self.wifi_ssid,
            psk = self.wifi_psk,
            url = self.server_url.trim(),
            plant = self.plant_id(),
            group = self.device_group,
            light = self.light_device_name,
            fan = self.fan_device_name,
            pump = self.pump_device_name,
            sensor_intv = self.sensor_interval_ms,
            device_intv = self.device_check_interval_ms,
            dry = self.soil_dry_value,
            wet = self.soil_wet_value,
            temp = self.temperature_offset,
            hum = self.humidity_offset,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
        wifi_ssid = "greenhouse"
        wifi_psk = "hunter2hunter2"
        server_url = "https://plants.example.com"
    "#;

    #[test]
    fn omitted_fields_take_defaults() {
        let raw = RawConfig::parse(MINIMAL).unwrap();
        assert_eq!(raw.plant_id(), None);
        assert_eq!(raw.device_group, defaults::DEVICE_GROUP);
        assert_eq!(raw.light_device_name, defaults::LIGHT_DEVICE_NAME);
        assert_eq!(raw.fan_device_name, defaults::FAN_DEVICE_NAME);
        assert_eq!(raw.pump_device_name, defaults::PUMP_DEVICE_NAME);
        assert_eq!(raw.sensor_interval_ms, 30_000);
        assert_eq!(raw.device_check_interval_ms, 10_000);
        assert_eq!(raw.temperature_offset, 0.0);
        assert_eq!(raw.humidity_offset, 0.0);
        assert_eq!(raw.soil_dry_value, None);
        assert_eq!(raw.soil_wet_value, None);
        assert_eq!(raw.validate(), Ok(()));
    }

    #[test]
    fn blank_plant_id_is_unassigned() {
        for blank in ["", "   ", "\t"] {
            let toml_str = format!("{MINIMAL}\nplant_id = {blank:?}\n");
            let raw = RawConfig::parse(&toml_str).unwrap();
            assert_eq!(raw.plant_id(), None);
            assert!(raw.to_rust().contains("plant_id: None,"));
        }

        let toml_str = format!("{MINIMAL}\nplant_id = \" a1b2-c3 \"\n");
        let raw = RawConfig::parse(&toml_str).unwrap();
        assert_eq!(raw.plant_id(), Some("a1b2-c3"));
        assert!(raw.to_rust().contains(r#"plant_id: Some("a1b2-c3"),"#));
    }

    #[test]
    fn template_is_a_valid_config() {
        let raw = RawConfig::parse(include_str!("../cfg.toml.example")).unwrap();
        assert_eq!(raw.validate(), Ok(()));
        assert_eq!(raw.plant_id(), None);
        assert_eq!(raw.device_group, "tent1");
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let toml_str = format!("{MINIMAL}\nsensor_interval = 5000\n");
        assert!(RawConfig::parse(&toml_str).is_err());
    }

    #[test]
    fn soil_overrides_are_checked_against_the_board() {
        let toml_str = format!("{MINIMAL}\nsoil_dry_value = {SOIL_WET_DEFAULT}\n");
        let raw = RawConfig::parse(&toml_str).unwrap();
        assert_eq!(raw.validate(), Err(validate::Error::SoilEndpointsEqual));

        let too_high = u32::from(ADC_MAX) + 1;
        let toml_str = format!("{MINIMAL}\nsoil_wet_value = {too_high}\n");
        let raw = RawConfig::parse(&toml_str).unwrap();
        assert!(matches!(
            raw.validate(),
            Err(validate::Error::SoilEndpointOutOfRange(_))
        ));
    }

    #[test]
    fn generated_source_carries_every_value() {
        let toml_str = format!(
            "{MINIMAL}\nsoil_dry_value = 3900\ntemperature_offset = -1.5\n"
        );
        let code = RawConfig::parse(&toml_str).unwrap().to_rust();
        assert!(code.contains(r#"wifi_ssid: "greenhouse","#));
        assert!(code.contains(r#"server_url: "https://plants.example.com","#));
        assert!(code.contains("sensor_interval_ms: 30000,"));
        assert!(code.contains("soil_dry_value: Some(3900),"));
        assert!(code.contains("soil_wet_value: None,"));
        assert!(code.contains("temperature_offset: -1.5,"));
        assert!(code.contains("humidity_offset: 0.0,"));
    }
}
