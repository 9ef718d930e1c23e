//! Checks for the operator-editable values of `cfg.toml`.
//!
//! `build.rs` includes this file to reject a bad configuration before any code
//! is generated, so it only depends on `core` and `crate::url`.

use core::fmt;

use crate::url::{self, ServerUrl};

/// Longest SSID accepted by the Wi-Fi stack
pub const SSID_MAX_LEN: usize = 32;
/// WPA2 passphrase bounds, an empty passphrase joins an open network
pub const PSK_MIN_LEN: usize = 8;
pub const PSK_MAX_LEN: usize = 63;
pub const URL_MAX_LEN: usize = 128;
pub const IDENTIFIER_MAX_LEN: usize = 64;
pub const DEVICE_NAME_MAX_LEN: usize = 32;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Error {
    EmptySsid,
    SsidTooLong,
    PskLength,
    UrlTooLong,
    NonAsciiUrl,
    Url(url::Error),
    EmptyDeviceGroup,
    InvalidIdentifier(&'static str),
    IdentifierTooLong(&'static str),
    EmptyDeviceName(&'static str),
    DeviceNameTooLong(&'static str),
    ZeroInterval(&'static str),
    NonFiniteOffset(&'static str),
    SoilEndpointsEqual,
    SoilEndpointOutOfRange(u16),
}

/// Every operator value of one configuration, with the soil endpoints already
/// resolved against the board defaults
pub struct Fields<'a> {
    pub wifi_ssid: &'a str,
    pub wifi_psk: &'a str,
    pub server_url: &'a str,
    pub plant_id: Option<&'a str>,
    pub device_group: &'a str,
    pub light_device_name: &'a str,
    pub fan_device_name: &'a str,
    pub pump_device_name: &'a str,
    pub sensor_interval_ms: u32,
    pub device_check_interval_ms: u32,
    pub soil_dry: u16,
    pub soil_wet: u16,
    pub temperature_offset: f32,
    pub humidity_offset: f32,
}

/// Checks all fields in declaration order and reports the first failure
pub fn fields(fields: &Fields<'_>, adc_max: u16) -> Result<(), Error> {
    wifi(fields.wifi_ssid, fields.wifi_psk)?;
    server_url(fields.server_url)?;
    plant_id(fields.plant_id)?;
    device_group(fields.device_group)?;
    device_name("light_device_name", fields.light_device_name)?;
    device_name("fan_device_name", fields.fan_device_name)?;
    device_name("pump_device_name", fields.pump_device_name)?;
    interval("sensor_interval_ms", fields.sensor_interval_ms)?;
    interval("device_check_interval_ms", fields.device_check_interval_ms)?;
    offset("temperature_offset", fields.temperature_offset)?;
    offset("humidity_offset", fields.humidity_offset)?;
    soil_endpoints(fields.soil_dry, fields.soil_wet, adc_max)
}

impl From<url::Error> for Error {
    fn from(error: url::Error) -> Self {
        Self::Url(error)
    }
}

pub fn wifi(ssid: &str, psk: &str) -> Result<(), Error> {
    if ssid.is_empty() {
        return Err(Error::EmptySsid);
    }
    if ssid.len() > SSID_MAX_LEN {
        return Err(Error::SsidTooLong);
    }
    if !psk.is_empty() && !(PSK_MIN_LEN..=PSK_MAX_LEN).contains(&psk.len()) {
        return Err(Error::PskLength);
    }
    Ok(())
}

pub fn server_url(url: &str) -> Result<(), Error> {
    if url.len() > URL_MAX_LEN {
        return Err(Error::UrlTooLong);
    }
    if !url.is_ascii() {
        return Err(Error::NonAsciiUrl);
    }
    ServerUrl::parse(url)?;
    Ok(())
}

pub fn device_group(group: &str) -> Result<(), Error> {
    if group.is_empty() {
        return Err(Error::EmptyDeviceGroup);
    }
    identifier("device_group", group)
}

/// `None` means the node is not assigned to a plant yet
pub fn plant_id(id: Option<&str>) -> Result<(), Error> {
    match id {
        Some(id) => identifier("plant_id", id),
        None => Ok(()),
    }
}

/// Identifiers end up verbatim in JSON payloads and URLs, keep them to `[A-Za-z0-9_-]`
fn identifier(field: &'static str, value: &str) -> Result<(), Error> {
    if value.len() > IDENTIFIER_MAX_LEN {
        return Err(Error::IdentifierTooLong(field));
    }
    let valid = value
        .bytes()
        .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_');
    if !valid {
        return Err(Error::InvalidIdentifier(field));
    }
    Ok(())
}

pub fn device_name(field: &'static str, name: &str) -> Result<(), Error> {
    if name.trim().is_empty() {
        return Err(Error::EmptyDeviceName(field));
    }
    if name.len() > DEVICE_NAME_MAX_LEN {
        return Err(Error::DeviceNameTooLong(field));
    }
    Ok(())
}

pub fn interval(field: &'static str, millis: u32) -> Result<(), Error> {
    if millis == 0 {
        return Err(Error::ZeroInterval(field));
    }
    Ok(())
}

pub fn offset(field: &'static str, value: f32) -> Result<(), Error> {
    if !value.is_finite() {
        return Err(Error::NonFiniteOffset(field));
    }
    Ok(())
}

/// Either polarity is fine, the endpoints only have to differ and fit the ADC
pub fn soil_endpoints(dry: u16, wet: u16, adc_max: u16) -> Result<(), Error> {
    if dry == wet {
        return Err(Error::SoilEndpointsEqual);
    }
    if let Some(value) = [dry, wet].into_iter().find(|&v| v > adc_max) {
        return Err(Error::SoilEndpointOutOfRange(value));
    }
    Ok(())
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptySsid => write!(f, "wifi_ssid must not be empty"),
            Error::SsidTooLong => write!(f, "wifi_ssid is longer than {SSID_MAX_LEN} bytes"),
            Error::PskLength => write!(
                f,
                "wifi_psk must be empty or {PSK_MIN_LEN} to {PSK_MAX_LEN} bytes long"
            ),
            Error::UrlTooLong => write!(f, "server_url is longer than {URL_MAX_LEN} bytes"),
            Error::NonAsciiUrl => write!(f, "server_url must be ASCII"),
            Error::Url(e) => write!(f, "server_url: {e}"),
            Error::EmptyDeviceGroup => write!(f, "device_group must not be empty"),
            Error::InvalidIdentifier(field) => {
                write!(f, "{field} may only contain letters, digits, '-' and '_'")
            }
            Error::IdentifierTooLong(field) => {
                write!(f, "{field} is longer than {IDENTIFIER_MAX_LEN} bytes")
            }
            Error::EmptyDeviceName(field) => write!(f, "{field} must not be empty"),
            Error::DeviceNameTooLong(field) => {
                write!(f, "{field} is longer than {DEVICE_NAME_MAX_LEN} bytes")
            }
            Error::ZeroInterval(field) => write!(f, "{field} must be greater than zero"),
            Error::NonFiniteOffset(field) => write!(f, "{field} must be a finite number"),
            Error::SoilEndpointsEqual => {
                write!(f, "soil_dry_value and soil_wet_value must differ")
            }
            Error::SoilEndpointOutOfRange(v) => {
                write!(f, "soil endpoint {v} exceeds the board's ADC range")
            }
        }
    }
}
