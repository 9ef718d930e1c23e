use core::fmt::Write;

use heapless::String;

use crate::calibration::{SoilCalibration, Trim, SOIL, TRIM};
use crate::config::CONFIG;
use crate::constants::*;
use crate::url::{self, ServerUrl};

#[derive(Debug, PartialEq)]
pub enum Error {
    Url(url::Error),
    Format,
    /// Temperature or humidity is NaN or infinite, e.g. after a failed DHT read
    InvalidReading,
}

impl From<url::Error> for Error {
    fn from(error: url::Error) -> Self {
        Self::Url(error)
    }
}

impl From<core::fmt::Error> for Error {
    fn from(_: core::fmt::Error) -> Self {
        Self::Format
    }
}

/// Sample as read by the firmware, before trims and soil calibration
#[derive(Debug, Clone, Copy)]
pub struct Reading {
    pub temperature: f32,
    pub humidity: f32,
    pub soil_raw: u16,
}

pub fn sensor_data_url() -> Result<String<URL_BUFFER_SIZE>, Error> {
    endpoint(API_SENSOR_DATA_PATH)
}

pub fn devices_url() -> Result<String<URL_BUFFER_SIZE>, Error> {
    endpoint(API_DEVICES_PATH)
}

/// Joins the configured server URL with an absolute API path
pub fn endpoint(path: &str) -> Result<String<URL_BUFFER_SIZE>, Error> {
    join(CONFIG.server_url, path)
}

fn join(base: &str, path: &str) -> Result<String<URL_BUFFER_SIZE>, Error> {
    let url = ServerUrl::parse(base)?;
    let mut out: String<URL_BUFFER_SIZE> = String::new();

    write!(out, "{}://{}", url.scheme.as_str(), url.host)?;
    if !url.has_default_port() {
        write!(out, ":{}", url.port)?;
    }
    write!(out, "{}/{}", url.path, path.trim_start_matches('/'))?;

    Ok(out)
}

/// JSON body for `POST /api/sensor-data`
pub fn format_sensor_payload(reading: &Reading) -> Result<String<PAYLOAD_BUFFER_SIZE>, Error> {
    format_payload(
        reading,
        &TRIM,
        &SOIL,
        CONFIG.device_group,
        CONFIG.plant_id,
    )
}

fn format_payload(
    reading: &Reading,
    trim: &Trim,
    soil: &SoilCalibration,
    device_group: &str,
    plant_id: Option<&str>,
) -> Result<String<PAYLOAD_BUFFER_SIZE>, Error> {
    // humidity is clamped after trimming, so check the raw values
    if !reading.temperature.is_finite() || !reading.humidity.is_finite() {
        return Err(Error::InvalidReading);
    }
    let temperature = trim.apply_temperature(reading.temperature);
    let humidity = trim.apply_humidity(reading.humidity);

    let mut payload: String<PAYLOAD_BUFFER_SIZE> = String::new();

    // the server stores whole numbers
    write!(
        payload,
        "{{\"temperature\":{},\"humidity\":{},\"soilMoisture\":{}",
        round(temperature),
        round(humidity),
        soil.moisture_percent(reading.soil_raw)
    )?;
    write!(payload, ",\"deviceGroup\":\"{}\"", device_group)?;
    if let Some(id) = plant_id {
        write!(payload, ",\"plantId\":\"{}\"", id)?;
    }
    write!(payload, "}}")?;

    Ok(payload)
}

// half away from zero; `f32::round` needs std
fn round(value: f32) -> i32 {
    let whole = value as i32;
    // exact for any f32 that fits an i32
    let fraction = value - whole as f32;
    if fraction >= 0.5 {
        whole + 1
    } else if fraction <= -0.5 {
        whole - 1
    } else {
        whole
    }
}
