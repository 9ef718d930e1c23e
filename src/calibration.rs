use crate::board::{ADC_MAX, SOIL_DRY_DEFAULT, SOIL_WET_DEFAULT};
use crate::config::CONFIG;

/// Raw ADC endpoints of the soil sensor.
///
/// Capacitive sensors read lower when wet (`wet < dry`), resistive ones read
/// higher. Both polarities map `dry` to 0 % and `wet` to 100 %.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SoilCalibration {
    pub dry: u16,
    pub wet: u16,
}

impl SoilCalibration {
    pub const fn new(dry: u16, wet: u16) -> Self {
        Self { dry, wet }
    }

    pub const fn is_inverted(&self) -> bool {
        self.wet < self.dry
    }

    /// Moisture in percent, readings outside the calibrated range are clamped
    pub fn moisture_percent(&self, raw: u16) -> u8 {
        let (low, high) = if self.is_inverted() {
            (self.wet, self.dry)
        } else {
            (self.dry, self.wet)
        };

        let span = u32::from(high - low);
        if span == 0 {
            return 0;
        }

        let raw = raw.clamp(low, high);
        let from_dry = u32::from(if self.is_inverted() {
            self.dry - raw
        } else {
            raw - self.dry
        });

        // rounded to the nearest percent
        ((from_dry * 100 + span / 2) / span) as u8
    }
}

/// Additive corrections for a DHT sensor that reads high or low
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trim {
    /// °C
    pub temperature: f32,
    /// Percentage points
    pub humidity: f32,
}

impl Trim {
    pub fn apply_temperature(&self, celsius: f32) -> f32 {
        celsius + self.temperature
    }

    pub fn apply_humidity(&self, percent: f32) -> f32 {
        (percent + self.humidity).clamp(0.0, 100.0)
    }
}

/// Soil endpoints of the selected board, with `cfg.toml` overrides applied
pub const SOIL: SoilCalibration = SoilCalibration::new(
    match CONFIG.soil_dry_value {
        Some(value) => value,
        None => SOIL_DRY_DEFAULT,
    },
    match CONFIG.soil_wet_value {
        Some(value) => value,
        None => SOIL_WET_DEFAULT,
    },
);

pub const TRIM: Trim = Trim {
    temperature: CONFIG.temperature_offset,
    humidity: CONFIG.humidity_offset,
};

const _: () = assert!(
    SOIL.dry != SOIL.wet,
    "soil_dry_value and soil_wet_value must differ"
);
const _: () = assert!(
    SOIL.dry <= ADC_MAX && SOIL.wet <= ADC_MAX,
    "soil endpoint exceeds the board's ADC range"
);
