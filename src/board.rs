//! Board-dependent pin map and soil ADC range.
//!
//! Exactly one of the `esp32` or `esp8266` features selects the block below.
//!
//! Signal          | ESP32   | ESP8266 (NodeMCU)
//! ----------------+---------+------------------
//! DHT data        | GPIO4   | GPIO2  (D4)
//! Soil moisture   | GPIO34  | A0
//! Light relay     | GPIO18  | GPIO12 (D6)
//! Fan relay       | GPIO19  | GPIO13 (D7)
//! Pump relay      | GPIO21  | GPIO14 (D5)
//! Status LED      | GPIO2   | GPIO16 (D0)

#[cfg(not(any(feature = "esp32", feature = "esp8266")))]
compile_error!("no board family selected: enable the `esp32` or the `esp8266` feature");

#[cfg(all(feature = "esp32", feature = "esp8266"))]
compile_error!("features `esp32` and `esp8266` are mutually exclusive, enable only one");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardFamily {
    Esp32,
    Esp8266,
}

/// Analog input feeding the soil sensor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalogInput {
    Gpio(u8),
    /// The ESP8266's single ADC pin, which has no GPIO number
    A0,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinMap {
    pub sensor: u8,
    pub soil: AnalogInput,
    pub light_relay: u8,
    pub fan_relay: u8,
    pub pump_relay: u8,
    pub status_led: u8,
}

impl BoardFamily {
    pub const fn name(self) -> &'static str {
        match self {
            BoardFamily::Esp32 => "ESP32",
            BoardFamily::Esp8266 => "ESP8266",
        }
    }

    /// Highest raw value the soil ADC path can report
    pub const fn adc_max(self) -> u16 {
        match self {
            // 12-bit
            BoardFamily::Esp32 => 4095,
            // 10-bit, the dry endpoint sits one past the top reading
            BoardFamily::Esp8266 => 1024,
        }
    }

    pub const fn is_output_gpio(self, pin: u8) -> bool {
        // GPIO6..=GPIO11 drive the SPI flash on both families
        let flash = pin >= 6 && pin <= 11;
        match self {
            // GPIO20, GPIO24 and GPIO28..=GPIO31 are not bonded out,
            // GPIO34..=GPIO39 are input only
            BoardFamily::Esp32 => {
                pin <= 33 && !flash && pin != 20 && pin != 24 && !(pin >= 28 && pin <= 31)
            }
            BoardFamily::Esp8266 => pin <= 16 && !flash,
        }
    }

    pub const fn is_adc_input(self, input: AnalogInput) -> bool {
        match (self, input) {
            // ADC2 is unusable while Wi-Fi is active, only ADC1 channels qualify
            (BoardFamily::Esp32, AnalogInput::Gpio(pin)) => pin >= 32 && pin <= 39,
            (BoardFamily::Esp8266, AnalogInput::A0) => true,
            _ => false,
        }
    }
}

impl PinMap {
    /// Digital outputs: the three relays followed by the status LED
    pub const fn outputs(&self) -> [u8; 4] {
        [
            self.light_relay,
            self.fan_relay,
            self.pump_relay,
            self.status_led,
        ]
    }

    /// Every pin usable on `board` and no digital pin assigned twice
    pub const fn fits(&self, board: BoardFamily) -> bool {
        if !board.is_adc_input(self.soil) || !board.is_output_gpio(self.sensor) {
            return false;
        }

        let outputs = self.outputs();
        let mut i = 0;
        while i < outputs.len() {
            if !board.is_output_gpio(outputs[i]) || outputs[i] == self.sensor {
                return false;
            }
            let mut j = i + 1;
            while j < outputs.len() {
                if outputs[i] == outputs[j] {
                    return false;
                }
                j += 1;
            }
            i += 1;
        }
        true
    }
}

#[cfg(feature = "esp32")]
mod family {
    use super::{AnalogInput, BoardFamily, PinMap};

    pub const BOARD: BoardFamily = BoardFamily::Esp32;

    pub const PINS: PinMap = PinMap {
        sensor: 4,
        soil: AnalogInput::Gpio(34),
        light_relay: 18,
        fan_relay: 19,
        pump_relay: 21,
        status_led: 2,
    };

    /// Raw reading in completely dry soil
    pub const SOIL_DRY_DEFAULT: u16 = 4095;
    /// Raw reading in saturated soil
    pub const SOIL_WET_DEFAULT: u16 = 1500;
}

#[cfg(all(feature = "esp8266", not(feature = "esp32")))]
mod family {
    use super::{AnalogInput, BoardFamily, PinMap};

    pub const BOARD: BoardFamily = BoardFamily::Esp8266;

    pub const PINS: PinMap = PinMap {
        sensor: 2,       // D4
        soil: AnalogInput::A0,
        light_relay: 12, // D6
        fan_relay: 13,   // D7
        pump_relay: 14,  // D5
        status_led: 16,  // D0, built-in LED
    };

    /// Raw reading in completely dry soil
    pub const SOIL_DRY_DEFAULT: u16 = 1024;
    /// Raw reading in saturated soil
    pub const SOIL_WET_DEFAULT: u16 = 300;
}

#[cfg(any(feature = "esp32", feature = "esp8266"))]
pub use family::*;

#[cfg(any(feature = "esp32", feature = "esp8266"))]
pub const ADC_MAX: u16 = BOARD.adc_max();

#[cfg(any(feature = "esp32", feature = "esp8266"))]
const _: () = assert!(
    PINS.fits(BOARD),
    "pin map does not fit the selected board family"
);
