use crate::board::PINS;
use crate::config::CONFIG;

/// Relay-driven actuators of a node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Device {
    Light,
    Fan,
    Pump,
}

impl Device {
    pub const ALL: [Device; 3] = [Device::Light, Device::Fan, Device::Pump];

    pub fn relay_pin(self) -> u8 {
        match self {
            Device::Light => PINS.light_relay,
            Device::Fan => PINS.fan_relay,
            Device::Pump => PINS.pump_relay,
        }
    }

    /// Operator-chosen label from `cfg.toml`
    pub fn display_name(self) -> &'static str {
        match self {
            Device::Light => CONFIG.light_device_name,
            Device::Fan => CONFIG.fan_device_name,
            Device::Pump => CONFIG.pump_device_name,
        }
    }

    /// `deviceType` used by the server's device state records
    pub fn device_type(self) -> &'static str {
        match self {
            Device::Light => "light",
            Device::Fan => "fan",
            Device::Pump => "pump",
        }
    }

    pub fn from_device_type(device_type: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|device| device.device_type() == device_type)
    }
}

impl core::fmt::Display for Device {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.display_name())
    }
}
