//! Capability tags
//!
//! A capability is a behaviour contract with no state of its own. Devices
//! advertise the capabilities they provide, and the registry hands out devices
//! by capability.

use core::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

pub mod ids {
    pub const POWER_CONTROL: &str = "classroom.power_control";
    pub const BRIGHTNESS_CONTROL: &str = "classroom.brightness_control";
    pub const TEMPERATURE_CONTROL: &str = "classroom.temperature_control";
    pub const CONNECT_INPUT: &str = "classroom.connect_input";
    pub const ATTENDANCE_SCANNING: &str = "classroom.attendance_scanning";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CapabilityId {
    #[serde(rename = "classroom.power_control")]
    PowerControl,
    #[serde(rename = "classroom.brightness_control")]
    BrightnessControl,
    #[serde(rename = "classroom.temperature_control")]
    TemperatureControl,
    #[serde(rename = "classroom.connect_input")]
    ConnectInput,
    #[serde(rename = "classroom.attendance_scanning")]
    AttendanceScanning,
}

impl CapabilityId {
    pub const ALL: [Self; 5] = [
        Self::PowerControl,
        Self::BrightnessControl,
        Self::TemperatureControl,
        Self::ConnectInput,
        Self::AttendanceScanning,
    ];

    /// Wire id, eg. `classroom.power_control`
    pub const fn id(self) -> &'static str {
        match self {
            Self::PowerControl => ids::POWER_CONTROL,
            Self::BrightnessControl => ids::BRIGHTNESS_CONTROL,
            Self::TemperatureControl => ids::TEMPERATURE_CONTROL,
            Self::ConnectInput => ids::CONNECT_INPUT,
            Self::AttendanceScanning => ids::ATTENDANCE_SCANNING,
        }
    }

    /// Contract name, eg. `PowerControl`
    pub const fn name(self) -> &'static str {
        match self {
            Self::PowerControl => "PowerControl",
            Self::BrightnessControl => "BrightnessControl",
            Self::TemperatureControl => "TemperatureControl",
            Self::ConnectInput => "ConnectInput",
            Self::AttendanceScanning => "AttendanceScanning",
        }
    }
}

impl Display for CapabilityId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CapabilityId {
    type Err = &'static str;

    /// Accepts either the wire id or the contract name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|cap| cap.id() == s || cap.name() == s)
            .ok_or("unknown capability")
    }
}
