#![cfg_attr(not(test), no_std)]

extern crate alloc;

use core::fmt::Display;

use serde::{Deserialize, Serialize};

pub mod capabilities;
pub mod device;

pub use capabilities::{CapabilityId, ids};
pub use device::{DeviceKind, DeviceState};

pub use compact_str::{CompactString, ToCompactString};

/// Something the controller did to a device
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Action {
    PowerOn,
    PowerOff,
    ConnectInput { source: CompactString },
    SetBrightness { level: u8 },
    SetTemperature { celsius: i32 },
    /// Result of an attendance scan, in number of students present
    ScanAttendance { present: u32 },
}

impl Action {
    pub const fn capability(&self) -> CapabilityId {
        match self {
            Action::PowerOn | Action::PowerOff => CapabilityId::PowerControl,
            Action::ConnectInput { .. } => CapabilityId::ConnectInput,
            Action::SetBrightness { .. } => CapabilityId::BrightnessControl,
            Action::SetTemperature { .. } => CapabilityId::TemperatureControl,
            Action::ScanAttendance { .. } => CapabilityId::AttendanceScanning,
        }
    }
}

impl Display for Action {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Action::PowerOn => write!(f, "power on"),
            Action::PowerOff => write!(f, "power off"),
            Action::ConnectInput { source } => write!(f, "input -> {source}"),
            Action::SetBrightness { level } => write!(f, "brightness {level}"),
            Action::SetTemperature { celsius } => write!(f, "temperature {celsius}C"),
            Action::ScanAttendance { present } => write!(f, "attendance scanned: present={present}"),
        }
    }
}

/// One capability invocation, attributed to the device that served it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub device: DeviceKind,
    pub action: Action,
}

impl Display for Step {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}: {}", self.device, self.action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_format() {
        assert_eq!(
            serde_json::to_value(Action::PowerOn).unwrap(),
            serde_json::json!({ "op": "power_on" })
        );

        assert_eq!(
            serde_json::to_value(Action::ConnectInput { source: "HDMI-1".into() }).unwrap(),
            serde_json::json!({ "op": "connect_input", "source": "HDMI-1" })
        );

        assert_eq!(
            serde_json::to_value(Action::SetTemperature { celsius: -4 }).unwrap(),
            serde_json::json!({ "op": "set_temperature", "celsius": -4 })
        );
    }

    #[test]
    fn step_format() {
        let step = Step {
            device: DeviceKind::AttendanceScanner,
            action: Action::ScanAttendance { present: 3 },
        };

        assert_eq!(
            serde_json::to_value(&step).unwrap(),
            serde_json::json!({
                "device": "attendance_scanner",
                "action": { "op": "scan_attendance", "present": 3 },
            })
        );

        assert_eq!(step.to_string(), "attendance_scanner: attendance scanned: present=3");
    }

    #[test]
    fn action_capability() {
        assert_eq!(Action::PowerOff.capability(), CapabilityId::PowerControl);
        assert_eq!(Action::SetBrightness { level: 60 }.capability(), CapabilityId::BrightnessControl);
        assert_eq!(
            Action::ScanAttendance { present: 0 }.capability(),
            CapabilityId::AttendanceScanning
        );
    }
}
