use core::{fmt::Display, str::FromStr};

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

/// The closed set of devices a classroom can be fitted with
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceKind {
    Projector,
    LightsPanel,
    AirConditioner,
    AttendanceScanner,
}

impl DeviceKind {
    pub const ALL: [Self; 4] = [
        Self::Projector,
        Self::LightsPanel,
        Self::AirConditioner,
        Self::AttendanceScanner,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Projector => "projector",
            Self::LightsPanel => "lights_panel",
            Self::AirConditioner => "air_conditioner",
            Self::AttendanceScanner => "attendance_scanner",
        }
    }
}

impl Display for DeviceKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeviceKind {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or("unknown device kind")
    }
}

/// Snapshot of a device's internal state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DeviceState {
    Projector {
        on: bool,
        #[serde(skip_serializing_if = "Option::is_none")]
        input: Option<CompactString>,
    },
    LightsPanel {
        on: bool,
        /// Brightness level (0-100)
        brightness: u8,
    },
    AirConditioner {
        on: bool,
        /// Target temperature in degrees Celsius, if one was ever set
        #[serde(skip_serializing_if = "Option::is_none")]
        target_c: Option<i32>,
    },
    AttendanceScanner {
        #[serde(skip_serializing_if = "Option::is_none")]
        last_present: Option<u32>,
    },
}

impl DeviceState {
    pub const fn kind(&self) -> DeviceKind {
        match self {
            DeviceState::Projector { .. } => DeviceKind::Projector,
            DeviceState::LightsPanel { .. } => DeviceKind::LightsPanel,
            DeviceState::AirConditioner { .. } => DeviceKind::AirConditioner,
            DeviceState::AttendanceScanner { .. } => DeviceKind::AttendanceScanner,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn device_kind_from_str() {
        assert_eq!("projector".parse::<DeviceKind>(), Ok(DeviceKind::Projector));
        assert_eq!("lights_panel".parse::<DeviceKind>(), Ok(DeviceKind::LightsPanel));
        assert_eq!("air_conditioner".parse::<DeviceKind>(), Ok(DeviceKind::AirConditioner));
        assert_eq!(
            "attendance_scanner".parse::<DeviceKind>(),
            Ok(DeviceKind::AttendanceScanner)
        );
        assert_eq!("air-conditioner".parse::<DeviceKind>(), Err("unknown device kind"));
        assert_eq!("lights".parse::<DeviceKind>(), Err("unknown device kind"));
        assert_eq!("projector_".parse::<DeviceKind>(), Err("unknown device kind"));
    }

    #[test]
    fn device_kind_serde() {
        assert_eq!(
            serde_json::to_value(DeviceKind::AirConditioner).unwrap(),
            serde_json::json!("air_conditioner")
        );
    }

    #[test]
    fn device_state_format() {
        assert_eq!(
            serde_json::to_value(DeviceState::Projector { on: true, input: Some("HDMI-1".into()) })
                .unwrap(),
            serde_json::json!({ "kind": "projector", "on": true, "input": "HDMI-1" })
        );

        assert_eq!(
            serde_json::to_value(DeviceState::AirConditioner { on: false, target_c: None })
                .unwrap(),
            serde_json::json!({ "kind": "air_conditioner", "on": false })
        );

        assert_eq!(
            DeviceState::LightsPanel { on: true, brightness: 60 }.kind(),
            DeviceKind::LightsPanel
        );
    }
}
