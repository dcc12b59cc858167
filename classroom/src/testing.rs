//! Recording fake devices for tests

use classroom_common::{Action, CapabilityId, DeviceKind, DeviceState, Step};

use crate::{
    Shared,
    capabilities::{
        Attendance, AttendanceScanning, Brightness, BrightnessControl, ConnectInput, Input, Power,
        PowerControl, Temperature, TemperatureControl,
    },
    devices::{Binder, Device},
};

pub const FAKE_PRESENT: u32 = 7;

/// Invocations shared by every fake device in a test, in call order
#[derive(Clone, Default)]
pub struct Journal(Shared<Vec<Step>>);

impl Journal {
    pub fn steps(&self) -> Vec<Step> {
        self.0.borrow().clone()
    }

    pub fn entries(&self) -> Vec<String> {
        self.0.borrow().iter().map(ToString::to_string).collect()
    }

    fn record(&self, device: DeviceKind, action: Action) {
        self.0.borrow_mut().push(Step { device, action });
    }
}

/// Pretends to be any kind of device, providing exactly the given capabilities
pub struct FakeDevice {
    kind: DeviceKind,
    capabilities: Vec<CapabilityId>,
    journal: Journal,
}

impl FakeDevice {
    pub fn new(kind: DeviceKind, capabilities: &[CapabilityId], journal: &Journal) -> Self {
        Self { kind, capabilities: capabilities.to_vec(), journal: journal.clone() }
    }

    /// Fake with the same capabilities as the real device of that kind
    pub fn like(kind: DeviceKind, journal: &Journal) -> Self {
        let capabilities: &[CapabilityId] = match kind {
            DeviceKind::Projector => &[CapabilityId::PowerControl, CapabilityId::ConnectInput],
            DeviceKind::LightsPanel => {
                &[CapabilityId::BrightnessControl, CapabilityId::PowerControl]
            }
            DeviceKind::AirConditioner => {
                &[CapabilityId::TemperatureControl, CapabilityId::PowerControl]
            }
            DeviceKind::AttendanceScanner => &[CapabilityId::AttendanceScanning],
        };

        Self::new(kind, capabilities, journal)
    }
}

impl PowerControl for FakeDevice {
    fn power_on(&mut self) {
        self.journal.record(self.kind, Action::PowerOn);
    }

    fn power_off(&mut self) {
        self.journal.record(self.kind, Action::PowerOff);
    }
}

impl BrightnessControl for FakeDevice {
    fn set_brightness(&mut self, level: u8) -> u8 {
        self.journal.record(self.kind, Action::SetBrightness { level });
        level
    }
}

impl TemperatureControl for FakeDevice {
    fn set_temperature_c(&mut self, celsius: i32) {
        self.journal.record(self.kind, Action::SetTemperature { celsius });
    }
}

impl ConnectInput for FakeDevice {
    fn connect_input(&mut self, source: &str) {
        self.journal.record(self.kind, Action::ConnectInput { source: source.into() });
    }
}

impl AttendanceScanning for FakeDevice {
    fn scan_attendance(&mut self) -> u32 {
        self.journal.record(self.kind, Action::ScanAttendance { present: FAKE_PRESENT });
        FAKE_PRESENT
    }
}

impl Device for FakeDevice {
    fn kind(&self) -> DeviceKind {
        self.kind
    }

    fn state(&self) -> DeviceState {
        match self.kind {
            DeviceKind::Projector => DeviceState::Projector { on: false, input: None },
            DeviceKind::LightsPanel => DeviceState::LightsPanel { on: false, brightness: 0 },
            DeviceKind::AirConditioner => DeviceState::AirConditioner { on: false, target_c: None },
            DeviceKind::AttendanceScanner => DeviceState::AttendanceScanner { last_present: None },
        }
    }

    fn install(device: &Shared<Self>, binder: &mut Binder<'_>) {
        let capabilities = device.borrow().capabilities.clone();

        for capability in capabilities {
            match capability {
                CapabilityId::PowerControl => {
                    let power: Shared<dyn PowerControl> = device.clone();
                    binder.provide::<Power>(power);
                }
                CapabilityId::BrightnessControl => {
                    let brightness: Shared<dyn BrightnessControl> = device.clone();
                    binder.provide::<Brightness>(brightness);
                }
                CapabilityId::TemperatureControl => {
                    let temperature: Shared<dyn TemperatureControl> = device.clone();
                    binder.provide::<Temperature>(temperature);
                }
                CapabilityId::ConnectInput => {
                    let input: Shared<dyn ConnectInput> = device.clone();
                    binder.provide::<Input>(input);
                }
                CapabilityId::AttendanceScanning => {
                    let attendance: Shared<dyn AttendanceScanning> = device.clone();
                    binder.provide::<Attendance>(attendance);
                }
            }
        }
    }
}
