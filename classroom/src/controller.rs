use classroom_common::{Action, CompactString, DeviceKind, Step};
use serde::{Deserialize, Serialize};

use crate::{
    Registry, Result,
    capabilities::{Attendance, Brightness, Input, Power, Temperature},
};

/// Devices switched off by [`ClassroomController::end_class`], in order
pub const SHUTDOWN_ORDER: [DeviceKind; 3] = [
    DeviceKind::Projector,
    DeviceKind::LightsPanel,
    DeviceKind::AirConditioner,
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassSettings {
    /// Projector source
    pub input: CompactString,
    /// Lights level, 0-100
    pub brightness: u8,
    pub temperature_c: i32,
}

impl Default for ClassSettings {
    fn default() -> Self {
        Self {
            input: CompactString::const_new("HDMI-1"),
            brightness: 60,
            temperature_c: 24,
        }
    }
}

/// Steps performed by one procedure, in the order they happened
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Transcript {
    steps: Vec<Step>,
}

impl Transcript {
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Head count from the attendance scan, if there was one
    pub fn present(&self) -> Option<u32> {
        self.steps.iter().find_map(|step| match step.action {
            Action::ScanAttendance { present } => Some(present),
            _ => None,
        })
    }

    fn record(&mut self, device: DeviceKind, action: Action) {
        tracing::info!(%device, %action, "Invoked capability");
        self.steps.push(Step { device, action });
    }
}

/// Runs the start and end of a class against whatever devices are registered
///
/// The controller only knows capabilities, never concrete devices. Both
/// procedures stop at the first capability that cannot be resolved; steps
/// already taken are not undone.
pub struct ClassroomController<'a> {
    registry: &'a Registry,
    settings: ClassSettings,
}

impl<'a> ClassroomController<'a> {
    pub fn new(registry: &'a Registry) -> Self {
        Self::with_settings(registry, ClassSettings::default())
    }

    pub fn with_settings(registry: &'a Registry, settings: ClassSettings) -> Self {
        Self { registry, settings }
    }

    pub fn settings(&self) -> &ClassSettings {
        &self.settings
    }

    pub fn start_class(&self) -> Result<Transcript> {
        let mut transcript = Transcript::default();
        self.start_class_into(&mut transcript)?;
        Ok(transcript)
    }

    /// Like [`start_class`](Self::start_class), but steps land in `transcript`
    /// as they happen, so they survive a failure part way through
    pub fn start_class_into(&self, transcript: &mut Transcript) -> Result<()> {
        let _span = tracing::info_span!("start_class").entered();

        let power = self.registry.resolve::<Power>()?;
        power.borrow_mut().power_on();
        transcript.record(power.kind(), Action::PowerOn);

        let input = self.registry.resolve::<Input>()?;
        input.borrow_mut().connect_input(&self.settings.input);
        transcript.record(input.kind(), Action::ConnectInput {
            source: self.settings.input.clone(),
        });

        let brightness = self.registry.resolve::<Brightness>()?;
        let level = brightness
            .borrow_mut()
            .set_brightness(self.settings.brightness);
        transcript.record(brightness.kind(), Action::SetBrightness { level });

        let temperature = self.registry.resolve::<Temperature>()?;
        temperature
            .borrow_mut()
            .set_temperature_c(self.settings.temperature_c);
        transcript.record(temperature.kind(), Action::SetTemperature {
            celsius: self.settings.temperature_c,
        });

        let scanner = self.registry.resolve::<Attendance>()?;
        let present = scanner.borrow_mut().scan_attendance();
        transcript.record(scanner.kind(), Action::ScanAttendance { present });

        Ok(())
    }

    pub fn end_class(&self) -> Result<Transcript> {
        let mut transcript = Transcript::default();
        self.end_class_into(&mut transcript)?;
        Ok(transcript)
    }

    pub fn end_class_into(&self, transcript: &mut Transcript) -> Result<()> {
        let _span = tracing::info_span!("end_class").entered();

        for kind in SHUTDOWN_ORDER {
            let power = self.registry.resolve_on::<Power>(kind)?;
            power.borrow_mut().power_off();
            transcript.record(kind, Action::PowerOff);
        }

        Ok(())
    }
}
