use classroom_common::{DeviceKind, DeviceState};

use super::{Binder, Device};
use crate::{
    Shared,
    capabilities::{Attendance, AttendanceScanning},
};

/// Scanner that reports a fixed head count
#[derive(Debug)]
pub struct AttendanceScanner {
    present: u32,
    last_present: Option<u32>,
}

impl AttendanceScanner {
    pub fn new(present: u32) -> Self {
        Self { present, last_present: None }
    }

    pub fn last_present(&self) -> Option<u32> {
        self.last_present
    }
}

impl AttendanceScanning for AttendanceScanner {
    fn scan_attendance(&mut self) -> u32 {
        self.last_present = Some(self.present);
        tracing::info!(present = self.present, "Attendance scanned");
        self.present
    }
}

impl Device for AttendanceScanner {
    fn kind(&self) -> DeviceKind {
        DeviceKind::AttendanceScanner
    }

    fn state(&self) -> DeviceState {
        DeviceState::AttendanceScanner { last_present: self.last_present }
    }

    fn install(device: &Shared<Self>, binder: &mut Binder<'_>) {
        let attendance: Shared<dyn AttendanceScanning> = device.clone();

        binder.provide::<Attendance>(attendance);
    }
}
