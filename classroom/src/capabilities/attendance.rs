capability! {
    pub struct Attendance: dyn AttendanceScanning, id = AttendanceScanning, slot = attendance;
}

pub trait AttendanceScanning {
    /// Returns the number of students present
    fn scan_attendance(&mut self) -> u32;
}
