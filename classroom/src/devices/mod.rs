use classroom_common::{CapabilityId, DeviceKind, DeviceState};

use crate::{
    Shared,
    capabilities::{Capability, Slots},
};

mod air_conditioner;
mod attendance_scanner;
mod lights_panel;
mod projector;

pub use self::{
    air_conditioner::AirConditioner, attendance_scanner::AttendanceScanner,
    lights_panel::LightsPanel, projector::Projector,
};

pub trait Device: 'static {
    fn kind(&self) -> DeviceKind;

    fn state(&self) -> DeviceState;

    /// Hands this device to the binder once for every capability it provides
    fn install(device: &Shared<Self>, binder: &mut Binder<'_>)
    where
        Self: Sized;
}

/// Collects the capabilities of a device while it is being registered
pub struct Binder<'a> {
    kind: DeviceKind,
    slots: &'a mut Slots,
    provided: Vec<CapabilityId>,
}

impl<'a> Binder<'a> {
    pub(crate) fn new(kind: DeviceKind, slots: &'a mut Slots) -> Self {
        Self { kind, slots, provided: Vec::new() }
    }

    pub fn provide<C: Capability>(&mut self, device: Shared<C::Target>) -> &mut Self {
        let capability = C::ID;

        if self.provided.contains(&capability) {
            tracing::warn!(device = %self.kind, %capability, "Capability provided twice");
            return self;
        }

        self.slots
            .get_mut::<C>()
            .push(crate::Bound::new(self.kind, device));
        self.provided.push(capability);

        self
    }

    pub(crate) fn finish(self) -> Vec<CapabilityId> {
        self.provided
    }
}
