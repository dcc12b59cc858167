use core::{
    cell::{Ref, RefMut},
    fmt::Debug,
};

use classroom_common::{CapabilityId, DeviceKind};

use crate::Shared;

macro_rules! capability {
    (
        $( #[ $meta:meta ] )*
        pub struct $marker:ident: dyn $contract:ident, id = $id:ident, slot = $slot:ident;
    ) => {
        $( #[ $meta ] )*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub struct $marker;

        impl $crate::capabilities::sealed::Sealed for $marker {}

        impl $crate::capabilities::Capability for $marker {
            const ID: ::classroom_common::CapabilityId = ::classroom_common::CapabilityId::$id;

            type Target = dyn $contract;

            fn slot(slots: &$crate::capabilities::Slots) -> &$crate::capabilities::Slot<Self> {
                &slots.$slot
            }

            fn slot_mut(
                slots: &mut $crate::capabilities::Slots,
            ) -> &mut $crate::capabilities::Slot<Self> {
                &mut slots.$slot
            }
        }
    };
}

pub mod attendance;
pub mod brightness;
pub mod input;
pub mod power;
pub mod temperature;

pub use self::{
    attendance::{Attendance, AttendanceScanning},
    brightness::{Brightness, BrightnessControl},
    input::{ConnectInput, Input},
    power::{Power, PowerControl},
    temperature::{Temperature, TemperatureControl},
};

pub(crate) mod sealed {
    pub trait Sealed {}
}

/// Marker for a behaviour contract that devices can provide
///
/// `Target` is the contract's trait object, so a resolved capability is
/// already typed to the contract and never needs a cast.
pub trait Capability: sealed::Sealed + Copy + 'static {
    const ID: CapabilityId;

    type Target: ?Sized + 'static;

    #[doc(hidden)]
    fn slot(slots: &Slots) -> &Slot<Self>;

    #[doc(hidden)]
    fn slot_mut(slots: &mut Slots) -> &mut Slot<Self>;
}

/// A device resolved for capability `C`
pub struct Bound<C: Capability> {
    kind: DeviceKind,
    device: Shared<C::Target>,
}

impl<C: Capability> Bound<C> {
    pub(crate) fn new(kind: DeviceKind, device: Shared<C::Target>) -> Self {
        Self { kind, device }
    }

    /// Kind of the device serving this capability
    pub fn kind(&self) -> DeviceKind {
        self.kind
    }

    pub fn borrow(&self) -> Ref<'_, C::Target> {
        self.device.borrow()
    }

    pub fn borrow_mut(&self) -> RefMut<'_, C::Target> {
        self.device.borrow_mut()
    }
}

impl<C: Capability> Clone for Bound<C> {
    fn clone(&self) -> Self {
        Self { kind: self.kind, device: self.device.clone() }
    }
}

impl<C: Capability> Debug for Bound<C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Bound")
            .field("capability", &C::ID)
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

/// Providers of one capability, in registration order
pub struct Slot<C: Capability> {
    entries: Vec<Bound<C>>,
}

impl<C: Capability> Slot<C> {
    pub(crate) fn push(&mut self, bound: Bound<C>) {
        self.entries.push(bound);
    }

    pub(crate) fn first(&self) -> Option<&Bound<C>> {
        self.entries.first()
    }

    pub(crate) fn on(&self, kind: DeviceKind) -> Option<&Bound<C>> {
        self.entries.iter().find(|bound| bound.kind == kind)
    }

    pub(crate) fn kinds(&self) -> Vec<DeviceKind> {
        self.entries.iter().map(|bound| bound.kind).collect()
    }
}

impl<C: Capability> Default for Slot<C> {
    fn default() -> Self {
        Self { entries: Vec::new() }
    }
}

/// One slot per capability, filled when devices are registered
#[derive(Default)]
pub struct Slots {
    power: Slot<Power>,
    brightness: Slot<Brightness>,
    temperature: Slot<Temperature>,
    input: Slot<Input>,
    attendance: Slot<Attendance>,
}

impl Slots {
    pub(crate) fn get<C: Capability>(&self) -> &Slot<C> {
        C::slot(self)
    }

    pub(crate) fn get_mut<C: Capability>(&mut self) -> &mut Slot<C> {
        C::slot_mut(self)
    }

    /// Kinds of the devices providing `capability`, in registration order
    pub(crate) fn kinds(&self, capability: CapabilityId) -> Vec<DeviceKind> {
        match capability {
            CapabilityId::PowerControl => self.power.kinds(),
            CapabilityId::BrightnessControl => self.brightness.kinds(),
            CapabilityId::TemperatureControl => self.temperature.kinds(),
            CapabilityId::ConnectInput => self.input.kinds(),
            CapabilityId::AttendanceScanning => self.attendance.kinds(),
        }
    }
}
