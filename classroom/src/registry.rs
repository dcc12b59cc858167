use core::cell::RefCell;
use std::rc::Rc;

use classroom_common::{CapabilityId, DeviceKind, DeviceState};

use crate::{
    Error, Result, Shared,
    capabilities::{Bound, Capability, Slots},
    devices::{Binder, Device},
};

/// A device as it was registered, with the capabilities it provides
pub struct Registered {
    kind: DeviceKind,
    capabilities: Vec<CapabilityId>,
    device: Shared<dyn Device>,
}

impl Registered {
    pub fn kind(&self) -> DeviceKind {
        self.kind
    }

    pub fn capabilities(&self) -> &[CapabilityId] {
        &self.capabilities
    }

    pub fn state(&self) -> DeviceState {
        self.device.borrow().state()
    }
}

/// Devices indexed by the capabilities they provide
///
/// Each capability resolves to the first device registered for it. A later
/// device providing the same capability is only reachable through
/// [`Registry::resolve_on`].
#[derive(Default)]
pub struct Registry {
    devices: Vec<Registered>,
    slots: Slots,
}

fn found<C: Capability>(bound: Option<&Bound<C>>, device: Option<DeviceKind>) -> Result<Bound<C>> {
    let capability = C::ID;

    match bound {
        Some(bound) => {
            tracing::debug!(%capability, device = %bound.kind(), "Resolved capability");
            Ok(bound.clone())
        }
        None => {
            tracing::debug!(%capability, ?device, "Capability not found");
            Err(Error::CapabilityNotFound { capability, device })
        }
    }
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a device, returning a handle for inspecting it later
    pub fn add<D: Device>(&mut self, device: D) -> Shared<D> {
        let kind = device.kind();
        let device = Rc::new(RefCell::new(device));

        let mut binder = Binder::new(kind, &mut self.slots);
        D::install(&device, &mut binder);
        let capabilities = binder.finish();

        for &capability in &capabilities {
            let kinds = self.slots.kinds(capability);

            if kinds.iter().filter(|&&k| k == kind).count() > 1 {
                tracing::warn!(
                    device = %kind,
                    %capability,
                    "Capability already provided by an earlier device of the same kind, unreachable",
                );
            } else if kinds.len() > 1 {
                tracing::debug!(device = %kind, %capability, "Capability only reachable by kind");
            }
        }

        tracing::debug!(device = %kind, ?capabilities, "Registered device");

        self.devices.push(Registered { kind, capabilities, device: device.clone() });

        device
    }

    /// First registered provider of `C`
    pub fn resolve<C: Capability>(&self) -> Result<Bound<C>> {
        found(self.slots.get::<C>().first(), None)
    }

    /// First registered provider of `C` that is a `kind` device
    pub fn resolve_on<C: Capability>(&self, kind: DeviceKind) -> Result<Bound<C>> {
        found(self.slots.get::<C>().on(kind), Some(kind))
    }

    /// Number of registered devices providing `C`
    pub fn providers<C: Capability>(&self) -> usize {
        self.slots.kinds(C::ID).len()
    }

    /// Capabilities that neither [`resolve`](Self::resolve) nor
    /// [`resolve_on`](Self::resolve_on) can reach, because an earlier device of
    /// the same kind already provides them
    pub fn shadowed(&self) -> Vec<(DeviceKind, CapabilityId)> {
        let mut shadowed = Vec::new();

        for capability in CapabilityId::ALL {
            let kinds = self.slots.kinds(capability);

            for (i, kind) in kinds.iter().enumerate() {
                if kinds[..i].contains(kind) {
                    shadowed.push((*kind, capability));
                }
            }
        }

        shadowed
    }

    /// Registered devices, in registration order
    pub fn devices(&self) -> &[Registered] {
        &self.devices
    }

    pub fn len(&self) -> usize {
        self.devices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }
}
