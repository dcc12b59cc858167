use core::cell::RefCell;
use std::rc::Rc;

use classroom_common::{CapabilityId, DeviceKind};

pub mod capabilities;
pub mod controller;
pub mod devices;
pub mod log;
pub mod registry;

#[cfg(test)]
pub(crate) mod testing;

pub use classroom_common as common;

pub use self::{
    capabilities::{Bound, Capability},
    controller::{ClassSettings, ClassroomController, Transcript},
    devices::Device,
    registry::Registry,
};

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Single-threaded shared ownership of a device
pub type Shared<T> = Rc<RefCell<T>>;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error(
        "missing capability: {capability}{}",
        .device.map(|kind| format!(" on {kind}")).unwrap_or_default()
    )]
    CapabilityNotFound {
        capability: CapabilityId,
        /// Set when the lookup was restricted to one kind of device
        device: Option<DeviceKind>,
    },
}
