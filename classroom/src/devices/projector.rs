use classroom_common::{CompactString, DeviceKind, DeviceState, ToCompactString as _};

use super::{Binder, Device};
use crate::{
    Shared,
    capabilities::{ConnectInput, Input, Power, PowerControl},
};

#[derive(Debug, Default)]
pub struct Projector {
    on: bool,
    input: Option<CompactString>,
}

impl Projector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_on(&self) -> bool {
        self.on
    }

    pub fn input(&self) -> Option<&str> {
        self.input.as_deref()
    }
}

impl PowerControl for Projector {
    fn power_on(&mut self) {
        self.on = true;
        tracing::info!("Projector on");
    }

    fn power_off(&mut self) {
        self.on = false;
        tracing::info!("Projector off");
    }
}

impl ConnectInput for Projector {
    fn connect_input(&mut self, source: &str) {
        tracing::info!(source, "Projector input connected");
        self.input = Some(source.to_compact_string());
    }
}

impl Device for Projector {
    fn kind(&self) -> DeviceKind {
        DeviceKind::Projector
    }

    fn state(&self) -> DeviceState {
        DeviceState::Projector { on: self.on, input: self.input.clone() }
    }

    fn install(device: &Shared<Self>, binder: &mut Binder<'_>) {
        let power: Shared<dyn PowerControl> = device.clone();
        let input: Shared<dyn ConnectInput> = device.clone();

        binder.provide::<Power>(power).provide::<Input>(input);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projector_state() {
        let mut projector = Projector::new();
        assert_eq!(projector.state(), DeviceState::Projector { on: false, input: None });

        projector.power_on();
        projector.connect_input("HDMI-1");
        assert!(projector.is_on());
        assert_eq!(projector.input(), Some("HDMI-1"));

        projector.power_off();
        assert_eq!(
            projector.state(),
            DeviceState::Projector { on: false, input: Some("HDMI-1".into()) }
        );
    }
}
