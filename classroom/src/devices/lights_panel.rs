use classroom_common::{DeviceKind, DeviceState};

use super::{Binder, Device};
use crate::{
    Shared,
    capabilities::{Brightness, BrightnessControl, Power, PowerControl},
};

pub const MAX_BRIGHTNESS: u8 = 100;

#[derive(Debug, Default)]
pub struct LightsPanel {
    on: bool,
    brightness: u8,
}

impl LightsPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_on(&self) -> bool {
        self.on
    }

    pub fn brightness(&self) -> u8 {
        self.brightness
    }
}

impl BrightnessControl for LightsPanel {
    fn set_brightness(&mut self, level: u8) -> u8 {
        if level > MAX_BRIGHTNESS {
            tracing::warn!(level, max = MAX_BRIGHTNESS, "Brightness out of range, clamping");
        }

        self.brightness = level.min(MAX_BRIGHTNESS);
        self.on = self.brightness > 0;

        tracing::info!(level = self.brightness, "Lights brightness set");
        self.brightness
    }
}

impl PowerControl for LightsPanel {
    fn power_on(&mut self) {
        self.on = true;
        tracing::info!("Lights on");
    }

    fn power_off(&mut self) {
        self.on = false;
        tracing::info!("Lights off");
    }
}

impl Device for LightsPanel {
    fn kind(&self) -> DeviceKind {
        DeviceKind::LightsPanel
    }

    fn state(&self) -> DeviceState {
        DeviceState::LightsPanel { on: self.on, brightness: self.brightness }
    }

    fn install(device: &Shared<Self>, binder: &mut Binder<'_>) {
        let brightness: Shared<dyn BrightnessControl> = device.clone();
        let power: Shared<dyn PowerControl> = device.clone();

        binder
            .provide::<Brightness>(brightness)
            .provide::<Power>(power);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brightness_is_clamped() {
        let mut lights = LightsPanel::new();

        assert_eq!(lights.set_brightness(60), 60);
        assert_eq!(lights.brightness(), 60);
        assert!(lights.is_on());

        assert_eq!(lights.set_brightness(250), MAX_BRIGHTNESS);
        assert_eq!(lights.brightness(), MAX_BRIGHTNESS);

        lights.set_brightness(0);
        assert!(!lights.is_on());
    }

    #[test]
    fn power_off_keeps_level() {
        let mut lights = LightsPanel::new();
        lights.set_brightness(40);
        lights.power_off();

        assert_eq!(lights.state(), DeviceState::LightsPanel { on: false, brightness: 40 });
    }
}
