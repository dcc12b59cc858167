use classroom_common::{DeviceKind, DeviceState};

use super::{Binder, Device};
use crate::{
    Shared,
    capabilities::{Power, PowerControl, Temperature, TemperatureControl},
};

#[derive(Debug, Default)]
pub struct AirConditioner {
    on: bool,
    target_c: Option<i32>,
}

impl AirConditioner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_on(&self) -> bool {
        self.on
    }

    pub fn target_c(&self) -> Option<i32> {
        self.target_c
    }
}

impl TemperatureControl for AirConditioner {
    fn set_temperature_c(&mut self, celsius: i32) {
        self.on = true;
        self.target_c = Some(celsius);
        tracing::info!(celsius, "AC set");
    }
}

impl PowerControl for AirConditioner {
    fn power_on(&mut self) {
        self.on = true;
        tracing::info!("AC on");
    }

    fn power_off(&mut self) {
        self.on = false;
        tracing::info!("AC off");
    }
}

impl Device for AirConditioner {
    fn kind(&self) -> DeviceKind {
        DeviceKind::AirConditioner
    }

    fn state(&self) -> DeviceState {
        DeviceState::AirConditioner { on: self.on, target_c: self.target_c }
    }

    fn install(device: &Shared<Self>, binder: &mut Binder<'_>) {
        let temperature: Shared<dyn TemperatureControl> = device.clone();
        let power: Shared<dyn PowerControl> = device.clone();

        binder
            .provide::<Temperature>(temperature)
            .provide::<Power>(power);
    }
}
