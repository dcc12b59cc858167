//! Something that holds a room at a target temperature

capability! {
    pub struct Temperature: dyn TemperatureControl, id = TemperatureControl, slot = temperature;
}

pub trait TemperatureControl {
    fn set_temperature_c(&mut self, celsius: i32);
}
