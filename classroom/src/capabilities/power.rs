//! Something that can be switched on and off

capability! {
    pub struct Power: dyn PowerControl, id = PowerControl, slot = power;
}

pub trait PowerControl {
    fn power_on(&mut self);
    fn power_off(&mut self);
}
