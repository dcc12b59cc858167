//! Something with an adjustable light output

capability! {
    pub struct Brightness: dyn BrightnessControl, id = BrightnessControl, slot = brightness;
}

pub trait BrightnessControl {
    /// Level is a percentage, 0-100. Returns the level actually applied.
    fn set_brightness(&mut self, level: u8) -> u8;
}
