//! Something that can be pointed at a video source

capability! {
    pub struct Input: dyn ConnectInput, id = ConnectInput, slot = input;
}

pub trait ConnectInput {
    /// Source name as printed on the port, eg. `HDMI-1`
    fn connect_input(&mut self, source: &str);
}
