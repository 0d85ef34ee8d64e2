//! Input translation: dance pad and keyboard to game events

pub mod mapping;
pub mod pad;

pub use mapping::{is_quit_key, pad_index, ButtonMap};
pub use pad::{list_devices, DeviceInfo, PadInput};
