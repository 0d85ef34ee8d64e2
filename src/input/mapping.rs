//! Raw input to abstract buttons

use crate::core::config::PadLayout;
use crate::core::types::{Button, ButtonSet};
use ahash::AHashMap;
use winit::keyboard::{KeyCode, PhysicalKey};

/// First evdev code of the joystick button block (`BTN_JOYSTICK`)
const JOYSTICK_BUTTON_BASE: u32 = 0x120;

/// Convert a raw gamepad button code into a pad button index
///
/// On Linux the raw code carries the evdev event type in the high half and
/// the key code in the low half; joystick buttons start at `BTN_JOYSTICK`.
/// Codes below that block are passed through unchanged.
///
/// Only joystick-class devices (`BTN_TRIGGER`..`BTN_DEAD`, 0x120..=0x12f)
/// land in `0..16`. Pads that report the `BTN_GAMEPAD` block (0x130 and up)
/// get indices from 16 upwards and need a matching `[pad]` layout.
pub fn pad_index(raw_code: u32) -> u32 {
    let code = raw_code & 0xFFFF;
    code.checked_sub(JOYSTICK_BUTTON_BASE).unwrap_or(code)
}

/// Fixed lookup table from pad button index to abstract button
#[derive(Debug, Clone)]
pub struct ButtonMap {
    by_index: AHashMap<u32, Button>,
}

impl ButtonMap {
    pub fn from_layout(layout: &PadLayout) -> Self {
        Self {
            by_index: layout.entries().into_iter().collect(),
        }
    }

    pub fn get(&self, index: u32) -> Option<Button> {
        self.by_index.get(&index).copied()
    }

    /// Abstract buttons for a set of pressed pad indices
    ///
    /// Unmapped indices are ignored.
    pub fn translate<I: IntoIterator<Item = u32>>(&self, pressed: I) -> ButtonSet {
        pressed
            .into_iter()
            .filter_map(|index| {
                let button = self.get(index);
                if button.is_none() {
                    tracing::debug!(
                        "Pad button index {} is not in the [pad] layout, ignoring it",
                        index
                    );
                }
                button
            })
            .collect()
    }
}

impl Default for ButtonMap {
    fn default() -> Self {
        Self::from_layout(&PadLayout::default())
    }
}

/// Escape and `q` leave the game
pub fn is_quit_key(key: PhysicalKey) -> bool {
    matches!(
        key,
        PhysicalKey::Code(KeyCode::Escape) | PhysicalKey::Code(KeyCode::KeyQ)
    )
}
