//! Dance pad access through gilrs

use crate::core::error::{JudoError, Result};
use crate::core::types::ButtonSet;
use crate::game::events::Event;
use crate::input::mapping::{pad_index, ButtonMap};
use gilrs::{EventType, Gamepad, GamepadId, Gilrs};
use uuid::Uuid;

/// A connected pad as shown to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceInfo {
    pub name: String,
    pub guid: String,
}

impl DeviceInfo {
    fn from_gamepad(gamepad: &Gamepad<'_>) -> Self {
        Self {
            name: gamepad.name().to_string(),
            guid: Uuid::from_bytes(gamepad.uuid()).simple().to_string(),
        }
    }
}

/// Initialize the gamepad backend
pub fn init() -> Result<Gilrs> {
    Gilrs::new().map_err(|e| JudoError::Input(e.to_string()))
}

/// All connected pads
pub fn list_devices(gilrs: &Gilrs) -> Vec<DeviceInfo> {
    gilrs
        .gamepads()
        .map(|(_, gamepad)| DeviceInfo::from_gamepad(&gamepad))
        .collect()
}

/// The selected pad, translated into game events
pub struct PadInput {
    gilrs: Gilrs,
    active: GamepadId,
    device: DeviceInfo,
    map: ButtonMap,
}

impl PadInput {
    /// Select the pad with `guid`, or the first connected pad
    pub fn open(gilrs: Gilrs, guid: Option<&str>, map: ButtonMap) -> Result<Self> {
        let (active, device) = {
            let mut pads = gilrs
                .gamepads()
                .map(|(id, gamepad)| (id, DeviceInfo::from_gamepad(&gamepad)));

            match guid {
                Some(wanted) => pads
                    .find(|(_, info)| info.guid.eq_ignore_ascii_case(wanted))
                    .ok_or_else(|| JudoError::UnknownDevice(wanted.to_string()))?,
                None => pads.next().ok_or(JudoError::NoInputDevice)?,
            }
        };

        tracing::info!("Using the joystick: {} {}", device.name, device.guid);

        Ok(Self {
            gilrs,
            active,
            device,
            map,
        })
    }

    /// Drain pending pad events
    ///
    /// Every button event of the selected pad yields a `ButtonsChanged` with
    /// the complete set of currently pressed buttons. Other pads are ignored.
    pub fn poll(&mut self) -> Vec<Event> {
        let mut events = Vec::new();

        while let Some(gilrs::Event { id, event, .. }) = self.gilrs.next_event() {
            if id != self.active {
                continue;
            }

            match event {
                EventType::ButtonPressed(..) | EventType::ButtonReleased(..) => {
                    events.push(Event::ButtonsChanged(self.pressed()));
                }
                EventType::Disconnected => {
                    tracing::warn!("Joystick {} disconnected", self.device.name);
                    events.push(Event::ButtonsChanged(ButtonSet::EMPTY));
                }
                EventType::Connected => {
                    tracing::info!("Joystick {} reconnected", self.device.name);
                }
                _ => {}
            }
        }

        events
    }

    /// Buttons currently held on the selected pad
    fn pressed(&self) -> ButtonSet {
        let gamepad = self.gilrs.gamepad(self.active);
        self.map.translate(
            gamepad
                .state()
                .buttons()
                .filter(|(_, data)| data.is_pressed())
                .map(|(code, _)| pad_index(code.into_u32())),
        )
    }
}
