//! Capability contract with the graphics/input backend, plus the snapshot
//! types used to record and replay it.

use serde::{Deserialize, Serialize};

use crate::constants::N_PLAYERS;
use crate::types::{Axis, Color, DrawCommand, PadButton, PlayerId, Rect};

/// Per-frame gamepad queries. Absent devices must read as zero axes and no
/// buttons held, never as an error.
pub trait InputSource {
    fn is_device_ready(&self, id: PlayerId) -> bool;
    fn axis(&self, id: PlayerId, axis: Axis) -> f32;
    fn is_button_down(&self, id: PlayerId, button: PadButton) -> bool;
    /// Only consulted when a player is created.
    fn device_name(&self, id: PlayerId) -> Option<&str>;
}

/// Immediate-mode rectangle sink.
pub trait Canvas {
    fn draw_rect(&mut self, rect: Rect, color: Color);
}

// ── Snapshots ───────────────────────────────────────────────

/// One device's state for one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PadState {
    pub connected: bool,
    pub left_x: f32,
    pub left_y: f32,
    /// Bitmask of `PadButton::mask` values.
    pub buttons: u16,
}

pub const NULL_PAD: PadState = PadState {
    connected: false,
    left_x: 0.0,
    left_y: 0.0,
    buttons: 0,
};

impl PadState {
    /// A connected pad at rest.
    pub const fn idle() -> Self {
        PadState {
            connected: true,
            left_x: 0.0,
            left_y: 0.0,
            buttons: 0,
        }
    }

    pub fn with_stick(self, left_x: f32, left_y: f32) -> Self {
        PadState { left_x, left_y, ..self }
    }

    pub fn with_button(self, button: PadButton) -> Self {
        PadState {
            buttons: self.buttons | button.mask(),
            ..self
        }
    }

    pub fn is_down(&self, button: PadButton) -> bool {
        self.buttons & button.mask() != 0
    }
}

/// Borrowed view of one frame of recorded input for all four slots.
#[derive(Clone, Copy, Debug)]
pub struct FrameInput<'a> {
    pub names: &'a [Option<String>; N_PLAYERS],
    pub pads: &'a [PadState; N_PLAYERS],
}

impl<'a> FrameInput<'a> {
    pub fn new(names: &'a [Option<String>; N_PLAYERS], pads: &'a [PadState; N_PLAYERS]) -> Self {
        FrameInput { names, pads }
    }

    fn pad(&self, id: PlayerId) -> &PadState {
        match self.pads.get(id) {
            Some(pad) if pad.connected => pad,
            _ => &NULL_PAD,
        }
    }
}

impl InputSource for FrameInput<'_> {
    fn is_device_ready(&self, id: PlayerId) -> bool {
        self.pad(id).connected
    }

    fn axis(&self, id: PlayerId, axis: Axis) -> f32 {
        let pad = self.pad(id);
        match axis {
            Axis::LeftX => pad.left_x,
            Axis::LeftY => pad.left_y,
        }
    }

    fn is_button_down(&self, id: PlayerId, button: PadButton) -> bool {
        self.pad(id).is_down(button)
    }

    fn device_name(&self, id: PlayerId) -> Option<&str> {
        self.names.get(id).and_then(|name| name.as_deref())
    }
}

// ── Draw capture ────────────────────────────────────────────

/// Canvas that records draw calls in order instead of rasterizing them.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Canvas for DrawList {
    fn draw_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand { rect, color });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names() -> [Option<String>; N_PLAYERS] {
        [Some("Xbox 360 Controller".to_string()), None, None, None]
    }

    #[test]
    fn disconnected_pad_reads_as_zero() {
        let names = names();
        let pads = [
            PadState {
                connected: false,
                left_x: 0.7,
                left_y: -0.3,
                buttons: PadButton::RightFaceDown.mask(),
            },
            NULL_PAD,
            NULL_PAD,
            NULL_PAD,
        ];
        let input = FrameInput::new(&names, &pads);
        assert!(!input.is_device_ready(0));
        assert_eq!(input.axis(0, Axis::LeftX), 0.0);
        assert_eq!(input.axis(0, Axis::LeftY), 0.0);
        assert!(!input.is_button_down(0, PadButton::RightFaceDown));
        // Name lookup is independent of connection state
        assert_eq!(input.device_name(0), Some("Xbox 360 Controller"));
    }

    #[test]
    fn connected_pad_reports_state() {
        let names = names();
        let pads = [
            PadState::idle()
                .with_stick(0.5, -1.0)
                .with_button(PadButton::RightFaceRight),
            NULL_PAD,
            NULL_PAD,
            NULL_PAD,
        ];
        let input = FrameInput::new(&names, &pads);
        assert!(input.is_device_ready(0));
        assert_eq!(input.axis(0, Axis::LeftX), 0.5);
        assert_eq!(input.axis(0, Axis::LeftY), -1.0);
        assert!(input.is_button_down(0, PadButton::RightFaceRight));
        assert!(!input.is_button_down(0, PadButton::RightFaceDown));
    }

    #[test]
    fn out_of_range_id_is_absent() {
        let names = names();
        let pads = [PadState::idle(); N_PLAYERS];
        let input = FrameInput::new(&names, &pads);
        assert!(!input.is_device_ready(7));
        assert_eq!(input.axis(7, Axis::LeftX), 0.0);
        assert_eq!(input.device_name(7), None);
    }

    #[test]
    fn draw_list_keeps_call_order() {
        let mut list = DrawList::new();
        list.draw_rect(Rect::square(0.0, 0.0, 64.0), Color::Red);
        list.draw_rect(Rect::square(10.0, 10.0, 32.0), Color::Green);
        assert_eq!(list.len(), 2);
        assert_eq!(list.commands[0].color, Color::Red);
        assert_eq!(list.commands[1].rect.x, 10.0);
        list.clear();
        assert!(list.is_empty());
    }
}
