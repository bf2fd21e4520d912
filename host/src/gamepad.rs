//! Live gamepad input through gilrs, snapshotted once per frame.

use std::collections::HashMap;
use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::{anyhow, Context, Result};
use gilrs::{Axis, Button, GamepadId, Gilrs};
use padarena_core::*;

fn gilrs_button(button: PadButton) -> Button {
    match button {
        PadButton::RightFaceDown => Button::South,
        PadButton::RightFaceRight => Button::East,
        PadButton::RightFaceLeft => Button::West,
        PadButton::RightFaceUp => Button::North,
        PadButton::Start => Button::Start,
        PadButton::Select => Button::Select,
    }
}

/// Up to four gamepads assigned to player slots in connection order.
pub struct GamepadSlots {
    gilrs: Gilrs,
    slots: HashMap<GamepadId, PlayerId>,
    names: [Option<String>; N_PLAYERS],
    pads: [PadState; N_PLAYERS],
}

impl GamepadSlots {
    pub fn new() -> Result<Self> {
        let gilrs = Gilrs::new().map_err(|e| anyhow!("failed to initialize gamepad support: {e}"))?;
        let mut this = Self {
            gilrs,
            slots: HashMap::new(),
            names: Default::default(),
            pads: [NULL_PAD; N_PLAYERS],
        };

        let present: Vec<GamepadId> = this
            .gilrs
            .gamepads()
            .filter(|(_, pad)| pad.is_connected())
            .map(|(id, _)| id)
            .collect();
        for id in present {
            this.assign(id);
        }
        this.refresh();
        Ok(this)
    }

    fn assign(&mut self, id: GamepadId) {
        if self.slots.contains_key(&id) {
            return;
        }
        let free_slot = (0..N_PLAYERS).find(|slot| !self.slots.values().any(|s| s == slot));
        match free_slot {
            Some(slot) => {
                let name = self.gilrs.gamepad(id).name().to_string();
                tracing::info!("Gamepad {} ({}) connected as player {}", id, name, slot);
                self.slots.insert(id, slot);
                self.names[slot] = Some(name);
            }
            None => tracing::warn!("Gamepad {} connected but no free player slots", id),
        }
    }

    /// Drain pending events and re-read every assigned pad.
    pub fn poll(&mut self) {
        while let Some(event) = self.gilrs.next_event() {
            match event.event {
                gilrs::EventType::Connected => self.assign(event.id),
                gilrs::EventType::Disconnected => {
                    if let Some(slot) = self.slots.remove(&event.id) {
                        tracing::info!("Gamepad {} (player {}) disconnected", event.id, slot);
                    }
                }
                _ => {}
            }
        }
        self.refresh();
    }

    fn refresh(&mut self) {
        self.pads = [NULL_PAD; N_PLAYERS];
        for (&id, &slot) in &self.slots {
            let gamepad = self.gilrs.gamepad(id);
            let buttons = PadButton::ALL
                .iter()
                .filter(|&&b| gamepad.is_pressed(gilrs_button(b)))
                .fold(0u16, |mask, &b| mask | b.mask());
            self.pads[slot] = PadState {
                connected: gamepad.is_connected(),
                left_x: gamepad.value(Axis::LeftStickX),
                // gilrs reports up as positive; flip to screen-down positive
                left_y: -gamepad.value(Axis::LeftStickY),
                buttons,
            };
        }
    }

    /// Names of the devices that held each slot when the session started.
    pub fn names(&self) -> &[Option<String>; N_PLAYERS] {
        &self.names
    }

    pub fn pads(&self) -> &[PadState; N_PLAYERS] {
        &self.pads
    }

    pub fn frame(&self) -> FrameInput<'_> {
        FrameInput::new(&self.names, &self.pads)
    }
}

/// Run the simulation against live pads for `frames` frames and save what
/// was polled so the session can be replayed.
pub fn record(frames: u32, fps: u32, config: GameConfig, output: &Path) -> Result<()> {
    let frame_time = Duration::from_secs_f64(1.0 / fps.max(1) as f64);
    let mut pads = GamepadSlots::new()?;

    // Device names are only consulted at creation, so freeze them now
    let device_names = pads.names().clone();
    let mut recording = Recording::new(config.clone(), device_names.clone());
    let mut state = create_initial_state(&pads.frame(), &config);
    let mut canvas = DrawList::new();

    tracing::info!("Recording {} frames at {} fps", frames, fps);
    for _ in 0..frames {
        let started = Instant::now();

        pads.poll();
        let snapshot = *pads.pads();
        recording.push(snapshot);
        step_mut(&mut state, &FrameInput::new(&device_names, &snapshot), &config);

        canvas.clear();
        draw_frame(&state, &mut canvas);
        for cmd in &canvas.commands {
            tracing::trace!(frame = state.frame, rect = ?cmd.rect, color = ?cmd.color, "draw");
        }

        if let Some(rest) = frame_time.checked_sub(started.elapsed()) {
            std::thread::sleep(rest);
        }
    }

    recording
        .save(output)
        .with_context(|| format!("failed to write recording {}", output.display()))?;
    tracing::info!(
        "Recording written to {} (state hash {})",
        output.display(),
        hex::encode(hash_state(&state))
    );
    Ok(())
}
