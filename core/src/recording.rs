use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;
use crate::constants::N_PLAYERS;
use crate::init::create_initial_state;
use crate::input::{FrameInput, PadState, NULL_PAD};
use crate::step::{step_mut, GameState};
use crate::types::GameConfig;

const ABSENT: [PadState; N_PLAYERS] = [NULL_PAD; N_PLAYERS];

#[derive(Debug, thiserror::Error)]
pub enum RecordingError {
    #[error("failed to read or write recording: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed recording JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("recording has an invalid config: {0}")]
    Config(#[from] ConfigError),
}

/// Everything needed to replay a session deterministically.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Recording {
    #[serde(default)]
    pub config: GameConfig,
    /// Name each slot's device reported when the session started.
    pub device_names: [Option<String>; N_PLAYERS],
    /// One entry per frame; index = player id.
    pub frames: Vec<[PadState; N_PLAYERS]>,
}

impl Recording {
    pub fn new(config: GameConfig, device_names: [Option<String>; N_PLAYERS]) -> Self {
        Recording {
            config,
            device_names,
            frames: Vec::new(),
        }
    }

    pub fn push(&mut self, pads: [PadState; N_PLAYERS]) {
        self.frames.push(pads);
    }

    pub fn from_json(json: &str) -> Result<Self, RecordingError> {
        let recording: Recording = serde_json::from_str(json)?;
        recording.config.validate()?;
        Ok(recording)
    }

    pub fn to_json(&self) -> Result<String, RecordingError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, RecordingError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), RecordingError> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Replay every frame and return the final state.
    pub fn replay(&self) -> GameState {
        self.replay_with(|_| {})
    }

    /// Replay every frame, handing each post-step state to `on_frame`.
    ///
    /// Players are created from the first frame's pads, the way a live
    /// session creates them from whatever is plugged in at startup.
    pub fn replay_with(&self, mut on_frame: impl FnMut(&GameState)) -> GameState {
        let first = self.frames.first().unwrap_or(&ABSENT);
        let mut state =
            create_initial_state(&FrameInput::new(&self.device_names, first), &self.config);
        for pads in &self.frames {
            step_mut(&mut state, &FrameInput::new(&self.device_names, pads), &self.config);
            on_frame(&state);
        }
        state
    }
}
