use serde::{Deserialize, Serialize};

use crate::constants::N_PLAYERS;
use crate::input::{Canvas, InputSource};
use crate::types::*;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub frame: Frame,
    /// Index = player id.
    pub players: [Player; N_PLAYERS],
}

/// Advance every player one frame, in ascending id order.
///
/// Readiness is refreshed before each update so a pad plugged in mid-game
/// starts drawing on the same frame.
pub fn step_mut(state: &mut GameState, input: &impl InputSource, config: &GameConfig) {
    for player in state.players.iter_mut() {
        let ready = input.is_device_ready(player.id);
        if ready != player.ready {
            tracing::info!(player = player.id, ready, "device readiness changed");
        }
        player.ready = ready;
        player.update(input, config);
    }
    state.frame = state.frame.wrapping_add(1);
}

/// Issue this frame's draw calls, in ascending id order.
pub fn draw_frame(state: &GameState, canvas: &mut impl Canvas) {
    for player in &state.players {
        player.draw(canvas);
    }
}
