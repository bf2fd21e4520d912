use crate::input::InputSource;
use crate::step::GameState;
use crate::types::*;

/// Create all four players from the devices present right now.
pub fn create_initial_state(input: &impl InputSource, config: &GameConfig) -> GameState {
    GameState {
        frame: 0,
        players: std::array::from_fn(|id| Player::init(id, input, config)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_config;
    use crate::constants::*;
    use crate::input::{FrameInput, PadState, NULL_PAD};

    #[test]
    fn initial_state_correct() {
        let config = default_config();
        let names: [Option<String>; N_PLAYERS] = [
            Some(XBOX.to_string()),
            Some(NINTENDO.to_string()),
            Some("Unknown Pad".to_string()),
            None,
        ];
        let pads = [PadState::idle(), NULL_PAD, PadState::idle(), NULL_PAD];
        let state = create_initial_state(&FrameInput::new(&names, &pads), &config);
        assert_eq!(state.frame, 0);
        for (id, player) in state.players.iter().enumerate() {
            assert_eq!(player.id, id);
            assert_eq!(player.ready, id % 2 == 0);
            assert_eq!(player.hitbox, Rect::new(0.0, 0.0, 64.0, 64.0));
            assert!(!player.bullet.active);
        }
        assert_eq!(state.players[0].fire_button, Some(PadButton::RightFaceDown));
        assert_eq!(state.players[1].fire_button, Some(PadButton::RightFaceRight));
        assert_eq!(state.players[2].fire_button, None);
        assert_eq!(state.players[3].fire_button, None);
    }
}
