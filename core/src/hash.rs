use sha2::{Digest, Sha256};

use crate::constants::N_PLAYERS;
use crate::input::PadState;
use crate::step::GameState;
use crate::types::Rect;

fn update_rect(hasher: &mut Sha256, rect: &Rect) {
    hasher.update(rect.x.to_le_bytes());
    hasher.update(rect.y.to_le_bytes());
    hasher.update(rect.width.to_le_bytes());
    hasher.update(rect.height.to_le_bytes());
}

/// SHA-256 of the recorded pad snapshots.
pub fn hash_frames(frames: &[[PadState; N_PLAYERS]]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    for frame in frames {
        for pad in frame {
            hasher.update([pad.connected as u8]);
            hasher.update(pad.left_x.to_le_bytes());
            hasher.update(pad.left_y.to_le_bytes());
            hasher.update(pad.buttons.to_le_bytes());
        }
    }
    hasher.finalize().into()
}

/// SHA-256 of everything a frame can observe about the players.
pub fn hash_state(state: &GameState) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(state.frame.to_le_bytes());
    for p in &state.players {
        hasher.update([p.ready as u8, p.facing as u8, p.shot as u8]);
        hasher.update((p.id as u32).to_le_bytes());
        update_rect(&mut hasher, &p.hitbox);
        hasher.update(p.shoot_timer.to_le_bytes());
        hasher.update([p.fire_button.map_or(0xFF, |b| b as u8)]);
        update_rect(&mut hasher, &p.bullet.hitbox);
        hasher.update(p.bullet.age.to_le_bytes());
        hasher.update([p.bullet.active as u8]);
    }
    hasher.finalize().into()
}
