pub mod config;
pub mod constants;
pub mod controllers;
pub mod hash;
pub mod init;
pub mod input;
pub mod player;
pub mod projectiles;
pub mod recording;
pub mod step;
pub mod types;

pub use config::{default_config, ConfigError};
pub use constants::*;
pub use controllers::{resolve_fire_button, KNOWN_CONTROLLERS};
pub use hash::*;
pub use init::*;
pub use input::{Canvas, DrawList, FrameInput, InputSource, PadState, NULL_PAD};
pub use player::{infer_facing, player_color};
pub use projectiles::{bullet_expiry, idle_bullet_box, is_out_of_bounds, move_bullet, Expiry};
pub use recording::{Recording, RecordingError};
pub use step::{draw_frame, step_mut, GameState};
pub use types::*;
