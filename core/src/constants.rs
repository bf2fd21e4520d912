use crate::types::{Color, PadButton};

// All values are per-frame at 60 Hz unless noted.

pub const N_PLAYERS: usize = 4;

// Movement
pub const P_SPEED: f32 = 5.0;
/// Stick deflection must exceed twice this value to change facing.
pub const TILT_DIR_CHANGE: f32 = 0.2;

// Player hitbox
pub const PLAYER_SIZE: f32 = 64.0;

// Shooting
pub const SHOOTING_COOLDOWN: u32 = 5;
pub const BULLET_DURATION: u32 = 15;
pub const BULLET_SPEED: f32 = 70.0;
pub const BULLET_SPAWN_SIZE: f32 = 16.0;
pub const BULLET_IDLE_SIZE: f32 = 32.0;

// Window
pub const WIN_WIDTH: f32 = 1280.0;
pub const WIN_HEIGHT: f32 = 720.0;

// Frame rate of the live loop
pub const FRAME_RATE: u32 = 60;

// Known controller names, as reported by the device driver
pub const XBOX_LEGACY: &str = "Xbox Controller";
pub const XBOX: &str = "Xbox 360 Controller";
pub const PS3: &str = "Sony PLAYSTATION(R)3 Controller";
pub const NINTENDO: &str = "Nintendo Co., Ltd. Pro Controller";

pub const PLAYER_COLORS: [Color; N_PLAYERS] = [Color::Red, Color::Blue, Color::Yellow, Color::Green];
pub const BULLET_COLOR: Color = Color::Green;

/// Face button the Xbox and PlayStation pads shoot with (A / Cross).
pub const SOUTH_FIRE: PadButton = PadButton::RightFaceDown;
/// Nintendo Pro pads shoot with the east face button (A on that layout).
pub const EAST_FIRE: PadButton = PadButton::RightFaceRight;
